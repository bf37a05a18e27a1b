//! File output: CSV result export.

pub mod export;
