//! Cable sizing, voltage drop, short-circuit and protection coordination
//! calculations for Danish low-voltage installations.

pub mod calc;
pub mod config;
pub mod curves;
pub mod io;
pub mod report;
pub mod tables;
pub mod types;
