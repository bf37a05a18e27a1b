//! Static reference data: ampacity tables, correction factors, and cable
//! impedance catalog values.

pub mod ampacity;
pub mod correction;
pub mod impedance;

pub use ampacity::{lookup_iz, KNOWN_METHODS, STANDARD_SIZES};
pub use correction::{grouping_factor, temperature_factor};
pub use impedance::{cable_impedance_per_km, earth_conductor_resistance_per_km};
