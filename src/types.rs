//! Shared domain types: conductor material, insulation, phase mode, and
//! complex impedance.

use std::fmt;

use serde::Deserialize;

/// Conductor material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Material {
    Cu,
    Al,
}

impl Material {
    /// Resistivity at 20 °C in Ω·mm²/m, used as the analytic fallback when a
    /// cross-section is missing from the catalog tables.
    pub fn resistivity_20c(self) -> f64 {
        match self {
            Material::Cu => 0.0175,
            Material::Al => 0.0283,
        }
    }

    /// Temperature coefficient of resistance per kelvin.
    pub fn temp_coefficient(self) -> f64 {
        match self {
            Material::Cu => 0.00393,
            Material::Al => 0.00403,
        }
    }

    /// Resistive constant q for the DS voltage-drop formula (Ω·mm²/m).
    pub fn ds_q(self) -> f64 {
        match self {
            Material::Cu => 0.0225,
            Material::Al => 0.036,
        }
    }

    /// Inductive constant λ for the DS voltage-drop formula (Ω/km per phase).
    pub fn ds_lambda(self) -> f64 {
        match self {
            Material::Cu => 0.08,
            Material::Al => 0.08,
        }
    }

    /// Thermal let-through constant k for the k²S² withstand check.
    pub fn thermal_k(self, insulation: Insulation) -> f64 {
        match (self, insulation) {
            (Material::Cu, Insulation::Xlpe) => 143.0,
            (Material::Cu, Insulation::Pvc) => 115.0,
            (Material::Al, Insulation::Xlpe) => 94.0,
            (Material::Al, Insulation::Pvc) => 76.0,
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Material::Cu => write!(f, "Cu"),
            Material::Al => write!(f, "Al"),
        }
    }
}

/// Cable insulation type. Determines which ampacity table applies and the
/// thermal constant used in the withstand check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Insulation {
    #[serde(rename = "XLPE")]
    Xlpe,
    #[serde(rename = "PVC")]
    Pvc,
}

impl fmt::Display for Insulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Insulation::Xlpe => write!(f, "XLPE"),
            Insulation::Pvc => write!(f, "PVC"),
        }
    }
}

/// Phase mode of a circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Single,
    Three,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Single => write!(f, "1-phase"),
            Phase::Three => write!(f, "3-phase"),
        }
    }
}

/// Thermal environment of an installation, selecting the temperature
/// correction table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Air,
    Ground,
}

/// A complex impedance kept as explicit real and imaginary parts in ohms.
///
/// Impedances are always summed componentwise; magnitude and angle are
/// derived on demand. Keeping (R, X) instead of polar form avoids
/// branch-cut trouble when composing legs of a fault path.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Impedance {
    /// Resistance (real part) in ohms.
    pub r: f64,
    /// Reactance (imaginary part) in ohms.
    pub x: f64,
}

impl Impedance {
    pub fn new(r: f64, x: f64) -> Self {
        Self { r, x }
    }

    /// |Z| = √(R² + X²).
    pub fn magnitude(self) -> f64 {
        (self.r * self.r + self.x * self.x).sqrt()
    }

    /// Impedance angle in degrees.
    pub fn angle_deg(self) -> f64 {
        self.x.atan2(self.r).to_degrees()
    }

    /// Series combination: componentwise sum.
    pub fn series(self, other: Impedance) -> Impedance {
        Impedance::new(self.r + other.r, self.x + other.x)
    }

    /// Scales both components, e.g. Ω/km × km.
    pub fn scaled(self, factor: f64) -> Impedance {
        Impedance::new(self.r * factor, self.x * factor)
    }
}

impl fmt::Display for Impedance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.5} + j{:.5} Ω (|Z|={:.5} ∠{:.2}°)",
            self.r,
            self.x,
            self.magnitude(),
            self.angle_deg()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_is_componentwise_sum() {
        let a = Impedance::new(0.1, 0.02);
        let b = Impedance::new(0.3, 0.05);
        let s = a.series(b);
        assert_eq!(s.r, 0.4);
        assert_eq!(s.x, 0.07);
    }

    #[test]
    fn magnitude_of_3_4_is_5() {
        let z = Impedance::new(3.0, 4.0);
        assert!((z.magnitude() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn angle_of_pure_reactance_is_90() {
        let z = Impedance::new(0.0, 1.0);
        assert!((z.angle_deg() - 90.0).abs() < 1e-12);
    }

    #[test]
    fn thermal_k_matches_material_and_insulation() {
        assert_eq!(Material::Cu.thermal_k(Insulation::Xlpe), 143.0);
        assert_eq!(Material::Al.thermal_k(Insulation::Xlpe), 94.0);
        assert_eq!(Material::Cu.thermal_k(Insulation::Pvc), 115.0);
    }
}
