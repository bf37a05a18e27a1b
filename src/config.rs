//! TOML-based project configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::curves::FuseFamily;
use crate::types::{Insulation, Material, Phase};

/// Top-level project configuration parsed from TOML.
///
/// All fields have defaults matching the single-family-house preset. Load
/// from TOML with [`ProjectConfig::from_toml_file`] or use
/// [`ProjectConfig::house`] for the built-in default.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Supply and transformer parameters.
    #[serde(default)]
    pub supply: SupplyConfig,
    /// Service cable parameters.
    #[serde(default)]
    pub service: ServiceConfig,
    /// Final circuits fed from the distribution board.
    #[serde(default)]
    pub groups: Vec<GroupConfig>,
}

/// Supply and transformer parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SupplyConfig {
    /// Nominal line voltage (V).
    pub voltage_v: f64,
    /// Phase-to-neutral voltage (V).
    pub phase_voltage_v: f64,
    /// Guaranteed minimum supply fault current at the origin (A).
    pub imin_supply_a: f64,
    /// Transformer rated fault current (A).
    pub ik_trafo_a: f64,
    /// Transformer impedance power factor (0.0–1.0).
    pub cos_trafo: f64,
}

impl Default for SupplyConfig {
    fn default() -> Self {
        Self {
            voltage_v: 400.0,
            phase_voltage_v: 230.0,
            imin_supply_a: 425.0,
            ik_trafo_a: 16_000.0,
            cos_trafo: 0.3,
        }
    }
}

/// Service cable parameters. The service size is selected by the
/// impedance method against these constraints.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// Conductor material.
    pub material: Material,
    /// Cable insulation.
    pub insulation: Insulation,
    /// Phase mode of the service.
    pub phase: Phase,
    /// Reference installation method (A1, A2, B1, B2, C, D1, D2).
    pub ref_method: String,
    /// Route length (m).
    pub length_m: f64,
    /// Ambient temperature along the route (°C).
    pub ambient_temp_c: f64,
    /// Loaded conductors (2 or 3).
    pub loaded_conductors: u32,
    /// Circuits grouped with the service cable.
    pub cables_grouped: u32,
    /// Design power factor of the aggregate load.
    pub cos_phi: f64,
    /// Voltage-drop budget for the service segment (%).
    pub max_voltage_drop_percent: f64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            material: Material::Al,
            insulation: Insulation::Xlpe,
            phase: Phase::Three,
            ref_method: "D2".to_string(),
            length_m: 18.0,
            ambient_temp_c: 20.0,
            loaded_conductors: 3,
            cables_grouped: 1,
            cos_phi: 0.95,
            max_voltage_drop_percent: 1.0,
        }
    }
}

/// One final circuit.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GroupConfig {
    /// Display name.
    pub name: String,
    /// Design current (A).
    pub load_a: f64,
    /// Design power factor.
    pub cos_phi: f64,
    /// Conductor material.
    pub material: Material,
    /// Cable insulation.
    pub insulation: Insulation,
    /// Phase mode.
    pub phase: Phase,
    /// Protective device family.
    pub fuse_family: FuseFamily,
    /// Protective device rating (A); must exist in the family's ladder.
    pub fuse_rating_a: u32,
    /// Voltage-drop budget over the whole group run (%).
    pub max_voltage_drop_percent: f64,
    /// Soil correction factor applied on buried segments.
    pub kj_soil: f64,
    /// Spacing between buried cables (m), if laid apart.
    pub cable_spacing_m: Option<f64>,
    /// Installation segments from board to load.
    pub segments: Vec<SegmentConfig>,
}

impl Default for GroupConfig {
    fn default() -> Self {
        Self {
            name: "group".to_string(),
            load_a: 13.0,
            cos_phi: 1.0,
            material: Material::Cu,
            insulation: Insulation::Xlpe,
            phase: Phase::Single,
            fuse_family: FuseFamily::McbB,
            fuse_rating_a: 13,
            max_voltage_drop_percent: 4.0,
            kj_soil: 1.0,
            cable_spacing_m: None,
            segments: vec![SegmentConfig::default()],
        }
    }
}

/// One installation segment of a group run.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SegmentConfig {
    /// Reference installation method.
    pub ref_method: String,
    /// Segment length (m).
    pub length_m: f64,
    /// Ambient temperature (°C).
    pub ambient_temp_c: f64,
    /// Loaded conductors (2 or 3).
    pub loaded_conductors: u32,
    /// Circuits grouped along this segment.
    pub cables_grouped: u32,
}

impl Default for SegmentConfig {
    fn default() -> Self {
        Self {
            ref_method: "C".to_string(),
            length_m: 15.0,
            ambient_temp_c: 30.0,
            loaded_conductors: 2,
            cables_grouped: 1,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"supply.voltage_v"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {} — {}", self.field, self.message)
    }
}

const REF_METHODS: &[&str] = &["A1", "A2", "B1", "B2", "C", "D1", "D2"];

impl ProjectConfig {
    /// Returns the single-family-house preset: buried aluminium service,
    /// a handful of copper final circuits on MCBs.
    pub fn house() -> Self {
        Self {
            supply: SupplyConfig::default(),
            service: ServiceConfig::default(),
            groups: vec![
                GroupConfig {
                    name: "lys stue".to_string(),
                    load_a: 10.0,
                    fuse_rating_a: 10,
                    segments: vec![SegmentConfig {
                        length_m: 22.0,
                        ..SegmentConfig::default()
                    }],
                    ..GroupConfig::default()
                },
                GroupConfig {
                    name: "stik køkken".to_string(),
                    load_a: 13.0,
                    fuse_rating_a: 13,
                    segments: vec![SegmentConfig {
                        ref_method: "B1".to_string(),
                        length_m: 12.0,
                        ..SegmentConfig::default()
                    }],
                    ..GroupConfig::default()
                },
                GroupConfig {
                    name: "komfur".to_string(),
                    load_a: 16.0,
                    phase: Phase::Three,
                    fuse_family: FuseFamily::McbC,
                    fuse_rating_a: 16,
                    segments: vec![SegmentConfig {
                        length_m: 9.0,
                        loaded_conductors: 3,
                        ..SegmentConfig::default()
                    }],
                    ..GroupConfig::default()
                },
            ],
        }
    }

    /// Returns the apartment-block preset: larger service on NH fuses and
    /// a buried riser feed.
    pub fn apartment_block() -> Self {
        Self {
            supply: SupplyConfig {
                imin_supply_a: 1000.0,
                ik_trafo_a: 25_000.0,
                ..SupplyConfig::default()
            },
            service: ServiceConfig {
                material: Material::Al,
                length_m: 45.0,
                cos_phi: 0.9,
                ..ServiceConfig::default()
            },
            groups: vec![
                GroupConfig {
                    name: "opgang A måler 1".to_string(),
                    load_a: 35.0,
                    phase: Phase::Three,
                    fuse_family: FuseFamily::NeozedGg,
                    fuse_rating_a: 35,
                    segments: vec![
                        SegmentConfig {
                            ref_method: "D1".to_string(),
                            length_m: 14.0,
                            ambient_temp_c: 20.0,
                            loaded_conductors: 3,
                            cables_grouped: 4,
                        },
                        SegmentConfig {
                            ref_method: "B2".to_string(),
                            length_m: 26.0,
                            loaded_conductors: 3,
                            cables_grouped: 4,
                            ..SegmentConfig::default()
                        },
                    ],
                    ..GroupConfig::default()
                },
                GroupConfig {
                    name: "fælles kælder".to_string(),
                    load_a: 20.0,
                    phase: Phase::Three,
                    fuse_family: FuseFamily::DiazedGg,
                    fuse_rating_a: 20,
                    segments: vec![SegmentConfig {
                        ref_method: "C".to_string(),
                        length_m: 30.0,
                        loaded_conductors: 3,
                        ..SegmentConfig::default()
                    }],
                    ..GroupConfig::default()
                },
            ],
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["house", "apartment_block"];

    /// Loads a project from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "house" => Ok(Self::house()),
            "apartment_block" => Ok(Self::apartment_block()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a project from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "project".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a project from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        let s = &self.supply;

        if s.voltage_v <= 0.0 {
            errors.push(ConfigError {
                field: "supply.voltage_v".into(),
                message: "must be > 0".into(),
            });
        }
        if s.phase_voltage_v <= 0.0 {
            errors.push(ConfigError {
                field: "supply.phase_voltage_v".into(),
                message: "must be > 0".into(),
            });
        }
        if s.imin_supply_a <= 0.0 {
            errors.push(ConfigError {
                field: "supply.imin_supply_a".into(),
                message: "must be > 0".into(),
            });
        }
        if s.ik_trafo_a <= 0.0 {
            errors.push(ConfigError {
                field: "supply.ik_trafo_a".into(),
                message: "must be > 0".into(),
            });
        }
        if !(0.0..=1.0).contains(&s.cos_trafo) {
            errors.push(ConfigError {
                field: "supply.cos_trafo".into(),
                message: "must be in [0.0, 1.0]".into(),
            });
        }

        let sv = &self.service;
        if !REF_METHODS.contains(&sv.ref_method.as_str()) {
            errors.push(ConfigError {
                field: "service.ref_method".into(),
                message: format!(
                    "must be one of {}, got \"{}\"",
                    REF_METHODS.join(", "),
                    sv.ref_method
                ),
            });
        }
        if sv.length_m <= 0.0 {
            errors.push(ConfigError {
                field: "service.length_m".into(),
                message: "must be > 0".into(),
            });
        }
        if sv.loaded_conductors != 2 && sv.loaded_conductors != 3 {
            errors.push(ConfigError {
                field: "service.loaded_conductors".into(),
                message: "must be 2 or 3".into(),
            });
        }
        if !(0.0..=1.0).contains(&sv.cos_phi) || sv.cos_phi == 0.0 {
            errors.push(ConfigError {
                field: "service.cos_phi".into(),
                message: "must be in (0.0, 1.0]".into(),
            });
        }
        if sv.max_voltage_drop_percent <= 0.0 {
            errors.push(ConfigError {
                field: "service.max_voltage_drop_percent".into(),
                message: "must be > 0".into(),
            });
        }

        if self.groups.is_empty() {
            errors.push(ConfigError {
                field: "groups".into(),
                message: "at least one group is required".into(),
            });
        }

        for (gi, g) in self.groups.iter().enumerate() {
            let path = |field: &str| format!("groups[{gi}].{field}");

            if g.load_a <= 0.0 {
                errors.push(ConfigError {
                    field: path("load_a"),
                    message: "must be > 0".into(),
                });
            }
            if !(0.0..=1.0).contains(&g.cos_phi) || g.cos_phi == 0.0 {
                errors.push(ConfigError {
                    field: path("cos_phi"),
                    message: "must be in (0.0, 1.0]".into(),
                });
            }
            if !g.fuse_family.ratings().contains(&g.fuse_rating_a) {
                errors.push(ConfigError {
                    field: path("fuse_rating_a"),
                    message: format!(
                        "{} A is not a {} rating, available: {:?}",
                        g.fuse_rating_a,
                        g.fuse_family,
                        g.fuse_family.ratings()
                    ),
                });
            }
            if g.kj_soil <= 0.0 || g.kj_soil > 1.0 {
                errors.push(ConfigError {
                    field: path("kj_soil"),
                    message: "must be in (0.0, 1.0]".into(),
                });
            }
            if g.segments.is_empty() {
                errors.push(ConfigError {
                    field: path("segments"),
                    message: "at least one segment is required".into(),
                });
            }
            for (si, seg) in g.segments.iter().enumerate() {
                let seg_path = |field: &str| format!("groups[{gi}].segments[{si}].{field}");
                if !REF_METHODS.contains(&seg.ref_method.as_str()) {
                    errors.push(ConfigError {
                        field: seg_path("ref_method"),
                        message: format!(
                            "must be one of {}, got \"{}\"",
                            REF_METHODS.join(", "),
                            seg.ref_method
                        ),
                    });
                }
                if seg.length_m <= 0.0 {
                    errors.push(ConfigError {
                        field: seg_path("length_m"),
                        message: "must be > 0".into(),
                    });
                }
                if seg.loaded_conductors != 2 && seg.loaded_conductors != 3 {
                    errors.push(ConfigError {
                        field: seg_path("loaded_conductors"),
                        message: "must be 2 or 3".into(),
                    });
                }
            }
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn house_preset_valid() {
        let cfg = ProjectConfig::house();
        let errors = cfg.validate();
        assert!(errors.is_empty(), "house should be valid: {errors:?}");
    }

    #[test]
    fn from_preset_unknown() {
        let err = ProjectConfig::from_preset("nonexistent");
        assert!(err.is_err());
        let e = err.unwrap_err();
        assert!(e.message.contains("unknown preset"));
    }

    #[test]
    fn all_presets_are_valid() {
        for name in ProjectConfig::PRESETS {
            let cfg = ProjectConfig::from_preset(name);
            assert!(cfg.is_ok(), "preset \"{name}\" should load");
            let errors = cfg.as_ref().map(|c| c.validate()).unwrap_or_default();
            assert!(
                errors.is_empty(),
                "preset \"{name}\" should be valid: {errors:?}"
            );
        }
    }

    #[test]
    fn valid_toml_parses() {
        let toml = r#"
[supply]
voltage_v = 400.0
phase_voltage_v = 230.0
imin_supply_a = 500.0
ik_trafo_a = 20000.0
cos_trafo = 0.3

[service]
material = "Cu"
insulation = "PVC"
phase = "three"
ref_method = "C"
length_m = 25.0
ambient_temp_c = 25.0
loaded_conductors = 3
cables_grouped = 1
cos_phi = 0.95
max_voltage_drop_percent = 1.0

[[groups]]
name = "garage"
load_a = 16.0
cos_phi = 1.0
material = "Cu"
insulation = "XLPE"
phase = "single"
fuse_family = "diazed-gg"
fuse_rating_a = 16
max_voltage_drop_percent = 4.0
kj_soil = 0.9

[[groups.segments]]
ref_method = "D2"
length_m = 35.0
ambient_temp_c = 20.0
loaded_conductors = 2
cables_grouped = 2
"#;
        let cfg = ProjectConfig::from_toml_str(toml);
        assert!(cfg.is_ok(), "valid TOML should parse: {:?}", cfg.err());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().map(|c| c.service.ref_method.as_str()), Some("C"));
        assert_eq!(cfg.as_ref().map(|c| c.groups.len()), Some(1));
        assert_eq!(
            cfg.as_ref().map(|c| c.groups[0].fuse_family),
            Some(FuseFamily::DiazedGg)
        );
    }

    #[test]
    fn invalid_toml_unknown_field() {
        let toml = r#"
[supply]
voltage_v = 400.0
bogus_field = true
"#;
        let result = ProjectConfig::from_toml_str(toml);
        assert!(result.is_err());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let toml = r#"
[supply]
imin_supply_a = 800.0
"#;
        let cfg = ProjectConfig::from_toml_str(toml);
        assert!(cfg.is_ok());
        let cfg = cfg.ok();
        assert_eq!(cfg.as_ref().map(|c| c.supply.imin_supply_a), Some(800.0));
        // voltage kept default
        assert_eq!(cfg.as_ref().map(|c| c.supply.voltage_v), Some(400.0));
        // service kept default
        assert_eq!(cfg.as_ref().map(|c| c.service.length_m), Some(18.0));
    }

    #[test]
    fn validation_catches_bad_ref_method() {
        let mut cfg = ProjectConfig::house();
        cfg.service.ref_method = "E9".to_string();
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "service.ref_method"));
    }

    #[test]
    fn validation_catches_off_ladder_fuse_rating() {
        let mut cfg = ProjectConfig::house();
        cfg.groups[0].fuse_family = FuseFamily::McbB;
        cfg.groups[0].fuse_rating_a = 35;
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "groups[0].fuse_rating_a"));
    }

    #[test]
    fn validation_catches_empty_groups() {
        let mut cfg = ProjectConfig::house();
        cfg.groups.clear();
        let errors = cfg.validate();
        assert!(errors.iter().any(|e| e.field == "groups"));
    }

    #[test]
    fn validation_catches_bad_segment() {
        let mut cfg = ProjectConfig::house();
        cfg.groups[1].segments[0].length_m = 0.0;
        cfg.groups[1].segments[0].loaded_conductors = 5;
        let errors = cfg.validate();
        assert!(errors
            .iter()
            .any(|e| e.field == "groups[1].segments[0].length_m"));
        assert!(errors
            .iter()
            .any(|e| e.field == "groups[1].segments[0].loaded_conductors"));
    }

    #[test]
    fn apartment_block_has_stronger_supply() {
        let house = ProjectConfig::house();
        let block = ProjectConfig::apartment_block();
        assert!(block.supply.imin_supply_a > house.supply.imin_supply_a);
        assert!(block.supply.ik_trafo_a > house.supply.ik_trafo_a);
    }
}
