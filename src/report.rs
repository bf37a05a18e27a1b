//! Project-level calculation runner and result records.
//!
//! Ties the reference tables, the selector, the fault-current calculator
//! and the device curves together for a whole project config: service
//! cable first, then every group behind it.

use std::fmt;

use crate::calc::selector::Segment;
use crate::calc::short_circuit::ThermalCheck;
use crate::calc::{
    ik_max_service, ik_min_group, ik_min_service, select_cable_size, select_group_cable_size,
    short_circuit, thermal_check, voltage_drop,
};
use crate::config::{GroupConfig, ProjectConfig, SegmentConfig};
use crate::curves::FuseFamily;
use crate::tables::{cable_impedance_per_km, grouping_factor, temperature_factor};
use crate::types::{Impedance, Phase};

/// Results for the service cable.
#[derive(Debug, Clone)]
pub struct ServiceReport {
    /// Chosen cross-section, or `None` when no ladder size fits.
    pub chosen_size: Option<f64>,
    /// Aggregate design current at the service (phasor sum of groups).
    pub load_a: f64,
    /// Power factor of the aggregate load.
    pub load_cos_phi: f64,
    pub voltage_drop_percent: f64,
    /// Minimum fault current at the board (A).
    pub ik_min_a: f64,
    /// Maximum fault current at the board (A).
    pub ik_max_a: f64,
    /// |Z| of the maximum-fault path, for breaking-capacity checks (Ω).
    pub z_max_path_ohm: f64,
}

impl fmt::Display for ServiceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.chosen_size {
            Some(size) => writeln!(f, "service: {size} mm²")?,
            None => writeln!(f, "service: NO SIZE FITS")?,
        }
        writeln!(
            f,
            "  load {:.1} A (cos φ {:.2}), ΔU {:.2} %",
            self.load_a, self.load_cos_phi, self.voltage_drop_percent
        )?;
        write!(
            f,
            "  Ik,min {:.0} A, Ik,max {:.0} A (|Z| {:.4} Ω)",
            self.ik_min_a, self.ik_max_a, self.z_max_path_ohm
        )
    }
}

/// Results for one group circuit.
#[derive(Debug, Clone)]
pub struct GroupReport {
    pub name: String,
    pub load_a: f64,
    pub fuse_family: FuseFamily,
    pub fuse_rating_a: u32,
    /// Chosen cross-section, or `None` when no candidate fits.
    pub chosen_size: Option<f64>,
    /// Cumulative drop over all segments; NaN when no size fit.
    pub voltage_drop_percent: f64,
    /// Minimum fault current at the group tap (A).
    pub ik_min_a: f64,
    /// Whether Ik,min reaches the device's minimum trip current.
    pub disconnects: bool,
    /// Trip time at Ik,min, when the curve covers it.
    pub trip_time_s: Option<f64>,
    /// Thermal withstand verdict, when a size and trip time exist.
    pub thermal: Option<ThermalCheck>,
}

impl GroupReport {
    /// A group passes when a size was found, the device disconnects, and
    /// the cable survives the let-through energy.
    pub fn ok(&self) -> bool {
        self.chosen_size.is_some()
            && self.disconnects
            && self.thermal.as_ref().is_some_and(|t| t.ok)
    }
}

impl fmt::Display for GroupReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.ok() { "OK" } else { "CHECK" };
        match self.chosen_size {
            Some(size) => writeln!(
                f,
                "{}: {} mm², {} {} A  [{verdict}]",
                self.name, size, self.fuse_family, self.fuse_rating_a
            )?,
            None => writeln!(
                f,
                "{}: NO SIZE FITS, {} {} A  [{verdict}]",
                self.name, self.fuse_family, self.fuse_rating_a
            )?,
        }
        writeln!(
            f,
            "  load {:.1} A, ΔU {:.2} %, Ik,min {:.0} A",
            self.load_a, self.voltage_drop_percent, self.ik_min_a
        )?;
        match self.trip_time_s {
            Some(t) if self.disconnects => write!(f, "  trips in {t:.3} s")?,
            _ => write!(f, "  does not reach the trip zone")?,
        }
        if let Some(thermal) = &self.thermal {
            write!(
                f,
                ", k²S² {:.0} A²s vs I²t {:.0} A²s",
                thermal.cable_energy, thermal.let_through
            )?;
        }
        Ok(())
    }
}

/// Full project results.
#[derive(Debug, Clone)]
pub struct ProjectReport {
    pub service: ServiceReport,
    pub groups: Vec<GroupReport>,
}

impl fmt::Display for ProjectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.service)?;
        for group in &self.groups {
            writeln!(f, "{group}")?;
        }
        Ok(())
    }
}

fn nominal_voltage(cfg: &ProjectConfig, phase: Phase) -> f64 {
    match phase {
        Phase::Three => cfg.supply.voltage_v,
        Phase::Single => cfg.supply.phase_voltage_v,
    }
}

fn segment_from_config(seg: &SegmentConfig, group: &GroupConfig) -> Segment {
    let env = crate::calc::selector::environment_from_ref(&seg.ref_method);
    Segment {
        ref_method: seg.ref_method.clone(),
        length_m: seg.length_m,
        loaded_conductors: seg.loaded_conductors,
        kt: temperature_factor(seg.ambient_temp_c, env),
        kgrp: grouping_factor(seg.cables_grouped, &seg.ref_method, group.cable_spacing_m),
        insulation: group.insulation,
    }
}

/// Total series impedance of a group run at a given cross-section.
fn group_path_impedance(group: &GroupConfig, size: f64) -> Impedance {
    group
        .segments
        .iter()
        .map(|seg| {
            cable_impedance_per_km(size, group.material, group.phase, 20.0)
                .scaled(seg.length_m / 1000.0)
        })
        .fold(Impedance::default(), Impedance::series)
}

/// Runs the whole project: sizes the service cable, then sizes and checks
/// every group behind it.
pub fn run_project(cfg: &ProjectConfig) -> ProjectReport {
    let supply = &cfg.supply;
    let service = &cfg.service;

    // Aggregate group loads into the service design current.
    let loads: Vec<(f64, f64)> = cfg.groups.iter().map(|g| (g.load_a, g.cos_phi)).collect();
    let (service_load_a, service_cos_phi) = short_circuit::add_load_currents(&loads);

    let service_env = crate::calc::selector::environment_from_ref(&service.ref_method);
    let service_kt = temperature_factor(service.ambient_temp_c, service_env);
    let service_kgrp = grouping_factor(service.cables_grouped, &service.ref_method, None);
    let service_voltage = nominal_voltage(cfg, service.phase);

    let service_size = select_cable_size(
        service_load_a,
        service.length_m,
        service.max_voltage_drop_percent,
        service_voltage,
        service.cos_phi,
        service.phase,
        service.material,
        service.insulation,
        &service.ref_method,
        service_kt,
        service_kgrp,
        service.loaded_conductors,
    );

    let z_service = service_size.map_or(Impedance::default(), |size| {
        cable_impedance_per_km(size, service.material, service.phase, 20.0)
            .scaled(service.length_m / 1000.0)
    });

    let service_drop = service_size.map_or(f64::NAN, |size| {
        let z = cable_impedance_per_km(size, service.material, service.phase, 20.0);
        voltage_drop(
            service_load_a,
            service.length_m / 1000.0,
            z,
            service.cos_phi,
            service.phase,
            service_voltage,
        )
        .percent
    });

    let service_ik_min =
        ik_min_service(supply.phase_voltage_v, supply.imin_supply_a, z_service);
    let (service_ik_max, z_max_path) = ik_max_service(
        supply.phase_voltage_v,
        supply.ik_trafo_a,
        supply.cos_trafo,
        z_service,
    );

    let service_report = ServiceReport {
        chosen_size: service_size,
        load_a: service_load_a,
        load_cos_phi: service_cos_phi,
        voltage_drop_percent: service_drop,
        ik_min_a: service_ik_min.magnitude,
        ik_max_a: service_ik_max.magnitude,
        z_max_path_ohm: z_max_path,
    };

    let groups = cfg
        .groups
        .iter()
        .map(|group| run_group(cfg, group, z_service))
        .collect();

    ProjectReport {
        service: service_report,
        groups,
    }
}

fn run_group(cfg: &ProjectConfig, group: &GroupConfig, z_service: Impedance) -> GroupReport {
    let supply = &cfg.supply;
    let voltage = nominal_voltage(cfg, group.phase);

    let segments: Vec<Segment> = group
        .segments
        .iter()
        .map(|seg| segment_from_config(seg, group))
        .collect();

    let selection = select_group_cable_size(
        group.load_a,
        voltage,
        group.material,
        group.phase,
        group.cos_phi,
        group.max_voltage_drop_percent,
        group.kj_soil,
        &segments,
    );

    let z_group = selection
        .chosen_size
        .map_or(Impedance::default(), |size| group_path_impedance(group, size));
    let ik_min = ik_min_group(
        supply.phase_voltage_v,
        supply.imin_supply_a,
        z_service,
        z_group,
    );

    let curve = group.fuse_family.curve(group.fuse_rating_a);
    let disconnects = curve
        .as_ref()
        .is_some_and(|c| ik_min.magnitude >= c.min_trip_current());
    let trip_time = curve.as_ref().and_then(|c| c.trip_time(ik_min.magnitude));

    let thermal = match (selection.chosen_size, trip_time, disconnects) {
        (Some(size), Some(t), true) => {
            let k = group.material.thermal_k(group.insulation);
            Some(thermal_check(k, size, ik_min.magnitude, t))
        }
        _ => None,
    };

    GroupReport {
        name: group.name.clone(),
        load_a: group.load_a,
        fuse_family: group.fuse_family,
        fuse_rating_a: group.fuse_rating_a,
        chosen_size: selection.chosen_size,
        voltage_drop_percent: selection.total_voltage_drop_percent,
        ik_min_a: ik_min.magnitude,
        disconnects,
        trip_time_s: trip_time,
        thermal,
    }
}
