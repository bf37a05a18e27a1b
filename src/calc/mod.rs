//! Calculation engines: fault currents, voltage drop, cable selection,
//! earth-fault loops, and load aggregation.

pub mod earth_fault;
pub mod load;
pub mod selector;
pub mod short_circuit;
pub mod voltage_drop;

pub use selector::{select_cable_size, select_group_cable_size, GroupSelection, Segment};
pub use short_circuit::{
    fault_current, ik_max_service, ik_min_group, ik_min_service, thermal_check, FaultCurrent,
    ThermalCheck,
};
pub use voltage_drop::{voltage_drop, voltage_drop_ds, VoltageDrop};
