//! CSV export for project calculation results.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::report::ProjectReport;

/// Column header for the CSV result export.
const HEADER: &str = "circuit,load_a,fuse,fuse_rating_a,cross_section_mm2,\
                      voltage_drop_percent,ik_min_a,disconnects,trip_time_s,\
                      thermal_ok";

/// Exports a project report to a CSV file at the given path.
///
/// Writes a header row, one row for the service cable, and one row per
/// group. Produces deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(report: &ProjectReport, path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(report, buf)
}

/// Writes a project report as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(report: &ProjectReport, writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(',').map(str::trim))?;

    let service = &report.service;
    wtr.write_record(&[
        "service".to_string(),
        format!("{:.2}", service.load_a),
        String::new(),
        String::new(),
        size_field(service.chosen_size),
        format!("{:.3}", service.voltage_drop_percent),
        format!("{:.1}", service.ik_min_a),
        String::new(),
        String::new(),
        String::new(),
    ])?;

    for g in &report.groups {
        wtr.write_record(&[
            g.name.clone(),
            format!("{:.2}", g.load_a),
            g.fuse_family.label().to_string(),
            g.fuse_rating_a.to_string(),
            size_field(g.chosen_size),
            format!("{:.3}", g.voltage_drop_percent),
            format!("{:.1}", g.ik_min_a),
            g.disconnects.to_string(),
            g.trip_time_s.map_or(String::new(), |t| format!("{t:.4}")),
            g.thermal
                .as_ref()
                .map_or(String::new(), |t| t.ok.to_string()),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

fn size_field(size: Option<f64>) -> String {
    size.map_or("none".to_string(), |s| format!("{s}"))
}
