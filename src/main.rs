//! elcalc entry point — CLI wiring and config-driven project calculation.

use std::path::Path;
use std::process;

use elcalc::config::ProjectConfig;
use elcalc::io::export::export_csv;
use elcalc::report::run_project;

/// Parsed CLI arguments.
struct CliArgs {
    project_path: Option<String>,
    preset: Option<String>,
    csv_out: Option<String>,
}

fn print_help() {
    eprintln!("elcalc — cable sizing and protection coordination calculator");
    eprintln!();
    eprintln!("Usage: elcalc [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --project <path>   Load project from TOML config file");
    eprintln!("  --preset <name>    Use a built-in preset (house, apartment_block)");
    eprintln!("  --out <path>       Export results to CSV");
    eprintln!("  --help             Show this help message");
    eprintln!();
    eprintln!("If no --project or --preset is given, the house preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        project_path: None,
        preset: None,
        csv_out: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--project" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --project requires a path argument");
                    process::exit(1);
                }
                cli.project_path = Some(args[i].clone());
            }
            "--preset" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --preset requires a name argument");
                    process::exit(1);
                }
                cli.preset = Some(args[i].clone());
            }
            "--out" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("error: --out requires a path argument");
                    process::exit(1);
                }
                cli.csv_out = Some(args[i].clone());
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    cli
}

fn main() {
    let cli = parse_args();

    // Load config: --project takes priority, then --preset, then the house default
    let project = if let Some(ref path) = cli.project_path {
        match ProjectConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match ProjectConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        ProjectConfig::house()
    };

    let errors = project.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let report = run_project(&project);
    println!("{report}");

    if let Some(ref out) = cli.csv_out {
        if let Err(e) = export_csv(&report, Path::new(out)) {
            eprintln!("error: cannot write \"{out}\": {e}");
            process::exit(1);
        }
        println!("results written to {out}");
    }

    let all_ok = report.service.chosen_size.is_some() && report.groups.iter().all(|g| g.ok());
    if !all_ok {
        process::exit(2);
    }
}
