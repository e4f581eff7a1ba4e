//! # Boardline CLI Application
//!
//! Terminal front end for the drywall estimating engine.
//!
//! ## Usage
//!
//! ```text
//! estimate_cli                          # interactive single-room demo
//! estimate_cli job.dwj                  # load a job file and print the estimate
//! estimate_cli job.dwj --csv rooms.csv  # also write the per-room CSV
//! estimate_cli job.dwj --txt quote.txt  # also write the summary TXT
//! estimate_cli job.dwj --json           # also dump the estimate as JSON
//! ```

use std::env;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use estimate_core::calculations::{compute, Estimate, RoomSpec};
use estimate_core::catalog::WallHeight;
use estimate_core::errors::EstimateResult;
use estimate_core::export::{per_room_csv, summary_txt};
use estimate_core::file_io::{load_job, write_text};
use estimate_core::job::Job;

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        run_demo();
        return ExitCode::SUCCESS;
    }

    let options = match CliOptions::parse(&args) {
        Some(options) => options,
        None => {
            print_usage();
            return ExitCode::FAILURE;
        }
    };

    match run_job(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
            ExitCode::FAILURE
        }
    }
}

struct CliOptions {
    job_path: PathBuf,
    csv_path: Option<PathBuf>,
    txt_path: Option<PathBuf>,
    dump_json: bool,
}

impl CliOptions {
    fn parse(args: &[String]) -> Option<CliOptions> {
        let mut job_path = None;
        let mut csv_path = None;
        let mut txt_path = None;
        let mut dump_json = false;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--csv" => csv_path = Some(PathBuf::from(iter.next()?)),
                "--txt" => txt_path = Some(PathBuf::from(iter.next()?)),
                "--json" => dump_json = true,
                flag if flag.starts_with("--") => return None,
                path => {
                    if job_path.is_some() {
                        return None;
                    }
                    job_path = Some(PathBuf::from(path));
                }
            }
        }

        Some(CliOptions {
            job_path: job_path?,
            csv_path,
            txt_path,
            dump_json,
        })
    }
}

fn print_usage() {
    eprintln!("Usage: estimate_cli [JOB.dwj] [--csv PATH] [--txt PATH] [--json]");
    eprintln!();
    eprintln!("With no arguments, runs an interactive single-room demo.");
}

fn run_job(options: &CliOptions) -> EstimateResult<()> {
    let job = load_job(&options.job_path)?;

    for warning in job.warnings() {
        eprintln!("Warning: {}", warning);
    }

    let estimate = compute(&job);
    print_estimate(&estimate, &job);

    if options.dump_json {
        println!();
        println!("JSON Output:");
        if let Ok(json) = serde_json::to_string_pretty(&estimate) {
            println!("{}", json);
        }
    }

    if let Some(path) = &options.csv_path {
        write_text(&per_room_csv(&estimate), path)?;
        println!("Wrote per-room CSV to {}", path.display());
    }

    if let Some(path) = &options.txt_path {
        write_text(&summary_txt(&estimate, &job), path)?;
        println!("Wrote summary TXT to {}", path.display());
    }

    Ok(())
}

fn print_estimate(estimate: &Estimate, job: &Job) {
    println!("═══════════════════════════════════════");
    println!("  DRYWALL ESTIMATE");
    if !job.meta.job_id.is_empty() {
        println!("  Job {} - {}", job.meta.job_id, job.meta.client);
    }
    println!("═══════════════════════════════════════");
    println!();
    println!("{}", summary_txt(estimate, job));
    println!();
    println!("═══════════════════════════════════════");
    println!(
        "  TOTAL: ${:.2} (cash ${:.2})",
        estimate.pricing.total_with_tax, estimate.pricing.cash_price
    );
    println!("═══════════════════════════════════════");
}

fn run_demo() {
    println!("Boardline CLI - Drywall Estimator");
    println!("=================================");
    println!();
    println!("No job file given. Running single-room demo...");
    println!();

    let length_ft = prompt_f64("Room length (ft) [10.0]: ", 10.0);
    let width_ft = prompt_f64("Room width (ft) [10.0]: ", 10.0);
    let height_ft = prompt_f64("Wall height (ft) [8.0]: ", WallHeight::default().feet());
    let waste_pct = prompt_f64("Waste % [10.0]: ", 10.0);
    let rate_per_ft2 = prompt_f64("Labour rate ($/ft^2) [0.0]: ", 0.0);

    let mut job = Job::new("", "", "");
    job.settings.waste_pct = waste_pct.clamp(0.0, 50.0);
    job.settings.labour.per_ft2 = rate_per_ft2.max(0.0);
    job.add_room(RoomSpec::new("Demo Room").with_dimensions(
        length_ft.max(0.0),
        width_ft.max(0.0),
        height_ft.max(0.0),
    ));

    let estimate = compute(&job);

    println!();
    print_estimate(&estimate, &job);

    println!();
    println!("JSON Output (for API use):");
    if let Ok(json) = serde_json::to_string_pretty(&estimate) {
        println!("{}", json);
    }
}
