use pixel_transform::config::transform::{load_config, JobConfig};
use pixel_transform::image::io::{load_image, save_image, write_json_file};
use pixel_transform::image::{ImageView, PixelBuffer, Shape};
use pixel_transform::ops::run_chain;
use serde::Serialize;
use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let input = load_image(&config.input, config.channels)?;
    println!("Loaded {} ({})", config.input.display(), input.shape());

    let mut jobs = Vec::with_capacity(config.jobs.len());
    for job in &config.jobs {
        let report = run_job(&input, job)?;
        println!(
            "Saved {} [{}] in {:.3} ms",
            report.output.display(),
            report.operations.join(" -> "),
            report.latency_ms
        );
        jobs.push(report);
    }

    if let Some(path) = &config.summary_json {
        let summary = RunSummary {
            input: config.input.clone(),
            shape: input.shape(),
            jobs,
        };
        write_json_file(path, &summary)?;
        println!("Saved run summary to {}", path.display());
    }
    Ok(())
}

fn run_job(input: &PixelBuffer, job: &JobConfig) -> Result<JobReport, String> {
    let start = Instant::now();
    let result = run_chain(input, &job.operations)
        .map_err(|e| format!("Failed to transform for {}: {e}", job.output.display()))?;
    let latency_ms = start.elapsed().as_secs_f64() * 1000.0;
    save_image(&result, &job.output)?;

    let (min, max) = value_range(&result);
    Ok(JobReport {
        operations: job.operations.iter().map(|op| op.name().to_string()).collect(),
        output: job.output.clone(),
        latency_ms,
        min_value: min,
        max_value: max,
    })
}

/// Range before encode-time clamping.
fn value_range(buffer: &PixelBuffer) -> (f32, f32) {
    buffer
        .as_slice()
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}

fn usage() -> String {
    "Usage: pixel_transform <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RunSummary {
    input: PathBuf,
    shape: Shape,
    jobs: Vec<JobReport>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JobReport {
    operations: Vec<String>,
    output: PathBuf,
    latency_ms: f64,
    min_value: f32,
    max_value: f32,
}
