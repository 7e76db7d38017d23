use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "wgraph workspace automation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the graph benchmarks and write a markdown report
    Bench {
        /// Run quickly (lower sample size/time)
        #[arg(long, default_value_t = false)]
        quick: bool,

        /// Generate report only (skip running benchmarks)
        #[arg(long, default_value_t = false)]
        report_only: bool,
    },
}

const BENCH: &str = "digraph_benchmark";
const CRITERION_DIR: &str = "target/criterion";
const REPORT_PATH: &str = "benchmark_results/report.md";

/// Subset of criterion's `estimates.json`.
#[derive(Deserialize)]
struct Estimates {
    mean: Estimate,
}

#[derive(Deserialize)]
struct Estimate {
    point_estimate: f64,
}

/// Subset of criterion's `benchmark.json`. Byte throughputs fail to parse
/// and are reported as `-`.
#[derive(Deserialize)]
struct BenchmarkInfo {
    #[serde(default)]
    throughput: Option<Throughput>,
}

#[derive(Deserialize)]
enum Throughput {
    Elements(u64),
}

struct Row {
    workload: String,
    mean_ns: f64,
    elements: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Bench { quick, report_only } => {
            if !report_only {
                run_benchmarks(quick)?;
            }
            generate_report()?;
        }
    }

    Ok(())
}

fn run_benchmarks(quick: bool) -> Result<()> {
    println!(">>> Running {BENCH}...");
    let start = Instant::now();

    let mut cmd = Command::new("cargo");
    cmd.args(["bench", "--bench", BENCH, "--", "--save-baseline", "current"]);

    if quick {
        cmd.args(["--measurement-time", "0.1", "--noplot", "--sample-size", "10"]);
    }

    let status = cmd
        .status()
        .with_context(|| format!("failed to launch cargo bench for {BENCH}"))?;
    if !status.success() {
        anyhow::bail!("benchmark {BENCH} failed");
    }

    println!("Finished in {:.2?}", start.elapsed());
    Ok(())
}

fn generate_report() -> Result<()> {
    println!("\n>>> Generating Report...");

    let criterion_dir = Path::new(CRITERION_DIR);
    if !criterion_dir.exists() {
        eprintln!("No criterion output found at {}", criterion_dir.display());
        return Ok(());
    }

    let mut rows = Vec::new();
    collect_results(criterion_dir, &mut rows)?;
    rows.sort_by(|a, b| a.workload.cmp(&b.workload));

    let report_path = Path::new(REPORT_PATH);
    if let Some(parent) = report_path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(report_path)
        .with_context(|| format!("failed to create {}", report_path.display()))?;

    writeln!(file, "# wgraph Benchmark Report")?;
    writeln!(file)?;
    writeln!(file, "| Workload | Mean | Throughput |")?;
    writeln!(file, "|---|---|---|")?;
    for row in &rows {
        let throughput = match row.elements {
            Some(elements) => format_rate(elements as f64 * 1e9 / row.mean_ns),
            None => "-".to_string(),
        };
        writeln!(
            file,
            "| {} | {} | {} |",
            row.workload,
            format_time(row.mean_ns),
            throughput
        )?;
    }

    println!("Report written to {}", report_path.display());
    Ok(())
}

/// Walks criterion output; each `<workload>/current/estimates.json` is one row.
fn collect_results(dir: &Path, rows: &mut Vec<Row>) -> Result<()> {
    for entry in fs::read_dir(dir)?.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_results(&path, rows)?;
        } else if path.file_name().and_then(|s| s.to_str()) == Some("estimates.json") {
            if let Some(row) = read_row(&path)? {
                rows.push(row);
            }
        }
    }
    Ok(())
}

fn read_row(estimates_path: &Path) -> Result<Option<Row>> {
    let Some(baseline_dir) = estimates_path.parent() else {
        return Ok(None);
    };
    if baseline_dir.file_name().and_then(|s| s.to_str()) != Some("current") {
        return Ok(None);
    }
    let Some(workload_dir) = baseline_dir.parent() else {
        return Ok(None);
    };

    let estimates: Estimates = read_json(estimates_path)?;
    if estimates.mean.point_estimate <= 0.0 {
        return Ok(None);
    }

    let elements = read_json::<BenchmarkInfo>(&baseline_dir.join("benchmark.json"))
        .ok()
        .and_then(|info| info.throughput)
        .map(|Throughput::Elements(n)| n);

    Ok(Some(Row {
        workload: workload_name(workload_dir),
        mean_ns: estimates.mean.point_estimate,
        elements,
    }))
}

fn read_json<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}

fn workload_name(workload_dir: &Path) -> String {
    let criterion_dir = Path::new(CRITERION_DIR);
    workload_dir
        .strip_prefix(criterion_dir)
        .unwrap_or(workload_dir)
        .display()
        .to_string()
}

fn format_time(ns: f64) -> String {
    if ns > 1_000_000.0 {
        format!("{:.2} ms", ns / 1_000_000.0)
    } else if ns > 1_000.0 {
        format!("{:.2} µs", ns / 1_000.0)
    } else {
        format!("{ns:.0} ns")
    }
}

fn format_rate(ops: f64) -> String {
    if ops > 1_000_000.0 {
        format!("{:.2}M elem/s", ops / 1_000_000.0)
    } else if ops > 1_000.0 {
        format!("{:.2}K elem/s", ops / 1_000.0)
    } else {
        format!("{ops:.0} elem/s")
    }
}
