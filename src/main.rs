use anyhow::{Context, Result};
use clap::Parser;
use enlace::cli::{Cli, OutputFormat};
use enlace::correlate::{correlate, RequestSummary};
use enlace::event::Snapshot;
use enlace::filter::TypeFilter;
use enlace::json_output::JsonReport;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Print summaries as a human-readable table
fn print_text(summaries: &[RequestSummary]) {
    println!(
        "{:<6} {:<7} {:<5} {:<24} {:<28} {:<12} {:>10}",
        "ID", "METHOD", "CODE", "DOMAIN", "NAME", "TYPE", "TIME"
    );
    for s in summaries {
        println!(
            "{:<6} {:<7} {:<5} {:<24} {:<28} {:<12} {:>10.1}",
            s.id, s.method, s.status, s.domain, s.name, s.resource_type, s.time
        );
    }
    println!();
    println!("{} completed exchange(s)", summaries.len());
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let raw = std::fs::read_to_string(&cli.snapshot)
        .with_context(|| format!("failed to read snapshot {}", cli.snapshot.display()))?;
    let snapshot: Snapshot = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse snapshot {}", cli.snapshot.display()))?;

    let filter = match &cli.filter {
        Some(expr) => TypeFilter::from_expr(expr)?,
        None => TypeFilter::all(),
    };

    let summaries = correlate(&snapshot.requests, &snapshot.events, &filter);

    match cli.format {
        OutputFormat::Text => print_text(&summaries),
        OutputFormat::Json => {
            let report =
                JsonReport::new(snapshot.requests.len(), snapshot.events.len(), summaries);
            println!("{}", report.to_json()?);
        }
    }

    Ok(())
}
