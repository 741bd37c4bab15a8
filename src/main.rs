mod pipeline;
mod server;
mod store;

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "az_quiz", about = "AZ-204 study quiz extractor and local viewer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract quiz questions from the study README into questions.json
    Parse {
        /// Source markdown document
        #[arg(short, long, default_value = "README.md")]
        input: PathBuf,
        /// Output JSON file (fully regenerated on each run)
        #[arg(short, long, default_value = "questions.json")]
        output: PathBuf,
    },
    /// Serve the viewer and questions.json over local HTTP
    Serve {
        #[arg(short, long, default_value_t = server::DEFAULT_PORT)]
        port: u16,
        /// Directory to serve (viewer assets plus questions.json)
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
    /// Parse + serve in one pipeline
    Run {
        #[arg(short, long, default_value = "README.md")]
        input: PathBuf,
        #[arg(short, long, default_value = "questions.json")]
        output: PathBuf,
        #[arg(short, long, default_value_t = server::DEFAULT_PORT)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse { input, output } => parse_document(&input, &output),
        Commands::Serve { port, dir } => {
            server::serve(server::ServerConfig { port, root: dir }).await
        }
        Commands::Run { input, output, port } => {
            parse_document(&input, &output)?;
            let root = serve_root(&output);
            server::serve(server::ServerConfig { port, root }).await
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn parse_document(input: &Path, output: &Path) -> anyhow::Result<()> {
    let doc = store::load_document(input)?;
    let outcome = pipeline::extract(&doc);
    store::save_records(output, &outcome.records)?;
    println!(
        "Parsed {} questions, saved to {}",
        outcome.records.len(),
        output.display()
    );
    if outcome.skipped > 0 {
        println!(
            "Skipped {} malformed blocks (no title line or no options).",
            outcome.skipped
        );
    }
    Ok(())
}

/// The viewer must see questions.json at the serving root, so `run` serves
/// from the output file's directory.
fn serve_root(output: &Path) -> PathBuf {
    match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

fn format_duration(d: std::time::Duration) -> String {
    let secs = d.as_secs();
    if secs < 60 {
        format!("{:.1}s", d.as_secs_f64())
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m {}s", secs / 3600, (secs % 3600) / 60, secs % 60)
    }
}
