use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use cine_graph::config::{AppConfig, Overflow};
use cine_graph::format::TableRenderer;
use cine_graph::{run_demo, run_query};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cine_graph")]
#[command(about = "Build the Cine Colombia listing graph and query it with SPARQL")]
struct Cli {
    /// RDF/XML file the graph is saved to and loaded from.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Namespace for the listing properties.
    #[arg(long)]
    namespace: Option<String>,

    /// Maximum rendered column width.
    #[arg(long)]
    max_width: Option<usize>,

    /// Wrap long values onto extra lines instead of truncating them.
    #[arg(long)]
    wrap: bool,

    /// Run a single SPARQL SELECT against the saved graph instead of the demo.
    #[arg(short, long)]
    query: Option<String>,

    /// Print the --query result as JSON.
    #[arg(long, requires = "query")]
    json: bool,

    /// Debug logging.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn app_config(&self) -> AppConfig {
        let mut config = AppConfig::default();
        if let Some(file) = &self.file {
            config.rdf_file = file.clone();
        }
        if let Some(ns) = &self.namespace {
            config.namespace = ns.clone();
        }
        if let Some(width) = self.max_width {
            config.render.max_col_width = width;
        }
        if self.wrap {
            config.render.overflow = Overflow::Wrap;
        }
        config
    }
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = cli.app_config();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.query {
        Some(sparql) => {
            let results = run_query(&config, sparql)?;
            if cli.json {
                serde_json::to_writer_pretty(&mut out, &results)?;
                writeln!(out)?;
            } else {
                writeln!(out, "{}", TableRenderer::new(config.render).render_result_set(&results))?;
            }
            Ok(ExitCode::SUCCESS)
        }
        None => {
            let failed = run_demo(&config, &mut out)?;
            if failed > 0 {
                tracing::warn!(failed, "some demo queries failed");
                return Ok(ExitCode::FAILURE);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}
