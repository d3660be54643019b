use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;

mod core;
mod formatters;
mod parsers;

use crate::core::{ProjectAnalyzer, StandardHeaders};

#[derive(Debug, Clone, Parser)]
#[command(
    name = "incgraph",
    version = "0.1.0",
    author = "incgraph developers",
    about = "C/C++ include dependency graph extractor"
)]
struct Cli {
    /// Root directories or files to analyze
    #[arg(value_name = "PATH", required = true)]
    roots: Vec<PathBuf>,

    /// Output file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "includes_tree_output.dot"
    )]
    output: PathBuf,

    /// Output format: dot, json-compact
    #[arg(short, long, value_name = "FORMAT", value_enum, default_value_t = OutputFormat::Dot)]
    format: OutputFormat,

    /// Exclude standard-library headers from the graph
    #[arg(long)]
    drop_std: bool,

    /// Replace the bundled C standard header list (newline-delimited names)
    #[arg(long, value_name = "FILE")]
    c_headers: Option<PathBuf>,

    /// Replace the bundled C++ standard header list (newline-delimited names)
    #[arg(long, value_name = "FILE")]
    cpp_headers: Option<PathBuf>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
#[value(rename_all = "kebab-case")]
enum OutputFormat {
    Dot,
    JsonCompact,
}

impl OutputFormat {
    fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Dot => "dot",
            OutputFormat::JsonCompact => "json-compact",
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        roots,
        output,
        format,
        drop_std,
        c_headers,
        cpp_headers,
    } = cli;

    let start_time = Instant::now();

    println!("INCGRAPH - C/C++ Include Graph Extraction");
    println!("Output: {}", output.display());
    println!("Format: {}", format.as_str());
    println!("Standard headers: {}", if drop_std { "drop" } else { "keep" });

    let roots: Vec<PathBuf> = roots
        .iter()
        .map(|root| {
            root.canonicalize()
                .with_context(|| format!("input path {} is not accessible", root.display()))
        })
        .collect::<Result<_>>()?;
    for root in &roots {
        println!("Root: {}", root.display());
    }

    let std_headers = StandardHeaders::load(c_headers.as_deref(), cpp_headers.as_deref())?;

    let analysis_start = Instant::now();

    let analyzer = ProjectAnalyzer::new(std_headers, !drop_std);
    let dependency_graph = analyzer.analyze(&roots)?;

    let analysis_time = analysis_start.elapsed();
    println!(
        "Analysis completed in {:.2}s ({} nodes, {} edges)",
        analysis_time.as_secs_f64(),
        dependency_graph.node_count(),
        dependency_graph.edge_count()
    );

    let mut generated_output = output.clone();

    match format {
        OutputFormat::Dot => {
            use crate::formatters::DotFormatter;
            DotFormatter::new(&roots).format_to_file(&dependency_graph, &output)?;
        }
        OutputFormat::JsonCompact => {
            use crate::formatters::JsonCompactFormatter;
            let formatter = JsonCompactFormatter::new(&roots);
            generated_output = output.with_extension("json");
            formatter.format_to_file(&dependency_graph, &generated_output)?;
        }
    }

    let total_time = start_time.elapsed();
    println!("Analysis complete. Generated {}", generated_output.display());
    println!("Total execution time: {:.2}s", total_time.as_secs_f64());

    Ok(())
}
