//! qengine - command-line driver
//!
//! Loads an N-Triples file into the configured storage backend, evaluates a
//! set of star queries and writes one report per query.
//!
//! Usage:
//!   qengine --data data/sample_data.nt --queries data/sample_query.queryset
//!   qengine --data data/sample_data.nt --queries data/sample_query.queryset --backend giant-table --oracle

use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::{Parser, ValueEnum};
use log::warn;
use tracing_subscriber::EnvFilter;

use qengine::parsing::rdf_parser::{quad_to_triple, read_quads_from_file};
use qengine::parsing::star_query_parser::StarQueryParser;
use qengine::querying::oxigraph_oracle::{OxigraphOracle, Verdict};
use qengine::querying::star_join::JoinStrategy;
use qengine::{storage, Backend, RDFTriple, StarQuery, StorageConfig, Substitution};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum BackendArg {
    GiantTable,
    HexaStore,
}

#[derive(Parser, Debug)]
#[command(name = "qengine")]
#[command(about = "Evaluate star queries over an in-memory RDF triple store")]
struct Args {
    /// N-Triples file with the facts to load
    #[arg(short, long)]
    data: PathBuf,

    /// File holding one or more SELECT star queries
    #[arg(short, long)]
    queries: PathBuf,

    /// JSON storage configuration; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Storage backend
    #[arg(short, long, value_enum)]
    backend: Option<BackendArg>,

    /// Push candidate bindings into patterns while joining
    #[arg(long)]
    pushdown: bool,

    /// Check answers against an Oxigraph in-memory store
    #[arg(long)]
    oracle: bool,

    /// Directory for the per-query reports
    #[arg(short, long, default_value = "results")]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => StorageConfig::from_json_file(path)?,
        None => StorageConfig::default(),
    };
    if let Some(backend) = args.backend {
        config.backend = match backend {
            BackendArg::GiantTable => Backend::GiantTable,
            BackendArg::HexaStore => Backend::HexaStore,
        };
    }
    if args.pushdown {
        config.join_strategy = JoinStrategy::BindingPushdown;
    }

    println!("=== Loading RDF data ===");
    let quads = read_quads_from_file(&args.data)?;
    let triples: Vec<RDFTriple> = quads.iter().map(quad_to_triple).collect();

    let start = Instant::now();
    let mut store = storage::open(&config);
    store.add_all(&triples)?;
    println!(
        "Loaded {} facts ({} distinct) into {:?} in {:.3} ms",
        triples.len(),
        store.size(),
        config.backend,
        start.elapsed().as_secs_f64() * 1000.0
    );

    println!("\n=== Parsing star queries ===");
    let text = fs::read_to_string(&args.queries)?;
    let queries = StarQueryParser::new()?.parse(&text)?;
    for query in &queries {
        let central = query.central_variable().map_or("none".to_string(), ToString::to_string);
        println!("{} (central variable: {})", query, central);
    }
    println!("Total queries parsed: {}", queries.len());

    let oracle = if args.oracle { Some(OxigraphOracle::new(&quads)?) } else { None };
    fs::create_dir_all(&args.output)?;

    println!("\n=== Evaluating ===");
    for query in &queries {
        let start = Instant::now();
        let answers: HashSet<Substitution> = store
            .match_star(query)?
            .iter()
            .map(|s| s.project(query.answer_variables()))
            .collect();
        let elapsed = start.elapsed();

        let reference = oracle.as_ref().map(|o| o.evaluate(query)).transpose()?;
        let verdict = reference.as_ref().map(|r| Verdict::compare(&answers, r));
        if let Some(v) = verdict {
            if !v.correct || !v.complete {
                warn!("{}: correct={} complete={}", query.label(), v.correct, v.complete);
            }
        }

        export_results(&args.output, query, &answers, reference.as_ref(), verdict)?;
        println!(
            "{}: {} answers in {:.3} ms{}",
            query.label(),
            answers.len(),
            elapsed.as_secs_f64() * 1000.0,
            verdict.map_or(String::new(), |v| format!(", correct: {}, complete: {}", v.correct, v.complete))
        );
    }

    Ok(())
}

fn export_results(
    dir: &Path,
    query: &StarQuery,
    answers: &HashSet<Substitution>,
    reference: Option<&HashSet<Substitution>>,
    verdict: Option<Verdict>,
) -> std::io::Result<()> {
    let mut file = fs::File::create(dir.join(format!("{}_results.txt", query.label())))?;
    writeln!(file, "StarQuery: {}\n", query)?;

    writeln!(file, "=== Results ===")?;
    let mut sorted: Vec<&Substitution> = answers.iter().collect();
    sorted.sort();
    for answer in sorted {
        writeln!(file, "{}", answer)?;
    }

    if let (Some(reference), Some(verdict)) = (reference, verdict) {
        writeln!(file, "\n=== Oracle Results ===")?;
        let mut sorted: Vec<&Substitution> = reference.iter().collect();
        sorted.sort();
        for answer in sorted {
            writeln!(file, "{}", answer)?;
        }

        writeln!(file, "\n=== Comparison ===")?;
        writeln!(file, "Correct: {}", verdict.correct)?;
        writeln!(file, "Complete: {}", verdict.complete)?;
    }
    Ok(())
}
