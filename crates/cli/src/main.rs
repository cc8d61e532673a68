use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use console::style;
use cosim_store::{ExactMirror, MirroredStore, ScoredResult, VectorStore};

#[derive(Parser)]
#[command(name = "cosim")]
#[command(about = "Exact cosine-similarity vector search", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for results)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in four-document demo corpus
    Demo(DemoArgs),

    /// Search an ad-hoc store built from --vector/--label pairs
    Search(SearchArgs),
}

#[derive(Args)]
struct DemoArgs {
    /// Number of results to return
    #[arg(long, default_value_t = 3)]
    top_k: usize,

    /// Cross-check the ranking against an in-process mirror index
    #[arg(long)]
    mirror: bool,

    /// Emit results as JSON on stdout instead of the styled table
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct SearchArgs {
    /// Fixed vector dimension (inferred from the first --vector if omitted)
    #[arg(long)]
    dim: Option<usize>,

    /// Stored vector as comma-separated floats; repeatable
    #[arg(long = "vector", value_name = "FLOATS")]
    vectors: Vec<String>,

    /// Label for the vector at the same position; repeatable
    #[arg(long = "label", value_name = "LABEL")]
    labels: Vec<String>,

    /// Query vector as comma-separated floats
    #[arg(long, value_name = "FLOATS")]
    query: String,

    /// Number of results to return
    #[arg(short = 'k', long, default_value_t = 5)]
    top_k: usize,

    /// Emit results as JSON on stdout instead of the styled table
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    match cli.command {
        Commands::Demo(args) => run_demo(&args).await,
        Commands::Search(args) => run_search(&args),
    }
}

async fn run_demo(args: &DemoArgs) -> Result<()> {
    let vectors = vec![
        vec![1.0, 2.0, 3.0],
        vec![2.0, 3.0, 4.0],
        vec![1.0, 1.0, 1.0],
        vec![0.0, 1.0, 0.0],
    ];
    let labels: Vec<String> = ["doc1", "doc2", "doc3", "doc4"]
        .iter()
        .map(ToString::to_string)
        .collect();
    let query = vec![1.0, 2.0, 2.0];

    let mut store = if args.mirror {
        MirroredStore::with_mirror(VectorStore::new(3), Box::new(ExactMirror::new(3)))
    } else {
        MirroredStore::new(VectorStore::new(3))
    };
    store.append(vectors.clone(), labels.clone()).await?;

    let results = store.search(&query, args.top_k)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("Query vector: {query:?}");
    print_results("Exact cosine search", &results);

    if args.mirror {
        let mirror_hits = store.search_mirror(&query, args.top_k).await?;
        println!();
        println!("{}", style("--- Mirror search ---").bold());
        for hit in &mirror_hits {
            println!("{}: {:.3}", style(&hit.label).cyan(), hit.score);
        }
    }

    println!();
    println!("{}", style("--- Similarity details ---").bold());
    for (vector, label) in vectors.iter().zip(labels.iter()) {
        let similarity = cosim_store::cosine_similarity(&query, vector)?;
        println!("{label} {vector:?} -> similarity: {similarity:.3}");
    }

    store.close().await?;
    Ok(())
}

fn run_search(args: &SearchArgs) -> Result<()> {
    if args.vectors.is_empty() {
        bail!("at least one --vector is required");
    }

    let mut store = match args.dim {
        Some(dim) => VectorStore::new(dim),
        None => VectorStore::with_deferred_dimension(),
    };

    let vectors = args
        .vectors
        .iter()
        .map(|raw| parse_vector(raw))
        .collect::<Result<Vec<_>>>()?;
    store.append(vectors, args.labels.clone())?;

    let query = parse_vector(&args.query)?;
    let results = store.search(&query, args.top_k)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    println!("Query vector: {query:?}");
    print_results("Exact cosine search", &results);
    Ok(())
}

fn print_results(title: &str, results: &[ScoredResult]) {
    println!();
    println!("{}", style(format!("--- {title} ---")).bold());
    if results.is_empty() {
        println!("{}", style("(no results)").dim());
        return;
    }
    for result in results {
        println!("{}: {:.3}", style(&result.label).cyan(), result.score);
    }
}

fn parse_vector(raw: &str) -> Result<Vec<f32>> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<f32>()
                .with_context(|| format!("Invalid float '{part}' in vector '{raw}'"))
        })
        .collect()
}
