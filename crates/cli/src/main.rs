use anyhow::{Context, Result};
use catalog::{Catalog, CatalogCache};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use engine::{
    format_recommendations, format_score, format_top_rated, similarity_between, top_rated,
    QueryError, RecommendationRow, Recommender, ScanMode, TopRatedRow,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Genre Recs - movie recommendations by genre similarity
#[derive(Parser)]
#[command(name = "genre-recs")]
#[command(
    about = "Recommend movies with similar genres using Jaccard similarity",
    long_about = None
)]
struct Cli {
    /// Path to the movie catalog CSV (title, genres, vote_average, runtime)
    #[arg(
        short,
        long,
        env = "GENRE_RECS_DATA",
        default_value = "data/processed_movies.csv"
    )]
    data_path: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend movies similar to a title
    Recommend {
        /// Movie title (case-insensitive exact match)
        #[arg(long)]
        title: String,

        /// Number of recommendations to return
        #[arg(long, default_value = "5")]
        top_n: usize,

        /// How candidates are gathered
        #[arg(long, value_enum, default_value_t = Scan::Full)]
        scan: Scan,

        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the highest-rated movies
    TopRated {
        /// Number of movies to show
        #[arg(long, default_value = "10")]
        limit: usize,

        /// Print rows as JSON
        #[arg(long)]
        json: bool,
    },

    /// Jaccard similarity of two ';'-separated genre lists
    Similarity {
        /// First genre list, e.g. "action; adventure; sci-fi"
        #[arg(long)]
        a: String,

        /// Second genre list, e.g. "action; drama"
        #[arg(long)]
        b: String,
    },

    /// List distinct titles in catalog order
    Titles {
        /// Maximum number of titles to print
        #[arg(long)]
        limit: Option<usize>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Scan {
    /// Score every movie
    Full,
    /// Score only movies sharing a genre, via the genre index
    Index,
}

impl From<Scan> for ScanMode {
    fn from(scan: Scan) -> Self {
        match scan {
            Scan::Full => ScanMode::FullScan,
            Scan::Index => ScanMode::GenreIndex,
        }
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Dispatch to appropriate command handler
    match cli.command {
        Commands::Recommend {
            title,
            top_n,
            scan,
            json,
        } => {
            let catalog = load_catalog(&cli.data_path)?;
            handle_recommend(catalog, &title, top_n, scan.into(), json)?
        }
        Commands::TopRated { limit, json } => {
            let catalog = load_catalog(&cli.data_path)?;
            handle_top_rated(&catalog, limit, json)?
        }
        Commands::Titles { limit } => {
            let catalog = load_catalog(&cli.data_path)?;
            handle_titles(&catalog, limit)
        }
        // The calculator doesn't need the catalog
        Commands::Similarity { a, b } => handle_similarity(&a, &b),
    }

    Ok(())
}

/// Load the catalog once; a load failure aborts the command
fn load_catalog(data_path: &Path) -> Result<Arc<Catalog>> {
    let cache = CatalogCache::new(data_path);
    let start = Instant::now();
    let catalog = cache
        .get()
        .with_context(|| format!("Failed to load movie catalog from {}", data_path.display()))?;
    info!("Loaded {} movies in {:?}", catalog.len(), start.elapsed());
    Ok(catalog)
}

/// Handle the 'recommend' command
fn handle_recommend(
    catalog: Arc<Catalog>,
    title: &str,
    top_n: usize,
    scan_mode: ScanMode,
    json: bool,
) -> Result<()> {
    let recommender = Recommender::new(catalog).with_scan_mode(scan_mode);

    let result = match recommender.recommend(title, top_n) {
        Ok(result) => result,
        Err(QueryError::NotFound { title }) => {
            println!("{} '{}'", "Movie not found:".red().bold(), title);
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let rows = format_recommendations(&result);
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        let header = format!(
            "Movies similar to '{}' [{}]:",
            result.target.title,
            result.target.genres.joined()
        );
        println!("{}", header.bold().blue());
        print_recommendations(&rows);
    }
    Ok(())
}

/// Handle the 'top-rated' command
fn handle_top_rated(catalog: &Catalog, limit: usize, json: bool) -> Result<()> {
    let records = top_rated(catalog, limit)?;
    let rows = format_top_rated(&records);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        println!("{}", format!("Top {} movies by rating:", rows.len()).bold().blue());
        print_top_rated(&rows);
    }
    Ok(())
}

/// Handle the 'similarity' command
fn handle_similarity(a: &str, b: &str) {
    let score = similarity_between(a, b);
    println!(
        "Jaccard similarity between {{{}}} and {{{}}}: {}",
        a.trim(),
        b.trim(),
        format_score(score).bold()
    );
}

/// Handle the 'titles' command
fn handle_titles(catalog: &Catalog, limit: Option<usize>) {
    let titles = catalog.titles();
    let shown = limit.unwrap_or(titles.len());
    for title in titles.iter().take(shown) {
        println!("{}", title);
    }
    if shown < titles.len() {
        println!("... and {} more", titles.len() - shown);
    }
}

/// Helper function to format and print recommendations
fn print_recommendations(rows: &[RecommendationRow]) {
    if rows.is_empty() {
        println!("  (no other movies in the catalog)");
        return;
    }
    for (i, row) in rows.iter().enumerate() {
        println!(
            "{}. {} [{}] - Rating: {} - {} min - Similarity: {}",
            (i + 1).to_string().green(),
            row.title,
            row.genres,
            row.rating,
            row.runtime,
            row.similarity.yellow()
        );
    }
}

fn print_top_rated(rows: &[TopRatedRow]) {
    for row in rows {
        println!(
            "{}. {} [{}] - Rating: {} - {} min",
            row.rank.to_string().green(),
            row.title,
            row.genres,
            row.rating.yellow(),
            row.runtime
        );
    }
}
