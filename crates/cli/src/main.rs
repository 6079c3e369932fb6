use anyhow::{bail, Context, Result};
use api_client::{ApiClient, ApiConfig, PageQuery};
use catalog::{builtin, filter_by_genre, Movie, MovieId, Recommendation};
use clap::{Parser, Subcommand};
use colored::Colorize;
use flow::{RecommendationOrchestrator, RecommendationSource, Selection, SELECTION_SIZE};
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

/// Movia - pick five movies, get three recommendations
#[derive(Parser)]
#[command(name = "movia")]
#[command(about = "Movie recommendations from a remote model with a local fallback", long_about = None)]
struct Cli {
    /// Backend address (overrides MOVIA_BACKEND_IP)
    #[arg(long, global = true)]
    backend: Option<String>,

    /// Request timeout in milliseconds (overrides MOVIA_REQUEST_TIMEOUT_MS)
    #[arg(long, global = true)]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the built-in catalog
    Catalog {
        /// Case-insensitive title substring
        #[arg(long)]
        search: Option<String>,

        /// Only movies of this genre
        #[arg(long)]
        genre: Option<String>,
    },

    /// List the genres of the built-in catalog
    Genres,

    /// Recommend movies for exactly five selected catalog ids
    Recommend {
        /// Comma-separated movie ids, e.g. 27205,603,496243,550,335984
        #[arg(long, value_delimiter = ',', required = true)]
        ids: Vec<MovieId>,

        /// Show the reason for each recommendation
        #[arg(long)]
        explain: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List movies from the backend
    Movies {
        #[arg(long, default_value = "1")]
        page: u32,

        #[arg(long, default_value = "60")]
        page_size: u32,
    },

    /// Search movies on the backend
    Search {
        /// Text to search for
        query: String,

        #[arg(long, default_value = "1")]
        page: u32,

        #[arg(long, default_value = "60")]
        page_size: u32,
    },

    /// Check backend health
    Health,

    /// Show information about the backend model
    ModelInfo,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog { ref search, ref genre } => {
            handle_catalog(search.as_deref(), genre.as_deref())
        }
        Commands::Genres => handle_genres(),
        Commands::Recommend {
            ref ids,
            explain,
            json,
        } => {
            let client = build_client(&cli)?;
            handle_recommend(client, ids, explain, json).await
        }
        Commands::Movies { page, page_size } => {
            let client = build_client(&cli)?;
            handle_movies(client, PageQuery { page, page_size }).await
        }
        Commands::Search {
            ref query,
            page,
            page_size,
        } => {
            let client = build_client(&cli)?;
            handle_search(client, query, PageQuery { page, page_size }).await
        }
        Commands::Health => handle_health(build_client(&cli)?).await,
        Commands::ModelInfo => handle_model_info(build_client(&cli)?).await,
    }
}

/// Environment config with command line overrides applied
fn build_client(cli: &Cli) -> Result<ApiClient> {
    let mut config = ApiConfig::from_env().context("Failed to load backend configuration")?;
    if let Some(backend) = &cli.backend {
        config = config.with_backend(backend.clone());
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config = config.with_timeout_ms(timeout_ms);
    }

    let client = ApiClient::from_config(&config).context("Invalid backend address")?;
    debug!(
        "Backend: {} (timeout {:?})",
        client.base_url().unwrap_or("same origin"),
        client.timeout()
    );
    Ok(client)
}

/// Handle the 'catalog' command
fn handle_catalog(search: Option<&str>, genre: Option<&str>) -> Result<()> {
    let matches = filter_by_genre(builtin().search(search.unwrap_or("")), genre);

    println!(
        "{}",
        format!("{} of {} movies:", matches.len(), builtin().len())
            .bold()
            .blue()
    );
    for movie in matches {
        print_movie(movie);
    }
    Ok(())
}

/// Handle the 'genres' command
fn handle_genres() -> Result<()> {
    println!("{}", "Genres:".bold().blue());
    for genre in builtin().all_genres() {
        println!("{}{}", "• ".green(), genre);
    }
    Ok(())
}

/// Handle the 'recommend' command
async fn handle_recommend(
    client: ApiClient,
    ids: &[MovieId],
    explain: bool,
    json: bool,
) -> Result<()> {
    let selection = Selection::from_ids(builtin(), ids);
    if !selection.is_complete() {
        let unknown: Vec<String> = ids
            .iter()
            .filter(|&&id| !builtin().contains(id))
            .map(|id| id.to_string())
            .collect();
        if !unknown.is_empty() {
            bail!("Unknown movie ids: {}", unknown.join(", "));
        }
        bail!(
            "Select exactly {} distinct movies ({} given)",
            SELECTION_SIZE,
            selection.len()
        );
    }

    let orchestrator = RecommendationOrchestrator::new(Arc::new(client), Arc::new(builtin().clone()));

    let start = Instant::now();
    let outcome = orchestrator
        .recommend(&selection)
        .await
        .context("Failed to generate recommendations")?;
    debug!("Recommendations ready in {:?}", start.elapsed());

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&outcome.recommendations)
                .context("Failed to serialize recommendations")?
        );
        return Ok(());
    }

    print_recommendations(&outcome.recommendations, outcome.source, explain);
    Ok(())
}

/// Handle the 'movies' command
async fn handle_movies(client: ApiClient, query: PageQuery) -> Result<()> {
    let page = client
        .get_movies(query)
        .await
        .context("Failed to fetch movies")?;

    println!(
        "{}",
        format!(
            "Page {} of {} ({} movies in total):",
            page.page, page.total_pages, page.total
        )
        .bold()
        .blue()
    );
    for movie in &page.items {
        print_movie(movie);
    }
    Ok(())
}

/// Handle the 'search' command
async fn handle_search(client: ApiClient, query: &str, page: PageQuery) -> Result<()> {
    let movies = client
        .search_movies(query, page)
        .await
        .with_context(|| format!("Failed to search for '{}'", query))?;

    println!("{}", format!("Search results for '{}':", query).bold().blue());
    for movie in &movies {
        print_movie(movie);
    }
    Ok(())
}

/// Handle the 'health' command
async fn handle_health(client: ApiClient) -> Result<()> {
    let health = client
        .get_health()
        .await
        .context("Failed to reach backend")?;

    let status = health.status.as_deref().unwrap_or("unknown");
    let status = if health.is_ok() {
        status.green()
    } else {
        status.yellow()
    };
    println!("Status: {}", status);
    if !health.raw.is_object() {
        println!("Response: {}", health.raw);
    }
    if let Some(message) = &health.message {
        println!("Message: {}", message);
    }
    for (key, value) in &health.extra {
        println!("{}{}: {}", "• ".cyan(), key, value);
    }
    Ok(())
}

/// Handle the 'model-info' command
async fn handle_model_info(client: ApiClient) -> Result<()> {
    let info = client
        .get_model_info()
        .await
        .context("Failed to fetch model info")?;

    println!("{}", "Model:".bold().blue());
    if !info.raw.is_object() {
        println!("{}Response: {}", "• ".green(), info.raw);
    }
    println!("{}Version: {}", "• ".green(), info.version.as_deref().unwrap_or("unknown"));
    println!("{}Trained at: {}", "• ".green(), info.trained_at.as_deref().unwrap_or("unknown"));
    if let Some(metrics) = &info.metrics {
        println!("Metrics:");
        for (name, value) in metrics {
            println!("  - {}: {}", name, value);
        }
    }
    for (key, value) in &info.extra {
        println!("{}{}: {}", "• ".cyan(), key, value);
    }
    Ok(())
}

fn print_movie(movie: &Movie) {
    println!(
        "{}: {} ({}) [{}] rating {:.1}",
        movie.id.to_string().green(),
        movie.title,
        movie.year,
        movie.genres.join(", "),
        movie.rating
    );
}

/// Format and print recommendations
fn print_recommendations(recommendations: &[Recommendation], source: RecommendationSource, explain: bool) {
    let header = match source {
        RecommendationSource::Remote => "Recommendations from the model:".bold().blue(),
        RecommendationSource::LocalFallback => {
            "Backend unavailable, local recommendations:".bold().yellow()
        }
    };
    println!("{}", header);

    for (rank, rec) in recommendations.iter().enumerate() {
        println!(
            "{}. {} ({}) [{}] - {}% match",
            (rank + 1).to_string().green(),
            rec.movie.title,
            rec.movie.year,
            rec.movie.genres.join(", "),
            rec.match_percent
        );
        if explain {
            println!("   {}", rec.reason);
        }
    }
}
