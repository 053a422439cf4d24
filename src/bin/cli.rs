use clap::{Parser, Subcommand};
use rider_match::scoring::{explain, normalize, phonetic_code};
use rider_match::{MatchConfig, NameMatcher, StaticSource};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "rider-match")]
#[command(about = "Fuzzy rider name matching", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file (missing fields use defaults)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a JSON roster for a rider
    Search {
        /// Rider name, any order, misspellings allowed
        query: String,

        /// JSON array of {id, name, nationality?, team?}
        #[arg(short = 'f', long)]
        candidates: PathBuf,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,

        /// Maximum results to print
        #[arg(short, long, default_value = "5")]
        max_results: usize,
    },

    /// Show how a query scores against one name
    Explain {
        query: String,
        name: String,
    },

    /// Print phonetic codes for words
    Phonetic {
        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn print_codes(label: &str, text: &str) {
    println!("{label}:");
    for part in normalize(text).split_whitespace() {
        println!("   {} → {}", part, phonetic_code(part));
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => MatchConfig::from_json_file(path)?,
        None => MatchConfig::default(),
    };

    match cli.command {
        Commands::Search { query, candidates, json, max_results } => {
            let source = StaticSource::from_json_file(&candidates)?;
            tracing::info!("Loaded {} candidates from {}", source.len(), candidates.display());

            let matcher = NameMatcher::builder()
                .source(Arc::new(source))
                .config(config)
                .build()?;

            let outcome = matcher.search(&query).await;

            if json {
                println!("{}", serde_json::to_string_pretty(&outcome)?);
                return Ok(());
            }

            println!("🔍 Searching for: {}", query);
            println!("   Normalized: {}", normalize(&query));

            match outcome.phase() {
                None => println!("\n❌ No matches"),
                Some(phase) => {
                    println!("\n✅ Found {} matches ({:?})", outcome.len(), phase);
                    for (i, rider) in outcome.matches().iter().take(max_results).enumerate() {
                        println!("\n   {}. {} [{}]", i + 1, rider.name, rider.id);
                        if let Some(nationality) = &rider.nationality {
                            println!("      Nationality: {}", nationality);
                        }
                        if let Some(team) = &rider.team {
                            println!("      Team: {}", team);
                        }
                    }
                    if outcome.len() > max_results {
                        println!("\n   ... and {} more", outcome.len() - max_results);
                    }
                }
            }
        }

        Commands::Explain { query, name } => {
            let breakdown = explain(&query, &name, config.phonetic_boost);

            println!("📋 {} ↔ {}", breakdown.normalized_query, breakdown.normalized_name);
            print_codes("   Query codes", &query);
            print_codes("   Name codes", &name);
            println!("   Basic:          {:.3}", breakdown.basic);
            println!("   Best part:      {:.3}", breakdown.best_part);
            println!("   Phonetic boost: {:.3}", breakdown.phonetic_boost);
            println!("   Score:          {:.3}", breakdown.score);
            println!(
                "   Accepted:       {}",
                breakdown.score >= config.acceptance_threshold
            );
        }

        Commands::Phonetic { words } => {
            for word in words {
                let code = phonetic_code(&word);
                println!("{} → {}", word, if code.is_empty() { "-" } else { code.as_str() });
            }
        }
    }

    Ok(())
}
