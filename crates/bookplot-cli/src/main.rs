use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use bookplot_core::catalog::HttpFetcher;
use bookplot_core::pipeline::{PageContext, Pipeline, ReportOutcome};
use bookplot_core::sqlite::SqliteFavorites;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bookplot",
    about = "Browse the book catalogue, curate favorites, chart their prices"
)]
struct Cli {
    /// SQLite database holding the favorites table.
    #[arg(long, default_value = "bookplot.sqlite3")]
    db: PathBuf,

    /// Catalogue site to scrape.
    #[arg(long, default_value = "https://books.toscrape.com")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List the books on one catalogue page.
    Browse {
        #[arg(long, default_value_t = 1)]
        page: u32,
        /// Emit the listing as JSON instead of columns.
        #[arg(long)]
        json: bool,
    },
    /// Favorite the given titles from a catalogue page.
    Favorite {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(required = true)]
        titles: Vec<String>,
    },
    /// Remove one title from the favorites.
    Remove { title: String },
    /// Render the favorite-price bar chart.
    Report {
        /// Where to write the chart image.
        #[arg(long, default_value = "chart.svg")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let pipeline = Pipeline::new(
        Arc::new(HttpFetcher),
        Arc::new(SqliteFavorites::new(&cli.db)),
        cli.base_url.as_str(),
    );

    match cli.command {
        Command::Browse { page, json } => {
            let books = pipeline.browse(&PageContext { page })?;
            if json {
                println!("{}", serde_json::to_string_pretty(&books)?);
            } else {
                for book in &books {
                    let price = book
                        .price
                        .map(|value| format!("£{value:.2}"))
                        .unwrap_or_else(|| "-".to_string());
                    println!("{price:>8}  {:<14}  {}", book.availability, book.title);
                }
            }
        }
        Command::Favorite { page, titles } => {
            let stored = pipeline.favorite(&PageContext { page }, &titles)?;
            if stored.is_empty() {
                println!("No listed book matched the given titles.");
            } else {
                println!("Added to favorites: {}", stored.join(", "));
            }
        }
        Command::Remove { title } => {
            pipeline.unfavorite(&title)?;
            println!("Book removed successfully.");
        }
        Command::Report { out } => match pipeline.report()? {
            ReportOutcome::NoFavorites => {
                println!("No books have been added to favorites yet.");
            }
            ReportOutcome::Chart(payload) => {
                fs::write(&out, payload)
                    .with_context(|| format!("writing chart to {}", out.display()))?;
                println!("Chart written to {}.", out.display());
            }
        },
    }

    Ok(())
}
