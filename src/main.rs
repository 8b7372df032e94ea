use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::de::DeserializeOwned;

use facetstore::{FilterState, Record, RecordStore, TableOutput, fixtures};

/// Filter and summarize the demo datasets from the command line.
#[derive(Parser)]
#[command(name = "facetstore", version, about)]
struct Cli {
    /// Dataset to load
    #[arg(value_enum)]
    dataset: Dataset,

    /// Load records from a JSON file instead of the built-in fixtures
    #[arg(long)]
    file: Option<PathBuf>,

    /// Free-text search term
    #[arg(long)]
    search: Option<String>,

    /// Facet selection, repeatable, e.g. --facet status=active
    #[arg(long = "facet", value_name = "NAME=VALUE")]
    facets: Vec<String>,

    /// Numeric field to sum in the summary, repeatable
    #[arg(long = "sum", value_name = "FIELD")]
    sums: Vec<String>,

    /// Print the summary as JSON instead of plain text
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Dataset {
    Campaigns,
    Contracts,
    Payments,
    Users,
    Creators,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.dataset {
        Dataset::Campaigns => run(
            load(&cli, fixtures::campaigns)?,
            &cli,
            &["id", "name", "status", "start_date", "end_date", "budget", "spent"],
        ),
        Dataset::Contracts => run(
            load(&cli, fixtures::contracts)?,
            &cli,
            &["id", "creator", "campaign", "status", "created_at"],
        ),
        Dataset::Payments => run(
            load(&cli, fixtures::payments)?,
            &cli,
            &["id", "campaign", "creator", "brand", "amount", "status", "due_date"],
        ),
        Dataset::Users => run(
            load(&cli, fixtures::users)?,
            &cli,
            &["id", "name", "email", "role", "status", "joined_at"],
        ),
        Dataset::Creators => run(
            load(&cli, fixtures::creators)?,
            &cli,
            &["id", "name", "username", "platform", "category", "followers", "engagement"],
        ),
    }
}

fn load<R>(cli: &Cli, fixture: fn() -> RecordStore<R>) -> Result<RecordStore<R>>
where
    R: Record + DeserializeOwned,
{
    match &cli.file {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Ok(RecordStore::from_json(&text)?)
        }
        None => Ok(fixture()),
    }
}

fn run<R: Record>(store: RecordStore<R>, cli: &Cli, columns: &[&str]) -> Result<()> {
    let mut state = FilterState::new();
    if let Some(term) = &cli.search {
        state = state.search(term);
    }
    for pair in &cli.facets {
        let (name, value) = pair
            .split_once('=')
            .with_context(|| format!("facet '{pair}' must be NAME=VALUE"))?;
        state = state.facet(name, value);
    }

    let visible = store.filtered(&state);
    print!("{}", TableOutput::from_records(&visible, columns));

    let fields: Vec<&str> = cli.sums.iter().map(String::as_str).collect();
    let summary = store.summarize(&fields);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("Total records: {}", summary.count);
        for (status, n) in &summary.by_status {
            println!("  {status}: {n}");
        }
        for (field, total) in &summary.sums {
            println!("  sum({field}) = {total}");
        }
    }
    Ok(())
}
