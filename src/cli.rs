// src/cli.rs
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::listing::{parse_facet, FilterSpec, ListableItem, QueryEngine, Record, SortSpec};
use crate::models::{sample, Application, Interview, Job};
use crate::templates::TemplateLibrary;

#[derive(Parser)]
#[command(name = "jobdeck")]
#[command(about = "Resume template content and job-board listing queries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (defaults to ./jobdeck.yaml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List resume templates
    Templates {
        /// Category name, or "All Templates"
        #[arg(long)]
        category: Option<String>,
        /// Matches name, description and suitable-for tags
        #[arg(long)]
        search: Option<String>,
    },
    /// Show the content suggestions for an industry
    Suggest { industry: String },
    /// Generate summary, skills and achievements for an industry
    Generate {
        #[arg(long)]
        industry: String,
        /// Experience band inserted verbatim, e.g. "3-5"
        #[arg(long)]
        experience: String,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Filter, sort and page a data set
    Query(QueryArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Dataset {
    Jobs,
    Applications,
    Interviews,
    Records,
}

#[derive(Args)]
pub struct QueryArgs {
    pub dataset: Dataset,

    /// JSON or CSV data file; the sample data is used when omitted
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Free-text search
    #[arg(long)]
    pub search: Option<String>,

    /// Field searched by free text (repeatable)
    #[arg(long = "search-field")]
    pub search_fields: Vec<String>,

    /// Exact-match facet as field=value (repeatable)
    #[arg(long = "facet")]
    pub facets: Vec<String>,

    /// Sort as field, field:asc or field:desc
    #[arg(long)]
    pub sort: Option<String>,

    #[arg(long)]
    pub page: Option<usize>,

    #[arg(long)]
    pub page_size: Option<usize>,
}

impl QueryArgs {
    fn filter(&self) -> Result<FilterSpec> {
        let mut filter = FilterSpec::new();
        if let Some(text) = &self.search {
            filter = filter.with_text(text.clone());
        }
        for raw in &self.facets {
            let (field, value) = parse_facet(raw)?;
            filter = filter.with_facet(field, value);
        }
        Ok(filter)
    }

    fn sort_spec(&self) -> Result<Option<SortSpec>> {
        Ok(self.sort.as_deref().map(str::parse::<SortSpec>).transpose()?)
    }

    fn engine(&self, default_fields: Vec<String>) -> QueryEngine {
        if self.search_fields.is_empty() {
            QueryEngine::new(default_fields)
        } else {
            QueryEngine::new(self.search_fields.iter().cloned())
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{}", json);
    Ok(())
}

fn load_typed<T>(args: &QueryArgs, fallback: fn() -> crate::Result<Vec<T>>) -> Result<Vec<T>>
where
    T: serde::de::DeserializeOwned,
{
    match &args.data {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse data file: {}", path.display()))
        }
        None => Ok(fallback()?),
    }
}

fn run_query<T>(items: &[T], args: &QueryArgs, engine: QueryEngine, config: &AppConfig) -> Result<()>
where
    T: ListableItem + Serialize,
{
    let filter = args.filter()?;
    let sort = args.sort_spec()?;
    let page = config.page_spec(args.page, args.page_size)?;

    info!(
        "Querying {} items, search fields {:?}, {}",
        items.len(),
        engine.search_fields(),
        page
    );

    let result = engine.query(items, &filter, sort.as_ref(), page);
    print_json(&result)
}

fn handle_query(args: &QueryArgs, config: &AppConfig) -> Result<()> {
    match args.dataset {
        Dataset::Jobs => {
            let jobs: Vec<Job> = load_typed(args, sample::jobs)?;
            run_query(&jobs, args, args.engine(default_fields::<Job>()), config)
        }
        Dataset::Applications => {
            let applications: Vec<Application> = load_typed(args, sample::applications)?;
            run_query(
                &applications,
                args,
                args.engine(default_fields::<Application>()),
                config,
            )
        }
        Dataset::Interviews => {
            let interviews: Vec<Interview> = load_typed(args, sample::interviews)?;
            run_query(
                &interviews,
                args,
                args.engine(default_fields::<Interview>()),
                config,
            )
        }
        Dataset::Records => {
            let path = args
                .data
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("The records data set requires --data"))?;
            let records = Record::load(path)?;
            let engine = args.engine(Record::text_field_names(&records));
            run_query(&records, args, engine, config)
        }
    }
}

fn default_fields<T: ListableItem>() -> Vec<String> {
    T::SEARCH_FIELDS.iter().map(|f| f.to_string()).collect()
}

pub fn handle_command(cli: Cli, config: &AppConfig, library: &TemplateLibrary) -> Result<()> {
    match cli.command {
        Command::Templates { category, search } => {
            let templates = library.list_templates(category.as_deref(), search.as_deref());
            info!("Found {} templates", templates.len());
            print_json(&templates)
        }

        Command::Suggest { industry } => match library.get_content_suggestions(&industry) {
            Some(bundle) => print_json(bundle),
            None => {
                warn!("No content suggestions for industry: {}", industry);
                println!(
                    "No suggestions available for '{}'. Known industries: {}",
                    industry,
                    library.content().industries().join(", ")
                );
                Ok(())
            }
        },

        Command::Generate {
            industry,
            experience,
            seed,
        } => {
            let mut rng = config.rng(seed);
            match library.generate_content(&industry, &experience, &mut rng) {
                Some(content) => print_json(&content),
                None => {
                    warn!("Cannot generate content for unknown industry: {}", industry);
                    println!("No content available for '{}'", industry);
                    Ok(())
                }
            }
        }

        Command::Query(args) => handle_query(&args, config),
    }
}
