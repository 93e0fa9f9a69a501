use crate::domain::model::SearchCriteria;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "vendor-directory")]
#[command(about = "Register, search and suggest vendors from a JSON vendor store")]
pub struct CliConfig {
    /// Path to TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Vendor store location, overrides `storage.data_file`
    #[arg(long, global = true)]
    pub data_file: Option<String>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Register a vendor from a JSON file
    Register { file: PathBuf },
    /// Show one vendor
    Get { id: String },
    /// List every vendor in insertion order
    List,
    /// Filter vendors by criteria
    Search(SearchArgs),
    /// Rank vendors against keywords and services
    Suggest(SuggestArgs),
}

#[derive(Debug, Clone, Default, Args)]
pub struct SearchArgs {
    /// Criteria file, TOML or JSON by extension
    #[arg(long)]
    pub criteria: Option<PathBuf>,

    #[arg(long = "keyword")]
    pub keywords: Vec<String>,

    #[arg(long = "service")]
    pub services: Vec<String>,

    #[arg(long)]
    pub province: Option<String>,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long = "certification")]
    pub certifications: Vec<String>,

    #[arg(long = "language")]
    pub languages: Vec<String>,
}

impl SearchArgs {
    pub fn flag_criteria(&self) -> SearchCriteria {
        SearchCriteria {
            keywords: self.keywords.clone(),
            services: self.services.clone(),
            province: self.province.clone(),
            city: self.city.clone(),
            certifications: self.certifications.clone(),
            languages: self.languages.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, Args)]
pub struct SuggestArgs {
    #[arg(long = "keyword")]
    pub keywords: Vec<String>,

    #[arg(long = "service")]
    pub services: Vec<String>,

    /// Maximum results; non-positive values use the configured default
    #[arg(long, allow_negative_numbers = true)]
    pub limit: Option<i64>,

    /// Contract title to derive keywords from
    #[arg(long, requires = "description")]
    pub title: Option<String>,

    /// Contract description to derive keywords from
    #[arg(long, requires = "title")]
    pub description: Option<String>,
}
