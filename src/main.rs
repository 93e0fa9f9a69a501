use anyhow::Context;
use clap::Parser;
use vendor_directory::config::cli::{Command, SearchArgs, SuggestArgs};
use vendor_directory::config::toml_config::load_criteria;
use vendor_directory::core::ConfigProvider;
use vendor_directory::utils::error::ErrorCategory;
use vendor_directory::utils::{logger, validation::Validate};
use vendor_directory::{
    CliConfig, DirectoryConfig, DirectoryError, JsonFileRepository, NewVendor, SuggestRequest,
    VendorDirectory,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let mut config = match &cli.config {
        Some(path) => DirectoryConfig::from_file(path)
            .with_context(|| format!("Failed to load config file '{}'", path.display()))?,
        None => DirectoryConfig::default(),
    };
    if let Some(data_file) = &cli.data_file {
        config.storage.data_file = data_file.clone();
    }

    let verbose = cli.verbose || config.verbose();
    if config.json_logging() {
        logger::init_json_logger(verbose);
    } else {
        logger::init_cli_logger(verbose);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(exit_code(&e));
    }

    tracing::debug!("Using vendor store {}", config.data_file());
    let repository = JsonFileRepository::new(config.data_file());
    let directory = VendorDirectory::new(repository, config.default_limit());

    if let Err(e) = run(&directory, cli.command).await {
        match e.downcast_ref::<DirectoryError>() {
            Some(err) => {
                tracing::error!("{} (category: {:?})", err, err.category());
                eprintln!("❌ {}", err.user_friendly_message());
                eprintln!("💡 {}", err.recovery_suggestion());
                std::process::exit(exit_code(err));
            }
            None => return Err(e),
        }
    }

    Ok(())
}

async fn run(directory: &VendorDirectory<JsonFileRepository>, command: Command) -> anyhow::Result<()> {
    match command {
        Command::Register { file } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read '{}'", file.display()))?;
            let data = NewVendor::from_json(&content)?;
            let vendor = directory.register(data).await?;
            print_json(&vendor)?;
        }
        Command::Get { id } => match directory.get(&id).await? {
            Some(vendor) => print_json(&vendor)?,
            None => return Err(DirectoryError::NotFound { id }.into()),
        },
        Command::List => {
            let vendors = directory.list().await?;
            print_json(&vendors)?;
        }
        Command::Search(args) => {
            let vendors = search(directory, &args).await?;
            print_json(&vendors)?;
        }
        Command::Suggest(args) => {
            let vendors = suggest(directory, args).await?;
            print_json(&vendors)?;
        }
    }
    Ok(())
}

async fn search(
    directory: &VendorDirectory<JsonFileRepository>,
    args: &SearchArgs,
) -> anyhow::Result<Vec<vendor_directory::Vendor>> {
    let criteria = match &args.criteria {
        Some(path) => load_criteria(path)?.merge(args.flag_criteria()),
        None => args.flag_criteria(),
    };
    Ok(directory.search(&criteria).await?)
}

async fn suggest(
    directory: &VendorDirectory<JsonFileRepository>,
    args: SuggestArgs,
) -> anyhow::Result<Vec<vendor_directory::Vendor>> {
    let vendors = match (args.title, args.description) {
        (Some(title), Some(description)) => {
            directory
                .suggest_for_contract(&title, &description, args.services, args.limit)
                .await?
        }
        _ => {
            directory
                .suggest(&SuggestRequest {
                    keywords: args.keywords,
                    services: args.services,
                    limit: args.limit,
                })
                .await?
        }
    };
    Ok(vendors)
}

fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn exit_code(e: &DirectoryError) -> i32 {
    match e.category() {
        ErrorCategory::Validation => 2,
        ErrorCategory::Storage => 1,
        ErrorCategory::Configuration => 3,
    }
}
