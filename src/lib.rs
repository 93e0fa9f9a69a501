pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use self::config::CliConfig;
pub use self::config::DirectoryConfig;

pub use self::adapters::JsonFileRepository;
pub use self::core::{directory::VendorDirectory, keywords::contract_keywords, query};
pub use self::domain::model::{
    NewVendor, NewVendorContact, SearchCriteria, SuggestRequest, Vendor, VendorContact,
};
pub use self::utils::error::{DirectoryError, Result};
