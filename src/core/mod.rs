pub mod directory;
pub mod keywords;
pub mod query;

pub use crate::domain::model::{
    NewVendor, NewVendorContact, SearchCriteria, SuggestRequest, Vendor, VendorContact,
};
pub use crate::domain::ports::{ConfigProvider, VendorRepository};
pub use crate::utils::error::Result;
