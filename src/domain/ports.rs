use crate::domain::model::{NewVendor, Vendor};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait VendorRepository: Send + Sync {
    /// All vendors in insertion order.
    async fn list_all(&self) -> Result<Vec<Vendor>>;
    async fn get_by_id(&self, id: &str) -> Result<Option<Vendor>>;
    /// Persists a new vendor, assigning `id`, `createdAt` and `updatedAt`.
    async fn create(&self, data: NewVendor) -> Result<Vendor>;
}

pub trait ConfigProvider: Send + Sync {
    fn data_file(&self) -> &str;
    fn default_limit(&self) -> usize;
}
