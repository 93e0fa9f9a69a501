use crate::core::{NewVendor, Vendor, VendorRepository};
use crate::utils::error::Result;
use async_trait::async_trait;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use uuid::Uuid;

/// Vendors kept as one pretty-printed JSON array on disk.
#[derive(Debug)]
pub struct JsonFileRepository {
    path: PathBuf,
    // serializes read-modify-write cycles
    lock: Mutex<()>,
}

impl JsonFileRepository {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    async fn ensure_file(&self) -> Result<()> {
        if tokio::fs::try_exists(&self.path).await? {
            return Ok(());
        }

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        tracing::info!("Initializing vendor store at {}", self.path.display());
        tokio::fs::write(&self.path, "[]").await?;
        Ok(())
    }

    async fn read_vendors(&self) -> Result<Vec<Vendor>> {
        self.ensure_file().await?;
        let data = tokio::fs::read(&self.path).await?;
        let vendors = serde_json::from_slice(&data)?;
        Ok(vendors)
    }

    async fn write_vendors(&self, vendors: &[Vendor]) -> Result<()> {
        let data = serde_json::to_vec_pretty(vendors)?;
        tokio::fs::write(&self.path, data).await?;
        Ok(())
    }
}

#[async_trait]
impl VendorRepository for JsonFileRepository {
    async fn list_all(&self) -> Result<Vec<Vendor>> {
        let _guard = self.lock.lock().await;
        self.read_vendors().await
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Vendor>> {
        let _guard = self.lock.lock().await;
        let vendors = self.read_vendors().await?;
        Ok(vendors.into_iter().find(|v| v.id == id))
    }

    async fn create(&self, data: NewVendor) -> Result<Vendor> {
        let _guard = self.lock.lock().await;
        let mut vendors = self.read_vendors().await?;

        let vendor = data.into_vendor(Uuid::new_v4().to_string(), Utc::now())?;
        vendors.push(vendor.clone());
        self.write_vendors(&vendors).await?;

        tracing::debug!("Vendor store now holds {} records", vendors.len());
        Ok(vendor)
    }
}
