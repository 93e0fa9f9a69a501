use crate::core::keywords::contract_keywords;
use crate::core::query;
use crate::core::{NewVendor, SearchCriteria, SuggestRequest, Vendor, VendorRepository};
use crate::utils::error::Result;
use crate::utils::validation::Validate;

/// Repository-backed front for the query engine.
pub struct VendorDirectory<R: VendorRepository> {
    repository: R,
    default_limit: usize,
}

impl<R: VendorRepository> VendorDirectory<R> {
    pub fn new(repository: R, default_limit: usize) -> Self {
        Self {
            repository,
            default_limit,
        }
    }

    pub async fn register(&self, data: NewVendor) -> Result<Vendor> {
        if let Err(e) = data.validate() {
            tracing::warn!("Rejected vendor registration: {}", e);
            return Err(e);
        }

        let vendor = self.repository.create(data).await?;
        tracing::info!("Registered vendor {} ({})", vendor.company_name, vendor.id);
        Ok(vendor)
    }

    pub async fn get(&self, id: &str) -> Result<Option<Vendor>> {
        let vendor = self.repository.get_by_id(id).await?;
        if vendor.is_none() {
            tracing::debug!("Vendor {} not found", id);
        }
        Ok(vendor)
    }

    pub async fn list(&self) -> Result<Vec<Vendor>> {
        self.repository.list_all().await
    }

    pub async fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Vendor>> {
        let vendors = self.repository.list_all().await?;
        tracing::debug!("Searching {} vendors with {:?}", vendors.len(), criteria);

        let matches = query::search(&vendors, criteria);
        tracing::info!("Search matched {} of {} vendors", matches.len(), vendors.len());
        Ok(matches)
    }

    pub async fn suggest(&self, request: &SuggestRequest) -> Result<Vec<Vendor>> {
        let limit = request.effective_limit(self.default_limit);
        let vendors = self.repository.list_all().await?;
        tracing::debug!(
            "Scoring {} vendors against {} keywords and {} services (limit {})",
            vendors.len(),
            request.keywords.len(),
            request.services.len(),
            limit
        );

        let suggestions = query::suggest(&vendors, &request.keywords, &request.services, limit);
        tracing::info!("Suggested {} vendors", suggestions.len());
        Ok(suggestions)
    }

    pub async fn suggest_for_contract(
        &self,
        title: &str,
        description: &str,
        services: Vec<String>,
        limit: Option<i64>,
    ) -> Result<Vec<Vendor>> {
        let keywords = contract_keywords(title, description);
        tracing::debug!("Contract keywords: {:?}", keywords);

        self.suggest(&SuggestRequest {
            keywords,
            services,
            limit,
        })
        .await
    }
}
