//! Feed-invalidating company repository decorator.

use std::sync::Arc;

use async_trait::async_trait;

use calfeed_core::calendar::Company;
use calfeed_core::feed::FeedService;
use calfeed_core::storage::{CompanyRepository, Result};

/// Company repository decorator.
///
/// The company name is part of every feed document, so a successful rename
/// invalidates that company's feed.
pub struct InvalidatingCompanyRepository<R>
where
    R: CompanyRepository,
{
    repository: Arc<R>,
    feeds: FeedService,
}

impl<R> InvalidatingCompanyRepository<R>
where
    R: CompanyRepository,
{
    /// Creates a new invalidating company repository.
    pub fn new(repository: Arc<R>, feeds: FeedService) -> Self {
        Self { repository, feeds }
    }
}

#[async_trait]
impl<R> CompanyRepository for InvalidatingCompanyRepository<R>
where
    R: CompanyRepository + 'static,
{
    async fn get_company(&self, id: &str) -> Result<Option<Company>> {
        self.repository.get_company(id).await
    }

    async fn create_company(&self, company: &Company) -> Result<()> {
        self.repository.create_company(company).await?;
        tracing::debug!(company_id = %company.id, "Company created");
        Ok(())
    }

    async fn update_company(&self, company: &Company) -> Result<()> {
        self.repository.update_company(company).await?;

        self.feeds.invalidate(&company.id);

        tracing::debug!(company_id = %company.id, "Company updated");
        Ok(())
    }
}
