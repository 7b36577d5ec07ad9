use async_trait::async_trait;

use super::portfolio_model::InvestorDashboard;
use crate::cap_table::{CapTableView, FundingRound};
use crate::errors::Result;
use crate::table::{PageRequest, TableQuery};

/// Dashboard and cap-table reads over the funding rounds of the record source.
#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Builds the dashboard of `investor_id`.
    ///
    /// Rows are the rounds the investor holds entries in, filtered, sorted and
    /// paginated by `query`. The summary covers every row matching the query,
    /// not just the visible page.
    async fn get_investor_dashboard(
        &self,
        investor_id: &str,
        query: &TableQuery,
    ) -> Result<InvestorDashboard>;

    /// Dashboard of the authenticated user, or `None` when no profile is available.
    async fn get_current_investor_dashboard(
        &self,
        query: &TableQuery,
    ) -> Result<Option<InvestorDashboard>>;

    async fn get_startup_rounds(&self, startup_id: &str) -> Result<Vec<FundingRound>>;

    /// Cap table of one round for the requested page; `None` when the round can't be loaded.
    async fn get_cap_table(
        &self,
        round_id: &str,
        request: &PageRequest,
    ) -> Result<Option<CapTableView>>;
}
