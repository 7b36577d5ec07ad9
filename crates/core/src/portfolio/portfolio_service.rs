use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use super::portfolio_aggregator::{build_investment_rows, summarize_portfolio};
use super::portfolio_model::InvestorDashboard;
use super::portfolio_traits::PortfolioServiceTrait;
use crate::cap_table::{build_cap_table_view, rounds_for_startup, CapTableView, FundingRound};
use crate::errors::Result;
use crate::fx::ConversionTable;
use crate::records::{EntityKind, RecordKind, RecordService};
use crate::settings::EngineSettings;
use crate::table::{PageRequest, TableQuery, TableRow};

pub struct PortfolioService {
    records: Arc<RecordService>,
    conversion_table: Arc<ConversionTable>,
}

impl PortfolioService {
    pub fn new(records: Arc<RecordService>, conversion_table: Arc<ConversionTable>) -> Self {
        Self {
            records,
            conversion_table,
        }
    }

    /// Normalizes into the configured conversion table's reporting currency.
    pub fn from_settings(records: Arc<RecordService>, settings: &EngineSettings) -> Self {
        Self::new(records, Arc::new(settings.conversion_table.clone()))
    }

    /// All funding rounds; a round that can't be decoded fails the whole load.
    async fn load_rounds(&self) -> Result<Vec<FundingRound>> {
        let records = self.records.load_all(RecordKind::FundingRounds).await;
        FundingRound::from_records(&records)
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    async fn get_investor_dashboard(
        &self,
        investor_id: &str,
        query: &TableQuery,
    ) -> Result<InvestorDashboard> {
        let rounds = self.load_rounds().await?;
        let rows = build_investment_rows(&rounds, investor_id, &self.conversion_table);
        debug!(
            "Investor {} holds entries in {} of {} rounds",
            investor_id,
            rows.len(),
            rounds.len()
        );

        let avatars = self
            .records
            .resolve_resources(
                EntityKind::Startup,
                rows.iter().filter_map(|row| row.startup_id.clone()),
            )
            .await;

        let result = query.apply(&TableRow::many(rows)?);
        let matching: Vec<_> = result.rows.into_iter().map(TableRow::into_value).collect();
        let summary = summarize_portfolio(&matching, self.conversion_table.reporting_currency());

        Ok(InvestorDashboard {
            investor_id: investor_id.to_string(),
            summary,
            rows: result.page.map(TableRow::into_value),
            avatars,
        })
    }

    async fn get_current_investor_dashboard(
        &self,
        query: &TableQuery,
    ) -> Result<Option<InvestorDashboard>> {
        let Some(investor_id) = self
            .records
            .load_current_user()
            .await
            .and_then(|user| user.id())
        else {
            return Ok(None);
        };
        self.get_investor_dashboard(&investor_id, query)
            .await
            .map(Some)
    }

    async fn get_startup_rounds(&self, startup_id: &str) -> Result<Vec<FundingRound>> {
        let rounds = self.load_rounds().await?;
        Ok(rounds_for_startup(&rounds, startup_id))
    }

    async fn get_cap_table(
        &self,
        round_id: &str,
        request: &PageRequest,
    ) -> Result<Option<CapTableView>> {
        match self.records.load_one(RecordKind::FundingRounds, round_id).await {
            Some(record) => {
                let round = FundingRound::from_record(&record)?;
                Ok(Some(build_cap_table_view(&round, request)))
            }
            None => Ok(None),
        }
    }
}
