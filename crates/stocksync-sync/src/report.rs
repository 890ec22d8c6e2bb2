//! Run and push summaries.

use chrono::{DateTime, TimeDelta, Utc};
use stocksync_marketplace::{ImportItem, ImportResponse};

use crate::Phase;

/// Outcome of pushing one phase.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PushReport {
    /// Import calls made.
    pub batches: usize,
    /// Updates sent.
    pub items: usize,
    /// Updates the marketplace reported as not applied.
    pub rejected: Vec<ImportItem>,
}

impl PushReport {
    /// Records the response to one batch of `items` updates.
    pub(crate) fn record(&mut self, phase: Phase, items: usize, response: ImportResponse) {
        self.batches += 1;
        self.items += items;
        for item in response.result.into_iter().filter(|item| !item.updated) {
            let reasons: Vec<&str> = item.errors.iter().map(|e| e.code.as_str()).collect();
            tracing::warn!(%phase, offer_id = %item.offer_id, ?reasons, "update rejected");
            self.rejected.push(item);
        }
    }

    /// Returns the number of updates the marketplace applied or did not report on.
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.items.saturating_sub(self.rejected.len())
    }
}

/// Summary of a full sync run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Offers listed on the marketplace.
    pub offers: usize,
    /// Rows read from the supplier feed.
    pub records: usize,
    /// Offers left with non-zero stock.
    pub in_stock: usize,
    /// Stock push outcome.
    pub stocks: PushReport,
    /// Price push outcome.
    pub prices: PushReport,
    /// When the run started.
    pub started_at: DateTime<Utc>,
    /// When the run finished.
    pub finished_at: DateTime<Utc>,
}

impl RunSummary {
    /// Returns the wall-clock duration of the run.
    #[must_use]
    pub fn elapsed(&self) -> TimeDelta {
        self.finished_at - self.started_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stocksync_marketplace::ImportItemError;
    use stocksync_types::OfferId;

    #[test]
    fn test_record_counts_rejections() {
        let response = ImportResponse {
            result: vec![
                ImportItem {
                    offer_id: OfferId::new("a"),
                    updated: true,
                    ..Default::default()
                },
                ImportItem {
                    offer_id: OfferId::new("b"),
                    updated: false,
                    errors: vec![ImportItemError {
                        code: "NOT_FOUND".to_string(),
                        message: String::new(),
                    }],
                    ..Default::default()
                },
            ],
        };

        let mut report = PushReport::default();
        report.record(Phase::Stocks, 2, response);
        report.record(Phase::Stocks, 1, ImportResponse::default());

        assert_eq!(report.batches, 2);
        assert_eq!(report.items, 3);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.accepted(), 2);
    }
}
