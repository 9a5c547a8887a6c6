//! Invoice store - billing records and the monthly revenue series.

use crate::{
    data::DataSource,
    entities::{Invoice, InvoiceStatus, RevenueData},
};
use tracing::debug;

/// Read-only view over invoices and revenue.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InvoiceStore {
    invoices: Vec<Invoice>,
    revenue_data: Vec<RevenueData>,
}

impl InvoiceStore {
    /// Builds a store populated from `source`.
    #[must_use]
    pub fn from_source(source: &dyn DataSource) -> Self {
        let mut store = Self::default();
        store.fetch_invoices(source);
        store
    }

    /// Re-assigns invoices and revenue from `source`.
    pub fn fetch_invoices(&mut self, source: &dyn DataSource) {
        self.invoices = source.invoices();
        self.revenue_data = source.revenue_data();
        debug!(
            invoices = self.invoices.len(),
            months = self.revenue_data.len(),
            "Fetched invoices"
        );
    }

    #[must_use]
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    #[must_use]
    pub fn revenue_data(&self) -> &[RevenueData] {
        &self.revenue_data
    }

    /// Invoices awaiting payment. Overdue invoices are not included.
    pub fn pending_invoices(&self) -> impl Iterator<Item = &Invoice> {
        self.invoices
            .iter()
            .filter(|i| i.status == InvoiceStatus::Pending)
    }

    /// Sum of all pending invoice amounts.
    #[must_use]
    pub fn pending_total(&self) -> u64 {
        self.pending_invoices().map(|i| i.amount).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::MockData;

    #[test]
    fn test_pending_invoices() {
        let store = InvoiceStore::from_source(&MockData);
        let ids: Vec<_> = store.pending_invoices().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["INV-002", "INV-004"]);
    }

    #[test]
    fn test_pending_total() {
        let store = InvoiceStore::from_source(&MockData);
        assert_eq!(store.pending_total(), 2_020_000);
    }

    #[test]
    fn test_empty_store_totals_zero() {
        assert_eq!(InvoiceStore::default().pending_total(), 0);
    }

    #[test]
    fn test_revenue_series() {
        let store = InvoiceStore::from_source(&MockData);
        assert_eq!(store.revenue_data().len(), 6);
        assert_eq!(store.revenue_data()[3].margin(), 600_000);
    }
}
