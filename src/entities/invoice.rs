//! Invoice entity - billing records and the monthly revenue series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Payment status of an invoice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Settled
    Paid,
    /// Issued, not yet due or not yet paid
    Pending,
    /// Past due date and unpaid
    Overdue,
}

impl InvoiceStatus {
    /// Wire name and badge text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::Pending => "pending",
            Self::Overdue => "overdue",
        }
    }
}

/// Invoice record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    /// Identifier such as `INV-001`
    pub id: String,
    /// Project name (display string)
    pub project: String,
    /// Client name (display string)
    pub client: String,
    /// Invoiced amount in whole currency units
    pub amount: u64,
    /// Payment status
    pub status: InvoiceStatus,
    /// Date payment is due
    pub due_date: NaiveDate,
    /// Underlying contract value, when known
    #[serde(default)]
    pub contract_value: Option<u64>,
}

/// One month of the revenue-versus-expenses series.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueData {
    /// Short month name
    pub month: String,
    /// Revenue booked that month
    pub revenue: u64,
    /// Expenses booked that month
    pub expenses: u64,
}

impl RevenueData {
    /// Revenue minus expenses; negative when the month ran at a loss.
    #[must_use]
    pub fn margin(&self) -> i64 {
        i64::try_from(self.revenue).unwrap_or(i64::MAX)
            - i64::try_from(self.expenses).unwrap_or(i64::MAX)
    }
}
