//! Accounting periods.

use chrono::NaiveDate;
use continental_shared::types::{CompanyId, PeriodId};
use serde::{Deserialize, Serialize};

use super::error::LedgerError;

/// Status of a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodStatus {
    /// Period is open for posting.
    Open,
    /// Period is closed, no new moves allowed.
    Closed,
}

/// An accounting period of a company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Unique identifier.
    pub id: PeriodId,
    /// Company this period belongs to.
    pub company: CompanyId,
    /// Period name (e.g., "2026-10").
    pub name: String,
    /// First day of the period.
    pub start_date: NaiveDate,
    /// Last day of the period.
    pub end_date: NaiveDate,
    /// Current status.
    pub status: PeriodStatus,
}

impl Period {
    /// Creates an open period.
    #[must_use]
    pub fn open(
        company: CompanyId,
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Self {
        Self {
            id: PeriodId::new(),
            company,
            name: name.into(),
            start_date,
            end_date,
            status: PeriodStatus::Open,
        }
    }

    /// Returns true if moves can be posted to this period.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.status == PeriodStatus::Open
    }

    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// Finds the open period of `company` containing `date`.
///
/// # Errors
///
/// Returns `PeriodClosed` if only closed or locked periods contain the
/// date, `NoPeriod` if none does.
pub fn find_period<'a, I>(periods: I, company: CompanyId, date: NaiveDate) -> Result<&'a Period, LedgerError>
where
    I: IntoIterator<Item = &'a Period>,
{
    let mut closed = None;
    for period in periods {
        if period.company != company || !period.contains_date(date) {
            continue;
        }
        if period.is_open() {
            return Ok(period);
        }
        closed.get_or_insert(period.id);
    }
    Err(closed.map_or(LedgerError::NoPeriod { company, date }, LedgerError::PeriodClosed))
}
