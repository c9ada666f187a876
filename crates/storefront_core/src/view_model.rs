use crate::record::{Draft, Record};
use crate::state::SubmitStatus;

/// Derived presentation state. Recomputed from controller state on every
/// projection; never stored, never replayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewStatus {
    Loading,
    Empty,
    Error(String),
    Ready,
}

/// One filtered list row plus its ready-to-render money display.
#[derive(Debug, Clone, PartialEq)]
pub struct ListRowView {
    pub record: Record,
    pub price_display: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListViewModel {
    pub status: ViewStatus,
    /// Snapshot filtered by the search term. Still populated under
    /// `ViewStatus::Error` (stale-but-visible).
    pub rows: Vec<ListRowView>,
    pub search_term: String,
    /// A non-empty search term matched nothing. Distinct from `Empty`,
    /// which means the collection itself has no records.
    pub no_matches: bool,
    /// Target of the open confirmation dialog, if any.
    pub pending_deletion: Option<Record>,
    pub delete_in_flight: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Transient outcome message derived from the submit status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub severity: Severity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormViewModel {
    pub status: ViewStatus,
    pub editing: bool,
    pub draft: Draft,
    pub submit_status: SubmitStatus,
    pub banner: Option<Banner>,
    pub submit_disabled: bool,
}

/// Brazilian-real rendition of a monetary amount: "R$ 1.234,56".
pub fn format_brl(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("R$ {sign}{grouped},{fraction:02}")
}
