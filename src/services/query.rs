//! Transaction query engine: filtering, ordering, pagination
//!
//! Queries run in three steps: filter the register, sort it most recent
//! first, then slice out the requested page. Pagination metadata always
//! describes the filtered set, so totals stay truthful even when the caller
//! asks for a page past the end.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, LedgerResult};
use crate::models::{TransactionCategory, TransactionRecord};

/// Filter criteria for the transaction register
///
/// All fields are optional; an empty filter matches everything. Date bounds
/// are inclusive.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub category: Option<TransactionCategory>,
}

impl TransactionFilter {
    /// Filter matching every transaction
    pub fn all() -> Self {
        Self::default()
    }

    /// Restrict to transactions on or after `date`
    pub fn from_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Restrict to transactions on or before `date`
    pub fn to_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Restrict to one category
    pub fn with_category(mut self, category: TransactionCategory) -> Self {
        self.category = Some(category);
        self
    }

    /// Whether a record passes this filter
    pub fn matches(&self, txn: &TransactionRecord) -> bool {
        if let Some(start) = self.start_date {
            if txn.date < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if txn.date > end {
                return false;
            }
        }
        if let Some(category) = self.category {
            if txn.category != category {
                return false;
            }
        }
        true
    }
}

/// Pagination metadata describing the filtered set
///
/// Field names follow the on-disk/export JSON contract, which uses camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub current_page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_records: usize,
    pub has_next_page: bool,
    pub has_previous_page: bool,
}

impl PaginationInfo {
    /// Compute metadata for a filtered set of `total_records` items
    ///
    /// `total_pages` is reported as at least 1 even for an empty set, so a
    /// pager always has a page to stand on.
    pub fn new(current_page: usize, page_size: usize, total_records: usize) -> Self {
        let total_pages = if total_records == 0 {
            1
        } else {
            total_records.div_ceil(page_size)
        };

        Self {
            current_page,
            page_size,
            total_pages,
            total_records,
            has_next_page: current_page < total_pages,
            has_previous_page: current_page > 1,
        }
    }
}

/// One page of results plus the metadata describing the whole filtered set
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: PaginationInfo,
}

/// Slice one page out of an already-ordered result set
///
/// Pages are 1-based. Requesting a page past the end returns an empty item
/// list with truthful totals, never an error; `page` or `page_size` of zero
/// is a validation error.
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> LedgerResult<Page<T>> {
    if page == 0 {
        return Err(LedgerError::Validation(
            "Page numbers start at 1".to_string(),
        ));
    }
    if page_size == 0 {
        return Err(LedgerError::Validation(
            "Page size must be at least 1".to_string(),
        ));
    }

    let pagination = PaginationInfo::new(page, page_size, items.len());

    let start = (page - 1).saturating_mul(page_size);
    let items = if start >= items.len() {
        Vec::new()
    } else {
        let end = (start + page_size).min(items.len());
        items[start..end].to_vec()
    };

    Ok(Page { items, pagination })
}

/// Filter the register, order it most recent first, and return one page
pub fn run_query(
    transactions: &[TransactionRecord],
    filter: &TransactionFilter,
    page: usize,
    page_size: usize,
) -> LedgerResult<Page<TransactionRecord>> {
    let mut matched: Vec<TransactionRecord> = transactions
        .iter()
        .filter(|t| filter.matches(t))
        .cloned()
        .collect();
    matched.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

    paginate(&matched, page, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn sale(d: u32, cents: i64) -> TransactionRecord {
        TransactionRecord::new(
            TransactionCategory::Sales,
            Money::from_cents(cents),
            day(d),
            "Sale",
        )
    }

    fn purchase(d: u32, cents: i64) -> TransactionRecord {
        TransactionRecord::new(
            TransactionCategory::Purchase,
            Money::from_cents(cents),
            day(d),
            "Purchase",
        )
    }

    #[test]
    fn test_pagination_metadata() {
        let items: Vec<u32> = (1..=23).collect();

        let page1 = paginate(&items, 1, 10).unwrap();
        assert_eq!(page1.items.len(), 10);
        assert_eq!(page1.pagination.total_pages, 3);
        assert_eq!(page1.pagination.total_records, 23);
        assert!(page1.pagination.has_next_page);
        assert!(!page1.pagination.has_previous_page);

        let page3 = paginate(&items, 3, 10).unwrap();
        assert_eq!(page3.items.len(), 3);
        assert!(!page3.pagination.has_next_page);
        assert!(page3.pagination.has_previous_page);
    }

    #[test]
    fn test_over_paging_returns_empty_with_true_totals() {
        let items: Vec<u32> = (1..=5).collect();

        let page = paginate(&items, 2, 10).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total_records, 5);
        assert_eq!(page.pagination.total_pages, 1);
        assert!(!page.pagination.has_next_page);
        assert!(page.pagination.has_previous_page);
    }

    #[test]
    fn test_empty_set_reports_one_page() {
        let items: Vec<u32> = Vec::new();
        let page = paginate(&items, 1, 10).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.pagination.total_pages, 1);
        assert!(!page.pagination.has_next_page);
    }

    #[test]
    fn test_zero_page_and_zero_size_rejected() {
        let items: Vec<u32> = (1..=5).collect();
        assert!(paginate(&items, 0, 10).unwrap_err().is_validation());
        assert!(paginate(&items, 1, 0).unwrap_err().is_validation());
    }

    #[test]
    fn test_filter_by_date_range() {
        let register = vec![sale(5, 100), sale(10, 200), sale(20, 300)];

        let filter = TransactionFilter::all().from_date(day(8)).to_date(day(15));
        let page = run_query(&register, &filter, 1, 10).unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].amount.cents(), 200);
    }

    #[test]
    fn test_filter_by_category() {
        let register = vec![sale(5, 100), purchase(6, 200), sale(7, 300)];

        let filter = TransactionFilter::all().with_category(TransactionCategory::Purchase);
        let page = run_query(&register, &filter, 1, 10).unwrap();

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].category, TransactionCategory::Purchase);
        assert_eq!(page.pagination.total_records, 1);
    }

    #[test]
    fn test_results_sorted_most_recent_first() {
        let register = vec![sale(5, 100), sale(20, 200), sale(10, 300)];

        let page = run_query(&register, &TransactionFilter::all(), 1, 10).unwrap();
        assert_eq!(page.items[0].date, day(20));
        assert_eq!(page.items[1].date, day(10));
        assert_eq!(page.items[2].date, day(5));
    }

    #[test]
    fn test_pagination_describes_filtered_set() {
        let mut register: Vec<TransactionRecord> =
            (1..=15).map(|d| sale(d, d as i64 * 100)).collect();
        register.push(purchase(16, 999));

        let filter = TransactionFilter::all().with_category(TransactionCategory::Sales);
        let page = run_query(&register, &filter, 2, 10).unwrap();

        assert_eq!(page.pagination.total_records, 15);
        assert_eq!(page.pagination.total_pages, 2);
        assert_eq!(page.items.len(), 5);
    }

    #[test]
    fn test_pagination_serde_is_camel_case() {
        let info = PaginationInfo::new(2, 10, 23);
        let json = serde_json::to_value(&info).unwrap();

        assert_eq!(json["currentPage"], 2);
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["totalPages"], 3);
        assert_eq!(json["totalRecords"], 23);
        assert_eq!(json["hasNextPage"], true);
        assert_eq!(json["hasPreviousPage"], true);
    }
}
