use crate::domain::filter::{apply_filters, apply_search, FilterConfig};
use crate::domain::sorting::apply_sort;
use crate::domain::staff::StaffRecord;
use crate::domain::statistics::{compute_statistics, Statistics};
use std::borrow::Cow;
use tracing::debug;

/// Filtered and sorted records plus the counts over them.
///
/// Borrows the records it was built from; rebuild it whenever the records,
/// search term or filter config change.
#[derive(Debug, Clone, PartialEq)]
pub struct StaffView<'a> {
    pub records: Vec<&'a StaffRecord>,
    pub statistics: Statistics,
}

impl<'a> StaffView<'a> {
    /// Runs search, predicate filtering, sorting and aggregation in that order
    pub fn build(records: &'a [StaffRecord], search_term: &str, config: &FilterConfig) -> Self {
        let searched = apply_search(records, search_term);
        let filtered = apply_filters(searched.iter().copied(), config);
        let sorted = apply_sort(&filtered, config.sort_by);
        let statistics = compute_statistics(sorted.iter().copied());

        debug!(
            raw = records.len(),
            searched = searched.len(),
            shown = sorted.len(),
            sort_by = config.sort_by.as_str(),
            "staff view rebuilt"
        );

        Self {
            records: sorted,
            statistics,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn staff_ids(&self) -> Vec<Cow<'a, str>> {
        self.records.iter().copied().map(StaffRecord::staff_id).collect()
    }
}
