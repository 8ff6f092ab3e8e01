use crate::config::AppConfig;
use crate::domain::{FilterConfig, Language, StaffRecord, StaffView};
use crate::error::Result;
use crate::storage::StaffSource;
use tracing::{info, warn};

/// Dashboard state: the last fetched listing plus the user's search,
/// filter and selection.
///
/// The view is never stored; [`Dashboard::view`] rebuilds it from the current
/// inputs on every call.
pub struct Dashboard<S: StaffSource> {
    source: S,
    language: Language,
    records: Vec<StaffRecord>,
    search_term: String,
    filters: FilterConfig,
    selected: Option<String>,
    last_error: Option<String>,
}

impl<S: StaffSource> Dashboard<S> {
    pub fn new(source: S, config: &AppConfig) -> Self {
        Self {
            source,
            language: config.language,
            records: Vec::new(),
            search_term: String::new(),
            filters: config.default_filters(),
            selected: None,
            last_error: None,
        }
    }

    /// Refetches the listing.
    ///
    /// On failure the listing is cleared and the error message kept for
    /// display; there is no retry.
    pub async fn refresh(&mut self) -> Result<()> {
        match self.source.fetch_profiles(None).await {
            Ok(records) => {
                info!(count = records.len(), "staff listing refreshed");
                self.records = records;
                self.last_error = None;
                Ok(())
            }
            Err(err) => {
                warn!(error = %err, "failed to fetch staff listing");
                self.records.clear();
                self.last_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    pub fn records(&self) -> &[StaffRecord] {
        &self.records
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn filters(&self) -> &FilterConfig {
        &self.filters
    }

    /// Replaces the filter config. An invalid config is rejected and the
    /// previous one stays active.
    pub fn set_filters(&mut self, filters: FilterConfig) -> Result<()> {
        if let Err(err) = filters.validate() {
            warn!(error = %err, "rejected filter config");
            return Err(err);
        }
        self.filters = filters;
        Ok(())
    }

    /// Selects a record, or clears the selection if it is already selected
    pub fn toggle_selection(&mut self, staff_id: &str) {
        if self.selected.as_deref() == Some(staff_id) {
            self.selected = None;
        } else {
            self.selected = Some(staff_id.to_string());
        }
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// The selected record, if it is still in the listing
    pub fn selected(&self) -> Option<&StaffRecord> {
        let staff_id = self.selected.as_deref()?;
        self.records.iter().find(|record| record.staff_id() == staff_id)
    }

    /// Current filtered and sorted view with its statistics
    pub fn view(&self) -> StaffView<'_> {
        StaffView::build(&self.records, &self.search_term, &self.filters)
    }
}
