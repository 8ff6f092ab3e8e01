//! # PCMS Staff Core
//!
//! Record filtering, sorting and statistics for the school HR dashboard.
//!
//! Given the staff listing returned by the backend, a free-text search term
//! and a [`FilterConfig`], this crate produces the filtered and sorted view
//! shown on the dashboard together with aggregate counts over that view.
//! The engine itself is pure and synchronous; fetching the listing goes
//! through the [`StaffSource`] trait.

pub mod config;
pub mod dashboard;
pub mod domain;
pub mod error;
pub mod storage;
pub mod telemetry;

// Re-export commonly used types
pub use config::{AppConfig, TelemetryConfig};
pub use dashboard::Dashboard;
pub use domain::{
    filter::{apply_filters, FilterConfig},
    gender::{normalize_gender, Gender},
    search::matches_search,
    seniority::extract_seniority_years,
    sorting::{apply_sort, SortBy},
    staff::StaffRecord,
    statistics::{compute_statistics, Language, Statistics},
    view::StaffView,
};
pub use error::{Result, StaffError};
pub use storage::{FileStaffSource, StaffSource};
