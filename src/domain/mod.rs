pub mod filter;
pub mod gender;
pub mod search;
pub mod seniority;
pub mod sorting;
pub mod staff;
pub mod statistics;
pub mod view;

pub use filter::{apply_filters, apply_search, FilterConfig};
pub use gender::{normalize_gender, Gender};
pub use search::{highlight, matches_search, Segment};
pub use seniority::{extract_seniority_years, refresh_seniority, Seniority};
pub use sorting::{apply_sort, SortBy, SortField, SortOrder};
pub use staff::StaffRecord;
pub use statistics::{compute_statistics, Language, StatisticKind, Statistics};
pub use view::StaffView;
