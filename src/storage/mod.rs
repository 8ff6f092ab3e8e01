use crate::{domain::StaffRecord, error::Result};
use async_trait::async_trait;

pub mod file_storage;

pub use file_storage::FileStaffSource;

/// Source of the staff listing the dashboard works on
#[async_trait]
pub trait StaffSource: Send + Sync {
    /// Initializes the source backend
    async fn initialize(&self) -> Result<()>;

    /// Fetches the full listing, or only records containing `search` when given.
    /// Search follows the same case-insensitive deep matching as the dashboard.
    async fn fetch_profiles(&self, search: Option<&str>) -> Result<Vec<StaffRecord>>;

    /// Loads a single profile by staff ID
    async fn load_profile(&self, staff_id: &str) -> Result<StaffRecord>;

    /// Replaces the stored listing
    async fn save_profiles(&self, records: &[StaffRecord]) -> Result<()>;

    /// Checks if the source has been initialized
    async fn is_initialized(&self) -> bool;
}
