use crate::{
    domain::{matches_search, StaffRecord},
    error::{Result, StaffError},
    storage::StaffSource,
};
use async_trait::async_trait;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Staff listing kept as a JSON array snapshot on disk
pub struct FileStaffSource {
    root_path: PathBuf,
}

impl FileStaffSource {
    const DATA_DIR: &'static str = ".pcms";
    const PROFILES_FILE: &'static str = "profiles.json";

    /// Creates a new FileStaffSource for the given data directory
    pub fn new(data_root: impl AsRef<Path>) -> Self {
        Self {
            root_path: data_root.as_ref().join(Self::DATA_DIR),
        }
    }

    fn profiles_file(&self) -> PathBuf {
        self.root_path.join(Self::PROFILES_FILE)
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }

    async fn read_snapshot(&self) -> Result<Vec<StaffRecord>> {
        let file_path = self.profiles_file();

        if !file_path.exists() {
            return Err(StaffError::SourceNotInitialized);
        }

        let contents = fs::read_to_string(&file_path).await?;
        let values: Vec<Value> = serde_json::from_str(&contents)?;

        Ok(StaffRecord::decode_all(values))
    }
}

#[async_trait]
impl StaffSource for FileStaffSource {
    async fn initialize(&self) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        if !self.profiles_file().exists() {
            self.save_profiles(&[]).await?;
        }

        let gitignore_path = self.root_path.join(".gitignore");
        if !gitignore_path.exists() {
            fs::write(gitignore_path, "# Staff data snapshots\n*.json\n").await?;
        }

        Ok(())
    }

    async fn fetch_profiles(&self, search: Option<&str>) -> Result<Vec<StaffRecord>> {
        let records = self.read_snapshot().await?;

        let records: Vec<StaffRecord> = match search {
            Some(term) if !term.is_empty() => records
                .into_iter()
                .filter(|record| matches_search(record, term))
                .collect(),
            _ => records,
        };

        debug!(count = records.len(), "fetched staff profiles");
        Ok(records)
    }

    async fn load_profile(&self, staff_id: &str) -> Result<StaffRecord> {
        self.read_snapshot()
            .await?
            .into_iter()
            .find(|record| record.staff_id() == staff_id)
            .ok_or_else(|| StaffError::ProfileNotFound(staff_id.to_string()))
    }

    async fn save_profiles(&self, records: &[StaffRecord]) -> Result<()> {
        self.ensure_directory_exists(&self.root_path).await?;

        let json = serde_json::to_string_pretty(records)?;
        fs::write(self.profiles_file(), json).await?;

        Ok(())
    }

    async fn is_initialized(&self) -> bool {
        self.root_path.exists() && self.profiles_file().exists()
    }
}
