use crate::domain::staff::StaffRecord;
use chrono::{DateTime, Utc};
use icu_collator::{Collator, CollatorOptions};
use icu_locid::locale;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;
use tracing::warn;

/// Sort selection offered by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortBy {
    NameAsc,
    NameDesc,
    EntryDateAsc,
    EntryDateDesc,
    StaffIdAsc,
    StaffIdDesc,
    /// Keep the order the backend returned
    #[default]
    #[serde(rename = "", other)]
    Unsorted,
}

/// Sort order direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Record field a sort selection compares
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    EntryDate,
    StaffId,
}

impl SortBy {
    /// Parses a sort key, treating anything unrecognized as unsorted
    pub fn parse_lenient(s: &str) -> Self {
        s.parse().unwrap_or_default()
    }

    /// Field and direction, or `None` for the identity ordering
    pub fn key(&self) -> Option<(SortField, SortOrder)> {
        match self {
            SortBy::Unsorted => None,
            SortBy::NameAsc => Some((SortField::Name, SortOrder::Ascending)),
            SortBy::NameDesc => Some((SortField::Name, SortOrder::Descending)),
            SortBy::EntryDateAsc => Some((SortField::EntryDate, SortOrder::Ascending)),
            SortBy::EntryDateDesc => Some((SortField::EntryDate, SortOrder::Descending)),
            SortBy::StaffIdAsc => Some((SortField::StaffId, SortOrder::Ascending)),
            SortBy::StaffIdDesc => Some((SortField::StaffId, SortOrder::Descending)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortBy::Unsorted => "",
            SortBy::NameAsc => "name_asc",
            SortBy::NameDesc => "name_desc",
            SortBy::EntryDateAsc => "entry_date_asc",
            SortBy::EntryDateDesc => "entry_date_desc",
            SortBy::StaffIdAsc => "staff_id_asc",
            SortBy::StaffIdDesc => "staff_id_desc",
        }
    }
}

impl FromStr for SortBy {
    type Err = crate::error::StaffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" => Ok(SortBy::Unsorted),
            "name_asc" => Ok(SortBy::NameAsc),
            "name_desc" => Ok(SortBy::NameDesc),
            "entry_date_asc" => Ok(SortBy::EntryDateAsc),
            "entry_date_desc" => Ok(SortBy::EntryDateDesc),
            "staff_id_asc" => Ok(SortBy::StaffIdAsc),
            "staff_id_desc" => Ok(SortBy::StaffIdDesc),
            _ => Err(crate::error::StaffError::InvalidSortKey(format!(
                "'{}'. Valid keys: name_asc, name_desc, entry_date_asc, entry_date_desc, staff_id_asc, staff_id_desc",
                s
            ))),
        }
    }
}

/// Orders a view according to the sort selection.
///
/// Returns a new vector and leaves the input untouched. The sort is stable,
/// so records with equal keys keep their relative order, and `Unsorted`
/// returns the input order exactly.
///
/// # Examples
/// ```
/// use pcms_staff_core::domain::sorting::{apply_sort, SortBy};
/// use pcms_staff_core::StaffRecord;
///
/// let records = vec![StaffRecord::new("A"), StaffRecord::new("B")];
/// let view: Vec<&StaffRecord> = records.iter().collect();
///
/// let sorted = apply_sort(&view, SortBy::StaffIdDesc);
/// assert_eq!(sorted[0].staff_id(), "B");
/// ```
pub fn apply_sort<'a>(records: &[&'a StaffRecord], sort_by: SortBy) -> Vec<&'a StaffRecord> {
    let mut sorted = records.to_vec();

    let Some((field, order)) = sort_by.key() else {
        return sorted;
    };

    let collator = match field {
        SortField::Name => name_collator(),
        _ => None,
    };

    sorted.sort_by(|a, b| {
        let cmp = match field {
            SortField::Name => {
                compare_names(collator.as_ref(), a.display_name(), b.display_name())
            }
            SortField::EntryDate => entry_instant(a).cmp(&entry_instant(b)),
            SortField::StaffId => a.staff_id().cmp(&b.staff_id()),
        };

        match order {
            SortOrder::Ascending => cmp,
            SortOrder::Descending => cmp.reverse(),
        }
    });

    sorted
}

/// Entry date for ordering; missing or unparseable dates sort as the Unix epoch
fn entry_instant(record: &StaffRecord) -> DateTime<Utc> {
    record.entry_timestamp().unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
}

/// Traditional Chinese (stroke order) collator for display names
fn name_collator() -> Option<Collator> {
    match Collator::try_new(&locale!("zh-Hant").into(), CollatorOptions::new()) {
        Ok(collator) => Some(collator),
        Err(err) => {
            warn!(error = ?err, "zh-Hant collation unavailable, sorting names by code point");
            None
        }
    }
}

fn compare_names(collator: Option<&Collator>, a: &str, b: &str) -> Ordering {
    match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    }
}
