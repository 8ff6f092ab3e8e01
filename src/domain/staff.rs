use crate::domain::gender::{normalize_gender, Gender};
use crate::domain::seniority::extract_seniority_years;
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::borrow::Cow;
use tracing::warn;

/// Placeholder the import sheets use when a Chinese name is unknown
const NAME_PLACEHOLDER: &str = "/";

const STAFF_ID: &str = "staff_id";
const NAME_CHINESE: &str = "name_chinese";
const NAME_FOREIGN: &str = "name_foreign";
const STAFF_NAME: &str = "staff_name";
const GENDER: &str = "gender";
const SCHOOL_SENIORITY_DESCRIPTION: &str = "school_seniority_description";
const ENTRY_DATE: &str = "entry_date";
const IS_PHD: &str = "is_phd";
const IS_MASTER: &str = "is_master";
const IS_OVERSEAS_STUDY: &str = "is_overseas_study";
const IS_FOREIGN_NATIONAL: &str = "is_foreign_national";
const IS_ACTIVE: &str = "is_active";

/// One employee's profile as returned by the staff listing endpoint.
///
/// The JSON object is kept exactly as received and serialized back the same
/// way. The fields the dashboard inspects are read through accessors that
/// fall back on absent or malformed values, so a single bad field never makes
/// the record unusable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StaffRecord {
    fields: Map<String, Value>,
}

impl StaffRecord {
    /// Creates a record holding only the given staff ID
    pub fn new(staff_id: impl Into<String>) -> Self {
        let mut record = Self::default();
        record.set(STAFF_ID, staff_id.into());
        record
    }

    /// Decodes a single listing element. Returns `None` for anything that is
    /// not a JSON object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Decodes a listing, skipping elements that are not records
    pub fn decode_all(values: Vec<Value>) -> Vec<Self> {
        let total = values.len();
        let records: Vec<Self> = values.into_iter().filter_map(Self::from_value).collect();

        if records.len() < total {
            warn!(
                skipped = total - records.len(),
                total, "skipped malformed staff listing entries"
            );
        }

        records
    }

    /// Sets a field, replacing any previous value
    pub fn set(&mut self, field: &str, value: impl Into<Value>) {
        self.fields.insert(field.to_string(), value.into());
    }

    /// Builder form of [`StaffRecord::set`]
    pub fn with(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.set(field, value);
        self
    }

    /// Raw value of a field as received
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    /// Staff ID as text. Numeric IDs are rendered, anything else is empty.
    pub fn staff_id(&self) -> Cow<'_, str> {
        self.text(STAFF_ID).unwrap_or(Cow::Borrowed(""))
    }

    pub fn name_chinese(&self) -> Option<&str> {
        self.string(NAME_CHINESE)
    }

    pub fn name_foreign(&self) -> Option<&str> {
        self.string(NAME_FOREIGN)
    }

    pub fn staff_name(&self) -> Option<&str> {
        self.string(STAFF_NAME)
    }

    /// Raw gender text, rendered from a number if need be
    pub fn gender(&self) -> Option<Cow<'_, str>> {
        self.text(GENDER)
    }

    pub fn school_seniority_description(&self) -> Option<&str> {
        self.string(SCHOOL_SENIORITY_DESCRIPTION)
    }

    pub(crate) fn set_school_seniority_description(&mut self, description: String) {
        self.set(SCHOOL_SENIORITY_DESCRIPTION, description);
    }

    pub fn is_phd(&self) -> bool {
        self.flag(IS_PHD)
    }

    pub fn is_master(&self) -> bool {
        self.flag(IS_MASTER)
    }

    pub fn is_overseas_study(&self) -> bool {
        self.flag(IS_OVERSEAS_STUDY)
    }

    pub fn is_foreign_national(&self) -> bool {
        self.flag(IS_FOREIGN_NATIONAL)
    }

    /// Employment status. A record without the field counts as active.
    pub fn is_active(&self) -> bool {
        self.fields.get(IS_ACTIVE).map_or(true, is_truthy)
    }

    /// Truthiness of a field; absent fields are false
    pub fn flag(&self, field: &str) -> bool {
        self.fields.get(field).is_some_and(is_truthy)
    }

    /// Name shown on cards and used for name sorting.
    ///
    /// Precedence: `name_chinese` unless blank or `/`, then `name_foreign`,
    /// then `staff_name`.
    pub fn display_name(&self) -> &str {
        if let Some(name) = self.name_chinese() {
            if !name.trim().is_empty() && name != NAME_PLACEHOLDER {
                return name;
            }
        }

        [self.name_foreign(), self.staff_name()]
            .into_iter()
            .flatten()
            .find(|name| !name.is_empty())
            .unwrap_or("")
    }

    pub fn normalized_gender(&self) -> Option<Gender> {
        normalize_gender(self.gender().as_deref())
    }

    /// Tenure in fractional years, `0.0` when the description is missing or malformed
    pub fn seniority_years(&self) -> f64 {
        extract_seniority_years(self.school_seniority_description())
    }

    /// Entry date as a calendar date, if it parses
    pub fn entry_date(&self) -> Option<NaiveDate> {
        self.entry_timestamp().map(|ts| ts.date_naive())
    }

    /// Entry date as an instant.
    ///
    /// Accepts `YYYY-MM-DD`, RFC 3339, or a number of milliseconds since the
    /// Unix epoch.
    pub fn entry_timestamp(&self) -> Option<DateTime<Utc>> {
        let raw = match self.fields.get(ENTRY_DATE)? {
            Value::String(s) => s.trim(),
            Value::Number(n) => return Utc.timestamp_millis_opt(n.as_i64()?).single(),
            _ => return None,
        };

        if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|naive| Utc.from_utc_datetime(&naive));
        }

        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|ts| ts.with_timezone(&Utc))
    }

    fn string(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }

    fn text(&self, field: &str) -> Option<Cow<'_, str>> {
        match self.fields.get(field)? {
            Value::String(s) => Some(Cow::Borrowed(s)),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            _ => None,
        }
    }
}

/// JavaScript truthiness: `null`, `false`, `0` and `""` are false, every other
/// value (including `"N"`, `"false"`, `[]` and `{}`) is true.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|v| v != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
