use crate::domain::gender::Gender;
use crate::domain::search::matches_search;
use crate::domain::sorting::SortBy;
use crate::domain::staff::StaffRecord;
use crate::error::{Result, StaffError};
use serde::{Deserialize, Serialize};

/// Bounds of the seniority slider, in years
pub const SENIORITY_BOUNDS: (f64, f64) = (0.0, 50.0);

/// Active filter predicates and sort selection of the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Inclusive `[min_years, max_years]` range
    #[serde(default = "default_seniority")]
    pub seniority: (f64, f64),
    #[serde(default)]
    pub is_phd: bool,
    #[serde(default)]
    pub is_master: bool,
    #[serde(default)]
    pub is_overseas_study: bool,
    #[serde(default)]
    pub is_foreign_national: bool,
    #[serde(default, rename = "sortBy")]
    pub sort_by: SortBy,
}

fn default_seniority() -> (f64, f64) {
    (0.0, 30.0)
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            gender: None,
            seniority: default_seniority(),
            is_phd: false,
            is_master: false,
            is_overseas_study: false,
            is_foreign_national: false,
            sort_by: SortBy::Unsorted,
        }
    }
}

impl FilterConfig {
    /// Checks the seniority range: both bounds within [0, 50] and min <= max
    pub fn validate(&self) -> Result<()> {
        let (min, max) = self.seniority;
        let (lower, upper) = SENIORITY_BOUNDS;

        let in_bounds = |v: f64| v.is_finite() && (lower..=upper).contains(&v);
        if !in_bounds(min) || !in_bounds(max) || min > max {
            return Err(StaffError::InvalidSeniorityRange { min, max });
        }

        Ok(())
    }

    pub fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    pub fn with_seniority(mut self, min_years: f64, max_years: f64) -> Self {
        self.seniority = (min_years, max_years);
        self
    }

    pub fn with_sort(mut self, sort_by: SortBy) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Checks a single record against every predicate
    pub fn accepts(&self, record: &StaffRecord) -> bool {
        if self.is_phd && !record.is_phd() {
            return false;
        }
        if self.is_master && !record.is_master() {
            return false;
        }
        if self.is_overseas_study && !record.is_overseas_study() {
            return false;
        }
        if self.is_foreign_national && !record.is_foreign_national() {
            return false;
        }

        if let Some(gender) = self.gender {
            if record.normalized_gender() != Some(gender) {
                return false;
            }
        }

        let years = record.seniority_years();
        let (min, max) = self.seniority;
        years >= min && years <= max
    }
}

/// Keeps the records that contain the search term
pub fn apply_search<'a, I>(records: I, term: &str) -> Vec<&'a StaffRecord>
where
    I: IntoIterator<Item = &'a StaffRecord>,
{
    records
        .into_iter()
        .filter(|record| matches_search(record, term))
        .collect()
}

/// Keeps the records that satisfy every predicate of the config.
///
/// Flag filters only narrow: a flag set to `false` in the config places no
/// constraint on records. Records whose gender cannot be normalized never
/// pass a gender filter.
pub fn apply_filters<'a, I>(records: I, config: &FilterConfig) -> Vec<&'a StaffRecord>
where
    I: IntoIterator<Item = &'a StaffRecord>,
{
    records
        .into_iter()
        .filter(|record| config.accepts(record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff(id: &str, gender: Option<&str>, seniority: Option<&str>) -> StaffRecord {
        let mut record = StaffRecord::new(id);
        if let Some(gender) = gender {
            record.set("gender", gender);
        }
        if let Some(seniority) = seniority {
            record.set("school_seniority_description", seniority);
        }
        record
    }

    fn ids(view: &[&StaffRecord]) -> Vec<String> {
        view.iter().map(|r| r.staff_id().into_owned()).collect()
    }

    #[test]
    fn test_default_config_keeps_low_seniority_records() {
        let records = vec![
            staff("A", None, Some("3年0個月")),
            staff("B", None, None),
            staff("C", None, Some("31年0個月")),
        ];

        let view = apply_filters(&records, &FilterConfig::default());

        assert_eq!(ids(&view), vec!["A", "B"]);
    }

    #[test]
    fn test_gender_filter_excludes_unidentified() {
        let records = vec![
            staff("A", Some("男 Male"), None),
            staff("B", Some("F"), None),
            staff("C", Some("unknown"), None),
            staff("D", None, None),
        ];

        let male = apply_filters(&records, &FilterConfig::default().with_gender(Gender::Male));
        let female =
            apply_filters(&records, &FilterConfig::default().with_gender(Gender::Female));

        assert_eq!(ids(&male), vec!["A"]);
        assert_eq!(ids(&female), vec!["B"]);
    }

    #[test]
    fn test_seniority_range_is_inclusive() {
        let records = vec![
            staff("A", None, Some("2年0個月")),
            staff("B", None, Some("5年0個月")),
            staff("C", None, Some("5年1個月")),
        ];

        let view = apply_filters(&records, &FilterConfig::default().with_seniority(2.0, 5.0));

        assert_eq!(ids(&view), vec!["A", "B"]);
    }

    #[test]
    fn test_missing_seniority_counts_as_zero() {
        let records = vec![staff("A", None, None), staff("B", None, Some("garbled"))];

        let from_zero = apply_filters(&records, &FilterConfig::default().with_seniority(0.0, 1.0));
        let from_one = apply_filters(&records, &FilterConfig::default().with_seniority(1.0, 10.0));

        assert_eq!(from_zero.len(), 2);
        assert!(from_one.is_empty());
    }

    #[test]
    fn test_flag_filters_only_narrow() {
        let phd = StaffRecord::new("A")
            .with("is_phd", true)
            .with("is_overseas_study", true);
        let master = StaffRecord::new("B").with("is_master", true);
        let records = vec![phd, master];

        let mut config = FilterConfig::default();
        assert_eq!(apply_filters(&records, &config).len(), 2);

        config.is_phd = true;
        assert_eq!(ids(&apply_filters(&records, &config)), vec!["A"]);

        config.is_master = true;
        assert!(apply_filters(&records, &config).is_empty());

        let config = FilterConfig {
            is_overseas_study: true,
            ..FilterConfig::default()
        };
        assert_eq!(ids(&apply_filters(&records, &config)), vec!["A"]);

        let config = FilterConfig {
            is_foreign_national: true,
            ..FilterConfig::default()
        };
        assert!(apply_filters(&records, &config).is_empty());
    }

    #[test]
    fn test_flag_filters_use_truthiness() {
        let records = StaffRecord::decode_all(vec![
            serde_json::json!({"staff_id": "A", "is_phd": "N"}),
            serde_json::json!({"staff_id": "B", "is_phd": ""}),
            serde_json::json!({"staff_id": "C", "is_phd": 0}),
            serde_json::json!({"staff_id": "D", "is_phd": 1}),
            serde_json::json!({"staff_id": "E"}),
        ]);
        let config = FilterConfig {
            is_phd: true,
            ..FilterConfig::default()
        };

        assert_eq!(ids(&apply_filters(&records, &config)), vec!["A", "D"]);
    }

    #[test]
    fn test_apply_search() {
        let records = vec![staff("T100", None, None), staff("T200", None, None)];

        assert_eq!(ids(&apply_search(&records, "t2")), vec!["T200"]);
        assert_eq!(apply_search(&records, "").len(), 2);
    }

    #[test]
    fn test_validate_seniority_range() {
        assert!(FilterConfig::default().validate().is_ok());
        assert!(FilterConfig::default().with_seniority(0.0, 50.0).validate().is_ok());
        assert!(FilterConfig::default().with_seniority(10.0, 10.0).validate().is_ok());

        for (min, max) in [(5.0, 1.0), (-1.0, 10.0), (0.0, 51.0), (f64::NAN, 10.0)] {
            assert!(matches!(
                FilterConfig::default().with_seniority(min, max).validate(),
                Err(StaffError::InvalidSeniorityRange { .. })
            ));
        }
    }

    #[test]
    fn test_deserialize_dashboard_shape() {
        let config: FilterConfig = serde_json::from_str(
            r#"{"gender": "female", "seniority": [1, 20], "is_master": true, "sortBy": "name_desc"}"#,
        )
        .unwrap();

        assert_eq!(config.gender, Some(Gender::Female));
        assert_eq!(config.seniority, (1.0, 20.0));
        assert!(config.is_master);
        assert!(!config.is_phd);
        assert_eq!(config.sort_by, SortBy::NameDesc);

        let empty: FilterConfig = serde_json::from_str(r#"{"gender": null, "sortBy": ""}"#).unwrap();
        assert_eq!(empty, FilterConfig::default());
    }
}
