use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

static MALE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(男|male|m|男\s*male|男\s*m|male\s*男|m\s*男)$").expect("valid male pattern")
});

static FEMALE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(女|female|f|女\s*female|女\s*f|female\s*女|f\s*女)$")
        .expect("valid female pattern")
});

/// Canonical gender used by the gender filter and the male/female counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_gender(Some(s)).ok_or_else(|| format!("Unrecognized gender '{}'", s))
    }
}

/// Maps the free-form gender strings found in staff records to a canonical value.
///
/// Accepts `男`, `male`, `m` and their Chinese/English pairings in either
/// order (e.g. `男 Male`, `Female 女`), case-insensitively, after trimming.
/// Any other value, including partial matches such as `男性`, yields `None`.
pub fn normalize_gender(raw: Option<&str>) -> Option<Gender> {
    let value = raw?.trim();
    if value.is_empty() {
        return None;
    }

    if MALE_PATTERN.is_match(value) {
        Some(Gender::Male)
    } else if FEMALE_PATTERN.is_match(value) {
        Some(Gender::Female)
    } else {
        None
    }
}
