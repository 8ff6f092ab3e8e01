use crate::domain::gender::Gender;
use crate::domain::staff::StaffRecord;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Aggregate counts over the current view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub total_staff: usize,
    pub phd_count: usize,
    pub master_count: usize,
    pub overseas_study_count: usize,
    pub foreign_national_count: usize,
    pub male_count: usize,
    pub female_count: usize,
}

/// The counts shown in the statistics panel, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatisticKind {
    TotalStaff,
    Phd,
    Master,
    OverseasStudy,
    ForeignNational,
    Male,
    Female,
}

/// Display language for labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Zh,
    En,
    /// Chinese followed by English, as on the dashboard panels
    Bi,
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "zh" | "zh-hant" | "zh-hant-tw" => Ok(Language::Zh),
            "en" => Ok(Language::En),
            "bi" | "bilingual" => Ok(Language::Bi),
            _ => Err(format!(
                "Invalid language '{}'. Valid languages: zh, en, bi",
                s
            )),
        }
    }
}

impl StatisticKind {
    pub const ALL: [StatisticKind; 7] = [
        StatisticKind::TotalStaff,
        StatisticKind::Phd,
        StatisticKind::Master,
        StatisticKind::OverseasStudy,
        StatisticKind::ForeignNational,
        StatisticKind::Male,
        StatisticKind::Female,
    ];

    pub fn label(&self, language: Language) -> String {
        let (zh, en) = match self {
            StatisticKind::TotalStaff => ("總人數", "Total Staff"),
            StatisticKind::Phd => ("博士人數", "PhD Count"),
            StatisticKind::Master => ("碩士人數", "Master Count"),
            StatisticKind::OverseasStudy => ("留學人數", "Overseas Study Count"),
            StatisticKind::ForeignNational => ("外籍員工人數", "Foreign National Count"),
            StatisticKind::Male => ("男性人數", "Male Count"),
            StatisticKind::Female => ("女性人數", "Female Count"),
        };

        match language {
            Language::Zh => zh.to_string(),
            Language::En => en.to_string(),
            Language::Bi => format!("{} {}", zh, en),
        }
    }
}

impl Statistics {
    pub fn get(&self, kind: StatisticKind) -> usize {
        match kind {
            StatisticKind::TotalStaff => self.total_staff,
            StatisticKind::Phd => self.phd_count,
            StatisticKind::Master => self.master_count,
            StatisticKind::OverseasStudy => self.overseas_study_count,
            StatisticKind::ForeignNational => self.foreign_national_count,
            StatisticKind::Male => self.male_count,
            StatisticKind::Female => self.female_count,
        }
    }

    /// Counts paired with their kind, in display order
    pub fn entries(&self) -> impl Iterator<Item = (StatisticKind, usize)> + '_ {
        StatisticKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    /// Staff whose gender could not be normalized
    pub fn unidentified_gender_count(&self) -> usize {
        self.total_staff
            .saturating_sub(self.male_count)
            .saturating_sub(self.female_count)
    }
}

/// Counts over an already filtered view in a single pass
pub fn compute_statistics<'a, I>(view: I) -> Statistics
where
    I: IntoIterator<Item = &'a StaffRecord>,
{
    view.into_iter()
        .fold(Statistics::default(), |mut stats, record| {
            stats.total_staff += 1;
            stats.phd_count += usize::from(record.is_phd());
            stats.master_count += usize::from(record.is_master());
            stats.overseas_study_count += usize::from(record.is_overseas_study());
            stats.foreign_national_count += usize::from(record.is_foreign_national());

            match record.normalized_gender() {
                Some(Gender::Male) => stats.male_count += 1,
                Some(Gender::Female) => stats.female_count += 1,
                None => {}
            }

            stats
        })
}
