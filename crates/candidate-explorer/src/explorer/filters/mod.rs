mod resolver;

pub use resolver::{FilterDomain, FilterOptions};

use super::domain::{Language, QualificationTier};
use serde::{Deserialize, Serialize, Serializer};

pub const ALL: &str = "all";
pub const DEFAULT_MIN_AGE: u32 = 0;
pub const DEFAULT_MAX_AGE: u32 = 120;

/// Interprets a dropdown value: `"all"` or blank means no restriction.
pub fn choice(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Inclusive age bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

impl AgeRange {
    /// Reversed bounds are swapped.
    pub fn new(min: u32, max: u32) -> Self {
        if min <= max {
            Self { min, max }
        } else {
            Self { min: max, max: min }
        }
    }

    pub fn contains(&self, age: u32) -> bool {
        (self.min..=self.max).contains(&age)
    }
}

impl Default for AgeRange {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_AGE,
            max: DEFAULT_MAX_AGE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    #[default]
    EducationAge,
    AgeAsc,
    AgeDesc,
    Name,
    Party,
}

impl SortMode {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::EducationAge,
            Self::AgeAsc,
            Self::AgeDesc,
            Self::Name,
            Self::Party,
        ]
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::EducationAge => "education_age",
            Self::AgeAsc => "age_asc",
            Self::AgeDesc => "age_desc",
            Self::Name => "name",
            Self::Party => "party",
        }
    }

    pub fn from_code(value: &str) -> Option<Self> {
        let code = value.trim().to_ascii_lowercase();
        Self::ordered().into_iter().find(|mode| mode.code() == code)
    }

    pub const fn label(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::EducationAge, Language::Nepali) => "शिक्षा र उमेर",
            (Self::EducationAge, Language::English) => "Education, then age",
            (Self::AgeAsc, Language::Nepali) => "उमेर (कम देखि)",
            (Self::AgeAsc, Language::English) => "Age (youngest first)",
            (Self::AgeDesc, Language::Nepali) => "उमेर (बढी देखि)",
            (Self::AgeDesc, Language::English) => "Age (oldest first)",
            (Self::Name, Language::Nepali) => "नाम",
            (Self::Name, Language::English) => "Name",
            (Self::Party, Language::Nepali) => "दल",
            (Self::Party, Language::English) => "Party",
        }
    }
}

/// Current filter state of one explorer session. `None` stands for "all".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSelection {
    pub province: String,
    #[serde(serialize_with = "all_when_none")]
    pub district: Option<String>,
    #[serde(serialize_with = "all_when_none")]
    pub area: Option<String>,
    #[serde(serialize_with = "all_when_none")]
    pub party: Option<String>,
    #[serde(serialize_with = "all_when_none")]
    pub gender: Option<String>,
    pub qualification: Option<QualificationTier>,
    pub age: AgeRange,
    pub search: String,
    pub sort: SortMode,
}

impl FilterSelection {
    pub fn new(province: impl Into<String>) -> Self {
        Self {
            province: province.into(),
            district: None,
            area: None,
            party: None,
            gender: None,
            qualification: None,
            age: AgeRange::default(),
            search: String::new(),
            sort: SortMode::default(),
        }
    }

    /// Lower-cased search needle, or `None` when the box is effectively empty.
    pub fn search_needle(&self) -> Option<String> {
        let trimmed = self.search.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_lowercase())
    }
}

fn all_when_none<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or(ALL))
}

/// A single user edit to the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    Province(String),
    District(Option<String>),
    Area(Option<String>),
    Party(Option<String>),
    Gender(Option<String>),
    Qualification(Option<QualificationTier>),
    AgeRange(AgeRange),
    Search(String),
    Sort(SortMode),
}
