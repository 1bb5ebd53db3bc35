use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Stable identifier assigned to each candidate by the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(pub u64);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One row of the candidate dataset. Raw values are kept exactly as published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(rename = "CandidateID")]
    pub id: CandidateId,
    #[serde(rename = "CandidateName")]
    pub name: String,
    #[serde(rename = "AGE_YR")]
    pub age: u32,
    #[serde(rename = "Gender")]
    pub gender: String,
    #[serde(rename = "PoliticalPartyName")]
    pub party: String,
    #[serde(
        rename = "SymbolName",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub symbol: Option<String>,
    #[serde(rename = "DistrictName")]
    pub district: String,
    #[serde(rename = "StateName")]
    pub province: String,
    #[serde(rename = "STATE_ID", default)]
    pub province_id: Option<u32>,
    #[serde(rename = "SCConstID")]
    pub constituency_id: u32,
    #[serde(rename = "ConstName", default, deserialize_with = "area_label")]
    pub area: String,
    #[serde(
        rename = "QUALIFICATION",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub qualification: Option<String>,
    #[serde(
        rename = "FATHER_NAME",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub father_name: Option<String>,
    #[serde(
        rename = "SPOUCE_NAME",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub spouse_name: Option<String>,
    #[serde(rename = "ADDRESS", default, deserialize_with = "empty_string_as_none")]
    pub address: Option<String>,
    #[serde(
        rename = "EXPERIENCE",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub experience: Option<String>,
    #[serde(
        rename = "OTHERDETAILS",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub other_details: Option<String>,
    #[serde(
        rename = "NAMEOFINST",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    pub institution: Option<String>,
}

impl Candidate {
    pub fn qualification_tier(&self) -> QualificationTier {
        super::qualification::classify(self.qualification.as_deref().unwrap_or_default())
    }

    /// Numeric reading of the area label, when it has one.
    pub fn area_number(&self) -> Option<u32> {
        parse_area(&self.area)
    }
}

pub(crate) fn parse_area(label: &str) -> Option<u32> {
    label.trim().parse().ok()
}

pub(crate) fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty()))
}

fn area_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawArea {
        Number(u64),
        Text(String),
    }

    let raw = Option::<RawArea>::deserialize(deserializer)?;
    Ok(match raw {
        Some(RawArea::Number(number)) => number.to_string(),
        Some(RawArea::Text(text)) => text.trim().to_string(),
        None => String::new(),
    })
}

/// Education buckets in their fixed order; earlier variants rank higher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualificationTier {
    Postgraduate,
    Bachelors,
    Intermediate,
    Secondary,
    BelowSecondary,
    Literate,
    Other,
}

impl QualificationTier {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Postgraduate,
            Self::Bachelors,
            Self::Intermediate,
            Self::Secondary,
            Self::BelowSecondary,
            Self::Literate,
            Self::Other,
        ]
    }

    pub const fn rank(self) -> usize {
        self as usize
    }

    pub const fn label(self, language: Language) -> &'static str {
        match language {
            Language::Nepali => match self {
                Self::Postgraduate => "स्नातकोत्तर वा माथि",
                Self::Bachelors => "स्नातक",
                Self::Intermediate => "प्रमाणपत्र तह / +२",
                Self::Secondary => "एसएलसी / एसईई",
                Self::BelowSecondary => "एसएलसी भन्दा कम",
                Self::Literate => "साक्षर",
                Self::Other => "अन्य",
            },
            Language::English => match self {
                Self::Postgraduate => "Postgraduate or higher",
                Self::Bachelors => "Bachelors",
                Self::Intermediate => "Intermediate / +2",
                Self::Secondary => "SLC / SEE",
                Self::BelowSecondary => "Below SLC",
                Self::Literate => "Literate",
                Self::Other => "Other",
            },
        }
    }

    pub fn from_code(value: &str) -> Option<Self> {
        let code = value.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|tier| tier.code() == code)
    }

    pub const fn code(self) -> &'static str {
        match self {
            Self::Postgraduate => "postgraduate",
            Self::Bachelors => "bachelors",
            Self::Intermediate => "intermediate",
            Self::Secondary => "secondary",
            Self::BelowSecondary => "below_secondary",
            Self::Literate => "literate",
            Self::Other => "other",
        }
    }
}

/// Display language. Raw dataset values are Nepali; English goes through the label tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    Nepali,
    English,
}

impl Language {
    pub fn from_code(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" | "eng" | "english" => Self::English,
            _ => Self::Nepali,
        }
    }

    /// The language that is not the dataset's own script.
    pub const fn secondary() -> Self {
        Self::English
    }
}
