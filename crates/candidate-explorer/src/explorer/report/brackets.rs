use serde::{Deserialize, Serialize};

/// Fixed, contiguous age buckets used by the age distribution chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeBracket {
    Twenties,
    Thirties,
    Forties,
    Fifties,
    SixtiesAndSeventy,
}

impl AgeBracket {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Twenties,
            Self::Thirties,
            Self::Forties,
            Self::Fifties,
            Self::SixtiesAndSeventy,
        ]
    }

    /// Inclusive bounds.
    pub const fn bounds(self) -> (u32, u32) {
        match self {
            Self::Twenties => (20, 29),
            Self::Thirties => (30, 39),
            Self::Forties => (40, 49),
            Self::Fifties => (50, 59),
            Self::SixtiesAndSeventy => (60, 70),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Twenties => "20-29",
            Self::Thirties => "30-39",
            Self::Forties => "40-49",
            Self::Fifties => "50-59",
            Self::SixtiesAndSeventy => "60-70",
        }
    }

    /// Ages under 20 or over 70 fall in no bracket.
    pub fn for_age(age: u32) -> Option<Self> {
        Self::ordered().into_iter().find(|bracket| {
            let (min, max) = bracket.bounds();
            (min..=max).contains(&age)
        })
    }
}
