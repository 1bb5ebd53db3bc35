use super::brackets::AgeBracket;
use crate::explorer::domain::{CandidateId, QualificationTier};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartyCountEntry {
    pub party: String,
    pub party_label: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualificationCountEntry {
    pub tier: QualificationTier,
    pub tier_label: &'static str,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenderShareEntry {
    pub gender: String,
    pub gender_label: String,
    pub count: usize,
    /// Share of the filtered total, one decimal place.
    pub percentage: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BracketMemberView {
    pub id: CandidateId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgeBracketEntry {
    pub bracket: AgeBracket,
    pub bracket_label: &'static str,
    pub min_age: u32,
    pub max_age: u32,
    pub count: usize,
    pub members: Vec<BracketMemberView>,
}

/// Chart-ready aggregates over the filtered candidate list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportSummary {
    pub total: usize,
    pub by_party: Vec<PartyCountEntry>,
    pub by_qualification: Vec<QualificationCountEntry>,
    pub by_gender: Vec<GenderShareEntry>,
    pub by_age_bracket: Vec<AgeBracketEntry>,
}
