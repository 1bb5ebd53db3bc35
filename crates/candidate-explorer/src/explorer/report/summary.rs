use super::brackets::AgeBracket;
use super::views::{
    AgeBracketEntry, BracketMemberView, GenderShareEntry, PartyCountEntry,
    QualificationCountEntry, ReportSummary,
};
use crate::explorer::domain::{Candidate, CandidateId, Language, QualificationTier};
use crate::explorer::labels::{LabelCategory, LabelLookup};
use std::collections::HashMap;

/// Count for one raw value, kept in first-encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    pub value: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BracketMember {
    pub id: CandidateId,
    pub name: String,
}

/// Raw tallies over a filtered list, before any display labelling.
#[derive(Debug, Clone, Default)]
pub struct CandidateReport {
    pub total: usize,
    pub party_counts: Vec<Tally>,
    pub tier_counts: HashMap<QualificationTier, usize>,
    pub gender_counts: Vec<Tally>,
    pub bracket_members: HashMap<AgeBracket, Vec<BracketMember>>,
}

pub fn aggregate<'a, I>(filtered: I) -> CandidateReport
where
    I: IntoIterator<Item = &'a Candidate>,
{
    let mut report = CandidateReport::default();
    let mut party_slots: HashMap<&str, usize> = HashMap::new();
    let mut gender_slots: HashMap<&str, usize> = HashMap::new();

    for candidate in filtered {
        report.total += 1;

        bump(&mut report.party_counts, &mut party_slots, &candidate.party);
        bump(&mut report.gender_counts, &mut gender_slots, &candidate.gender);

        *report
            .tier_counts
            .entry(candidate.qualification_tier())
            .or_default() += 1;

        if let Some(bracket) = AgeBracket::for_age(candidate.age) {
            report
                .bracket_members
                .entry(bracket)
                .or_default()
                .push(BracketMember {
                    id: candidate.id,
                    name: candidate.name.clone(),
                });
        }
    }

    report
}

fn bump<'a>(tallies: &mut Vec<Tally>, slots: &mut HashMap<&'a str, usize>, value: &'a str) {
    match slots.get(value) {
        Some(&slot) => tallies[slot].count += 1,
        None => {
            slots.insert(value, tallies.len());
            tallies.push(Tally {
                value: value.to_string(),
                count: 1,
            });
        }
    }
}

impl CandidateReport {
    pub fn summary(&self, labels: &dyn LabelLookup, language: Language) -> ReportSummary {
        let mut by_party: Vec<PartyCountEntry> = self
            .party_counts
            .iter()
            .map(|tally| PartyCountEntry {
                party: tally.value.clone(),
                party_label: labels
                    .display(LabelCategory::Party, &tally.value, language)
                    .to_string(),
                count: tally.count,
            })
            .collect();
        by_party.sort_by(|a, b| b.count.cmp(&a.count));

        let by_qualification = QualificationTier::ordered()
            .into_iter()
            .filter_map(|tier| {
                self.tier_counts
                    .get(&tier)
                    .filter(|count| **count > 0)
                    .map(|count| QualificationCountEntry {
                        tier,
                        tier_label: tier.label(language),
                        count: *count,
                    })
            })
            .collect();

        let by_gender = self
            .gender_counts
            .iter()
            .map(|tally| GenderShareEntry {
                gender: tally.value.clone(),
                gender_label: labels
                    .display(LabelCategory::Gender, &tally.value, language)
                    .to_string(),
                count: tally.count,
                percentage: percentage_one_decimal(tally.count, self.total),
            })
            .collect();

        let by_age_bracket = AgeBracket::ordered()
            .into_iter()
            .map(|bracket| {
                let members: Vec<BracketMemberView> = self
                    .bracket_members
                    .get(&bracket)
                    .map(|members| {
                        members
                            .iter()
                            .map(|member| BracketMemberView {
                                id: member.id,
                                name: labels
                                    .display(LabelCategory::CandidateName, &member.name, language)
                                    .to_string(),
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                let (min_age, max_age) = bracket.bounds();
                AgeBracketEntry {
                    bracket,
                    bracket_label: bracket.label(),
                    min_age,
                    max_age,
                    count: members.len(),
                    members,
                }
            })
            .collect();

        ReportSummary {
            total: self.total,
            by_party,
            by_qualification,
            by_gender,
            by_age_bracket,
        }
    }
}

fn percentage_one_decimal(count: usize, total: usize) -> String {
    if total == 0 {
        return "0.0".to_string();
    }
    format!("{:.1}", count as f64 * 100.0 / total as f64)
}
