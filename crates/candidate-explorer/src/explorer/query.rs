use super::domain::{Candidate, Language};
use super::filters::{FilterSelection, SortMode};
use super::labels::{LabelCategory, LabelLookup};

/// Filters `candidates` by every active criterion in `selection` and orders the
/// survivors by its sort mode. The sort is stable, so equal keys keep dataset order.
pub fn query<'a>(
    candidates: &'a [Candidate],
    selection: &FilterSelection,
    labels: &dyn LabelLookup,
) -> Vec<&'a Candidate> {
    let needle = selection.search_needle();
    let mut matches: Vec<&Candidate> = candidates
        .iter()
        .filter(|candidate| matches_filters(candidate, selection))
        .filter(|candidate| {
            needle
                .as_deref()
                .map_or(true, |needle| matches_search(candidate, needle, labels))
        })
        .collect();

    sort_candidates(&mut matches, selection.sort);
    matches
}

fn matches_filters(candidate: &Candidate, selection: &FilterSelection) -> bool {
    candidate.province == selection.province
        && matches_choice(&selection.district, &candidate.district)
        && matches_choice(&selection.area, &candidate.area)
        && matches_choice(&selection.party, &candidate.party)
        && matches_choice(&selection.gender, &candidate.gender)
        && selection
            .qualification
            .map_or(true, |tier| candidate.qualification_tier() == tier)
        && selection.age.contains(candidate.age)
}

fn matches_choice(choice: &Option<String>, value: &str) -> bool {
    choice.as_deref().map_or(true, |expected| expected == value)
}

/// Name or party contains the needle, in the raw script or its translated form.
fn matches_search(candidate: &Candidate, needle: &str, labels: &dyn LabelLookup) -> bool {
    let secondary = Language::secondary();
    [
        (LabelCategory::CandidateName, candidate.name.as_str()),
        (LabelCategory::Party, candidate.party.as_str()),
    ]
    .into_iter()
    .any(|(category, raw)| {
        raw.to_lowercase().contains(needle)
            || labels
                .display(category, raw, secondary)
                .to_lowercase()
                .contains(needle)
    })
}

pub fn sort_candidates(candidates: &mut [&Candidate], mode: SortMode) {
    match mode {
        SortMode::EducationAge => {
            candidates.sort_by_cached_key(|c| (c.qualification_tier().rank(), c.age))
        }
        SortMode::AgeAsc => candidates.sort_by_key(|c| c.age),
        SortMode::AgeDesc => candidates.sort_by(|a, b| b.age.cmp(&a.age)),
        SortMode::Name => candidates.sort_by(|a, b| a.name.cmp(&b.name)),
        SortMode::Party => candidates.sort_by(|a, b| a.party.cmp(&b.party)),
    }
}
