use super::{FilterChange, FilterSelection};
use crate::explorer::domain::{parse_area, Candidate};
use crate::explorer::store::DatasetStore;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Raw option lists for the cascading dropdowns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterOptions {
    pub provinces: Vec<String>,
    pub districts: Vec<String>,
    pub areas: Vec<String>,
    pub parties: Vec<String>,
    pub genders: Vec<String>,
}

/// Computes valid dropdown values from the dataset and keeps selections
/// consistent with them. Province narrows district, district narrows area,
/// area narrows party; never the other way round.
pub struct FilterDomain<'a> {
    candidates: &'a [Candidate],
    default_province: &'a str,
}

impl<'a> FilterDomain<'a> {
    pub fn new(store: &'a DatasetStore, default_province: &'a str) -> Self {
        Self::from_candidates(store.candidates(), default_province)
    }

    pub fn from_candidates(candidates: &'a [Candidate], default_province: &'a str) -> Self {
        Self {
            candidates,
            default_province,
        }
    }

    pub fn provinces(&self) -> Vec<&'a str> {
        distinct_sorted(self.candidates.iter().map(|c| c.province.as_str()))
    }

    pub fn districts(&self, province: &str) -> Vec<&'a str> {
        distinct_sorted(
            self.candidates
                .iter()
                .filter(|c| c.province == province)
                .map(|c| c.district.as_str()),
        )
    }

    /// Area labels ordered by their numeric value; non-numeric labels sort last.
    pub fn areas(&self, province: &str, district: Option<&str>) -> Vec<&'a str> {
        let mut areas = distinct_sorted(
            self.candidates
                .iter()
                .filter(|c| c.province == province)
                .filter(|c| district.map_or(true, |d| c.district == d))
                .map(|c| c.area.as_str())
                .filter(|area| !area.is_empty()),
        );
        areas.sort_by(|a, b| compare_area_labels(a, b));
        areas
    }

    pub fn parties(
        &self,
        province: &str,
        district: Option<&str>,
        area: Option<&str>,
    ) -> Vec<&'a str> {
        distinct_sorted(
            self.candidates
                .iter()
                .filter(|c| c.province == province)
                .filter(|c| district.map_or(true, |d| c.district == d))
                .filter(|c| area.map_or(true, |a| c.area == a))
                .map(|c| c.party.as_str()),
        )
    }

    pub fn genders(&self) -> Vec<&'a str> {
        distinct_sorted(self.candidates.iter().map(|c| c.gender.as_str()))
    }

    pub fn options(&self, selection: &FilterSelection) -> FilterOptions {
        let province = selection.province.as_str();
        let district = selection.district.as_deref();
        let area = selection.area.as_deref();

        FilterOptions {
            provinces: owned(self.provinces()),
            districts: owned(self.districts(province)),
            areas: owned(self.areas(province, district)),
            parties: owned(self.parties(province, district, area)),
            genders: owned(self.genders()),
        }
    }

    /// Applies one change and then resets every lower cascade level that no
    /// longer has a matching candidate.
    pub fn reduce(&self, selection: &FilterSelection, change: FilterChange) -> FilterSelection {
        let mut next = selection.clone();
        match change {
            FilterChange::Province(province) => next.province = province.trim().to_string(),
            FilterChange::District(district) => next.district = district,
            FilterChange::Area(area) => next.area = area,
            FilterChange::Party(party) => next.party = party,
            FilterChange::Gender(gender) => next.gender = gender,
            FilterChange::Qualification(tier) => next.qualification = tier,
            FilterChange::AgeRange(range) => next.age = super::AgeRange::new(range.min, range.max),
            FilterChange::Search(search) => next.search = search,
            FilterChange::Sort(sort) => next.sort = sort,
        }
        self.reconcile(next)
    }

    pub fn reconcile(&self, mut selection: FilterSelection) -> FilterSelection {
        if !self.provinces().contains(&selection.province.as_str()) {
            selection.province = self.default_province.to_string();
        }

        let province = selection.province.as_str();
        if let Some(district) = selection.district.as_deref() {
            if !self.districts(province).contains(&district) {
                selection.district = None;
            }
        }

        let district = selection.district.as_deref();
        if let Some(area) = selection.area.as_deref() {
            if !self.areas(province, district).contains(&area) {
                selection.area = None;
            }
        }

        let area = selection.area.as_deref();
        if let Some(party) = selection.party.as_deref() {
            if !self.parties(province, district, area).contains(&party) {
                selection.party = None;
            }
        }

        selection
    }
}

fn distinct_sorted<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    values.collect::<BTreeSet<_>>().into_iter().collect()
}

fn owned(values: Vec<&str>) -> Vec<String> {
    values.into_iter().map(str::to_string).collect()
}

pub(crate) fn compare_area_labels(a: &str, b: &str) -> Ordering {
    match (parse_area(a), parse_area(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn area_labels_sort_numerically() {
        let mut labels = vec!["10", "2", "क", "1"];
        labels.sort_by(|a, b| compare_area_labels(a, b));
        assert_eq!(labels, vec!["1", "2", "10", "क"]);
    }
}
