use super::domain::{Candidate, CandidateId, Language, QualificationTier};
use super::labels::{LabelCategory, LabelLookup};
use super::filters::{FilterOptions, FilterSelection, SortMode};
use super::media::ImageUrlTemplate;
use super::paginate::Page;
use super::report::ReportSummary;
use super::store::LoadState;
use serde::Serialize;

/// Result-list entry with every raw value already labelled for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateCard {
    pub id: CandidateId,
    pub name: String,
    pub party: String,
    pub district: String,
    pub province: String,
    pub area: String,
    pub age: u32,
    pub gender: String,
    pub tier: QualificationTier,
    pub tier_label: &'static str,
    pub image_url: String,
}

/// Everything known about one candidate, for the comparison table and lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CandidateDetail {
    #[serde(flatten)]
    pub card: CandidateCard,
    pub symbol: Option<String>,
    pub qualification: Option<String>,
    pub institution: Option<String>,
    pub father_name: Option<String>,
    pub spouse_name: Option<String>,
    pub address: Option<String>,
    pub experience: Option<String>,
    pub other_details: Option<String>,
}

impl CandidateCard {
    pub fn build(
        candidate: &Candidate,
        labels: &dyn LabelLookup,
        language: Language,
        images: &ImageUrlTemplate,
    ) -> Self {
        let tier = candidate.qualification_tier();
        Self {
            id: candidate.id,
            name: labels
                .display(LabelCategory::CandidateName, &candidate.name, language)
                .to_string(),
            party: labels
                .display(LabelCategory::Party, &candidate.party, language)
                .to_string(),
            district: candidate.district.clone(),
            province: labels
                .display(LabelCategory::Province, &candidate.province, language)
                .to_string(),
            area: candidate.area.clone(),
            age: candidate.age,
            gender: labels
                .display(LabelCategory::Gender, &candidate.gender, language)
                .to_string(),
            tier,
            tier_label: tier.label(language),
            image_url: images.url_for(candidate.id),
        }
    }
}

impl CandidateDetail {
    pub fn build(
        candidate: &Candidate,
        labels: &dyn LabelLookup,
        language: Language,
        images: &ImageUrlTemplate,
    ) -> Self {
        Self {
            card: CandidateCard::build(candidate, labels, language, images),
            symbol: candidate.symbol.clone(),
            qualification: candidate.qualification.clone(),
            institution: candidate.institution.clone(),
            father_name: candidate.father_name.clone(),
            spouse_name: candidate.spouse_name.clone(),
            address: candidate.address.clone(),
            experience: candidate.experience.clone(),
            other_details: candidate.other_details.clone(),
        }
    }
}

/// Dropdown entry: the raw value to send back and its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionEntry {
    pub value: String,
    pub label: String,
}

impl OptionEntry {
    fn labelled(
        labels: &dyn LabelLookup,
        category: LabelCategory,
        raw: String,
        language: Language,
    ) -> Self {
        let label = labels.display(category, &raw, language).to_string();
        Self { value: raw, label }
    }

    fn plain(raw: String) -> Self {
        Self {
            label: raw.clone(),
            value: raw,
        }
    }

    fn fixed(code: &str, label: &str) -> Self {
        Self {
            value: code.to_string(),
            label: label.to_string(),
        }
    }
}

/// Every dropdown of the filter bar, labelled for the session language.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct OptionsView {
    pub provinces: Vec<OptionEntry>,
    pub districts: Vec<OptionEntry>,
    pub areas: Vec<OptionEntry>,
    pub parties: Vec<OptionEntry>,
    pub genders: Vec<OptionEntry>,
    pub qualifications: Vec<OptionEntry>,
    pub sorts: Vec<OptionEntry>,
}

impl OptionsView {
    pub fn build(options: FilterOptions, labels: &dyn LabelLookup, language: Language) -> Self {
        let labelled = |category: LabelCategory, values: Vec<String>| -> Vec<OptionEntry> {
            values
                .into_iter()
                .map(|raw| OptionEntry::labelled(labels, category, raw, language))
                .collect()
        };

        Self {
            provinces: labelled(LabelCategory::Province, options.provinces),
            districts: options.districts.into_iter().map(OptionEntry::plain).collect(),
            areas: options.areas.into_iter().map(OptionEntry::plain).collect(),
            parties: labelled(LabelCategory::Party, options.parties),
            genders: labelled(LabelCategory::Gender, options.genders),
            qualifications: QualificationTier::ordered()
                .into_iter()
                .map(|tier| OptionEntry::fixed(tier.code(), tier.label(language)))
                .collect(),
            sorts: SortMode::ordered()
                .into_iter()
                .map(|mode| OptionEntry::fixed(mode.code(), mode.label(language)))
                .collect(),
        }
    }
}

/// Serializable snapshot of a whole explorer session.
#[derive(Debug, Clone, Serialize)]
pub struct ExplorerView {
    pub load_state: LoadState,
    pub language: Language,
    pub selection: FilterSelection,
    pub options: OptionsView,
    pub summary: ReportSummary,
    pub results: Page<CandidateCard>,
    pub comparison: Vec<CandidateDetail>,
    pub compare_full: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explorer::labels::LabelTables;
    use crate::explorer::tests::common::candidate;

    #[test]
    fn card_labels_follow_language() {
        let mut labels = LabelTables::builtin();
        labels.insert(LabelCategory::CandidateName, "राम थापा", "Ram Thapa");
        let images = ImageUrlTemplate::default();
        let record = candidate(42, "राम थापा", 33, "स्वतन्त्र", "स्नातक");

        let nepali = CandidateCard::build(&record, &labels, Language::Nepali, &images);
        assert_eq!(nepali.name, "राम थापा");
        assert_eq!(nepali.gender, "पुरुष");
        assert_eq!(nepali.tier_label, "स्नातक");

        let english = CandidateCard::build(&record, &labels, Language::English, &images);
        assert_eq!(english.name, "Ram Thapa");
        assert_eq!(english.party, "स्वतन्त्र");
        assert_eq!(english.gender, "Male");
        assert_eq!(english.province, "Bagmati Province");
        assert_eq!(english.tier, QualificationTier::Bachelors);
        assert!(english.image_url.ends_with("/42.jpg"));
    }

    #[test]
    fn detail_flattens_card_fields() {
        let mut record = candidate(5, "क", 40, "दल", "स्नातक");
        record.father_name = Some("ख".to_string());

        let detail = CandidateDetail::build(
            &record,
            &LabelTables::builtin(),
            Language::Nepali,
            &ImageUrlTemplate::default(),
        );
        let value = serde_json::to_value(&detail).expect("serializes");
        assert_eq!(value["id"], 5);
        assert_eq!(value["father_name"], "ख");
        assert_eq!(value["qualification"], "स्नातक");
        assert!(value["spouse_name"].is_null());
    }
}
