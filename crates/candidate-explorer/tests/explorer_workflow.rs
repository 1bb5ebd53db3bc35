use std::path::PathBuf;
use std::sync::Arc;

use candidate_explorer::config::ExplorerConfig;
use candidate_explorer::explorer::{
    AgeBracket, CandidateId, DatasetStore, ExplorerRequest, ExplorerService, FilterChange,
    LabelTables, Language, LoadState, QualificationTier, SortMode, ToggleOutcome,
};

fn sample_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join(name)
}

async fn sample_service() -> ExplorerService {
    let labels = LabelTables::from_path(sample_path("sample_labels.json")).expect("labels load");
    let service = ExplorerService::new(Arc::new(labels), ExplorerConfig::default());
    let store = DatasetStore::fetch(sample_path("sample_candidates.json")).await;
    service.install(store);
    service
}

#[tokio::test]
async fn sample_dataset_loads_and_opens_on_bagmati() {
    let service = sample_service().await;
    let status = service.status();
    assert_eq!(status.load_state, LoadState::Ready);
    assert_eq!(status.candidates, 12);

    let session = service.session(Language::Nepali);
    let ids: Vec<u64> = session.results().iter().map(|c| c.id.0).collect();
    assert_eq!(
        ids,
        vec![339611, 339601, 339612, 339602, 339604, 339603, 339605]
    );

    let tiers: Vec<QualificationTier> = session
        .results()
        .iter()
        .map(|c| c.qualification_tier())
        .collect();
    assert!(tiers.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[tokio::test]
async fn cascade_drill_down_narrows_options_and_results() {
    let service = sample_service().await;
    let mut session = service.session(Language::English);

    let districts: Vec<String> = session
        .options()
        .districts
        .into_iter()
        .map(|entry| entry.value)
        .collect();
    assert_eq!(districts, vec!["काठमाडौं", "भक्तपुर", "ललितपुर"]);

    session.apply(FilterChange::District(Some("काठमाडौं".to_string())));
    let areas: Vec<String> = session
        .options()
        .areas
        .into_iter()
        .map(|entry| entry.value)
        .collect();
    assert_eq!(areas, vec!["1", "2", "3"]);

    session.apply(FilterChange::Area(Some("1".to_string())));
    let parties: Vec<String> = session
        .options()
        .parties
        .into_iter()
        .map(|entry| entry.label)
        .collect();
    assert_eq!(parties, vec!["CPN (UML)", "Nepali Congress"]);
    assert_eq!(session.results().len(), 2);

    session.apply(FilterChange::Province("कोशी प्रदेश".to_string()));
    assert_eq!(session.selection().district, None);
    assert_eq!(session.selection().area, None);
    assert_eq!(session.results().len(), 2);
}

#[tokio::test]
async fn summary_brackets_and_shares_cover_the_province() {
    let service = sample_service().await;
    let session = service.session(Language::English);
    let summary = session.summary();

    assert_eq!(summary.total, 7);
    let brackets: Vec<(AgeBracket, usize)> = summary
        .by_age_bracket
        .iter()
        .map(|entry| (entry.bracket, entry.count))
        .collect();
    assert_eq!(
        brackets,
        vec![
            (AgeBracket::Twenties, 2),
            (AgeBracket::Thirties, 2),
            (AgeBracket::Forties, 1),
            (AgeBracket::Fifties, 1),
            (AgeBracket::SixtiesAndSeventy, 1),
        ]
    );

    let thirties: Vec<&str> = summary.by_age_bracket[1]
        .members
        .iter()
        .map(|member| member.name.as_str())
        .collect();
    assert_eq!(thirties, vec!["Laxmi Bhatta", "Sita Kumari Rai"]);

    let genders: Vec<(&str, &str)> = summary
        .by_gender
        .iter()
        .map(|entry| (entry.gender_label.as_str(), entry.percentage.as_str()))
        .collect();
    assert_eq!(genders, vec![("Female", "42.9"), ("Male", "57.1")]);

    let parties: Vec<(&str, usize)> = summary
        .by_party
        .iter()
        .map(|entry| (entry.party_label.as_str(), entry.count))
        .collect();
    assert_eq!(
        parties,
        vec![
            ("CPN (UML)", 2),
            ("Nepali Congress", 2),
            ("Rastriya Swatantra Party", 2),
            ("Independent", 1),
        ]
    );
}

#[tokio::test]
async fn comparison_keeps_three_across_provinces() {
    let service = sample_service().await;
    let mut session = service.session(Language::Nepali);

    for id in [339601, 339606, 339608] {
        assert_eq!(session.toggle_compare(CandidateId(id)), ToggleOutcome::Added);
    }
    assert_eq!(
        session.toggle_compare(CandidateId(339610)),
        ToggleOutcome::Ignored
    );

    let comparison = session.comparison();
    assert_eq!(comparison.len(), 3);
    assert_eq!(comparison[1].card.district, "झापा");
    assert_eq!(
        comparison[1].institution.as_deref(),
        Some("महेन्द्र रत्न क्याम्पस")
    );
    assert!(comparison[0].card.image_url.ends_with("/339601.jpg"));
}

#[tokio::test]
async fn request_view_searches_translated_names() {
    let service = sample_service().await;
    let view = service.view(&ExplorerRequest {
        province: Some("मधेश प्रदेश".to_string()),
        search: Some("yadav".to_string()),
        sort: Some(SortMode::AgeDesc.code().to_string()),
        language: Some("en".to_string()),
        ..ExplorerRequest::default()
    });

    assert_eq!(view.selection.province, "मधेश प्रदेश");
    assert_eq!(view.results.total_items, 1);
    assert_eq!(view.results.items[0].name, "Bishnu Yadav");
    assert_eq!(view.results.items[0].tier, QualificationTier::Postgraduate);
}

#[tokio::test]
async fn missing_dataset_serves_an_empty_failed_view() {
    let service = ExplorerService::new(Arc::new(LabelTables::builtin()), ExplorerConfig::default());
    service.install(DatasetStore::fetch(sample_path("missing.json")).await);

    let view = service.view(&ExplorerRequest::default());
    assert!(matches!(view.load_state, LoadState::Failed { .. }));
    assert_eq!(view.results.total_items, 0);
    assert!(view.options.provinces.is_empty());
}
