use std::sync::Arc;

use crate::config::ExplorerConfig;
use crate::explorer::domain::{Candidate, CandidateId};
use crate::explorer::labels::{LabelCategory, LabelTables};
use crate::explorer::service::ExplorerService;
use crate::explorer::store::DatasetStore;

pub(crate) const PROVINCE: &str = "बागमती प्रदेश";
pub(crate) const KOSHI: &str = "कोशी प्रदेश";

/// A Kathmandu-1 male candidate; adjust the rest with the `with_*` helpers.
pub(crate) fn candidate(
    id: u64,
    name: &str,
    age: u32,
    party: &str,
    qualification: &str,
) -> Candidate {
    Candidate {
        id: CandidateId(id),
        name: name.to_string(),
        age,
        gender: "पुरुष".to_string(),
        party: party.to_string(),
        symbol: None,
        district: "काठमाडौं".to_string(),
        province: PROVINCE.to_string(),
        province_id: Some(3),
        constituency_id: 1,
        area: "1".to_string(),
        qualification: (!qualification.is_empty()).then(|| qualification.to_string()),
        father_name: None,
        spouse_name: None,
        address: None,
        experience: None,
        other_details: None,
        institution: None,
    }
}

pub(crate) fn with_gender(mut candidate: Candidate, gender: &str) -> Candidate {
    candidate.gender = gender.to_string();
    candidate
}

pub(crate) fn with_location(
    mut candidate: Candidate,
    province: &str,
    district: &str,
    area: &str,
) -> Candidate {
    candidate.province = province.to_string();
    candidate.district = district.to_string();
    candidate.area = area.to_string();
    candidate.constituency_id = area.parse().unwrap_or(0);
    candidate
}

/// Two provinces, three districts, several areas and parties.
pub(crate) fn dataset() -> Vec<Candidate> {
    vec![
        with_location(
            candidate(1, "राम थापा", 45, "नेपाली काँग्रेस", "स्नातकोत्तर"),
            PROVINCE,
            "काठमाडौं",
            "1",
        ),
        with_location(
            with_gender(candidate(2, "सीता राई", 38, "नेकपा (एमाले)", "स्नातक"), "महिला"),
            PROVINCE,
            "काठमाडौं",
            "2",
        ),
        with_location(
            candidate(3, "हरि शर्मा", 52, "स्वतन्त्र", "एसएलसी"),
            PROVINCE,
            "काठमाडौं",
            "10",
        ),
        with_location(
            candidate(4, "गोपाल खड्का", 29, "नेपाली काँग्रेस", "प्रमाणपत्र तह"),
            PROVINCE,
            "ललितपुर",
            "1",
        ),
        with_location(
            with_gender(candidate(5, "मीना तामाङ", 61, "राष्ट्रिय स्वतन्त्र पार्टी", ""), "महिला"),
            PROVINCE,
            "ललितपुर",
            "2",
        ),
        with_location(
            candidate(6, "दीपक लिम्बु", 41, "नेकपा (एमाले)", "स्नातक"),
            KOSHI,
            "झापा",
            "1",
        ),
        with_location(
            candidate(7, "कमला बस्नेत", 33, "नेपाली काँग्रेस", "साक्षर"),
            KOSHI,
            "झापा",
            "3",
        ),
    ]
}

pub(crate) fn labels() -> LabelTables {
    let mut tables = LabelTables::builtin();
    tables.insert(LabelCategory::CandidateName, "राम थापा", "Ram Thapa");
    tables.insert(LabelCategory::CandidateName, "सीता राई", "Sita Rai");
    tables.insert(LabelCategory::Party, "नेपाली काँग्रेस", "Nepali Congress");
    tables.insert(LabelCategory::Party, "नेकपा (एमाले)", "CPN (UML)");
    tables
}

pub(crate) fn store() -> Arc<DatasetStore> {
    Arc::new(DatasetStore::from_candidates(dataset()))
}

pub(crate) fn service() -> ExplorerService {
    ExplorerService::with_store(
        DatasetStore::from_candidates(dataset()),
        Arc::new(labels()),
        ExplorerConfig::default(),
    )
}

pub(crate) async fn read_json_body(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

/// Percent-encodes every non-alphanumeric byte for use in a query string.
pub(crate) fn encode_query_value(value: &str) -> String {
    value
        .bytes()
        .map(|byte| {
            if byte.is_ascii_alphanumeric() {
                (byte as char).to_string()
            } else {
                format!("%{byte:02X}")
            }
        })
        .collect()
}
