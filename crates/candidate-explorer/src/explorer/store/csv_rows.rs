use super::super::domain::{empty_string_as_none, Candidate, CandidateId};
use serde::Deserialize;
use std::io::Read;

/// Column layout of a spreadsheet export; headers match the JSON keys.
#[derive(Debug, Deserialize)]
struct CandidateRow {
    #[serde(rename = "CandidateID")]
    id: u64,
    #[serde(rename = "CandidateName")]
    name: String,
    #[serde(rename = "AGE_YR")]
    age: u32,
    #[serde(rename = "Gender")]
    gender: String,
    #[serde(rename = "PoliticalPartyName")]
    party: String,
    #[serde(
        rename = "SymbolName",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    symbol: Option<String>,
    #[serde(rename = "DistrictName")]
    district: String,
    #[serde(rename = "StateName")]
    province: String,
    #[serde(rename = "STATE_ID", default)]
    province_id: Option<u32>,
    #[serde(rename = "SCConstID")]
    constituency_id: u32,
    #[serde(rename = "ConstName", default)]
    area: String,
    #[serde(
        rename = "QUALIFICATION",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    qualification: Option<String>,
    #[serde(
        rename = "FATHER_NAME",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    father_name: Option<String>,
    #[serde(
        rename = "SPOUCE_NAME",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    spouse_name: Option<String>,
    #[serde(rename = "ADDRESS", default, deserialize_with = "empty_string_as_none")]
    address: Option<String>,
    #[serde(
        rename = "EXPERIENCE",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    experience: Option<String>,
    #[serde(
        rename = "OTHERDETAILS",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    other_details: Option<String>,
    #[serde(
        rename = "NAMEOFINST",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    institution: Option<String>,
}

impl From<CandidateRow> for Candidate {
    fn from(row: CandidateRow) -> Self {
        Candidate {
            id: CandidateId(row.id),
            name: row.name,
            age: row.age,
            gender: row.gender,
            party: row.party,
            symbol: row.symbol,
            district: row.district,
            province: row.province,
            province_id: row.province_id,
            constituency_id: row.constituency_id,
            area: row.area,
            qualification: row.qualification,
            father_name: row.father_name,
            spouse_name: row.spouse_name,
            address: row.address,
            experience: row.experience,
            other_details: row.other_details,
            institution: row.institution,
        }
    }
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<Candidate>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut candidates = Vec::new();

    for row in csv_reader.deserialize::<CandidateRow>() {
        candidates.push(row?.into());
    }

    Ok(candidates)
}
