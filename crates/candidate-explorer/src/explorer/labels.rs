use super::domain::Language;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

/// Which lookup table a raw value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelCategory {
    Province,
    Gender,
    CandidateName,
    Party,
}

/// Translates raw dataset values into display strings for the secondary language.
pub trait LabelLookup: Send + Sync {
    fn translation(&self, category: LabelCategory, raw: &str) -> Option<&str>;

    fn display<'a>(&'a self, category: LabelCategory, raw: &'a str, language: Language) -> &'a str {
        match language {
            Language::Nepali => raw,
            Language::English => self.translation(category, raw).unwrap_or(raw),
        }
    }
}

const BUILTIN_PROVINCES: [(&str, &str); 7] = [
    ("कोशी प्रदेश", "Koshi Province"),
    ("मधेश प्रदेश", "Madhesh Province"),
    ("बागमती प्रदेश", "Bagmati Province"),
    ("गण्डकी प्रदेश", "Gandaki Province"),
    ("लुम्बिनी प्रदेश", "Lumbini Province"),
    ("कर्णाली प्रदेश", "Karnali Province"),
    ("सुदूरपश्चिम प्रदेश", "Sudurpashchim Province"),
];

const BUILTIN_GENDERS: [(&str, &str); 3] = [
    ("पुरुष", "Male"),
    ("महिला", "Female"),
    ("अन्य", "Other"),
];

/// Static Nepali → English tables. Province and gender tables are built in;
/// candidate and party names come from a labels file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LabelTables {
    #[serde(default)]
    provinces: HashMap<String, String>,
    #[serde(default)]
    genders: HashMap<String, String>,
    #[serde(default)]
    candidates: HashMap<String, String>,
    #[serde(default)]
    parties: HashMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LabelLoadError {
    #[error("failed to read label tables: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid label tables: {0}")]
    Json(#[from] serde_json::Error),
}

impl LabelTables {
    pub fn builtin() -> Self {
        let mut tables = Self::default();
        for (raw, english) in BUILTIN_PROVINCES {
            tables.insert(LabelCategory::Province, raw, english);
        }
        for (raw, english) in BUILTIN_GENDERS {
            tables.insert(LabelCategory::Gender, raw, english);
        }
        tables
    }

    /// Built-in tables extended (and overridden) by the file at `path`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LabelLoadError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LabelLoadError> {
        let loaded: LabelTables = serde_json::from_reader(reader)?;
        let mut tables = Self::builtin();
        tables.merge(loaded);
        Ok(tables)
    }

    pub fn insert(&mut self, category: LabelCategory, raw: &str, translated: &str) {
        self.table_mut(category)
            .insert(raw.trim().to_string(), translated.trim().to_string());
    }

    pub fn len(&self) -> usize {
        self.provinces.len() + self.genders.len() + self.candidates.len() + self.parties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn merge(&mut self, other: LabelTables) {
        self.provinces.extend(other.provinces);
        self.genders.extend(other.genders);
        self.candidates.extend(other.candidates);
        self.parties.extend(other.parties);
    }

    fn table(&self, category: LabelCategory) -> &HashMap<String, String> {
        match category {
            LabelCategory::Province => &self.provinces,
            LabelCategory::Gender => &self.genders,
            LabelCategory::CandidateName => &self.candidates,
            LabelCategory::Party => &self.parties,
        }
    }

    fn table_mut(&mut self, category: LabelCategory) -> &mut HashMap<String, String> {
        match category {
            LabelCategory::Province => &mut self.provinces,
            LabelCategory::Gender => &mut self.genders,
            LabelCategory::CandidateName => &mut self.candidates,
            LabelCategory::Party => &mut self.parties,
        }
    }
}

impl LabelLookup for LabelTables {
    fn translation(&self, category: LabelCategory, raw: &str) -> Option<&str> {
        self.table(category).get(raw.trim()).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn nepali_display_returns_raw_value() {
        let tables = LabelTables::builtin();
        assert_eq!(
            tables.display(LabelCategory::Province, "बागमती प्रदेश", Language::Nepali),
            "बागमती प्रदेश"
        );
    }

    #[test]
    fn english_display_translates_or_falls_back() {
        let tables = LabelTables::builtin();
        assert_eq!(
            tables.display(LabelCategory::Gender, "महिला", Language::English),
            "Female"
        );
        assert_eq!(
            tables.display(LabelCategory::Party, "अज्ञात दल", Language::English),
            "अज्ञात दल"
        );
    }

    #[test]
    fn file_tables_extend_builtin_ones() {
        let json = r#"{
            "parties": { "नेपाली काँग्रेस": "Nepali Congress" },
            "provinces": { "कोशी प्रदेश": "Province No. 1" }
        }"#;
        let tables = LabelTables::from_reader(Cursor::new(json)).expect("tables parse");

        assert_eq!(
            tables.translation(LabelCategory::Party, "नेपाली काँग्रेस"),
            Some("Nepali Congress")
        );
        assert_eq!(
            tables.translation(LabelCategory::Province, "कोशी प्रदेश"),
            Some("Province No. 1")
        );
        assert_eq!(
            tables.translation(LabelCategory::Gender, "पुरुष"),
            Some("Male")
        );
    }

    #[test]
    fn malformed_file_is_reported() {
        let error = LabelTables::from_reader(Cursor::new("[1, 2]")).expect_err("not a map");
        assert!(matches!(error, LabelLoadError::Json(_)));
    }
}
