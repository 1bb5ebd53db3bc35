use super::domain::CandidateId;
use crate::config::DEFAULT_IMAGE_URL_TEMPLATE;

pub const ID_PLACEHOLDER: &str = "{id}";

/// URL pattern for candidate portraits; `{id}` is replaced with the candidate id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageUrlTemplate(String);

impl ImageUrlTemplate {
    pub fn parse(template: &str) -> Option<Self> {
        let template = template.trim();
        template
            .contains(ID_PLACEHOLDER)
            .then(|| Self(template.to_string()))
    }

    pub fn url_for(&self, id: CandidateId) -> String {
        self.0.replace(ID_PLACEHOLDER, &id.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ImageUrlTemplate {
    fn default() -> Self {
        Self(DEFAULT_IMAGE_URL_TEMPLATE.to_string())
    }
}
