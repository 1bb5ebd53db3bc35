use super::compare::ToggleOutcome;
use super::domain::{CandidateId, Language, QualificationTier};
use super::filters::{choice, AgeRange, FilterChange, SortMode, DEFAULT_MAX_AGE, DEFAULT_MIN_AGE};
use super::labels::LabelLookup;
use super::session::ExplorerSession;
use super::store::{DatasetStore, LoadState};
use super::views::{CandidateDetail, ExplorerView, OptionsView};
use crate::config::ExplorerConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info};

/// Filter state sent by a client. Missing fields, `"all"` and blanks leave
/// the corresponding filter unrestricted.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ExplorerRequest {
    pub province: Option<String>,
    pub district: Option<String>,
    pub area: Option<String>,
    pub party: Option<String>,
    pub gender: Option<String>,
    pub qualification: Option<String>,
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub page: Option<usize>,
    pub compare: Vec<u64>,
    pub language: Option<String>,
}

impl ExplorerRequest {
    /// Changes in cascade order, so each level is validated against the
    /// levels above it.
    pub fn changes(&self) -> Vec<FilterChange> {
        let mut changes = Vec::new();

        if let Some(province) = self.province.as_deref().and_then(choice) {
            changes.push(FilterChange::Province(province));
        }
        changes.push(FilterChange::District(optional_choice(&self.district)));
        changes.push(FilterChange::Area(optional_choice(&self.area)));
        changes.push(FilterChange::Party(optional_choice(&self.party)));
        changes.push(FilterChange::Gender(optional_choice(&self.gender)));
        changes.push(FilterChange::Qualification(
            self.qualification
                .as_deref()
                .and_then(QualificationTier::from_code),
        ));
        if self.min_age.is_some() || self.max_age.is_some() {
            changes.push(FilterChange::AgeRange(AgeRange::new(
                self.min_age.unwrap_or(DEFAULT_MIN_AGE),
                self.max_age.unwrap_or(DEFAULT_MAX_AGE),
            )));
        }
        if let Some(search) = &self.search {
            changes.push(FilterChange::Search(search.clone()));
        }
        if let Some(sort) = self.sort.as_deref().and_then(SortMode::from_code) {
            changes.push(FilterChange::Sort(sort));
        }

        changes
    }

    pub fn language_or(&self, fallback: Language) -> Language {
        self.language
            .as_deref()
            .map_or(fallback, Language::from_code)
    }
}

fn optional_choice(value: &Option<String>) -> Option<String> {
    value.as_deref().and_then(choice)
}

/// Query string of the cascade options endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OptionsQuery {
    pub province: Option<String>,
    pub district: Option<String>,
    pub area: Option<String>,
    pub language: Option<String>,
}

impl From<OptionsQuery> for ExplorerRequest {
    fn from(query: OptionsQuery) -> Self {
        Self {
            province: query.province,
            district: query.district,
            area: query.area,
            language: query.language,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetStatus {
    #[serde(flatten)]
    pub load_state: LoadState,
    pub state_label: &'static str,
    pub candidates: usize,
    pub loaded_at: Option<DateTime<Utc>>,
}

/// Shares one dataset and label set between per-request explorer sessions.
pub struct ExplorerService {
    store: RwLock<Arc<DatasetStore>>,
    labels: Arc<dyn LabelLookup>,
    config: ExplorerConfig,
}

impl ExplorerService {
    /// Starts with an empty store in the `Loading` state.
    pub fn new(labels: Arc<dyn LabelLookup>, config: ExplorerConfig) -> Self {
        Self::with_store(DatasetStore::loading(), labels, config)
    }

    pub fn with_store(
        store: DatasetStore,
        labels: Arc<dyn LabelLookup>,
        config: ExplorerConfig,
    ) -> Self {
        Self {
            store: RwLock::new(Arc::new(store)),
            labels,
            config,
        }
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    /// Replaces the current store. Sessions already open keep the old one.
    pub fn install(&self, store: DatasetStore) {
        info!(
            state = store.state().label(),
            candidates = store.len(),
            "candidate dataset installed"
        );
        let mut guard = self.store.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Arc::new(store);
    }

    pub fn store(&self) -> Arc<DatasetStore> {
        self.store
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn status(&self) -> DatasetStatus {
        let store = self.store();
        DatasetStatus {
            load_state: store.state().clone(),
            state_label: store.state().label(),
            candidates: store.len(),
            loaded_at: store.loaded_at(),
        }
    }

    pub fn session(&self, language: Language) -> ExplorerSession {
        let mut session = ExplorerSession::new(self.store(), self.labels.clone(), &self.config);
        session.set_language(language);
        session
    }

    /// Replays a client request onto a fresh session.
    pub fn open(&self, request: &ExplorerRequest) -> ExplorerSession {
        let mut session = self.session(request.language_or(self.config.language));
        for change in request.changes() {
            session.apply(change);
        }
        session.set_page(request.page.unwrap_or(1));

        for id in &request.compare {
            if session.toggle_compare(CandidateId(*id)) == ToggleOutcome::Ignored {
                debug!(id, "compare request skipped");
            }
        }

        session
    }

    pub fn view(&self, request: &ExplorerRequest) -> ExplorerView {
        self.open(request).view()
    }

    pub fn options(&self, query: OptionsQuery) -> OptionsView {
        self.open(&ExplorerRequest::from(query)).options()
    }

    pub fn candidate(&self, id: CandidateId, language: Option<&str>) -> Option<CandidateDetail> {
        let language = language.map_or(self.config.language, Language::from_code);
        self.session(language).candidate(id)
    }
}
