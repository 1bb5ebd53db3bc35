mod csv_rows;

use super::domain::{Candidate, CandidateId};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use tracing::{info, warn};

#[derive(Debug)]
pub enum DatasetLoadError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for DatasetLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetLoadError::Io(err) => write!(f, "failed to read candidate dataset: {}", err),
            DatasetLoadError::Json(err) => write!(f, "invalid candidate JSON: {}", err),
            DatasetLoadError::Csv(err) => write!(f, "invalid candidate CSV data: {}", err),
        }
    }
}

impl std::error::Error for DatasetLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DatasetLoadError::Io(err) => Some(err),
            DatasetLoadError::Json(err) => Some(err),
            DatasetLoadError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for DatasetLoadError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for DatasetLoadError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<csv::Error> for DatasetLoadError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Lifecycle of the one-time dataset load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LoadState {
    Loading,
    Ready,
    Failed { reason: String },
}

impl LoadState {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Loading => "Loading",
            Self::Ready => "Ready",
            Self::Failed { .. } => "Failed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Csv,
}

impl DatasetFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

/// Read-only candidate list loaded once per process.
#[derive(Debug)]
pub struct DatasetStore {
    candidates: Vec<Candidate>,
    positions: HashMap<CandidateId, usize>,
    state: LoadState,
    loaded_at: Option<DateTime<Utc>>,
}

impl DatasetStore {
    /// Empty store standing in until the load finishes.
    pub fn loading() -> Self {
        Self::empty(LoadState::Loading)
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self::empty(LoadState::Failed {
            reason: reason.into(),
        })
    }

    fn empty(state: LoadState) -> Self {
        Self {
            candidates: Vec::new(),
            positions: HashMap::new(),
            state,
            loaded_at: None,
        }
    }

    /// Builds a ready store. Later records repeating an earlier id are dropped.
    pub fn from_candidates(records: Vec<Candidate>) -> Self {
        let mut candidates = Vec::with_capacity(records.len());
        let mut positions = HashMap::with_capacity(records.len());

        for candidate in records {
            if positions.contains_key(&candidate.id) {
                warn!(id = %candidate.id, "skipping duplicate candidate id");
                continue;
            }
            positions.insert(candidate.id, candidates.len());
            candidates.push(candidate);
        }

        Self {
            candidates,
            positions,
            state: LoadState::Ready,
            loaded_at: Some(Utc::now()),
        }
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, DatasetLoadError> {
        let records: Vec<Candidate> = serde_json::from_reader(reader)?;
        Ok(Self::from_candidates(records))
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, DatasetLoadError> {
        let records = csv_rows::parse_rows(reader)?;
        Ok(Self::from_candidates(records))
    }

    pub fn from_reader<R: Read>(reader: R, format: DatasetFormat) -> Result<Self, DatasetLoadError> {
        match format {
            DatasetFormat::Json => Self::from_json_reader(reader),
            DatasetFormat::Csv => Self::from_csv_reader(reader),
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetLoadError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file), DatasetFormat::from_path(path))
    }

    /// Performs the one-time load. Failures produce an empty store in the
    /// `Failed` state instead of an error.
    pub async fn fetch<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let result = match tokio::fs::read(path).await {
            Ok(bytes) => Self::from_reader(bytes.as_slice(), DatasetFormat::from_path(path)),
            Err(err) => Err(DatasetLoadError::from(err)),
        };

        match result {
            Ok(store) => {
                info!(
                    path = %path.display(),
                    candidates = store.len(),
                    "candidate dataset loaded"
                );
                store
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "candidate dataset unavailable");
                Self::failed(err.to_string())
            }
        }
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn get(&self, id: CandidateId) -> Option<&Candidate> {
        self.position(id).map(|index| &self.candidates[index])
    }

    pub fn position(&self, id: CandidateId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}
