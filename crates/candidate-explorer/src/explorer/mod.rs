//! Filter, sort, aggregate and compare election candidates from a
//! read-only dataset.
//!
//! Data flows one way: the [`store`] loads once, a [`session`] holds the
//! user's selection, the [`filters`] domain keeps dropdowns consistent, the
//! [`query`] engine filters and sorts, and the [`report`] aggregator and
//! [`paginate`] slicer derive what is displayed. Raw dataset values are
//! Nepali; English display goes through [`labels`].

pub mod compare;
pub mod domain;
pub mod filters;
pub mod labels;
pub mod media;
pub mod paginate;
pub mod qualification;
pub mod query;
pub mod report;
pub mod router;
pub mod service;
pub mod session;
pub mod store;
pub mod views;

#[cfg(test)]
mod tests;

pub use compare::{ComparisonSet, ToggleOutcome, MAX_COMPARE};
pub use domain::{Candidate, CandidateId, Language, QualificationTier};
pub use filters::{AgeRange, FilterChange, FilterDomain, FilterOptions, FilterSelection, SortMode};
pub use labels::{LabelCategory, LabelLoadError, LabelLookup, LabelTables};
pub use media::ImageUrlTemplate;
pub use paginate::{paginate, Page, PAGE_SIZE};
pub use report::{aggregate, AgeBracket, CandidateReport, ReportSummary};
pub use router::explorer_router;
pub use service::{DatasetStatus, ExplorerRequest, ExplorerService, OptionsQuery};
pub use session::ExplorerSession;
pub use store::{DatasetLoadError, DatasetStore, LoadState};
pub use views::{CandidateCard, CandidateDetail, ExplorerView, OptionEntry, OptionsView};
