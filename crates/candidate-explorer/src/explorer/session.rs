use super::compare::{ComparisonSet, ToggleOutcome};
use super::domain::{Candidate, CandidateId, Language};
use super::filters::{FilterChange, FilterDomain, FilterSelection};
use super::labels::LabelLookup;
use super::media::ImageUrlTemplate;
use super::paginate::{paginate, Page, PAGE_SIZE};
use super::query::query;
use super::report::{aggregate, CandidateReport, ReportSummary};
use super::store::DatasetStore;
use super::views::{CandidateCard, CandidateDetail, ExplorerView, OptionsView};
use crate::config::ExplorerConfig;
use std::sync::Arc;
use tracing::debug;

/// One user's view over the shared dataset: current filters, page, and
/// comparison picks. Every filter change recomputes results and aggregates.
pub struct ExplorerSession {
    store: Arc<DatasetStore>,
    labels: Arc<dyn LabelLookup>,
    images: ImageUrlTemplate,
    default_province: String,
    language: Language,
    selection: FilterSelection,
    page: usize,
    comparison: ComparisonSet,
    results: Vec<usize>,
    report: CandidateReport,
}

impl ExplorerSession {
    pub fn new(
        store: Arc<DatasetStore>,
        labels: Arc<dyn LabelLookup>,
        config: &ExplorerConfig,
    ) -> Self {
        let selection = FilterSelection::new(config.default_province.clone());
        let mut session = Self {
            store,
            labels,
            images: config.image_url_template.clone(),
            default_province: config.default_province.clone(),
            language: config.language,
            selection,
            page: 1,
            comparison: ComparisonSet::new(),
            results: Vec::new(),
            report: CandidateReport::default(),
        };
        let reconciled = session.domain().reconcile(session.selection.clone());
        session.selection = reconciled;
        session.recompute();
        session
    }

    fn domain(&self) -> FilterDomain<'_> {
        FilterDomain::new(&self.store, &self.default_province)
    }

    /// Applies one filter edit, then re-runs the query and aggregation and
    /// returns to the first page.
    pub fn apply(&mut self, change: FilterChange) {
        let next = self.domain().reduce(&self.selection, change);
        self.selection = next;
        self.page = 1;
        self.recompute();
    }

    fn recompute(&mut self) {
        let matches = query(self.store.candidates(), &self.selection, self.labels.as_ref());
        self.report = aggregate(matches.iter().copied());
        self.results = matches
            .iter()
            .filter_map(|candidate| self.store.position(candidate.id))
            .collect();
        debug!(
            province = %self.selection.province,
            results = self.results.len(),
            "explorer results recomputed"
        );
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page;
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Unknown ids are ignored like a toggle on a full set.
    pub fn toggle_compare(&mut self, id: CandidateId) -> ToggleOutcome {
        match self.store.get(id) {
            Some(candidate) => self.comparison.toggle(candidate),
            None => {
                debug!(%id, "compare toggle for unknown candidate ignored");
                ToggleOutcome::Ignored
            }
        }
    }

    pub fn remove_compare(&mut self, id: CandidateId) -> bool {
        self.comparison.remove(id)
    }

    pub fn clear_compare(&mut self) {
        self.comparison.clear();
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn current_page(&self) -> usize {
        self.page
    }

    pub fn compare_ids(&self) -> &[CandidateId] {
        self.comparison.ids()
    }

    pub fn options(&self) -> OptionsView {
        let options = self.domain().options(&self.selection);
        OptionsView::build(options, self.labels.as_ref(), self.language)
    }

    /// Filtered and sorted candidates.
    pub fn results(&self) -> Vec<&Candidate> {
        let candidates = self.store.candidates();
        self.results.iter().map(|index| &candidates[*index]).collect()
    }

    pub fn page(&self) -> Page<CandidateCard> {
        paginate(&self.results(), self.page, PAGE_SIZE)
            .map(|candidate| self.card(candidate))
    }

    pub fn summary(&self) -> ReportSummary {
        self.report.summary(self.labels.as_ref(), self.language)
    }

    /// Compared candidates in pick order. They stay listed even when the
    /// current filters exclude them.
    pub fn comparison(&self) -> Vec<CandidateDetail> {
        self.comparison
            .ids()
            .iter()
            .filter_map(|id| self.store.get(*id))
            .map(|candidate| self.detail(candidate))
            .collect()
    }

    pub fn candidate(&self, id: CandidateId) -> Option<CandidateDetail> {
        self.store.get(id).map(|candidate| self.detail(candidate))
    }

    pub fn view(&self) -> ExplorerView {
        ExplorerView {
            load_state: self.store.state().clone(),
            language: self.language,
            selection: self.selection.clone(),
            options: self.options(),
            summary: self.summary(),
            results: self.page(),
            comparison: self.comparison(),
            compare_full: self.comparison.is_full(),
        }
    }

    fn card(&self, candidate: &Candidate) -> CandidateCard {
        CandidateCard::build(candidate, self.labels.as_ref(), self.language, &self.images)
    }

    fn detail(&self, candidate: &Candidate) -> CandidateDetail {
        CandidateDetail::build(candidate, self.labels.as_ref(), self.language, &self.images)
    }
}
