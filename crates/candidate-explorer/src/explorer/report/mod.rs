mod brackets;
mod summary;
pub mod views;

pub use brackets::AgeBracket;
pub use summary::{aggregate, BracketMember, CandidateReport, Tally};
pub use views::ReportSummary;
