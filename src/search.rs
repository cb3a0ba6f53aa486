pub mod candidate;
mod fitter;
pub mod params;
pub mod select;
pub mod trial;

pub use candidate::{evaluate, Candidate};
pub use fitter::{fit, fit_with_rng, SearchOutcome};
pub use params::{CandidateRanges, SearchParams, SearchParamsBuilder};
pub use select::select_best;
pub use trial::{search, search_with, TrialResult};
