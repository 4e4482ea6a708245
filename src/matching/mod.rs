//! Matching job keywords against a resume and scoring the result.
//!
//! Each keyword is classified as an exact match, a synonym match, or
//! missing. Exact matches weigh 1.0 and synonym matches 0.7 in the
//! percentage score.

mod report;
mod scorer;

pub use report::{
    EXACT_WEIGHT, MatchRecord, MatchReport, MatchStatus, SYNONYM_WEIGHT, ScoreRating,
    group_by_category,
};
pub use scorer::{MatchMode, MatchScorer, score_match};
