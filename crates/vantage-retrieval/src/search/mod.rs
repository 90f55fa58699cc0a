//! Concurrent search strategies and their typed outcomes.
//!
//! Each strategy produces `Ok(candidates)` or `Err(cause)` tagged with
//! its name; the fusion step operates over this typed list, so one
//! branch's failure never voids the others.

pub mod boost_matrix;
pub mod fusion;
pub mod keyword;
pub mod pattern;
pub mod vector;

use vantage_core::errors::RagError;
use vantage_core::models::{Document, MatchDetail, Strategy};

/// A scored document proposed by a single strategy, before fusion.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub document: Document,
    /// Strategy-local score in [0, 1].
    pub score: f64,
    pub detail: Option<MatchDetail>,
}

/// The settled result of one launched strategy.
#[derive(Debug)]
pub struct StrategyOutcome {
    pub strategy: Strategy,
    pub result: Result<Vec<Candidate>, RagError>,
}

impl StrategyOutcome {
    pub fn from_result(strategy: Strategy, result: Result<Vec<Candidate>, RagError>) -> Self {
        Self { strategy, result }
    }
}
