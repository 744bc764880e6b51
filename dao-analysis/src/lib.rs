//! dao-analysis - DAO proposal analysis service.
//!
//! Accepts a governance proposal over HTTP, delegates to a pluggable
//! [`ProposalAnalyzer`], and returns the flattened verdict with timing
//! metadata.

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod analyzer;
pub mod error;
pub mod routes;

pub use analyzer::{
    AnalysisResult, AnalyzerError, CommunitySentiment, LikelihoodLevel, MockAnalyzer,
    ProposalAnalyzer,
};
pub use error::AnalysisError;
pub use routes::{build_router, AnalysisResponse, AppState, ProposalRequest};
