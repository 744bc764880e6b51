//! Analyzer abstraction for proposal analysis.
//!
//! Provides a unified interface so the HTTP layer can work against any
//! analyzer implementation (production engine or the development mock) with a
//! consistent result shape. The concrete analyzer is chosen at startup and
//! injected into the application state.

mod mock;

pub use mock::MockAnalyzer;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Analyzer Trait
// ============================================================================

/// Unified interface for proposal analyzers.
#[async_trait]
pub trait ProposalAnalyzer: Send + Sync {
    /// Get the analyzer name.
    fn name(&self) -> &str;

    /// Analyze a proposal and predict its outcome.
    async fn analyze(
        &self,
        title: &str,
        description: &str,
        dao_name: Option<&str>,
    ) -> Result<AnalysisResult, AnalyzerError>;
}

/// Error from an analyzer.
///
/// `Display` is the bare underlying message so the HTTP layer can prefix it
/// without double-wrapping.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AnalyzerError {
    pub message: String,
}

impl AnalyzerError {
    /// Create an error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// How likely a proposal is to pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LikelihoodLevel {
    Low,
    Medium,
    High,
}

impl LikelihoodLevel {
    /// Display label used in API responses.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Aggregate community mood toward a proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommunitySentiment {
    Negative,
    Neutral,
    Positive,
}

impl CommunitySentiment {
    /// Display label used in API responses.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Negative => "Negative",
            Self::Neutral => "Neutral",
            Self::Positive => "Positive",
        }
    }
}

/// Verdict for a single proposal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Estimated probability of the proposal passing, 0-100.
    pub likelihood_percentage: f64,
    pub likelihood_level: LikelihoodLevel,
    pub community_sentiment: CommunitySentiment,
    /// Human-readable explanation of the verdict.
    pub reasoning: String,
    pub risks: Vec<String>,
    pub opportunities: Vec<String>,
    /// Analyzer self-reported confidence, 0-100.
    pub confidence_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_likelihood_labels() {
        assert_eq!(LikelihoodLevel::Low.as_str(), "Low");
        assert_eq!(LikelihoodLevel::Medium.as_str(), "Medium");
        assert_eq!(LikelihoodLevel::High.as_str(), "High");
    }

    #[test]
    fn test_sentiment_labels() {
        assert_eq!(CommunitySentiment::Negative.as_str(), "Negative");
        assert_eq!(CommunitySentiment::Neutral.as_str(), "Neutral");
        assert_eq!(CommunitySentiment::Positive.as_str(), "Positive");
    }

    #[test]
    fn test_labels_serialize_as_bare_strings() {
        let json = serde_json::to_string(&LikelihoodLevel::High).unwrap();
        assert_eq!(json, "\"High\"");

        let json = serde_json::to_string(&CommunitySentiment::Neutral).unwrap();
        assert_eq!(json, "\"Neutral\"");
    }

    #[test]
    fn test_analyzer_error_display_is_bare_message() {
        let err = AnalyzerError::new("boom");
        assert_eq!(err.to_string(), "boom");
    }
}
