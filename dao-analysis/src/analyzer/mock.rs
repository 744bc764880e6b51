//! Development mock analyzer.

use async_trait::async_trait;

use super::{AnalysisResult, AnalyzerError, CommunitySentiment, LikelihoodLevel, ProposalAnalyzer};

/// Fixed-output analyzer wired in until a production analyzer is available.
///
/// Returns the same optimistic verdict for every proposal.
#[derive(Debug, Default, Clone)]
pub struct MockAnalyzer;

impl MockAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ProposalAnalyzer for MockAnalyzer {
    fn name(&self) -> &str {
        "mock"
    }

    async fn analyze(
        &self,
        _title: &str,
        _description: &str,
        _dao_name: Option<&str>,
    ) -> Result<AnalysisResult, AnalyzerError> {
        Ok(AnalysisResult {
            likelihood_percentage: 75.0,
            likelihood_level: LikelihoodLevel::High,
            community_sentiment: CommunitySentiment::Positive,
            reasoning: "Mock analysis for development".to_string(),
            risks: vec![
                "Development risk 1".to_string(),
                "Development risk 2".to_string(),
            ],
            opportunities: vec![
                "Development opportunity 1".to_string(),
                "Development opportunity 2".to_string(),
            ],
            confidence_score: 85.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_verdict_is_fixed() {
        let analyzer = MockAnalyzer::new();
        let result = analyzer
            .analyze("Any title", "Any description", Some("AnyDAO"))
            .await
            .unwrap();

        assert_eq!(result.likelihood_percentage, 75.0);
        assert_eq!(result.likelihood_level, LikelihoodLevel::High);
        assert_eq!(result.community_sentiment, CommunitySentiment::Positive);
        assert_eq!(result.reasoning, "Mock analysis for development");
        assert_eq!(result.risks.len(), 2);
        assert_eq!(result.opportunities.len(), 2);
        assert_eq!(result.confidence_score, 85.0);
    }

    #[tokio::test]
    async fn test_mock_ignores_dao_name() {
        let analyzer = MockAnalyzer::new();
        let with_dao = analyzer.analyze("t", "d", Some("X")).await.unwrap();
        let without_dao = analyzer.analyze("t", "d", None).await.unwrap();
        assert_eq!(
            with_dao.likelihood_percentage,
            without_dao.likelihood_percentage
        );
    }
}
