//! AI-analysis adapter.
//!
//! Gates contract-text analysis behind a per-user / per-institution setting
//! and maps analyzer output into the standardized risk-adjustment signal.
//! The adapter is an advisory layer: its adjustment never exceeds a
//! 30-point swing and analysis failures degrade instead of propagating.

use crate::analysis::ContractAnalyzer;
use async_trait::async_trait;
use chrono::Utc;
use nil_types::{AiAnalysisResult, AiRiskLevel, FlagSeverity};
use tracing::warn;

/// Minimum text length worth analyzing.
const MIN_ANALYZABLE_LEN: usize = 50;

/// Cap on the advisory score adjustment.
const MAX_ADJUSTMENT: i32 = 30;

/// Feature-flag lookup for AI analysis. Backed by institution settings in
/// production.
#[async_trait]
pub trait AnalysisSettingsProvider: Send + Sync {
    async fn is_enabled_for_user(&self, user_id: &str) -> anyhow::Result<bool>;
    async fn is_enabled_for_institution(&self, institution_id: &str) -> anyhow::Result<bool>;
}

/// Whether AI analysis is enabled for a user. Fails closed: any lookup
/// error reads as disabled.
pub async fn is_ai_analysis_enabled(
    settings: &dyn AnalysisSettingsProvider,
    user_id: &str,
) -> bool {
    match settings.is_enabled_for_user(user_id).await {
        Ok(enabled) => enabled,
        Err(err) => {
            warn!(user = user_id, error = %err, "AI analysis setting lookup failed, treating as disabled");
            false
        }
    }
}

/// Institution-level variant of the gate, same fail-closed behavior.
pub async fn is_ai_analysis_enabled_for_institution(
    settings: &dyn AnalysisSettingsProvider,
    institution_id: &str,
) -> bool {
    match settings.is_enabled_for_institution(institution_id).await {
        Ok(enabled) => enabled,
        Err(err) => {
            warn!(institution = institution_id, error = %err, "AI analysis setting lookup failed, treating as disabled");
            false
        }
    }
}

fn empty_result(risk_level: AiRiskLevel, summary: &str, recommendations: Vec<String>) -> AiAnalysisResult {
    AiAnalysisResult {
        enabled: true,
        analyzed: false,
        contract_detected: false,
        confidence: 0.0,
        red_flags: vec![],
        key_terms: vec![],
        summary: summary.into(),
        recommendations,
        risk_level,
        error: None,
        analyzed_at: Utc::now(),
    }
}

/// Run contract analysis over optional text, producing the standardized
/// result shape. Analyzer failures are converted into a degraded
/// medium-risk result; this function never returns an error.
pub fn run_contract_analysis(
    analyzer: &dyn ContractAnalyzer,
    contract_text: Option<&str>,
) -> AiAnalysisResult {
    let text = match contract_text {
        Some(t) if t.trim().len() >= MIN_ANALYZABLE_LEN => t,
        _ => {
            return empty_result(
                AiRiskLevel::Low,
                "No contract text available for AI analysis.",
                vec!["Upload a contract document to enable AI analysis.".into()],
            )
        }
    };

    let check = analyzer.is_likely_contract(text);
    if !check.is_contract {
        let mut result = empty_result(
            AiRiskLevel::Low,
            "The provided text does not appear to be a contract.",
            vec!["Upload the full agreement document for analysis.".into()],
        );
        result.confidence = check.confidence;
        return result;
    }

    match analyzer.analyze(text) {
        Ok(analysis) => {
            let critical =
                analysis.red_flags.iter().filter(|f| f.severity == FlagSeverity::Critical).count();
            let warnings =
                analysis.red_flags.iter().filter(|f| f.severity == FlagSeverity::Warning).count();

            let risk_level = if critical >= 2 {
                AiRiskLevel::Critical
            } else if critical >= 1 {
                AiRiskLevel::High
            } else if warnings >= 2 {
                AiRiskLevel::Medium
            } else {
                AiRiskLevel::Low
            };

            let recommendations =
                analysis.red_flags.iter().map(|f| f.recommendation.clone()).collect();

            AiAnalysisResult {
                enabled: true,
                analyzed: true,
                contract_detected: true,
                confidence: analysis.confidence,
                red_flags: analysis.red_flags,
                key_terms: analysis.key_terms,
                summary: analysis.summary,
                recommendations,
                risk_level,
                error: None,
                analyzed_at: Utc::now(),
            }
        }
        Err(err) => {
            warn!(error = %err, "contract analysis failed, returning degraded result");
            AiAnalysisResult {
                enabled: true,
                analyzed: false,
                contract_detected: true,
                confidence: check.confidence,
                red_flags: vec![],
                key_terms: vec![],
                summary: "Contract analysis failed; manual review required.".into(),
                recommendations: vec![
                    "Have a compliance officer review this contract manually.".into()
                ],
                risk_level: AiRiskLevel::Medium,
                error: Some(err.to_string()),
                analyzed_at: Utc::now(),
            }
        }
    }
}

/// Advisory score adjustment from an analysis result, as a non-positive
/// delta. Capped at -30; zero when nothing was analyzed.
pub fn risk_score_adjustment(result: &AiAnalysisResult) -> i32 {
    if !result.analyzed || !result.contract_detected {
        return 0;
    }
    let critical =
        result.red_flags.iter().filter(|f| f.severity == FlagSeverity::Critical).count() as i32;
    let warnings =
        result.red_flags.iter().filter(|f| f.severity == FlagSeverity::Warning).count() as i32;
    -(critical * 10 + warnings * 3).min(MAX_ADJUSTMENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::PatternContractAnalyzer;
    use nil_types::ContractAnalysis;
    use pretty_assertions::assert_eq;

    struct BrokenSettings;

    #[async_trait]
    impl AnalysisSettingsProvider for BrokenSettings {
        async fn is_enabled_for_user(&self, _: &str) -> anyhow::Result<bool> {
            anyhow::bail!("settings store down")
        }
        async fn is_enabled_for_institution(&self, _: &str) -> anyhow::Result<bool> {
            anyhow::bail!("settings store down")
        }
    }

    struct FixedSettings(bool);

    #[async_trait]
    impl AnalysisSettingsProvider for FixedSettings {
        async fn is_enabled_for_user(&self, _: &str) -> anyhow::Result<bool> {
            Ok(self.0)
        }
        async fn is_enabled_for_institution(&self, _: &str) -> anyhow::Result<bool> {
            Ok(self.0)
        }
    }

    /// Detects contracts but always fails full analysis.
    struct FailingAnalyzer;

    impl ContractAnalyzer for FailingAnalyzer {
        fn is_likely_contract(&self, text: &str) -> nil_types::ContractCheck {
            PatternContractAnalyzer.is_likely_contract(text)
        }
        fn analyze(&self, _: &str) -> anyhow::Result<ContractAnalysis> {
            anyhow::bail!("model endpoint timed out")
        }
    }

    const CONTRACT: &str = "This NIL Agreement between Acme, Inc. and Athlete. Athlete hereby \
        agrees to exclusive rights in perpetuity. Compensation: $500. Automatically renews. \
        Morality clause applies. Governing law: Florida. Terminate for any reason.";

    #[tokio::test]
    async fn test_settings_lookup_fails_closed() {
        assert!(!is_ai_analysis_enabled(&BrokenSettings, "user-1").await);
        assert!(!is_ai_analysis_enabled_for_institution(&BrokenSettings, "inst-1").await);
        assert!(is_ai_analysis_enabled(&FixedSettings(true), "user-1").await);
    }

    #[test]
    fn test_short_text_is_not_analyzed() {
        let result = run_contract_analysis(&PatternContractAnalyzer, Some("too short"));
        assert!(!result.analyzed);
        assert_eq!(result.risk_level, AiRiskLevel::Low);
        assert!(result.recommendations.iter().any(|r| r.contains("Upload")));
    }

    #[test]
    fn test_missing_text_is_not_analyzed() {
        let result = run_contract_analysis(&PatternContractAnalyzer, None);
        assert!(!result.analyzed);
        assert!(!result.contract_detected);
    }

    #[test]
    fn test_non_contract_text_reports_low_risk() {
        let text = "We had an amazing season this year and the team is looking forward to \
            the championship next spring with all our fans behind us.";
        let result = run_contract_analysis(&PatternContractAnalyzer, Some(text));
        assert!(!result.contract_detected);
        assert_eq!(result.risk_level, AiRiskLevel::Low);
    }

    #[test]
    fn test_two_critical_flags_mean_critical_risk() {
        let result = run_contract_analysis(&PatternContractAnalyzer, Some(CONTRACT));
        assert!(result.analyzed);
        assert_eq!(result.risk_level, AiRiskLevel::Critical);
    }

    #[test]
    fn test_analyzer_failure_degrades_to_medium() {
        let result = run_contract_analysis(&FailingAnalyzer, Some(CONTRACT));
        assert!(!result.analyzed);
        assert_eq!(result.risk_level, AiRiskLevel::Medium);
        assert!(result.error.as_deref().unwrap().contains("timed out"));
        assert!(result.recommendations.iter().any(|r| r.contains("manual")));
    }

    #[test]
    fn test_adjustment_is_capped_at_30() {
        let result = run_contract_analysis(&PatternContractAnalyzer, Some(CONTRACT));
        let adjustment = risk_score_adjustment(&result);
        assert!(adjustment < 0);
        assert!(adjustment >= -30);
    }

    #[test]
    fn test_no_adjustment_when_not_analyzed() {
        let result = run_contract_analysis(&PatternContractAnalyzer, None);
        assert_eq!(risk_score_adjustment(&result), 0);

        let degraded = run_contract_analysis(&FailingAnalyzer, Some(CONTRACT));
        assert_eq!(risk_score_adjustment(&degraded), 0);
    }
}
