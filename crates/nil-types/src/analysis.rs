//! Contract-analysis collaborator shapes and the FMV advisory record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// "Is this even a contract" signal from the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractCheck {
    pub is_contract: bool,
    /// 0.0-1.0 likelihood that the text is a contract.
    pub confidence: f64,
}

/// Severity of a detected contract red flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagSeverity {
    Critical,
    Warning,
    Info,
}

/// One red flag found in contract text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedFlag {
    pub issue: String,
    pub severity: FlagSeverity,
    /// Text surrounding the match, for reviewer context.
    pub excerpt: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TermImportance {
    High,
    Medium,
    Low,
}

/// A key term extracted from contract text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyTerm {
    pub term: String,
    pub value: String,
    pub importance: TermImportance,
}

/// Full structured output of the contract analyzer collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractAnalysis {
    pub is_contract: bool,
    pub confidence: f64,
    pub red_flags: Vec<RedFlag>,
    pub key_terms: Vec<KeyTerm>,
    pub summary: String,
}

/// Risk level derived from contract-analysis findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AiRiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

/// Standardized risk-adjustment signal produced by the AI-analysis adapter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAnalysisResult {
    pub enabled: bool,
    pub analyzed: bool,
    pub contract_detected: bool,
    pub confidence: f64,
    pub red_flags: Vec<RedFlag>,
    pub key_terms: Vec<KeyTerm>,
    pub summary: String,
    pub recommendations: Vec<String>,
    pub risk_level: AiRiskLevel,
    /// Preserved analyzer error when the analysis degraded.
    pub error: Option<String>,
    pub analyzed_at: DateTime<Utc>,
}

/// Severity of an FMV advisory finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FmvAdvisorySeverity {
    None,
    Low,
    Medium,
    High,
}

/// Reviewer-facing fair-market-value comparison. Context only: this record
/// never blocks or auto-rejects a deal.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FmvAdvisory {
    pub estimated_fmv: f64,
    pub actual_amount: f64,
    pub ratio: f64,
    pub severity: FmvAdvisorySeverity,
    pub score_impact: u8,
    pub flag: Option<String>,
    /// Always false; advisory findings are presented to reviewers, never
    /// enforced.
    pub is_blocking: bool,
}
