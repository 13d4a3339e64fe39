//! Dimension score and aggregate result records.

use crate::reason::ReasonCode;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fixed dimension weights. These sum to exactly 1.0.
pub const DIMENSION_WEIGHT_POLICY_FIT: f64 = 0.30;
pub const DIMENSION_WEIGHT_DOCUMENT_HYGIENE: f64 = 0.20;
pub const DIMENSION_WEIGHT_FMV_VERIFICATION: f64 = 0.15;
pub const DIMENSION_WEIGHT_TAX_READINESS: f64 = 0.15;
pub const DIMENSION_WEIGHT_BRAND_SAFETY: f64 = 0.10;
pub const DIMENSION_WEIGHT_GUARDIAN_CONSENT: f64 = 0.10;

/// Traffic-light verdict derived from a 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceStatus {
    Green,
    Yellow,
    Red,
}

impl ComplianceStatus {
    /// Fixed thresholds: 80+ green, 50-79 yellow, below 50 red.
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            ComplianceStatus::Green
        } else if score >= 50 {
            ComplianceStatus::Yellow
        } else {
            ComplianceStatus::Red
        }
    }
}

/// Likelihood that a deal is disguised pay-for-play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PayForPlayRisk {
    Low,
    Medium,
    High,
}

/// Output of a single dimension scorer. Created fresh per scoring
/// invocation and immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScore {
    pub score: u8,
    pub weight: f64,
    pub weighted_score: f64,
    pub status: ComplianceStatus,
    pub reason_codes: Vec<ReasonCode>,
    pub notes: String,
    pub recommendations: Vec<String>,
}

impl DimensionScore {
    /// Build a dimension score from a raw (possibly out-of-range) value.
    ///
    /// Clamping happens here, once, after the scorer's full deduction
    /// sequence. Cumulative deductions may drive the raw value negative;
    /// they never produce a score below 0 or above 100.
    pub fn new(
        raw_score: i32,
        weight: f64,
        reason_codes: Vec<ReasonCode>,
        notes: impl Into<String>,
        recommendations: Vec<String>,
    ) -> Self {
        let score = raw_score.clamp(0, 100) as u8;
        DimensionScore {
            score,
            weight,
            weighted_score: f64::from(score) * weight,
            status: ComplianceStatus::from_score(score),
            reason_codes,
            notes: notes.into(),
            recommendations,
        }
    }
}

/// The six dimension scores, keyed by name.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScores {
    pub policy_fit: DimensionScore,
    pub document_hygiene: DimensionScore,
    pub fmv_verification: DimensionScore,
    pub tax_readiness: DimensionScore,
    pub brand_safety: DimensionScore,
    pub guardian_consent: DimensionScore,
}

impl DimensionScores {
    /// Dimension evaluation order, used for reason-code concatenation and
    /// recommendation priority.
    pub fn in_order(&self) -> [&DimensionScore; 6] {
        [
            &self.policy_fit,
            &self.document_hygiene,
            &self.fmv_verification,
            &self.tax_readiness,
            &self.brand_safety,
            &self.guardian_consent,
        ]
    }
}

/// Full explainability payload returned by the orchestrator.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceResult {
    pub deal_id: Option<String>,
    pub athlete_id: String,
    pub total_score: u8,
    pub status: ComplianceStatus,
    pub dimensions: DimensionScores,
    /// Concatenated across dimensions in evaluation order, not deduplicated.
    pub overall_reason_codes: Vec<ReasonCode>,
    /// Deduplicated preserving first occurrence, truncated to 5.
    pub overall_recommendations: Vec<String>,
    /// False only when a hard blocker fired (state ban, prohibited brand
    /// category, auto-reject contract term).
    pub can_be_approved: bool,
    /// True when any dimension carried a deduction or the verdict is not green.
    pub requires_review: bool,
    pub is_third_party_verified: bool,
    pub pay_for_play_risk: PayForPlayRisk,
    pub scored_at: DateTime<Utc>,
}

/// Output of the quick risk pre-check. Advisory only; never a substitute
/// for the full engine in a final compliance decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickRiskResult {
    pub risk_tier: ComplianceStatus,
    pub quick_issues: Vec<String>,
}
