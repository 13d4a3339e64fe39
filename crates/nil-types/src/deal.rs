//! Deal and athlete input records for the compliance scoring engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of NIL activity the deal compensates.
///
/// Unknown values coming from upstream records deserialize to `Other`
/// rather than failing; an unrecognized deal type is a scoring signal,
/// not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DealType {
    SocialPost,
    Appearance,
    Endorsement,
    BrandAmbassador,
    Merchandise,
    #[serde(other)]
    Other,
}

impl DealType {
    /// Canonical snake_case identifier, matching jurisdiction rule lists.
    pub fn as_str(&self) -> &'static str {
        match self {
            DealType::SocialPost => "social_post",
            DealType::Appearance => "appearance",
            DealType::Endorsement => "endorsement",
            DealType::BrandAmbassador => "brand_ambassador",
            DealType::Merchandise => "merchandise",
            DealType::Other => "other",
        }
    }
}

/// Who the third party in the deal is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThirdPartyType {
    Brand,
    Agency,
    LocalBusiness,
    Individual,
    #[serde(other)]
    Unknown,
}

impl Default for ThirdPartyType {
    fn default() -> Self {
        ThirdPartyType::Unknown
    }
}

/// A proposed or executed NIL agreement under review.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DealInput {
    #[serde(default)]
    pub id: Option<String>,
    pub athlete_id: String,
    pub deal_type: DealType,
    pub third_party_name: String,
    #[serde(default)]
    pub third_party_type: ThirdPartyType,
    /// Total compensation in dollars. Must be non-negative.
    pub compensation: f64,
    /// Free-text description of the athlete's obligations. Length is used
    /// as a proxy for specificity.
    #[serde(default)]
    pub deliverables: String,
    #[serde(default)]
    pub contract_text: Option<String>,
    #[serde(default)]
    pub contract_url: Option<String>,
    /// Two-letter jurisdiction code. Unknown codes fall back to the
    /// conservative default rule set.
    pub state: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_school_affiliated: bool,
    #[serde(default)]
    pub is_booster_connected: bool,
    #[serde(default)]
    pub performance_based: bool,
}

impl DealInput {
    /// Enforce the caller-contract invariants that indicate a caller bug
    /// rather than a real-world data gap.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.athlete_id.trim().is_empty() {
            return Err(ValidationError::MissingAthleteId);
        }
        if self.compensation < 0.0 || !self.compensation.is_finite() {
            return Err(ValidationError::InvalidCompensation(self.compensation));
        }
        Ok(())
    }

    pub fn has_contract(&self) -> bool {
        self.contract_text.as_deref().is_some_and(|t| !t.trim().is_empty())
            || self.contract_url.as_deref().is_some_and(|u| !u.trim().is_empty())
    }
}

/// Competition level of the athlete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AthleteRole {
    HsStudent,
    CollegeAthlete,
}

/// Guardian consent state for minors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentStatus {
    Approved,
    Pending,
    Denied,
    #[serde(other)]
    Missing,
}

/// The athlete whose NIL is implicated in the deal.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteContext {
    pub id: String,
    pub role: AthleteRole,
    pub is_minor: bool,
    pub state: String,
    pub sport: String,
    /// Aggregate follower count across platforms.
    pub followers: u64,
    /// Engagement rate in percentage points (4 means 4%), not a fraction.
    pub engagement_rate: f64,
    /// Only meaningful when `is_minor` is true; ignored for adults.
    #[serde(default)]
    pub consent_status: Option<ConsentStatus>,
    #[serde(default)]
    pub has_acknowledged_tax_obligations: bool,
}

impl AthleteContext {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingAthleteId);
        }
        Ok(())
    }
}

/// Where the money in a deal comes from, as reported at intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentSource {
    Brand,
    Collective,
    Booster,
    #[serde(other)]
    Unknown,
}

/// Minimal input for the quick risk pre-check. Carries only the signals
/// the heuristic reads; the full engine takes the complete records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickCheckInput {
    pub payment_source: PaymentSource,
    #[serde(default)]
    pub performance_tied: bool,
    #[serde(default)]
    pub enrollment_tied: bool,
    #[serde(default)]
    pub has_contract: bool,
    #[serde(default)]
    pub is_minor: bool,
    #[serde(default)]
    pub consent_status: Option<ConsentStatus>,
}

/// Caller-contract violations. These fail fast; everything else the engine
/// treats as a scoring signal.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("compensation must be a non-negative finite amount, got {0}")]
    InvalidCompensation(f64),

    #[error("athlete id must not be empty")]
    MissingAthleteId,
}
