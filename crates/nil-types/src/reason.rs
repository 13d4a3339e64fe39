//! Machine-readable reason codes emitted by the dimension scorers.
//!
//! The vocabulary is closed so downstream consumers (UI copy tables, audit
//! exports) get exhaustiveness checking. Category-suffixed codes carry the
//! category and render it as an uppercase suffix, e.g.
//! `PROHIBITED_BRAND_CATEGORY_GAMBLING`.

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ReasonCode {
    // Policy fit
    StateHsNilProhibited,
    DealTypeProhibitedInState,
    SchoolAffiliatedDeal,
    BoosterConnected,
    PerformanceBasedCompensation,
    NcaaReportingRequired,

    // Document hygiene
    NoContractProvided,
    ProhibitedTerm(String),
    ConcerningTerm(String),
    CautionTerm(String),
    VagueDeliverables,
    NoDurationSpecified,

    // FMV verification
    FmvExtremeOverpayment,
    FmvSignificantOverpayment,
    FmvAboveMarket,
    FmvBelowMarket,

    // Tax readiness
    TaxObligationsNotAcknowledged,
    W9Required,
    QuarterlyTaxReminder,

    // Brand safety
    ProhibitedBrandCategory(String),
    CautionBrandCategory(String),
    UnverifiedThirdParty,

    // Guardian consent
    NotApplicableAdult,
    GuardianConsentApproved,
    GuardianConsentPending,
    GuardianConsentDenied,
    GuardianConsentMissing,
}

impl ReasonCode {
    /// Stable string form of the code.
    pub fn code(&self) -> String {
        match self {
            ReasonCode::StateHsNilProhibited => "STATE_HS_NIL_PROHIBITED".into(),
            ReasonCode::DealTypeProhibitedInState => "DEAL_TYPE_PROHIBITED_IN_STATE".into(),
            ReasonCode::SchoolAffiliatedDeal => "SCHOOL_AFFILIATED_DEAL".into(),
            ReasonCode::BoosterConnected => "BOOSTER_CONNECTED".into(),
            ReasonCode::PerformanceBasedCompensation => "PERFORMANCE_BASED_COMPENSATION".into(),
            ReasonCode::NcaaReportingRequired => "NCAA_REPORTING_REQUIRED".into(),
            ReasonCode::NoContractProvided => "NO_CONTRACT_PROVIDED".into(),
            ReasonCode::ProhibitedTerm(cat) => format!("PROHIBITED_TERM_{}", suffix(cat)),
            ReasonCode::ConcerningTerm(cat) => format!("CONCERNING_TERM_{}", suffix(cat)),
            ReasonCode::CautionTerm(cat) => format!("CAUTION_TERM_{}", suffix(cat)),
            ReasonCode::VagueDeliverables => "VAGUE_DELIVERABLES".into(),
            ReasonCode::NoDurationSpecified => "NO_DURATION_SPECIFIED".into(),
            ReasonCode::FmvExtremeOverpayment => "FMV_EXTREME_OVERPAYMENT".into(),
            ReasonCode::FmvSignificantOverpayment => "FMV_SIGNIFICANT_OVERPAYMENT".into(),
            ReasonCode::FmvAboveMarket => "FMV_ABOVE_MARKET".into(),
            ReasonCode::FmvBelowMarket => "FMV_BELOW_MARKET".into(),
            ReasonCode::TaxObligationsNotAcknowledged => {
                "TAX_OBLIGATIONS_NOT_ACKNOWLEDGED".into()
            }
            ReasonCode::W9Required => "W9_REQUIRED".into(),
            ReasonCode::QuarterlyTaxReminder => "QUARTERLY_TAX_REMINDER".into(),
            ReasonCode::ProhibitedBrandCategory(cat) => {
                format!("PROHIBITED_BRAND_CATEGORY_{}", suffix(cat))
            }
            ReasonCode::CautionBrandCategory(cat) => {
                format!("CAUTION_BRAND_CATEGORY_{}", suffix(cat))
            }
            ReasonCode::UnverifiedThirdParty => "UNVERIFIED_THIRD_PARTY".into(),
            ReasonCode::NotApplicableAdult => "NOT_APPLICABLE_ADULT".into(),
            ReasonCode::GuardianConsentApproved => "GUARDIAN_CONSENT_APPROVED".into(),
            ReasonCode::GuardianConsentPending => "GUARDIAN_CONSENT_PENDING".into(),
            ReasonCode::GuardianConsentDenied => "GUARDIAN_CONSENT_DENIED".into(),
            ReasonCode::GuardianConsentMissing => "GUARDIAN_CONSENT_MISSING".into(),
        }
    }

    /// Codes that carry a score deduction or a hard floor, as opposed to
    /// purely informational reminders.
    pub fn is_deduction(&self) -> bool {
        !matches!(
            self,
            ReasonCode::NcaaReportingRequired
                | ReasonCode::W9Required
                | ReasonCode::QuarterlyTaxReminder
                | ReasonCode::FmvBelowMarket
                | ReasonCode::NotApplicableAdult
                | ReasonCode::GuardianConsentApproved
        )
    }

    /// Codes that block approval outright regardless of the total score.
    pub fn is_hard_blocker(&self) -> bool {
        matches!(
            self,
            ReasonCode::StateHsNilProhibited
                | ReasonCode::ProhibitedBrandCategory(_)
                | ReasonCode::ProhibitedTerm(_)
        )
    }
}

/// Normalize a free-form category into an uppercase code suffix.
fn suffix(category: &str) -> String {
    category
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_uppercase() } else { '_' })
        .collect()
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.code())
    }
}

impl Serialize for ReasonCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
