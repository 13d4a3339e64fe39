pub mod analysis;
pub mod deal;
pub mod reason;
pub mod reference;
pub mod score;

pub use analysis::{
    AiAnalysisResult, AiRiskLevel, ContractAnalysis, ContractCheck, FlagSeverity, FmvAdvisory,
    FmvAdvisorySeverity, KeyTerm, RedFlag, TermImportance,
};
pub use deal::{
    AthleteContext, AthleteRole, ConsentStatus, DealInput, DealType, PaymentSource,
    QuickCheckInput, ThirdPartyType, ValidationError,
};
pub use reason::ReasonCode;
pub use reference::{ProhibitedTerm, StateRules, TermSeverity};
pub use score::{
    ComplianceResult, ComplianceStatus, DimensionScore, DimensionScores, PayForPlayRisk,
    QuickRiskResult, DIMENSION_WEIGHT_BRAND_SAFETY, DIMENSION_WEIGHT_DOCUMENT_HYGIENE,
    DIMENSION_WEIGHT_FMV_VERIFICATION, DIMENSION_WEIGHT_GUARDIAN_CONSENT,
    DIMENSION_WEIGHT_POLICY_FIT, DIMENSION_WEIGHT_TAX_READINESS,
};
