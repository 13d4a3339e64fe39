//! The six independent compliance dimension scorers.
//!
//! Each scorer evaluates one facet of a deal against the immutable inputs
//! it receives, producing a `DimensionScore` with its fixed weight. Scorers
//! never read each other's output; the orchestrator in the crate root fans
//! them out and aggregates.

pub mod brand_safety;
pub mod document_hygiene;
pub mod fmv_verification;
pub mod guardian_consent;
pub mod policy_fit;
pub mod tax_readiness;
