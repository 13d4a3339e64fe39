//! Built-in pattern-based contract analyzer.
//!
//! The engine treats the analyzer as a collaborator behind the
//! `ContractAnalyzer` trait; this module provides the default
//! implementation: regex-driven contract detection, red-flag scanning, and
//! key-term extraction over raw agreement text.

use lazy_static::lazy_static;
use nil_types::{ContractAnalysis, ContractCheck, FlagSeverity, KeyTerm, RedFlag, TermImportance};
use regex::{Regex, RegexBuilder};

/// Contract-text analysis collaborator.
pub trait ContractAnalyzer: Send + Sync {
    fn is_likely_contract(&self, text: &str) -> ContractCheck;
    fn analyze(&self, text: &str) -> anyhow::Result<ContractAnalysis>;
}

struct RedFlagPattern {
    pattern: Regex,
    issue: &'static str,
    severity: FlagSeverity,
    recommendation: &'static str,
}

struct KeyTermPattern {
    pattern: Regex,
    term: &'static str,
    importance: TermImportance,
}

fn re(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .expect("static pattern must compile")
}

lazy_static! {
    /// Phrases that indicate a document is a contract at all.
    static ref CONTRACT_INDICATORS: Vec<Regex> = vec![
        re(r"agreement\s+(between|by\s+and\s+between)"),
        re(r"name,?\s*image,?\s*(and\s*)?likeness"),
        re(r"nil\s+(agreement|contract|deal)"),
        re(r"endorsement\s+agreement"),
        re(r"sponsorship\s+agreement"),
        re(r"hereby\s+agrees?"),
        re(r"terms\s+and\s+conditions"),
        re(r"compensation|payment|consideration"),
        re(r"exclusivity|exclusive\s+rights"),
        re(r"termination|terminate"),
        re(r"representations?\s+and\s+warranties"),
        re(r"indemnif(y|ication)"),
        re(r"governing\s+law"),
        re(r"force\s+majeure"),
        re(r"intellectual\s+property"),
        re(r"confidentiality|non-?disclosure"),
    ];

    static ref RED_FLAG_PATTERNS: Vec<RedFlagPattern> = vec![
        RedFlagPattern {
            pattern: re(r"perpetual|in\s+perpetuity|forever|indefinitely"),
            issue: "Perpetual rights clause detected",
            severity: FlagSeverity::Critical,
            recommendation: "Negotiate for time-limited rights (1-3 years maximum). Perpetual rights mean you can never regain control of your NIL.",
        },
        RedFlagPattern {
            pattern: re(r"exclusive\s+(rights?|license|agreement)"),
            issue: "Exclusive rights or license",
            severity: FlagSeverity::Critical,
            recommendation: "Understand what exclusivity prevents. Consider limiting it to specific categories or time periods.",
        },
        RedFlagPattern {
            pattern: re(r"non-?compete|non-?competition"),
            issue: "Non-compete clause found",
            severity: FlagSeverity::Critical,
            recommendation: "Non-competes can severely limit future NIL opportunities. Negotiate a narrow scope and short duration.",
        },
        RedFlagPattern {
            pattern: re(r"assignment\s+of\s+(all\s+)?rights"),
            issue: "Full assignment of rights",
            severity: FlagSeverity::Critical,
            recommendation: "Avoid assigning rights outright; prefer licensing. Assignment transfers ownership permanently.",
        },
        RedFlagPattern {
            pattern: re(r"no\s+(additional\s+)?compensation|without\s+(additional\s+)?payment"),
            issue: "Work without additional compensation",
            severity: FlagSeverity::Critical,
            recommendation: "Ensure every use of your NIL is compensated. Avoid unlimited use for a flat fee.",
        },
        RedFlagPattern {
            pattern: re(r"automatic(ally)?\s+renew"),
            issue: "Automatic renewal clause",
            severity: FlagSeverity::Warning,
            recommendation: "Note the cancellation window and review before each renewal.",
        },
        RedFlagPattern {
            pattern: re(r"terminate\s+(for\s+)?any\s+reason|termination\s+at\s+will"),
            issue: "One-sided termination rights",
            severity: FlagSeverity::Warning,
            recommendation: "Termination rights should be mutual. You should be able to exit if the brand can.",
        },
        RedFlagPattern {
            pattern: re(r"moral(ity)?\s+clause"),
            issue: "Morality clause present",
            severity: FlagSeverity::Warning,
            recommendation: "Negotiate clear, objective standards; vague morality clauses allow termination for minor issues.",
        },
        RedFlagPattern {
            pattern: re(r"indemnif(y|ication)\s+and\s+hold\s+harmless"),
            issue: "Indemnification clause",
            severity: FlagSeverity::Warning,
            recommendation: "Limit indemnification to your own actions, not the company's negligence.",
        },
        RedFlagPattern {
            pattern: re(r"liquidated\s+damages"),
            issue: "Liquidated damages clause",
            severity: FlagSeverity::Warning,
            recommendation: "Check that penalty amounts are reasonable; excessive damages can be challenged.",
        },
        RedFlagPattern {
            pattern: re(r"confidential(ity)?|non-?disclosure"),
            issue: "Confidentiality/NDA provisions",
            severity: FlagSeverity::Info,
            recommendation: "Understand what you cannot discuss publicly about the deal.",
        },
        RedFlagPattern {
            pattern: re(r"arbitration"),
            issue: "Arbitration clause",
            severity: FlagSeverity::Info,
            recommendation: "Arbitration replaces court litigation; consider whether you prefer keeping the court option.",
        },
        RedFlagPattern {
            pattern: re(r"right\s+of\s+first\s+refusal"),
            issue: "Right of first refusal",
            severity: FlagSeverity::Info,
            recommendation: "The company can match competing offers before you accept them, which can slow other deals.",
        },
    ];

    static ref KEY_TERM_PATTERNS: Vec<KeyTermPattern> = vec![
        KeyTermPattern {
            pattern: re(r"compensation\s*[:=]?\s*\$?[\d,]+"),
            term: "Compensation Amount",
            importance: TermImportance::High,
        },
        KeyTermPattern {
            pattern: re(r"term\s*[:=]?\s*(\d+)\s*(year|month|day)"),
            term: "Contract Duration",
            importance: TermImportance::High,
        },
        KeyTermPattern {
            pattern: re(r"effective\s+date\s*[:=]?\s*([a-z]+\s+\d+,?\s*\d*)"),
            term: "Effective Date",
            importance: TermImportance::High,
        },
        KeyTermPattern {
            pattern: re(r"deliverables?\s*[:=]?\s*(.{10,100})"),
            term: "Deliverables",
            importance: TermImportance::Medium,
        },
        KeyTermPattern {
            pattern: re(r"social\s+media\s+posts?\s*[:=]?\s*(\d+)"),
            term: "Social Media Posts Required",
            importance: TermImportance::Medium,
        },
        KeyTermPattern {
            pattern: re(r"notice\s+period\s*[:=]?\s*(\d+\s*days?)"),
            term: "Notice Period",
            importance: TermImportance::Low,
        },
        KeyTermPattern {
            pattern: re(r"payment\s+schedule|paid\s+(monthly|quarterly|annually)"),
            term: "Payment Schedule",
            importance: TermImportance::Low,
        },
    ];
}

/// Indicator matches needed before text is treated as a contract.
const CONTRACT_MATCH_THRESHOLD: usize = 3;

/// Default, dependency-free analyzer implementation.
#[derive(Debug, Default, Clone, Copy)]
pub struct PatternContractAnalyzer;

impl ContractAnalyzer for PatternContractAnalyzer {
    fn is_likely_contract(&self, text: &str) -> ContractCheck {
        let matches = CONTRACT_INDICATORS.iter().filter(|p| p.is_match(text)).count();
        ContractCheck {
            is_contract: matches >= CONTRACT_MATCH_THRESHOLD,
            // 5+ indicator hits saturate confidence.
            confidence: (matches as f64 / 5.0).min(1.0),
        }
    }

    fn analyze(&self, text: &str) -> anyhow::Result<ContractAnalysis> {
        let check = self.is_likely_contract(text);
        if !check.is_contract {
            return Ok(ContractAnalysis {
                is_contract: false,
                confidence: check.confidence,
                red_flags: vec![],
                key_terms: vec![],
                summary: "Text does not appear to be a contract.".into(),
            });
        }

        let red_flags = detect_red_flags(text);
        let key_terms = extract_key_terms(text);
        let summary = summarize(&red_flags, &key_terms);

        Ok(ContractAnalysis {
            is_contract: true,
            confidence: check.confidence,
            red_flags,
            key_terms,
            summary,
        })
    }
}

fn detect_red_flags(text: &str) -> Vec<RedFlag> {
    RED_FLAG_PATTERNS
        .iter()
        .filter_map(|p| {
            p.pattern.find(text).map(|m| RedFlag {
                issue: p.issue.into(),
                severity: p.severity,
                excerpt: excerpt_around(text, m.start(), m.end()),
                recommendation: p.recommendation.into(),
            })
        })
        .collect()
}

fn extract_key_terms(text: &str) -> Vec<KeyTerm> {
    KEY_TERM_PATTERNS
        .iter()
        .filter_map(|p| {
            p.pattern.captures(text).map(|caps| {
                let value = caps
                    .get(1)
                    .or_else(|| caps.get(0))
                    .map(|m| m.as_str().trim().to_string())
                    .unwrap_or_default();
                KeyTerm { term: p.term.into(), value, importance: p.importance }
            })
        })
        .collect()
}

/// Context window around a match, clipped to char boundaries.
fn excerpt_around(text: &str, start: usize, end: usize) -> String {
    let mut from = start.saturating_sub(50);
    while from > 0 && !text.is_char_boundary(from) {
        from -= 1;
    }
    let mut to = (end + 100).min(text.len());
    while to < text.len() && !text.is_char_boundary(to) {
        to += 1;
    }
    format!("...{}...", text[from..to].trim())
}

fn summarize(red_flags: &[RedFlag], key_terms: &[KeyTerm]) -> String {
    let mut parts = Vec::new();

    if let Some(comp) = key_terms.iter().find(|t| t.term == "Compensation Amount") {
        parts.push(format!("Compensation: {}.", comp.value));
    }
    if let Some(duration) = key_terms.iter().find(|t| t.term == "Contract Duration") {
        parts.push(format!("Duration: {}.", duration.value));
    }

    let critical = red_flags.iter().filter(|f| f.severity == FlagSeverity::Critical).count();
    if critical > 0 {
        parts.push(format!("{critical} critical issue(s) require attention."));
    } else if red_flags.is_empty() {
        parts.push("No red flags detected.".into());
    }

    parts.join(" ")
}
