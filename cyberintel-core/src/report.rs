//! Panel view-models projected from API responses.
//!
//! Each projection replaces the panel's previous report wholesale, so a
//! rendered result is always internally consistent with one response.

use cyberintel_client::{BreachCheck, PasswordAnalysis, PhishingAnalysis, UrlAnalysis};

use crate::score::{StrengthBand, Tone};

/// Fixed suggestion substituted when a strong password has no feedback.
pub const STRONG_PASSWORD_PRAISE: &str = "Great job! This password is highly secure.";

/// One evidence row: icon tone, short label, free-text description.
#[derive(Debug, Clone)]
pub struct ReasonEntry {
    pub tone: Tone,
    pub label: String,
    pub desc: String,
}

// ========== URL scanner ==========

/// Rendered projection of a URL analysis.
#[derive(Debug, Clone)]
pub struct UrlReport {
    pub score: f64,
    pub tone: Tone,
    pub verdict: String,
    pub reasons: Vec<ReasonEntry>,
}

impl From<UrlAnalysis> for UrlReport {
    fn from(analysis: UrlAnalysis) -> Self {
        let reasons = analysis
            .reasons
            .into_iter()
            .map(|r| ReasonEntry {
                tone: Tone::from_reason_kind(&r.kind),
                label: r.label,
                desc: r.desc,
            })
            .collect();
        Self {
            score: analysis.risk_score,
            tone: Tone::from_badge_class(&analysis.badge_class),
            verdict: analysis.verdict,
            reasons,
        }
    }
}

// ========== Phishing detector ==========

/// Rendered projection of a phishing-text analysis.
///
/// Evidence entries carry no per-entry severity on the wire; they inherit a
/// neutral tone when the overall badge is safe and warning otherwise.
#[derive(Debug, Clone)]
pub struct PhishingReport {
    pub score: f64,
    pub tone: Tone,
    pub verdict: String,
    pub reasons: Vec<ReasonEntry>,
}

impl From<PhishingAnalysis> for PhishingReport {
    fn from(analysis: PhishingAnalysis) -> Self {
        let tone = Tone::from_badge_class(&analysis.badge_class);
        let entry_tone = if tone == Tone::Safe {
            Tone::Safe
        } else {
            Tone::Warning
        };
        let reasons = analysis
            .reasons
            .into_iter()
            .map(|r| ReasonEntry {
                tone: entry_tone,
                label: r.label,
                desc: r.desc,
            })
            .collect();
        Self {
            score: analysis.probability,
            tone,
            verdict: analysis.verdict,
            reasons,
        }
    }
}

// ========== Password lab ==========

/// Rendered projection of a password analysis.
#[derive(Debug, Clone)]
pub struct PasswordReport {
    /// Raw score; the meter fill is proportional to it.
    pub score: f64,
    pub band: StrengthBand,
    pub crack_time: String,
    pub entropy: f64,
    pub warning: Option<String>,
    pub suggestions: Vec<String>,
}

impl From<PasswordAnalysis> for PasswordReport {
    fn from(analysis: PasswordAnalysis) -> Self {
        let band = StrengthBand::from_score(analysis.score);
        let mut suggestions = analysis.feedback.suggestions;
        if suggestions.is_empty() && analysis.score >= 70.0 {
            suggestions.push(STRONG_PASSWORD_PRAISE.to_string());
        }
        Self {
            score: analysis.score,
            band,
            crack_time: analysis.crack_time,
            entropy: analysis.entropy,
            warning: analysis.feedback.warning,
            suggestions,
        }
    }
}

// ========== Breach checker ==========

/// One breach projected as a card.
#[derive(Debug, Clone)]
pub struct BreachCard {
    pub name: String,
    pub date: String,
    pub description: String,
    /// One tag per compromised-data value, server order.
    pub tags: Vec<String>,
}

/// Rendered projection of a breach lookup.
#[derive(Debug, Clone)]
pub enum BreachReport {
    /// No breaches: banner only, the card list is hidden entirely.
    Safe { message: String },
    /// One card per breach record.
    Compromised {
        message: String,
        cards: Vec<BreachCard>,
    },
}

impl From<BreachCheck> for BreachReport {
    fn from(check: BreachCheck) -> Self {
        if check.status == "safe" {
            return BreachReport::Safe {
                message: check.message,
            };
        }
        let cards = check
            .breaches
            .into_iter()
            .map(|b| BreachCard {
                name: b.breach_name,
                date: b.date,
                description: b.description,
                tags: b.data_compromised,
            })
            .collect();
        BreachReport::Compromised {
            message: check.message,
            cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyberintel_client::{
        BreachRecord, PasswordFeedback, PhishingReason, UrlReason,
    };

    fn url_analysis(badge: &str) -> UrlAnalysis {
        UrlAnalysis {
            risk_score: 72.0,
            badge_class: badge.to_string(),
            verdict: "High Risk".to_string(),
            reasons: vec![
                UrlReason {
                    kind: "danger".to_string(),
                    label: "Suspicious TLD".to_string(),
                    desc: "Uncommon top-level domain".to_string(),
                },
                UrlReason {
                    kind: "safe".to_string(),
                    label: "Valid TLS".to_string(),
                    desc: "Certificate checks out".to_string(),
                },
            ],
        }
    }

    #[test]
    fn url_report_projects_tones_per_reason() {
        let report = UrlReport::from(url_analysis("danger"));
        assert_eq!(report.tone, Tone::Danger);
        assert_eq!(report.reasons[0].tone, Tone::Danger);
        assert_eq!(report.reasons[1].tone, Tone::Safe);
    }

    #[test]
    fn phishing_entries_inherit_warning_tone_when_not_safe() {
        let analysis = PhishingAnalysis {
            probability: 88.0,
            badge_class: "danger".to_string(),
            verdict: "Likely Phishing".to_string(),
            reasons: vec![PhishingReason {
                label: "Urgency language".to_string(),
                desc: "Pressure to act immediately".to_string(),
            }],
        };
        let report = PhishingReport::from(analysis);
        assert_eq!(report.reasons[0].tone, Tone::Warning);
    }

    #[test]
    fn phishing_entries_neutral_when_safe() {
        let analysis = PhishingAnalysis {
            probability: 3.0,
            badge_class: "safe".to_string(),
            verdict: "Looks Clean".to_string(),
            reasons: vec![PhishingReason {
                label: "No urgency cues".to_string(),
                desc: String::new(),
            }],
        };
        let report = PhishingReport::from(analysis);
        assert_eq!(report.reasons[0].tone, Tone::Safe);
    }

    fn password_analysis(score: f64, suggestions: Vec<String>) -> PasswordAnalysis {
        PasswordAnalysis {
            score,
            crack_time: "3 days".to_string(),
            entropy: 42.0,
            feedback: PasswordFeedback {
                warning: None,
                suggestions,
            },
        }
    }

    #[test]
    fn strong_password_without_suggestions_gets_praise() {
        let report = PasswordReport::from(password_analysis(85.0, vec![]));
        assert_eq!(report.suggestions, vec![STRONG_PASSWORD_PRAISE.to_string()]);
    }

    #[test]
    fn weak_password_without_suggestions_gets_none() {
        let report = PasswordReport::from(password_analysis(20.0, vec![]));
        assert!(report.suggestions.is_empty());
        assert_eq!(report.band, StrengthBand::Weak);
    }

    #[test]
    fn server_suggestions_are_never_replaced() {
        let report = PasswordReport::from(password_analysis(
            90.0,
            vec!["Add a passphrase".to_string()],
        ));
        assert_eq!(report.suggestions, vec!["Add a passphrase".to_string()]);
    }

    #[test]
    fn safe_breach_check_hides_cards() {
        let check = BreachCheck {
            status: "safe".to_string(),
            message: "No breaches found".to_string(),
            breaches: vec![],
        };
        let report = BreachReport::from(check);
        assert!(matches!(
            report,
            BreachReport::Safe { message } if message == "No breaches found"
        ));
    }

    #[test]
    fn compromised_breach_check_renders_one_card_per_record() {
        let check = BreachCheck {
            status: "breached".to_string(),
            message: "Found in 1 breach".to_string(),
            breaches: vec![BreachRecord {
                breach_name: "MegaCorp 2021".to_string(),
                date: "2021-06-12".to_string(),
                description: "Credential stuffing incident".to_string(),
                data_compromised: vec!["Emails".to_string(), "Passwords".to_string()],
            }],
        };
        let BreachReport::Compromised { cards, .. } = BreachReport::from(check) else {
            panic!("expected compromised report");
        };
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].name, "MegaCorp 2021");
        assert_eq!(cards[0].tags, vec!["Emails", "Passwords"]);
    }
}
