//! Dashboard summary projection: counters, gauge score, activity feed.

use cyberintel_client::DashboardStats;

use crate::score::Tone;

/// Gauge score rendered when the stats endpoint is unreachable, so the
/// gauge is never left blank.
pub const FALLBACK_RISK_SCORE: f64 = 35.0;

/// One classified row of the recent-activity feed.
#[derive(Debug, Clone)]
pub struct ActivityRow {
    pub action: String,
    pub time: String,
    pub status: String,
    pub tone: Tone,
}

/// Classify an activity status string into a badge tone.
///
/// First-match-wins, case-insensitive: `phishing`/`found` before `weak`,
/// so a status mentioning both classifies as danger.
#[must_use]
pub fn classify_status(status: &str) -> Tone {
    let status = status.to_lowercase();
    if status.contains("phishing") || status.contains("found") {
        Tone::Danger
    } else if status.contains("weak") {
        Tone::Warning
    } else {
        Tone::Safe
    }
}

/// Aggregate metrics rendered on the dashboard.
#[derive(Debug, Clone)]
pub struct DashboardSummary {
    pub total_scans: u64,
    pub threats_detected: u64,
    /// Swept value of the half-gauge. The gauge keeps its danger palette
    /// regardless of magnitude.
    pub risk_score: f64,
    pub activity: Vec<ActivityRow>,
}

impl DashboardSummary {
    /// Fallback shown when the stats request fails.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            total_scans: 0,
            threats_detected: 0,
            risk_score: FALLBACK_RISK_SCORE,
            activity: Vec::new(),
        }
    }
}

impl From<DashboardStats> for DashboardSummary {
    fn from(stats: DashboardStats) -> Self {
        let activity = stats
            .recent_activity
            .into_iter()
            .map(|entry| ActivityRow {
                tone: classify_status(&entry.status),
                action: entry.action,
                time: entry.time,
                status: entry.status,
            })
            .collect();
        Self {
            total_scans: stats.total_scans,
            threats_detected: stats.threats_detected,
            risk_score: stats.risk_score,
            activity,
        }
    }
}

/// Format a counter with thousands separators (`1234567` → `1,234,567`).
#[must_use]
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use cyberintel_client::ActivityEntry;

    #[test]
    fn classify_is_case_insensitive() {
        assert_eq!(classify_status("Phishing"), Tone::Danger);
        assert_eq!(classify_status("Found 3"), Tone::Danger);
        assert_eq!(classify_status("Weak"), Tone::Warning);
        assert_eq!(classify_status("Safe"), Tone::Safe);
        assert_eq!(classify_status("Just now"), Tone::Safe);
    }

    #[test]
    fn classify_is_first_match_wins() {
        // Danger substrings are checked before warning ones.
        assert_eq!(classify_status("weak phishing attempt"), Tone::Danger);
        assert_eq!(classify_status("Weak, but found in breach"), Tone::Danger);
    }

    #[test]
    fn summary_classifies_activity_rows() {
        let stats = DashboardStats {
            total_scans: 4,
            threats_detected: 17,
            risk_score: 85.0,
            recent_activity: vec![
                ActivityEntry {
                    action: "Password Check".to_string(),
                    time: "2 mins ago".to_string(),
                    status: "Weak".to_string(),
                },
                ActivityEntry {
                    action: "Email Analysis".to_string(),
                    time: "5 mins ago".to_string(),
                    status: "Phishing".to_string(),
                },
            ],
        };
        let summary = DashboardSummary::from(stats);
        assert_eq!(summary.activity[0].tone, Tone::Warning);
        assert_eq!(summary.activity[1].tone, Tone::Danger);
    }

    #[test]
    fn fallback_keeps_the_gauge_renderable() {
        let summary = DashboardSummary::fallback();
        assert!((summary.risk_score - FALLBACK_RISK_SCORE).abs() < f64::EPSILON);
        assert!(summary.activity.is_empty());
    }

    #[test]
    fn format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }
}
