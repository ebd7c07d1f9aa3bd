//! Decision policy: converts a score report into a publish/block decision.

use super::scorer::ScoreReport;
use super::Decision;

/// Harm score at which content is blocked. One match in any category is
/// enough, since the lowest severity is 3.
pub const BLOCK_THRESHOLD: u32 = 3;

/// Shown when content is blocked but no representative match was captured.
pub const KINDNESS_REMINDER: &str = "Let's keep this space kind and supportive! 💙";

/// Applies the blocking policy to a score report.
///
/// Blocked: confidence is `harm_score / 10`, capped at 1. Allowed:
/// confidence is `1 - net_score / 20`, clamped to [0, 1] — supportive
/// messages push the raw value above 1 before the clamp.
pub fn decide(report: &ScoreReport) -> Decision {
    if report.harm_score >= BLOCK_THRESHOLD {
        let reason = match (&report.best_category, &report.sample_match) {
            (Some(category), Some(sample)) => {
                format!("Detected {} language: \"{}\"", category.label(), sample)
            }
            _ => KINDNESS_REMINDER.to_string(),
        };
        let confidence = (report.harm_score as f32 / 10.0).min(1.0);
        return Decision::blocked(report.best_category, reason, confidence);
    }

    let confidence = 1.0 - (report.net_score() as f32 / 20.0);
    Decision::allowed(confidence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moderation::Category;

    fn report(harm: u32, support: u32) -> ScoreReport {
        ScoreReport {
            harm_score: harm,
            support_score: support,
            best_category: None,
            sample_match: None,
        }
    }

    #[test]
    fn blocks_at_threshold() {
        assert!(!decide(&report(3, 0)).is_allowed);
        assert!(decide(&report(2, 0)).is_allowed);
        assert!(decide(&report(0, 0)).is_allowed);
    }

    #[test]
    fn support_never_unblocks_a_harm_hit() {
        // Severity alone satisfies the threshold; support only shapes
        // allow-confidence.
        let blocked = decide(&report(10, 40));
        assert!(!blocked.is_allowed);
        assert_eq!(blocked.confidence, 1.0);
    }

    #[test]
    fn block_confidence_scales_with_harm() {
        assert_eq!(decide(&report(8, 0)).confidence, 0.8);
        assert_eq!(decide(&report(25, 0)).confidence, 1.0);
    }

    #[test]
    fn block_reason_quotes_sample_match() {
        let d = decide(&ScoreReport {
            harm_score: 8,
            support_score: 0,
            best_category: Some(Category::Bullying),
            sample_match: Some("worthless".to_string()),
        });
        assert_eq!(
            d.reason.as_deref(),
            Some("Detected bullying language: \"worthless\"")
        );
        assert_eq!(d.category, Some(Category::Bullying));
    }

    #[test]
    fn block_without_sample_uses_kindness_reminder() {
        let d = decide(&report(5, 0));
        assert_eq!(d.reason.as_deref(), Some(KINDNESS_REMINDER));
    }

    #[test]
    fn allow_confidence_is_clamped() {
        // Net score -10 gives a raw confidence of 1.5.
        let d = decide(&report(0, 10));
        assert!(d.is_allowed);
        assert_eq!(d.confidence, 1.0);

        let d = decide(&report(0, 0));
        assert_eq!(d.confidence, 1.0);

        // Harm 2 is under the threshold; confidence dips below 1.
        let d = decide(&report(2, 0));
        assert!(d.is_allowed);
        assert!((d.confidence - 0.9).abs() < f32::EPSILON);
    }

    #[test]
    fn allowed_decisions_carry_no_category_or_reason() {
        let d = decide(&report(0, 4));
        assert_eq!(d.category, None);
        assert_eq!(d.reason, None);
    }
}
