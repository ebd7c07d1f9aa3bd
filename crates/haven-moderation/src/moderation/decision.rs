//! The engine's sole output type.

use serde::{Deserialize, Serialize};

use super::Category;

/// Outcome of moderating one piece of text.
///
/// A `Decision` is computed fresh per call and never cached or persisted.
/// Field names serialize in camelCase (`isAllowed`) so the HTTP layer can
/// pass the value through to clients verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Decision {
    /// Whether the text may be published.
    pub is_allowed: bool,
    /// Best-matching harm category, present only when one was named.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub category: Option<Category>,
    /// Human-readable explanation shown to the submitter.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub reason: Option<String>,
    /// Confidence in the decision, always within [0, 1].
    pub confidence: f32,
}

impl Decision {
    /// Creates an allow decision with no category or reason.
    pub fn allowed(confidence: f32) -> Self {
        Self {
            is_allowed: true,
            category: None,
            reason: None,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    /// Creates a block decision.
    pub fn blocked(category: Option<Category>, reason: impl Into<String>, confidence: f32) -> Self {
        Self {
            is_allowed: false,
            category,
            reason: Some(reason.into()),
            confidence: confidence.clamp(0.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allowed_clamps_confidence() {
        assert_eq!(Decision::allowed(1.3).confidence, 1.0);
        assert_eq!(Decision::allowed(-0.2).confidence, 0.0);
        assert_eq!(Decision::allowed(0.5).confidence, 0.5);
    }

    #[test]
    fn blocked_carries_reason_and_category() {
        let d = Decision::blocked(Some(Category::Bullying), "be kind", 0.8);
        assert!(!d.is_allowed);
        assert_eq!(d.category, Some(Category::Bullying));
        assert_eq!(d.reason.as_deref(), Some("be kind"));
    }

    #[test]
    fn serializes_camel_case_and_skips_absent_fields() {
        let json = serde_json::to_string(&Decision::allowed(1.0)).unwrap();
        assert_eq!(json, "{\"isAllowed\":true,\"confidence\":1.0}");

        let json =
            serde_json::to_string(&Decision::blocked(Some(Category::Spam), "r", 0.3)).unwrap();
        assert!(json.contains("\"isAllowed\":false"));
        assert!(json.contains("\"category\":\"spam\""));
        assert!(json.contains("\"reason\":\"r\""));
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let d: Decision = serde_json::from_str("{\"isAllowed\":true,\"confidence\":0.5}").unwrap();
        assert!(d.is_allowed);
        assert_eq!(d.category, None);
        assert_eq!(d.reason, None);
    }
}
