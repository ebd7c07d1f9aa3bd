//! Harm categories for content moderation.

use serde::{Deserialize, Serialize};

/// Harm categories that submitted content can be classified into.
///
/// The set is closed: adding a member means adding its pattern table in
/// [`super::patterns`] as well. "No category" is modeled as
/// `Option<Category>` rather than a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Insults, swearing, and their leetspeak/elongated spellings.
    Profanity,
    /// Telling someone to shut up, go away, or that nobody asked.
    Silencing,
    /// Direct personal attacks and put-downs.
    Bullying,
    /// Mocking or belittling through sarcasm.
    Sarcasm,
    /// Minimizing someone's feelings ("get over it").
    Dismissive,
    /// Self-harm encouragement or wishes of harm.
    Harmful,
    /// Sexually explicit content.
    Sexual,
    /// Sharing of personal or identifying information.
    PersonalInfo,
    /// Repetitive or promotional junk.
    Spam,
}

impl Category {
    /// Returns all categories, in scoring order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Profanity,
            Category::Silencing,
            Category::Bullying,
            Category::Sarcasm,
            Category::Dismissive,
            Category::Harmful,
            Category::Sexual,
            Category::PersonalInfo,
            Category::Spam,
        ]
    }

    /// Severity weight used by the deterministic scorer.
    ///
    /// Weights attach to the category, not to individual patterns.
    pub fn severity(&self) -> u32 {
        match self {
            Category::Harmful => 10,
            Category::Bullying => 5,
            _ => 3,
        }
    }

    /// Lowercase label used in reason strings and on the remote wire.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Profanity => "profanity",
            Category::Silencing => "silencing",
            Category::Bullying => "bullying",
            Category::Sarcasm => "sarcasm",
            Category::Dismissive => "dismissive",
            Category::Harmful => "harmful",
            Category::Sexual => "sexual",
            Category::PersonalInfo => "personal_info",
            Category::Spam => "spam",
        }
    }

    /// Parses a remote classifier label. `"none"` and unknown labels map to
    /// `None` so a sloppy remote answer degrades instead of erroring.
    pub fn from_label(label: &str) -> Option<Category> {
        match label.trim().to_lowercase().as_str() {
            "profanity" => Some(Category::Profanity),
            "silencing" => Some(Category::Silencing),
            "bullying" => Some(Category::Bullying),
            "sarcasm" => Some(Category::Sarcasm),
            "dismissive" => Some(Category::Dismissive),
            "harmful" => Some(Category::Harmful),
            "sexual" => Some(Category::Sexual),
            "personal_info" => Some(Category::PersonalInfo),
            "spam" => Some(Category::Spam),
            _ => None,
        }
    }
}
