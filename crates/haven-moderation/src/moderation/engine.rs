//! Moderation facade and strategy selection.

use std::env;

use async_trait::async_trait;

use super::remote::{RemoteClassifier, RemoteClassifierConfig};
use super::scorer::PatternScorer;
use super::Decision;

/// Rejection text for a blocked nickname. The nickname's own reason string
/// would echo the nickname back, so submission flows show this instead.
pub const NICKNAME_REJECTION: &str = "Please choose a kinder nickname";

/// A moderation strategy: one capability, `moderate(text) -> Decision`.
///
/// Every implementation always produces a decision; none may error or
/// block the caller indefinitely.
#[async_trait]
pub trait ModerationStrategy: Send + Sync {
    /// Moderates the given text.
    async fn moderate(&self, text: &str) -> Decision;

    /// Strategy name for logging.
    fn name(&self) -> &'static str;
}

#[async_trait]
impl ModerationStrategy for PatternScorer {
    async fn moderate(&self, text: &str) -> Decision {
        self.decide(text)
    }

    fn name(&self) -> &'static str {
        "pattern"
    }
}

#[async_trait]
impl ModerationStrategy for RemoteClassifier {
    async fn moderate(&self, text: &str) -> Decision {
        self.classify(text).await
    }

    fn name(&self) -> &'static str {
        "remote"
    }
}

/// Which strategy backs the facade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Deterministic pattern-and-severity scoring (the default).
    #[default]
    Pattern,
    /// Delegation to the remote classification service.
    Remote,
}

/// Configuration for building a [`Moderator`].
#[derive(Debug, Clone, Default)]
pub struct ModerationConfig {
    /// Selected strategy.
    pub strategy: Strategy,
    /// Remote classifier settings, used when `strategy` is `Remote`.
    pub remote: RemoteClassifierConfig,
}

impl ModerationConfig {
    /// Reads configuration from the environment.
    ///
    /// `HAVEN_MODERATION_STRATEGY=remote` selects the remote classifier;
    /// anything else (or unset) selects pattern scoring.
    pub fn from_env() -> Self {
        let strategy = match env::var("HAVEN_MODERATION_STRATEGY").as_deref() {
            Ok("remote") => Strategy::Remote,
            _ => Strategy::Pattern,
        };
        Self {
            strategy,
            remote: RemoteClassifierConfig::from_env(),
        }
    }
}

/// Both decisions for one submission. Content and nickname are moderated
/// independently; neither result influences the other.
#[derive(Debug, Clone)]
pub struct SubmissionCheck {
    /// Decision for the submission body.
    pub content: Decision,
    /// Decision for the display nickname.
    pub nickname: Decision,
}

impl SubmissionCheck {
    /// True only when both checks passed.
    pub fn is_allowed(&self) -> bool {
        self.content.is_allowed && self.nickname.is_allowed
    }

    /// Message to show the submitter when the submission is rejected.
    /// Content problems take precedence over nickname problems.
    pub fn rejection_message(&self) -> Option<&str> {
        if !self.content.is_allowed {
            return Some(
                self.content
                    .reason
                    .as_deref()
                    .unwrap_or(super::policy::KINDNESS_REMINDER),
            );
        }
        if !self.nickname.is_allowed {
            return Some(NICKNAME_REJECTION);
        }
        None
    }
}

/// Single moderation entry point, used identically by the post and reply
/// submission flows and by the pass-through moderation endpoint.
pub struct Moderator {
    strategy: Box<dyn ModerationStrategy>,
}

impl Moderator {
    /// Builds a moderator from configuration.
    pub fn from_config(config: ModerationConfig) -> Self {
        let strategy: Box<dyn ModerationStrategy> = match config.strategy {
            Strategy::Pattern => Box::new(PatternScorer::new()),
            Strategy::Remote => Box::new(RemoteClassifier::new(config.remote)),
        };
        Self { strategy }
    }

    /// Builds a moderator from the environment.
    pub fn from_env() -> Self {
        Self::from_config(ModerationConfig::from_env())
    }

    /// Builds a deterministic pattern-scoring moderator.
    pub fn pattern() -> Self {
        Self::from_config(ModerationConfig::default())
    }

    /// Builds a remote-classifier moderator.
    pub fn remote(config: RemoteClassifierConfig) -> Self {
        Self::from_config(ModerationConfig {
            strategy: Strategy::Remote,
            remote: config,
        })
    }

    /// Name of the backing strategy.
    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// Moderates one piece of text, always producing a decision.
    pub async fn moderate(&self, text: &str) -> Decision {
        self.strategy.moderate(text).await
    }

    /// Moderates a submission body and its optional nickname concurrently.
    ///
    /// The two checks are fully independent: a blocked nickname never
    /// blocks an otherwise-allowed body and vice versa. A missing nickname
    /// is trivially allowed.
    pub async fn check_submission(&self, content: &str, nickname: Option<&str>) -> SubmissionCheck {
        let (content, nickname) = tokio::join!(
            self.moderate(content),
            self.moderate(nickname.unwrap_or_default()),
        );
        SubmissionCheck { content, nickname }
    }
}

impl Default for Moderator {
    fn default() -> Self {
        Self::pattern()
    }
}
