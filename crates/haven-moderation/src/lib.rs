//! Haven Moderation - the content moderation decision engine.
//!
//! Given a short piece of user-submitted text, decide whether it may be
//! published; if not, surface a harm category, a human-readable reason, and
//! a bounded confidence score. The engine never errors: every entry point
//! produces a [`Decision`].
//!
//! # Example
//!
//! ```
//! use haven_moderation::Moderator;
//!
//! # tokio_test::block_on(async {
//! let moderator = Moderator::pattern();
//! let decision = moderator.moderate("you are so stupid and worthless").await;
//! assert!(!decision.is_allowed);
//! # });
//! ```

pub mod error;
pub mod moderation;

pub use error::RemoteError;
pub use moderation::{
    Category, Decision, ModerationConfig, ModerationStrategy, Moderator, PatternScorer,
    RemoteClassifier, RemoteClassifierConfig, ScoreReport, Strategy, SubmissionCheck,
};
