//! The moderation decision engine.
//!
//! Every post, reply, and nickname passes through here before anything is
//! written to storage. Two interchangeable strategies back the single
//! `moderate(text) -> Decision` capability: a deterministic
//! pattern-and-severity scorer and a remote LLM classifier with a strict
//! verdict contract and a fail-open fallback.

mod category;
mod decision;
mod engine;
pub mod patterns;
pub mod policy;
pub mod remote;
pub mod scorer;

pub use category::Category;
pub use decision::Decision;
pub use engine::{
    ModerationConfig, ModerationStrategy, Moderator, Strategy, SubmissionCheck,
    NICKNAME_REJECTION,
};
pub use patterns::PatternLibrary;
pub use remote::{RemoteClassifier, RemoteClassifierConfig, FAIL_OPEN_CONFIDENCE};
pub use scorer::{PatternScorer, ScoreReport};
