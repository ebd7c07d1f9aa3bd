//! Deterministic pattern-and-severity scorer.

use super::patterns::PatternLibrary;
use super::{policy, Category, Decision};

/// Raw scoring output, before the decision policy is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreReport {
    /// Sum of `match count x category severity` across all harm tables.
    pub harm_score: u32,
    /// Total supportive match count times two.
    pub support_score: u32,
    /// Harm category with the highest severity among those that matched.
    /// Ties keep the earliest-scored category.
    pub best_category: Option<Category>,
    /// One representative matched substring from the best category,
    /// quoted in the rejection reason.
    pub sample_match: Option<String>,
}

impl ScoreReport {
    /// Harm score offset by support, used for allow-confidence. Signed:
    /// heavily supportive messages go negative.
    pub fn net_score(&self) -> i64 {
        i64::from(self.harm_score) - i64::from(self.support_score)
    }
}

/// Scores text against the static pattern library.
///
/// Pure and synchronous: no shared mutable state, safe to call from any
/// number of threads at once.
pub struct PatternScorer {
    library: PatternLibrary,
}

impl PatternScorer {
    /// Creates a scorer over the default pattern library.
    pub fn new() -> Self {
        Self {
            library: PatternLibrary::new(),
        }
    }

    /// Scores the given text.
    ///
    /// Matching is case-insensitive and counts every occurrence, so a
    /// message that repeats an insult accumulates severity per repetition.
    pub fn score(&self, text: &str) -> ScoreReport {
        let text_lower = text.to_lowercase();

        let mut support_score = 0u32;
        if self.library.support_set.is_match(&text_lower) {
            for regex in &self.library.support {
                support_score += regex.find_iter(&text_lower).count() as u32 * 2;
            }
        }

        let mut harm_score = 0u32;
        let mut best_category: Option<Category> = None;
        let mut sample_match: Option<String> = None;

        for signatures in &self.library.harm {
            if !signatures.regex_set.is_match(&text_lower) {
                continue;
            }
            let severity = signatures.category.severity();
            for regex in &signatures.regexes {
                let mut matches = regex.find_iter(&text_lower).peekable();
                let first = match matches.peek() {
                    Some(m) => m.as_str().to_string(),
                    None => continue,
                };
                harm_score += matches.count() as u32 * severity;

                // Highest severity wins; the first-scored category keeps
                // ties.
                let current_best = best_category.map(|c| c.severity()).unwrap_or(0);
                if severity > current_best {
                    best_category = Some(signatures.category);
                    sample_match = Some(first);
                }
            }
        }

        ScoreReport {
            harm_score,
            support_score,
            best_category,
            sample_match,
        }
    }

    /// Scores the text and applies the decision policy in one step.
    pub fn decide(&self, text: &str) -> Decision {
        policy::decide(&self.score(text))
    }
}

impl Default for PatternScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> PatternScorer {
        PatternScorer::new()
    }

    #[test]
    fn clean_text_scores_zero() {
        let report = scorer().score("I had a pretty good day at the park");
        assert_eq!(report.harm_score, 0);
        assert_eq!(report.support_score, 0);
        assert_eq!(report.best_category, None);
        assert_eq!(report.sample_match, None);
    }

    #[test]
    fn single_profanity_match_scores_severity() {
        let report = scorer().score("that is so stupid");
        assert_eq!(report.harm_score, 3);
        assert_eq!(report.best_category, Some(Category::Profanity));
        assert_eq!(report.sample_match.as_deref(), Some("stupid"));
    }

    #[test]
    fn repeated_phrase_counts_per_occurrence() {
        let report = scorer().score("stupid stupid stupid");
        assert_eq!(report.harm_score, 9);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let report = scorer().score("YOU ARE WORTHLESS");
        assert!(report.harm_score >= 5);
        assert_eq!(report.best_category, Some(Category::Bullying));
    }

    #[test]
    fn higher_severity_category_wins_best() {
        // "stupid" (profanity, 3) appears before "worthless" (bullying, 5)
        // yet bullying is recorded as the best category.
        let report = scorer().score("you are so stupid and worthless");
        assert!(report.harm_score >= 8);
        assert_eq!(report.best_category, Some(Category::Bullying));
        assert_eq!(report.sample_match.as_deref(), Some("worthless"));
    }

    #[test]
    fn harmful_category_outranks_bullying() {
        let report = scorer().score("you are worthless, just give up");
        assert_eq!(report.best_category, Some(Category::Harmful));
        assert_eq!(report.sample_match.as_deref(), Some("give up"));
    }

    #[test]
    fn equal_severity_keeps_first_scored_category() {
        // All categories here weigh 3; the earlier-scored one wins the tie:
        // silencing beats sarcasm, profanity beats silencing.
        let report = scorer().score("ugh, whatever. go away");
        assert_eq!(report.best_category, Some(Category::Silencing));
        let report = scorer().score("you stink, go away");
        assert_eq!(report.best_category, Some(Category::Profanity));
    }

    #[test]
    fn underscore_joined_words_do_not_match() {
        // Word boundaries treat `_` as a word character, so insults fused
        // into a handle like "big_l0ser" slip past the tables. Separated
        // forms still match.
        let report = scorer().score("big_l0ser");
        assert_eq!(report.harm_score, 0);
        let report = scorer().score("big l0ser");
        assert!(report.harm_score >= 3);
        assert_eq!(report.best_category, Some(Category::Profanity));
    }

    #[test]
    fn supportive_matches_score_double() {
        let report = scorer().score("sending you a virtual hug, you are not alone ❤️");
        assert_eq!(report.harm_score, 0);
        assert!(report.support_score >= 6);
        assert!(report.net_score() < 0);
    }

    #[test]
    fn leetspeak_variants_are_caught() {
        let report = scorer().score("ur such an id1ot");
        assert!(report.harm_score >= 3);
        assert_eq!(report.best_category, Some(Category::Profanity));
    }

    #[test]
    fn personal_info_phone_number_is_caught() {
        let report = scorer().score("call me at 555-867-5309");
        assert_eq!(report.best_category, Some(Category::PersonalInfo));
        assert!(report.harm_score >= 3);
    }

    #[test]
    fn scoring_is_idempotent() {
        let s = scorer();
        let text = "you are worthless and nobody likes you 🙄";
        assert_eq!(s.score(text), s.score(text));
        assert_eq!(s.decide(text), s.decide(text));
    }
}
