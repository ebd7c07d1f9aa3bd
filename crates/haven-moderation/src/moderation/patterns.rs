//! Static pattern library backing the deterministic scorer.
//!
//! Harm signatures are grouped per category; supportive signatures form a
//! separate unweighted set. All tables are compiled once and never mutated
//! at run time. Coverage changes are data changes here, not behavior
//! changes elsewhere.

use regex::{Regex, RegexSet};

use super::Category;

/// Compiled matchers for one harm category.
pub(crate) struct CategorySignatures {
    pub(crate) category: Category,
    /// Fast multi-pattern pre-check.
    pub(crate) regex_set: RegexSet,
    /// Individual regexes for counting occurrences and extracting matches.
    pub(crate) regexes: Vec<Regex>,
}

/// The full pattern library: nine harm tables plus the supportive set.
///
/// Patterns are written lowercase and matched against lowercased input, so
/// matching is case-insensitive. Every occurrence in a message counts, not
/// just the first.
pub struct PatternLibrary {
    pub(crate) harm: Vec<CategorySignatures>,
    pub(crate) support_set: RegexSet,
    pub(crate) support: Vec<Regex>,
}

impl PatternLibrary {
    /// Builds the default library.
    pub fn new() -> Self {
        let harm = vec![
            Self::build_profanity(),
            Self::build_silencing(),
            Self::build_bullying(),
            Self::build_sarcasm(),
            Self::build_dismissive(),
            Self::build_harmful(),
            Self::build_sexual(),
            Self::build_personal_info(),
            Self::build_spam(),
        ];
        let (support_set, support) = Self::build_supportive();
        Self {
            harm,
            support_set,
            support,
        }
    }

    fn build_profanity() -> CategorySignatures {
        // Includes leetspeak and elongated spellings (st0pid, dum+b, a+ss).
        let patterns = vec![
            r"\b(stupid|fuck|dumb|idiot|moron|loser|jerk|fool)\b",
            r"\b(suck|sucks|sucked|sucking)\b",
            r"\b(freak|weirdo|psycho|crazy|lame)\b",
            r"\b(ugly|fat|skinny|gross|disgusting)\b",
            r"\b(hate\s*(you|u)|hate\s+your)\b",
            r"\b(stfu|stink|smelly|eww+)\b",
            r"\b(wtf|wth|omfg|lmfao|af|asf|gtfo|ffs|bs|fu)\b",
            r"\b(a+ss|a+hole|b+tch|d+mn|d+ck|sh+t|f+ck|cr+p|h+ll)\b",
            r"\b(st[0o]pid|dum+b|id[i1]ot|l[o0]ser)\b",
        ];
        Self::build_signatures(Category::Profanity, &patterns)
    }

    fn build_silencing() -> CategorySignatures {
        let patterns = vec![
            r"\b(shut\s*(up|it|your\s*(mouth|face|trap)))\b",
            r"\b(be\s+quiet|zip\s+it|nobody\s+asked)\b",
            r"\b(go\s+away|leave\s+(me\s+)?alone|get\s+(out|lost|away))\b",
            r"\b(don'?t\s+care|who\s+cares|no\s*one\s+cares?)\b",
            r"\b(stop\s+(talking|posting|crying|whining))\b",
        ];
        Self::build_signatures(Category::Silencing, &patterns)
    }

    fn build_bullying() -> CategorySignatures {
        let patterns = vec![
            r"\b(nobody\s*(likes?|loves?|wants?)\s*(you|u))\b",
            r"\b(you('re|\s+are)\s+(pathetic|worthless|useless|terrible|awful|annoying|boring))\b",
            r"\b(worthless|pathetic|useless)\b",
            r"\b(cry\s*baby|wimp|coward|chicken)\b",
            r"\b(your\s+fault|blame\s+(you|u))\b",
            r"\b(you\s+(deserve|asked\s+for)\s+(it|this))\b",
            r"\b(loser|failure|waste\s+of)\b",
        ];
        Self::build_signatures(Category::Bullying, &patterns)
    }

    fn build_sarcasm() -> CategorySignatures {
        let patterns = vec![
            r"\b(oh\s+wow|yeah\s+right|sure\s+buddy|whatever|big\s+deal)\b",
            r"\b(boo\s*hoo|poor\s+(you|baby)|so\s+sad|cry\s+more)\b",
            r"\b(like\s+(i|anyone)\s+cares?|as\s+if)\b",
            r"\b(lol|lmao|haha|rofl)\s*(loser|stupid|dumb|idiot)",
            r"\b(good\s+for\s+you|wow\s+so\s+(cool|brave|special))\b",
            r"🙄|😒|💅|🤡",
        ];
        Self::build_signatures(Category::Sarcasm, &patterns)
    }

    fn build_dismissive() -> CategorySignatures {
        let patterns = vec![
            r"\b(get\s+over\s+it|move\s+on|just\s+stop|deal\s+with\s+it)\b",
            r"\b(not\s+(a\s+)?(big\s+)?deal|doesn'?t\s+matter)\b",
            r"\b(you('re|\s+are)\s+overreacting|too\s+sensitive)\b",
            r"\b(drama\s*queen|attention\s*(seek|want))",
            r"\b(grow\s+up|act\s+your\s+age|be\s+mature)\b",
        ];
        Self::build_signatures(Category::Dismissive, &patterns)
    }

    fn build_harmful() -> CategorySignatures {
        let patterns = vec![
            r"\b(kill|hurt|harm|cut|bleed|amputate)\s*(your)?self\b",
            r"\b(you\s+should(n'?t)?\s+(exist|die|disappear|leave))\b",
            r"\b(end\s+it|give\s+up|kys)\b",
            r"\b(world.*(better|without)\s*(you|u))\b",
        ];
        Self::build_signatures(Category::Harmful, &patterns)
    }

    fn build_sexual() -> CategorySignatures {
        let patterns = vec![
            r"\b(porn|nudes?|horny|sexting)\b",
            r"\b(send\s+(me\s+)?(nudes?|pics?\s+of\s+you))\b",
            r"\b(s[e3]xy?|n[u0]des?)\b",
        ];
        Self::build_signatures(Category::Sexual, &patterns)
    }

    fn build_personal_info() -> CategorySignatures {
        let patterns = vec![
            r"\b(what('s|\s+is)\s+your\s+(address|phone|number|school|real\s+name))\b",
            r"\b(tell\s+me\s+your\s+(address|phone|school|real\s+name))\b",
            r"\b(home\s+address|phone\s+number|full\s+name)\b",
            r"\b\d{3}[-.\s]?\d{3}[-.\s]?\d{4}\b",
            r"[a-z0-9._%+-]+@[a-z0-9.-]+\.[a-z]{2,}",
        ];
        Self::build_signatures(Category::PersonalInfo, &patterns)
    }

    fn build_spam() -> CategorySignatures {
        let patterns = vec![
            r"\b(click\s+(here|this\s+link)|free\s+(money|robux|v-?bucks|gift\s+cards?))\b",
            r"\b(subscribe\s+to\s+my|follow\s+me\s+on|check\s+out\s+my\s+channel)\b",
            r"\b(buy\s+now|limited\s+time\s+offer|dm\s+me\s+to\s+win)\b",
        ];
        Self::build_signatures(Category::Spam, &patterns)
    }

    fn build_supportive() -> (RegexSet, Vec<Regex>) {
        let patterns = vec![
            r"\b(sorry|understand|here\s+for\s+you|support|help|care|love)\b",
            r"\b(you('re|\s+are)\s+(not\s+alone|brave|strong|amazing|loved))\b",
            r"\b(it('ll|\s+will)\s+(be|get)\s+(okay|better))\b",
            r"\b(sending\s+(hugs?|love)|virtual\s+hug)\b",
            r"❤️|💙|💚|💜|🤗|😊|💪|🫂",
        ];
        let set = RegexSet::new(&patterns).expect("invalid supportive patterns");
        let regexes = patterns
            .iter()
            .map(|p| Regex::new(p).expect("invalid supportive pattern"))
            .collect();
        (set, regexes)
    }

    fn build_signatures(category: Category, patterns: &[&str]) -> CategorySignatures {
        let regex_set = RegexSet::new(patterns).expect("invalid harm patterns");
        let regexes = patterns
            .iter()
            .map(|p| Regex::new(p).expect("invalid harm pattern"))
            .collect();

        CategorySignatures {
            category,
            regex_set,
            regexes,
        }
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::new()
    }
}
