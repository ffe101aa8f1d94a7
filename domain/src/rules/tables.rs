//! Built-in rule tables.
//!
//! Plain data. Tuning a heuristic means editing a table here (or extending it
//! from configuration), never the matching code.

/// Tokens that look like speaker names in chat exports but are artifacts of
/// the export itself: generic role words, delivery receipts, day headers.
pub const SPEAKER_DENYLIST: &[&str] = &[
    // generic roles
    "you", "them", "user", "other", "person",
    // delivery status
    "delivered", "read", "sent", "seen", "typing", "received", "failed",
    // day headers
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday", "today",
    "yesterday",
];

/// Red-flag chip fragments that signal a communication problem.
pub const COMM_ISSUE_KEYWORDS: &[&str] = &["vague", "mixed signals", "excuse", "plan dodge", "maybe"];

/// Definitive betrayal or deception terms.
pub const SMOKING_GUN_KEYWORDS: &[&str] = &[
    "lied",
    "lying",
    "liar",
    "cheat",
    "caught",
    "proof",
    "behind your back",
    "secret",
    "hiding",
    "betray",
    "deceiv",
    "another girl",
    "another guy",
    "someone else",
    "confess",
    "admitted",
];

/// Hedging and avoidance terms.
pub const RED_FLAG_KEYWORDS: &[&str] = &[
    "maybe",
    "busy",
    "later",
    "we'll see",
    "not sure",
    "avoid",
    "excuse",
    "vague",
    "dodge",
    "mixed signal",
    "hot and cold",
    "ghost",
    "breadcrumb",
    "deflect",
    "dismiss",
    "won't commit",
];

/// Affirming and healthy-communication terms.
pub const GREEN_FLAG_KEYWORDS: &[&str] = &[
    "consistent",
    "follow through",
    "followed through",
    "respect",
    "honest",
    "clear",
    "make time",
    "made time",
    "reliable",
    "supportive",
    "genuine",
    "initiat",
    "checks in",
    "apologiz",
    "accountab",
];

/// Recurrence terms.
pub const PATTERN_KEYWORDS: &[&str] = &[
    "again",
    "always",
    "every time",
    "pattern",
    "repeat",
    "keeps",
    "never",
    "cycle",
    "constantly",
    "habit",
    "same thing",
    "over and over",
];

/// Disclaimer attached to readings of free-form narrative input.
pub const NARRATIVE_FRAMING_NOTE: &str =
    "Based on your story. This reading reflects your account of events, not the full conversation.";
