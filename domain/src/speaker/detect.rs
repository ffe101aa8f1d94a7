//! Speaker name extraction.
//!
//! Recognised line shapes, tried in this order:
//!
//! | Shape | Example |
//! |-------|---------|
//! | `Name: text` | `Jordan: running late` |
//! | `Name (timestamp): text` | `Jordan (10:32 PM): running late` |
//!
//! Multi-line text is matched line by line. Single-line text (a flattened
//! chat export) is scanned globally for single-token names instead.

use super::candidate::SpeakerCandidate;
use crate::core::text::truncate_chars;
use crate::core::text::MAX_SCAN_CHARS;
use crate::rules::SpeakerRules;
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

/// Maximum number of candidates returned
pub const MAX_CANDIDATES: usize = 2;

/// The literal that always identifies the user
pub const SELF_MARKER: &str = "Me";

const MIN_NAME_CHARS: usize = 2;
const MAX_NAME_CHARS: usize = 30;

pub(crate) struct SpeakerPatterns {
    line_colon: Regex,
    line_timestamp: Regex,
    global_colon: Regex,
    global_timestamp: Regex,
    timestamp_fragment: Regex,
}

static PATTERNS: LazyLock<Result<SpeakerPatterns, regex::Error>> = LazyLock::new(|| {
    Ok(SpeakerPatterns {
        line_colon: Regex::new(r"^\s*(\p{L}[\p{L} '’\-]*?)\s*:\s+(\S.*)$")?,
        line_timestamp: Regex::new(
            r"^\s*(\p{L}[\p{L} '’\-]*?)\s*[\(\[][^\)\]]*[\)\]]\s*:\s+(\S.*)$",
        )?,
        global_colon: Regex::new(r"(?:^|\s)(\p{L}[\p{L}'’\-]*)\s*:\s")?,
        global_timestamp: Regex::new(r"(?:^|\s)(\p{L}[\p{L}'’\-]*)\s*[\(\[][^\)\]]*[\)\]]\s*:\s")?,
        timestamp_fragment: Regex::new(r"^\d+[:.\-]\d+")?,
    })
});

/// Compiled patterns, or `None` (with a diagnostic) if they failed to build.
pub(crate) fn patterns() -> Option<&'static SpeakerPatterns> {
    match &*PATTERNS {
        Ok(p) => Some(p),
        Err(e) => {
            warn!("Speaker patterns unavailable: {}", e);
            None
        }
    }
}

/// A `Name: message` split of a single line.
pub(crate) struct PrefixedLine<'a> {
    pub name: &'a str,
    pub message: &'a str,
}

/// A name found by the single-line scan.
pub(crate) struct GlobalMatch<'a> {
    pub name: &'a str,
    /// Byte offset where the name starts
    pub start: usize,
    /// Byte offset just past the `:` and its trailing whitespace
    pub end: usize,
}

impl SpeakerPatterns {
    pub(crate) fn split_line<'a>(&self, line: &'a str) -> Option<PrefixedLine<'a>> {
        let caps = self
            .line_colon
            .captures(line)
            .or_else(|| self.line_timestamp.captures(line))?;
        let name = caps.get(1)?.as_str().trim();
        let message = caps.get(2)?.as_str().trim_end();
        Some(PrefixedLine { name, message })
    }

    pub(crate) fn global_matches<'a>(&self, text: &'a str) -> Vec<GlobalMatch<'a>> {
        let mut found: Vec<GlobalMatch<'a>> = self
            .global_colon
            .captures_iter(text)
            .chain(self.global_timestamp.captures_iter(text))
            .filter_map(|caps| {
                let name = caps.get(1)?;
                let whole = caps.get(0)?;
                Some(GlobalMatch {
                    name: name.as_str(),
                    start: name.start(),
                    end: whole.end(),
                })
            })
            .collect();
        found.sort_by_key(|m| m.start);
        found
    }

    fn is_plausible_name(&self, name: &str, rules: &SpeakerRules) -> bool {
        let chars = name.chars().count();
        if !(MIN_NAME_CHARS..=MAX_NAME_CHARS).contains(&chars) {
            return false;
        }
        if name.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }
        if self.timestamp_fragment.is_match(name) {
            return false;
        }
        !rules.is_denied(name)
    }
}

/// Extract up to two speaker candidates using the built-in denylist.
///
/// # Example
///
/// ```
/// use chatlens_domain::speaker::identify_speakers;
///
/// let names: Vec<_> = identify_speakers("Jordan: hey\nMe: hi")
///     .into_iter()
///     .map(|c| c.name)
///     .collect();
/// assert_eq!(names, vec!["Me", "Jordan"]);
/// ```
pub fn identify_speakers(text: &str) -> Vec<SpeakerCandidate> {
    identify_speakers_with(text, &SpeakerRules::default())
}

/// Extract up to two speaker candidates using the given rules.
///
/// Deterministic: the same text and rules always produce the same list in
/// the same order. Never fails; returns an empty list when nothing
/// plausible is found.
pub fn identify_speakers_with(text: &str, rules: &SpeakerRules) -> Vec<SpeakerCandidate> {
    let Some(patterns) = patterns() else {
        return Vec::new();
    };
    let text = truncate_chars(text, MAX_SCAN_CHARS);

    let raw: Vec<SpeakerCandidate> = if text.contains('\n') {
        text.lines()
            .enumerate()
            .filter_map(|(index, line)| {
                let prefixed = patterns.split_line(line)?;
                patterns
                    .is_plausible_name(prefixed.name, rules)
                    .then(|| SpeakerCandidate::explicit(prefixed.name, index))
            })
            .collect()
    } else {
        patterns
            .global_matches(text)
            .into_iter()
            .filter(|m| patterns.is_plausible_name(m.name, rules))
            .map(|m| SpeakerCandidate::inferred(m.name))
            .collect()
    };

    let mut candidates: Vec<SpeakerCandidate> = Vec::with_capacity(MAX_CANDIDATES);
    for candidate in raw {
        if candidates.len() == MAX_CANDIDATES {
            break;
        }
        if !candidates.iter().any(|c| c.name == candidate.name) {
            candidates.push(candidate);
        }
    }

    if let Some(pos) = candidates.iter().position(|c| c.name == SELF_MARKER)
        && pos > 0
    {
        let me = candidates.remove(pos);
        candidates.insert(0, me);
    }

    debug!(
        "Identified {} speaker candidate(s): {:?}",
        candidates.len(),
        candidates.iter().map(|c| c.name.as_str()).collect::<Vec<_>>()
    );
    candidates
}
