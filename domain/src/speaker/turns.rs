//! Turn attribution: split conversation text into speaker turns.

use super::detect::{GlobalMatch, patterns};
use super::roles::SpeakerAssignment;
use crate::core::text::{MAX_SCAN_CHARS, truncate_chars};
use serde::{Deserialize, Serialize};

/// Who a turn belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TurnRole {
    SelfSpeaker,
    Other,
    /// No prefix, or a prefix naming neither assigned speaker
    Unattributed,
}

/// One message (possibly spanning several lines) in a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Line the turn starts on (always 0 for single-line text)
    pub line_index: usize,
    /// Prefix name as written, if the turn had one
    pub speaker: Option<String>,
    pub role: TurnRole,
    pub text: String,
}

impl Turn {
    fn new(line_index: usize, speaker: Option<&str>, assignment: &SpeakerAssignment, text: &str) -> Self {
        let role = match speaker {
            Some(name) if assignment.is_self(name) => TurnRole::SelfSpeaker,
            Some(name) if assignment.is_other(name) => TurnRole::Other,
            _ => TurnRole::Unattributed,
        };
        Self {
            line_index,
            speaker: speaker.map(str::to_string),
            role,
            text: text.to_string(),
        }
    }
}

/// Attribute each message in `text` to a role.
///
/// A prefixed line (`Name: text`) starts a new turn; an unprefixed line
/// continues the previous turn, or opens an unattributed one when there is
/// no previous turn. Blank lines are skipped. Single-line text is split at
/// each `Name:` occurrence instead.
///
/// ```
/// use chatlens_domain::speaker::{attribute_turns, SpeakerAssignment, TurnRole};
///
/// let assignment = SpeakerAssignment::new("Me", "Jordan");
/// let turns = attribute_turns("Jordan: hey\nyou up?\nMe: no", &assignment);
/// assert_eq!(turns.len(), 2);
/// assert_eq!(turns[0].role, TurnRole::Other);
/// assert_eq!(turns[0].text, "hey\nyou up?");
/// ```
pub fn attribute_turns(text: &str, assignment: &SpeakerAssignment) -> Vec<Turn> {
    let Some(patterns) = patterns() else {
        return Vec::new();
    };
    let text = truncate_chars(text, MAX_SCAN_CHARS);
    let mut turns: Vec<Turn> = Vec::new();

    if text.contains('\n') {
        for (index, line) in text.lines().enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            match patterns.split_line(line) {
                Some(prefixed) => {
                    turns.push(Turn::new(index, Some(prefixed.name), assignment, prefixed.message));
                }
                None => match turns.last_mut() {
                    Some(last) => {
                        last.text.push('\n');
                        last.text.push_str(line.trim());
                    }
                    None => turns.push(Turn::new(index, None, assignment, line.trim())),
                },
            }
        }
        return turns;
    }

    // Matches from the two shapes may overlap; keep the earliest of each run
    let mut accepted: Vec<GlobalMatch<'_>> = Vec::new();
    for m in patterns.global_matches(text) {
        if accepted.last().is_none_or(|prev| m.start >= prev.end) {
            accepted.push(m);
        }
    }

    let lead_end = accepted.first().map_or(text.len(), |m| m.start);
    let lead = text[..lead_end].trim();
    if !lead.is_empty() {
        turns.push(Turn::new(0, None, assignment, lead));
    }
    for (i, m) in accepted.iter().enumerate() {
        let body_end = accepted.get(i + 1).map_or(text.len(), |next| next.start);
        let body = text[m.end..body_end].trim();
        turns.push(Turn::new(0, Some(m.name), assignment, body));
    }
    turns
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignment() -> SpeakerAssignment {
        SpeakerAssignment::new("Me", "Jordan")
    }

    #[test]
    fn test_prefixed_lines() {
        let turns = attribute_turns("Me: hi\nJordan: hey\nMe: what's up", &assignment());
        let roles: Vec<_> = turns.iter().map(|t| t.role).collect();
        assert_eq!(
            roles,
            vec![TurnRole::SelfSpeaker, TurnRole::Other, TurnRole::SelfSpeaker]
        );
        assert_eq!(turns[2].text, "what's up");
        assert_eq!(turns[1].line_index, 1);
    }

    #[test]
    fn test_continuation_and_leading_lines() {
        let text = "screenshot from last night\n\nJordan: hey\nsorry\n\nMe: ok";
        let turns = attribute_turns(text, &assignment());
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[0].role, TurnRole::Unattributed);
        assert_eq!(turns[0].speaker, None);
        assert_eq!(turns[1].text, "hey\nsorry");
        assert_eq!(turns[2].line_index, 5);
    }

    #[test]
    fn test_unknown_speaker_is_unattributed() {
        let turns = attribute_turns("Sam: hi\nJordan: hey", &assignment());
        assert_eq!(turns[0].role, TurnRole::Unattributed);
        assert_eq!(turns[0].speaker.as_deref(), Some("Sam"));
    }

    #[test]
    fn test_single_line_split() {
        let turns = attribute_turns("so anyway Jordan: hey you up? Me: no", &assignment());
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[0].text, "so anyway");
        assert_eq!(turns[1].role, TurnRole::Other);
        assert_eq!(turns[1].text, "hey you up?");
        assert_eq!(turns[2].role, TurnRole::SelfSpeaker);
        assert_eq!(turns[2].text, "no");
    }

    #[test]
    fn test_empty() {
        assert!(attribute_turns("", &assignment()).is_empty());
        assert!(attribute_turns("\n\n", &assignment()).is_empty());
    }
}
