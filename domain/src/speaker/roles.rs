//! Role assignment: which candidate is the user, which is the other party.

use super::candidate::SpeakerCandidate;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default name for the user when detection is inconclusive
pub const SELF_SENTINEL: &str = "Me";
/// Default name for the other party when detection is inconclusive
pub const OTHER_SENTINEL: &str = "Them";

fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Names that unambiguously refer to the user
fn is_self_marker(name: &str) -> bool {
    same_name(name, "me") || same_name(name, "you")
}

/// Final speaker roles for an analysis session
///
/// Both slots are always filled and never equal (case-insensitively).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerAssignment {
    pub self_name: String,
    pub other_name: String,
}

impl SpeakerAssignment {
    /// Create an assignment, replacing a clashing or blank `other_name`
    /// with a sentinel.
    pub fn new(self_name: impl Into<String>, other_name: impl Into<String>) -> Self {
        let mut self_name = self_name.into().trim().to_string();
        if self_name.is_empty() {
            self_name = SELF_SENTINEL.to_string();
        }
        let mut other_name = other_name.into().trim().to_string();
        if other_name.is_empty() || same_name(&self_name, &other_name) {
            other_name = if same_name(&self_name, OTHER_SENTINEL) {
                SELF_SENTINEL.to_string()
            } else {
                OTHER_SENTINEL.to_string()
            };
        }
        Self {
            self_name,
            other_name,
        }
    }

    /// Whether `name` refers to the user
    pub fn is_self(&self, name: &str) -> bool {
        same_name(&self.self_name, name)
    }

    /// Whether `name` refers to the other party
    pub fn is_other(&self, name: &str) -> bool {
        same_name(&self.other_name, name)
    }
}

impl Default for SpeakerAssignment {
    fn default() -> Self {
        Self::new(SELF_SENTINEL, OTHER_SENTINEL)
    }
}

/// Build an assignment with `choice` as the user, picking the other party
/// from `names`.
fn pick_self(names: &[&str], choice: &str) -> SpeakerAssignment {
    let self_name = names
        .iter()
        .find(|n| same_name(n, choice))
        .copied()
        .unwrap_or(choice);
    let other_name = names
        .iter()
        .find(|n| !same_name(n, self_name))
        .copied()
        .unwrap_or(OTHER_SENTINEL);
    SpeakerAssignment::new(self_name, other_name)
}

/// Outcome of role assignment
///
/// `Unresolved` is not an error: the caller must ask the user which
/// candidate they are and finish with [`RoleResolution::resolve_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RoleResolution {
    Resolved(SpeakerAssignment),
    Unresolved { candidates: Vec<String> },
}

impl RoleResolution {
    pub fn is_resolved(&self) -> bool {
        matches!(self, RoleResolution::Resolved(_))
    }

    /// The assignment, if resolved
    pub fn assignment(&self) -> Option<&SpeakerAssignment> {
        match self {
            RoleResolution::Resolved(a) => Some(a),
            RoleResolution::Unresolved { .. } => None,
        }
    }

    /// Complete (or correct) the assignment with an explicit choice of who
    /// the user is.
    pub fn resolve_with(self, self_choice: &str) -> SpeakerAssignment {
        match self {
            RoleResolution::Unresolved { candidates } => {
                let names: Vec<&str> = candidates.iter().map(String::as_str).collect();
                pick_self(&names, self_choice)
            }
            RoleResolution::Resolved(current) => {
                if current.is_self(self_choice) {
                    current
                } else if current.is_other(self_choice) {
                    SpeakerAssignment::new(current.other_name, current.self_name)
                } else {
                    SpeakerAssignment::new(self_choice, current.other_name)
                }
            }
        }
    }

    /// Finish without user input, falling back to the `Me`/`Them` sentinels
    pub fn finalize_with_defaults(self) -> SpeakerAssignment {
        match self {
            RoleResolution::Resolved(a) => a,
            RoleResolution::Unresolved { .. } => SpeakerAssignment::default(),
        }
    }
}

/// Assign self/other roles from detected candidates.
///
/// Rules, first match wins:
///
/// 1. An explicit self hint names the user.
/// 2. A `Me` or `You` candidate (case-insensitive) is the user.
/// 3. A single candidate is the other party; the user becomes `Me`.
/// 4. Otherwise (none, or two without a self-marker) the roles are unresolved.
///
/// # Example
///
/// ```
/// use chatlens_domain::speaker::{assign_roles, identify_speakers};
///
/// let candidates = identify_speakers("Me: hi\nJordan: hey");
/// let roles = assign_roles(&candidates, None);
/// let assignment = roles.assignment().unwrap();
/// assert_eq!(assignment.self_name, "Me");
/// assert_eq!(assignment.other_name, "Jordan");
/// ```
pub fn assign_roles(
    candidates: &[SpeakerCandidate],
    explicit_self_hint: Option<&str>,
) -> RoleResolution {
    let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();

    if let Some(hint) = explicit_self_hint.map(str::trim).filter(|h| !h.is_empty()) {
        debug!("Assigning roles from explicit self hint '{}'", hint);
        return RoleResolution::Resolved(pick_self(&names, hint));
    }

    if let Some(marker) = names.iter().find(|n| is_self_marker(n)) {
        return RoleResolution::Resolved(pick_self(&names, marker));
    }

    match names.as_slice() {
        [only] => RoleResolution::Resolved(SpeakerAssignment::new(SELF_SENTINEL, *only)),
        _ => {
            debug!("Speaker roles unresolved ({} candidates)", names.len());
            RoleResolution::Unresolved {
                candidates: names.iter().map(|n| n.to_string()).collect(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidates(names: &[&str]) -> Vec<SpeakerCandidate> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| SpeakerCandidate::explicit(*n, i))
            .collect()
    }

    #[test]
    fn test_me_is_self() {
        let roles = assign_roles(&candidates(&["Me", "Jordan"]), None);
        assert_eq!(roles, RoleResolution::Resolved(SpeakerAssignment::new("Me", "Jordan")));
    }

    #[test]
    fn test_you_is_self_wherever_it_appears() {
        let roles = assign_roles(&candidates(&["Jordan", "You"]), None);
        let a = roles.assignment().unwrap();
        assert_eq!(a.self_name, "You");
        assert_eq!(a.other_name, "Jordan");
    }

    #[test]
    fn test_single_candidate_is_other() {
        let roles = assign_roles(&candidates(&["Jordan"]), None);
        let a = roles.assignment().unwrap();
        assert_eq!(a.self_name, "Me");
        assert_eq!(a.other_name, "Jordan");
    }

    #[test]
    fn test_single_you_candidate_is_self() {
        let roles = assign_roles(&candidates(&["you"]), None);
        let a = roles.assignment().unwrap();
        assert_eq!(a.self_name, "you");
        assert_eq!(a.other_name, "Them");
    }

    #[test]
    fn test_two_without_marker_is_unresolved() {
        let roles = assign_roles(&candidates(&["Sam", "Alex"]), None);
        assert_eq!(
            roles,
            RoleResolution::Unresolved {
                candidates: vec!["Sam".to_string(), "Alex".to_string()]
            }
        );
    }

    #[test]
    fn test_zero_is_unresolved() {
        let roles = assign_roles(&[], None);
        assert!(!roles.is_resolved());
        assert_eq!(roles.finalize_with_defaults(), SpeakerAssignment::default());
    }

    #[test]
    fn test_explicit_hint_picks_candidate_spelling() {
        let roles = assign_roles(&candidates(&["Sam", "Alex"]), Some("alex"));
        let a = roles.assignment().unwrap();
        assert_eq!(a.self_name, "Alex");
        assert_eq!(a.other_name, "Sam");
    }

    #[test]
    fn test_resolve_with_external_choice() {
        let roles = assign_roles(&candidates(&["Sam", "Alex"]), None);
        let a = roles.resolve_with("Sam");
        assert_eq!(a, SpeakerAssignment::new("Sam", "Alex"));
    }

    #[test]
    fn test_resolve_with_swaps_resolved_roles() {
        let roles = assign_roles(&candidates(&["Me", "Jordan"]), None);
        let corrected = roles.resolve_with("Jordan");
        assert_eq!(corrected, SpeakerAssignment::new("Jordan", "Me"));
    }

    #[test]
    fn test_assignment_never_duplicates() {
        let a = SpeakerAssignment::new("Sam", "sam");
        assert_eq!(a.other_name, "Them");
        let b = SpeakerAssignment::new("Them", "Them");
        assert_eq!(b.other_name, "Me");
        let c = SpeakerAssignment::new("  ", "Jordan");
        assert_eq!(c.self_name, "Me");
    }

    #[test]
    fn test_idempotent() {
        let list = candidates(&["Me", "Jordan"]);
        assert_eq!(assign_roles(&list, None), assign_roles(&list, None));
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(assign_roles(&candidates(&["Sam", "Alex"]), None)).unwrap();
        assert_eq!(json["status"], "unresolved");
        let json = serde_json::to_value(assign_roles(&candidates(&["Me"]), None)).unwrap();
        assert_eq!(json["status"], "resolved");
        assert_eq!(json["self_name"], "Me");
    }
}
