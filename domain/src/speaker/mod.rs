//! Speaker identification
//!
//! Works out who is talking in a pasted conversation:
//!
//! ```text
//! raw text ──▶ identify_speakers ──▶ [SpeakerCandidate; ≤2]
//!                                          │
//!                    explicit self hint ──▶ assign_roles ──▶ RoleResolution
//!                                                              │
//!                                   Resolved(SpeakerAssignment) │ Unresolved { candidates }
//!                                                              ▼
//!                                                   ask the user "which one are you?"
//! ```
//!
//! Detection is permissive on purpose: anything that survives the denylist
//! and shape checks is offered as a candidate, and ambiguity is reported as
//! `Unresolved` rather than guessed.

pub mod candidate;
pub mod detect;
pub mod roles;
pub mod turns;

pub use candidate::{Confidence, SpeakerCandidate};
pub use detect::{MAX_CANDIDATES, SELF_MARKER, identify_speakers, identify_speakers_with};
pub use roles::{OTHER_SENTINEL, RoleResolution, SELF_SENTINEL, SpeakerAssignment, assign_roles};
pub use turns::{Turn, TurnRole, attribute_turns};
