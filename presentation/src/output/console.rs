//! Console output formatter for readings and detection results

use super::formatter::OutputFormatter;
use chatlens_application::PreparedAnalysis;
use chatlens_domain::{
    Confidence, MAX_SCAN_CHARS, RankedEvidence, Reading, RoleResolution, Tier, TierColor,
    TurnRole,
};
use colored::{ColoredString, Colorize};

/// Cells in a rendered score bar
const BAR_CELLS: usize = 20;
/// Quotes longer than this are shortened in console output
const QUOTE_PREVIEW_CHARS: usize = 120;

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}\n", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn tinted(text: &str, color: TierColor) -> ColoredString {
        match color {
            TierColor::Green => text.green(),
            TierColor::Yellow => text.yellow(),
            TierColor::Red => text.red(),
        }
    }

    /// `[#####...............]` sized by the tier's bar width
    fn bar(percent: f64) -> String {
        let filled = ((percent.clamp(0.0, 100.0) / 100.0) * BAR_CELLS as f64).round() as usize;
        format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_CELLS - filled))
    }

    fn tier_line(name: &str, tier: &Tier) -> String {
        format!(
            "{:<15} {} {:>6} {}\n{:<15} {}\n",
            name.bold(),
            Self::tinted(&format!("{:<8}", tier.level.as_str()), tier.color).bold(),
            tier.score,
            Self::tinted(&Self::bar(tier.bar_width_percent), tier.color),
            "",
            tier.display_text.dimmed()
        )
    }

    fn evidence_line(evidence: &RankedEvidence) -> String {
        let badge = &evidence.classification;
        let mut out = format!(
            "  {} {} \"{}\"\n",
            badge.badge_glyph,
            Self::tinted(&badge.label, badge.tone).bold(),
            Self::preview(&evidence.item.quote)
        );
        for note in [
            &evidence.item.annotation_a,
            &evidence.item.annotation_b,
            &evidence.item.annotation_c,
        ] {
            if !note.trim().is_empty() {
                out.push_str(&format!("      {} {}\n", "-".dimmed(), note));
            }
        }
        out
    }

    fn preview(text: &str) -> String {
        let single_line = text.split_whitespace().collect::<Vec<_>>().join(" ");
        if single_line.chars().count() <= QUOTE_PREVIEW_CHARS {
            single_line
        } else {
            let cut: String = single_line.chars().take(QUOTE_PREVIEW_CHARS).collect();
            format!("{}...", cut)
        }
    }

    fn roles(prepared: &PreparedAnalysis) -> String {
        match &prepared.resolution {
            RoleResolution::Resolved(assignment) => format!(
                "{} you = {}, them = {}\n",
                "Roles:".cyan().bold(),
                assignment.self_name.bold(),
                assignment.other_name.bold()
            ),
            RoleResolution::Unresolved { candidates } if prepared.needs_self_choice() => format!(
                "{} {} Which one are you? {} (use --me NAME)\n",
                "Roles:".cyan().bold(),
                "unresolved.".yellow(),
                candidates.join(" or ")
            ),
            RoleResolution::Unresolved { .. } => format!(
                "{} you = {}, them = {} (defaults)\n",
                "Roles:".cyan().bold(),
                prepared.request.speakers.self_name,
                prepared.request.speakers.other_name
            ),
        }
    }

    fn truncation_note(prepared: &PreparedAnalysis) -> String {
        if prepared.request.text.was_truncated() {
            format!(
                "{}\n",
                format!("(only the first {} characters were scanned)", MAX_SCAN_CHARS).dimmed()
            )
        } else {
            String::new()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_speakers(&self, prepared: &PreparedAnalysis) -> String {
        let mut output = Self::section_header("Speakers");

        if prepared.request.candidates.is_empty() {
            output.push_str(&format!("{}\n", "No speaker names found.".dimmed()));
        }
        for candidate in &prepared.request.candidates {
            let how = match candidate.confidence {
                Confidence::Explicit => format!("line {}", candidate.source_line_index + 1),
                Confidence::Inferred => "inferred".to_string(),
            };
            output.push_str(&format!("  {:<20} {}\n", candidate.name, how.dimmed()));
        }
        output.push('\n');
        output.push_str(&Self::roles(prepared));

        let turns = prepared.turns();
        if !turns.is_empty() {
            output.push_str(&Self::section_header("Turns"));
            for turn in turns {
                let tag = match turn.role {
                    TurnRole::SelfSpeaker => "[you] ".green(),
                    TurnRole::Other => "[them]".magenta(),
                    TurnRole::Unattributed => "[?]   ".dimmed(),
                };
                output.push_str(&format!("  {} {}\n", tag, Self::preview(&turn.text)));
            }
        }
        output.push_str(&Self::truncation_note(prepared));
        output
    }

    fn format_classification(&self, prepared: &PreparedAnalysis) -> String {
        let mut output = format!(
            "{} {}\n",
            "Format:".cyan().bold(),
            prepared.request.format.as_str().bold()
        );
        if let Some(note) = &prepared.request.framing_note {
            output.push_str(&format!("{}\n", note.italic().dimmed()));
        }
        output.push_str(&Self::truncation_note(prepared));
        output
    }

    fn format_request(&self, prepared: &PreparedAnalysis) -> String {
        let mut output = Self::header("Analysis Request");
        output.push('\n');
        output.push_str(&self.format_classification(prepared));
        output.push_str(&Self::roles(prepared));
        output.push_str(&Self::section_header("Hints"));
        output.push_str(
            &serde_json::to_string_pretty(&prepared.request.hints())
                .unwrap_or_else(|_| "{}".to_string()),
        );
        output.push('\n');
        output
    }

    fn format_reading(&self, reading: &Reading) -> String {
        let mut output = Self::header("Reading");

        if let Some(note) = &reading.framing_note {
            output.push_str(&format!("\n{}\n", note.italic().dimmed()));
        }
        output.push_str(&format!(
            "\n{} you = {}, them = {}\n{} {}\n",
            "Speakers:".cyan().bold(),
            reading.speakers.self_name,
            reading.speakers.other_name,
            "Valence:".cyan().bold(),
            reading.valence
        ));

        output.push_str(&Self::section_header("Scores"));
        output.push_str(&Self::tier_line("Risk", &reading.metrics.risk));
        output.push_str(&Self::tier_line("Compatibility", &reading.metrics.compatibility));
        output.push_str(&Self::tier_line("Communication", &reading.metrics.communication));

        output.push_str(&Self::section_header("Evidence"));
        if reading.evidence.is_empty() && reading.hidden_evidence == 0 {
            output.push_str(&format!("{}\n", "No evidence quoted.".dimmed()));
        }
        for evidence in &reading.evidence {
            output.push_str(&Self::evidence_line(evidence));
        }
        if reading.hidden_evidence > 0 {
            output.push_str(&format!(
                "  {}\n",
                format!("+ {} more hidden", reading.hidden_evidence).dimmed()
            ));
        }

        output.push_str(&format!("\n{}\n", "=".repeat(60).cyan()));
        output
    }
}
