//! Keyword voting over evidence items.

use super::category::{Category, PriorityClassification, Valence};
use super::item::EvidenceItem;
use crate::rules::EvidenceRules;
use tracing::trace;

/// Per-category keyword scores for one text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryScores {
    scores: [usize; 4],
}

impl CategoryScores {
    /// Count distinct keywords of each category present in `text`
    pub fn score(text: &str, rules: &EvidenceRules) -> Self {
        let mut scores = [0; 4];
        for (slot, category) in scores.iter_mut().zip(Category::ALL) {
            *slot = rules
                .keywords(category)
                .iter()
                .filter(|k| text.contains(k.as_str()))
                .count();
        }
        Self { scores }
    }

    pub fn get(&self, category: Category) -> usize {
        self.scores[category as usize]
    }

    /// Highest-scoring category; ties go to the earliest in
    /// [`Category::ALL`]. `None` when nothing matched.
    pub fn winner(&self) -> Option<(Category, usize)> {
        let mut best: Option<(Category, usize)> = None;
        for category in Category::ALL {
            let score = self.get(category);
            if score > best.map_or(0, |(_, s)| s) {
                best = Some((category, score));
            }
        }
        best
    }
}

/// Category used when an item carries no keyword signal at all
pub fn positional_fallback(index: usize, valence: Valence) -> Category {
    match index {
        0 => Category::SmokingGun,
        1 if valence == Valence::Green => Category::GreenFlag,
        1 => Category::RedFlag,
        _ => Category::Pattern,
    }
}

/// Classify evidence with the built-in keyword tables.
///
/// Returns one classification per item, in the same order.
///
/// # Example
///
/// ```
/// use chatlens_domain::evidence::{prioritize, Category, EvidenceItem, Valence};
///
/// let items = vec![
///     EvidenceItem::new("ok"),
///     EvidenceItem::new("he was always honest and consistent"),
/// ];
/// let ranked = prioritize(&items, Valence::Neutral);
/// assert_eq!(ranked[0].category, Category::SmokingGun); // positional
/// assert_eq!(ranked[1].category, Category::GreenFlag);  // 2 green vs 1 pattern
/// ```
pub fn prioritize(items: &[EvidenceItem], valence: Valence) -> Vec<PriorityClassification> {
    prioritize_with(items, valence, &EvidenceRules::default())
}

/// Classify evidence with the given keyword tables. Never fails.
pub fn prioritize_with(
    items: &[EvidenceItem],
    valence: Valence,
    rules: &EvidenceRules,
) -> Vec<PriorityClassification> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let scores = CategoryScores::score(&item.combined_text(), rules);
            let classification = match scores.winner() {
                Some((category, signal)) => PriorityClassification::new(category, signal),
                None => PriorityClassification::new(positional_fallback(index, valence), 0),
            };
            trace!(
                "Evidence #{} -> {} ({:?})",
                index, classification.category, scores
            );
            classification
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(items: &[EvidenceItem], valence: Valence) -> Vec<Category> {
        prioritize(items, valence).into_iter().map(|c| c.category).collect()
    }

    fn blank(n: usize) -> Vec<EvidenceItem> {
        vec![EvidenceItem::new("ok sure"); n]
    }

    #[test]
    fn test_positional_fallback_neutral() {
        assert_eq!(
            categories(&blank(4), Valence::Neutral),
            vec![
                Category::SmokingGun,
                Category::RedFlag,
                Category::Pattern,
                Category::Pattern
            ]
        );
    }

    #[test]
    fn test_positional_fallback_green_valence() {
        assert_eq!(
            categories(&blank(3), Valence::Green),
            vec![Category::SmokingGun, Category::GreenFlag, Category::Pattern]
        );
    }

    #[test]
    fn test_empty_items_fall_back() {
        let ranked = prioritize(&[EvidenceItem::default()], Valence::Red);
        assert_eq!(ranked[0].category, Category::SmokingGun);
        assert!(ranked[0].is_positional());
        assert!(prioritize(&[], Valence::Neutral).is_empty());
    }

    #[test]
    fn test_keywords_beat_position() {
        let items = vec![EvidenceItem::new("idk maybe later, I'm busy")];
        let ranked = prioritize(&items, Valence::Neutral);
        assert_eq!(ranked[0].category, Category::RedFlag);
        assert_eq!(ranked[0].signal, 3);
    }

    #[test]
    fn test_annotations_count() {
        let item = EvidenceItem::new("where were you last night")
            .with_annotations("He lied about it", "You caught him", "");
        assert_eq!(categories(&[item], Valence::Green), vec![Category::SmokingGun]);
    }

    #[test]
    fn test_repeats_count_once() {
        let scores = CategoryScores::score("again again again", &EvidenceRules::default());
        assert_eq!(scores.get(Category::Pattern), 1);
    }

    #[test]
    fn test_tie_goes_to_enumeration_order() {
        // one red-flag keyword and one pattern keyword
        let scores = CategoryScores::score("busy again", &EvidenceRules::default());
        assert_eq!(scores.get(Category::RedFlag), 1);
        assert_eq!(scores.get(Category::Pattern), 1);
        assert_eq!(scores.winner(), Some((Category::RedFlag, 1)));
    }

    #[test]
    fn test_same_length_and_order() {
        let items = vec![
            EvidenceItem::new("honest"),
            EvidenceItem::new("ok sure"),
            EvidenceItem::new("caught"),
        ];
        assert_eq!(
            categories(&items, Valence::Neutral),
            vec![Category::GreenFlag, Category::RedFlag, Category::SmokingGun]
        );
    }
}
