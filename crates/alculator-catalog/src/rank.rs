//! Cheapest-first ordering.

use crate::card::Card;

/// Sorts cards by cost per standard drink, ascending.
///
/// The sort is stable, so equal costs keep flattening order. Missing costs
/// rank as 0 and therefore come first; the validity filter normally removes
/// them before ranking.
pub fn rank(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort_by(|a, b| a.rank_cost().total_cmp(&b.rank_cost()));
    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::fixtures::card;

    fn names(cards: &[Card]) -> Vec<&str> {
        cards.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_rank_ascending() {
        let cards = vec![card("c", Some(3.0)), card("a", Some(1.8)), card("b", Some(2.1))];
        assert_eq!(names(&rank(cards)), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let cards = vec![
            card("first", Some(2.0)),
            card("cheap", Some(1.0)),
            card("second", Some(2.0)),
            card("third", Some(2.0)),
        ];
        assert_eq!(
            names(&rank(cards)),
            vec!["cheap", "first", "second", "third"]
        );
    }

    #[test]
    fn test_rank_missing_cost_sorts_first() {
        let cards = vec![card("priced", Some(0.5)), card("missing", None)];
        assert_eq!(names(&rank(cards)), vec!["missing", "priced"]);
    }

    #[test]
    fn test_rank_output_non_decreasing() {
        let costs = [4.2, 1.1, 3.3, 1.1, 9.0, 0.7, 2.2];
        let cards = costs
            .iter()
            .enumerate()
            .map(|(i, c)| card(&i.to_string(), Some(*c)))
            .collect();
        let ranked = rank(cards);
        assert!(ranked.windows(2).all(|w| w[0].rank_cost() <= w[1].rank_cost()));
    }
}
