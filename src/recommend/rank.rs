use std::cmp::Reverse;

use super::aggregate::AggregatedDish;

/// Default number of dishes promoted to the top of a recommendation list.
/// A cap of 1 reproduces the single "top meal" behaviour.
pub const DEFAULT_TOP_PICKS: usize = 3;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationResult {
    pub top_picks: Vec<AggregatedDish>,
    pub remainder: Vec<AggregatedDish>,
}

impl RecommendationResult {
    /// Top picks followed by the remainder, the order clients render.
    pub fn into_ranked_list(self) -> Vec<AggregatedDish> {
        let mut list = self.top_picks;
        list.extend(self.remainder);
        list
    }
}

/// Ranks dishes by health score, promoting favorites into the top `cap` slots.
///
/// Ties keep their input order. Favorites always precede non-favorites in the
/// top picks; the remainder is everything else in score order.
pub fn rank(dishes: Vec<AggregatedDish>, cap: usize) -> RecommendationResult {
    let mut ordered = dishes;
    ordered.sort_by_key(|d| Reverse(d.health_score));

    let mut picked: Vec<usize> = ordered
        .iter()
        .enumerate()
        .filter(|(_, d)| d.is_favorite)
        .map(|(i, _)| i)
        .take(cap)
        .collect();
    if picked.len() < cap {
        let missing = cap - picked.len();
        picked.extend(
            ordered
                .iter()
                .enumerate()
                .filter(|(_, d)| !d.is_favorite)
                .map(|(i, _)| i)
                .take(missing),
        );
    }

    let mut slots: Vec<Option<AggregatedDish>> = ordered.into_iter().map(Some).collect();
    let top_picks = picked.iter().filter_map(|&i| slots[i].take()).collect();
    let remainder = slots.into_iter().flatten().collect();

    RecommendationResult {
        top_picks,
        remainder,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::recommend::aggregate::{aggregate, tests::{entry, food}};

    /// `(food id, score, favorite)` triples, one menu entry each.
    fn dishes(rows: &[(i64, i32, bool)]) -> Vec<AggregatedDish> {
        let liked: HashSet<i64> = rows.iter().filter(|s| s.2).map(|s| s.0).collect();
        let entries = rows
            .iter()
            .map(|&(id, score, _)| entry(id, "Monday", Some(food(id, score))))
            .collect();
        aggregate(entries, &liked)
    }

    fn ids(list: &[AggregatedDish]) -> Vec<i64> {
        list.iter().map(AggregatedDish::food_id).collect()
    }

    #[test]
    fn empty_input_gives_empty_result() {
        assert_eq!(rank(Vec::new(), DEFAULT_TOP_PICKS), RecommendationResult::default());
    }

    #[test]
    fn fewer_dishes_than_the_cap_are_all_top_picks() {
        let res = rank(dishes(&[(1, 2, false), (2, 5, false)]), DEFAULT_TOP_PICKS);
        assert_eq!(ids(&res.top_picks), vec![2, 1]);
        assert!(res.remainder.is_empty());
    }

    #[test]
    fn favorite_precedes_healthier_non_favorite() {
        let res = rank(dishes(&[(1, 85, true), (2, 90, false)]), DEFAULT_TOP_PICKS);
        assert_eq!(ids(&res.top_picks), vec![1, 2]);
        assert!(res.remainder.is_empty());
    }

    #[test]
    fn three_favorites_fill_the_top_picks() {
        let res = rank(
            dishes(&[
                (1, 5, false),
                (2, 2, true),
                (3, 4, true),
                (4, 3, true),
                (5, 1, true),
            ]),
            DEFAULT_TOP_PICKS,
        );
        assert_eq!(ids(&res.top_picks), vec![3, 4, 2]);
        assert_eq!(ids(&res.remainder), vec![1, 5]);
    }

    #[test]
    fn top_picks_are_topped_up_with_the_healthiest_others() {
        let res = rank(
            dishes(&[(1, 1, true), (2, 3, false), (3, 5, false), (4, 4, false)]),
            DEFAULT_TOP_PICKS,
        );
        assert_eq!(ids(&res.top_picks), vec![1, 3, 4]);
        assert_eq!(ids(&res.remainder), vec![2]);
    }

    #[test]
    fn ties_keep_input_order() {
        let res = rank(
            dishes(&[(1, 3, false), (2, 3, false), (3, 3, false), (4, 3, false), (5, 3, false)]),
            DEFAULT_TOP_PICKS,
        );
        assert_eq!(ids(&res.top_picks), vec![1, 2, 3]);
        assert_eq!(ids(&res.remainder), vec![4, 5]);
    }

    #[test]
    fn picks_and_remainder_partition_the_input() {
        let input = dishes(&[
            (1, 4, false),
            (2, 2, true),
            (3, 5, false),
            (4, 1, false),
            (5, 3, true),
            (6, 5, false),
        ]);
        let res = rank(input.clone(), DEFAULT_TOP_PICKS);
        assert!(res.top_picks.len() <= DEFAULT_TOP_PICKS);

        let picks: HashSet<i64> = ids(&res.top_picks).into_iter().collect();
        let rest: HashSet<i64> = ids(&res.remainder).into_iter().collect();
        assert!(picks.is_disjoint(&rest));
        let all: HashSet<i64> = ids(&input).into_iter().collect();
        assert_eq!(&picks | &rest, all);
        assert_eq!(ids(&res.remainder), vec![6, 1, 4]);
    }

    #[test]
    fn cap_of_one_is_the_single_top_meal() {
        let res = rank(dishes(&[(1, 5, false), (2, 2, true), (3, 4, true)]), 1);
        assert_eq!(ids(&res.top_picks), vec![3]);
        assert_eq!(ids(&res.remainder), vec![1, 2]);

        let res = rank(dishes(&[(1, 2, false), (2, 5, false)]), 1);
        assert_eq!(ids(&res.top_picks), vec![2]);
    }

    #[test]
    fn cap_of_zero_puts_everything_in_the_remainder() {
        let res = rank(dishes(&[(1, 2, true), (2, 5, false)]), 0);
        assert!(res.top_picks.is_empty());
        assert_eq!(ids(&res.remainder), vec![2, 1]);
    }

    #[test]
    fn ranked_list_is_picks_then_remainder() {
        let res = rank(
            dishes(&[(1, 1, false), (2, 2, false), (3, 3, false), (4, 4, false), (5, 5, true)]),
            DEFAULT_TOP_PICKS,
        );
        assert_eq!(ids(&res.into_ranked_list()), vec![5, 4, 3, 2, 1]);
    }
}
