use std::collections::HashSet;

use crate::{foods::repo_types::FoodInfo, students::repo_types::StudentPreferences};

use super::aggregate::AggregatedDish;

fn normalize(allergen: &str) -> String {
    allergen.trim().to_lowercase()
}

/// Restrictions compiled once per request.
struct Restrictions {
    veg: bool,
    vegan: bool,
    gluten_free: bool,
    allergens: HashSet<String>,
}

impl Restrictions {
    fn new(prefs: &StudentPreferences) -> Self {
        Self {
            veg: prefs.is_veg,
            vegan: prefs.is_vegan,
            gluten_free: prefs.is_gluten_free,
            allergens: prefs
                .allergens
                .iter()
                .map(|a| normalize(a))
                .filter(|a| !a.is_empty())
                .collect(),
        }
    }

    fn allows(&self, food: &FoodInfo) -> bool {
        // vegan satisfies vegetarian
        (!self.veg || food.veg || food.vegan)
            && (!self.vegan || food.vegan)
            && (!self.gluten_free || food.gluten_free)
            && !food
                .allergens
                .iter()
                .any(|a| self.allergens.contains(&normalize(a)))
    }
}

/// Keeps the dishes compatible with `prefs`, preserving order.
pub fn filter(dishes: Vec<AggregatedDish>, prefs: &StudentPreferences) -> Vec<AggregatedDish> {
    let restrictions = Restrictions::new(prefs);
    dishes
        .into_iter()
        .filter(|d| restrictions.allows(&d.food_info))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::aggregate::{aggregate, tests::{entry, food}};

    fn dish(id: i64, f: impl FnOnce(&mut FoodInfo)) -> AggregatedDish {
        let mut info = food(id, 3);
        f(&mut info);
        aggregate(vec![entry(id, "Monday", Some(info))], &HashSet::new()).remove(0)
    }

    fn prefs(f: impl FnOnce(&mut StudentPreferences)) -> StudentPreferences {
        let mut p = StudentPreferences::default();
        f(&mut p);
        p
    }

    #[test]
    fn no_restrictions_keeps_everything() {
        let dishes = vec![dish(1, |_| {}), dish(2, |f| f.allergens = vec!["Peanut".into()])];
        assert_eq!(filter(dishes, &StudentPreferences::default()).len(), 2);
    }

    #[test]
    fn vegan_students_only_get_vegan_dishes() {
        let dishes = vec![
            dish(1, |f| f.veg = true),
            dish(2, |f| {
                f.veg = true;
                f.vegan = true;
            }),
            dish(3, |_| {}),
        ];
        let kept = filter(dishes, &prefs(|p| p.is_vegan = true));
        assert_eq!(kept.len(), 1);
        assert!(kept.iter().all(|d| d.food_info.vegan));
    }

    #[test]
    fn vegetarian_students_keep_vegan_dishes() {
        let dishes = vec![
            dish(1, |f| {
                f.veg = true;
                f.vegan = true;
            }),
            dish(2, |_| {}),
        ];
        let kept = filter(dishes, &prefs(|p| p.is_veg = true));
        assert_eq!(kept.iter().map(AggregatedDish::food_id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn vegetarian_students_keep_dishes_flagged_only_vegan() {
        let dishes = vec![
            dish(1, |f| {
                f.veg = false;
                f.vegan = true;
            }),
            dish(2, |_| {}),
        ];
        let kept = filter(dishes, &prefs(|p| p.is_veg = true));
        assert_eq!(kept.iter().map(AggregatedDish::food_id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn gluten_free_is_enforced() {
        let dishes = vec![dish(1, |f| f.gluten_free = true), dish(2, |_| {})];
        let kept = filter(dishes, &prefs(|p| p.is_gluten_free = true));
        assert_eq!(kept.iter().map(AggregatedDish::food_id).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn allergens_match_case_insensitively() {
        let dishes = vec![
            dish(1, |f| f.allergens = vec!["Milk".into()]),
            dish(2, |f| f.allergens = vec!["Soy".into()]),
            dish(3, |f| f.allergens = vec![" EGGS ".into()]),
        ];
        let kept = filter(dishes, &prefs(|p| p.allergens = vec!["milk".into(), "eggs".into()]));
        assert_eq!(kept.iter().map(AggregatedDish::food_id).collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn blank_allergens_never_match() {
        let d = dish(1, |f| f.allergens = vec!["".into()]);
        assert_eq!(filter(vec![d], &prefs(|p| p.allergens = vec!["  ".into()])).len(), 1);
    }

    #[test]
    fn preserves_input_order() {
        let dishes = vec![dish(5, |_| {}), dish(3, |_| {}), dish(9, |_| {})];
        let kept = filter(dishes, &StudentPreferences::default());
        assert_eq!(kept.iter().map(AggregatedDish::food_id).collect::<Vec<_>>(), vec![5, 3, 9]);
    }

    #[test]
    fn empty_result_is_fine() {
        let kept = filter(vec![dish(1, |_| {})], &prefs(|p| p.is_vegan = true));
        assert!(kept.is_empty());
    }
}
