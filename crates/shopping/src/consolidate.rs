use std::collections::HashMap;

use crate::{NewItem, PlannedMeal};

/// Unit assumed when an ingredient has none.
pub const DEFAULT_UNIT: &str = "pcs";

/// One ingredient line of a planned meal.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatIngredient {
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub recipe_id: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsolidatedItem {
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub recipe_ids: Vec<String>,
}

impl From<ConsolidatedItem> for NewItem {
    fn from(value: ConsolidatedItem) -> Self {
        Self {
            item: value.name,
            quantity: value.quantity,
            unit: value.unit,
            recipe_id: value.recipe_ids.into_iter().next(),
        }
    }
}

/// Ingredients of every meal that has a recipe, in meal order.
///
/// Names and units are trimmed, blank units become `None` and lines with a
/// blank name are dropped. A recipe planned twice contributes twice.
pub fn flatten(meals: &[PlannedMeal]) -> Vec<FlatIngredient> {
    meals
        .iter()
        .filter_map(|meal| meal.recipe.as_ref())
        .flat_map(|recipe| {
            recipe.ingredients.iter().filter_map(|ingredient| {
                let name = ingredient.name.trim();
                if name.is_empty() {
                    return None;
                }

                Some(FlatIngredient {
                    name: name.to_owned(),
                    quantity: ingredient.quantity,
                    unit: ingredient
                        .unit
                        .as_deref()
                        .map(str::trim)
                        .filter(|u| !u.is_empty())
                        .map(str::to_owned),
                    recipe_id: recipe.id.to_owned(),
                })
            })
        })
        .collect()
}

pub fn consolidation_key(name: &str, unit: Option<&str>) -> String {
    format!(
        "{}_{}",
        name.trim().to_lowercase(),
        unit.unwrap_or(DEFAULT_UNIT).to_lowercase()
    )
}

fn same_unit(a: Option<&str>, b: Option<&str>) -> bool {
    match (a, b) {
        (Some(a), Some(b)) => a.to_lowercase() == b.to_lowercase(),
        (None, None) => true,
        _ => false,
    }
}

/// Merges lines sharing a name and unit, summing their quantities.
///
/// Output keeps first-occurrence order. The first line of a group decides the
/// displayed name and unit. A missing unit and an explicit `pcs` share a key
/// but are kept in separate groups.
pub fn consolidate(entries: impl IntoIterator<Item = FlatIngredient>) -> Vec<ConsolidatedItem> {
    let mut items: Vec<ConsolidatedItem> = vec![];
    let mut groups: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let key = consolidation_key(&entry.name, entry.unit.as_deref());
        let mut candidate = key.to_owned();
        let mut split = 0;

        let position = loop {
            match groups.get(&candidate) {
                Some(&pos) if same_unit(items[pos].unit.as_deref(), entry.unit.as_deref()) => {
                    break Some(pos);
                }
                Some(_) => {
                    split += 1;
                    candidate = format!("{key}#{split}");
                }
                None => break None,
            }
        };

        let Some(pos) = position else {
            groups.insert(candidate, items.len());
            items.push(ConsolidatedItem {
                name: entry.name,
                quantity: entry.quantity,
                unit: entry.unit,
                recipe_ids: vec![entry.recipe_id],
            });
            continue;
        };

        let item = &mut items[pos];
        if let Some(quantity) = entry.quantity {
            item.quantity = Some(item.quantity.unwrap_or(0.0) + quantity);
        }
        if !item.recipe_ids.contains(&entry.recipe_id) {
            item.recipe_ids.push(entry.recipe_id);
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use mealplanner_shared::recipe::{Ingredient, Ingredients};
    use time::macros::date;

    use super::*;
    use crate::PlannedRecipe;

    fn line(name: &str, quantity: Option<f64>, unit: Option<&str>, recipe_id: &str) -> FlatIngredient {
        FlatIngredient {
            name: name.to_owned(),
            quantity,
            unit: unit.map(str::to_owned),
            recipe_id: recipe_id.to_owned(),
        }
    }

    #[test]
    fn sums_same_name_and_unit() {
        let items = consolidate(vec![
            line("Flour", Some(200.0), Some("g"), "a"),
            line("Egg", Some(2.0), Some("pcs"), "a"),
            line("flour ", Some(100.0), Some("G"), "b"),
        ]);

        assert_eq!(
            items,
            vec![
                ConsolidatedItem {
                    name: "Flour".to_owned(),
                    quantity: Some(300.0),
                    unit: Some("g".to_owned()),
                    recipe_ids: vec!["a".to_owned(), "b".to_owned()],
                },
                ConsolidatedItem {
                    name: "Egg".to_owned(),
                    quantity: Some(2.0),
                    unit: Some("pcs".to_owned()),
                    recipe_ids: vec!["a".to_owned()],
                },
            ]
        );
    }

    #[test]
    fn different_units_stay_apart() {
        let items = consolidate(vec![
            line("Flour", Some(200.0), Some("g"), "a"),
            line("Flour", Some(1.0), Some("kg"), "b"),
        ]);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].quantity, Some(200.0));
        assert_eq!(items[1].quantity, Some(1.0));
        assert_eq!(items[1].unit.as_deref(), Some("kg"));
    }

    #[test]
    fn missing_unit_and_pcs_are_split() {
        let items = consolidate(vec![
            line("Egg", Some(2.0), None, "a"),
            line("Egg", Some(3.0), Some("pcs"), "b"),
            line("egg", Some(1.0), Some("PCS"), "c"),
            line("Egg", Some(4.0), None, "d"),
        ]);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].unit, None);
        assert_eq!(items[0].quantity, Some(6.0));
        assert_eq!(items[0].recipe_ids, vec!["a", "d"]);
        assert_eq!(items[1].unit.as_deref(), Some("pcs"));
        assert_eq!(items[1].quantity, Some(4.0));
        assert_eq!(items[1].recipe_ids, vec!["b", "c"]);
    }

    #[test]
    fn unset_quantity_starts_at_zero() {
        let items = consolidate(vec![
            line("Salt", None, None, "a"),
            line("Salt", None, None, "a"),
        ]);
        assert_eq!(items[0].quantity, None);
        assert_eq!(items[0].recipe_ids, vec!["a"]);

        let items = consolidate(vec![
            line("Salt", None, Some("g"), "a"),
            line("Salt", Some(5.0), Some("g"), "b"),
        ]);
        assert_eq!(items[0].quantity, Some(5.0));
    }

    #[test]
    fn flatten_skips_meals_without_recipe_and_blank_names() {
        let recipe = PlannedRecipe {
            id: "a".to_owned(),
            ingredients: Ingredients(vec![
                Ingredient::new(" Milk ", 1.0, " l "),
                Ingredient::new("   ", 1.0, "g"),
                Ingredient::new("Pepper", None, "  "),
            ]),
        };

        let meals = vec![
            PlannedMeal {
                id: "m1".to_owned(),
                date: date!(2024 - 01 - 01),
                recipe: None,
            },
            PlannedMeal {
                id: "m2".to_owned(),
                date: date!(2024 - 01 - 01),
                recipe: Some(recipe.clone()),
            },
            PlannedMeal {
                id: "m3".to_owned(),
                date: date!(2024 - 01 - 02),
                recipe: Some(recipe),
            },
        ];

        let lines = flatten(&meals);
        assert_eq!(
            lines,
            vec![
                line("Milk", Some(1.0), Some("l"), "a"),
                line("Pepper", None, None, "a"),
                line("Milk", Some(1.0), Some("l"), "a"),
                line("Pepper", None, None, "a"),
            ]
        );

        let items = consolidate(lines);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].quantity, Some(2.0));
    }

    #[test]
    fn key_defaults_to_pcs() {
        assert_eq!(consolidation_key(" Egg ", None), "egg_pcs");
        assert_eq!(consolidation_key("Flour", Some("KG")), "flour_kg");
    }
}
