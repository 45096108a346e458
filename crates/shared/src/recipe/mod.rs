use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::ValidationError;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    #[serde(default)]
    pub quantity: Option<f64>,
    #[serde(default)]
    pub unit: Option<String>,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<Option<f64>>,
        unit: impl Into<Option<&'static str>>,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            unit: unit.into().map(str::to_owned),
        }
    }
}

/// Ordered ingredient list.
///
/// Accepts either a JSON array or an object keyed by position and always
/// serializes back as an array.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "IngredientShape", into = "Vec<Ingredient>")]
pub struct Ingredients(pub Vec<Ingredient>);

#[derive(Deserialize)]
#[serde(untagged)]
enum IngredientShape {
    List(Vec<Ingredient>),
    Map(BTreeMap<String, Ingredient>),
    Null(()),
}

impl From<IngredientShape> for Ingredients {
    fn from(value: IngredientShape) -> Self {
        match value {
            IngredientShape::List(list) => Self(list),
            IngredientShape::Map(map) => {
                let mut entries = map.into_iter().collect::<Vec<_>>();
                entries.sort_by(|(a, _), (b, _)| {
                    match (a.parse::<u64>(), b.parse::<u64>()) {
                        (Ok(a), Ok(b)) => a.cmp(&b),
                        (Ok(_), Err(_)) => std::cmp::Ordering::Less,
                        (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
                        (Err(_), Err(_)) => a.cmp(b),
                    }
                });

                Self(entries.into_iter().map(|(_, i)| i).collect())
            }
            IngredientShape::Null(_) => Self::default(),
        }
    }
}

impl From<Ingredients> for Vec<Ingredient> {
    fn from(value: Ingredients) -> Self {
        value.0
    }
}

impl From<Vec<Ingredient>> for Ingredients {
    fn from(value: Vec<Ingredient>) -> Self {
        Self(value)
    }
}

impl std::ops::Deref for Ingredients {
    type Target = Vec<Ingredient>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

pub fn validate_ingredients(ingredients: &Ingredients) -> Result<(), ValidationError> {
    for ingredient in ingredients.iter() {
        if ingredient.name.chars().count() > 100 {
            return Err(ValidationError::new("ingredient_name_length")
                .with_message("ingredient name must be at most 100 characters".into()));
        }

        if ingredient
            .quantity
            .is_some_and(|quantity| !quantity.is_finite() || quantity < 0.0)
        {
            return Err(ValidationError::new("ingredient_quantity")
                .with_message("ingredient quantity must be a positive number".into()));
        }

        if ingredient
            .unit
            .as_ref()
            .is_some_and(|unit| unit.chars().count() > 30)
        {
            return Err(ValidationError::new("ingredient_unit_length")
                .with_message("ingredient unit must be at most 30 characters".into()));
        }
    }

    Ok(())
}
