use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString, VariantArray};

#[derive(
    EnumString,
    Display,
    VariantArray,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    #[default]
    Dinner,
    Snack,
}

impl MealType {
    /// Position of the meal within a day.
    pub fn rank(&self) -> usize {
        match self {
            MealType::Breakfast => 0,
            MealType::Lunch => 1,
            MealType::Dinner => 2,
            MealType::Snack => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn round_trip_text() {
        for meal_type in MealType::VARIANTS {
            assert_eq!(
                MealType::from_str(meal_type.as_ref()).unwrap(),
                *meal_type
            );
        }
        assert_eq!(MealType::Breakfast.to_string(), "breakfast");
        assert!(MealType::from_str("brunch").is_err());
    }
}
