// ABOUTME: Diary and diary-entry views plus the fixed unit and meal enums
// ABOUTME: Entries arrive pre-validated; amount is positive, unit and meal are typed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Project

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::errors::AppError;

/// Measurement unit of a diary entry.
///
/// `g` needs no per-food factor; the four volume units require
/// `density_g_per_ml`, `pack` requires `pack_g`, `item` requires `item_g`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum FoodUnit {
    /// Grams (identity conversion)
    #[serde(rename = "g")]
    Gram,
    /// Milliliters, converted via density
    #[serde(rename = "ml")]
    Milliliter,
    /// Cups (240 ml), converted via density
    Cup,
    /// Tablespoons (15 ml), converted via density
    Tablespoon,
    /// Teaspoons (5 ml), converted via density
    Teaspoon,
    /// Packs, converted via `pack_g`
    Pack,
    /// Items/pieces, converted via `item_g`
    Item,
}

impl FoodUnit {
    /// Wire name of the unit, as stored on entries
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Gram => "g",
            Self::Milliliter => "ml",
            Self::Cup => "cup",
            Self::Tablespoon => "tablespoon",
            Self::Teaspoon => "teaspoon",
            Self::Pack => "pack",
            Self::Item => "item",
        }
    }
}

impl fmt::Display for FoodUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FoodUnit {
    type Err = AppError;

    /// Parse a raw unit string. Anything outside the seven supported units
    /// is [`AppError::UnsupportedUnit`]; upstream request validation should
    /// have rejected it already.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "g" => Ok(Self::Gram),
            "ml" => Ok(Self::Milliliter),
            "cup" => Ok(Self::Cup),
            "tablespoon" => Ok(Self::Tablespoon),
            "teaspoon" => Ok(Self::Teaspoon),
            "pack" => Ok(Self::Pack),
            "item" => Ok(Self::Item),
            other => Err(AppError::UnsupportedUnit(other.to_owned())),
        }
    }
}

/// Meal a diary entry belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Meal {
    /// Breakfast
    Breakfast,
    /// Lunch
    Lunch,
    /// Dinner
    Dinner,
    /// Snack between meals
    Snack,
}

impl Meal {
    /// Wire name of the meal
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl fmt::Display for Meal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Meal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" => Ok(Self::Snack),
            _ => Err(AppError::invalid_input("Invalid meal")),
        }
    }
}

/// One day's food diary.
///
/// The diary store filters soft-deleted rows; the engine never sees a
/// deletion marker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diary {
    /// Diary id
    pub id: Uuid,
    /// Owning user id
    pub owner_id: Uuid,
    /// Calendar day the diary covers
    pub date: NaiveDate,
    /// Free-form note
    pub comment: Option<String>,
}

/// A single logged food within a diary.
///
/// Invariant (enforced upstream at creation): `amount > 0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiaryEntry {
    /// Entry id
    pub id: Uuid,
    /// Diary this entry belongs to
    pub diary_id: Uuid,
    /// Referenced food
    pub food_id: Uuid,
    /// Amount eaten, in `unit`
    pub amount: Decimal,
    /// Measurement unit of `amount`
    pub unit: FoodUnit,
    /// Meal the entry belongs to
    pub meal: Meal,
    /// Free-form note
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_round_trips_through_strings() {
        for unit in [
            FoodUnit::Gram,
            FoodUnit::Milliliter,
            FoodUnit::Cup,
            FoodUnit::Tablespoon,
            FoodUnit::Teaspoon,
            FoodUnit::Pack,
            FoodUnit::Item,
        ] {
            assert_eq!(unit.as_str().parse::<FoodUnit>().ok(), Some(unit));
        }
    }

    #[test]
    fn unknown_unit_is_unsupported() {
        let err = "barrel".parse::<FoodUnit>();
        assert!(matches!(err, Err(AppError::UnsupportedUnit(u)) if u == "barrel"));
    }

    #[test]
    fn unit_serde_uses_wire_names() {
        assert_eq!(
            serde_json::to_string(&FoodUnit::Gram).ok().as_deref(),
            Some("\"g\"")
        );
        assert_eq!(
            serde_json::to_string(&FoodUnit::Tablespoon).ok().as_deref(),
            Some("\"tablespoon\"")
        );
    }

    #[test]
    fn meal_parsing() {
        assert_eq!("dinner".parse::<Meal>().ok(), Some(Meal::Dinner));
        assert!("brunch".parse::<Meal>().is_err());
    }
}
