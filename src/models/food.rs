// ABOUTME: Food conversion view and per-100g macronutrient profile
// ABOUTME: Optional factors gate which units a food can be logged in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Project

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Conversion view of a catalog food.
///
/// Each factor, when present, is positive (enforced upstream). A food
/// supports volume units only with `density_g_per_ml`, `pack` only with
/// `pack_g`, and `item` only with `item_g`; grams are always supported.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    /// Food id
    pub id: Uuid,
    /// Grams per milliliter, for volume conversions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density_g_per_ml: Option<Decimal>,
    /// Grams per pack
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pack_g: Option<Decimal>,
    /// Grams per item/piece
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_g: Option<Decimal>,
}

impl Food {
    /// View with no conversion factors: only the `g` unit is usable
    #[must_use]
    pub const fn weight_only(id: Uuid) -> Self {
        Self {
            id,
            density_g_per_ml: None,
            pack_g: None,
            item_g: None,
        }
    }
}

/// Macronutrients per 100 g of a food, each component ≥ 0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodMacros {
    /// Food this profile belongs to
    pub food_id: Uuid,
    /// Protein grams per 100 g
    pub protein_g: Decimal,
    /// Fat grams per 100 g
    pub fat_g: Decimal,
    /// Carbohydrate grams per 100 g
    pub carb_g: Decimal,
}
