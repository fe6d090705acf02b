// ABOUTME: Unit conversion engine turning (amount, unit, food factors) into grams
// ABOUTME: Volume units convert via density; pack/item via their per-food weights
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Project

//! Unit-to-grams conversion.
//!
//! | unit       | formula                  | required factor    |
//! |------------|--------------------------|--------------------|
//! | g          | amount                   | —                  |
//! | ml         | amount × density         | `density_g_per_ml` |
//! | cup        | amount × 240 × density   | `density_g_per_ml` |
//! | tablespoon | amount × 15 × density    | `density_g_per_ml` |
//! | teaspoon   | amount × 5 × density     | `density_g_per_ml` |
//! | pack       | amount × pack_g          | `pack_g`           |
//! | item       | amount × item_g          | `item_g`           |
//!
//! A required factor the food does not carry is a domain error
//! ([`AppError::MissingConversionFactor`]), not a crash; the caller aborts
//! the whole summary.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::errors::{AppError, AppResult};
use crate::models::{Food, FoodUnit};
use crate::rounding::round2;

/// Volume conversion constants (to milliliters)
const CUP_ML: Decimal = dec!(240);
const TABLESPOON_ML: Decimal = dec!(15);
const TEASPOON_ML: Decimal = dec!(5);

/// Convert an entry amount to grams using the food's conversion factors.
///
/// Pure decimal arithmetic; the result is rounded to 2 decimals, half-up.
///
/// # Errors
///
/// Returns [`AppError::MissingConversionFactor`] when the unit needs a
/// per-food factor the food does not carry.
pub fn grams_for(amount: Decimal, unit: FoodUnit, food: &Food) -> AppResult<Decimal> {
    let grams = match unit {
        FoodUnit::Gram => amount,
        FoodUnit::Milliliter => amount * density(food, unit)?,
        FoodUnit::Cup => amount * CUP_ML * density(food, unit)?,
        FoodUnit::Tablespoon => amount * TABLESPOON_ML * density(food, unit)?,
        FoodUnit::Teaspoon => amount * TEASPOON_ML * density(food, unit)?,
        FoodUnit::Pack => {
            let pack_g = food.pack_g.ok_or(AppError::MissingConversionFactor {
                unit,
                factor: "pack_g",
            })?;
            amount * pack_g
        }
        FoodUnit::Item => {
            let item_g = food.item_g.ok_or(AppError::MissingConversionFactor {
                unit,
                factor: "item_g",
            })?;
            amount * item_g
        }
    };
    Ok(round2(grams))
}

fn density(food: &Food, unit: FoodUnit) -> AppResult<Decimal> {
    food.density_g_per_ml
        .ok_or(AppError::MissingConversionFactor {
            unit,
            factor: "density_g_per_ml",
        })
}
