// ABOUTME: Diary summary orchestrator: fetch, convert, aggregate, relate to goals
// ABOUTME: Single linear read-only pipeline; any entry failure aborts the whole call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Project

//! Diary summarization.
//!
//! `summarize` is all-or-nothing: a missing food, macro record, or
//! conversion factor fails the entire call; partial summaries are never
//! returned. Health-metric gaps are the one exception — a profile without
//! body metrics produces a summary whose percentage fields are unset.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::aggregation::{kcal_for, macros_for, ratio_or_null, sum_kcal, sum_macros};
use crate::calculator;
use crate::conversion::grams_for;
use crate::errors::{AppError, AppResult};
use crate::models::{
    DiarySummary, EntrySummary, Food, FoodMacros, Macros, Meal, MealSummary,
};
use crate::stores::{
    DiaryEntryStore, DiaryStore, FoodMacroStore, FoodNameStore, FoodStore, UserProfileStore,
};

/// Computes diary summaries from the collaborator stores.
///
/// Holds only store handles; every summarize call is a fresh read-only
/// projection with no caching between calls.
pub struct DiarySummaryService {
    diaries: Arc<dyn DiaryStore>,
    entries: Arc<dyn DiaryEntryStore>,
    foods: Arc<dyn FoodStore>,
    food_macros: Arc<dyn FoodMacroStore>,
    food_names: Arc<dyn FoodNameStore>,
    profiles: Arc<dyn UserProfileStore>,
}

impl DiarySummaryService {
    /// Wire the service to its collaborator stores
    #[must_use]
    pub fn new(
        diaries: Arc<dyn DiaryStore>,
        entries: Arc<dyn DiaryEntryStore>,
        foods: Arc<dyn FoodStore>,
        food_macros: Arc<dyn FoodMacroStore>,
        food_names: Arc<dyn FoodNameStore>,
        profiles: Arc<dyn UserProfileStore>,
    ) -> Self {
        Self {
            diaries,
            entries,
            foods,
            food_macros,
            food_names,
            profiles,
        }
    }

    /// Summarize one diary for its owner.
    ///
    /// Pipeline: resolve diary → list entries → resolve referenced foods →
    /// convert each entry to grams → compute entry macros/kcal → group into
    /// meals → fetch profile → compute BMR/TDEE and goal ratios → assemble.
    /// Conversion runs before the profile fetch, so a bad entry surfaces as
    /// `MissingConversionFactor` even when the profile is also absent.
    ///
    /// # Errors
    ///
    /// [`AppError::NotFound`] when the diary, a referenced food, its macro
    /// record, or the owner's profile is absent;
    /// [`AppError::MissingConversionFactor`] when an entry's unit needs a
    /// factor its food lacks; [`AppError::Storage`] on store failures.
    #[tracing::instrument(skip(self), level = "debug")]
    pub async fn summarize(&self, owner_id: Uuid, diary_id: Uuid) -> AppResult<DiarySummary> {
        let diary = self
            .diaries
            .find_owned(owner_id, diary_id)
            .await?
            .ok_or_else(|| AppError::not_found("Diary not found"))?;
        let entries = self.entries.list_by_diary(diary.id).await?;
        debug!(entry_count = entries.len(), "resolved diary entries");

        // Resolve each distinct referenced food once
        let mut foods: HashMap<Uuid, Food> = HashMap::new();
        let mut macros_by_food: HashMap<Uuid, FoodMacros> = HashMap::new();
        let mut names: HashMap<Uuid, Option<String>> = HashMap::new();
        for entry in &entries {
            if foods.contains_key(&entry.food_id) {
                continue;
            }
            let food_id = entry.food_id;
            let food = self
                .foods
                .find_by_id(food_id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Food not found: {food_id}")))?;
            let macros = self
                .food_macros
                .find_by_id(food_id)
                .await?
                .ok_or_else(|| AppError::not_found(format!("Food macros not found: {food_id}")))?;
            let name = self.food_names.first_name_for(food_id).await?;
            foods.insert(food_id, food);
            macros_by_food.insert(food_id, macros);
            names.insert(food_id, name);
        }
        debug!(food_count = foods.len(), "resolved referenced foods");

        // Per-entry conversion and macro computation, meal kept for grouping
        let mut rows: Vec<(Meal, EntrySummary)> = Vec::with_capacity(entries.len());
        for entry in &entries {
            let food = foods
                .get(&entry.food_id)
                .ok_or_else(|| AppError::not_found(format!("Food not found: {}", entry.food_id)))?;
            let per_100g = macros_by_food.get(&entry.food_id).ok_or_else(|| {
                AppError::not_found(format!("Food macros not found: {}", entry.food_id))
            })?;
            let grams = grams_for(entry.amount, entry.unit, food)?;
            let macros = macros_for(grams, per_100g);
            let kcal = kcal_for(&macros);
            rows.push((
                entry.meal,
                EntrySummary {
                    id: entry.id,
                    food_id: entry.food_id,
                    food_name: names.get(&entry.food_id).cloned().flatten(),
                    amount: entry.amount,
                    unit: entry.unit,
                    grams,
                    kcal,
                    macros,
                },
            ));
        }

        // Group into meals in first-seen order
        let mut meal_order: Vec<Meal> = Vec::new();
        let mut by_meal: HashMap<Meal, Vec<EntrySummary>> = HashMap::new();
        for (meal, row) in rows {
            if !by_meal.contains_key(&meal) {
                meal_order.push(meal);
            }
            by_meal.entry(meal).or_default().push(row);
        }
        let mut meal_totals: Vec<(Meal, Macros, Decimal, Vec<EntrySummary>)> =
            Vec::with_capacity(meal_order.len());
        for meal in meal_order {
            let items = by_meal.remove(&meal).unwrap_or_default();
            let macros = sum_macros(items.iter().map(|item| &item.macros));
            let kcal = sum_kcal(items.iter().map(|item| &item.kcal));
            meal_totals.push((meal, macros, kcal, items));
        }

        let total_macros = sum_macros(meal_totals.iter().map(|(_, macros, _, _)| macros));
        let total_kcal = sum_kcal(meal_totals.iter().map(|(_, _, kcal, _)| kcal));

        // Denominators come from the owner's profile; fetched only after
        // conversion so entry errors win over a missing profile
        let profile = self
            .profiles
            .find_by_owner(owner_id)
            .await?
            .ok_or_else(|| AppError::not_found("User profile not found"))?;
        let as_of = Utc::now().date_naive();
        let bmr = calculator::bmr_mifflin_st_jeor(
            profile.gender.as_deref(),
            profile.date_of_birth,
            profile.current_weight_kg,
            profile.height_cm,
            as_of,
        );
        let tdee = calculator::estimated_daily_intake(bmr, Some(profile.activity_level.as_str()));
        let goal = profile.daily_calorie_goal_kcal;
        debug!(
            bmr = bmr.map(|v| v.to_string()),
            tdee = tdee.map(|v| v.to_string()),
            goal = goal.map(|v| v.to_string()),
            "resolved intake denominators"
        );

        let meals = meal_totals
            .into_iter()
            .map(|(meal, macros, kcal, items)| MealSummary {
                meal,
                total_kcal: kcal,
                percent_of_daily_goal: ratio_or_null(kcal, goal),
                percent_of_estimated_intake: ratio_or_null(kcal, tdee),
                macros,
                entries: items,
            })
            .collect();

        Ok(DiarySummary {
            diary_id: diary.id,
            owner_id: diary.owner_id,
            date: diary.date,
            total_kcal,
            percent_of_daily_goal: ratio_or_null(total_kcal, goal),
            percent_of_estimated_intake: ratio_or_null(total_kcal, tdee),
            macros: total_macros,
            meals,
        })
    }
}
