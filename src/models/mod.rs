// ABOUTME: Domain entities and computed summary DTOs for the nutrition engine
// ABOUTME: Entities are read-only views over externally persisted records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Project

//! Data model.
//!
//! Entities (`Diary`, `DiaryEntry`, `Food`, `FoodMacros`, `UserProfile`) are
//! views over records the collaborator stores own; the engine never persists
//! or mutates them. Summary DTOs are ephemeral: built fresh on every
//! summarize call and never mutated after construction.

/// Diary, diary entries, and their unit/meal enums
pub mod diary;

/// Food conversion view and per-100g macro profile
pub mod food;

/// User profile view consumed by the health calculators
pub mod profile;

/// Computed summary DTOs (entry, meal, diary) and the Macros value type
pub mod summary;

pub use diary::{Diary, DiaryEntry, FoodUnit, Meal};
pub use food::{Food, FoodMacros};
pub use profile::UserProfile;
pub use summary::{DiarySummary, EntrySummary, Macros, MealSummary};
