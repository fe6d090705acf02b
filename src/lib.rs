// ABOUTME: Nutrition computation engine for a diary/food tracking backend
// ABOUTME: Unit conversion, macro/calorie aggregation, and health metric calculators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Project

#![deny(unsafe_code)]

//! # Nutrikit
//!
//! Persistence-agnostic core of a personal nutrition tracking backend. It
//! turns heterogeneous diary entries (amount + unit + food-specific
//! conversion factors) into grams, macronutrients, and Atwater calories,
//! aggregates them into per-meal and per-diary totals, and relates those
//! totals to the user's daily calorie goal and estimated daily intake
//! (Mifflin-St Jeor BMR scaled by an activity multiplier).
//!
//! All arithmetic is exact decimal with round-half-up at fixed scales; no
//! floating point is used anywhere in the computation path.
//!
//! ## Modules
//!
//! - **calculator**: BMI, BMR, and estimated daily intake from profile data
//! - **constants**: activity-level registry and the shared-catalog owner id
//! - **conversion**: unit-to-grams engine driven by per-food factors
//! - **aggregation**: macro scaling, calorie computation, ratio helpers
//! - **summary**: the `summarize` orchestrator producing a [`models::DiarySummary`]
//! - **stores**: collaborator ports the orchestrator reads through
//! - **errors**: typed domain errors with HTTP status mapping
//!
//! The crate owns no storage and performs no writes: every summary is a
//! fresh read-only projection over data fetched from the store ports at
//! call time.

/// Macro scaling, calorie computation, and goal-ratio helpers
pub mod aggregation;

/// Health metric calculators (BMI, Mifflin-St Jeor BMR, estimated intake)
pub mod calculator;

/// Activity-level registry and application-wide constants
pub mod constants;

/// Unit-to-grams conversion engine
pub mod conversion;

/// Typed domain errors with HTTP status mapping
pub mod errors;

/// Domain entities and computed summary DTOs
pub mod models;

/// Collaborator store ports (diary, entries, foods, macros, names, profile)
pub mod stores;

/// Diary summary orchestrator
pub mod summary;

mod rounding;

pub use constants::ActivityLevel;
pub use errors::{AppError, AppResult};
pub use summary::DiarySummaryService;
