// ABOUTME: Collaborator store ports the summary orchestrator reads through
// ABOUTME: In-process async point lookups; implementations own all persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Project

//! Store ports.
//!
//! These traits are the engine's only view of persistence. Absent rows are
//! `Ok(None)`; `Err` is reserved for infrastructure failures, which surface
//! to callers as [`crate::errors::AppError::Storage`]. Soft-delete
//! bookkeeping is an implementation concern: `find_owned` must already
//! exclude soft-deleted diaries.

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Diary, DiaryEntry, Food, FoodMacros, UserProfile};

/// Owner-scoped diary lookup
#[async_trait]
pub trait DiaryStore: Send + Sync {
    /// Find a diary by id belonging to `owner_id`, excluding soft-deleted
    /// rows. `None` when absent, deleted, or owned by someone else.
    async fn find_owned(&self, owner_id: Uuid, diary_id: Uuid) -> Result<Option<Diary>>;
}

/// Diary entry listing
#[async_trait]
pub trait DiaryEntryStore: Send + Sync {
    /// All entries of a diary in stable creation order; may be empty
    async fn list_by_diary(&self, diary_id: Uuid) -> Result<Vec<DiaryEntry>>;
}

/// Food catalog lookup (conversion view)
#[async_trait]
pub trait FoodStore: Send + Sync {
    /// Find a food by id, shared or user-owned
    async fn find_by_id(&self, food_id: Uuid) -> Result<Option<Food>>;
}

/// Per-100g macro profile lookup
#[async_trait]
pub trait FoodMacroStore: Send + Sync {
    /// Find the macro profile of a food
    async fn find_by_id(&self, food_id: Uuid) -> Result<Option<FoodMacros>>;
}

/// Localized food name lookup
#[async_trait]
pub trait FoodNameStore: Send + Sync {
    /// First available translated name for a food, locale-agnostic.
    /// `None` is acceptable; summaries then carry no display name.
    async fn first_name_for(&self, food_id: Uuid) -> Result<Option<String>>;
}

/// User profile lookup
#[async_trait]
pub trait UserProfileStore: Send + Sync {
    /// Profile of a diary owner. Every owner has one by construction, so an
    /// absent profile is a hard not-found at the orchestrator.
    async fn find_by_owner(&self, owner_id: Uuid) -> Result<Option<UserProfile>>;
}
