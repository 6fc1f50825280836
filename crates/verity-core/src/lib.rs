//! # verity-core
//!
//! Core types shared across all Verity crates.
//!
//! This crate provides the foundational domain model of the manuscript
//! verification workflow:
//! - Entity structs for submissions, reported analyses, verification results,
//!   reports, risk-of-bias assessments, and audit entries
//! - Status enums (submission lifecycle, analysis status, verdicts, thresholds)
//! - The append-only [`entities::AuditLog`] and its typed [`metadata::Metadata`]
//! - ID prefix constants and generation
//! - Millisecond timestamp serde adapters
//! - The persisted [`state::JournalState`] document and its settings

pub mod entities;
pub mod enums;
pub mod ids;
pub mod metadata;
pub mod state;
pub mod timestamp;
