//! # komplex-core
//!
//! Core types, ID prefixes, and error types for KOMPLEX.
//!
//! This crate provides the foundational types shared across all KOMPLEX crates:
//! - Entity structs for courses, lessons, assignments, quizzes, and enrollments
//! - Status enums with state machine transitions
//! - ID prefix constants
//! - The weighted progress formula and quiz grading (pure, no I/O)
//! - Trail operation envelope for JSONL activity logs
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod grading;
pub mod ids;
pub mod progress;
pub mod responses;
pub mod trail;
