//! Use-case services over the record store.
//!
//! # Responsibility
//! - Orchestrate load-mutate-save cycles into caller-facing operations.
//! - Keep UI layers decoupled from storage and row-format details.

pub mod exam_service;
