//! Domain Layer
//!
//! Pure types and rules of the generation pipeline.
//!
//! ## Structure
//!
//! - `entities/` - Virtual file tree, package models, project descriptor
//! - `value_objects/` - Immutable value types (paths, identity, policy, hash)
//! - `services/` - Classifier, test-source filter, retirement ledger
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
