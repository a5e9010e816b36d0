//! Shared domain types for the UniConnect client core.
//!
//! This crate contains the domain types used across the UniConnect
//! workspace: users, sessions, conversations, messages, and their
//! associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod conversation;
pub mod error;
pub mod message;
pub mod session;
pub mod user;
