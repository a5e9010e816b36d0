//! Business logic and repository trait definitions for UniConnect.
//!
//! This crate defines the "ports" (directory, session store, and
//! conversation repository traits) that the infrastructure layer
//! implements, plus the services that own the session lifecycle and the
//! messaging rules. It depends only on `uniconnect-types` -- never on
//! `uniconnect-infra` or any IO crate.

pub mod chat;
pub mod directory;
pub mod session;
