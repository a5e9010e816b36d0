//! Session lifecycle: the store port for the persisted record and the
//! service that owns restore/login/logout transitions.

pub mod service;
pub mod store;
