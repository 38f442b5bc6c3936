//! Core types and trait definitions for the attendance store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! The store backend and the API layer both depend on it.

pub mod attendance;
pub mod store;
pub mod student;
