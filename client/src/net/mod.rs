//! Networking modules for the REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns request plumbing and token handling, the `api_*` modules map
//! one resource family each onto it, `error` classifies failures and `types`
//! defines the wire schema.

pub mod api;
pub mod api_auth;
pub mod api_catalog;
pub mod api_student;
pub mod error;
pub mod types;
