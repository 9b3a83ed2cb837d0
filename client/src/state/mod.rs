//! Client state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` and `ui` are provided app-wide as `RwSignal` contexts. The others are
//! page-local state machines (progress, catalog tree, quiz session, chat) that
//! pages wrap in their own signals.

pub mod auth;
pub mod catalog;
pub mod chat;
pub mod progress;
pub mod quiz;
pub mod ui;
