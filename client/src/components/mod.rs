//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome, landing sections and lesson widgets while
//! reading/writing shared state from Leptos context providers.

pub mod admin_layout;
pub mod chatbot;
pub mod comment_section;
pub mod confirm_dialog;
pub mod course_card;
pub mod faq;
pub mod features;
pub mod footer;
pub mod group_selector;
pub mod hero;
pub mod language_selector;
pub mod lesson_player;
pub mod navbar;
pub mod package_card;
pub mod pricing;
pub mod sidebar_tree;
pub mod text_field;
