//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, loading, redirects) and
//! delegates rendering details to `components`.

pub mod admin;
pub mod course_view;
pub mod dashboard;
pub mod landing;
pub mod lesson;
pub mod login;
pub mod not_found;
pub mod packages;
pub mod payment;
pub mod profile;
pub mod quiz;
pub mod register;
pub mod verify_email;
