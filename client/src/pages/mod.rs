//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Shared handles (auth signal, session provider, post store)
//! arrive as props from `App`.

pub mod blogs;
pub mod create_post;
pub mod home;
pub mod login;
pub mod signup;
pub mod single_post;
