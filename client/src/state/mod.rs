//! Client state shared across pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns the signed-in user, `auth` is its reactive mirror for
//! guards and the header, and `fetch` drives the load/render lifecycle of
//! the post views.

pub mod auth;
pub mod fetch;
pub mod session;
