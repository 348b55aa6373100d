//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are presentational. Shared state arrives as explicit props from
//! the page that renders them; none of them reads ambient context.

pub mod features;
pub mod fetch_status;
pub mod header;
pub mod hero;
pub mod post_card;
