//! Domain types shared by the store client, session provider, and views.
//!
//! DESIGN
//! ======
//! Wire encodings live in `net`; these types stay free of transport details so
//! pages and tests can build them directly.

pub mod date;
pub mod post;
pub mod session;
