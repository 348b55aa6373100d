//! Networking modules for the hosted document store and identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `http` is the transport seam, `firestore` defines the document wire schema,
//! `store` implements post persistence on top of both, and `identity` wraps
//! the sign-in REST endpoints.

pub mod firestore;
pub mod http;
pub mod identity;
pub mod store;
