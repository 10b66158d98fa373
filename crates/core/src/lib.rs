//! Atelier portfolio domain library.
//!
//! Pure, I/O-free building blocks shared by the HTTP layer and its tests:
//! the catalog model, category filtering, URL-derived navigation state,
//! previous/next lookup for the detail page, and contact-form intake.

pub mod catalog;
pub mod contact;
pub mod detail;
pub mod error;
pub mod filter;
pub mod navigation;
