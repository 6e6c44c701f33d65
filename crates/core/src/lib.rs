//! Domain layer for the character catalog.
//!
//! Holds the record store, the form vocabulary and synchronisation logic,
//! the story composer and the presentation view models. Nothing in this
//! crate performs I/O; the HTTP surface lives in `catalog-api` and the
//! upstream clients in `catalog-bridge`.

pub mod character;
pub mod error;
pub mod form;
pub mod presentation;
pub mod record;
pub mod store;
pub mod story;
pub mod types;
pub mod universe;
pub mod vocabulary;
