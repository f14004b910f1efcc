//! Domain models for Pagefile
//!
//! Contains the in-memory page representation without any I/O concerns.

mod document;

pub use document::{filename, Document, PAGE_EXTENSION};
