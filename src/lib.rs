//! Pagefile - save and load titled pages as plain files
//!
//! A page is a title plus an opaque body. Saving writes the body to
//! `<title>.txt`; loading reads it back and pairs it with the title
//! supplied by the caller. The file holds nothing but the body bytes.

pub mod domain;
pub mod storage;
pub mod cli;

pub use domain::{filename, Document, PAGE_EXTENSION};
pub use storage::{load, save, StoreError};
