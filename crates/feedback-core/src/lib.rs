//! Core types and trait definitions for the parent-feedback letter service.
//!
//! No HTTP or database dependencies live here.
//! The store backend and both HTTP surfaces depend on it.

// Native `async fn` in trait impls; the trait declarations carry `Send`.
#![allow(async_fn_in_trait)]

pub mod catalog;
pub mod error;
pub mod fixture;
pub mod form;
pub mod letter;
pub mod mapper;
pub mod store;

pub use error::{Error, Result};

#[cfg(test)]
pub(crate) mod testing;
