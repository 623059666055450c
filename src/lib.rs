//! # Wake Model Book
//!
//! Named, pre-configured model variants for wind-farm wake-flow simulation,
//! and the reduction of that catalog to what a given farm references.
//!
//! Orchestration code builds one full [`book::ModelBook`] at startup, assigns
//! turbines their models by key, then calls [`book::ModelBook::reduce`] to get
//! the book a single run reads from.
//!
//! ## Crate layout
//!
//! - [`models`]: Model capability traits and the configured variants.
//! - [`book`]: The model book, its construction, and its reduction.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod book;
pub mod models;
pub mod support;
