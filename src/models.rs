//! Pre-configured wake-flow model variants.
//!
//! The physics behind each model lives with the simulation that evaluates it.
//! The types here carry only what identifies a variant: its kind and its
//! configuration. That is what the [`ModelBook`](crate::book::ModelBook)
//! registers under a stable key.
//!
//! # Organization
//!
//! One submodule per mapping kind of the model book, each with its own
//! capability trait extending [`Model`]:
//!
//! - [`rotor`]: [`RotorModel`] rotor-averaging schemes
//! - [`turbine`]: [`TurbineModel`] turbine behavior models
//! - [`order`]: [`TurbineOrder`] turbine iteration-order strategies
//! - [`controller`]: [`Controller`] turbine controllers
//! - [`wake`]: [`WakeModel`] wake-deficit and wake-turbulence models
//! - [`superposition`]: [`WakeSuperposition`] rules for combining wakes
//! - [`frame`]: [`WakeFrame`] wake-centreline models
//! - [`farm_calc`]: [`FarmCalcModel`] farm-level auxiliary calculations
//! - [`profile`]: vertical wind-profile formula identifiers

use std::fmt::{Debug, Display};

pub mod controller;
pub mod farm_calc;
pub mod frame;
pub mod order;
pub mod profile;
pub mod rotor;
pub mod superposition;
pub mod turbine;
pub mod wake;

pub use controller::Controller;
pub use farm_calc::FarmCalcModel;
pub use frame::WakeFrame;
pub use order::TurbineOrder;
pub use profile::VerticalProfile;
pub use rotor::RotorModel;
pub use superposition::WakeSuperposition;
pub use turbine::TurbineModel;
pub use wake::WakeModel;

/// The uniform capability of every model stored in a model book.
///
/// The [`Display`] output is the model's own description, used when the book
/// is printed.
pub trait Model: Display + Debug + Send + Sync {}
