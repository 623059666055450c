//! The model book: every named model variant a simulation can select.
//!
//! A full book is built once, at startup, from a [`BookConfig`]. Turbines
//! refer to its entries by key. Before a run, [`ModelBook::reduce`] produces a
//! smaller book holding only what the farm's turbines reference, and that is
//! the book the simulation reads.
//!
//! # Example
//!
//! ```
//! use wake_model_book::book::{BookConfig, ModelBook, TurbineModels};
//!
//! let book = ModelBook::new(&BookConfig::default()).unwrap();
//! assert!(book.wake_models().contains_key("Jensen_rotor"));
//!
//! let turbines = [
//!     TurbineModels::new("centre").with_wake_model("Jensen"),
//!     TurbineModels::new("grid400").with_wake_model("Jensen_rotor"),
//! ];
//! let reduced = book.reduce(&turbines).unwrap();
//!
//! assert_eq!(
//!     reduced.rotor_models().keys().collect::<Vec<_>>(),
//!     ["centre", "grid400"]
//! );
//! ```

mod build;
mod config;
mod error;
mod kind;
mod reduce;
mod registry;
mod turbine;

#[cfg(test)]
mod test_support;

pub use config::BookConfig;
pub use error::{BuildError, LookupError};
pub use kind::ModelKind;
pub use registry::Registry;
pub use turbine::{TurbineInfo, TurbineModels};

use std::fmt;

use crate::models::{
    Controller, FarmCalcModel, RotorModel, TurbineModel, TurbineOrder, WakeFrame, WakeModel,
    WakeSuperposition,
};

/// Suffix of the partial-wake-free copy derived from a wake model key.
pub const ROTOR_SUFFIX: &str = "_rotor";

/// Named model variants, grouped by kind.
///
/// Mappings are read-only once built. The only way to obtain a different book
/// is to build one or to [`reduce`](Self::reduce) an existing one.
#[derive(Debug, Clone)]
pub struct ModelBook {
    rotor_models: Registry<dyn RotorModel>,
    turbine_models: Registry<dyn TurbineModel>,
    turbine_orders: Registry<dyn TurbineOrder>,
    controllers: Registry<dyn Controller>,
    wake_models: Registry<dyn WakeModel>,
    wake_superp: Registry<dyn WakeSuperposition>,
    wake_frames: Registry<dyn WakeFrame>,
    vert_profiles: Registry<str>,
    farm_calc_models: Registry<dyn FarmCalcModel>,
}

impl ModelBook {
    /// Builds the full model book.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] if the curve file cannot be read, or if the
    /// book's own registrations collide or carry invalid parameters.
    pub fn new(config: &BookConfig) -> Result<Self, BuildError> {
        build::build(config)
    }

    /// Builds the full model book without a turbine curve file.
    ///
    /// # Errors
    ///
    /// See [`ModelBook::new`].
    pub fn try_default() -> Result<Self, BuildError> {
        Self::new(&BookConfig::default())
    }

    #[must_use]
    pub fn rotor_models(&self) -> &Registry<dyn RotorModel> {
        &self.rotor_models
    }

    #[must_use]
    pub fn turbine_models(&self) -> &Registry<dyn TurbineModel> {
        &self.turbine_models
    }

    #[must_use]
    pub fn turbine_orders(&self) -> &Registry<dyn TurbineOrder> {
        &self.turbine_orders
    }

    #[must_use]
    pub fn controllers(&self) -> &Registry<dyn Controller> {
        &self.controllers
    }

    #[must_use]
    pub fn wake_models(&self) -> &Registry<dyn WakeModel> {
        &self.wake_models
    }

    #[must_use]
    pub fn wake_superp(&self) -> &Registry<dyn WakeSuperposition> {
        &self.wake_superp
    }

    #[must_use]
    pub fn wake_frames(&self) -> &Registry<dyn WakeFrame> {
        &self.wake_frames
    }

    /// Vertical profile formula identifiers, by key.
    #[must_use]
    pub fn vert_profiles(&self) -> &Registry<str> {
        &self.vert_profiles
    }

    #[must_use]
    pub fn farm_calc_models(&self) -> &Registry<dyn FarmCalcModel> {
        &self.farm_calc_models
    }

    /// Keys of the mapping of `kind`, in sorted order.
    #[must_use]
    pub fn keys(&self, kind: ModelKind) -> Vec<&str> {
        match kind {
            ModelKind::RotorModels => self.rotor_models.keys().collect(),
            ModelKind::TurbineModels => self.turbine_models.keys().collect(),
            ModelKind::TurbineOrders => self.turbine_orders.keys().collect(),
            ModelKind::Controllers => self.controllers.keys().collect(),
            ModelKind::WakeModels => self.wake_models.keys().collect(),
            ModelKind::WakeSuperpositions => self.wake_superp.keys().collect(),
            ModelKind::WakeFrames => self.wake_frames.keys().collect(),
            ModelKind::VerticalProfiles => self.vert_profiles.keys().collect(),
            ModelKind::FarmCalcModels => self.farm_calc_models.keys().collect(),
        }
    }
}

fn write_section<M>(f: &mut fmt::Formatter<'_>, title: &str, registry: &Registry<M>) -> fmt::Result
where
    M: fmt::Display + ?Sized,
{
    write!(f, "{title}:")?;
    if registry.is_empty() {
        return write!(f, "\n  (None)");
    }
    for (key, model) in registry.iter() {
        write!(f, "\n  {key} -- {model}")?;
    }
    Ok(())
}

/// Lists rotor models, controllers, turbine models, wake frames and wake models.
impl fmt::Display for ModelBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_section(f, "Rotor models", &self.rotor_models)?;
        writeln!(f)?;
        write_section(f, "Controllers", &self.controllers)?;
        writeln!(f)?;
        write_section(f, "Turbine models", &self.turbine_models)?;
        writeln!(f)?;
        write_section(f, "Wake centreline models", &self.wake_frames)?;
        writeln!(f)?;
        write_section(f, "Wake models", &self.wake_models)
    }
}
