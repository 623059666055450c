//! Turbine controllers.

use std::fmt;

use super::Model;

/// Runs a turbine's behavior models and decides its operating state.
pub trait Controller: Model {}

/// Applies the turbine's behavior models in their listed order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WtcDefault;

impl Model for WtcDefault {}
impl Controller for WtcDefault {}

impl fmt::Display for WtcDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WTCDefault()")
    }
}
