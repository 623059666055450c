//! Turbine iteration-order strategies.

use std::fmt;

use super::Model;

/// Decides the order in which turbines are evaluated.
pub trait TurbineOrder: Model {}

/// Keeps the order in which turbines were added to the farm.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FarmTurbineOrder;

impl Model for FarmTurbineOrder {}
impl TurbineOrder for FarmTurbineOrder {}

impl fmt::Display for FarmTurbineOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FarmTurbineOrder()")
    }
}

/// Sorts turbines downstream along the wind direction.
///
/// With `use_amb` set, the ambient wind direction is used; otherwise the
/// wake-affected direction at each rotor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindTurbineOrder {
    pub use_amb: bool,
}

impl Model for WindTurbineOrder {}
impl TurbineOrder for WindTurbineOrder {}

impl fmt::Display for WindTurbineOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindTurbineOrder(use_amb={})", self.use_amb)
    }
}

/// Sorts turbines along the wake-centreline geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WakeFrameTurbineOrder;

impl Model for WakeFrameTurbineOrder {}
impl TurbineOrder for WakeFrameTurbineOrder {}

impl fmt::Display for WakeFrameTurbineOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WakeFrameTurbineOrder()")
    }
}
