//! Rules for combining overlapping wakes.

use std::fmt;

use super::Model;

/// Combines the contributions of several wakes at one point.
pub trait WakeSuperposition: Model {}

/// How turbulence-intensity contributions are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiRule {
    Linear,
    Quadratic,
    Max,
}

impl TiRule {
    /// Every rule, in registration order.
    pub const ALL: [Self; 3] = [Self::Linear, Self::Quadratic, Self::Max];

    /// Lower-case rule name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Quadratic => "quadratic",
            Self::Max => "max",
        }
    }
}

/// Turbulence-intensity superposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiSuperposition {
    pub rule: TiRule,
}

impl Model for TiSuperposition {}
impl WakeSuperposition for TiSuperposition {}

impl fmt::Display for TiSuperposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TISuperposition(ti_superp={})", self.rule.name())
    }
}

/// How wind-speed deficits are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindRule {
    Linear,
    Quadratic,
}

impl WindRule {
    /// Every rule, in registration order.
    pub const ALL: [Self; 2] = [Self::Linear, Self::Quadratic];

    /// Lower-case rule name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Quadratic => "quadratic",
        }
    }
}

/// Toggles of a [`WindSuperposition`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindSuperpOptions {
    /// Deficits are relative to the ambient rather than the local wind speed.
    pub use_ambws: bool,

    /// The combined deficit is capped at 100%.
    pub limit_wake: bool,
}

impl WindSuperpOptions {
    /// All four toggle combinations, in registration order.
    pub const ALL: [Self; 4] = [
        Self {
            use_ambws: false,
            limit_wake: false,
        },
        Self {
            use_ambws: true,
            limit_wake: false,
        },
        Self {
            use_ambws: false,
            limit_wake: true,
        },
        Self {
            use_ambws: true,
            limit_wake: true,
        },
    ];
}

/// Additive wind-speed deficit superposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindSuperposition {
    pub rule: WindRule,
    pub options: WindSuperpOptions,
}

impl Model for WindSuperposition {}
impl WakeSuperposition for WindSuperposition {}

impl fmt::Display for WindSuperposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self.rule {
            WindRule::Linear => "WindSuperpLinear",
            WindRule::Quadratic => "WindSuperpQuadratic",
        };
        write!(
            f,
            "{name}(use_ambws={}, limit_wake={})",
            self.options.use_ambws, self.options.limit_wake
        )
    }
}

/// Multiplicative wind-speed superposition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindSuperpProduct;

impl Model for WindSuperpProduct {}
impl WakeSuperposition for WindSuperpProduct {}

impl fmt::Display for WindSuperpProduct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindSuperpProduct()")
    }
}
