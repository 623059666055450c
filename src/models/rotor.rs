//! Rotor-averaging models.
//!
//! A rotor model decides where on the rotor disk the flow is sampled. The
//! number of sampling points is fixed by the configuration, and the generated
//! rotor families in the model book are keyed by it.

use std::fmt;

use uom::si::{angle::degree, f64::Angle};

use crate::support::constraint::{Constrained, ConstraintResult, NonNegative, StrictlyPositive};

use super::Model;

/// A rotor-averaging scheme.
pub trait RotorModel: Model {
    /// Number of points at which the rotor disk is evaluated.
    fn n_points(&self) -> usize;
}

/// Evaluates the flow at the rotor centre only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RMCentre;

impl Model for RMCentre {}

impl RotorModel for RMCentre {
    fn n_points(&self) -> usize {
        1
    }
}

impl fmt::Display for RMCentre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RMCentre()")
    }
}

/// Evaluates the flow on a fixed five-point stencil (centre plus four).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RMStencil;

impl Model for RMStencil {}

impl RotorModel for RMStencil {
    fn n_points(&self) -> usize {
        5
    }
}

impl fmt::Display for RMStencil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RMStencil()")
    }
}

/// Centre point plus one ring of `n` equally spaced points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RMRing {
    n: Constrained<u32, StrictlyPositive>,
}

impl RMRing {
    /// Creates a ring model with `n` points on the ring.
    ///
    /// # Errors
    ///
    /// Fails if `n` is zero.
    pub fn new(n: u32) -> ConstraintResult<Self> {
        Ok(Self {
            n: StrictlyPositive::new(n)?,
        })
    }

    /// Points on the ring, excluding the centre.
    #[must_use]
    pub fn n(&self) -> u32 {
        self.n.get()
    }
}

impl Model for RMRing {}

impl RotorModel for RMRing {
    fn n_points(&self) -> usize {
        self.n.get() as usize + 1
    }
}

impl fmt::Display for RMRing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RMRing(n={})", self.n.get())
    }
}

/// Configuration of one ring in a [`RMRings`] model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ring {
    /// Points on this ring.
    pub m: Constrained<u32, StrictlyPositive>,

    /// Angular position of the first point.
    pub angle0: Constrained<Angle, NonNegative>,
}

impl Ring {
    /// Creates a ring starting at zero angle.
    ///
    /// # Errors
    ///
    /// Fails if `m` is zero.
    pub fn new(m: u32) -> ConstraintResult<Self> {
        Ok(Self {
            m: StrictlyPositive::new(m)?,
            angle0: NonNegative::zero(),
        })
    }

    /// Sets the angular position of the first point.
    ///
    /// # Errors
    ///
    /// Fails if the angle is negative or `NaN`.
    pub fn with_angle0(self, angle0: Angle) -> ConstraintResult<Self> {
        Ok(Self {
            angle0: NonNegative::new(angle0)?,
            ..self
        })
    }
}

/// Centre point plus several concentric rings.
#[derive(Debug, Clone, PartialEq)]
pub struct RMRings {
    rings: Vec<Ring>,
}

impl RMRings {
    /// Creates a multi-ring model, innermost ring first.
    #[must_use]
    pub fn new(rings: Vec<Ring>) -> Self {
        Self { rings }
    }

    /// Creates a multi-ring model from point counts, all rings starting at zero angle.
    ///
    /// # Errors
    ///
    /// Fails if any count is zero.
    pub fn from_counts(counts: &[u32]) -> ConstraintResult<Self> {
        let rings = counts
            .iter()
            .map(|&m| Ring::new(m))
            .collect::<ConstraintResult<Vec<_>>>()?;
        Ok(Self::new(rings))
    }

    /// The configured rings, innermost first.
    #[must_use]
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }
}

impl Model for RMRings {}

impl RotorModel for RMRings {
    fn n_points(&self) -> usize {
        1 + self
            .rings
            .iter()
            .map(|ring| ring.m.get() as usize)
            .sum::<usize>()
    }
}

impl fmt::Display for RMRings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m: Vec<String> = self.rings.iter().map(|r| r.m.get().to_string()).collect();
        let angle0: Vec<String> = self
            .rings
            .iter()
            .map(|r| display_degrees(r.angle0.get()))
            .collect();
        write!(
            f,
            "RMRings(m=[{}], angle0_deg=[{}])",
            m.join(", "),
            angle0.join(", ")
        )
    }
}

/// Regular `n` by `n` grid over the rotor disk.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RMGrid {
    n: Constrained<u32, StrictlyPositive>,
}

impl RMGrid {
    /// Creates a grid model with side length `n`.
    ///
    /// # Errors
    ///
    /// Fails if `n` is zero.
    pub fn new(n: u32) -> ConstraintResult<Self> {
        Ok(Self {
            n: StrictlyPositive::new(n)?,
        })
    }

    /// Points along one side of the grid.
    #[must_use]
    pub fn n(&self) -> u32 {
        self.n.get()
    }
}

impl Model for RMGrid {}

impl RotorModel for RMGrid {
    fn n_points(&self) -> usize {
        let n = self.n.get() as usize;
        n * n
    }
}

impl fmt::Display for RMGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RMGrid(n={})", self.n.get())
    }
}

/// Formats an angle in degrees, hiding radian round-trip noise.
pub(crate) fn display_degrees(angle: Angle) -> String {
    let deg = (angle.get::<degree>() * 1e9).round() / 1e9;
    deg.to_string()
}
