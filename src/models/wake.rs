//! Wake-deficit and wake-turbulence models.
//!
//! Every wake model carries a partial-wakes flag. When it is set, the model is
//! evaluated across the rotor points of the downstream turbine; when cleared,
//! it is evaluated once and applied to the whole rotor. The model book derives
//! a `_rotor` copy with the flag cleared for every model that has it set.

use std::fmt;

use uom::si::f64::Angle;

use crate::support::constraint::{
    Constrained, ConstraintResult, NonNegative, StrictlyPositive,
};

use super::{Model, rotor::display_degrees};

/// A wake model with switchable partial-wake evaluation.
pub trait WakeModel: Model {
    /// Whether the wake is evaluated at each rotor point of the waked turbine.
    fn partial_wakes(&self) -> bool;

    /// Switches partial-wake evaluation on or off.
    fn set_partial_wakes(&mut self, partial_wakes: bool);

    /// Returns an independently owned copy of this model.
    fn clone_box(&self) -> Box<dyn WakeModel>;
}

/// Top-hat wake of Jensen with linear expansion coefficient `k`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WMJensen {
    k: Constrained<f64, StrictlyPositive>,
    partial_wakes: bool,
}

impl WMJensen {
    /// Wake expansion coefficient used when none is given.
    pub const DEFAULT_K: f64 = 0.04;

    /// Creates a Jensen model with expansion coefficient `k`.
    ///
    /// # Errors
    ///
    /// Fails if `k` is not strictly positive.
    pub fn new(k: f64) -> ConstraintResult<Self> {
        Ok(Self {
            k: StrictlyPositive::new(k)?,
            partial_wakes: true,
        })
    }

    /// Wake expansion coefficient.
    #[must_use]
    pub fn k(&self) -> f64 {
        self.k.get()
    }
}

impl Model for WMJensen {}

impl WakeModel for WMJensen {
    fn partial_wakes(&self) -> bool {
        self.partial_wakes
    }

    fn set_partial_wakes(&mut self, partial_wakes: bool) {
        self.partial_wakes = partial_wakes;
    }

    fn clone_box(&self) -> Box<dyn WakeModel> {
        Box::new(*self)
    }
}

impl fmt::Display for WMJensen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WMJensen(k={}, partial_wakes={})",
            self.k.get(),
            self.partial_wakes
        )
    }
}

/// Gaussian wake of Bastankhah and Porté-Agel.
///
/// A non-zero `delta_wd` smears the wake over that spread of wind directions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WMBastankhah {
    k: Constrained<f64, StrictlyPositive>,
    delta_wd: Constrained<Angle, NonNegative>,
    partial_wakes: bool,
}

impl WMBastankhah {
    /// Wake growth rate used when none is given.
    pub const DEFAULT_K: f64 = 0.04;

    /// Creates a Bastankhah model with wake growth rate `k` and no smearing.
    ///
    /// # Errors
    ///
    /// Fails if `k` is not strictly positive.
    pub fn new(k: f64) -> ConstraintResult<Self> {
        Ok(Self {
            k: StrictlyPositive::new(k)?,
            delta_wd: NonNegative::zero(),
            partial_wakes: true,
        })
    }

    /// Smears the wake over a spread of `delta_wd` in wind direction.
    ///
    /// # Errors
    ///
    /// Fails if `delta_wd` is negative or `NaN`.
    pub fn with_smearing(self, delta_wd: Angle) -> ConstraintResult<Self> {
        Ok(Self {
            delta_wd: NonNegative::new(delta_wd)?,
            ..self
        })
    }

    /// Wake growth rate.
    #[must_use]
    pub fn k(&self) -> f64 {
        self.k.get()
    }

    /// Wind-direction spread the wake is smeared over.
    #[must_use]
    pub fn delta_wd(&self) -> Angle {
        self.delta_wd.get()
    }
}

impl Model for WMBastankhah {}

impl WakeModel for WMBastankhah {
    fn partial_wakes(&self) -> bool {
        self.partial_wakes
    }

    fn set_partial_wakes(&mut self, partial_wakes: bool) {
        self.partial_wakes = partial_wakes;
    }

    fn clone_box(&self) -> Box<dyn WakeModel> {
        Box::new(*self)
    }
}

impl fmt::Display for WMBastankhah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "WMBastankhah(k={}, delta_wd_deg={}, partial_wakes={})",
            self.k.get(),
            display_degrees(self.delta_wd.get()),
            self.partial_wakes
        )
    }
}

// Models without configuration beyond the partial-wakes flag.
macro_rules! flag_only_wake_model {
    ($(#[$doc:meta])* $name:ident, $display:literal, partial_wakes = $default:literal) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name {
            partial_wakes: bool,
        }

        impl $name {
            /// Creates the model with its default partial-wakes setting.
            #[must_use]
            pub fn new() -> Self {
                Self {
                    partial_wakes: $default,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Model for $name {}

        impl WakeModel for $name {
            fn partial_wakes(&self) -> bool {
                self.partial_wakes
            }

            fn set_partial_wakes(&mut self, partial_wakes: bool) {
                self.partial_wakes = partial_wakes;
            }

            fn clone_box(&self) -> Box<dyn WakeModel> {
                Box::new(*self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($display, "(partial_wakes={})"), self.partial_wakes)
            }
        }
    };
}

flag_only_wake_model! {
    /// Frandsen's momentum-conserving top-hat wake.
    WMFrandsen, "WMFrandsen", partial_wakes = true
}

flag_only_wake_model! {
    /// Porté-Agel's Gaussian wake with near-wake onset.
    WMPorteAgel, "WMPorteAgel", partial_wakes = true
}

flag_only_wake_model! {
    /// Bossanyi and Bottasso's yawed Gaussian wake.
    WMBotasso, "WMBotasso", partial_wakes = true
}

flag_only_wake_model! {
    /// Ishihara and Qian's wind-speed deficit.
    WMIshiharaWind, "WMIshiharaWind", partial_wakes = true
}

flag_only_wake_model! {
    /// Ishihara and Qian's added turbulence intensity.
    WMIshiharaTi, "WMIshiharaTI", partial_wakes = true
}

flag_only_wake_model! {
    /// IEC 61400-1 (2005) wake turbulence, evaluated at the rotor centre.
    WMIecTi2005, "WMIECTI2005", partial_wakes = false
}

flag_only_wake_model! {
    /// IEC 61400-1 (2019) wake turbulence, evaluated at the rotor centre.
    WMIecTi2019, "WMIECTI2019", partial_wakes = false
}

flag_only_wake_model! {
    /// Crespo and Hernández's added turbulence intensity.
    WMTiCrespoHernandez, "WMTICrespoHernandez", partial_wakes = true
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::angle::degree;

    #[test]
    fn clone_box_is_independent() {
        let original = WMJensen::new(0.07).unwrap();
        let mut copy = original.clone_box();
        copy.set_partial_wakes(false);

        assert!(original.partial_wakes());
        assert!(!copy.partial_wakes());
        assert_eq!(copy.to_string(), "WMJensen(k=0.07, partial_wakes=false)");
    }

    #[test]
    fn bastankhah_smearing() {
        let wm = WMBastankhah::new(WMBastankhah::DEFAULT_K)
            .unwrap()
            .with_smearing(Angle::new::<degree>(3.0))
            .unwrap();
        assert_relative_eq!(wm.delta_wd().get::<degree>(), 3.0, epsilon = 1e-12);
        assert_eq!(
            wm.to_string(),
            "WMBastankhah(k=0.04, delta_wd_deg=3, partial_wakes=true)"
        );

        assert!(
            WMBastankhah::new(0.04)
                .unwrap()
                .with_smearing(Angle::new::<degree>(-1.0))
                .is_err()
        );
    }

    #[test]
    fn invalid_expansion_coefficient() {
        assert!(WMJensen::new(0.0).is_err());
        assert!(WMBastankhah::new(-0.04).is_err());
    }

    #[test]
    fn flag_only_defaults() {
        assert!(WMFrandsen::new().partial_wakes());
        assert!(!WMIecTi2005::default().partial_wakes());
        assert_eq!(
            WMIshiharaTi::new().to_string(),
            "WMIshiharaTI(partial_wakes=true)"
        );
    }
}
