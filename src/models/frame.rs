//! Wake-centreline models.
//!
//! A wake frame defines the trajectory a wake follows downstream of its rotor.

use std::fmt;

use super::Model;

/// A wake-centreline trajectory model.
pub trait WakeFrame: Model {}

macro_rules! wake_frame {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl Model for $name {}
        impl WakeFrame for $name {}

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "()"))
            }
        }
    };
}

wake_frame! {
    /// Straight wakes aligned with the ambient wind direction.
    AmbientWindFrame
}

wake_frame! {
    /// Straight wakes aligned with the wind direction at the rotor.
    RotorWindFrame
}

wake_frame! {
    /// Wakes deflected sideways by rotor yaw misalignment.
    YawDeflectionFrame
}

wake_frame! {
    /// Wakes that follow streamlines of the ambient flow field.
    StreamlineFrame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(AmbientWindFrame.to_string(), "AmbientWindFrame()");
        assert_eq!(StreamlineFrame.to_string(), "StreamlineFrame()");
    }
}
