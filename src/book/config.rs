use std::path::PathBuf;

/// Construction-time configuration of a [`ModelBook`](super::ModelBook).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookConfig {
    /// Turbine power and thrust curve file.
    ///
    /// When absent, the curve-based turbine model is not registered.
    pub ct_power_curve_file: Option<PathBuf>,
}

impl BookConfig {
    /// Sets the turbine curve file.
    #[must_use]
    pub fn with_ct_power_curve_file(self, path: impl Into<PathBuf>) -> Self {
        Self {
            ct_power_curve_file: Some(path.into()),
        }
    }
}
