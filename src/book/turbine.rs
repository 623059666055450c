//! What the model book needs to know about a turbine.

use super::ModelKind;

/// Model book keys referenced by one turbine.
///
/// Turbine behavior models and wake models are ordered lists, applied in
/// order; every other kind is a single key.
pub trait TurbineInfo {
    fn rotor_model(&self) -> &str;
    fn turbine_models(&self) -> &[String];
    fn controller(&self) -> &str;
    fn wake_models(&self) -> &[String];
    fn wake_frame(&self) -> &str;

    /// Keys this turbine references in the mapping of `kind`, in order.
    ///
    /// Kinds that turbines never reference yield no keys.
    fn referenced_keys(&self, kind: ModelKind) -> Vec<&str> {
        match kind {
            ModelKind::RotorModels => vec![self.rotor_model()],
            ModelKind::TurbineModels => self.turbine_models().iter().map(String::as_str).collect(),
            ModelKind::Controllers => vec![self.controller()],
            ModelKind::WakeModels => self.wake_models().iter().map(String::as_str).collect(),
            ModelKind::WakeFrames => vec![self.wake_frame()],
            ModelKind::TurbineOrders
            | ModelKind::WakeSuperpositions
            | ModelKind::VerticalProfiles
            | ModelKind::FarmCalcModels => Vec::new(),
        }
    }
}

/// A plain bundle of model keys for one turbine.
///
/// # Example
///
/// ```
/// use wake_model_book::book::{TurbineInfo, TurbineModels};
///
/// let t = TurbineModels::new("centre")
///     .with_wake_model("Jensen")
///     .with_turbine_model("yawm2yaw");
///
/// assert_eq!(t.rotor_model(), "centre");
/// assert_eq!(t.controller(), "default");
/// assert_eq!(t.wake_models(), ["Jensen"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurbineModels {
    pub rotor_model: String,
    pub turbine_models: Vec<String>,
    pub controller: String,
    pub wake_models: Vec<String>,
    pub wake_frame: String,
}

impl TurbineModels {
    /// Controller key used unless another is set.
    pub const DEFAULT_CONTROLLER: &'static str = "default";

    /// Wake frame key used unless another is set.
    pub const DEFAULT_WAKE_FRAME: &'static str = "rotor_wind";

    /// Creates a bundle with the given rotor model, the default controller,
    /// the default wake frame, and no behavior or wake models.
    #[must_use]
    pub fn new(rotor_model: impl Into<String>) -> Self {
        Self {
            rotor_model: rotor_model.into(),
            turbine_models: Vec::new(),
            controller: Self::DEFAULT_CONTROLLER.to_owned(),
            wake_models: Vec::new(),
            wake_frame: Self::DEFAULT_WAKE_FRAME.to_owned(),
        }
    }

    /// Appends a turbine behavior model.
    #[must_use]
    pub fn with_turbine_model(mut self, key: impl Into<String>) -> Self {
        self.turbine_models.push(key.into());
        self
    }

    /// Appends a wake model.
    #[must_use]
    pub fn with_wake_model(mut self, key: impl Into<String>) -> Self {
        self.wake_models.push(key.into());
        self
    }

    #[must_use]
    pub fn with_controller(self, key: impl Into<String>) -> Self {
        Self {
            controller: key.into(),
            ..self
        }
    }

    #[must_use]
    pub fn with_wake_frame(self, key: impl Into<String>) -> Self {
        Self {
            wake_frame: key.into(),
            ..self
        }
    }
}

impl TurbineInfo for TurbineModels {
    fn rotor_model(&self) -> &str {
        &self.rotor_model
    }

    fn turbine_models(&self) -> &[String] {
        &self.turbine_models
    }

    fn controller(&self) -> &str {
        &self.controller
    }

    fn wake_models(&self) -> &[String] {
        &self.wake_models
    }

    fn wake_frame(&self) -> &str {
        &self.wake_frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn referenced_keys_by_kind() {
        let t = TurbineModels::new("grid400")
            .with_turbine_model("yaw2yawm")
            .with_turbine_model("zeroOutsideFarm")
            .with_wake_model("Bastankhah")
            .with_wake_frame("yaw_deflection");

        assert_eq!(t.referenced_keys(ModelKind::RotorModels), ["grid400"]);
        assert_eq!(
            t.referenced_keys(ModelKind::TurbineModels),
            ["yaw2yawm", "zeroOutsideFarm"]
        );
        assert_eq!(t.referenced_keys(ModelKind::Controllers), ["default"]);
        assert_eq!(t.referenced_keys(ModelKind::WakeModels), ["Bastankhah"]);
        assert_eq!(t.referenced_keys(ModelKind::WakeFrames), ["yaw_deflection"]);
        assert!(t.referenced_keys(ModelKind::WakeSuperpositions).is_empty());
    }

    #[test]
    fn multi_valued_kinds_match_trait() {
        let t = TurbineModels::new("centre");
        for kind in ModelKind::FILTERED {
            if !kind.is_multi_valued() {
                assert_eq!(t.referenced_keys(kind).len(), 1, "{kind}");
            }
        }
    }
}
