use std::fmt;

/// The mappings a [`ModelBook`](super::ModelBook) is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ModelKind {
    RotorModels,
    TurbineModels,
    TurbineOrders,
    Controllers,
    WakeModels,
    WakeSuperpositions,
    WakeFrames,
    VerticalProfiles,
    FarmCalcModels,
}

impl ModelKind {
    /// Every mapping kind.
    pub const ALL: [Self; 9] = [
        Self::RotorModels,
        Self::TurbineModels,
        Self::TurbineOrders,
        Self::Controllers,
        Self::WakeModels,
        Self::WakeSuperpositions,
        Self::WakeFrames,
        Self::VerticalProfiles,
        Self::FarmCalcModels,
    ];

    /// Kinds referenced by turbines and therefore filtered on reduction.
    pub const FILTERED: [Self; 5] = [
        Self::RotorModels,
        Self::TurbineModels,
        Self::Controllers,
        Self::WakeModels,
        Self::WakeFrames,
    ];

    /// Stable identifier of the mapping.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::RotorModels => "rotor_models",
            Self::TurbineModels => "turbine_models",
            Self::TurbineOrders => "turbine_orders",
            Self::Controllers => "controllers",
            Self::WakeModels => "wake_models",
            Self::WakeSuperpositions => "wake_superp",
            Self::WakeFrames => "wake_frames",
            Self::VerticalProfiles => "vert_profiles",
            Self::FarmCalcModels => "farm_calc_data_models",
        }
    }

    /// True if a turbine can reference more than one key of this kind.
    #[must_use]
    pub fn is_multi_valued(self) -> bool {
        matches!(self, Self::TurbineModels | Self::WakeModels)
    }

    /// True if reduction keeps only the keys turbines reference.
    #[must_use]
    pub fn is_filtered(self) -> bool {
        Self::FILTERED.contains(&self)
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
