use super::{ModelBook, TurbineModels};

/// A full model book built without a turbine curve file.
pub(super) fn full_book() -> ModelBook {
    ModelBook::try_default().expect("default model book should build")
}

/// A turbine with the given rotor model and wake models, otherwise defaults.
pub(super) fn turbine(rotor_model: &str, wake_models: &[&str]) -> TurbineModels {
    wake_models
        .iter()
        .fold(TurbineModels::new(rotor_model), |t, &key| {
            t.with_wake_model(key)
        })
}
