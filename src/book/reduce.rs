//! Reduction of a model book to what a wind farm references.

use std::sync::Arc;

use log::info;

use super::{LookupError, ModelBook, ModelKind, Registry, TurbineInfo};

impl ModelBook {
    /// Returns a book holding only the models `turbines` reference.
    ///
    /// Rotor models, turbine models, controllers, wake models and wake frames
    /// are filtered down to the keys referenced by at least one turbine.
    /// Turbine orders, wake superpositions, vertical profiles and farm
    /// calculation models are carried over whole. Entries are shared with
    /// `self`, not copied, and `self` is left untouched.
    ///
    /// # Errors
    ///
    /// Returns a [`LookupError`] for the first key, in farm order, that is
    /// missing from this book.
    pub fn reduce<'a, T>(
        &self,
        turbines: impl IntoIterator<Item = &'a T>,
    ) -> Result<Self, LookupError>
    where
        T: TurbineInfo + ?Sized + 'a,
    {
        let turbines: Vec<&T> = turbines.into_iter().collect();

        let reduced = Self {
            rotor_models: referenced(&self.rotor_models, &turbines)?,
            turbine_models: referenced(&self.turbine_models, &turbines)?,
            turbine_orders: self.turbine_orders.clone(),
            controllers: referenced(&self.controllers, &turbines)?,
            wake_models: referenced(&self.wake_models, &turbines)?,
            wake_superp: self.wake_superp.clone(),
            wake_frames: referenced(&self.wake_frames, &turbines)?,
            vert_profiles: self.vert_profiles.clone(),
            farm_calc_models: self.farm_calc_models.clone(),
        };

        info!(
            "reduced model book for {} turbines: {}",
            turbines.len(),
            ModelKind::FILTERED
                .iter()
                .map(|&kind| format!("{kind}={}", reduced.keys(kind).len()))
                .collect::<Vec<_>>()
                .join(", ")
        );

        Ok(reduced)
    }
}

/// Collects the entries of `source` referenced by any of `turbines`.
fn referenced<M, T>(source: &Registry<M>, turbines: &[&T]) -> Result<Registry<M>, LookupError>
where
    M: ?Sized,
    T: TurbineInfo + ?Sized,
{
    let kind = source.kind();
    let mut reduced = Registry::new(kind);

    for (index, turbine) in turbines.iter().enumerate() {
        for key in turbine.referenced_keys(kind) {
            if reduced.contains_key(key) {
                continue;
            }
            let model = source.get(key).ok_or_else(|| LookupError {
                kind,
                key: key.to_owned(),
                turbine: index,
            })?;
            reduced.insert(key, Arc::clone(model));
        }
    }

    Ok(reduced)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::book::{
        TurbineModels,
        test_support::{full_book, turbine},
    };

    #[test]
    fn reduces_to_referenced_keys() {
        let book = full_book();
        let turbines = [
            turbine("centre", &["Jensen"]),
            turbine("grid400", &["Jensen_rotor"]),
        ];

        let reduced = book.reduce(&turbines).unwrap();

        assert_eq!(reduced.keys(ModelKind::RotorModels), ["centre", "grid400"]);
        assert_eq!(
            reduced.keys(ModelKind::WakeModels),
            ["Jensen", "Jensen_rotor"]
        );
        assert_eq!(reduced.keys(ModelKind::Controllers), ["default"]);
        assert_eq!(reduced.keys(ModelKind::WakeFrames), ["rotor_wind"]);
        assert!(reduced.turbine_models().is_empty());
    }

    #[test]
    fn shared_keys_appear_once() {
        let book = full_book();
        let turbines = [
            turbine("centre", &["Bastankhah", "CrespoHernandez"]),
            turbine("centre", &["Bastankhah"]),
            turbine("ring7", &["CrespoHernandez", "Bastankhah"]),
        ];

        let reduced = book.reduce(&turbines).unwrap();

        assert_eq!(reduced.keys(ModelKind::RotorModels), ["centre", "ring7"]);
        assert_eq!(
            reduced.keys(ModelKind::WakeModels),
            ["Bastankhah", "CrespoHernandez"]
        );
    }

    #[test]
    fn entries_are_shared_with_source() {
        let book = full_book();
        let reduced = book.reduce(&[turbine("stencil", &["Frandsen"])]).unwrap();

        assert!(Arc::ptr_eq(
            book.rotor_models().get("stencil").unwrap(),
            reduced.rotor_models().get("stencil").unwrap()
        ));
        assert!(Arc::ptr_eq(
            book.wake_models().get("Frandsen").unwrap(),
            reduced.wake_models().get("Frandsen").unwrap()
        ));
    }

    #[test]
    fn reduction_is_idempotent() {
        let book = full_book();
        let turbines = [
            turbine("grid16", &["PorteAgel", "Ishihara_ti"])
                .with_turbine_model("yawm2yaw")
                .with_wake_frame("yaw_deflection"),
            turbine("two_rings13", &["PorteAgel_rotor"]).with_turbine_model("zeroOutsideFarm"),
        ];

        let once = book.reduce(&turbines).unwrap();
        let twice = once.reduce(&turbines).unwrap();

        for kind in ModelKind::ALL {
            assert_eq!(once.keys(kind), twice.keys(kind), "{kind}");
        }
    }

    #[test]
    fn unfiltered_mappings_pass_through() {
        let book = full_book();
        let reduced = book.reduce(&[] as &[TurbineModels]).unwrap();

        for kind in ModelKind::ALL {
            if kind.is_filtered() {
                assert!(reduced.keys(kind).is_empty(), "{kind}");
            } else {
                assert_eq!(reduced.keys(kind), book.keys(kind), "{kind}");
            }
        }

        for (key, model) in book.wake_superp().iter() {
            assert!(Arc::ptr_eq(model, reduced.wake_superp().get(key).unwrap()));
        }
        for (key, model) in book.turbine_orders().iter() {
            assert!(Arc::ptr_eq(model, reduced.turbine_orders().get(key).unwrap()));
        }
    }

    #[test]
    fn turbine_models_keep_every_referenced_key() {
        let book = full_book();
        let turbines = [
            TurbineModels::new("centre")
                .with_turbine_model("yaw2yawm")
                .with_turbine_model("zeroOutsideFarm"),
            TurbineModels::new("centre").with_turbine_model("yawm2yaw"),
        ];

        let reduced = book.reduce(&turbines).unwrap();

        assert_eq!(
            reduced.keys(ModelKind::TurbineModels),
            ["yaw2yawm", "yawm2yaw", "zeroOutsideFarm"]
        );
    }

    #[test]
    fn unknown_key_is_a_lookup_error() {
        let book = full_book();
        let turbines = [
            turbine("centre", &["Jensen"]),
            turbine("centre", &["Jensen", "NoSuchWake"]),
        ];

        let err = book.reduce(&turbines).unwrap_err();

        assert_eq!(
            err,
            LookupError {
                kind: ModelKind::WakeModels,
                key: "NoSuchWake".to_owned(),
                turbine: 1,
            }
        );
        assert_eq!(
            err.to_string(),
            "turbine 1 references unknown key 'NoSuchWake' in wake_models"
        );
    }

    #[test]
    fn unknown_single_key_names_its_kind() {
        let book = full_book();
        let turbines = [TurbineModels::new("centre").with_controller("pitch")];

        let err = book.reduce(&turbines).unwrap_err();

        assert_eq!(err.kind, ModelKind::Controllers);
        assert_eq!(err.key, "pitch");
    }

    #[test]
    fn curve_model_missing_without_curve_file() {
        let book = full_book();
        let turbines = [TurbineModels::new("centre").with_turbine_model("ct_P_curves")];

        let err = book.reduce(&turbines).unwrap_err();

        assert_eq!(err.kind, ModelKind::TurbineModels);
        assert_eq!(err.key, "ct_P_curves");
    }

    #[test]
    fn source_is_left_untouched() {
        let book = full_book();
        let before = book.to_string();

        book.reduce(&[turbine("centre", &["Jensen"])]).unwrap();

        assert_eq!(book.to_string(), before);
    }

    #[test]
    fn accepts_trait_objects() {
        let book = full_book();
        let a = turbine("centre", &["Jensen"]);
        let b = turbine("stencil", &["Frandsen"]);
        let turbines: Vec<&dyn TurbineInfo> = vec![&a, &b];

        let reduced = book.reduce(turbines).unwrap();

        assert_eq!(reduced.keys(ModelKind::RotorModels), ["centre", "stencil"]);
    }

    #[test]
    fn empty_sections_are_marked() {
        let book = full_book();
        let reduced = book.reduce(&[] as &[TurbineModels]).unwrap();

        assert_eq!(
            reduced.to_string(),
            "Rotor models:\n  (None)\n\
             Controllers:\n  (None)\n\
             Turbine models:\n  (None)\n\
             Wake centreline models:\n  (None)\n\
             Wake models:\n  (None)"
        );
    }

    #[test]
    fn display_lists_reduced_entries() {
        let book = full_book();
        let reduced = book
            .reduce(&[turbine("ring4", &["Jensen_rotor"]).with_turbine_model("yaw2yawm")])
            .unwrap();

        assert_eq!(
            reduced.to_string(),
            "Rotor models:\n  ring4 -- RMRing(n=3)\n\
             Controllers:\n  default -- WTCDefault()\n\
             Turbine models:\n  yaw2yawm -- Yaw2Yawm(ambient_wd=true, ambient_yaw=false)\n\
             Wake centreline models:\n  rotor_wind -- RotorWindFrame()\n\
             Wake models:\n  Jensen_rotor -- WMJensen(k=0.04, partial_wakes=false)"
        );
    }
}
