//! Population of a full model book.

use std::sync::Arc;

use log::debug;
use uom::si::{angle::degree, f64::Angle};

use crate::models::{
    controller::WtcDefault,
    farm_calc::CablesMst,
    frame::{AmbientWindFrame, RotorWindFrame, StreamlineFrame, YawDeflectionFrame},
    order::{FarmTurbineOrder, WakeFrameTurbineOrder, WindTurbineOrder},
    profile::VerticalProfile,
    rotor::{RMCentre, RMGrid, RMRing, RMRings, RMStencil, Ring},
    superposition::{
        TiRule, TiSuperposition, WindRule, WindSuperpOptions, WindSuperpProduct,
        WindSuperposition,
    },
    turbine::{Ws2PCt, Yaw2Yawm, YawReference, Yawm2Yaw, ZeroOutsideFarm},
    wake::{
        WMBastankhah, WMBotasso, WMFrandsen, WMIecTi2005, WMIecTi2019, WMIshiharaTi,
        WMIshiharaWind, WMJensen, WMPorteAgel, WMTiCrespoHernandez,
    },
    Controller, FarmCalcModel, RotorModel, TurbineModel, TurbineOrder, WakeFrame, WakeModel,
    WakeSuperposition,
};
use crate::support::constraint::ConstraintResult;

use super::{BookConfig, BuildError, ModelBook, ModelKind, ROTOR_SUFFIX, Registry};

/// Points on the ring of the generated `ring*` rotor models.
const RING_POINTS: std::ops::RangeInclusive<u32> = 3..=12;

/// Side lengths of the generated `grid*` rotor models.
const GRID_SIDES: std::ops::RangeInclusive<u32> = 2..=10;

/// Side lengths of the high-resolution grid rotor models.
const FINE_GRID_SIDES: [u32; 2] = [20, 100];

pub(super) fn build(config: &BookConfig) -> Result<ModelBook, BuildError> {
    let book = ModelBook {
        rotor_models: rotor_models()?,
        turbine_models: turbine_models(config)?,
        turbine_orders: turbine_orders()?,
        controllers: controllers()?,
        wake_models: wake_models()?,
        wake_superp: wake_superpositions()?,
        wake_frames: wake_frames()?,
        vert_profiles: vert_profiles()?,
        farm_calc_models: farm_calc_models()?,
    };

    for kind in ModelKind::ALL {
        debug!("{kind}: {} models", book.keys(kind).len());
    }

    Ok(book)
}

/// Lifts a model parameter failure into a build error naming the model.
fn checked<T>(model: &str, result: ConstraintResult<T>) -> Result<T, BuildError> {
    result.map_err(|source| BuildError::invalid_parameter(model, source))
}

fn rotor_models() -> Result<Registry<dyn RotorModel>, BuildError> {
    let mut rotor_models = Registry::<dyn RotorModel>::new(ModelKind::RotorModels);

    rotor_models.register("centre", Arc::new(RMCentre))?;
    rotor_models.register("stencil", Arc::new(RMStencil))?;

    for n in RING_POINTS {
        let model = checked("ring", RMRing::new(n))?;
        rotor_models.register(format!("ring{}", model.n_points()), Arc::new(model))?;
    }

    rotor_models.register(
        "two_rings9",
        Arc::new(checked("two_rings9", offset_two_rings())?),
    )?;
    rotor_models.register(
        "two_rings13",
        Arc::new(checked("two_rings13", RMRings::from_counts(&[4, 8]))?),
    )?;
    rotor_models.register(
        "three_rings19",
        Arc::new(checked("three_rings19", RMRings::from_counts(&[4, 6, 8]))?),
    )?;
    rotor_models.register(
        "four_rings29",
        Arc::new(checked("four_rings29", RMRings::from_counts(&[4, 6, 8, 10]))?),
    )?;

    for n in GRID_SIDES.chain(FINE_GRID_SIDES) {
        let model = checked("grid", RMGrid::new(n))?;
        rotor_models.register(format!("grid{}", model.n_points()), Arc::new(model))?;
    }

    Ok(rotor_models)
}

/// Two rings of four points, the inner one turned by 45 degrees.
fn offset_two_rings() -> ConstraintResult<RMRings> {
    Ok(RMRings::new(vec![
        Ring::new(4)?.with_angle0(Angle::new::<degree>(45.0))?,
        Ring::new(4)?,
    ]))
}

fn turbine_models(config: &BookConfig) -> Result<Registry<dyn TurbineModel>, BuildError> {
    let mut turbine_models = Registry::<dyn TurbineModel>::new(ModelKind::TurbineModels);

    if let Some(path) = &config.ct_power_curve_file {
        let curves = Ws2PCt::from_file(path).map_err(|source| BuildError::CurveSource {
            path: path.clone(),
            source,
        })?;
        turbine_models.register("ct_P_curves", Arc::new(curves))?;
    } else {
        debug!("no turbine curve file given, curve-based turbine model unavailable");
    }

    let reference = YawReference {
        ambient_wd: true,
        ambient_yaw: false,
    };
    turbine_models.register("yaw2yawm", Arc::new(Yaw2Yawm { reference }))?;
    turbine_models.register("yawm2yaw", Arc::new(Yawm2Yaw { reference }))?;
    turbine_models.register("zeroOutsideFarm", Arc::new(ZeroOutsideFarm))?;

    Ok(turbine_models)
}

fn turbine_orders() -> Result<Registry<dyn TurbineOrder>, BuildError> {
    let mut orders = Registry::<dyn TurbineOrder>::new(ModelKind::TurbineOrders);
    orders.register("farm", Arc::new(FarmTurbineOrder))?;
    orders.register("amb_wind", Arc::new(WindTurbineOrder { use_amb: true }))?;
    orders.register("wake_wind", Arc::new(WindTurbineOrder { use_amb: false }))?;
    orders.register("wake_frame", Arc::new(WakeFrameTurbineOrder))?;
    Ok(orders)
}

fn controllers() -> Result<Registry<dyn Controller>, BuildError> {
    let mut controllers = Registry::<dyn Controller>::new(ModelKind::Controllers);
    controllers.register("default", Arc::new(WtcDefault))?;
    Ok(controllers)
}

fn wake_models() -> Result<Registry<dyn WakeModel>, BuildError> {
    let mut wake_models = Registry::<dyn WakeModel>::new(ModelKind::WakeModels);

    wake_models.register(
        "Jensen",
        Arc::new(checked("Jensen", WMJensen::new(WMJensen::DEFAULT_K))?),
    )?;
    wake_models.register(
        "Jensen007",
        Arc::new(checked("Jensen007", WMJensen::new(0.07))?),
    )?;
    wake_models.register("Frandsen", Arc::new(WMFrandsen::new()))?;
    wake_models.register(
        "Bastankhah",
        Arc::new(checked(
            "Bastankhah",
            WMBastankhah::new(WMBastankhah::DEFAULT_K),
        )?),
    )?;
    wake_models.register(
        "Bastankhah_smear3",
        Arc::new(checked(
            "Bastankhah_smear3",
            WMBastankhah::new(WMBastankhah::DEFAULT_K)
                .and_then(|wm| wm.with_smearing(Angle::new::<degree>(3.0))),
        )?),
    )?;
    wake_models.register("PorteAgel", Arc::new(WMPorteAgel::new()))?;
    wake_models.register("Botasso", Arc::new(WMBotasso::new()))?;
    wake_models.register("Ishihara_wind", Arc::new(WMIshiharaWind::new()))?;
    wake_models.register("Ishihara_ti", Arc::new(WMIshiharaTi::new()))?;
    wake_models.register("IEC_TI_2005", Arc::new(WMIecTi2005::new()))?;
    wake_models.register("IEC_TI_2019", Arc::new(WMIecTi2019::new()))?;
    wake_models.register("CrespoHernandez", Arc::new(WMTiCrespoHernandez::new()))?;

    add_rotor_variants(&mut wake_models)?;

    Ok(wake_models)
}

/// Registers a partial-wake-free copy of every partial-wake model.
///
/// Each copy is a separate allocation, so the two entries never share state.
fn add_rotor_variants(wake_models: &mut Registry<dyn WakeModel>) -> Result<(), BuildError> {
    let variants: Vec<(String, Arc<dyn WakeModel>)> = wake_models
        .iter()
        .filter(|(_, model)| model.partial_wakes())
        .map(|(key, model)| {
            let mut variant = model.clone_box();
            variant.set_partial_wakes(false);
            (format!("{key}{ROTOR_SUFFIX}"), Arc::from(variant))
        })
        .collect();

    for (key, variant) in variants {
        debug!("deriving wake model {key}");
        wake_models.register(key, variant)?;
    }

    Ok(())
}

fn wake_superpositions() -> Result<Registry<dyn WakeSuperposition>, BuildError> {
    let mut superp = Registry::<dyn WakeSuperposition>::new(ModelKind::WakeSuperpositions);

    for rule in TiRule::ALL {
        superp.register(
            format!("ti_{}", rule.name()),
            Arc::new(TiSuperposition { rule }),
        )?;
    }

    for rule in WindRule::ALL {
        for options in WindSuperpOptions::ALL {
            let mut key = format!("wind_{}", rule.name());
            if options.use_ambws {
                key.push_str("_amb");
            }
            if options.limit_wake {
                key.push_str("_lim");
            }
            superp.register(key, Arc::new(WindSuperposition { rule, options }))?;
        }
    }

    superp.register("wind_product", Arc::new(WindSuperpProduct))?;

    Ok(superp)
}

fn wake_frames() -> Result<Registry<dyn WakeFrame>, BuildError> {
    let mut frames = Registry::<dyn WakeFrame>::new(ModelKind::WakeFrames);
    frames.register("amb_wind", Arc::new(AmbientWindFrame))?;
    frames.register("rotor_wind", Arc::new(RotorWindFrame))?;
    frames.register("yaw_deflection", Arc::new(YawDeflectionFrame))?;
    frames.register("streamlines", Arc::new(StreamlineFrame))?;
    Ok(frames)
}

fn vert_profiles() -> Result<Registry<str>, BuildError> {
    let mut profiles = Registry::<str>::new(ModelKind::VerticalProfiles);
    for profile in VerticalProfile::ALL {
        profiles.register(profile.key(), Arc::from(profile.name()))?;
    }
    Ok(profiles)
}

fn farm_calc_models() -> Result<Registry<dyn FarmCalcModel>, BuildError> {
    let mut models = Registry::<dyn FarmCalcModel>::new(ModelKind::FarmCalcModels);
    models.register("cables_mst", Arc::new(CablesMst))?;
    Ok(models)
}
