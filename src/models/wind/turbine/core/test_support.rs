use uom::si::{
    angle::degree,
    f64::{Angle, Length, Power, Velocity},
    length::meter,
    power::kilowatt,
    velocity::meter_per_second,
};

use super::{TurbineParameters, TurbineSpecification};

pub(crate) fn mps(value: f64) -> Velocity {
    Velocity::new::<meter_per_second>(value)
}

pub(crate) fn deg(value: f64) -> Angle {
    Angle::new::<degree>(value)
}

/// A 2 MW turbine: 3 m/s cut-in, rated at 12 m/s, 25 m/s cut-out.
pub(crate) fn two_megawatt_parameters() -> TurbineParameters {
    TurbineParameters::new(
        "two_mw",
        Length::new::<meter>(90.0),
        Length::new::<meter>(80.0),
        vec![
            (mps(3.0), Power::new::<kilowatt>(0.0)),
            (mps(12.0), Power::new::<kilowatt>(2000.0)),
            (mps(25.0), Power::new::<kilowatt>(2000.0)),
        ],
        vec![(mps(3.0), 0.8), (mps(12.0), 0.75), (mps(25.0), 0.1)],
    )
}

pub(crate) fn two_megawatt() -> TurbineSpecification {
    TurbineSpecification::new(two_megawatt_parameters()).expect("test turbine should be valid")
}

/// The 2 MW turbine on a floating platform tilting from 5° to 10°.
pub(crate) fn floating_parameters(correct_curves_for_tilt: bool) -> TurbineParameters {
    two_megawatt_parameters()
        .with_reference_tilt(deg(5.0))
        .with_floating_tilt(
            vec![(mps(0.0), deg(5.0)), (mps(20.0), deg(10.0))],
            correct_curves_for_tilt,
        )
}

pub(crate) fn floating(correct_curves_for_tilt: bool) -> TurbineSpecification {
    TurbineSpecification::new(floating_parameters(correct_curves_for_tilt))
        .expect("floating test turbine should be valid")
}

/// A floating platform that pitches from 0° to 60° between 10 and 10.1 m/s.
///
/// Plain fixed-point tilt lookups alternate between 0° and 60° on this table.
pub(crate) fn steep_floating() -> TurbineSpecification {
    TurbineSpecification::new(
        two_megawatt_parameters()
            .with_floating_tilt(vec![(mps(10.0), deg(0.0)), (mps(10.1), deg(60.0))], true),
    )
    .expect("steep floating test turbine should be valid")
}
