//! Performance curve evaluation: thrust coefficient, axial induction, power.

use uom::{
    ConstZero,
    si::{
        f64::{Length, MassDensity, Power, Velocity},
        length::meter,
        mass_density::kilogram_per_cubic_meter,
        power::watt,
        ratio::ratio,
        velocity::meter_per_second,
    },
};

use crate::support::{
    actuator_disk::{AxialInduction, ThrustCoefficient},
    constraint::{ConstraintResult, StrictlyPositive, UnitInterval},
};

use super::{TurbineError, TurbineSpecification};

/// Thrust coefficient (Ct) at `velocity`.
///
/// Interpolates the thrust curve inside the operating range and returns zero
/// below cut-in or above cut-out. The value is returned as read from the
/// curve; [`axial_induction_from_ct`] rejects values outside `[0, 1]`.
#[must_use]
pub fn thrust_coefficient(velocity: Velocity, spec: &TurbineSpecification) -> f64 {
    if !spec.operating_range().contains(velocity) {
        return 0.0;
    }
    spec.thrust_curve()
        .interpolate(velocity.get::<meter_per_second>())
}

/// Axial induction at `velocity`, from the thrust coefficient.
///
/// # Errors
///
/// Returns [`TurbineError::InvalidCt`] if the thrust curve yields `Ct > 1`
/// or `Ct < 0` at `velocity`.
pub fn axial_induction(
    velocity: Velocity,
    spec: &TurbineSpecification,
) -> Result<AxialInduction, TurbineError> {
    axial_induction_from_ct(thrust_coefficient(velocity, spec))
}

/// Solves `Ct = 4a(1 - a)` for the smaller root `a ∈ [0, 0.5]`.
///
/// # Errors
///
/// Returns [`TurbineError::InvalidCt`] if `ct` lies outside `[0, 1]` or is
/// `NaN`. The value is never clamped.
pub fn axial_induction_from_ct(ct: f64) -> Result<AxialInduction, TurbineError> {
    let ct = ThrustCoefficient::new(ct).map_err(|_| TurbineError::InvalidCt { ct })?;
    Ok(AxialInduction::from_thrust_coefficient(ct))
}

/// Electrical power at `velocity` and ambient `air_density`.
///
/// Interpolates the power curve and scales it by `air_density / ρ_ref`.
/// Returns zero below cut-in or above cut-out.
#[must_use]
pub fn power(velocity: Velocity, spec: &TurbineSpecification, air_density: MassDensity) -> Power {
    if !spec.operating_range().contains(velocity) {
        return Power::ZERO;
    }

    let curve_power = spec
        .power_curve()
        .interpolate(velocity.get::<meter_per_second>());
    let density_ratio = (air_density / spec.reference_air_density()).get::<ratio>();

    Power::new::<watt>(curve_power * density_ratio)
}

/// Converts a power-coefficient table into a power curve.
///
/// Each point becomes `P = ½ ρ_ref A Cp η v³`, where `A` is the swept area of
/// a rotor with the given diameter and `η` the generator efficiency.
///
/// # Errors
///
/// Returns an error if the diameter or density is not strictly positive, or
/// the efficiency lies outside `[0, 1]`.
pub fn power_curve_from_coefficients(
    power_coefficients: &[(Velocity, f64)],
    rotor_diameter: Length,
    generator_efficiency: f64,
    reference_air_density: MassDensity,
) -> ConstraintResult<Vec<(Velocity, Power)>> {
    let diameter = StrictlyPositive::new(rotor_diameter.get::<meter>())?.into_inner();
    let efficiency = UnitInterval::new(generator_efficiency)?.into_inner();
    let rho = StrictlyPositive::new(reference_air_density.get::<kilogram_per_cubic_meter>())?
        .into_inner();

    let area = std::f64::consts::PI * diameter * diameter / 4.0;

    Ok(power_coefficients
        .iter()
        .map(|&(v, cp)| {
            let speed = v.get::<meter_per_second>();
            let p = 0.5 * rho * area * cp * efficiency * speed.powi(3);
            (v, Power::new::<watt>(p))
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use uom::si::power::kilowatt;

    use crate::models::wind::turbine::core::{
        TurbineSpecification,
        test_support::{mps, two_megawatt, two_megawatt_parameters},
    };

    fn rho(value: f64) -> MassDensity {
        MassDensity::new::<kilogram_per_cubic_meter>(value)
    }

    #[test]
    fn zero_outside_operating_range() {
        let spec = two_megawatt();
        let air = spec.reference_air_density();

        for speed in [0.0, 2.9, 25.1, 40.0] {
            assert_eq!(thrust_coefficient(mps(speed), &spec), 0.0);
            assert_eq!(power(mps(speed), &spec, air), Power::ZERO);
            assert_relative_eq!(axial_induction(mps(speed), &spec).unwrap().value(), 0.0);
        }
    }

    #[test]
    fn interpolates_inside_operating_range() {
        let spec = two_megawatt();
        let air = spec.reference_air_density();

        assert_relative_eq!(thrust_coefficient(mps(12.0), &spec), 0.75);
        assert_relative_eq!(power(mps(7.5), &spec, air).get::<kilowatt>(), 1000.0);
        assert_relative_eq!(power(mps(12.0), &spec, air).get::<kilowatt>(), 2000.0);
        assert_relative_eq!(power(mps(25.0), &spec, air).get::<kilowatt>(), 2000.0);

        // Ct = 0.75 gives a = 0.25.
        assert_relative_eq!(
            axial_induction(mps(12.0), &spec).unwrap().value(),
            0.25,
            epsilon = 1e-12
        );
    }

    #[test]
    fn explicit_cut_out_below_curve_end() {
        let spec = TurbineSpecification::new(
            two_megawatt_parameters().with_operating_range(mps(4.0), mps(20.0)),
        )
        .unwrap();
        let air = spec.reference_air_density();

        assert_eq!(power(mps(3.5), &spec, air), Power::ZERO);
        assert_eq!(power(mps(21.0), &spec, air), Power::ZERO);
        assert_relative_eq!(power(mps(20.0), &spec, air).get::<kilowatt>(), 2000.0);
    }

    #[test]
    fn thrust_coefficient_above_one_is_surfaced() {
        let mut parameters = two_megawatt_parameters();
        parameters.thrust_curve[1].1 = 1.3;
        let spec = TurbineSpecification::new(parameters).unwrap();

        assert_relative_eq!(thrust_coefficient(mps(12.0), &spec), 1.3);
        assert!(matches!(
            axial_induction(mps(12.0), &spec),
            Err(TurbineError::InvalidCt { ct }) if (ct - 1.3).abs() < 1e-12
        ));
    }

    #[test]
    fn invalid_ct_values() {
        for ct in [1.0 + 1e-9, -0.01, f64::NAN] {
            assert!(matches!(
                axial_induction_from_ct(ct),
                Err(TurbineError::InvalidCt { .. })
            ));
        }
        assert_relative_eq!(axial_induction_from_ct(1.0).unwrap().value(), 0.5);
    }

    #[test]
    fn power_from_coefficients() {
        let diameter = Length::new::<meter>(2.0 / std::f64::consts::PI.sqrt());
        // Unit swept area, so P = 0.5 * 1.225 * Cp * η * v³.
        let curve = power_curve_from_coefficients(
            &[(mps(0.0), 0.0), (mps(10.0), 0.48)],
            diameter,
            0.9,
            rho(1.225),
        )
        .unwrap();

        assert_relative_eq!(curve[0].1.get::<watt>(), 0.0);
        assert_relative_eq!(
            curve[1].1.get::<watt>(),
            0.5 * 1.225 * 0.48 * 0.9 * 1000.0,
            max_relative = 1e-12
        );

        assert!(power_curve_from_coefficients(&[], diameter, 1.5, rho(1.225)).is_err());
        assert!(power_curve_from_coefficients(&[], diameter, 0.9, rho(0.0)).is_err());
    }

    proptest! {
        #[test]
        fn power_scales_linearly_with_density(speed in 0.0..30.0_f64, density in 0.5..1.5_f64) {
            let spec = two_megawatt();
            let single = power(mps(speed), &spec, rho(density)).get::<watt>();
            let double = power(mps(speed), &spec, rho(2.0 * density)).get::<watt>();

            prop_assert!((double - 2.0 * single).abs() <= 1e-9 * single.abs().max(1.0));
        }

        #[test]
        fn ct_roundtrips_through_axial_induction(ct in 0.0..=1.0_f64) {
            let a = axial_induction_from_ct(ct).unwrap().value();
            prop_assert!((4.0 * a * (1.0 - a) - ct).abs() < 1e-12);
        }
    }
}
