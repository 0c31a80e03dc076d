/*
 * Copyright (c):
 * 2025 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of apex-tuner.
 *
 * apex-tuner is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * apex-tuner is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with apex-tuner. If not, see <https://www.gnu.org/licenses/>.
 */

use crate::analysis::{EffectVector, SetupChange};
use crate::setup::params::{SetupParam, SuspensionParam, AeroParam, TireParam, BrakeParam, TransmissionParam};

// Hand-tuned per-unit-delta coefficients for each parameter the feedback
// engine knows about. Anything not listed contributes a zero vector.
pub fn parameter_effects(change: &SetupChange) -> EffectVector {
    let delta = change.delta;
    match change.param {
        SetupParam::Suspension(p) => suspension_effects(p, delta),
        SetupParam::Aerodynamics(p) => aero_effects(p, delta),
        SetupParam::Tires(p) => tire_effects(p, delta),
        SetupParam::Brakes(p) => brake_effects(p, delta),
        SetupParam::Transmission(p) => transmission_effects(p, delta),
        SetupParam::Ballast(_) => EffectVector::ZERO
    }
}

fn suspension_effects(param: SuspensionParam, delta: f64) -> EffectVector {
    match param {
        // More negative camber: better cornering, worse straight line,
        // higher wear.
        SuspensionParam::CamberFront => EffectVector {
            corner_entry: -15.0 * delta,
            mid_corner: -20.0 * delta,
            straight_line: 8.0 * delta,
            braking: -10.0 * delta,
            tire_wear: 12.0 * delta,
            ..EffectVector::ZERO
        },
        SuspensionParam::CamberRear => EffectVector {
            mid_corner: -18.0 * delta,
            corner_exit: -15.0 * delta,
            straight_line: 6.0 * delta,
            tire_wear: 10.0 * delta,
            ..EffectVector::ZERO
        },
        // Toe-out sharpens turn-in at the cost of stability; any toe away
        // from neutral scrubs the tires, hence the |delta| wear term.
        SuspensionParam::ToeFront => EffectVector {
            corner_entry: 12.0 * delta,
            stability: -10.0 * delta,
            tire_wear: 15.0 * delta.abs(),
            ..EffectVector::ZERO
        },
        SuspensionParam::SpringRateFront => EffectVector {
            corner_entry: 8.0 * delta,
            mid_corner: 12.0 * delta,
            stability: 10.0 * delta,
            adjustability: -6.0 * delta,
            ..EffectVector::ZERO
        },
        SuspensionParam::SpringRateRear => EffectVector {
            corner_exit: 15.0 * delta,
            stability: 8.0 * delta,
            adjustability: -5.0 * delta,
            ..EffectVector::ZERO
        },
        SuspensionParam::AntiRollBarFront => EffectVector {
            corner_entry: 10.0 * delta,
            mid_corner: 8.0 * delta,
            adjustability: -4.0 * delta,
            ..EffectVector::ZERO
        },
        _ => EffectVector::ZERO
    }
}

fn aero_effects(param: AeroParam, delta: f64) -> EffectVector {
    match param {
        AeroParam::FrontWing => EffectVector {
            corner_entry: 20.0 * delta,
            mid_corner: 15.0 * delta,
            straight_line: -25.0 * delta,
            braking: 10.0 * delta,
            stability: 12.0 * delta,
            ..EffectVector::ZERO
        },
        AeroParam::RearWing => EffectVector {
            corner_exit: 18.0 * delta,
            mid_corner: 12.0 * delta,
            straight_line: -30.0 * delta,
            stability: 15.0 * delta,
            ..EffectVector::ZERO
        },
        _ => EffectVector::ZERO
    }
}

fn tire_effects(param: TireParam, delta: f64) -> EffectVector {
    if param.is_pressure() {
        // Higher pressure: smaller contact patch but less rolling drag and
        // slower wear.
        return EffectVector {
            corner_entry: -8.0 * delta,
            mid_corner: -10.0 * delta,
            corner_exit: -8.0 * delta,
            tire_wear: -12.0 * delta,
            straight_line: 5.0 * delta,
            ..EffectVector::ZERO
        };
    }
    EffectVector::ZERO
}

fn brake_effects(param: BrakeParam, delta: f64) -> EffectVector {
    match param {
        BrakeParam::BrakeBias => EffectVector {
            braking: 15.0 * delta,
            corner_entry: 8.0 * delta,
            stability: -10.0 * delta,
            ..EffectVector::ZERO
        },
        _ => EffectVector::ZERO
    }
}

fn transmission_effects(param: TransmissionParam, delta: f64) -> EffectVector {
    if param.is_differential() {
        return EffectVector {
            corner_exit: 10.0 * delta,
            stability: 8.0 * delta,
            ..EffectVector::ZERO
        };
    }
    EffectVector::ZERO
}

#[cfg(test)]
mod tests {
    use crate::analysis::{EffectVector, SetupChange};
    use crate::analysis::effects::parameter_effects;
    use crate::setup::params::{SetupParam, SuspensionParam, TireParam, TransmissionParam, BallastParam};

    fn change_of(param: SetupParam, delta: f64) -> SetupChange {
        SetupChange { param, old_value: 0.0, new_value: delta, delta }
    }

    #[test]
    fn unknown_params_contribute_zero() {
        let caster = change_of(SetupParam::Suspension(SuspensionParam::Caster), 1.0);
        assert_eq!(parameter_effects(&caster), EffectVector::ZERO);
        let ballast = change_of(SetupParam::Ballast(BallastParam::Weight), 25.0);
        assert_eq!(parameter_effects(&ballast), EffectVector::ZERO);
        let gear = change_of(SetupParam::Transmission(TransmissionParam::Gear3), 0.2);
        assert_eq!(parameter_effects(&gear), EffectVector::ZERO);
    }

    #[test]
    fn toe_front_wear_ignores_direction() {
        let toe_out = change_of(SetupParam::Suspension(SuspensionParam::ToeFront), -0.2);
        let toe_in = change_of(SetupParam::Suspension(SuspensionParam::ToeFront), 0.2);
        let out_effects = parameter_effects(&toe_out);
        let in_effects = parameter_effects(&toe_in);
        assert_eq!(out_effects.tire_wear, in_effects.tire_wear);
        assert!(out_effects.tire_wear > 0.0);
        assert_eq!(out_effects.corner_entry, -in_effects.corner_entry);
    }

    #[test]
    fn all_four_pressures_share_one_rule() {
        for tire_param in [TireParam::PressureFrontLeft, TireParam::PressureFrontRight,
                           TireParam::PressureRearLeft, TireParam::PressureRearRight] {
            let effects = parameter_effects(&change_of(SetupParam::Tires(tire_param), 1.5));
            assert_eq!(effects.mid_corner, -15.0);
            assert_eq!(effects.tire_wear, -18.0);
            assert_eq!(effects.straight_line, 7.5);
        }
        for tire_param in [TireParam::TemperatureFrontLeft, TireParam::TemperatureRearRight] {
            assert_eq!(parameter_effects(&change_of(SetupParam::Tires(tire_param), 5.0)), EffectVector::ZERO);
        }
    }

    #[test]
    fn differential_fields_share_one_rule() {
        for diff_param in [TransmissionParam::DifferentialOnThrottle,
                           TransmissionParam::DifferentialOffThrottle,
                           TransmissionParam::DifferentialCoast] {
            let effects = parameter_effects(&change_of(SetupParam::Transmission(diff_param), 10.0));
            assert_eq!(effects.corner_exit, 100.0);
            assert_eq!(effects.stability, 80.0);
        }
    }
}
