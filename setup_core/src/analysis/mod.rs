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

pub mod effects;
pub mod modifiers;
pub mod summary;

use crate::setup::{SetupParameters, TrackType, WeatherCondition};
use crate::setup::cars::CarType;
use crate::setup::params::SetupParam;

// Qualitative impact scores. Each component lands in roughly [-100, 100]
// once aggregated; positive means better except tire_wear, where a lower
// value means less wear.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EffectVector {
    pub corner_entry: f64,
    pub mid_corner: f64,
    pub corner_exit: f64,
    pub straight_line: f64,
    pub braking: f64,
    pub tire_wear: f64,
    pub stability: f64,
    pub adjustability: f64
}

impl EffectVector {
    pub const ZERO: EffectVector = EffectVector {
        corner_entry: 0.0,
        mid_corner: 0.0,
        corner_exit: 0.0,
        straight_line: 0.0,
        braking: 0.0,
        tire_wear: 0.0,
        stability: 0.0,
        adjustability: 0.0
    };

    pub const fn uniform(value: f64) -> EffectVector {
        EffectVector {
            corner_entry: value,
            mid_corner: value,
            corner_exit: value,
            straight_line: value,
            braking: value,
            tire_wear: value,
            stability: value,
            adjustability: value
        }
    }

    pub fn component_mul(&self, other: &EffectVector) -> EffectVector {
        EffectVector {
            corner_entry: self.corner_entry * other.corner_entry,
            mid_corner: self.mid_corner * other.mid_corner,
            corner_exit: self.corner_exit * other.corner_exit,
            straight_line: self.straight_line * other.straight_line,
            braking: self.braking * other.braking,
            tire_wear: self.tire_wear * other.tire_wear,
            stability: self.stability * other.stability,
            adjustability: self.adjustability * other.adjustability
        }
    }

    pub fn accumulate(&mut self, other: &EffectVector) {
        self.corner_entry += other.corner_entry;
        self.mid_corner += other.mid_corner;
        self.corner_exit += other.corner_exit;
        self.straight_line += other.straight_line;
        self.braking += other.braking;
        self.tire_wear += other.tire_wear;
        self.stability += other.stability;
        self.adjustability += other.adjustability;
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SetupChange {
    pub param: SetupParam,
    pub old_value: f64,
    pub new_value: f64,
    pub delta: f64
}

// Per-field numeric changes between two setups, in declaration order.
// Compound fields aren't numeric and are skipped.
pub fn detect_changes(old_setup: &SetupParameters, new_setup: &SetupParameters) -> Vec<SetupChange> {
    let mut changes = Vec::new();
    for param in SetupParam::all() {
        let old_value = old_setup.value(*param);
        let new_value = new_setup.value(*param);
        if old_value != new_value {
            changes.push(SetupChange {
                param: *param,
                old_value,
                new_value,
                delta: new_value - old_value
            });
        }
    }
    changes
}

// Element-wise weighted sum. Every additive term gets all three context
// gains applied, not just the aggregate.
pub fn calculate_effects(changes: &[SetupChange],
                         car_type: CarType,
                         track_type: TrackType,
                         weather: WeatherCondition) -> EffectVector {
    let track_gain = modifiers::track_modifier(track_type);
    let weather_gain = modifiers::weather_modifier(weather);
    let car_gain = modifiers::car_modifier(car_type);

    let mut total = EffectVector::ZERO;
    for change in changes {
        let term = effects::parameter_effects(change)
            .component_mul(&track_gain)
            .component_mul(&weather_gain)
            .component_mul(&car_gain);
        total.accumulate(&term);
    }
    total
}

// Convenience entry point for the feedback panel: "" when nothing changed.
pub fn analyze_setup_changes(old_setup: &SetupParameters,
                             new_setup: &SetupParameters,
                             car_type: CarType,
                             track_type: TrackType,
                             weather: WeatherCondition) -> String {
    let changes = detect_changes(old_setup, new_setup);
    if changes.is_empty() {
        return String::new();
    }
    let effects = calculate_effects(&changes, car_type, track_type, weather);
    summary::generate_summary(&effects, track_type)
}

#[cfg(test)]
mod tests {
    use crate::analysis::{analyze_setup_changes, calculate_effects, detect_changes, EffectVector, SetupChange};
    use crate::setup::cars::{baseline, CarType};
    use crate::setup::params::{SetupParam, SuspensionParam, AeroParam};
    use crate::setup::{TrackType, WeatherCondition};

    #[test]
    fn detect_changes_on_identical_setups_is_empty() {
        let setup = baseline(CarType::Prototype);
        assert!(detect_changes(&setup, &setup).is_empty());
    }

    #[test]
    fn detect_changes_reports_delta_in_declaration_order() {
        let old_setup = baseline(CarType::Gt3);
        let mut new_setup = old_setup.clone();
        new_setup.aerodynamics.rear_wing = 40.0;
        new_setup.suspension.camber_front = -3.0;

        let changes = detect_changes(&old_setup, &new_setup);
        assert_eq!(changes.len(), 2);
        // Suspension is declared before aerodynamics.
        assert_eq!(changes[0].param, SetupParam::Suspension(SuspensionParam::CamberFront));
        assert_eq!(changes[0].old_value, -2.5);
        assert_eq!(changes[0].new_value, -3.0);
        assert_eq!(changes[0].delta, -0.5);
        assert_eq!(changes[1].param, SetupParam::Aerodynamics(AeroParam::RearWing));
        assert_eq!(changes[1].delta, 5.0);
    }

    #[test]
    fn compound_swap_is_not_a_numeric_change() {
        let old_setup = baseline(CarType::Gt3);
        let mut new_setup = old_setup.clone();
        new_setup.tires.compound_front = crate::setup::TireCompound::Soft;
        assert!(detect_changes(&old_setup, &new_setup).is_empty());
    }

    #[test]
    fn camber_increase_improves_mid_corner_and_costs_straight_line() {
        // Front camber -2.5° -> -4.0°: more negative camber. Negative
        // mid-corner contribution means improvement under the camber sign
        // convention; straight-line takes a proportional hit.
        let old_setup = baseline(CarType::Gt3);
        let new_setup = old_setup.with_value(SetupParam::Suspension(SuspensionParam::CamberFront), -4.0);
        let changes = detect_changes(&old_setup, &new_setup);
        let effects = calculate_effects(&changes, CarType::Gt3, TrackType::Balanced, WeatherCondition::Dry);

        assert_eq!(effects.mid_corner, -20.0 * -1.5);
        assert_eq!(effects.straight_line, 8.0 * -1.5);
        assert_eq!(effects.braking, -10.0 * -1.5);
        assert_eq!(effects.tire_wear, 12.0 * -1.5);
    }

    #[test]
    fn all_three_modifiers_scale_each_term() {
        let change = SetupChange {
            param: SetupParam::Aerodynamics(AeroParam::FrontWing),
            old_value: 30.0,
            new_value: 32.0,
            delta: 2.0
        };
        let neutral = calculate_effects(&[change], CarType::Gt3, TrackType::Balanced, WeatherCondition::Dry);
        let scaled = calculate_effects(&[change], CarType::F1, TrackType::Technical, WeatherCondition::Wet);
        // cornerEntry gains: car 1.3, track 1.3, weather 1.2
        assert_eq!(neutral.corner_entry, 40.0);
        assert!((scaled.corner_entry - 40.0 * 1.3 * 1.3 * 1.2).abs() < 1e-9);
    }

    #[test]
    fn analyze_with_no_changes_returns_empty_string() {
        let setup = baseline(CarType::Gt3);
        let text = analyze_setup_changes(&setup, &setup, CarType::Gt3, TrackType::Balanced, WeatherCondition::Dry);
        assert_eq!(text, "");
    }

    #[test]
    fn effect_vector_component_mul() {
        let doubled = EffectVector::uniform(2.0).component_mul(&EffectVector::uniform(3.0));
        assert_eq!(doubled, EffectVector::uniform(6.0));
        assert_eq!(EffectVector::ZERO.component_mul(&EffectVector::uniform(5.0)), EffectVector::ZERO);
    }
}
