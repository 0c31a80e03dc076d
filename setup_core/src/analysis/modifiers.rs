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

use crate::analysis::EffectVector;
use crate::setup::{TrackType, WeatherCondition};
use crate::setup::cars::CarType;

// Per-component context gains. A technical track amplifies cornering
// effects and damps straight-line ones; wet weather amplifies stability
// and braking; a forgiving touring car damps nearly everything.

pub fn track_modifier(track_type: TrackType) -> EffectVector {
    match track_type {
        TrackType::Technical => EffectVector {
            corner_entry: 1.3,
            mid_corner: 1.4,
            corner_exit: 1.2,
            straight_line: 0.7,
            braking: 1.3,
            tire_wear: 1.1,
            stability: 1.2,
            adjustability: 1.1
        },
        TrackType::HighSpeed => EffectVector {
            corner_entry: 0.8,
            mid_corner: 0.9,
            corner_exit: 1.1,
            straight_line: 1.5,
            braking: 1.0,
            tire_wear: 0.9,
            stability: 1.3,
            adjustability: 0.9
        },
        TrackType::Street => EffectVector {
            corner_entry: 1.1,
            mid_corner: 1.2,
            corner_exit: 1.0,
            straight_line: 0.8,
            braking: 1.2,
            tire_wear: 1.3,
            stability: 1.4,
            adjustability: 1.2
        },
        TrackType::Balanced => EffectVector::uniform(1.0)
    }
}

pub fn weather_modifier(weather: WeatherCondition) -> EffectVector {
    match weather {
        WeatherCondition::Wet => EffectVector {
            corner_entry: 1.2,
            mid_corner: 1.3,
            corner_exit: 1.2,
            straight_line: 0.9,
            braking: 1.4,
            tire_wear: 0.8,
            stability: 1.5,
            adjustability: 1.3
        },
        WeatherCondition::Mixed => EffectVector {
            corner_entry: 1.1,
            mid_corner: 1.1,
            corner_exit: 1.1,
            straight_line: 0.95,
            braking: 1.2,
            tire_wear: 0.9,
            stability: 1.2,
            adjustability: 1.1
        },
        WeatherCondition::Dry => EffectVector::uniform(1.0)
    }
}

pub fn car_modifier(car_type: CarType) -> EffectVector {
    match car_type {
        CarType::F1 => EffectVector {
            corner_entry: 1.3,
            mid_corner: 1.4,
            corner_exit: 1.3,
            straight_line: 1.2,
            braking: 1.3,
            tire_wear: 1.2,
            stability: 0.9,
            adjustability: 0.8
        },
        CarType::Gt4 => EffectVector {
            corner_entry: 0.9,
            mid_corner: 0.9,
            corner_exit: 0.9,
            straight_line: 0.9,
            braking: 0.9,
            tire_wear: 0.8,
            stability: 1.1,
            adjustability: 1.2
        },
        CarType::Touring => EffectVector {
            corner_entry: 0.8,
            mid_corner: 0.8,
            corner_exit: 0.8,
            straight_line: 0.8,
            braking: 0.8,
            tire_wear: 0.7,
            stability: 1.2,
            adjustability: 1.3
        },
        CarType::Prototype => EffectVector {
            corner_entry: 1.2,
            mid_corner: 1.3,
            corner_exit: 1.2,
            straight_line: 1.1,
            braking: 1.2,
            tire_wear: 1.1,
            stability: 1.0,
            adjustability: 0.9
        },
        CarType::Gt3 => EffectVector::uniform(1.0)
    }
}

#[cfg(test)]
mod tests {
    use crate::analysis::EffectVector;
    use crate::analysis::modifiers::{car_modifier, track_modifier, weather_modifier};
    use crate::setup::{TrackType, WeatherCondition};
    use crate::setup::cars::CarType;

    #[test]
    fn neutral_contexts_are_identity() {
        assert_eq!(track_modifier(TrackType::Balanced), EffectVector::uniform(1.0));
        assert_eq!(weather_modifier(WeatherCondition::Dry), EffectVector::uniform(1.0));
        assert_eq!(car_modifier(CarType::Gt3), EffectVector::uniform(1.0));
    }

    #[test]
    fn gains_stay_in_expected_band() {
        let vectors = [
            track_modifier(TrackType::Technical),
            track_modifier(TrackType::HighSpeed),
            track_modifier(TrackType::Street),
            weather_modifier(WeatherCondition::Wet),
            weather_modifier(WeatherCondition::Mixed),
            car_modifier(CarType::F1),
            car_modifier(CarType::Gt4),
            car_modifier(CarType::Touring),
            car_modifier(CarType::Prototype)
        ];
        for v in vectors {
            for gain in [v.corner_entry, v.mid_corner, v.corner_exit, v.straight_line,
                         v.braking, v.tire_wear, v.stability, v.adjustability] {
                assert!(gain >= 0.7 && gain <= 1.5, "gain {} out of band", gain);
            }
        }
    }
}
