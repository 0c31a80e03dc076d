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

use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::PropertyParseError;
use crate::setup::{AerodynamicSettings, BallastSettings, BrakeSettings, SetupParameters,
                   SuspensionSettings, TireCompound, TireSettings, TransmissionSettings};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CarType {
    F1,
    Gt3,
    Gt4,
    Touring,
    Prototype
}

impl CarType {
    pub const F1_VALUE: &'static str = "f1";
    pub const GT3_VALUE: &'static str = "gt3";
    pub const GT4_VALUE: &'static str = "gt4";
    pub const TOURING_VALUE: &'static str = "touring";
    pub const PROTOTYPE_VALUE: &'static str = "prototype";

    pub fn as_str(&self) -> &'static str {
        match self {
            CarType::F1 => { CarType::F1_VALUE }
            CarType::Gt3 => { CarType::GT3_VALUE }
            CarType::Gt4 => { CarType::GT4_VALUE }
            CarType::Touring => { CarType::TOURING_VALUE }
            CarType::Prototype => { CarType::PROTOTYPE_VALUE }
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CarType::F1 => "Formula 1",
            CarType::Gt3 => "GT3",
            CarType::Gt4 => "GT4",
            CarType::Touring => "Touring Car",
            CarType::Prototype => "Prototype"
        }
    }

    pub fn all() -> &'static [CarType] {
        &[CarType::F1, CarType::Gt3, CarType::Gt4, CarType::Touring, CarType::Prototype]
    }
}

impl Default for CarType {
    fn default() -> Self {
        CarType::Gt3
    }
}

impl FromStr for CarType {
    type Err = PropertyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CarType::F1_VALUE => Ok(CarType::F1),
            CarType::GT3_VALUE => Ok(CarType::Gt3),
            CarType::GT4_VALUE => Ok(CarType::Gt4),
            CarType::TOURING_VALUE => Ok(CarType::Touring),
            CarType::PROTOTYPE_VALUE => Ok(CarType::Prototype),
            _ => Err(PropertyParseError::new(s))
        }
    }
}

pub fn gt3_default_setup() -> SetupParameters {
    SetupParameters {
        suspension: SuspensionSettings {
            camber_front: -2.5,
            camber_rear: -1.8,
            toe_front: 0.1,
            toe_rear: -0.1,
            caster: 6.5,
            spring_rate_front: 120.0,
            spring_rate_rear: 130.0,
            bump_damping_front: 20.0,
            bump_damping_rear: 22.0,
            rebound_damping_front: 18.0,
            rebound_damping_rear: 20.0,
            anti_roll_bar_front: 25.0,
            anti_roll_bar_rear: 28.0,
            ride_height_front: 75.0,
            ride_height_rear: 80.0
        },
        aerodynamics: AerodynamicSettings {
            front_wing: 30.0,
            rear_wing: 35.0,
            ride_height_front: 75.0,
            ride_height_rear: 80.0,
            rake_angle: 0.8,
            splitter: 15.0,
            diffuser: 25.0
        },
        tires: TireSettings {
            pressure_front_left: 27.5,
            pressure_front_right: 27.5,
            pressure_rear_left: 26.0,
            pressure_rear_right: 26.0,
            temperature_front_left: 87.0,
            temperature_front_right: 87.0,
            temperature_rear_left: 84.0,
            temperature_rear_right: 84.0,
            compound_front: TireCompound::Medium,
            compound_rear: TireCompound::Medium
        },
        brakes: BrakeSettings {
            brake_bias: 56.0,
            brake_pressure: 100.0,
            brake_temperature_front: 450.0,
            brake_temperature_rear: 400.0,
            brake_duct_size_front: 3.0,
            brake_duct_size_rear: 2.0
        },
        transmission: TransmissionSettings {
            gear1: 3.5,
            gear2: 2.8,
            gear3: 2.2,
            gear4: 1.8,
            gear5: 1.5,
            gear6: 1.2,
            gear7: 1.0,
            final_drive: 3.8,
            differential_on_throttle: 60.0,
            differential_off_throttle: 20.0,
            differential_coast: 15.0
        },
        ballast: BallastSettings {
            weight: 0.0,
            position: 0.0,
            left_right_balance: 0.0
        }
    }
}

// Every baseline is a delta on the GT3 default rather than a full table of
// its own.
pub fn baseline(car_type: CarType) -> SetupParameters {
    let mut setup = gt3_default_setup();
    match car_type {
        CarType::F1 => {
            setup.suspension.camber_front = -3.5;
            setup.suspension.camber_rear = -2.5;
            setup.suspension.spring_rate_front = 180.0;
            setup.suspension.spring_rate_rear = 200.0;
        }
        CarType::Gt3 => {}
        CarType::Gt4 => {
            setup.aerodynamics.front_wing = 20.0;
            setup.aerodynamics.rear_wing = 25.0;
        }
        CarType::Touring => {
            setup.suspension.camber_front = -2.0;
            setup.suspension.camber_rear = -1.5;
        }
        CarType::Prototype => {
            setup.aerodynamics.front_wing = 40.0;
            setup.aerodynamics.rear_wing = 45.0;
        }
    }
    setup
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use crate::setup::cars::{baseline, gt3_default_setup, CarType};

    #[test]
    fn car_type_str_round_trip() {
        for car in CarType::all() {
            assert_eq!(CarType::from_str(car.as_str()).unwrap(), *car);
        }
        assert!(CarType::from_str("lmp1").is_err());
    }

    #[test]
    fn gt3_baseline_is_the_default_setup() {
        assert_eq!(baseline(CarType::Gt3), gt3_default_setup());
    }

    #[test]
    fn baselines_only_change_their_own_categories() {
        let gt3 = gt3_default_setup();
        let f1 = baseline(CarType::F1);
        assert_eq!(f1.suspension.camber_front, -3.5);
        assert_eq!(f1.suspension.spring_rate_rear, 200.0);
        assert_eq!(f1.aerodynamics, gt3.aerodynamics);
        assert_eq!(f1.transmission, gt3.transmission);

        let gt4 = baseline(CarType::Gt4);
        assert_eq!(gt4.aerodynamics.front_wing, 20.0);
        assert_eq!(gt4.suspension, gt3.suspension);
    }
}
