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

pub mod params;
pub mod cars;
pub mod compare;

use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::error::PropertyParseError;
use self::params::{SetupParam, SuspensionParam, AeroParam, TireParam, BrakeParam, TransmissionParam, BallastParam};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TireCompound {
    Soft,
    Medium,
    Hard
}

impl TireCompound {
    pub const SOFT_VALUE: &'static str = "soft";
    pub const MEDIUM_VALUE: &'static str = "medium";
    pub const HARD_VALUE: &'static str = "hard";

    pub fn as_str(&self) -> &'static str {
        match self {
            TireCompound::Soft => { TireCompound::SOFT_VALUE }
            TireCompound::Medium => { TireCompound::MEDIUM_VALUE }
            TireCompound::Hard => { TireCompound::HARD_VALUE }
        }
    }
}

impl FromStr for TireCompound {
    type Err = PropertyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            TireCompound::SOFT_VALUE => Ok(TireCompound::Soft),
            TireCompound::MEDIUM_VALUE => Ok(TireCompound::Medium),
            TireCompound::HARD_VALUE => Ok(TireCompound::Hard),
            _ => Err(PropertyParseError::new(s))
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackType {
    HighSpeed,
    Technical,
    Balanced,
    Street
}

impl TrackType {
    pub const HIGH_SPEED_VALUE: &'static str = "high-speed";
    pub const TECHNICAL_VALUE: &'static str = "technical";
    pub const BALANCED_VALUE: &'static str = "balanced";
    pub const STREET_VALUE: &'static str = "street";

    pub fn as_str(&self) -> &'static str {
        match self {
            TrackType::HighSpeed => { TrackType::HIGH_SPEED_VALUE }
            TrackType::Technical => { TrackType::TECHNICAL_VALUE }
            TrackType::Balanced => { TrackType::BALANCED_VALUE }
            TrackType::Street => { TrackType::STREET_VALUE }
        }
    }
}

impl Default for TrackType {
    fn default() -> Self {
        TrackType::Balanced
    }
}

impl FromStr for TrackType {
    type Err = PropertyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            TrackType::HIGH_SPEED_VALUE => Ok(TrackType::HighSpeed),
            TrackType::TECHNICAL_VALUE => Ok(TrackType::Technical),
            TrackType::BALANCED_VALUE => Ok(TrackType::Balanced),
            TrackType::STREET_VALUE => Ok(TrackType::Street),
            _ => Err(PropertyParseError::new(s))
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Dry,
    Wet,
    Mixed
}

impl WeatherCondition {
    pub const DRY_VALUE: &'static str = "dry";
    pub const WET_VALUE: &'static str = "wet";
    pub const MIXED_VALUE: &'static str = "mixed";

    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Dry => { WeatherCondition::DRY_VALUE }
            WeatherCondition::Wet => { WeatherCondition::WET_VALUE }
            WeatherCondition::Mixed => { WeatherCondition::MIXED_VALUE }
        }
    }
}

impl Default for WeatherCondition {
    fn default() -> Self {
        WeatherCondition::Dry
    }
}

impl FromStr for WeatherCondition {
    type Err = PropertyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            WeatherCondition::DRY_VALUE => Ok(WeatherCondition::Dry),
            WeatherCondition::WET_VALUE => Ok(WeatherCondition::Wet),
            WeatherCondition::MIXED_VALUE => Ok(WeatherCondition::Mixed),
            _ => Err(PropertyParseError::new(s))
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuspensionSettings {
    pub camber_front: f64,
    pub camber_rear: f64,
    pub toe_front: f64,
    pub toe_rear: f64,
    pub caster: f64,
    pub spring_rate_front: f64,
    pub spring_rate_rear: f64,
    pub bump_damping_front: f64,
    pub bump_damping_rear: f64,
    pub rebound_damping_front: f64,
    pub rebound_damping_rear: f64,
    pub anti_roll_bar_front: f64,
    pub anti_roll_bar_rear: f64,
    pub ride_height_front: f64,
    pub ride_height_rear: f64
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AerodynamicSettings {
    pub front_wing: f64,
    pub rear_wing: f64,
    pub ride_height_front: f64,
    pub ride_height_rear: f64,
    pub rake_angle: f64,
    pub splitter: f64,
    pub diffuser: f64
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TireSettings {
    pub pressure_front_left: f64,
    pub pressure_front_right: f64,
    pub pressure_rear_left: f64,
    pub pressure_rear_right: f64,
    pub temperature_front_left: f64,
    pub temperature_front_right: f64,
    pub temperature_rear_left: f64,
    pub temperature_rear_right: f64,
    pub compound_front: TireCompound,
    pub compound_rear: TireCompound
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrakeSettings {
    pub brake_bias: f64,
    pub brake_pressure: f64,
    pub brake_temperature_front: f64,
    pub brake_temperature_rear: f64,
    pub brake_duct_size_front: f64,
    pub brake_duct_size_rear: f64
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransmissionSettings {
    pub gear1: f64,
    pub gear2: f64,
    pub gear3: f64,
    pub gear4: f64,
    pub gear5: f64,
    pub gear6: f64,
    pub gear7: f64,
    pub final_drive: f64,
    pub differential_on_throttle: f64,
    pub differential_off_throttle: f64,
    pub differential_coast: f64
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BallastSettings {
    pub weight: f64,
    pub position: f64,
    pub left_right_balance: f64
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupParameters {
    pub suspension: SuspensionSettings,
    pub aerodynamics: AerodynamicSettings,
    pub tires: TireSettings,
    pub brakes: BrakeSettings,
    pub transmission: TransmissionSettings,
    pub ballast: BallastSettings
}

impl SetupParameters {
    pub fn value(&self, param: SetupParam) -> f64 {
        match param {
            SetupParam::Suspension(p) => {
                let s = &self.suspension;
                match p {
                    SuspensionParam::CamberFront => s.camber_front,
                    SuspensionParam::CamberRear => s.camber_rear,
                    SuspensionParam::ToeFront => s.toe_front,
                    SuspensionParam::ToeRear => s.toe_rear,
                    SuspensionParam::Caster => s.caster,
                    SuspensionParam::SpringRateFront => s.spring_rate_front,
                    SuspensionParam::SpringRateRear => s.spring_rate_rear,
                    SuspensionParam::BumpDampingFront => s.bump_damping_front,
                    SuspensionParam::BumpDampingRear => s.bump_damping_rear,
                    SuspensionParam::ReboundDampingFront => s.rebound_damping_front,
                    SuspensionParam::ReboundDampingRear => s.rebound_damping_rear,
                    SuspensionParam::AntiRollBarFront => s.anti_roll_bar_front,
                    SuspensionParam::AntiRollBarRear => s.anti_roll_bar_rear,
                    SuspensionParam::RideHeightFront => s.ride_height_front,
                    SuspensionParam::RideHeightRear => s.ride_height_rear
                }
            }
            SetupParam::Aerodynamics(p) => {
                let a = &self.aerodynamics;
                match p {
                    AeroParam::FrontWing => a.front_wing,
                    AeroParam::RearWing => a.rear_wing,
                    AeroParam::RideHeightFront => a.ride_height_front,
                    AeroParam::RideHeightRear => a.ride_height_rear,
                    AeroParam::RakeAngle => a.rake_angle,
                    AeroParam::Splitter => a.splitter,
                    AeroParam::Diffuser => a.diffuser
                }
            }
            SetupParam::Tires(p) => {
                let t = &self.tires;
                match p {
                    TireParam::PressureFrontLeft => t.pressure_front_left,
                    TireParam::PressureFrontRight => t.pressure_front_right,
                    TireParam::PressureRearLeft => t.pressure_rear_left,
                    TireParam::PressureRearRight => t.pressure_rear_right,
                    TireParam::TemperatureFrontLeft => t.temperature_front_left,
                    TireParam::TemperatureFrontRight => t.temperature_front_right,
                    TireParam::TemperatureRearLeft => t.temperature_rear_left,
                    TireParam::TemperatureRearRight => t.temperature_rear_right
                }
            }
            SetupParam::Brakes(p) => {
                let b = &self.brakes;
                match p {
                    BrakeParam::BrakeBias => b.brake_bias,
                    BrakeParam::BrakePressure => b.brake_pressure,
                    BrakeParam::BrakeTemperatureFront => b.brake_temperature_front,
                    BrakeParam::BrakeTemperatureRear => b.brake_temperature_rear,
                    BrakeParam::BrakeDuctSizeFront => b.brake_duct_size_front,
                    BrakeParam::BrakeDuctSizeRear => b.brake_duct_size_rear
                }
            }
            SetupParam::Transmission(p) => {
                let t = &self.transmission;
                match p {
                    TransmissionParam::Gear1 => t.gear1,
                    TransmissionParam::Gear2 => t.gear2,
                    TransmissionParam::Gear3 => t.gear3,
                    TransmissionParam::Gear4 => t.gear4,
                    TransmissionParam::Gear5 => t.gear5,
                    TransmissionParam::Gear6 => t.gear6,
                    TransmissionParam::Gear7 => t.gear7,
                    TransmissionParam::FinalDrive => t.final_drive,
                    TransmissionParam::DifferentialOnThrottle => t.differential_on_throttle,
                    TransmissionParam::DifferentialOffThrottle => t.differential_off_throttle,
                    TransmissionParam::DifferentialCoast => t.differential_coast
                }
            }
            SetupParam::Ballast(p) => {
                let b = &self.ballast;
                match p {
                    BallastParam::Weight => b.weight,
                    BallastParam::Position => b.position,
                    BallastParam::LeftRightBalance => b.left_right_balance
                }
            }
        }
    }

    pub fn set_value(&mut self, param: SetupParam, value: f64) {
        match param {
            SetupParam::Suspension(p) => {
                let s = &mut self.suspension;
                match p {
                    SuspensionParam::CamberFront => s.camber_front = value,
                    SuspensionParam::CamberRear => s.camber_rear = value,
                    SuspensionParam::ToeFront => s.toe_front = value,
                    SuspensionParam::ToeRear => s.toe_rear = value,
                    SuspensionParam::Caster => s.caster = value,
                    SuspensionParam::SpringRateFront => s.spring_rate_front = value,
                    SuspensionParam::SpringRateRear => s.spring_rate_rear = value,
                    SuspensionParam::BumpDampingFront => s.bump_damping_front = value,
                    SuspensionParam::BumpDampingRear => s.bump_damping_rear = value,
                    SuspensionParam::ReboundDampingFront => s.rebound_damping_front = value,
                    SuspensionParam::ReboundDampingRear => s.rebound_damping_rear = value,
                    SuspensionParam::AntiRollBarFront => s.anti_roll_bar_front = value,
                    SuspensionParam::AntiRollBarRear => s.anti_roll_bar_rear = value,
                    SuspensionParam::RideHeightFront => s.ride_height_front = value,
                    SuspensionParam::RideHeightRear => s.ride_height_rear = value
                }
            }
            SetupParam::Aerodynamics(p) => {
                let a = &mut self.aerodynamics;
                match p {
                    AeroParam::FrontWing => a.front_wing = value,
                    AeroParam::RearWing => a.rear_wing = value,
                    AeroParam::RideHeightFront => a.ride_height_front = value,
                    AeroParam::RideHeightRear => a.ride_height_rear = value,
                    AeroParam::RakeAngle => a.rake_angle = value,
                    AeroParam::Splitter => a.splitter = value,
                    AeroParam::Diffuser => a.diffuser = value
                }
            }
            SetupParam::Tires(p) => {
                let t = &mut self.tires;
                match p {
                    TireParam::PressureFrontLeft => t.pressure_front_left = value,
                    TireParam::PressureFrontRight => t.pressure_front_right = value,
                    TireParam::PressureRearLeft => t.pressure_rear_left = value,
                    TireParam::PressureRearRight => t.pressure_rear_right = value,
                    TireParam::TemperatureFrontLeft => t.temperature_front_left = value,
                    TireParam::TemperatureFrontRight => t.temperature_front_right = value,
                    TireParam::TemperatureRearLeft => t.temperature_rear_left = value,
                    TireParam::TemperatureRearRight => t.temperature_rear_right = value
                }
            }
            SetupParam::Brakes(p) => {
                let b = &mut self.brakes;
                match p {
                    BrakeParam::BrakeBias => b.brake_bias = value,
                    BrakeParam::BrakePressure => b.brake_pressure = value,
                    BrakeParam::BrakeTemperatureFront => b.brake_temperature_front = value,
                    BrakeParam::BrakeTemperatureRear => b.brake_temperature_rear = value,
                    BrakeParam::BrakeDuctSizeFront => b.brake_duct_size_front = value,
                    BrakeParam::BrakeDuctSizeRear => b.brake_duct_size_rear = value
                }
            }
            SetupParam::Transmission(p) => {
                let t = &mut self.transmission;
                match p {
                    TransmissionParam::Gear1 => t.gear1 = value,
                    TransmissionParam::Gear2 => t.gear2 = value,
                    TransmissionParam::Gear3 => t.gear3 = value,
                    TransmissionParam::Gear4 => t.gear4 = value,
                    TransmissionParam::Gear5 => t.gear5 = value,
                    TransmissionParam::Gear6 => t.gear6 = value,
                    TransmissionParam::Gear7 => t.gear7 = value,
                    TransmissionParam::FinalDrive => t.final_drive = value,
                    TransmissionParam::DifferentialOnThrottle => t.differential_on_throttle = value,
                    TransmissionParam::DifferentialOffThrottle => t.differential_off_throttle = value,
                    TransmissionParam::DifferentialCoast => t.differential_coast = value
                }
            }
            SetupParam::Ballast(p) => {
                let b = &mut self.ballast;
                match p {
                    BallastParam::Weight => b.weight = value,
                    BallastParam::Position => b.position = value,
                    BallastParam::LeftRightBalance => b.left_right_balance = value
                }
            }
        }
    }

    // History entries must never alias each other; all leaf fields are owned
    // scalars so a clone is a full deep copy.
    pub fn with_value(&self, param: SetupParam, value: f64) -> SetupParameters {
        let mut new_setup = self.clone();
        new_setup.set_value(param, value);
        new_setup
    }
}
