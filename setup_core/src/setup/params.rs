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

use self::SetupParam::{Suspension, Aerodynamics, Tires, Brakes, Transmission, Ballast};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SetupCategory {
    Suspension,
    Aerodynamics,
    Tires,
    Brakes,
    Transmission,
    Ballast
}

impl SetupCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            SetupCategory::Suspension => "suspension",
            SetupCategory::Aerodynamics => "aerodynamics",
            SetupCategory::Tires => "tires",
            SetupCategory::Brakes => "brakes",
            SetupCategory::Transmission => "transmission",
            SetupCategory::Ballast => "ballast"
        }
    }

    pub fn all() -> &'static [SetupCategory] {
        &[SetupCategory::Suspension,
          SetupCategory::Aerodynamics,
          SetupCategory::Tires,
          SetupCategory::Brakes,
          SetupCategory::Transmission,
          SetupCategory::Ballast]
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SuspensionParam {
    CamberFront,
    CamberRear,
    ToeFront,
    ToeRear,
    Caster,
    SpringRateFront,
    SpringRateRear,
    BumpDampingFront,
    BumpDampingRear,
    ReboundDampingFront,
    ReboundDampingRear,
    AntiRollBarFront,
    AntiRollBarRear,
    RideHeightFront,
    RideHeightRear
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum AeroParam {
    FrontWing,
    RearWing,
    RideHeightFront,
    RideHeightRear,
    RakeAngle,
    Splitter,
    Diffuser
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TireParam {
    PressureFrontLeft,
    PressureFrontRight,
    PressureRearLeft,
    PressureRearRight,
    TemperatureFrontLeft,
    TemperatureFrontRight,
    TemperatureRearLeft,
    TemperatureRearRight
}

impl TireParam {
    pub fn is_pressure(&self) -> bool {
        matches!(self, TireParam::PressureFrontLeft
            | TireParam::PressureFrontRight
            | TireParam::PressureRearLeft
            | TireParam::PressureRearRight)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BrakeParam {
    BrakeBias,
    BrakePressure,
    BrakeTemperatureFront,
    BrakeTemperatureRear,
    BrakeDuctSizeFront,
    BrakeDuctSizeRear
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TransmissionParam {
    Gear1,
    Gear2,
    Gear3,
    Gear4,
    Gear5,
    Gear6,
    Gear7,
    FinalDrive,
    DifferentialOnThrottle,
    DifferentialOffThrottle,
    DifferentialCoast
}

impl TransmissionParam {
    pub fn is_differential(&self) -> bool {
        matches!(self, TransmissionParam::DifferentialOnThrottle
            | TransmissionParam::DifferentialOffThrottle
            | TransmissionParam::DifferentialCoast)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum BallastParam {
    Weight,
    Position,
    LeftRightBalance
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SetupParam {
    Suspension(SuspensionParam),
    Aerodynamics(AeroParam),
    Tires(TireParam),
    Brakes(BrakeParam),
    Transmission(TransmissionParam),
    Ballast(BallastParam)
}

// Category-then-field declaration order; detect_changes and the CSV export
// both rely on this being stable.
const ALL_PARAMS: [SetupParam; 50] = [
    Suspension(SuspensionParam::CamberFront),
    Suspension(SuspensionParam::CamberRear),
    Suspension(SuspensionParam::ToeFront),
    Suspension(SuspensionParam::ToeRear),
    Suspension(SuspensionParam::Caster),
    Suspension(SuspensionParam::SpringRateFront),
    Suspension(SuspensionParam::SpringRateRear),
    Suspension(SuspensionParam::BumpDampingFront),
    Suspension(SuspensionParam::BumpDampingRear),
    Suspension(SuspensionParam::ReboundDampingFront),
    Suspension(SuspensionParam::ReboundDampingRear),
    Suspension(SuspensionParam::AntiRollBarFront),
    Suspension(SuspensionParam::AntiRollBarRear),
    Suspension(SuspensionParam::RideHeightFront),
    Suspension(SuspensionParam::RideHeightRear),
    Aerodynamics(AeroParam::FrontWing),
    Aerodynamics(AeroParam::RearWing),
    Aerodynamics(AeroParam::RideHeightFront),
    Aerodynamics(AeroParam::RideHeightRear),
    Aerodynamics(AeroParam::RakeAngle),
    Aerodynamics(AeroParam::Splitter),
    Aerodynamics(AeroParam::Diffuser),
    Tires(TireParam::PressureFrontLeft),
    Tires(TireParam::PressureFrontRight),
    Tires(TireParam::PressureRearLeft),
    Tires(TireParam::PressureRearRight),
    Tires(TireParam::TemperatureFrontLeft),
    Tires(TireParam::TemperatureFrontRight),
    Tires(TireParam::TemperatureRearLeft),
    Tires(TireParam::TemperatureRearRight),
    Brakes(BrakeParam::BrakeBias),
    Brakes(BrakeParam::BrakePressure),
    Brakes(BrakeParam::BrakeTemperatureFront),
    Brakes(BrakeParam::BrakeTemperatureRear),
    Brakes(BrakeParam::BrakeDuctSizeFront),
    Brakes(BrakeParam::BrakeDuctSizeRear),
    Transmission(TransmissionParam::Gear1),
    Transmission(TransmissionParam::Gear2),
    Transmission(TransmissionParam::Gear3),
    Transmission(TransmissionParam::Gear4),
    Transmission(TransmissionParam::Gear5),
    Transmission(TransmissionParam::Gear6),
    Transmission(TransmissionParam::Gear7),
    Transmission(TransmissionParam::FinalDrive),
    Transmission(TransmissionParam::DifferentialOnThrottle),
    Transmission(TransmissionParam::DifferentialOffThrottle),
    Transmission(TransmissionParam::DifferentialCoast),
    Ballast(BallastParam::Weight),
    Ballast(BallastParam::Position),
    Ballast(BallastParam::LeftRightBalance)
];

impl SetupParam {
    pub fn all() -> &'static [SetupParam] {
        &ALL_PARAMS
    }

    pub fn category(&self) -> SetupCategory {
        match self {
            Suspension(_) => SetupCategory::Suspension,
            Aerodynamics(_) => SetupCategory::Aerodynamics,
            Tires(_) => SetupCategory::Tires,
            Brakes(_) => SetupCategory::Brakes,
            Transmission(_) => SetupCategory::Transmission,
            Ballast(_) => SetupCategory::Ballast
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Suspension(p) => match p {
                SuspensionParam::CamberFront => "camberFront",
                SuspensionParam::CamberRear => "camberRear",
                SuspensionParam::ToeFront => "toeFront",
                SuspensionParam::ToeRear => "toeRear",
                SuspensionParam::Caster => "caster",
                SuspensionParam::SpringRateFront => "springRateFront",
                SuspensionParam::SpringRateRear => "springRateRear",
                SuspensionParam::BumpDampingFront => "bumpDampingFront",
                SuspensionParam::BumpDampingRear => "bumpDampingRear",
                SuspensionParam::ReboundDampingFront => "reboundDampingFront",
                SuspensionParam::ReboundDampingRear => "reboundDampingRear",
                SuspensionParam::AntiRollBarFront => "antiRollBarFront",
                SuspensionParam::AntiRollBarRear => "antiRollBarRear",
                SuspensionParam::RideHeightFront => "rideHeightFront",
                SuspensionParam::RideHeightRear => "rideHeightRear"
            },
            Aerodynamics(p) => match p {
                AeroParam::FrontWing => "frontWing",
                AeroParam::RearWing => "rearWing",
                AeroParam::RideHeightFront => "rideHeightFront",
                AeroParam::RideHeightRear => "rideHeightRear",
                AeroParam::RakeAngle => "rakeAngle",
                AeroParam::Splitter => "splitter",
                AeroParam::Diffuser => "diffuser"
            },
            Tires(p) => match p {
                TireParam::PressureFrontLeft => "pressureFrontLeft",
                TireParam::PressureFrontRight => "pressureFrontRight",
                TireParam::PressureRearLeft => "pressureRearLeft",
                TireParam::PressureRearRight => "pressureRearRight",
                TireParam::TemperatureFrontLeft => "temperatureFrontLeft",
                TireParam::TemperatureFrontRight => "temperatureFrontRight",
                TireParam::TemperatureRearLeft => "temperatureRearLeft",
                TireParam::TemperatureRearRight => "temperatureRearRight"
            },
            Brakes(p) => match p {
                BrakeParam::BrakeBias => "brakeBias",
                BrakeParam::BrakePressure => "brakePressure",
                BrakeParam::BrakeTemperatureFront => "brakeTemperatureFront",
                BrakeParam::BrakeTemperatureRear => "brakeTemperatureRear",
                BrakeParam::BrakeDuctSizeFront => "brakeDuctSizeFront",
                BrakeParam::BrakeDuctSizeRear => "brakeDuctSizeRear"
            },
            Transmission(p) => match p {
                TransmissionParam::Gear1 => "gear1",
                TransmissionParam::Gear2 => "gear2",
                TransmissionParam::Gear3 => "gear3",
                TransmissionParam::Gear4 => "gear4",
                TransmissionParam::Gear5 => "gear5",
                TransmissionParam::Gear6 => "gear6",
                TransmissionParam::Gear7 => "gear7",
                TransmissionParam::FinalDrive => "finalDrive",
                TransmissionParam::DifferentialOnThrottle => "differentialOnThrottle",
                TransmissionParam::DifferentialOffThrottle => "differentialOffThrottle",
                TransmissionParam::DifferentialCoast => "differentialCoast"
            },
            Ballast(p) => match p {
                BallastParam::Weight => "weight",
                BallastParam::Position => "position",
                BallastParam::LeftRightBalance => "leftRightBalance"
            }
        }
    }

    pub fn range(&self) -> ParameterRange {
        match self {
            Suspension(p) => match p {
                SuspensionParam::CamberFront => ParameterRange::new(-5.0, 1.0, 0.1, "°", -2.5),
                SuspensionParam::CamberRear => ParameterRange::new(-4.0, 1.0, 0.1, "°", -1.8),
                SuspensionParam::ToeFront => ParameterRange::new(-0.5, 0.5, 0.05, "°", 0.1),
                SuspensionParam::ToeRear => ParameterRange::new(-0.3, 0.3, 0.05, "°", -0.1),
                SuspensionParam::Caster => ParameterRange::new(4.0, 9.0, 0.1, "°", 6.5),
                SuspensionParam::SpringRateFront => ParameterRange::new(80.0, 200.0, 5.0, "N/mm", 120.0),
                SuspensionParam::SpringRateRear => ParameterRange::new(80.0, 220.0, 5.0, "N/mm", 130.0),
                SuspensionParam::BumpDampingFront => ParameterRange::new(1.0, 40.0, 1.0, "clicks", 20.0),
                SuspensionParam::BumpDampingRear => ParameterRange::new(1.0, 40.0, 1.0, "clicks", 22.0),
                SuspensionParam::ReboundDampingFront => ParameterRange::new(1.0, 40.0, 1.0, "clicks", 18.0),
                SuspensionParam::ReboundDampingRear => ParameterRange::new(1.0, 40.0, 1.0, "clicks", 20.0),
                SuspensionParam::AntiRollBarFront => ParameterRange::new(1.0, 50.0, 1.0, "N/mm", 25.0),
                SuspensionParam::AntiRollBarRear => ParameterRange::new(1.0, 50.0, 1.0, "N/mm", 28.0),
                SuspensionParam::RideHeightFront => ParameterRange::new(50.0, 120.0, 1.0, "mm", 75.0),
                SuspensionParam::RideHeightRear => ParameterRange::new(50.0, 120.0, 1.0, "mm", 80.0)
            },
            Aerodynamics(p) => match p {
                AeroParam::FrontWing => ParameterRange::new(0.0, 50.0, 1.0, "", 30.0),
                AeroParam::RearWing => ParameterRange::new(0.0, 50.0, 1.0, "", 35.0),
                AeroParam::RideHeightFront => ParameterRange::new(50.0, 120.0, 1.0, "mm", 75.0),
                AeroParam::RideHeightRear => ParameterRange::new(50.0, 120.0, 1.0, "mm", 80.0),
                AeroParam::RakeAngle => ParameterRange::new(0.0, 2.0, 0.1, "°", 0.8),
                AeroParam::Splitter => ParameterRange::new(0.0, 30.0, 1.0, "", 15.0),
                AeroParam::Diffuser => ParameterRange::new(0.0, 40.0, 1.0, "", 25.0)
            },
            Tires(p) => match p {
                TireParam::PressureFrontLeft |
                TireParam::PressureFrontRight => ParameterRange::new(20.0, 35.0, 0.1, "psi", 27.5),
                TireParam::PressureRearLeft |
                TireParam::PressureRearRight => ParameterRange::new(20.0, 35.0, 0.1, "psi", 26.0),
                TireParam::TemperatureFrontLeft |
                TireParam::TemperatureFrontRight => ParameterRange::new(60.0, 110.0, 1.0, "°C", 87.0),
                TireParam::TemperatureRearLeft |
                TireParam::TemperatureRearRight => ParameterRange::new(60.0, 110.0, 1.0, "°C", 84.0)
            },
            Brakes(p) => match p {
                BrakeParam::BrakeBias => ParameterRange::new(50.0, 70.0, 0.5, "%", 56.0),
                BrakeParam::BrakePressure => ParameterRange::new(80.0, 120.0, 1.0, "%", 100.0),
                BrakeParam::BrakeTemperatureFront => ParameterRange::new(300.0, 700.0, 10.0, "°C", 450.0),
                BrakeParam::BrakeTemperatureRear => ParameterRange::new(300.0, 700.0, 10.0, "°C", 400.0),
                BrakeParam::BrakeDuctSizeFront => ParameterRange::new(1.0, 6.0, 1.0, "", 3.0),
                BrakeParam::BrakeDuctSizeRear => ParameterRange::new(1.0, 6.0, 1.0, "", 2.0)
            },
            Transmission(p) => match p {
                TransmissionParam::Gear1 => ParameterRange::new(2.5, 4.5, 0.01, ":1", 3.5),
                TransmissionParam::Gear2 => ParameterRange::new(2.0, 3.6, 0.01, ":1", 2.8),
                TransmissionParam::Gear3 => ParameterRange::new(1.6, 3.0, 0.01, ":1", 2.2),
                TransmissionParam::Gear4 => ParameterRange::new(1.3, 2.4, 0.01, ":1", 1.8),
                TransmissionParam::Gear5 => ParameterRange::new(1.1, 2.0, 0.01, ":1", 1.5),
                TransmissionParam::Gear6 => ParameterRange::new(0.9, 1.6, 0.01, ":1", 1.2),
                TransmissionParam::Gear7 => ParameterRange::new(0.8, 1.3, 0.01, ":1", 1.0),
                TransmissionParam::FinalDrive => ParameterRange::new(2.5, 5.0, 0.01, ":1", 3.8),
                TransmissionParam::DifferentialOnThrottle => ParameterRange::new(0.0, 100.0, 1.0, "%", 60.0),
                TransmissionParam::DifferentialOffThrottle => ParameterRange::new(0.0, 100.0, 1.0, "%", 20.0),
                TransmissionParam::DifferentialCoast => ParameterRange::new(0.0, 100.0, 1.0, "%", 15.0)
            },
            Ballast(p) => match p {
                BallastParam::Weight => ParameterRange::new(0.0, 100.0, 1.0, "kg", 0.0),
                BallastParam::Position => ParameterRange::new(-100.0, 100.0, 1.0, "", 0.0),
                BallastParam::LeftRightBalance => ParameterRange::new(-100.0, 100.0, 1.0, "", 0.0)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParameterRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub unit: &'static str,
    pub default_value: f64
}

impl ParameterRange {
    pub const fn new(min: f64, max: f64, step: f64, unit: &'static str, default_value: f64) -> ParameterRange {
        ParameterRange { min, max, step, unit, default_value }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum UserLevel {
    Beginner,
    Intermediate,
    Expert
}

#[derive(Clone, Copy, Debug)]
pub struct ParameterDefinition {
    pub param: SetupParam,
    pub display_name: &'static str,
    pub description: &'static str,
    pub affected_systems: &'static [&'static str],
    pub difficulty: UserLevel
}

// TODO: write definitions for the remaining sliders; only the ones the
// feedback panel links to directly are described so far.
pub fn parameter_definitions() -> &'static [ParameterDefinition] {
    &[
        ParameterDefinition {
            param: Suspension(SuspensionParam::CamberFront),
            display_name: "Front Camber",
            description: "Vertical inclination of front tires. Negative camber improves cornering grip.",
            affected_systems: &["cornering", "tire_wear", "braking"],
            difficulty: UserLevel::Beginner
        },
        ParameterDefinition {
            param: Suspension(SuspensionParam::CamberRear),
            display_name: "Rear Camber",
            description: "Vertical inclination of rear tires. Affects cornering balance and traction.",
            affected_systems: &["cornering", "tire_wear", "acceleration"],
            difficulty: UserLevel::Beginner
        },
        ParameterDefinition {
            param: Suspension(SuspensionParam::ToeFront),
            display_name: "Front Toe",
            description: "Angle of front tires when viewed from above. Affects turn-in response.",
            affected_systems: &["handling", "tire_wear", "stability"],
            difficulty: UserLevel::Intermediate
        },
        ParameterDefinition {
            param: Suspension(SuspensionParam::ToeRear),
            display_name: "Rear Toe",
            description: "Angle of rear tires when viewed from above. Affects stability and tire wear.",
            affected_systems: &["stability", "tire_wear", "handling"],
            difficulty: UserLevel::Intermediate
        },
        ParameterDefinition {
            param: Suspension(SuspensionParam::SpringRateFront),
            display_name: "Front Spring Rate",
            description: "Stiffness of front springs. Higher values reduce body roll but may hurt grip over bumps.",
            affected_systems: &["handling", "comfort", "aerodynamics"],
            difficulty: UserLevel::Expert
        }
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use crate::setup::params::{SetupCategory, SetupParam};

    #[test]
    fn all_params_are_unique_and_grouped_by_category() {
        let all = SetupParam::all();
        assert_eq!(all.len(), 50);
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(unique.len(), all.len());

        // Grouped: once a category ends it must not appear again.
        let mut seen = Vec::new();
        for param in all {
            let cat = param.category();
            match seen.last() {
                Some(&last) if last == cat => {}
                _ => {
                    assert!(!seen.contains(&cat), "category {:?} split in ALL_PARAMS", cat);
                    seen.push(cat);
                }
            }
        }
        assert_eq!(seen.len(), SetupCategory::all().len());
    }

    #[test]
    fn ranges_contain_their_defaults() {
        for param in SetupParam::all() {
            let range = param.range();
            assert!(range.contains(range.default_value), "{} default out of range", param.name());
            assert!(range.min < range.max, "{} range inverted", param.name());
        }
    }
}
