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

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Level {
    Low,
    Medium,
    High
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High"
        }
    }

    pub fn differential_multiplier(&self) -> f64 {
        match self {
            Level::Low => { 0.7 }
            Level::Medium => { 1.0 }
            Level::High => { 1.3 }
        }
    }

    // Front/rear duct sizes a cooling recommendation maps onto.
    pub fn brake_duct_sizes(&self) -> (f64, f64) {
        match self {
            Level::Low => { (1.0, 1.0) }
            Level::Medium => { (3.0, 2.0) }
            Level::High => { (5.0, 4.0) }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Firmness {
    Soft,
    Medium,
    Stiff
}

impl Firmness {
    pub fn as_str(&self) -> &'static str {
        match self {
            Firmness::Soft => "Soft",
            Firmness::Medium => "Medium",
            Firmness::Stiff => "Stiff"
        }
    }

    pub fn rate_multiplier(&self) -> f64 {
        match self {
            Firmness::Soft => { 0.8 }
            Firmness::Medium => { 1.0 }
            Firmness::Stiff => { 1.2 }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GearingLength {
    Short,
    Medium,
    Long
}

impl GearingLength {
    pub fn as_str(&self) -> &'static str {
        match self {
            GearingLength::Short => "Short",
            GearingLength::Medium => "Medium",
            GearingLength::Long => "Long"
        }
    }

    pub fn final_drive_multiplier(&self) -> f64 {
        match self {
            GearingLength::Short => { 1.1 }
            GearingLength::Medium => { 1.0 }
            GearingLength::Long => { 0.9 }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum TrackClass {
    Power,
    Balanced,
    Technical,
    HighSpeed
}

impl TrackClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackClass::Power => "Power",
            TrackClass::Balanced => "Balanced",
            TrackClass::Technical => "Technical",
            TrackClass::HighSpeed => "High-Speed"
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Expert => "Expert"
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AeroRecommendation {
    pub front_wing: f64,
    pub rear_wing: f64,
    pub priority: &'static str
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SuspensionRecommendation {
    pub springs: Firmness,
    pub dampers: Firmness,
    pub priority: &'static str
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransmissionRecommendation {
    pub gearing: GearingLength,
    pub differential: Level,
    pub priority: &'static str
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BrakeRecommendation {
    pub bias: f64,
    pub cooling: Level,
    pub priority: &'static str
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SetupRecommendations {
    pub aerodynamics: AeroRecommendation,
    pub suspension: SuspensionRecommendation,
    pub transmission: TransmissionRecommendation,
    pub brakes: BrakeRecommendation
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Track {
    pub id: &'static str,
    pub name: &'static str,
    pub country: &'static str,
    pub length_km: f64,
    pub corners: u32,
    pub elevation: Level,
    pub downforce_level: Level,
    pub class: TrackClass,
    pub key_characteristics: &'static [&'static str],
    pub setup_recommendations: SetupRecommendations,
    pub strategy: &'static str,
    pub difficulty: Difficulty
}

const TRACKS: [Track; 7] = [
    Track {
        id: "monza",
        name: "Monza",
        country: "Italy",
        length_km: 5.793,
        corners: 11,
        elevation: Level::Low,
        downforce_level: Level::Low,
        class: TrackClass::Power,
        key_characteristics: &[
            "Long straights with chicanes",
            "High top speeds critical",
            "Low downforce essential",
            "Slipstream battles common"
        ],
        setup_recommendations: SetupRecommendations {
            aerodynamics: AeroRecommendation {
                front_wing: 8.0,
                rear_wing: 12.0,
                priority: "Minimum drag for maximum straight-line speed"
            },
            suspension: SuspensionRecommendation {
                springs: Firmness::Stiff,
                dampers: Firmness::Medium,
                priority: "Stability under braking from high speed"
            },
            transmission: TransmissionRecommendation {
                gearing: GearingLength::Long,
                differential: Level::Low,
                priority: "Maximum top speed on long straights"
            },
            brakes: BrakeRecommendation {
                bias: 54.0,
                cooling: Level::High,
                priority: "Manage heat from high-speed braking"
            }
        },
        strategy: "Minimize drag at all costs. Focus on straight-line speed over cornering performance.",
        difficulty: Difficulty::Beginner
    },
    Track {
        id: "spa",
        name: "Spa-Francorchamps",
        country: "Belgium",
        length_km: 7.004,
        corners: 19,
        elevation: Level::High,
        downforce_level: Level::Low,
        class: TrackClass::HighSpeed,
        key_characteristics: &[
            "Longest track with massive elevation",
            "Combination of high-speed and technical sections",
            "Weather often a factor",
            "Requires low drag setup"
        ],
        setup_recommendations: SetupRecommendations {
            aerodynamics: AeroRecommendation {
                front_wing: 15.0,
                rear_wing: 20.0,
                priority: "Low drag for Kemmel Straight efficiency"
            },
            suspension: SuspensionRecommendation {
                springs: Firmness::Medium,
                dampers: Firmness::Medium,
                priority: "Balance for varied corner speeds and elevation"
            },
            transmission: TransmissionRecommendation {
                gearing: GearingLength::Long,
                differential: Level::Medium,
                priority: "Top speed for long straights"
            },
            brakes: BrakeRecommendation {
                bias: 56.0,
                cooling: Level::Medium,
                priority: "Consistent performance over long lap"
            }
        },
        strategy: "Balance low drag for straights with enough downforce for Eau Rouge/Raidillon complex.",
        difficulty: Difficulty::Advanced
    },
    Track {
        id: "silverstone",
        name: "Silverstone",
        country: "United Kingdom",
        length_km: 5.891,
        corners: 18,
        elevation: Level::Low,
        downforce_level: Level::Medium,
        class: TrackClass::Balanced,
        key_characteristics: &[
            "Mix of high and medium speed corners",
            "Long Hangar Straight",
            "Flowing corner combinations",
            "Good balance of power and downforce needed"
        ],
        setup_recommendations: SetupRecommendations {
            aerodynamics: AeroRecommendation {
                front_wing: 25.0,
                rear_wing: 30.0,
                priority: "Balance between cornering and straight-line speed"
            },
            suspension: SuspensionRecommendation {
                springs: Firmness::Medium,
                dampers: Firmness::Medium,
                priority: "Stable platform for high-speed corners"
            },
            transmission: TransmissionRecommendation {
                gearing: GearingLength::Medium,
                differential: Level::Medium,
                priority: "Balanced for acceleration and top speed"
            },
            brakes: BrakeRecommendation {
                bias: 56.0,
                cooling: Level::Medium,
                priority: "Consistent performance in varied corners"
            }
        },
        strategy: "Find optimal balance between cornering downforce and straight-line efficiency.",
        difficulty: Difficulty::Intermediate
    },
    Track {
        id: "zandvoort",
        name: "Zandvoort",
        country: "Netherlands",
        length_km: 4.259,
        corners: 14,
        elevation: Level::Medium,
        downforce_level: Level::Medium,
        class: TrackClass::Technical,
        key_characteristics: &[
            "Narrow and technical layout",
            "Banked final corner",
            "Limited overtaking opportunities",
            "Requires precise setup"
        ],
        setup_recommendations: SetupRecommendations {
            aerodynamics: AeroRecommendation {
                front_wing: 30.0,
                rear_wing: 34.0,
                priority: "Moderate-high downforce for technical sections"
            },
            suspension: SuspensionRecommendation {
                springs: Firmness::Medium,
                dampers: Firmness::Medium,
                priority: "Balance for banking and regular corners"
            },
            transmission: TransmissionRecommendation {
                gearing: GearingLength::Medium,
                differential: Level::Medium,
                priority: "Precise control for technical layout"
            },
            brakes: BrakeRecommendation {
                bias: 58.0,
                cooling: Level::Medium,
                priority: "Stable braking for close racing"
            }
        },
        strategy: "Focus on cornering performance and precision for the technical layout.",
        difficulty: Difficulty::Advanced
    },
    Track {
        id: "hungaroring",
        name: "Hungaroring",
        country: "Hungary",
        length_km: 4.381,
        corners: 14,
        elevation: Level::Medium,
        downforce_level: Level::High,
        class: TrackClass::Technical,
        key_characteristics: &[
            "Tight and twisty layout",
            "Limited overtaking opportunities",
            "Requires maximum downforce",
            "Hard on brakes and tires"
        ],
        setup_recommendations: SetupRecommendations {
            aerodynamics: AeroRecommendation {
                front_wing: 40.0,
                rear_wing: 45.0,
                priority: "Maximum downforce for cornering grip"
            },
            suspension: SuspensionRecommendation {
                springs: Firmness::Stiff,
                dampers: Firmness::Medium,
                priority: "Precise handling for tight corners"
            },
            transmission: TransmissionRecommendation {
                gearing: GearingLength::Short,
                differential: Level::High,
                priority: "Acceleration out of slow corners"
            },
            brakes: BrakeRecommendation {
                bias: 58.0,
                cooling: Level::High,
                priority: "Stability under heavy braking zones"
            }
        },
        strategy: "Focus on cornering performance over straight-line speed.",
        difficulty: Difficulty::Intermediate
    },
    Track {
        id: "monaco",
        name: "Monaco",
        country: "Monaco",
        length_km: 3.337,
        corners: 19,
        elevation: Level::Medium,
        downforce_level: Level::High,
        class: TrackClass::Technical,
        key_characteristics: &[
            "Street circuit with barriers",
            "Very narrow and technical",
            "No room for error",
            "Maximum downforce essential"
        ],
        setup_recommendations: SetupRecommendations {
            aerodynamics: AeroRecommendation {
                front_wing: 45.0,
                rear_wing: 50.0,
                priority: "Maximum downforce for confidence and grip"
            },
            suspension: SuspensionRecommendation {
                springs: Firmness::Soft,
                dampers: Firmness::Soft,
                priority: "Compliance over bumps and kerbs"
            },
            transmission: TransmissionRecommendation {
                gearing: GearingLength::Short,
                differential: Level::Medium,
                priority: "Acceleration from tight hairpins"
            },
            brakes: BrakeRecommendation {
                bias: 60.0,
                cooling: Level::Medium,
                priority: "Stable braking into tight corners"
            }
        },
        strategy: "Prioritize confidence and predictability with maximum downforce.",
        difficulty: Difficulty::Expert
    },
    Track {
        id: "nordschleife",
        name: "Nürburgring Nordschleife",
        country: "Germany",
        length_km: 20.832,
        corners: 73,
        elevation: Level::High,
        downforce_level: Level::Medium,
        class: TrackClass::Technical,
        key_characteristics: &[
            "Extremely long and challenging",
            "Massive elevation changes",
            "Every type of corner imaginable",
            "Requires very versatile setup"
        ],
        setup_recommendations: SetupRecommendations {
            aerodynamics: AeroRecommendation {
                front_wing: 25.0,
                rear_wing: 30.0,
                priority: "Balanced downforce for varied sections"
            },
            suspension: SuspensionRecommendation {
                springs: Firmness::Medium,
                dampers: Firmness::Soft,
                priority: "Compliance for bumps and elevation changes"
            },
            transmission: TransmissionRecommendation {
                gearing: GearingLength::Medium,
                differential: Level::Medium,
                priority: "Versatility for all corner types"
            },
            brakes: BrakeRecommendation {
                bias: 56.0,
                cooling: Level::High,
                priority: "Reliability over extremely long lap"
            }
        },
        strategy: "Setup for overall versatility and reliability over single-lap performance.",
        difficulty: Difficulty::Expert
    }
];

pub fn track_database() -> &'static [Track] {
    &TRACKS
}

pub fn find_track(id: &str) -> Option<&'static Track> {
    TRACKS.iter().find(|track| track.id == id)
}

pub fn tracks_by_downforce(level: Level) -> Vec<&'static Track> {
    TRACKS.iter().filter(|track| track.downforce_level == level).collect()
}

pub fn tracks_by_difficulty(difficulty: Difficulty) -> Vec<&'static Track> {
    TRACKS.iter().filter(|track| track.difficulty == difficulty).collect()
}

#[cfg(test)]
mod tests {
    use crate::track::{find_track, track_database, tracks_by_downforce, tracks_by_difficulty,
                       Difficulty, Firmness, GearingLength, Level};

    #[test]
    fn database_lookups() {
        assert!(find_track("monza").is_some());
        assert!(find_track("unknown-circuit").is_none());
        assert_eq!(find_track("zandvoort").unwrap().setup_recommendations.brakes.bias, 58.0);

        let low_df = tracks_by_downforce(Level::Low);
        assert!(low_df.iter().all(|t| t.downforce_level == Level::Low));
        assert!(low_df.iter().any(|t| t.id == "monza"));

        let expert = tracks_by_difficulty(Difficulty::Expert);
        assert!(expert.iter().any(|t| t.id == "nordschleife"));
        assert_eq!(track_database().len(), 7);
    }

    #[test]
    fn recommendation_multipliers() {
        assert_eq!(Firmness::Soft.rate_multiplier(), 0.8);
        assert_eq!(Firmness::Medium.rate_multiplier(), 1.0);
        assert_eq!(Firmness::Stiff.rate_multiplier(), 1.2);
        assert_eq!(GearingLength::Short.final_drive_multiplier(), 1.1);
        assert_eq!(GearingLength::Long.final_drive_multiplier(), 0.9);
        assert_eq!(Level::Low.differential_multiplier(), 0.7);
        assert_eq!(Level::High.differential_multiplier(), 1.3);
        assert_eq!(Level::High.brake_duct_sizes(), (5.0, 4.0));
        assert_eq!(Level::Low.brake_duct_sizes(), (1.0, 1.0));
    }
}
