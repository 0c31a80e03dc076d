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

use std::fmt::Debug;
use std::fs;
use std::io;
use std::path::PathBuf;
use chrono::{DateTime, Utc};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;
use crate::setup::{SetupParameters, TrackType, WeatherCondition};
use crate::setup::cars::{baseline, CarType};
use crate::setup::params::{AeroParam, SetupParam, SuspensionParam};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupPreset {
    pub id: String,
    pub name: String,
    pub description: String,
    pub car_type: CarType,
    pub track_type: TrackType,
    pub weather_condition: WeatherCondition,
    pub setup: SetupParameters,
    pub created_at: DateTime<Utc>,
    pub is_user_created: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloads: Option<u32>
}

// The presets every install ships with. All are GT3 tweaks of the default
// setup; user presets get appended after these at load time.
pub fn builtin_presets() -> Vec<SetupPreset> {
    let gt3_setup = baseline(CarType::Gt3);

    let high_downforce = gt3_setup
        .with_value(SetupParam::Aerodynamics(AeroParam::FrontWing), 45.0)
        .with_value(SetupParam::Aerodynamics(AeroParam::RearWing), 50.0)
        .with_value(SetupParam::Suspension(SuspensionParam::CamberFront), -3.2)
        .with_value(SetupParam::Suspension(SuspensionParam::CamberRear), -2.5);

    let low_drag = gt3_setup
        .with_value(SetupParam::Aerodynamics(AeroParam::FrontWing), 15.0)
        .with_value(SetupParam::Aerodynamics(AeroParam::RearWing), 20.0)
        .with_value(SetupParam::Suspension(SuspensionParam::CamberFront), -1.8)
        .with_value(SetupParam::Suspension(SuspensionParam::CamberRear), -1.2);

    vec![
        SetupPreset {
            id: String::from("gt3-baseline"),
            name: String::from("GT3 Baseline"),
            description: String::from("Balanced setup for GT3 cars on most tracks"),
            car_type: CarType::Gt3,
            track_type: TrackType::Balanced,
            weather_condition: WeatherCondition::Dry,
            setup: gt3_setup.clone(),
            created_at: Utc::now(),
            is_user_created: false,
            author: None,
            rating: Some(4.5),
            downloads: Some(1250)
        },
        SetupPreset {
            id: String::from("gt3-high-downforce"),
            name: String::from("High Downforce"),
            description: String::from("Maximum grip setup for technical tracks"),
            car_type: CarType::Gt3,
            track_type: TrackType::Technical,
            weather_condition: WeatherCondition::Dry,
            setup: high_downforce,
            created_at: Utc::now(),
            is_user_created: false,
            author: None,
            rating: Some(4.2),
            downloads: Some(890)
        },
        SetupPreset {
            id: String::from("gt3-low-drag"),
            name: String::from("Low Drag Speed"),
            description: String::from("Optimized for high-speed circuits with long straights"),
            car_type: CarType::Gt3,
            track_type: TrackType::HighSpeed,
            weather_condition: WeatherCondition::Dry,
            setup: low_drag,
            created_at: Utc::now(),
            is_user_created: false,
            author: None,
            rating: Some(4.0),
            downloads: Some(756)
        }
    ]
}

pub type PresetStoreResult<T> = std::result::Result<T, PresetStoreError>;

#[derive(Error, Debug)]
pub enum PresetStoreError {
    #[error("io error")]
    IoError {
        #[from]
        source: io::Error
    },
    #[error("json error")]
    JsonError {
        #[from]
        source: serde_json::Error
    }
}

// Persistence seam for user presets. The store treats it as best-effort;
// a failing implementation never breaks in-memory behaviour.
pub trait PresetStore: Debug {
    fn load(&self) -> PresetStoreResult<Vec<SetupPreset>>;
    fn save(&mut self, presets: &[SetupPreset]) -> PresetStoreResult<()>;
}

#[derive(Debug)]
pub struct JsonFilePresetStore {
    file_path: PathBuf
}

impl JsonFilePresetStore {
    pub const STORE_FILENAME: &'static str = "user_setups.json";

    pub fn new(file_path: PathBuf) -> JsonFilePresetStore {
        JsonFilePresetStore { file_path }
    }

    pub fn at_default_location() -> JsonFilePresetStore {
        JsonFilePresetStore::new(default_store_path())
    }

    pub fn file_path(&self) -> &PathBuf {
        &self.file_path
    }
}

pub fn default_store_path() -> PathBuf {
    match ProjectDirs::from("", "zephyrj", "apex-tuner") {
        Some(dirs) => dirs.data_dir().join(JsonFilePresetStore::STORE_FILENAME),
        None => PathBuf::from(JsonFilePresetStore::STORE_FILENAME)
    }
}

impl PresetStore for JsonFilePresetStore {
    fn load(&self) -> PresetStoreResult<Vec<SetupPreset>> {
        if !self.file_path.is_file() {
            return Ok(Vec::new());
        }
        let data = fs::read_to_string(&self.file_path)?;
        let presets: Vec<SetupPreset> = serde_json::from_str(&data)?;
        info!("Loaded {} user preset(s) from {}", presets.len(), self.file_path.display());
        Ok(presets)
    }

    fn save(&mut self, presets: &[SetupPreset]) -> PresetStoreResult<()> {
        if let Some(parent) = self.file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.file_path, serde_json::to_string_pretty(presets)?)?;
        Ok(())
    }
}

// For hosts that don't want durability, and for tests.
#[derive(Debug)]
pub struct NullPresetStore;

impl PresetStore for NullPresetStore {
    fn load(&self) -> PresetStoreResult<Vec<SetupPreset>> {
        Ok(Vec::new())
    }

    fn save(&mut self, _presets: &[SetupPreset]) -> PresetStoreResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::preset::{builtin_presets, JsonFilePresetStore, PresetStore};

    #[test]
    fn builtins_are_not_user_created() {
        let presets = builtin_presets();
        assert_eq!(presets.len(), 3);
        assert!(presets.iter().all(|p| !p.is_user_created));
        let ids: Vec<&str> = presets.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["gt3-baseline", "gt3-high-downforce", "gt3-low-drag"]);
    }

    #[test]
    fn high_downforce_preset_tweaks_wings_and_camber() {
        let presets = builtin_presets();
        let high_df = &presets[1];
        assert_eq!(high_df.setup.aerodynamics.front_wing, 45.0);
        assert_eq!(high_df.setup.aerodynamics.rear_wing, 50.0);
        assert_eq!(high_df.setup.suspension.camber_front, -3.2);
        // Untouched fields stay at the GT3 default.
        assert_eq!(high_df.setup.brakes.brake_bias, 56.0);
    }

    #[test]
    fn json_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_setups.json");
        let mut store = JsonFilePresetStore::new(path);

        // Missing file reads as empty, not as an error.
        assert!(store.load().unwrap().is_empty());

        let mut preset = builtin_presets().remove(0);
        preset.id = String::from("user-test");
        preset.is_user_created = true;
        store.save(&[preset.clone()]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0], preset);
    }

    #[test]
    fn corrupt_store_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("user_setups.json");
        std::fs::write(&path, "not json").unwrap();
        let store = JsonFilePresetStore::new(path);
        assert!(store.load().is_err());
    }
}
