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

use std::fs;
use std::path::PathBuf;
use config::{Config, ConfigError};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GlobalSettings {
    preset_store_path: String
}

impl GlobalSettings {
    const PRESET_STORE_PATH: &'static str = "preset_store_path";
    const CONFIG_FILENAME: &'static str = "apex-tuner-conf";

    pub fn default() -> Self {
        GlobalSettings {
            preset_store_path: setup_core::preset::default_store_path().to_string_lossy().into_owned()
        }
    }

    pub fn load() -> Result<Self, ConfigError> {
        let builder = Config::builder();
        return match builder
            .set_default(GlobalSettings::PRESET_STORE_PATH, setup_core::preset::default_store_path().to_string_lossy().into_owned())?
            .add_source(config::File::with_name(GlobalSettings::CONFIG_FILENAME))
            .add_source(config::Environment::with_prefix("APP"))
            .build() {
            Ok(settings) => {
                settings.try_deserialize()
            }
            Err(e) => {
                warn!("Failed to load settings. {}", e.to_string());
                let ret = GlobalSettings::default();
                ret.write().unwrap_or_else(|e| { error!("Failed to write settings. {}", e.to_string())});
                Ok(ret)
            }
        }
    }

    pub fn preset_store_path(&self) -> PathBuf {
        PathBuf::from(&self.preset_store_path)
    }

    pub fn set_preset_store_path(&mut self, new_path: &std::path::Path) {
        self.preset_store_path = new_path.to_string_lossy().into_owned();
    }

    pub fn write(&self) -> std::io::Result<()> {
        fs::write(format!("{}.toml", GlobalSettings::CONFIG_FILENAME), toml::to_string(&self).map_err(|_e|{
            std::io::Error::new(std::io::ErrorKind::Other, "Failed to encode settings to toml")
        })?)
    }
}
