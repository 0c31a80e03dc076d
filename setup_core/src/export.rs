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
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::error::{Error, ErrorKind, PropertyParseError, Result};
use crate::setup::{SetupParameters, TrackType, WeatherCondition};
use crate::setup::cars::CarType;
use crate::setup::params::{SetupCategory, SetupParam};

pub const EXPORT_VERSION: &str = "1.0";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ExportFormat {
    Json,
    Csv
}

impl ExportFormat {
    pub const JSON_VALUE: &'static str = "json";
    pub const CSV_VALUE: &'static str = "csv";

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Json => { ExportFormat::JSON_VALUE }
            ExportFormat::Csv => { ExportFormat::CSV_VALUE }
        }
    }
}

impl FromStr for ExportFormat {
    type Err = PropertyParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            ExportFormat::JSON_VALUE => Ok(ExportFormat::Json),
            ExportFormat::CSV_VALUE => Ok(ExportFormat::Csv),
            _ => Err(PropertyParseError::new(s))
        }
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupExport {
    pub name: String,
    pub car_type: CarType,
    pub track_type: TrackType,
    pub weather_condition: WeatherCondition,
    pub setup: SetupParameters,
    pub exported_at: DateTime<Utc>,
    pub version: String
}

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetupImport {
    pub car_type: CarType,
    #[serde(default)]
    pub track_type: TrackType,
    #[serde(default)]
    pub weather_condition: WeatherCondition,
    pub setup: SetupParameters
}

pub fn export_json(car_type: CarType,
                   track_type: TrackType,
                   weather: WeatherCondition,
                   setup: &SetupParameters) -> Result<String> {
    let now = Utc::now();
    let export = SetupExport {
        name: format!("Custom Setup {}", now.format("%Y-%m-%d")),
        car_type,
        track_type,
        weather_condition: weather,
        setup: setup.clone(),
        exported_at: now,
        version: String::from(EXPORT_VERSION)
    };
    Ok(serde_json::to_string_pretty(&export)?)
}

// Flat Category,Parameter,Value listing; category-then-field order with the
// two compound fields at the tail of the tires block.
pub fn export_csv(setup: &SetupParameters) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["Category", "Parameter", "Value"])?;
    for category in SetupCategory::all() {
        for param in SetupParam::all().iter().filter(|p| p.category() == *category) {
            let value = setup.value(*param).to_string();
            writer.write_record([category.as_str(), param.name(), value.as_str()])?;
        }
        if *category == SetupCategory::Tires {
            writer.write_record([category.as_str(), "compoundFront", setup.tires.compound_front.as_str()])?;
            writer.write_record([category.as_str(), "compoundRear", setup.tires.compound_rear.as_str()])?;
        }
    }
    let bytes = writer.into_inner().map_err(|e| {
        Error::new(ErrorKind::CsvEncodeError, e.to_string())
    })?;
    String::from_utf8(bytes).map_err(|e| {
        Error::new(ErrorKind::CsvEncodeError, e.to_string())
    })
}

pub fn import_json(data: &str) -> Result<SetupImport> {
    let value: serde_json::Value = serde_json::from_str(data)?;
    if value.get("setup").is_none() || value.get("carType").is_none() {
        return Err(Error::new(ErrorKind::InvalidImport,
                              String::from("payload must contain 'setup' and 'carType'")));
    }
    Ok(serde_json::from_value(value)?)
}
