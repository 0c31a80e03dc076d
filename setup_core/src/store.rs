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

use chrono::Utc;
use tracing::{error, info, warn};
use uuid::Uuid;
use crate::error::{Error, ErrorKind, Result};
use crate::export::{self, ExportFormat};
use crate::numeric::round_float_to;
use crate::preset::{builtin_presets, PresetStore, SetupPreset};
use crate::setup::{SetupParameters, TrackType, WeatherCondition};
use crate::setup::cars::{baseline, CarType};
use crate::setup::params::SetupParam;
use crate::track::Track;

pub const HISTORY_LIMIT: usize = 50;

// Single source of truth for the active setup. Owns the edit history and
// the preset list; every mutation either fully replaces the
// (setup, history) pair or leaves it untouched.
#[derive(Debug)]
pub struct SetupStore {
    current_setup: SetupParameters,
    car_type: CarType,
    track_type: TrackType,
    weather_condition: WeatherCondition,
    presets: Vec<SetupPreset>,
    setup_history: Vec<SetupParameters>,
    history_index: usize,
    preset_store: Box<dyn PresetStore>
}

impl SetupStore {
    pub fn new(preset_store: Box<dyn PresetStore>) -> SetupStore {
        let mut presets = builtin_presets();
        match preset_store.load() {
            Ok(user_presets) => presets.extend(user_presets),
            Err(e) => warn!("Failed to load user presets. {}", e.to_string())
        }
        let initial_setup = baseline(CarType::Gt3);
        SetupStore {
            current_setup: initial_setup.clone(),
            car_type: CarType::Gt3,
            track_type: TrackType::Balanced,
            weather_condition: WeatherCondition::Dry,
            presets,
            setup_history: vec![initial_setup],
            history_index: 0,
            preset_store
        }
    }

    pub fn current_setup(&self) -> &SetupParameters {
        &self.current_setup
    }

    pub fn car_type(&self) -> CarType {
        self.car_type
    }

    pub fn track_type(&self) -> TrackType {
        self.track_type
    }

    pub fn weather_condition(&self) -> WeatherCondition {
        self.weather_condition
    }

    pub fn presets(&self) -> &Vec<SetupPreset> {
        &self.presets
    }

    pub fn history_len(&self) -> usize {
        self.setup_history.len()
    }

    pub fn history_index(&self) -> usize {
        self.history_index
    }

    pub fn update_parameter(&mut self, param: SetupParam, value: f64) {
        let range = param.range();
        if !range.contains(value) {
            // Accepted as-is; clamping is the sliders' job.
            warn!("{} value {} outside [{}, {}]", param.name(), value, range.min, range.max);
        }
        let new_setup = self.current_setup.with_value(param, value);
        self.push_history(new_setup);
    }

    pub fn set_car_type(&mut self, car_type: CarType) {
        self.car_type = car_type;
        self.reset_history(baseline(car_type));
    }

    pub fn set_track_type(&mut self, track_type: TrackType) {
        self.track_type = track_type;
    }

    pub fn set_weather_condition(&mut self, weather: WeatherCondition) {
        self.weather_condition = weather;
    }

    pub fn load_preset(&mut self, preset_id: &str) -> Result<()> {
        let preset = match self.presets.iter().find(|p| p.id == preset_id) {
            Some(preset) => preset.clone(),
            None => {
                return Err(Error::new(ErrorKind::NoSuchPreset, String::from(preset_id)));
            }
        };
        self.car_type = preset.car_type;
        self.track_type = preset.track_type;
        self.weather_condition = preset.weather_condition;
        self.reset_history(preset.setup);
        info!("Loaded preset '{}'", preset_id);
        Ok(())
    }

    // Wing and brake settings come straight off the recommendation sheet;
    // spring/damper rates and gearing are scaled from the active car's
    // baseline, not from whatever is currently dialled in.
    pub fn apply_track_setup(&mut self, track: &Track) {
        let base = baseline(self.car_type);
        let mut new_setup = self.current_setup.clone();
        let rec = &track.setup_recommendations;

        new_setup.aerodynamics.front_wing = rec.aerodynamics.front_wing;
        new_setup.aerodynamics.rear_wing = rec.aerodynamics.rear_wing;

        let spring_multiplier = rec.suspension.springs.rate_multiplier();
        let damper_multiplier = rec.suspension.dampers.rate_multiplier();
        new_setup.suspension.spring_rate_front = (base.suspension.spring_rate_front * spring_multiplier).round();
        new_setup.suspension.spring_rate_rear = (base.suspension.spring_rate_rear * spring_multiplier).round();
        new_setup.suspension.bump_damping_front = (base.suspension.bump_damping_front * damper_multiplier).round();
        new_setup.suspension.bump_damping_rear = (base.suspension.bump_damping_rear * damper_multiplier).round();
        new_setup.suspension.rebound_damping_front = (base.suspension.rebound_damping_front * damper_multiplier).round();
        new_setup.suspension.rebound_damping_rear = (base.suspension.rebound_damping_rear * damper_multiplier).round();

        let gearing_multiplier = rec.transmission.gearing.final_drive_multiplier();
        let diff_multiplier = rec.transmission.differential.differential_multiplier();
        new_setup.transmission.final_drive = round_float_to(base.transmission.final_drive * gearing_multiplier, 2);
        new_setup.transmission.differential_on_throttle = (base.transmission.differential_on_throttle * diff_multiplier).round();

        new_setup.brakes.brake_bias = rec.brakes.bias;
        let (front_duct, rear_duct) = rec.brakes.cooling.brake_duct_sizes();
        new_setup.brakes.brake_duct_size_front = front_duct;
        new_setup.brakes.brake_duct_size_rear = rear_duct;

        info!("Applied {} recommendations to current setup", track.name);
        self.push_history(new_setup);
    }

    pub fn reset_to_baseline(&mut self) {
        self.reset_history(baseline(self.car_type));
    }

    pub fn undo(&mut self) -> bool {
        if !self.can_undo() {
            return false;
        }
        self.history_index -= 1;
        self.current_setup = self.setup_history[self.history_index].clone();
        true
    }

    pub fn redo(&mut self) -> bool {
        if !self.can_redo() {
            return false;
        }
        self.history_index += 1;
        self.current_setup = self.setup_history[self.history_index].clone();
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history_index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.history_index < self.setup_history.len() - 1
    }

    // Always succeeds in memory; durability is best-effort and a failed
    // write only leaves a log line behind.
    pub fn save_setup(&mut self, name: &str, description: &str) -> String {
        let preset = SetupPreset {
            id: format!("user-{}", Uuid::new_v4()),
            name: String::from(name),
            description: String::from(description),
            car_type: self.car_type,
            track_type: self.track_type,
            weather_condition: self.weather_condition,
            setup: self.current_setup.clone(),
            created_at: Utc::now(),
            is_user_created: true,
            author: None,
            rating: None,
            downloads: None
        };
        let preset_id = preset.id.clone();
        self.presets.push(preset);

        let user_presets: Vec<SetupPreset> = self.presets.iter()
            .filter(|p| p.is_user_created)
            .cloned()
            .collect();
        if let Err(e) = self.preset_store.save(&user_presets) {
            error!("Failed to persist user presets. {}", e.to_string());
        }
        preset_id
    }

    pub fn export_setup(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Json => {
                export::export_json(self.car_type, self.track_type, self.weather_condition, &self.current_setup)
            }
            ExportFormat::Csv => {
                export::export_csv(&self.current_setup)
            }
        }
    }

    // Fails closed: nothing changes unless the payload parses completely.
    pub fn import_setup(&mut self, data: &str, format: ExportFormat) -> Result<()> {
        match format {
            ExportFormat::Json => {
                let imported = export::import_json(data)?;
                self.car_type = imported.car_type;
                self.track_type = imported.track_type;
                self.weather_condition = imported.weather_condition;
                self.reset_history(imported.setup);
                Ok(())
            }
            ExportFormat::Csv => {
                Err(Error::new(ErrorKind::UnsupportedFormat,
                               String::from("csv payloads can't be imported")))
            }
        }
    }

    fn push_history(&mut self, new_setup: SetupParameters) {
        self.setup_history.truncate(self.history_index + 1);
        self.setup_history.push(new_setup.clone());
        if self.setup_history.len() > HISTORY_LIMIT {
            self.setup_history.remove(0);
        }
        self.history_index = self.setup_history.len() - 1;
        self.current_setup = new_setup;
    }

    fn reset_history(&mut self, new_setup: SetupParameters) {
        self.current_setup = new_setup.clone();
        self.setup_history = vec![new_setup];
        self.history_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use crate::error::ErrorKind;
    use crate::export::ExportFormat;
    use crate::preset::{NullPresetStore, PresetStore, PresetStoreError, PresetStoreResult, SetupPreset};
    use crate::setup::cars::{baseline, CarType};
    use crate::setup::params::{AeroParam, BrakeParam, SetupParam, SuspensionParam};
    use crate::setup::{TrackType, WeatherCondition};
    use crate::store::{SetupStore, HISTORY_LIMIT};
    use crate::track::find_track;

    fn new_store() -> SetupStore {
        SetupStore::new(Box::new(NullPresetStore))
    }

    const CAMBER_FRONT: SetupParam = SetupParam::Suspension(SuspensionParam::CamberFront);

    #[test]
    fn starts_on_gt3_baseline_with_single_history_entry() {
        let store = new_store();
        assert_eq!(store.car_type(), CarType::Gt3);
        assert_eq!(*store.current_setup(), baseline(CarType::Gt3));
        assert_eq!(store.history_len(), 1);
        assert_eq!(store.history_index(), 0);
        assert!(!store.can_undo());
        assert!(!store.can_redo());
        assert_eq!(store.presets().len(), 3);
    }

    #[test]
    fn update_parameter_appends_to_history() {
        let mut store = new_store();
        store.update_parameter(CAMBER_FRONT, -3.0);
        assert_eq!(store.current_setup().suspension.camber_front, -3.0);
        assert_eq!(store.history_len(), 2);
        assert_eq!(store.history_index(), 1);
        assert!(store.can_undo());
        assert!(!store.can_redo());
    }

    #[test]
    fn out_of_range_values_are_accepted_as_is() {
        let mut store = new_store();
        store.update_parameter(CAMBER_FRONT, -99.0);
        assert_eq!(store.current_setup().suspension.camber_front, -99.0);
    }

    #[test]
    fn history_index_tracks_edit_count_up_to_the_cap() {
        let mut store = new_store();
        for i in 0..10 {
            store.update_parameter(SetupParam::Aerodynamics(AeroParam::RearWing), 35.0 + i as f64);
        }
        assert_eq!(store.history_index(), 10);

        for i in 0..100 {
            store.update_parameter(SetupParam::Aerodynamics(AeroParam::RearWing), 45.0 + i as f64);
        }
        assert_eq!(store.history_len(), HISTORY_LIMIT);
        assert_eq!(store.history_index(), HISTORY_LIMIT - 1);
        // Newest value survives the evictions.
        assert_eq!(store.current_setup().aerodynamics.rear_wing, 144.0);
    }

    #[test]
    fn undo_redo_round_trip_restores_exact_setup() {
        let mut store = new_store();
        store.update_parameter(CAMBER_FRONT, -3.0);
        store.update_parameter(CAMBER_FRONT, -3.5);
        let before = store.current_setup().clone();

        assert!(store.undo());
        assert_eq!(store.current_setup().suspension.camber_front, -3.0);
        assert!(store.redo());
        assert_eq!(*store.current_setup(), before);
    }

    #[test]
    fn undo_redo_past_bounds_are_no_ops() {
        let mut store = new_store();
        assert!(!store.undo());
        assert!(!store.redo());
        store.update_parameter(CAMBER_FRONT, -3.0);
        assert!(store.undo());
        assert!(!store.undo());
        assert!(store.redo());
        assert!(!store.redo());
    }

    #[test]
    fn new_edit_truncates_redo_tail() {
        let mut store = new_store();
        store.update_parameter(CAMBER_FRONT, -3.0);
        store.update_parameter(CAMBER_FRONT, -3.5);
        store.undo();
        assert!(store.can_redo());

        store.update_parameter(CAMBER_FRONT, -2.8);
        assert!(!store.can_redo());
        assert_eq!(store.history_len(), 3);
        assert_eq!(store.current_setup().suspension.camber_front, -2.8);
    }

    #[test]
    fn set_car_type_discards_history() {
        let mut store = new_store();
        store.update_parameter(CAMBER_FRONT, -3.0);
        store.set_car_type(CarType::F1);
        assert_eq!(*store.current_setup(), baseline(CarType::F1));
        assert_eq!(store.history_len(), 1);
        assert!(!store.can_undo());
    }

    #[test]
    fn reset_to_baseline_restores_active_car() {
        let mut store = new_store();
        store.set_car_type(CarType::Gt4);
        store.update_parameter(CAMBER_FRONT, -3.3);
        store.reset_to_baseline();
        assert_eq!(*store.current_setup(), baseline(CarType::Gt4));
        assert_eq!(store.history_len(), 1);
    }

    #[test]
    fn load_preset_restores_full_context() {
        let mut store = new_store();
        store.load_preset("gt3-high-downforce").unwrap();
        assert_eq!(store.track_type(), TrackType::Technical);
        assert_eq!(store.weather_condition(), WeatherCondition::Dry);
        assert_eq!(store.current_setup().aerodynamics.front_wing, 45.0);
        assert_eq!(store.history_len(), 1);
    }

    #[test]
    fn load_unknown_preset_changes_nothing() {
        let mut store = new_store();
        store.update_parameter(CAMBER_FRONT, -3.0);
        let setup_before = store.current_setup().clone();
        let history_before = (store.history_len(), store.history_index());

        let err = store.load_preset("nonexistent-id").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NoSuchPreset);
        assert_eq!(*store.current_setup(), setup_before);
        assert_eq!((store.history_len(), store.history_index()), history_before);
    }

    #[test]
    fn apply_track_setup_copies_and_derives() {
        let mut store = new_store();
        // Move away from baseline first; direct-copy fields must still land
        // exactly on the recommendation.
        store.update_parameter(SetupParam::Brakes(BrakeParam::BrakeBias), 60.0);
        store.update_parameter(SetupParam::Suspension(SuspensionParam::SpringRateFront), 150.0);

        let track = find_track("zandvoort").unwrap();
        store.apply_track_setup(track);

        let setup = store.current_setup();
        assert_eq!(setup.brakes.brake_bias, 58.0);
        assert_eq!(setup.aerodynamics.front_wing, 30.0);
        assert_eq!(setup.aerodynamics.rear_wing, 34.0);
        // Medium springs: derived from the GT3 baseline, not the edited 150.
        assert_eq!(setup.suspension.spring_rate_front, 120.0);
        // Medium cooling duct sizes.
        assert_eq!(setup.brakes.brake_duct_size_front, 3.0);
        assert_eq!(setup.brakes.brake_duct_size_rear, 2.0);
        // Applied as a normal edit, so it can be undone.
        assert!(store.can_undo());
    }

    #[test]
    fn apply_monza_setup_scales_from_baseline() {
        let mut store = new_store();
        let track = find_track("monza").unwrap();
        store.apply_track_setup(track);

        let setup = store.current_setup();
        // Stiff springs on the GT3 baseline: 120 * 1.2 / 130 * 1.2
        assert_eq!(setup.suspension.spring_rate_front, 144.0);
        assert_eq!(setup.suspension.spring_rate_rear, 156.0);
        // Long gearing: 3.8 * 0.9 to two decimals; low diff: 60 * 0.7
        assert_eq!(setup.transmission.final_drive, 3.42);
        assert_eq!(setup.transmission.differential_on_throttle, 42.0);
        assert_eq!(setup.brakes.brake_bias, 54.0);
        assert_eq!(setup.brakes.brake_duct_size_front, 5.0);
        assert_eq!(setup.brakes.brake_duct_size_rear, 4.0);
    }

    #[test]
    fn save_setup_appends_user_preset() {
        let mut store = new_store();
        store.update_parameter(CAMBER_FRONT, -3.1);
        let preset_id = store.save_setup("My Setup", "test notes");
        assert!(preset_id.starts_with("user-"));
        assert_eq!(store.presets().len(), 4);
        let saved = store.presets().last().unwrap();
        assert!(saved.is_user_created);
        assert_eq!(saved.setup.suspension.camber_front, -3.1);

        // A loadable preset straight away.
        store.reset_to_baseline();
        store.load_preset(&preset_id).unwrap();
        assert_eq!(store.current_setup().suspension.camber_front, -3.1);
    }

    #[derive(Debug)]
    struct FailingPresetStore;

    impl PresetStore for FailingPresetStore {
        fn load(&self) -> PresetStoreResult<Vec<SetupPreset>> {
            Err(PresetStoreError::IoError {
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope")
            })
        }

        fn save(&mut self, _presets: &[SetupPreset]) -> PresetStoreResult<()> {
            Err(PresetStoreError::IoError {
                source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope")
            })
        }
    }

    #[test]
    fn save_setup_survives_persistence_failure() {
        let mut store = SetupStore::new(Box::new(FailingPresetStore));
        assert_eq!(store.presets().len(), 3);
        store.save_setup("Durable Anyway", "");
        assert_eq!(store.presets().len(), 4);
    }

    #[test]
    fn json_export_import_round_trip() {
        let mut store = new_store();
        store.set_car_type(CarType::Prototype);
        store.set_track_type(TrackType::HighSpeed);
        store.set_weather_condition(WeatherCondition::Wet);
        store.update_parameter(CAMBER_FRONT, -3.7);
        let exported = store.export_setup(ExportFormat::Json).unwrap();
        let expected_setup = store.current_setup().clone();

        let mut other = new_store();
        other.import_setup(&exported, ExportFormat::Json).unwrap();
        assert_eq!(*other.current_setup(), expected_setup);
        assert_eq!(other.car_type(), CarType::Prototype);
        assert_eq!(other.track_type(), TrackType::HighSpeed);
        assert_eq!(other.weather_condition(), WeatherCondition::Wet);
        assert_eq!(other.history_len(), 1);
    }

    #[test]
    fn failed_import_leaves_state_untouched() {
        let mut store = new_store();
        store.update_parameter(CAMBER_FRONT, -3.0);
        let setup_before = store.current_setup().clone();
        let car_before = store.car_type();

        assert!(store.import_setup("{\"name\": \"no setup here\"}", ExportFormat::Json).is_err());
        assert!(store.import_setup("garbage", ExportFormat::Json).is_err());
        let err = store.import_setup("Category,Parameter,Value", ExportFormat::Csv).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedFormat);

        assert_eq!(*store.current_setup(), setup_before);
        assert_eq!(store.car_type(), car_before);
        assert_eq!(store.history_len(), 2);
    }
}
