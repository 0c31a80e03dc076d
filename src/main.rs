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

mod settings;

use std::env;
use std::fs;
use std::str::FromStr;
use tracing::info;
use tracing_subscriber;
use tracing_appender;

use setup_core::analysis;
use setup_core::export::ExportFormat;
use setup_core::preset::JsonFilePresetStore;
use setup_core::setup::cars::{baseline, CarType};
use setup_core::track;
use setup_core::SetupStore;
use crate::settings::GlobalSettings;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    match env::current_dir() {
        Ok(current_dir) => {
            let file_appender = tracing_appender::rolling::never(current_dir, "apex_tuner.log");
            let subscriber = tracing_subscriber::fmt()
                .with_writer(file_appender)
                .with_ansi(false)
                .compact()
                .finish();
            match tracing::subscriber::set_global_default(subscriber) {
                Ok(_) => {
                    info!("Logging initialised");
                }
                Err(e) => {
                    eprintln!("Failed to init logging. {}", e.to_string());
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to init logging. Couldn't determine current dir {}", e.to_string());
        }
    }

    let app_settings = GlobalSettings::load()?;
    info!("Preset store resolved to {}", app_settings.preset_store_path().display());
    let mut store = SetupStore::new(Box::new(JsonFilePresetStore::new(app_settings.preset_store_path())));

    let args: Vec<String> = env::args().collect();
    match args.get(1).map(|arg| arg.as_str()) {
        Some("tracks") => {
            for circuit in track::track_database() {
                println!("{:<14} {:<28} {:>6.3}km  {:>2} corners  downforce: {:<6}  [{}]",
                         circuit.id, circuit.name, circuit.length_km, circuit.corners,
                         circuit.downforce_level.as_str(), circuit.difficulty.as_str());
            }
            Ok(())
        }
        Some("export") => {
            let format = match args.get(2) {
                Some(fmt) => ExportFormat::from_str(fmt)?,
                None => ExportFormat::Json
            };
            if let Some(car_arg) = args.get(3) {
                store.set_car_type(CarType::from_str(car_arg)?);
            }
            println!("{}", store.export_setup(format)?);
            Ok(())
        }
        Some("analyze") => {
            let file = args.get(2).ok_or("analyze requires a path to an exported setup file")?;
            let data = fs::read_to_string(file)?;
            store.import_setup(&data, ExportFormat::Json)?;

            let base = baseline(store.car_type());
            let changes = analysis::detect_changes(&base, store.current_setup());
            println!("{} parameter(s) differ from the {} baseline",
                     changes.len(), store.car_type().display_name());
            for change in &changes {
                println!("  {:<12} {:<24} {} -> {} ({:+})",
                         change.param.category().as_str(), change.param.name(),
                         change.old_value, change.new_value, change.delta);
            }
            let effects = analysis::calculate_effects(&changes, store.car_type(),
                                                      store.track_type(), store.weather_condition());
            println!();
            println!("corner entry: {:+.1}  mid corner: {:+.1}  corner exit: {:+.1}  straight line: {:+.1}",
                     effects.corner_entry, effects.mid_corner, effects.corner_exit, effects.straight_line);
            println!("braking: {:+.1}  tire wear: {:+.1}  stability: {:+.1}  adjustability: {:+.1}",
                     effects.braking, effects.tire_wear, effects.stability, effects.adjustability);
            println!();
            println!("{}", analysis::analyze_setup_changes(&base, store.current_setup(), store.car_type(),
                                                           store.track_type(), store.weather_condition()));
            Ok(())
        }
        Some("apply-track") => {
            let track_id = args.get(2).ok_or("apply-track requires a track id; run 'apex-tuner tracks' for the list")?;
            let circuit = track::find_track(track_id)
                .ok_or_else(|| format!("No track with id '{}'", track_id))?;
            if let Some(car_arg) = args.get(3) {
                store.set_car_type(CarType::from_str(car_arg)?);
            }
            let before = store.current_setup().clone();
            store.apply_track_setup(circuit);
            let summary = analysis::analyze_setup_changes(&before, store.current_setup(), store.car_type(),
                                                          store.track_type(), store.weather_condition());
            println!("Applied {} recommendations to the {} baseline.", circuit.name, store.car_type().display_name());
            if !summary.is_empty() {
                println!("{}", summary);
            }
            println!();
            println!("{}", store.export_setup(ExportFormat::Json)?);
            Ok(())
        }
        _ => {
            eprintln!("usage: apex-tuner <command>");
            eprintln!();
            eprintln!("commands:");
            eprintln!("  tracks                       list known circuits");
            eprintln!("  export [json|csv] [car]      print a car's baseline setup");
            eprintln!("  analyze <file>               read an exported setup and explain it");
            eprintln!("  apply-track <id> [car]       apply a circuit's recommended setup");
            Ok(())
        }
    }
}
