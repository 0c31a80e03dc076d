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
use crate::setup::TrackType;

const SIGNIFICANCE_THRESHOLD: f64 = 10.0;

pub fn generate_summary(effects: &EffectVector, track_type: TrackType) -> String {
    let mut positives: Vec<&'static str> = Vec::new();
    let mut negatives: Vec<&'static str> = Vec::new();
    let threshold = SIGNIFICANCE_THRESHOLD;

    if effects.corner_entry > threshold { positives.push("corner entry responsiveness"); }
    if effects.corner_entry < -threshold { negatives.push("corner entry responsiveness"); }

    if effects.mid_corner > threshold { positives.push("mid-corner grip"); }
    if effects.mid_corner < -threshold { negatives.push("mid-corner grip"); }

    if effects.corner_exit > threshold { positives.push("corner exit traction"); }
    if effects.corner_exit < -threshold { negatives.push("corner exit traction"); }

    if effects.straight_line > threshold { positives.push("straight-line speed"); }
    if effects.straight_line < -threshold { negatives.push("straight-line speed"); }

    if effects.braking > threshold { positives.push("braking performance"); }
    if effects.braking < -threshold { negatives.push("braking performance"); }

    if effects.stability > threshold { positives.push("overall stability"); }
    if effects.stability < -threshold { negatives.push("overall stability"); }

    // Wear runs the other way: a drop in the score is longer tire life.
    if effects.tire_wear < -threshold { positives.push("tire longevity"); }
    if effects.tire_wear > threshold { negatives.push("tire longevity"); }

    if effects.adjustability > threshold { positives.push("car adjustability"); }
    if effects.adjustability < -threshold { negatives.push("car adjustability"); }

    if positives.is_empty() && negatives.is_empty() {
        return String::from("Your setup changes have minimal impact on overall performance.");
    }

    let mut summary = String::from("Your setup changes will");
    if !positives.is_empty() {
        summary.push_str(&format!(" improve {}", format_list(&positives)));
    }
    if !negatives.is_empty() {
        if !positives.is_empty() {
            summary.push_str(" but reduce");
        } else {
            summary.push_str(" reduce");
        }
        summary.push_str(&format!(" {}", format_list(&negatives)));
    }

    match track_context(track_type, effects) {
        Some(context) => summary.push_str(&format!(". {}", context)),
        None => summary.push('.')
    }
    summary
}

fn format_list(items: &[&str]) -> String {
    match items.len() {
        1 => items[0].to_string(),
        2 => format!("{} and {}", items[0], items[1]),
        _ => format!("{}, and {}", items[..items.len() - 1].join(", "), items[items.len() - 1])
    }
}

fn track_context(track_type: TrackType, effects: &EffectVector) -> Option<&'static str> {
    match track_type {
        TrackType::Technical => {
            if effects.mid_corner > 15.0 {
                return Some("This setup should work well on technical circuits with lots of corners");
            }
            if effects.straight_line > 15.0 {
                return Some("However, this may not be optimal for a technical track layout");
            }
        }
        TrackType::HighSpeed => {
            if effects.straight_line > 15.0 {
                return Some("This setup is well-suited for high-speed circuits");
            }
            if effects.mid_corner > 15.0 && effects.straight_line < 0.0 {
                return Some("However, you may be sacrificing valuable straight-line speed");
            }
        }
        TrackType::Street => {
            if effects.stability > 10.0 {
                return Some("The improved stability will help on street circuits with limited run-off areas");
            }
            if effects.adjustability < -10.0 {
                return Some("Be careful as this setup may be less forgiving on bumpy street circuits");
            }
        }
        TrackType::Balanced => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use crate::analysis::EffectVector;
    use crate::analysis::summary::{format_list, generate_summary};
    use crate::setup::TrackType;

    #[test]
    fn list_formatting() {
        assert_eq!(format_list(&["mid-corner grip"]), "mid-corner grip");
        assert_eq!(format_list(&["a", "b"]), "a and b");
        assert_eq!(format_list(&["a", "b", "c"]), "a, b, and c");
    }

    #[test]
    fn minimal_impact_below_threshold() {
        let effects = EffectVector { mid_corner: 9.9, straight_line: -9.9, ..EffectVector::ZERO };
        assert_eq!(generate_summary(&effects, TrackType::Balanced),
                   "Your setup changes have minimal impact on overall performance.");
    }

    #[test]
    fn improvements_and_reductions_are_listed() {
        let effects = EffectVector {
            mid_corner: 30.0,
            corner_entry: 22.5,
            straight_line: -12.0,
            ..EffectVector::ZERO
        };
        assert_eq!(generate_summary(&effects, TrackType::Balanced),
                   "Your setup changes will improve corner entry responsiveness and mid-corner grip but reduce straight-line speed.");
    }

    #[test]
    fn reductions_only() {
        let effects = EffectVector { stability: -15.0, ..EffectVector::ZERO };
        assert_eq!(generate_summary(&effects, TrackType::Balanced),
                   "Your setup changes will reduce overall stability.");
    }

    #[test]
    fn tire_wear_sign_is_inverted() {
        let effects = EffectVector { tire_wear: -20.0, ..EffectVector::ZERO };
        let text = generate_summary(&effects, TrackType::Balanced);
        assert_eq!(text, "Your setup changes will improve tire longevity.");

        let effects = EffectVector { tire_wear: 20.0, ..EffectVector::ZERO };
        let text = generate_summary(&effects, TrackType::Balanced);
        assert_eq!(text, "Your setup changes will reduce tire longevity.");
    }

    #[test]
    fn technical_track_context_is_appended() {
        let effects = EffectVector { mid_corner: 30.0, ..EffectVector::ZERO };
        assert_eq!(generate_summary(&effects, TrackType::Technical),
                   "Your setup changes will improve mid-corner grip. This setup should work well on technical circuits with lots of corners");
    }

    #[test]
    fn street_track_warns_about_forgiveness() {
        let effects = EffectVector { adjustability: -12.0, ..EffectVector::ZERO };
        assert_eq!(generate_summary(&effects, TrackType::Street),
                   "Your setup changes will reduce car adjustability. Be careful as this setup may be less forgiving on bumpy street circuits");
    }
}
