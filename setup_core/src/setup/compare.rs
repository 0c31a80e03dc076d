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

use crate::setup::SetupParameters;
use crate::setup::params::{SetupCategory, SetupParam};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParamDifference {
    pub param: SetupParam,
    pub current: f64,
    pub compared: f64,
    pub difference: f64
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryDifferences {
    pub category: SetupCategory,
    pub entries: Vec<ParamDifference>
}

// Diff of two full setups, grouped by category in declaration order. Only
// numeric fields take part; a compound swap never shows up here.
pub fn compare_setups(setup_a: &SetupParameters, setup_b: &SetupParameters) -> Vec<CategoryDifferences> {
    let mut groups: Vec<CategoryDifferences> = Vec::new();
    for param in SetupParam::all() {
        let value_a = setup_a.value(*param);
        let value_b = setup_b.value(*param);
        if value_a != value_b {
            let entry = ParamDifference {
                param: *param,
                current: value_a,
                compared: value_b,
                difference: value_a - value_b
            };
            let category = param.category();
            match groups.last_mut() {
                Some(group) if group.category == category => group.entries.push(entry),
                _ => groups.push(CategoryDifferences { category, entries: vec![entry] })
            }
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use crate::setup::cars::{baseline, CarType};
    use crate::setup::compare::compare_setups;
    use crate::setup::params::{SetupCategory, SetupParam, SuspensionParam, BrakeParam};

    #[test]
    fn identical_setups_have_no_differences() {
        let setup = baseline(CarType::Gt3);
        assert!(compare_setups(&setup, &setup).is_empty());
    }

    #[test]
    fn differences_are_grouped_by_category() {
        let setup_a = baseline(CarType::Gt3);
        let mut setup_b = setup_a.clone();
        setup_b.suspension.camber_front = -3.0;
        setup_b.suspension.toe_front = 0.2;
        setup_b.brakes.brake_bias = 58.0;

        let diff = compare_setups(&setup_a, &setup_b);
        assert_eq!(diff.len(), 2);
        assert_eq!(diff[0].category, SetupCategory::Suspension);
        assert_eq!(diff[0].entries.len(), 2);
        assert_eq!(diff[1].category, SetupCategory::Brakes);
        assert_eq!(diff[1].entries[0].param, SetupParam::Brakes(BrakeParam::BrakeBias));
        assert_eq!(diff[1].entries[0].current, 56.0);
        assert_eq!(diff[1].entries[0].compared, 58.0);
        assert_eq!(diff[1].entries[0].difference, -2.0);
    }

    #[test]
    fn difference_is_antisymmetric() {
        let setup_a = baseline(CarType::Gt3);
        let mut setup_b = setup_a.clone();
        setup_b.suspension.camber_front = -4.0;
        setup_b.transmission.final_drive = 4.2;

        let forward = compare_setups(&setup_a, &setup_b);
        let backward = compare_setups(&setup_b, &setup_a);
        assert_eq!(forward.len(), backward.len());
        for (f_group, b_group) in forward.iter().zip(backward.iter()) {
            for (f, b) in f_group.entries.iter().zip(b_group.entries.iter()) {
                assert_eq!(f.param, b.param);
                assert_eq!(f.difference, -b.difference);
            }
        }
        let camber = SetupParam::Suspension(SuspensionParam::CamberFront);
        assert_eq!(forward[0].entries[0].param, camber);
        assert_eq!(forward[0].entries[0].difference, 1.5);
    }
}
