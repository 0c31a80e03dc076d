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

pub fn round_float_to(float: f64, decimal_places: u32) -> f64 {
    let precision_base: u64 = 10;
    let precision_factor = precision_base.pow(decimal_places) as f64;
    (float * precision_factor).round() / precision_factor
}

#[cfg(test)]
mod tests {
    use crate::numeric::round_float_to;

    #[test]
    fn round_float_tests() {
        assert_eq!(round_float_to(3.8 * 0.9, 2), 3.42);
        assert_eq!(round_float_to(3.8 * 1.1, 2), 4.18);
        assert_eq!(round_float_to(1.0, 2), 1.0);
        assert_eq!(round_float_to(1.2345, 2), 1.23);
        assert_eq!(round_float_to(10.0 / 3.0, 3), 3.333);
    }
}
