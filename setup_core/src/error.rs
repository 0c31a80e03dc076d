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

use std::{error, fmt, io, result};
use std::fmt::{Display, Formatter};
use crate::preset::PresetStoreError;

pub type Result<T> = result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    details: String
}

impl Error {
    pub(crate) fn new(kind: ErrorKind, details: String) -> Error {
        Error{ kind, details }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.kind.as_str(), self.details)
    }
}

impl error::Error for Error {}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::new(ErrorKind::IOError, format!("{}. {}", e.to_string(), e.kind().to_string()))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::new(ErrorKind::JsonDecodeError, e.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Error::new(ErrorKind::CsvEncodeError, e.to_string())
    }
}

impl From<PresetStoreError> for Error {
    fn from(e: PresetStoreError) -> Self {
        Error::new(ErrorKind::PersistenceError, e.to_string())
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ErrorKind {
    NoSuchPreset,
    NoSuchTrack,
    InvalidImport,
    UnsupportedFormat,
    IOError,
    JsonDecodeError,
    CsvEncodeError,
    PersistenceError,
    ArgumentError,
    Uncategorized
}

impl ErrorKind {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::NoSuchPreset => "preset doesn't exist",
            ErrorKind::NoSuchTrack => "track doesn't exist",
            ErrorKind::InvalidImport => "imported setup is invalid",
            ErrorKind::UnsupportedFormat => "unsupported format",
            ErrorKind::IOError => "io error",
            ErrorKind::JsonDecodeError => "json decode error",
            ErrorKind::CsvEncodeError => "csv encode error",
            ErrorKind::PersistenceError => "persistence error",
            ErrorKind::ArgumentError => "argument error",
            ErrorKind::Uncategorized => "uncategorized error"
        }
    }
}

#[derive(Debug)]
pub struct PropertyParseError {
    invalid_value: String
}

impl PropertyParseError {
    pub fn new(invalid_value: &str) -> PropertyParseError {
        PropertyParseError {
            invalid_value: String::from(invalid_value)
        }
    }
}

impl Display for PropertyParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Unknown value '{}'", &self.invalid_value)
    }
}

impl error::Error for PropertyParseError {}
