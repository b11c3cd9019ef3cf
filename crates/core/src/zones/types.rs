//! Zone data types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::ZoneError;

/// A Brazilian postal code (CEP), eight decimal digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cep(u32);

impl Cep {
    /// Number of digits in a CEP.
    pub const DIGITS: usize = 8;

    /// Parses a CEP, accepting `-`, `.` and spaces as separators.
    ///
    /// `"58070000"`, `"58070-000"` and `"58.070-000"` all parse to the same
    /// value.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError::InvalidCep`] unless exactly eight digits remain
    /// once separators are removed.
    pub fn parse(raw: &str) -> Result<Self, ZoneError> {
        let mut value: u32 = 0;
        let mut digits = 0usize;

        for ch in raw.trim().chars() {
            match ch {
                '0'..='9' => {
                    digits += 1;
                    if digits > Self::DIGITS {
                        return Err(ZoneError::InvalidCep(raw.to_string()));
                    }
                    value = value * 10 + (ch as u32 - '0' as u32);
                }
                '-' | '.' | ' ' => {}
                _ => return Err(ZoneError::InvalidCep(raw.to_string())),
            }
        }

        if digits == Self::DIGITS {
            Ok(Self(value))
        } else {
            Err(ZoneError::InvalidCep(raw.to_string()))
        }
    }

    /// Returns the numeric value.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Formats as `XXXXX-XXX`.
    #[must_use]
    pub fn formatted(self) -> String {
        format!("{:05}-{:03}", self.0 / 1000, self.0 % 1000)
    }
}

impl fmt::Display for Cep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:08}", self.0)
    }
}

impl FromStr for Cep {
    type Err = ZoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cep {
    type Error = ZoneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cep> for String {
    fn from(cep: Cep) -> Self {
        cep.to_string()
    }
}

/// An inclusive CEP interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CepRange {
    /// First CEP covered.
    pub start: Cep,
    /// Last CEP covered.
    pub end: Cep,
}

impl CepRange {
    /// Creates a range from two CEP strings.
    ///
    /// # Errors
    ///
    /// Returns an error if either bound is not a CEP or if `start > end`.
    pub fn parse(start: &str, end: &str) -> Result<Self, ZoneError> {
        let start = Cep::parse(start)?;
        let end = Cep::parse(end)?;
        if start > end {
            return Err(ZoneError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns true if `cep` lies within the range, bounds included.
    #[must_use]
    pub fn contains(&self, cep: Cep) -> bool {
        self.start <= cep && cep <= self.end
    }
}

/// A delivery zone as configured by an administrator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneDefinition {
    /// Zone ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Precedence; 1 is the highest.
    pub priority: i32,
    /// Inactive zones never match.
    pub active: bool,
    /// CEP intervals covered by the zone. May overlap.
    pub ranges: Vec<CepRange>,
}

impl ZoneDefinition {
    /// Smallest allowed priority value.
    pub const HIGHEST_PRIORITY: i32 = 1;

    /// Checks that `priority` is [`Self::HIGHEST_PRIORITY`] or greater.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError::InvalidPriority`] for zero and negative values.
    pub fn check_priority(priority: i32) -> Result<i32, ZoneError> {
        if priority < Self::HIGHEST_PRIORITY {
            return Err(ZoneError::InvalidPriority(priority));
        }
        Ok(priority)
    }

    /// Returns true if the zone is active and any range contains `cep`.
    #[must_use]
    pub fn covers(&self, cep: Cep) -> bool {
        self.active && self.ranges.iter().any(|range| range.contains(cep))
    }
}
