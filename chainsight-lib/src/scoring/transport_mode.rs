use super::ScoreError;
use core::str::FromStr;
use serde::Serialize;
use strum::{Display, EnumIter, EnumString};

/// How a shipment travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum TransportMode {
    Sea,
    Air,
}

impl TransportMode {
    /// Parse a user-supplied mode, reporting anything but Sea/Air as invalid input.
    pub fn parse(s: &str) -> Result<Self, ScoreError> {
        Self::from_str(s.trim()).map_err(|_err| ScoreError::invalid("transport_mode", format!("'{s}' is not one of Sea, Air")))
    }
}
