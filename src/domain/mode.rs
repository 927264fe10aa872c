//! Operating modes a caller may request.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The caller's requested operating context.
///
/// Modes carry no ordering; they only gate which actors may proceed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestedMode {
    Mode1,
    Mode2,
    Mode3,
}

impl RequestedMode {
    /// All modes, in declaration order.
    pub const ALL: [Self; 3] = [Self::Mode1, Self::Mode2, Self::Mode3];
}

impl fmt::Display for RequestedMode {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Mode1 => "mode1",
            Self::Mode2 => "mode2",
            Self::Mode3 => "mode3",
        };
        formatter.write_str(label)
    }
}

/// Returned when a string names no known mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown requested mode: {0}")]
pub struct ParseModeError(String);

impl FromStr for RequestedMode {
    type Err = ParseModeError;

    /// Accepts `mode1`, `mode-1`, `mode_1` or a bare `1`, ignoring case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use financial_summarization::domain::RequestedMode;
    ///
    /// assert_eq!("Mode-2".parse::<RequestedMode>().unwrap(), RequestedMode::Mode2);
    /// assert!("mode4".parse::<RequestedMode>().is_err());
    /// ```
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        let digit = normalized
            .strip_prefix("mode")
            .map_or(normalized.as_str(), trim_separators);

        match digit {
            "1" => Ok(Self::Mode1),
            "2" => Ok(Self::Mode2),
            "3" => Ok(Self::Mode3),
            _ => Err(ParseModeError(value.to_string())),
        }
    }
}

fn trim_separators(rest: &str) -> &str {
    rest.trim_start_matches(['-', '_'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("mode1", RequestedMode::Mode1)]
    #[case("MODE2", RequestedMode::Mode2)]
    #[case("mode-3", RequestedMode::Mode3)]
    #[case("mode_1", RequestedMode::Mode1)]
    #[case(" 2 ", RequestedMode::Mode2)]
    fn parses_supported_spellings(#[case] input: &str, #[case] expected: RequestedMode) {
        assert_eq!(input.parse::<RequestedMode>(), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("mode")]
    #[case("mode4")]
    #[case("0")]
    #[case("modes1")]
    fn rejects_unknown_modes(#[case] input: &str) {
        assert_eq!(
            input.parse::<RequestedMode>(),
            Err(ParseModeError(input.to_string()))
        );
    }

    #[rstest]
    fn display_round_trips_through_from_str() {
        for mode in RequestedMode::ALL {
            assert_eq!(mode.to_string().parse::<RequestedMode>(), Ok(mode));
        }
    }
}
