//! Error types for the mechanics engine.
//!
//! Resolution itself is total over well-formed inputs; these errors only
//! come from the input boundary (preset lookup, config parsing).

use crate::preset::Side;

/// Errors that can occur while assembling a battle configuration.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum MechError {
    /// A faction id was not found in the preset table for that side.
    #[error("unknown {side} faction: '{id}'")]
    #[diagnostic(
        code(rb::unknown_faction),
        help("run `rb factions` to list the known presets")
    )]
    UnknownFaction {
        /// Which preset table was searched.
        side: Side,
        /// The id that failed to match.
        id: String,
    },

    /// A battle configuration could not be parsed.
    #[error("invalid battle config: {0}")]
    #[diagnostic(code(rb::invalid_config))]
    InvalidConfig(String),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_faction_message() {
        let err = MechError::UnknownFaction {
            side: Side::Defender,
            id: "marquise".to_string(),
        };
        assert_eq!(err.to_string(), "unknown defender faction: 'marquise'");
    }

    #[test]
    fn invalid_config_message() {
        let err = MechError::InvalidConfig("missing field".to_string());
        assert_eq!(err.to_string(), "invalid battle config: missing field");
    }
}
