//! Evaluation weight configuration
//!
//! [`EvalConfig`] holds every tunable number the evaluator uses. The default is
//! the canonical weight set from [`crate::constants`]; a JSON file can override
//! any subset of fields (missing fields keep their defaults).
//!
//! # File Format
//!
//! ```json
//! {
//!   "piece_values": { "pawn": 100, "knight": 300, "bishop": 300,
//!                     "rook": 500, "queen": 900, "king": 1000000 },
//!   "mobility_weight": 5,
//!   "pawn_connected_bonus": 10,
//!   "pawn_isolated_penalty": 15
//! }
//! ```
//!
//! # Error Handling
//!
//! [`EvalConfig::load`] reports I/O and parse errors, and rejects weights so
//! large that a 64-square sum could overflow a [`Score`]. [`EvalConfig::load_or_default`]
//! logs them and falls back to defaults, which is what long-running callers
//! usually want.

use crate::constants::*;
use crate::error::{ChessEvalError, ChessEvalResult};
use crate::evaluation::pst::MAX_BONUS;
use crate::types::{PieceType, Score};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Base material value per piece type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieceValues {
    pub pawn: Score,
    pub knight: Score,
    pub bishop: Score,
    pub rook: Score,
    pub queen: Score,
    pub king: Score,
}

impl PieceValues {
    #[inline]
    pub fn get(&self, kind: PieceType) -> Score {
        match kind {
            PieceType::Pawn => self.pawn,
            PieceType::Knight => self.knight,
            PieceType::Bishop => self.bishop,
            PieceType::Rook => self.rook,
            PieceType::Queen => self.queen,
            PieceType::King => self.king,
        }
    }
}

impl Default for PieceValues {
    fn default() -> Self {
        PieceValues {
            pawn: PAWN_VALUE,
            knight: KNIGHT_VALUE,
            bishop: BISHOP_VALUE,
            rook: ROOK_VALUE,
            queen: QUEEN_VALUE,
            king: KING_VALUE,
        }
    }
}

/// Weights for every evaluation term
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Material value of each piece type
    pub piece_values: PieceValues,

    /// Bonus per generated move, credited to the colour that owns the mover
    pub mobility_weight: Score,

    /// Bonus for a pawn supported diagonally from behind
    pub pawn_connected_bonus: Score,

    /// Penalty (positive number, subtracted) for an unsupported pawn
    pub pawn_isolated_penalty: Score,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            piece_values: PieceValues::default(),
            mobility_weight: MOBILITY_WEIGHT,
            pawn_connected_bonus: PAWN_CONNECTED_BONUS,
            pawn_isolated_penalty: PAWN_ISOLATED_PENALTY,
        }
    }
}

impl EvalConfig {
    /// Material and piece-square placement only: no pawn structure, no mobility.
    ///
    /// Matches the first version of this evaluator. Positions scored with it
    /// never consult the move generator.
    pub fn baseline() -> Self {
        EvalConfig {
            mobility_weight: 0,
            pawn_connected_bonus: 0,
            pawn_isolated_penalty: 0,
            ..Self::default()
        }
    }

    /// Whether the mobility term contributes anything
    #[inline]
    pub fn uses_mobility(&self) -> bool {
        self.mobility_weight != 0
    }

    /// Whether the pawn-structure term contributes anything
    #[inline]
    pub fn uses_pawn_structure(&self) -> bool {
        self.pawn_connected_bonus != 0 || self.pawn_isolated_penalty != 0
    }

    /// Check that no position can push a score past `Score::MAX`
    ///
    /// The bound is a full board of the most valuable piece on its best square
    /// with the larger pawn weight, plus `MAX_MOVES` moves of mobility, for
    /// each side. Configs built in code should be checked with this before
    /// they reach an evaluator.
    pub fn validate(&self) -> ChessEvalResult<()> {
        let piece = PieceType::ALL
            .iter()
            .map(|&kind| i64::from(self.piece_values.get(kind).unsigned_abs()))
            .max()
            .unwrap_or(0);
        let pawn = i64::from(
            self.pawn_connected_bonus
                .unsigned_abs()
                .max(self.pawn_isolated_penalty.unsigned_abs()),
        );
        let mobility = i64::from(self.mobility_weight.unsigned_abs());

        let per_square = piece + i64::from(MAX_BONUS) + pawn;
        let side = 64 * per_square + MAX_MOVES as i64 * mobility;
        let worst = 2 * side;
        if worst > i64::from(Score::MAX) {
            return Err(ChessEvalError::WeightsOutOfRange {
                message: format!("worst-case score {worst} exceeds {}", Score::MAX),
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON weight set
    pub fn from_json_str(json: &str) -> ChessEvalResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> ChessEvalResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read a configuration file
    pub fn load(path: impl AsRef<Path>) -> ChessEvalResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        debug!("[CONFIG] Loaded evaluation config from {:?}", path);
        Ok(config)
    }

    /// Read a configuration file, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            debug!("[CONFIG] No config file at {:?}. Using defaults.", path);
            return Self::default();
        }

        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "[CONFIG] Failed to load config at {:?}: {}. Using defaults.",
                    path, e
                );
                Self::default()
            }
        }
    }

    /// Write the configuration as pretty-printed JSON, creating parent directories
    pub fn save(&self, path: impl AsRef<Path>) -> ChessEvalResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_json_string()?)?;
        debug!("[CONFIG] Saved evaluation config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_canonical() {
        let config = EvalConfig::default();
        assert_eq!(config.piece_values.get(PieceType::Queen), 900);
        assert_eq!(config.piece_values.get(PieceType::King), 1_000_000);
        assert_eq!(config.mobility_weight, 5);
        assert_eq!(config.pawn_connected_bonus, 10);
        assert_eq!(config.pawn_isolated_penalty, 15);
        for kind in PieceType::ALL {
            assert_eq!(config.piece_values.get(kind), piece_value(kind));
        }
    }

    #[test]
    fn test_baseline_disables_extra_terms() {
        let config = EvalConfig::baseline();
        assert!(!config.uses_mobility());
        assert!(!config.uses_pawn_structure());
        assert_eq!(config.piece_values, PieceValues::default());
        assert!(EvalConfig::default().uses_mobility());
        assert!(EvalConfig::default().uses_pawn_structure());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EvalConfig::from_json_str(r#"{ "mobility_weight": 0, "piece_values": { "queen": 15000 } }"#)
            .unwrap();
        assert_eq!(config.mobility_weight, 0);
        assert_eq!(config.piece_values.queen, 15000);
        assert_eq!(config.piece_values.rook, ROOK_VALUE);
        assert_eq!(config.pawn_isolated_penalty, PAWN_ISOLATED_PENALTY);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        let err = EvalConfig::from_json_str("{ mobility_weight: }").unwrap_err();
        assert!(matches!(err, ChessEvalError::ConfigSerialization(_)));
    }

    #[test]
    fn test_shipped_weight_sets_are_valid() {
        assert!(EvalConfig::default().validate().is_ok());
        assert!(EvalConfig::baseline().validate().is_ok());
        let legacy = EvalConfig::from_json_str(r#"{ "piece_values": { "queen": 15000 } }"#);
        assert!(legacy.is_ok());
    }

    #[test]
    fn test_oversized_weights_are_rejected() {
        let err = EvalConfig::from_json_str(r#"{ "piece_values": { "pawn": 300000000 } }"#).unwrap_err();
        assert!(matches!(err, ChessEvalError::WeightsOutOfRange { .. }));

        let err = EvalConfig::from_json_str(r#"{ "mobility_weight": -2147483648 }"#).unwrap_err();
        assert!(matches!(err, ChessEvalError::WeightsOutOfRange { .. }));

        let err = EvalConfig::from_json_str(r#"{ "pawn_isolated_penalty": 20000000 }"#).unwrap_err();
        assert!(matches!(err, ChessEvalError::WeightsOutOfRange { .. }));
    }

    #[test]
    fn test_load_rejects_oversized_weights() {
        let dir = std::env::temp_dir().join(format!("chess_eval_huge_config_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("eval.json");
        fs::write(&path, r#"{ "piece_values": { "pawn": 300000000 } }"#).unwrap();

        assert!(matches!(EvalConfig::load(&path), Err(ChessEvalError::WeightsOutOfRange { .. })));
        assert_eq!(EvalConfig::load_or_default(&path), EvalConfig::default());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("chess_eval_config_{}", std::process::id()));
        let path = dir.join("nested").join("eval.json");

        let config = EvalConfig {
            mobility_weight: 7,
            ..EvalConfig::default()
        };
        config.save(&path).unwrap();

        let loaded = EvalConfig::load(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let missing = std::env::temp_dir().join("chess_eval_config_does_not_exist.json");
        assert_eq!(EvalConfig::load_or_default(&missing), EvalConfig::default());

        let dir = std::env::temp_dir().join(format!("chess_eval_bad_config_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let broken = dir.join("eval.json");
        fs::write(&broken, "not json").unwrap();
        assert_eq!(EvalConfig::load_or_default(&broken), EvalConfig::default());
        assert!(matches!(EvalConfig::load(&broken), Err(ChessEvalError::ConfigSerialization(_))));

        let _ = fs::remove_dir_all(&dir);
    }
}
