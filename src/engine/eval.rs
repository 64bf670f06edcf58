//! Static evaluation
//!
//! Material balance from White's point of view, plus a flat bonus that
//! grows with the remaining search depth.

use std::fmt;
use std::str::FromStr;

use shakmaty::{Color, Role};

use crate::rules::Rules;

/// Added per ply of remaining depth, for both sides alike.
pub const DEPTH_BONUS: i32 = 2;

/// Material weight of a piece kind. The king is counted like any other
/// piece rather than treated as infinite.
pub fn role_value(role: Role) -> i32 {
    match role {
        Role::Pawn => 1,
        Role::Knight => 3,
        Role::Bishop => 3,
        Role::Rook => 5,
        Role::Queen => 9,
        Role::King => 39,
    }
}

/// White material minus Black material.
pub fn material<R: Rules>(rules: &R, pos: &R::Position) -> i32 {
    Role::ALL
        .iter()
        .map(|&role| {
            let white = rules.piece_count(pos, Color::White, role) as i32;
            let black = rules.piece_count(pos, Color::Black, role) as i32;
            (white - black) * role_value(role)
        })
        .sum()
}

/// Score `pos`; positive favours White.
///
/// `depth_remaining` adds `DEPTH_BONUS` per ply whichever side is to move.
/// Leaves are always scored with a depth of zero. Saturates at `i32::MAX`
/// for absurd depths.
pub fn evaluate<R: Rules>(rules: &R, pos: &R::Position, depth_remaining: u32) -> i32 {
    let bonus = i32::try_from(depth_remaining)
        .unwrap_or(i32::MAX)
        .saturating_mul(DEPTH_BONUS);
    material(rules, pos).saturating_add(bonus)
}

/// Evaluation functions the engine can be asked to use.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Evaluation {
    #[default]
    Material,
}

impl Evaluation {
    pub const ALL: [Evaluation; 1] = [Evaluation::Material];

    pub fn name(self) -> &'static str {
        match self {
            Evaluation::Material => "material",
        }
    }

    pub fn evaluate<R: Rules>(self, rules: &R, pos: &R::Position, depth_remaining: u32) -> i32 {
        match self {
            Evaluation::Material => evaluate(rules, pos, depth_remaining),
        }
    }
}

/// Names of every supported evaluation.
pub fn supported_evaluations() -> Vec<&'static str> {
    Evaluation::ALL.iter().map(|e| e.name()).collect()
}

impl FromStr for Evaluation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Evaluation::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "unknown evaluation '{s}' (supported: {})",
                    supported_evaluations().join(", ")
                )
            })
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
