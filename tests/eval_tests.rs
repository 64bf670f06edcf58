//! Evaluation Tests

mod common;

use chess_tree::engine::eval::{evaluate, material, role_value, supported_evaluations, Evaluation, DEPTH_BONUS};
use chess_tree::rules::{Rules, ShakmatyRules};
use chess_tree::shakmaty::{Chess, Color, Role};
use common::from_fen;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

/// Mirror the board top to bottom, swap piece colours and the side to move.
fn colour_swapped_fen(fen: &str) -> String {
    let mut fields = fen.split_whitespace();
    let board = fields.next().unwrap();
    let side = fields.next().unwrap_or("w");
    let swapped: Vec<String> = board
        .split('/')
        .rev()
        .map(|rank| {
            rank.chars()
                .map(|c| {
                    if c.is_ascii_uppercase() {
                        c.to_ascii_lowercase()
                    } else {
                        c.to_ascii_uppercase()
                    }
                })
                .collect()
        })
        .collect();
    let side = if side == "w" { "b" } else { "w" };
    format!("{} {} - - 0 1", swapped.join("/"), side)
}

#[test]
fn test_startpos_is_balanced() {
    let pos = Chess::default();
    assert_eq!(material(&ShakmatyRules, &pos), 0);
    assert_eq!(evaluate(&ShakmatyRules, &pos, 0), 0);
}

#[test]
fn test_depth_bonus_is_added() {
    let pos = Chess::default();
    for depth in 0..5 {
        assert_eq!(evaluate(&ShakmatyRules, &pos, depth), DEPTH_BONUS * depth as i32);
    }
}

#[test]
fn test_depth_bonus_ignores_side_to_move() {
    let white = from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1");
    let black = from_fen("4k3/8/8/8/8/8/8/R3K3 b - - 0 1");
    assert_eq!(evaluate(&ShakmatyRules, &white, 3), 5 + 6);
    assert_eq!(evaluate(&ShakmatyRules, &black, 3), 5 + 6);
}

#[test]
fn test_piece_weights() {
    let cases = [
        ("4k3/8/8/8/8/8/P7/4K3 w - - 0 1", 1),
        ("4k3/8/8/8/8/8/8/1N2K3 w - - 0 1", 3),
        ("4k3/8/8/8/8/8/8/2B1K3 w - - 0 1", 3),
        ("4k3/8/8/8/8/8/8/R3K3 w - - 0 1", 5),
        ("4k3/8/8/8/8/8/8/3QK3 w - - 0 1", 9),
        ("3qk3/8/8/8/8/8/8/4K3 w - - 0 1", -9),
    ];
    for (fen, expected) in cases {
        assert_eq!(evaluate(&ShakmatyRules, &from_fen(fen), 0), expected, "{fen}");
    }
}

#[test]
fn test_depth_bonus_saturates_for_huge_depths() {
    let pos = from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert_eq!(evaluate(&ShakmatyRules, &pos, 1_500_000_000), i32::MAX);
    assert_eq!(evaluate(&ShakmatyRules, &pos, u32::MAX), i32::MAX);

    let down_a_queen = from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNB1KBNR w KQkq - 0 1");
    assert_eq!(evaluate(&ShakmatyRules, &down_a_queen, u32::MAX), i32::MAX - 9);
}

#[test]
fn test_king_counts_as_material() {
    let pos = Chess::default();
    assert_eq!(ShakmatyRules.piece_count(&pos, Color::White, Role::King), 1);
    assert_eq!(ShakmatyRules.piece_count(&pos, Color::Black, Role::King), 1);
    assert_eq!(role_value(Role::King), 39);
}

#[test]
fn test_missing_queen() {
    let pos = from_fen("rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
    assert_eq!(evaluate(&ShakmatyRules, &pos, 0), 9);
}

#[test]
fn test_evaluate_does_not_touch_position() {
    let pos = from_fen("r1bq1rk1/ppp2ppp/2n5/1B6/1Q6/4P3/2N2PPP/R1B1K2R b KQ - 1 1");
    let before = ShakmatyRules.to_fen(&pos);
    let first = evaluate(&ShakmatyRules, &pos, 2);
    let second = evaluate(&ShakmatyRules, &pos, 2);
    assert_eq!(first, second);
    assert_eq!(ShakmatyRules.to_fen(&pos), before);
}

#[test]
fn test_colour_swap_negates_material() {
    for fen in [
        "4k3/8/8/8/8/8/PPP5/RN2K3 w - - 0 1",
        "r1bq1rk1/ppp2ppp/2n5/1B6/1Q6/4P3/2N2PPP/R1B1K2R b - - 1 1",
        "4k2r/6r1/8/8/8/8/3R4/R3K3 w - - 0 1",
    ] {
        let pos = from_fen(fen);
        let mirrored = from_fen(&colour_swapped_fen(fen));
        assert_eq!(material(&ShakmatyRules, &mirrored), -material(&ShakmatyRules, &pos), "{fen}");
    }
}

#[test]
fn test_colour_swap_negates_material_on_random_games() {
    let rules = ShakmatyRules;
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..8 {
        let mut pos = Chess::default();
        for _ in 0..30 {
            let moves = rules.legal_moves(&pos);
            let Some(mv) = moves.choose(&mut rng) else { break };
            pos = rules.apply_move(&pos, mv).unwrap();
        }
        let fen = rules.to_fen(&pos);
        let mirrored = from_fen(&colour_swapped_fen(&fen));
        assert_eq!(material(&rules, &mirrored), -material(&rules, &pos), "{fen}");
    }
}

#[test]
fn test_supported_evaluations() {
    assert_eq!(supported_evaluations(), vec!["material"]);
    let pos = Chess::default();
    assert_eq!(
        Evaluation::Material.evaluate(&ShakmatyRules, &pos, 1),
        evaluate(&ShakmatyRules, &pos, 1)
    );
}
