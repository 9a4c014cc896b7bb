use crate::core::combinations::{binomial, combinations};
use crate::domain::model::{DrawResult, Game, Number, ScoreReport};
use std::collections::HashSet;

/// Size of every scored sub-combination; also the size of a draw.
pub const PICK_SIZE: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrizeTier {
    Sena,
    Quina,
    Quadra,
}

impl PrizeTier {
    pub fn from_matches(matches: usize) -> Option<Self> {
        match matches {
            6 => Some(PrizeTier::Sena),
            5 => Some(PrizeTier::Quina),
            4 => Some(PrizeTier::Quadra),
            _ => None,
        }
    }
}

/// 回傳命中數量以及命中的號碼 (依 subset 原本的順序)
pub fn count_matches(subset: &[Number], result: &[Number]) -> (usize, Vec<Number>) {
    let drawn: HashSet<Number> = result.iter().copied().collect();
    let matched: Vec<Number> = subset
        .iter()
        .copied()
        .filter(|n| drawn.contains(n))
        .collect();
    (matched.len(), matched)
}

/// Scores every 6-number combination of `game` against `result`.
///
/// The best subset is the first one, in enumeration order, that reaches the
/// highest overlap.
pub fn evaluate(game: &Game, result: &DrawResult) -> ScoreReport {
    let mut report = ScoreReport::default();

    for combo in combinations(game.numbers(), PICK_SIZE) {
        let (matches, matched) = count_matches(&combo, result.numbers());

        match PrizeTier::from_matches(matches) {
            Some(PrizeTier::Sena) => report.senas += 1,
            Some(PrizeTier::Quina) => report.quinas += 1,
            Some(PrizeTier::Quadra) => report.quadras += 1,
            None => {}
        }

        if matches > report.best_matches {
            report.best_matches = matches;
            report.matched_numbers = matched;
        }
    }

    tracing::trace!(
        "Scored game {:?}: {} combinations, best {}",
        game.numbers(),
        binomial(game.len(), PICK_SIZE),
        report.best_matches
    );

    report
}

impl ScoreReport {
    pub fn has_prize(&self) -> bool {
        self.senas + self.quinas + self.quadras > 0
    }
}

/// C(|game|, 6), the number of combinations `evaluate` looks at.
pub fn combinations_evaluated(game: &Game) -> u64 {
    binomial(game.len(), PICK_SIZE)
}
