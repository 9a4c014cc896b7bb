use megasena::core::combinations::{binomial, combinations};
use megasena::core::scoring::evaluate;
use megasena::utils::validation::validate_numbers;
use megasena::{DrawResult, Game, LotteryError};
use proptest::prelude::*;
use std::collections::HashSet;

// 6..=15 個不重複的 1..=60
fn game_numbers() -> impl Strategy<Value = Vec<i32>> {
    proptest::sample::subsequence((1..=60).collect::<Vec<i32>>(), 6..=15).prop_shuffle()
}

fn draw_numbers() -> impl Strategy<Value = Vec<i32>> {
    proptest::sample::subsequence((1..=60).collect::<Vec<i32>>(), 6)
}

proptest! {
    #[test]
    fn combinations_count_and_order(n in 0usize..=12, k in 0usize..=8) {
        let items: Vec<usize> = (0..n).collect();
        let combos = combinations(&items, k);

        prop_assert_eq!(combos.len() as u64, binomial(n, k));

        // 每個組合的索引嚴格遞增，且整體依字典序排列
        for combo in &combos {
            prop_assert_eq!(combo.len(), k);
            prop_assert!(combo.windows(2).all(|w| w[0] < w[1]));
        }
        prop_assert!(combos.windows(2).all(|w| w[0] < w[1]));

        let unique: HashSet<&Vec<usize>> = combos.iter().collect();
        prop_assert_eq!(unique.len(), combos.len());
    }

    #[test]
    fn evaluate_counts_are_bounded(numbers in game_numbers(), drawn in draw_numbers()) {
        let game = Game::new(numbers).unwrap();
        let result = DrawResult::new(drawn).unwrap();
        let report = evaluate(&game, &result);

        let total = binomial(game.len(), 6);
        prop_assert!((report.senas + report.quinas + report.quadras) as u64 <= total);
        prop_assert!(report.senas <= 1);
        prop_assert_eq!(report.matched_numbers.len(), report.best_matches);

        // 最佳命中數 = 遊戲與結果的交集大小 (上限 6)
        let drawn_set: HashSet<i32> = result.numbers().iter().copied().collect();
        let overlap = game.numbers().iter().filter(|n| drawn_set.contains(n)).count();
        prop_assert_eq!(report.best_matches, overlap.min(6));
        prop_assert!(report.matched_numbers.iter().all(|n| drawn_set.contains(n)));
    }

    #[test]
    fn validator_length_iff(numbers in proptest::collection::vec(1i32..=60, 0..20)) {
        let outcome = validate_numbers(&numbers, 6, 15);
        let bad_len = numbers.len() < 6 || numbers.len() > 15;
        prop_assert_eq!(matches!(outcome, Err(LotteryError::LengthError { .. })), bad_len);

        if !bad_len {
            let has_dup = numbers.iter().collect::<HashSet<_>>().len() != numbers.len();
            prop_assert_eq!(matches!(outcome, Err(LotteryError::DuplicateError { .. })), has_dup);
            prop_assert_eq!(outcome.is_ok(), !has_dup);
        }
    }

    #[test]
    fn validator_range_iff(numbers in proptest::sample::subsequence((-5..=70).collect::<Vec<i32>>(), 6)) {
        let outcome = validate_numbers(&numbers, 6, 6);
        let out_of_range = numbers.iter().any(|n| !(1..=60).contains(n));
        prop_assert_eq!(matches!(outcome, Err(LotteryError::RangeError { .. })), out_of_range);
        prop_assert_eq!(outcome.is_ok(), !out_of_range);
    }
}
