use crate::domain::model::Number;
use crate::utils::error::{LotteryError, Result};
use std::collections::HashSet;

pub const MIN_NUMBER: Number = 1;
pub const MAX_NUMBER: Number = 60;

pub const GAME_MIN_LEN: usize = 6;
pub const GAME_MAX_LEN: usize = 15;
pub const RESULT_LEN: usize = 6;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 檢查號碼集合：長度、範圍 (1..=60)、不可重複
///
/// Length is checked first; after that elements are scanned in input order and
/// the first out-of-range or repeated number is reported.
pub fn validate_numbers(numbers: &[Number], min_len: usize, max_len: usize) -> Result<()> {
    if numbers.len() < min_len || numbers.len() > max_len {
        return Err(LotteryError::LengthError {
            min: min_len,
            max: max_len,
            actual: numbers.len(),
        });
    }

    let mut seen = HashSet::with_capacity(numbers.len());
    for &n in numbers {
        if !(MIN_NUMBER..=MAX_NUMBER).contains(&n) {
            return Err(LotteryError::RangeError { value: n });
        }
        if !seen.insert(n) {
            return Err(LotteryError::DuplicateError { value: n });
        }
    }

    Ok(())
}

pub fn validate_game(numbers: &[Number]) -> Result<()> {
    validate_numbers(numbers, GAME_MIN_LEN, GAME_MAX_LEN)
}

pub fn validate_result(numbers: &[Number]) -> Result<()> {
    validate_numbers(numbers, RESULT_LEN, RESULT_LEN)
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(LotteryError::ConfigError {
            message: format!("{}: path cannot be empty", field_name),
        });
    }

    if path.contains('\0') {
        return Err(LotteryError::ConfigError {
            message: format!("{}: path contains null bytes", field_name),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_game_and_result() {
        assert!(validate_game(&[1, 2, 3, 4, 5, 6]).is_ok());
        assert!(validate_game(&[60, 1, 30, 2, 45, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18]).is_ok());
        assert!(validate_result(&[5, 10, 15, 20, 25, 60]).is_ok());
    }

    #[test]
    fn test_length_bounds() {
        assert!(matches!(
            validate_game(&[1, 2, 3, 4, 5]),
            Err(LotteryError::LengthError { min: 6, max: 15, actual: 5 })
        ));
        let sixteen: Vec<Number> = (1..=16).collect();
        assert!(matches!(
            validate_game(&sixteen),
            Err(LotteryError::LengthError { actual: 16, .. })
        ));
        assert!(matches!(
            validate_result(&[1, 2, 3, 4, 5, 6, 7]),
            Err(LotteryError::LengthError { min: 6, max: 6, actual: 7 })
        ));
    }

    #[test]
    fn test_range_bounds() {
        assert!(matches!(
            validate_game(&[0, 2, 3, 4, 5, 6]),
            Err(LotteryError::RangeError { value: 0 })
        ));
        assert!(matches!(
            validate_result(&[1, 2, 3, 4, 5, 61]),
            Err(LotteryError::RangeError { value: 61 })
        ));
        assert!(matches!(
            validate_result(&[-3, 2, 3, 4, 5, 6]),
            Err(LotteryError::RangeError { value: -3 })
        ));
    }

    #[test]
    fn test_duplicates() {
        assert!(matches!(
            validate_game(&[7, 2, 3, 7, 5, 6]),
            Err(LotteryError::DuplicateError { value: 7 })
        ));
    }

    #[test]
    fn test_length_is_reported_before_content() {
        // 長度錯誤優先於重複
        assert!(matches!(
            validate_result(&[1, 1, 1]),
            Err(LotteryError::LengthError { .. })
        ));
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("storage.path", "jogos.json").is_ok());
        assert!(validate_path("storage.path", "  ").is_err());
        assert!(validate_path("storage.path", "a\0b").is_err());
    }
}
