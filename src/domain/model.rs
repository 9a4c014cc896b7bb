use crate::utils::error::{LotteryError, Result};
use crate::utils::validation::{validate_game, validate_result};
use serde::{Deserialize, Serialize};

pub type Number = i32;

/// 使用者選的一注號碼 (6 到 15 個, 1..=60, 不重複)，建立時已排序
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGame")]
pub struct Game {
    numeros: Vec<Number>,
}

// 讀檔時先反序列化成 RawGame，再經過 Game::new 驗證
#[derive(Deserialize)]
struct RawGame {
    numeros: Vec<Number>,
}

impl TryFrom<RawGame> for Game {
    type Error = LotteryError;

    fn try_from(raw: RawGame) -> Result<Self> {
        Game::new(raw.numeros)
    }
}

impl Game {
    pub fn new(mut numbers: Vec<Number>) -> Result<Self> {
        validate_game(&numbers)?;
        numbers.sort_unstable();
        Ok(Self { numeros: numbers })
    }

    pub fn numbers(&self) -> &[Number] {
        &self.numeros
    }

    pub fn len(&self) -> usize {
        self.numeros.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numeros.is_empty()
    }
}

/// 官方開獎結果，固定 6 個號碼
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DrawResult {
    numbers: Vec<Number>,
}

impl DrawResult {
    pub fn new(mut numbers: Vec<Number>) -> Result<Self> {
        validate_result(&numbers)?;
        numbers.sort_unstable();
        Ok(Self { numbers })
    }

    pub fn numbers(&self) -> &[Number] {
        &self.numbers
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub senas: usize,
    pub quinas: usize,
    pub quadras: usize,
    pub best_matches: usize,
    pub matched_numbers: Vec<Number>,
}

/// 結果表中的一列
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameReport {
    pub index: usize,
    pub numbers: Vec<Number>,
    #[serde(flatten)]
    pub score: ScoreReport,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    NoGames,
    Scored {
        result: DrawResult,
        reports: Vec<GameReport>,
    },
}
