use crate::core::scoring::{combinations_evaluated, evaluate};
use crate::domain::model::{DrawResult, Game, GameReport, Number, ValidationOutcome};
use crate::domain::ports::GameStore;
use crate::utils::error::Result;

pub struct LotteryEngine<S: GameStore> {
    store: S,
}

impl<S: GameStore> LotteryEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 驗證、排序後附加到儲存區並立即寫回
    pub fn add_game(&self, numbers: Vec<Number>) -> Result<Game> {
        let game = Game::new(numbers)?;

        let mut games = self.store.load()?;
        tracing::debug!("Loaded {} saved games", games.len());

        games.push(game.clone());
        self.store.save(&games)?;
        tracing::info!("✅ Game #{} saved: {:?}", games.len(), game.numbers());

        Ok(game)
    }

    pub fn validate_result(&self, numbers: Vec<Number>) -> Result<ValidationOutcome> {
        let result = DrawResult::new(numbers)?;

        let games = self.store.load()?;
        if games.is_empty() {
            tracing::info!("No saved games to validate");
            return Ok(ValidationOutcome::NoGames);
        }

        tracing::debug!("Validating {} games against {:?}", games.len(), result.numbers());

        let reports: Vec<GameReport> = games
            .iter()
            .enumerate()
            .map(|(i, game)| {
                let score = evaluate(game, &result);
                tracing::debug!(
                    "Game #{}: {} combinations, senas={}, quinas={}, quadras={}",
                    i + 1,
                    combinations_evaluated(game),
                    score.senas,
                    score.quinas,
                    score.quadras
                );
                GameReport {
                    index: i + 1,
                    numbers: game.numbers().to_vec(),
                    score,
                }
            })
            .collect();

        let winners = reports.iter().filter(|r| r.score.has_prize()).count();
        tracing::info!("📊 {} of {} games hit a prize tier", winners, reports.len());

        Ok(ValidationOutcome::Scored { result, reports })
    }

    pub fn list_games(&self) -> Result<Vec<Game>> {
        self.store.load()
    }
}
