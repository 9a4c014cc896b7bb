use crate::domain::model::Game;
use crate::utils::error::Result;

/// 整批讀寫的遊戲儲存區，沒有單筆更新或刪除
pub trait GameStore {
    fn load(&self) -> Result<Vec<Game>>;
    fn save(&self, games: &[Game]) -> Result<()>;
}
