use super::model::Game;
use sqlx::PgPool;

pub struct GameRepository;

impl GameRepository {
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Game>, sqlx::Error> {
        sqlx::query_as::<_, Game>(
            "SELECT id, name, description, genre_id, platform_id, status FROM games",
        )
        .fetch_all(pool)
        .await
    }
}
