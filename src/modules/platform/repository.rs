use super::model::Platform;
use sqlx::PgPool;

pub struct PlatformRepository;

impl PlatformRepository {
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Platform>, sqlx::Error> {
        sqlx::query_as::<_, Platform>("SELECT id, name, manufacturer, status FROM platforms")
            .fetch_all(pool)
            .await
    }
}
