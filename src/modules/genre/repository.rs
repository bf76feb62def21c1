use std::future::Future;

use super::dto::{GenreChanges, NewGenre};
use super::model::Genre;
use sqlx::PgPool;

/// Database-side operations the genre service depends on. The service is
/// written against this trait so it can run against an in-memory double in
/// tests; `GenreRepository` is the real implementation.
pub trait GenreGateway {
    fn find_all(&self) -> impl Future<Output = Result<Vec<Genre>, sqlx::Error>> + Send;
    fn find_by_id(&self, id: i32)
        -> impl Future<Output = Result<Option<Genre>, sqlx::Error>> + Send;
    fn insert(&self, genre: &NewGenre) -> impl Future<Output = Result<i32, sqlx::Error>> + Send;
    fn update(
        &self,
        id: i32,
        changes: &GenreChanges,
    ) -> impl Future<Output = Result<u64, sqlx::Error>> + Send;
    fn delete(&self, id: i32) -> impl Future<Output = Result<u64, sqlx::Error>> + Send;
}

pub struct GenreRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> GenreRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

impl GenreGateway for GenreRepository<'_> {
    async fn find_all(&self) -> Result<Vec<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>("SELECT id, name, description, status FROM genres")
            .fetch_all(self.pool)
            .await
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Genre>, sqlx::Error> {
        sqlx::query_as::<_, Genre>(
            "SELECT id, name, description, status FROM genres WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
    }

    async fn insert(&self, genre: &NewGenre) -> Result<i32, sqlx::Error> {
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO genres (name, description, status) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&genre.name)
        .bind(&genre.description)
        .bind(genre.status)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// Applies only the supplied fields in a single statement and returns
    /// the affected-row count; zero means the id does not exist. No
    /// read-modify-write, so concurrent updates resolve last-writer-wins at
    /// statement granularity.
    async fn update(&self, id: i32, changes: &GenreChanges) -> Result<u64, sqlx::Error> {
        let sql = build_update_sql(changes);

        let mut query = sqlx::query(&sql);
        if let Some(name) = &changes.name {
            query = query.bind(name);
        }
        if let Some(description) = &changes.description {
            query = query.bind(description);
        }
        if let Some(status) = changes.status {
            query = query.bind(status);
        }

        let result = query.bind(id).execute(self.pool).await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

/// Assembles the SET clause in fixed column order name → description →
/// status, with the id placeholder last for the WHERE. Values are always
/// bound positionally, never interpolated.
fn build_update_sql(changes: &GenreChanges) -> String {
    let mut assignments = Vec::new();
    let mut placeholder = 1;

    if changes.name.is_some() {
        assignments.push(format!("name = ${placeholder}"));
        placeholder += 1;
    }
    if changes.description.is_some() {
        assignments.push(format!("description = ${placeholder}"));
        placeholder += 1;
    }
    if changes.status.is_some() {
        assignments.push(format!("status = ${placeholder}"));
        placeholder += 1;
    }

    format!(
        "UPDATE genres SET {} WHERE id = ${placeholder}",
        assignments.join(", ")
    )
}
