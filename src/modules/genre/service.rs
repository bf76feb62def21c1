use super::dto::{GenreChanges, GenrePayload};
use super::model::Genre;
use super::repository::GenreGateway;
use super::validator;
use crate::common::error::ApiError;

pub struct GenreService;

impl GenreService {
    pub async fn find_all(gateway: &impl GenreGateway) -> Result<Vec<Genre>, ApiError> {
        Ok(gateway.find_all().await?)
    }

    pub async fn find_by_id(gateway: &impl GenreGateway, id: i32) -> Result<Genre, ApiError> {
        gateway
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::not_found("genre not found"))
    }

    pub async fn create(
        gateway: &impl GenreGateway,
        payload: GenrePayload,
    ) -> Result<Genre, ApiError> {
        let genre = validator::validate_create(payload)?;
        let id = gateway.insert(&genre).await?;

        Ok(Genre {
            id,
            name: genre.name,
            description: genre.description,
            status: genre.status,
        })
    }

    /// Returns only the fields that were supplied and applied; omitted
    /// fields keep their stored values.
    pub async fn update(
        gateway: &impl GenreGateway,
        id: i32,
        payload: GenrePayload,
    ) -> Result<GenreChanges, ApiError> {
        let changes = validator::validate_update(payload)?;

        let affected = gateway.update(id, &changes).await?;
        if affected == 0 {
            return Err(ApiError::not_found("genre not found"));
        }

        Ok(changes)
    }

    pub async fn delete(gateway: &impl GenreGateway, id: i32) -> Result<(), ApiError> {
        let affected = gateway.delete(id).await?;
        if affected == 0 {
            return Err(ApiError::not_found("genre not found"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::genre::dto::NewGenre;
    use crate::modules::genre::model::{STATUS_ACTIVE, STATUS_INACTIVE};
    use serde_json::{json, Value};
    use std::sync::Mutex;

    /// In-memory stand-in for the genres table.
    #[derive(Default)]
    struct InMemoryGateway {
        rows: Mutex<Vec<Genre>>,
    }

    impl InMemoryGateway {
        fn seeded(rows: Vec<Genre>) -> Self {
            Self {
                rows: Mutex::new(rows),
            }
        }

        fn snapshot(&self) -> Vec<Genre> {
            self.rows.lock().unwrap().clone()
        }
    }

    impl GenreGateway for InMemoryGateway {
        async fn find_all(&self) -> Result<Vec<Genre>, sqlx::Error> {
            Ok(self.snapshot())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Genre>, sqlx::Error> {
            Ok(self.rows.lock().unwrap().iter().find(|g| g.id == id).cloned())
        }

        async fn insert(&self, genre: &NewGenre) -> Result<i32, sqlx::Error> {
            let mut rows = self.rows.lock().unwrap();
            let id = rows.iter().map(|g| g.id).max().unwrap_or(0) + 1;
            rows.push(Genre {
                id,
                name: genre.name.clone(),
                description: genre.description.clone(),
                status: genre.status,
            });
            Ok(id)
        }

        async fn update(&self, id: i32, changes: &GenreChanges) -> Result<u64, sqlx::Error> {
            let mut rows = self.rows.lock().unwrap();
            let Some(row) = rows.iter_mut().find(|g| g.id == id) else {
                return Ok(0);
            };
            if let Some(name) = &changes.name {
                row.name = name.clone();
            }
            if let Some(description) = &changes.description {
                row.description = Some(description.clone());
            }
            if let Some(status) = changes.status {
                row.status = status;
            }
            Ok(1)
        }

        async fn delete(&self, id: i32) -> Result<u64, sqlx::Error> {
            let mut rows = self.rows.lock().unwrap();
            let before = rows.len();
            rows.retain(|g| g.id != id);
            Ok((before - rows.len()) as u64)
        }
    }

    fn payload(name: Option<Value>, description: Option<Value>, status: Option<Value>) -> GenrePayload {
        GenrePayload {
            name,
            description,
            status,
        }
    }

    fn genre(id: i32, name: &str, description: Option<&str>, status: i32) -> Genre {
        Genre {
            id,
            name: name.to_owned(),
            description: description.map(str::to_owned),
            status,
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trip() {
        let gateway = InMemoryGateway::default();

        let created = GenreService::create(
            &gateway,
            payload(Some(json!("RPG")), Some(json!("role playing")), Some(json!(2))),
        )
        .await
        .unwrap();
        assert!(created.id >= 1);

        let fetched = GenreService::find_by_id(&gateway, created.id).await.unwrap();
        assert_eq!(fetched.name, "RPG");
        assert_eq!(fetched.description.as_deref(), Some("role playing"));
        assert_eq!(fetched.status, STATUS_INACTIVE);
    }

    #[tokio::test]
    async fn create_without_status_stores_active() {
        let gateway = InMemoryGateway::default();

        let created = GenreService::create(&gateway, payload(Some(json!("Action")), None, None))
            .await
            .unwrap();

        assert_eq!(created.description, None);
        assert_eq!(created.status, STATUS_ACTIVE);
        assert_eq!(gateway.snapshot()[0].status, STATUS_ACTIVE);
    }

    #[tokio::test]
    async fn rejected_create_inserts_no_row() {
        let gateway = InMemoryGateway::default();

        let err = GenreService::create(&gateway, payload(Some(json!("")), None, None))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        assert!(gateway.snapshot().is_empty());
    }

    #[tokio::test]
    async fn get_of_unknown_id_is_not_found() {
        let gateway = InMemoryGateway::default();

        let err = GenreService::find_by_id(&gateway, 99).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn update_only_description_leaves_name_and_status() {
        let gateway = InMemoryGateway::seeded(vec![genre(7, "Action", None, STATUS_ACTIVE)]);

        let changes = GenreService::update(
            &gateway,
            7,
            payload(None, Some(json!("fast paced")), None),
        )
        .await
        .unwrap();

        // Response body carries only the applied field.
        assert_eq!(
            serde_json::to_value(&changes).unwrap(),
            json!({ "description": "fast paced" })
        );

        let row = &gateway.snapshot()[0];
        assert_eq!(row.name, "Action");
        assert_eq!(row.status, STATUS_ACTIVE);
        assert_eq!(row.description.as_deref(), Some("fast paced"));
    }

    #[tokio::test]
    async fn update_of_unknown_id_is_not_found() {
        let gateway = InMemoryGateway::default();

        let err = GenreService::update(&gateway, 1, payload(Some(json!("x")), None, None))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::NotFound(_)));
    }

    #[tokio::test]
    async fn rejected_update_mutates_no_row() {
        let gateway = InMemoryGateway::seeded(vec![genre(1, "Action", None, STATUS_ACTIVE)]);

        let err = GenreService::update(&gateway, 1, payload(None, None, None))
            .await
            .unwrap_err();

        assert!(matches!(err, ApiError::Validation(_)));
        assert_eq!(gateway.snapshot()[0].name, "Action");
    }

    #[tokio::test]
    async fn second_delete_of_same_id_is_not_found() {
        let gateway = InMemoryGateway::seeded(vec![genre(3, "Puzzle", None, STATUS_ACTIVE)]);

        GenreService::delete(&gateway, 3).await.unwrap();
        assert!(gateway.snapshot().is_empty());

        let err = GenreService::delete(&gateway, 3).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
        assert!(gateway.snapshot().is_empty());
    }
}
