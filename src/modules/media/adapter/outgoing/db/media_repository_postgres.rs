use async_trait::async_trait;
use sea_orm::{
    ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, QueryResult, Statement,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::media::application::domain::entities::{MediaRecord, MediaType, StorageLocation};
use crate::media::application::ports::outgoing::{MediaRepository, MediaRepositoryError};

// ============================================================================
// Repository Implementation (Production)
// ============================================================================

const RECORD_COLUMNS: &str = r#"
    id,
    owner_id,
    name,
    media_type::text as media_type,
    storage_location,
    file_size_bytes,
    created_at
"#;

#[derive(Clone)]
pub struct MediaRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl MediaRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // SQL builders
    // =====================================================

    fn insert_stmt(record: &MediaRecord) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!(
                r#"
                INSERT INTO media (
                  id, owner_id, name, media_type,
                  storage_location, file_size_bytes, created_at
                )
                VALUES ($1, $2, $3, $4::media_type, $5, $6, $7)
                RETURNING {RECORD_COLUMNS}
                "#
            ),
            vec![
                record.id.into(),
                record.owner_id.value().into(),
                record.name.clone().into(),
                record.media_type.to_string().into(),
                record.storage_location.as_str().into(),
                (record.file_size_bytes as i64).into(),
                record.created_at.fixed_offset().into(),
            ],
        )
    }

    fn find_by_id_stmt(id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!(
                r#"
                SELECT {RECORD_COLUMNS}
                FROM media
                WHERE id = $1
                "#
            ),
            vec![id.into()],
        )
    }

    fn find_by_owner_stmt(owner: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!(
                r#"
                SELECT {RECORD_COLUMNS}
                FROM media
                WHERE owner_id = $1
                ORDER BY created_at ASC, id ASC
                "#
            ),
            vec![owner.into()],
        )
    }

    fn find_all_stmt() -> Statement {
        Statement::from_string(
            DatabaseBackend::Postgres,
            format!(
                r#"
                SELECT {RECORD_COLUMNS}
                FROM media
                ORDER BY created_at ASC, id ASC
                "#
            ),
        )
    }

    fn update_name_stmt(id: Uuid, name: &str) -> Statement {
        // Single conditional statement: concurrent renames of the same
        // record serialize on the row.
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            format!(
                r#"
                UPDATE media
                SET name = $2
                WHERE id = $1
                RETURNING {RECORD_COLUMNS}
                "#
            ),
            vec![id.into(), name.into()],
        )
    }

    fn delete_stmt(id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            DELETE FROM media
            WHERE id = $1
            "#,
            vec![id.into()],
        )
    }

    // =====================================================
    // Mapping helpers
    // =====================================================

    fn map_db_err(e: DbErr) -> MediaRepositoryError {
        MediaRepositoryError::DatabaseError(e.to_string())
    }

    fn parse_media_type(s: &str) -> Result<MediaType, MediaRepositoryError> {
        match s {
            "image" => Ok(MediaType::Image),
            "video" => Ok(MediaType::Video),
            "audio" => Ok(MediaType::Audio),
            "document" => Ok(MediaType::Document),
            _ => Err(MediaRepositoryError::DatabaseError(format!(
                "invalid media type: {}",
                s
            ))),
        }
    }

    fn map_row(row: &QueryResult) -> Result<MediaRecord, MediaRepositoryError> {
        let id: Uuid = row.try_get("", "id").map_err(Self::map_db_err)?;
        let owner_id: Uuid = row.try_get("", "owner_id").map_err(Self::map_db_err)?;
        let name: String = row.try_get("", "name").map_err(Self::map_db_err)?;
        let media_type: String = row.try_get("", "media_type").map_err(Self::map_db_err)?;
        let storage_location: String = row
            .try_get("", "storage_location")
            .map_err(Self::map_db_err)?;
        let file_size_bytes: i64 = row
            .try_get("", "file_size_bytes")
            .map_err(Self::map_db_err)?;
        let created_at: chrono::DateTime<chrono::FixedOffset> =
            row.try_get("", "created_at").map_err(Self::map_db_err)?;

        Ok(MediaRecord {
            id,
            owner_id: UserId::from(owner_id),
            name,
            media_type: Self::parse_media_type(&media_type)?,
            storage_location: StorageLocation::from(storage_location),
            file_size_bytes: file_size_bytes as u64,
            created_at: created_at.with_timezone(&chrono::Utc),
        })
    }

    async fn query_records(&self, stmt: Statement) -> Result<Vec<MediaRecord>, MediaRepositoryError> {
        let rows = self.db.query_all(stmt).await.map_err(Self::map_db_err)?;
        rows.iter().map(Self::map_row).collect()
    }
}

#[async_trait]
impl MediaRepository for MediaRepositoryPostgres {
    async fn save(&self, record: &MediaRecord) -> Result<MediaRecord, MediaRepositoryError> {
        let row = self
            .db
            .query_one(Self::insert_stmt(record))
            .await
            .map_err(Self::map_db_err)?
            .ok_or_else(|| {
                MediaRepositoryError::DatabaseError("insert returned no row".to_string())
            })?;

        Self::map_row(&row)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<MediaRecord>, MediaRepositoryError> {
        let row = self
            .db
            .query_one(Self::find_by_id_stmt(id))
            .await
            .map_err(Self::map_db_err)?;

        row.as_ref().map(Self::map_row).transpose()
    }

    async fn find_by_owner(
        &self,
        owner: UserId,
    ) -> Result<Vec<MediaRecord>, MediaRepositoryError> {
        self.query_records(Self::find_by_owner_stmt(owner.value()))
            .await
    }

    async fn find_all(&self) -> Result<Vec<MediaRecord>, MediaRepositoryError> {
        self.query_records(Self::find_all_stmt()).await
    }

    async fn update_name(
        &self,
        id: Uuid,
        name: &str,
    ) -> Result<MediaRecord, MediaRepositoryError> {
        let row = self
            .db
            .query_one(Self::update_name_stmt(id, name))
            .await
            .map_err(Self::map_db_err)?
            .ok_or(MediaRepositoryError::NotFound)?;

        Self::map_row(&row)
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), MediaRepositoryError> {
        let result = self
            .db
            .execute(Self::delete_stmt(id))
            .await
            .map_err(Self::map_db_err)?;

        if result.rows_affected() == 0 {
            return Err(MediaRepositoryError::NotFound);
        }
        Ok(())
    }
}

// ============================================================================
// Tests (deterministic, MockDatabase)
// ============================================================================
