//! # Media Table Migration
//!
//! The `media` table is the single source of truth for uploaded assets.
//! Each row owns exactly one object in the content store: `storage_location`
//! is the opaque key handed back by the file storage adapter, and a unique
//! index keeps two rows from ever claiming the same object.
//!
//! Ownership (`owner_id`) is what the authorization policy checks for
//! author-scoped reads and writes. There is no local `users` table to point
//! a foreign key at — principals arrive from the upstream auth gateway.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create enum type for media.media_type
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DO $$
                BEGIN
                    IF NOT EXISTS (SELECT 1 FROM pg_type WHERE typname = 'media_type') THEN
                        CREATE TYPE media_type AS ENUM ('image', 'video', 'audio', 'document');
                    END IF;
                END$$;
                "#,
            )
            .await?;

        // =====================================================
        // Create media table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Media::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Media::Id).uuid().not_null().primary_key())
                    // Ownership - set from the creator, never transferred
                    .col(ColumnDef::new(Media::OwnerId).uuid().not_null())
                    .col(ColumnDef::new(Media::Name).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Media::MediaType)
                            .custom(Alias::new("media_type"))
                            .not_null(),
                    )
                    // Opaque key into the content store
                    .col(
                        ColumnDef::new(Media::StorageLocation)
                            .string_len(1024)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Media::FileSizeBytes)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Media::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Fast lookup by owner - the author-scoped listing path
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_media_owner_id
                ON media (owner_id);
                "#,
            )
            .await?;

        // Listing order is creation-time ascending; keep it index-backed
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_media_owner_created
                ON media (owner_id, created_at ASC);
                "#,
            )
            .await?;

        // One metadata row per stored object
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_media_storage_location_unique
                ON media (storage_location);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_media_owner_id;
                DROP INDEX IF EXISTS idx_media_owner_created;
                DROP INDEX IF EXISTS idx_media_storage_location_unique;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Media::Table).to_owned())
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP TYPE IF EXISTS media_type;
                "#,
            )
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Media {
    Table,
    Id,
    OwnerId,
    Name,
    MediaType,
    StorageLocation,
    FileSizeBytes,
    CreatedAt,
}
