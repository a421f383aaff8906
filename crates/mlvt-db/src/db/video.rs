use async_trait::async_trait;
use chrono::{DateTime, Utc};
use mlvt_core::models::{Frame, NewVideo, UserId, Video, VideoId, VideoStatus};
use sqlx::{PgPool, Postgres};

use crate::store::{StoreError, StoreResult, VideoStore};

const VIDEO_COLUMNS: &str = "id, title, duration, description, file_name, folder, image, status, user_id, created_at, updated_at";

#[derive(Debug, sqlx::FromRow)]
struct VideoRow {
    id: i64,
    title: String,
    duration: i64,
    description: String,
    file_name: String,
    folder: String,
    image: String,
    status: VideoStatus,
    user_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<VideoRow> for Video {
    type Error = StoreError;

    fn try_from(row: VideoRow) -> Result<Self, Self::Error> {
        Ok(Video {
            id: u64::try_from(row.id)
                .map_err(|_| StoreError::CorruptRecord(format!("video id {}", row.id)))?,
            title: row.title,
            duration: row.duration,
            description: row.description,
            file_name: row.file_name,
            folder: row.folder,
            image: row.image,
            status: row.status,
            user_id: u64::try_from(row.user_id)
                .map_err(|_| StoreError::CorruptRecord(format!("user id {}", row.user_id)))?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, sqlx::FromRow)]
struct FrameRow {
    id: i64,
    video_id: i64,
    link: String,
}

impl TryFrom<FrameRow> for Frame {
    type Error = StoreError;

    fn try_from(row: FrameRow) -> Result<Self, Self::Error> {
        Ok(Frame {
            id: u64::try_from(row.id)
                .map_err(|_| StoreError::CorruptRecord(format!("frame id {}", row.id)))?,
            video_id: u64::try_from(row.video_id)
                .map_err(|_| StoreError::CorruptRecord(format!("video id {}", row.video_id)))?,
            link: row.link,
        })
    }
}

/// Ids above `i64::MAX` cannot exist in a BIGSERIAL column.
fn db_id(id: u64) -> Option<i64> {
    i64::try_from(id).ok()
}

/// Postgres-backed video store
#[derive(Clone)]
pub struct PostgresVideoStore {
    pool: PgPool,
}

impl PostgresVideoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl VideoStore for PostgresVideoStore {
    #[tracing::instrument(skip(self, video), fields(db.table = "videos", db.operation = "insert", user_id = video.user_id))]
    async fn create(&self, video: NewVideo) -> StoreResult<Video> {
        let user_id = db_id(video.user_id).ok_or(StoreError::IdOutOfRange(video.user_id))?;

        let row = sqlx::query_as::<Postgres, VideoRow>(&format!(
            r#"
            INSERT INTO videos (title, duration, description, file_name, folder, image, status, user_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            VIDEO_COLUMNS
        ))
        .bind(video.title)
        .bind(video.duration)
        .bind(video.description)
        .bind(video.file_name)
        .bind(video.folder)
        .bind(video.image)
        .bind(VideoStatus::Raw)
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;

        let video = Video::try_from(row)?;
        tracing::debug!(video_id = video.id, "Video record created");
        Ok(video)
    }

    #[tracing::instrument(skip(self), fields(db.table = "videos", db.operation = "select", db.record_id = id))]
    async fn find_by_id(&self, id: VideoId) -> StoreResult<Option<Video>> {
        let Some(id) = db_id(id) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<Postgres, VideoRow>(&format!(
            "SELECT {} FROM videos WHERE id = $1",
            VIDEO_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Video::try_from).transpose()
    }

    #[tracing::instrument(skip(self), fields(db.table = "videos", db.operation = "update", db.record_id = id, status = %status))]
    async fn update_status(&self, id: VideoId, status: VideoStatus) -> StoreResult<bool> {
        let Some(id) = db_id(id) else {
            return Ok(false);
        };

        let rows_affected = sqlx::query(
            r#"
            UPDATE videos
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(status)
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(rows_affected > 0)
    }

    #[tracing::instrument(skip(self), fields(db.table = "videos", db.operation = "delete", db.record_id = id))]
    async fn delete(&self, id: VideoId) -> StoreResult<bool> {
        let Some(id) = db_id(id) else {
            return Ok(false);
        };

        let rows_affected = sqlx::query("DELETE FROM videos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }

    #[tracing::instrument(skip(self), fields(db.table = "videos", db.operation = "select", user_id = user_id))]
    async fn find_by_user_id(&self, user_id: UserId) -> StoreResult<Vec<Video>> {
        let Some(user_id) = db_id(user_id) else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query_as::<Postgres, VideoRow>(&format!(
            "SELECT {} FROM videos WHERE user_id = $1 ORDER BY created_at, id",
            VIDEO_COLUMNS
        ))
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Video::try_from).collect()
    }

    #[tracing::instrument(skip(self), fields(db.table = "frames", db.operation = "select", video_id = video_id))]
    async fn find_frames_by_video_id(&self, video_id: VideoId) -> StoreResult<Vec<Frame>> {
        let Some(video_id) = db_id(video_id) else {
            return Ok(Vec::new());
        };

        let rows = sqlx::query_as::<Postgres, FrameRow>(
            "SELECT id, video_id, link FROM frames WHERE video_id = $1 ORDER BY id",
        )
        .bind(video_id)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Frame::try_from).collect()
    }

    #[tracing::instrument(skip(self, video_ids), fields(db.table = "frames", db.operation = "select", video_count = video_ids.len()))]
    async fn find_frames_by_video_ids(&self, video_ids: &[VideoId]) -> StoreResult<Vec<Frame>> {
        let ids: Vec<i64> = video_ids.iter().filter_map(|id| db_id(*id)).collect();
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let rows = sqlx::query_as::<Postgres, FrameRow>(
            r#"
            SELECT id, video_id, link
            FROM frames
            WHERE video_id = ANY($1)
            ORDER BY array_position($1, video_id), id
            "#,
        )
        .bind(ids.as_slice())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Frame::try_from).collect()
    }

    async fn health_check(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_id_range() {
        assert_eq!(db_id(42), Some(42));
        assert_eq!(db_id(i64::MAX as u64), Some(i64::MAX));
        assert_eq!(db_id(u64::MAX), None);
    }

    #[test]
    fn test_negative_row_id_is_corrupt() {
        let row = FrameRow {
            id: -1,
            video_id: 3,
            link: "frames/3/0001.jpg".to_string(),
        };
        assert!(matches!(
            Frame::try_from(row),
            Err(StoreError::CorruptRecord(_))
        ));
    }
}
