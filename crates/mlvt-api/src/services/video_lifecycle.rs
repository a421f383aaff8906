//! Video lifecycle operations: status tracking, record management and URL issuance.
//!
//! Keeps handler logic thin and allows unit testing without HTTP. Store and
//! issuer failures are logged here with their cause and surfaced as
//! `StoreUnavailable` / `IssuerUnavailable`; nothing is retried and no
//! operation returns a partial result.

use mlvt_core::models::{
    CreateVideoRequest, Frame, NewVideo, UploadKind, UserId, Video, VideoId, VideoStatus,
};
use mlvt_core::{AppError, StorageConfig};
use mlvt_db::{StoreError, VideoStore};
use mlvt_storage::{object_key, BlobUrlIssuer, StorageError, UrlOperation};
use std::sync::Arc;
use validator::Validate;

use crate::constants::messages;

/// Folders that upload URLs are issued into
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFolders {
    pub video_folder: String,
    pub image_folder: String,
}

impl UploadFolders {
    pub fn from_config(config: &StorageConfig) -> Self {
        Self {
            video_folder: config.video_folder.clone(),
            image_folder: config.image_folder.clone(),
        }
    }

    pub fn for_kind(&self, kind: UploadKind) -> &str {
        match kind {
            UploadKind::Video => &self.video_folder,
            UploadKind::Image => &self.image_folder,
        }
    }
}

/// A video plus download URLs for its file and, if it has one, its image.
#[derive(Debug, Clone)]
pub struct VideoWithUrls {
    pub video: Video,
    pub video_url: String,
    pub image_url: Option<String>,
}

#[derive(Clone)]
pub struct VideoLifecycleService {
    store: Arc<dyn VideoStore>,
    issuer: Arc<dyn BlobUrlIssuer>,
    folders: UploadFolders,
}

fn store_failure(operation: &'static str, err: StoreError) -> AppError {
    match err {
        StoreError::IdOutOfRange(id) => {
            tracing::debug!(operation, id, "Id out of store range");
            AppError::InvalidInput(messages::INVALID_INPUT.to_string())
        }
        other => {
            tracing::error!(operation, error = %other, "Video store call failed");
            AppError::StoreUnavailable(other.to_string())
        }
    }
}

fn issuer_failure(operation: &'static str, err: StorageError) -> AppError {
    tracing::error!(operation, error = %err, "URL issuer call failed");
    AppError::IssuerUnavailable(err.to_string())
}

fn video_not_found() -> AppError {
    AppError::NotFound(messages::VIDEO_NOT_FOUND.to_string())
}

impl VideoLifecycleService {
    pub fn new(
        store: Arc<dyn VideoStore>,
        issuer: Arc<dyn BlobUrlIssuer>,
        folders: UploadFolders,
    ) -> Self {
        Self {
            store,
            issuer,
            folders,
        }
    }

    async fn require_video(&self, operation: &'static str, id: VideoId) -> Result<Video, AppError> {
        self.store
            .find_by_id(id)
            .await
            .map_err(|e| store_failure(operation, e))?
            .ok_or_else(video_not_found)
    }

    async fn download_url(
        &self,
        operation: &'static str,
        folder: &str,
        file_name: &str,
    ) -> Result<String, AppError> {
        self.issuer
            .generate_presigned_url(UrlOperation::Download, folder, file_name, "")
            .await
            .map_err(|e| issuer_failure(operation, e))
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_status(&self, id: VideoId) -> Result<VideoStatus, AppError> {
        Ok(self.require_video("get_status", id).await?.status)
    }

    /// Any status may follow any other; the update is a single atomic store call.
    #[tracing::instrument(skip(self), fields(status = %status))]
    pub async fn update_status(&self, id: VideoId, status: VideoStatus) -> Result<(), AppError> {
        let updated = self
            .store
            .update_status(id, status)
            .await
            .map_err(|e| store_failure("update_status", e))?;

        if !updated {
            return Err(video_not_found());
        }

        tracing::info!(video_id = id, status = %status, "Video status updated");
        Ok(())
    }

    /// Validate and persist a new video. Any caller-supplied status is ignored:
    /// the record is always created as `raw`.
    #[tracing::instrument(skip(self, request), fields(user_id = request.user_id))]
    pub async fn create_video(&self, request: CreateVideoRequest) -> Result<Video, AppError> {
        if let Err(errors) = request.validate() {
            tracing::debug!(errors = %errors, "Create video request failed validation");
            return Err(errors.into());
        }

        self.check_object_keys(&request)?;

        if let Some(status) = &request.status {
            tracing::debug!(requested_status = %status, "Ignoring caller-supplied status on create");
        }

        let video = self
            .store
            .create(NewVideo::from(request))
            .await
            .map_err(|e| store_failure("create_video", e))?;

        tracing::info!(video_id = video.id, "Video created");
        Ok(video)
    }

    /// Rejects names that could never be turned into a download URL later.
    fn check_object_keys(&self, request: &CreateVideoRequest) -> Result<(), AppError> {
        let mut keys = vec![(request.folder.as_str(), request.file_name.as_str())];
        if !request.image.trim().is_empty() {
            keys.push((self.folders.image_folder.as_str(), request.image.as_str()));
        }

        for (folder, file_name) in keys {
            if let Err(e) = object_key(folder, file_name) {
                tracing::debug!(error = %e, "Create video request names an unusable object key");
                return Err(AppError::InvalidInput(messages::INVALID_INPUT.to_string()));
            }
        }
        Ok(())
    }

    /// Removes the record only; stored blobs are left in place.
    #[tracing::instrument(skip(self))]
    pub async fn delete_video(&self, id: VideoId) -> Result<(), AppError> {
        let deleted = self
            .store
            .delete(id)
            .await
            .map_err(|e| store_failure("delete_video", e))?;

        if !deleted {
            return Err(video_not_found());
        }

        tracing::info!(video_id = id, "Video deleted");
        Ok(())
    }

    /// Look up a video and issue download URLs for its file and image.
    /// No URL is issued when the lookup fails; any issuer failure fails the call.
    #[tracing::instrument(skip(self))]
    pub async fn get_video_by_id(&self, id: VideoId) -> Result<VideoWithUrls, AppError> {
        let video = self.require_video("get_video_by_id", id).await?;

        let video_url = self
            .download_url("get_video_by_id", &video.folder, &video.file_name)
            .await?;

        let image_url = if video.has_image() {
            Some(
                self.download_url("get_video_by_id", &self.folders.image_folder, &video.image)
                    .await?,
            )
        } else {
            None
        };

        Ok(VideoWithUrls {
            video,
            video_url,
            image_url,
        })
    }

    /// Videos owned by the user plus the frames of each. Unknown users get two empty lists.
    #[tracing::instrument(skip(self))]
    pub async fn list_videos_by_user_id(
        &self,
        user_id: UserId,
    ) -> Result<(Vec<Video>, Vec<Frame>), AppError> {
        let videos = self
            .store
            .find_by_user_id(user_id)
            .await
            .map_err(|e| store_failure("list_videos_by_user_id", e))?;

        if videos.is_empty() {
            return Ok((videos, Vec::new()));
        }

        let video_ids: Vec<VideoId> = videos.iter().map(|v| v.id).collect();
        let frames = self
            .store
            .find_frames_by_video_ids(&video_ids)
            .await
            .map_err(|e| store_failure("list_videos_by_user_id", e))?;

        tracing::debug!(
            video_count = videos.len(),
            frame_count = frames.len(),
            "Listed user videos"
        );
        Ok((videos, frames))
    }

    /// Issue a PUT URL into the folder configured for `kind`.
    #[tracing::instrument(skip(self), fields(kind = %kind))]
    pub async fn generate_upload_url(
        &self,
        kind: UploadKind,
        file_name: &str,
        file_type: &str,
    ) -> Result<String, AppError> {
        let folder = self.folders.for_kind(kind);
        self.issuer
            .generate_presigned_url(UrlOperation::Upload, folder, file_name, file_type)
            .await
            .map_err(|e| match e {
                StorageError::InvalidKey(reason) => {
                    tracing::debug!(reason = %reason, "Rejected upload file name");
                    AppError::InvalidInput(messages::INVALID_INPUT.to_string())
                }
                other => issuer_failure("generate_upload_url", other),
            })
    }

    #[tracing::instrument(skip(self))]
    pub async fn generate_download_url_for_video(&self, id: VideoId) -> Result<String, AppError> {
        let video = self
            .require_video("generate_download_url_for_video", id)
            .await?;
        self.download_url(
            "generate_download_url_for_video",
            &video.folder,
            &video.file_name,
        )
        .await
    }

    #[tracing::instrument(skip(self))]
    pub async fn generate_download_url_for_image(&self, id: VideoId) -> Result<String, AppError> {
        let video = self
            .require_video("generate_download_url_for_image", id)
            .await?;
        if !video.has_image() {
            return Err(AppError::NotFound(messages::IMAGE_NOT_FOUND.to_string()));
        }
        self.download_url(
            "generate_download_url_for_image",
            &self.folders.image_folder,
            &video.image,
        )
        .await
    }

    /// Readiness of the backing store.
    pub async fn store_ready(&self) -> Result<(), AppError> {
        self.store
            .health_check()
            .await
            .map_err(|e| store_failure("health_check", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mlvt_db::MemoryVideoStore;
    use mlvt_storage::StaticUrlIssuer;

    struct Fixture {
        service: VideoLifecycleService,
        store: MemoryVideoStore,
        issuer: StaticUrlIssuer,
    }

    fn fixture() -> Fixture {
        let store = MemoryVideoStore::new();
        let issuer = StaticUrlIssuer::default();
        let service = VideoLifecycleService::new(
            Arc::new(store.clone()),
            Arc::new(issuer.clone()),
            UploadFolders {
                video_folder: "videos".to_string(),
                image_folder: "frames".to_string(),
            },
        );
        Fixture {
            service,
            store,
            issuer,
        }
    }

    fn create_request(title: &str, user_id: UserId) -> CreateVideoRequest {
        CreateVideoRequest {
            title: title.to_string(),
            duration: 120,
            description: String::new(),
            file_name: "clip.mp4".to_string(),
            folder: "videos".to_string(),
            image: "clip.jpg".to_string(),
            user_id,
            status: None,
        }
    }

    #[tokio::test]
    async fn test_create_forces_raw_status() {
        let f = fixture();
        let mut request = create_request("Test Video", 1);
        request.status = Some(serde_json::json!("success"));

        let video = f.service.create_video(request).await.unwrap();
        assert_eq!(video.status, VideoStatus::Raw);
        assert_eq!(f.service.get_status(video.id).await.unwrap(), VideoStatus::Raw);
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_request() {
        let f = fixture();
        let mut request = create_request("Test Video", 1);
        request.file_name = String::new();

        match f.service.create_video(request).await {
            Err(AppError::InvalidInput(msg)) => assert_eq!(msg, "invalid input"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
        assert!(f.store.is_empty());
    }

    #[tokio::test]
    async fn test_create_rejects_names_that_cannot_form_object_keys() {
        let f = fixture();
        let cases: [(&str, &str, &str); 5] = [
            ("/videos", "clip.mp4", "clip.jpg"),
            ("videos", "../clip.mp4", "clip.jpg"),
            ("videos/../secret", "clip.mp4", "clip.jpg"),
            ("videos", "   ", "clip.jpg"),
            ("videos", "clip.mp4", "../clip.jpg"),
        ];

        for (folder, file_name, image) in cases {
            let mut request = create_request("Test Video", 1);
            request.folder = folder.to_string();
            request.file_name = file_name.to_string();
            request.image = image.to_string();

            match f.service.create_video(request).await {
                Err(AppError::InvalidInput(msg)) => assert_eq!(msg, "invalid input"),
                other => panic!("expected InvalidInput for {folder:?}/{file_name:?}, got {other:?}"),
            }
        }
        assert!(f.store.is_empty());
        assert!(f.issuer.calls().is_empty());
    }

    #[tokio::test]
    async fn test_created_video_urls_can_always_be_issued() {
        let f = fixture();
        let mut request = create_request("Test Video", 1);
        request.folder = "videos/2024/".to_string();
        request.image = "   ".to_string();

        let video = f.service.create_video(request).await.unwrap();
        let result = f.service.get_video_by_id(video.id).await.unwrap();
        assert!(result.video_url.contains("videos/2024/clip.mp4"));
        assert!(result.image_url.is_none());
    }

    #[tokio::test]
    async fn test_update_then_get_status_for_every_status() {
        let f = fixture();
        let video = f
            .service
            .create_video(create_request("Test Video", 1))
            .await
            .unwrap();

        for status in VideoStatus::ALL {
            f.service.update_status(video.id, status).await.unwrap();
            assert_eq!(f.service.get_status(video.id).await.unwrap(), status);
        }
    }

    #[tokio::test]
    async fn test_missing_video_is_not_found_everywhere() {
        let f = fixture();
        assert!(matches!(
            f.service.get_status(404).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            f.service.update_status(404, VideoStatus::Processing).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            f.service.delete_video(404).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            f.service.get_video_by_id(404).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            f.service.generate_download_url_for_video(404).await,
            Err(AppError::NotFound(_))
        ));
        assert!(f.issuer.calls().is_empty());
    }

    #[tokio::test]
    async fn test_get_video_by_id_issues_both_urls() {
        let f = fixture();
        let video = f
            .service
            .create_video(create_request("Test Video", 1))
            .await
            .unwrap();

        let result = f.service.get_video_by_id(video.id).await.unwrap();
        assert_eq!(result.video.id, video.id);
        assert!(result.video_url.contains("videos/clip.mp4"));
        assert!(result
            .image_url
            .as_deref()
            .is_some_and(|url| url.contains("frames/clip.jpg")));

        let calls = f.issuer.calls();
        assert_eq!(calls.len(), 2);
        assert!(calls
            .iter()
            .all(|call| call.operation == UrlOperation::Download));
    }

    #[tokio::test]
    async fn test_get_video_without_image_has_no_image_url() {
        let f = fixture();
        let mut request = create_request("No Thumb", 1);
        request.image = String::new();
        let video = f.service.create_video(request).await.unwrap();

        let result = f.service.get_video_by_id(video.id).await.unwrap();
        assert!(result.image_url.is_none());
        assert!(matches!(
            f.service.generate_download_url_for_image(video.id).await,
            Err(AppError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_issuer_failure_fails_whole_lookup() {
        let f = fixture();
        let video = f
            .service
            .create_video(create_request("Test Video", 1))
            .await
            .unwrap();
        f.issuer.set_failing(true);

        match f.service.get_video_by_id(video.id).await {
            Err(err @ AppError::IssuerUnavailable(_)) => {
                use mlvt_core::ErrorMetadata;
                assert_eq!(err.client_message(), "internal server error");
            }
            other => panic!("expected IssuerUnavailable, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_store_failure_is_store_unavailable() {
        let f = fixture();
        f.store.set_failing(true);
        assert!(matches!(
            f.service.get_status(1).await,
            Err(AppError::StoreUnavailable(_))
        ));
        assert!(matches!(
            f.service.list_videos_by_user_id(1).await,
            Err(AppError::StoreUnavailable(_))
        ));
        assert!(f.service.store_ready().await.is_err());
    }

    #[tokio::test]
    async fn test_list_for_unknown_user_is_empty() {
        let f = fixture();
        let (videos, frames) = f.service.list_videos_by_user_id(77).await.unwrap();
        assert!(videos.is_empty());
        assert!(frames.is_empty());
    }

    #[tokio::test]
    async fn test_list_includes_frames_of_user_videos_only() {
        let f = fixture();
        let mine = f
            .service
            .create_video(create_request("Mine", 5))
            .await
            .unwrap();
        let theirs = f
            .service
            .create_video(create_request("Theirs", 6))
            .await
            .unwrap();
        f.store.add_frame(mine.id, "frames/mine/0001.jpg");
        f.store.add_frame(theirs.id, "frames/theirs/0001.jpg");

        let (videos, frames) = f.service.list_videos_by_user_id(5).await.unwrap();
        assert_eq!(videos.len(), 1);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].video_id, mine.id);
    }

    #[tokio::test]
    async fn test_upload_url_uses_folder_for_kind() {
        let f = fixture();
        let video_url = f
            .service
            .generate_upload_url(UploadKind::Video, "name.mp4", "video/mp4")
            .await
            .unwrap();
        let image_url = f
            .service
            .generate_upload_url(UploadKind::Image, "name.jpg", "image/jpeg")
            .await
            .unwrap();
        assert!(video_url.contains("videos/name.mp4"));
        assert!(image_url.contains("frames/name.jpg"));

        let calls = f.issuer.calls();
        assert_eq!(calls[0].file_type, "video/mp4");
        assert_eq!(calls[1].operation, UrlOperation::Upload);
    }

    #[tokio::test]
    async fn test_upload_url_empty_name_is_invalid_input() {
        let f = fixture();
        match f.service.generate_upload_url(UploadKind::Video, "", "").await {
            Err(AppError::InvalidInput(msg)) => assert_eq!(msg, "invalid input"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_delete_then_not_found() {
        let f = fixture();
        let video = f
            .service
            .create_video(create_request("Test Video", 1))
            .await
            .unwrap();
        f.service
            .update_status(video.id, VideoStatus::Processing)
            .await
            .unwrap();
        f.service.delete_video(video.id).await.unwrap();
        assert!(matches!(
            f.service.get_status(video.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
