use std::path::Path;

use motion_core::endpoints::upload::{self as endpoint, S3Upload};
use motion_core::types::{UploadCredentials, UploadFileResponse};
use motion_core::{ApiRequest, UploadFile};

use super::decode;
use crate::error::Error;
use crate::transport::{ProgressCallback, RequestConfig, Transport};

/// Read a file from disk, inferring its MIME type from the extension
pub async fn load_file(path: impl AsRef<Path>) -> Result<UploadFile, Error> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path).await.map_err(|source| Error::File {
        path: path.display().to_string(),
        source,
    })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());
    let mime_type = endpoint::mime_from_extension(&file_name);

    Ok(UploadFile::new(file_name, mime_type, bytes))
}

pub struct UploadApi<'a, T> {
    transport: &'a T,
}

impl<'a, T: Transport> UploadApi<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Store a file on the backend
    pub async fn upload_file(
        &self,
        file: UploadFile,
        on_progress: Option<ProgressCallback>,
    ) -> Result<UploadFileResponse, Error> {
        self.direct(endpoint::upload_file(file), on_progress).await
    }

    /// Store a file on the backend's object-storage bucket
    pub async fn upload_file_to_aws(
        &self,
        file: UploadFile,
        on_progress: Option<ProgressCallback>,
    ) -> Result<UploadFileResponse, Error> {
        self.direct(endpoint::upload_file_to_aws(file), on_progress)
            .await
    }

    pub async fn upload_image(
        &self,
        file: UploadFile,
        on_progress: Option<ProgressCallback>,
    ) -> Result<UploadFileResponse, Error> {
        self.direct(endpoint::upload_image(file), on_progress).await
    }

    pub async fn upload_video(
        &self,
        file: UploadFile,
        on_progress: Option<ProgressCallback>,
    ) -> Result<UploadFileResponse, Error> {
        self.direct(endpoint::upload_video(file), on_progress).await
    }

    pub async fn s3_credentials(&self) -> Result<UploadCredentials, Error> {
        decode(self.transport.get(endpoint::s3_credentials()).await?)
    }

    /// Post the file straight to the bucket with temporary credentials
    pub async fn upload_to_s3(
        &self,
        upload: S3Upload,
        on_progress: Option<ProgressCallback>,
    ) -> Result<(), Error> {
        let mut config = RequestConfig::new(endpoint::upload_to_s3(upload));
        config.on_upload_progress = on_progress;
        self.transport.request(config).await?;
        Ok(())
    }

    /// Progress reporting needs the raw request path
    async fn direct(
        &self,
        request: ApiRequest,
        on_progress: Option<ProgressCallback>,
    ) -> Result<UploadFileResponse, Error> {
        let value = match on_progress {
            Some(callback) => {
                self.transport
                    .request(RequestConfig::new(request).with_progress(callback))
                    .await?
            }
            None => self.transport.post(request).await?,
        };
        decode(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::testing::{Recording, Via};
    use crate::transport::{TransportError, UploadProgress};
    use serde_json::json;
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    fn file() -> UploadFile {
        UploadFile::new("squat.png", "image/png", vec![7; 1024])
    }

    fn stored() -> serde_json::Value {
        json!({
            "filename": "squat.png",
            "path": "uploads/squat.png",
            "url": "https://cdn.example.com/uploads/squat.png"
        })
    }

    #[tokio::test]
    async fn test_upload_with_progress_uses_raw_request() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let callback: ProgressCallback = Arc::new(move |progress: UploadProgress| {
            sink.lock().unwrap().push(progress);
        });

        let transport = Recording::new().reply(Ok(stored()));
        let response = UploadApi::new(&transport)
            .upload_file(file(), Some(callback))
            .await
            .unwrap();
        assert_eq!(response.path, "uploads/squat.png");

        let call = transport.single_call();
        assert_eq!(call.via, Via::Request);
        assert!(call.has_progress);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![UploadProgress {
                loaded: 1024,
                total: 1024
            }]
        );
    }

    #[tokio::test]
    async fn test_upload_paths_carry_the_same_request() {
        let with_progress = Recording::new().reply(Ok(stored()));
        let callback: ProgressCallback = Arc::new(|_: UploadProgress| {});
        UploadApi::new(&with_progress)
            .upload_file(file(), Some(callback))
            .await
            .unwrap();

        let without_progress = Recording::new().reply(Ok(stored()));
        UploadApi::new(&without_progress)
            .upload_file(file(), None)
            .await
            .unwrap();

        let raw = with_progress.single_call();
        let helper = without_progress.single_call();
        assert_eq!(helper.via, Via::Post);
        assert!(!helper.has_progress);
        assert_eq!(raw.request, helper.request);
        assert_eq!(helper.request.url, "/api/v1/common/upload");
        assert_eq!(helper.request.body.file(), Some(&file()));
    }

    #[tokio::test]
    async fn test_s3_upload_disables_error_notification() {
        let credentials = UploadCredentials {
            access_key: "AKIA".to_string(),
            secret_key: "secret".to_string(),
            session_token: "session".to_string(),
            url: String::new(),
        };
        let transport = Recording::new();

        UploadApi::new(&transport)
            .upload_to_s3(
                S3Upload {
                    file: file(),
                    credentials,
                    bucket: "media".to_string(),
                    key: "actions/squat.png".to_string(),
                },
                None,
            )
            .await
            .unwrap();

        let call = transport.single_call();
        assert_eq!(call.via, Via::Request);
        assert_eq!(call.request.url, "https://media.s3.amazonaws.com/");
        assert!(!call.request.show_error_message);
    }

    #[tokio::test]
    async fn test_upload_error_propagates_unchanged() {
        let failure = TransportError::Status {
            status: 413,
            body: "too large".to_string(),
        };
        let transport = Recording::new().reply(Err(failure.clone()));

        let err = UploadApi::new(&transport)
            .upload_video(file(), None)
            .await
            .unwrap_err();
        assert_eq!(err.transport(), Some(&failure));
    }

    #[tokio::test]
    async fn test_load_file_infers_mime() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("clip.MP4");
        std::fs::File::create(&path)
            .unwrap()
            .write_all(b"not really a video")
            .unwrap();

        let file = load_file(&path).await.unwrap();
        assert_eq!(file.file_name, "clip.MP4");
        assert_eq!(file.mime_type, "video/mp4");
        assert_eq!(file.len(), 18);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = load_file("/definitely/not/here.png").await.unwrap_err();
        assert!(matches!(err, Error::File { .. }));
    }
}
