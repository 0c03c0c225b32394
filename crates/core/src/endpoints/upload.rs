//! File upload requests
//!
//! Two paths exist. Direct uploads post the file to the backend, which stores
//! it and answers with an [`UploadFileResponse`](crate::types::UploadFileResponse).
//! Credentialed uploads fetch temporary object-storage credentials first and
//! then post a signed form straight to the bucket.

use crate::request::{ApiRequest, FormPart, UploadFile};
use crate::types::UploadCredentials;

pub const UPLOAD_PATH: &str = "/api/v1/common/upload";
pub const UPLOAD_AWS_PATH: &str = "/api/v1/common/upload/aws";
pub const CREDENTIALS_PATH: &str = "/api/upload/s3/credentials";

/// Everything needed to post one file into a bucket
#[derive(Debug, Clone)]
pub struct S3Upload {
    pub file: UploadFile,
    pub credentials: UploadCredentials,
    pub bucket: String,
    pub key: String,
}

pub fn upload_file(file: UploadFile) -> ApiRequest {
    ApiRequest::post(UPLOAD_PATH).with_multipart(vec![FormPart::file("file", file)])
}

pub fn upload_file_to_aws(file: UploadFile) -> ApiRequest {
    ApiRequest::post(UPLOAD_AWS_PATH).with_multipart(vec![FormPart::file("file", file)])
}

pub fn upload_image(file: UploadFile) -> ApiRequest {
    upload_file(file)
}

pub fn upload_video(file: UploadFile) -> ApiRequest {
    upload_file(file)
}

pub fn s3_credentials() -> ApiRequest {
    ApiRequest::get(CREDENTIALS_PATH)
}

pub fn bucket_url(bucket: &str) -> String {
    format!("https://{bucket}.s3.amazonaws.com/")
}

/// Signed form post to the bucket.
///
/// Storage rejects the form unless `file` is the last field, so the order
/// below is fixed. Failures are not reported through the error notifier.
pub fn upload_to_s3(upload: S3Upload) -> ApiRequest {
    let S3Upload {
        file,
        credentials,
        bucket,
        key,
    } = upload;

    ApiRequest::post(bucket_url(&bucket))
        .with_multipart(vec![
            FormPart::text("key", key),
            FormPart::text("acl", "public-read"),
            FormPart::text("Content-Type", file.mime_type.clone()),
            FormPart::text("AWSAccessKeyId", credentials.access_key),
            FormPart::text("policy", credentials.session_token.clone()),
            FormPart::text("x-amz-security-token", credentials.session_token),
            FormPart::file("file", file),
        ])
        .without_error_message()
}

/// Infer a MIME type from the file name's extension.
pub fn mime_from_extension(file_name: &str) -> &'static str {
    let ext = match file_name.rsplit_once('.') {
        Some((_, ext)) => ext.to_lowercase(),
        None => return "application/octet-stream",
    };

    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "mp4" => "video/mp4",
        "mov" => "video/quicktime",
        "webm" => "video/webm",
        "m4v" => "video/x-m4v",
        "mp3" => "audio/mpeg",
        "json" => "application/json",
        "glb" => "model/gltf-binary",
        "gltf" => "model/gltf+json",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        "csv" => "text/csv",
        "zip" => "application/zip",
        _ => "application/octet-stream",
    }
}
