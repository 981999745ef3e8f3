use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart::Form;

use crate::client::{Client, RequestOptions};
use crate::error::ApiResult;

/// Upload and versioning API methods.
///
/// All operations stream their file sources from disk; the boolean path
/// flags are rendered as `true`/`false` the way the server expects them.
#[async_trait]
pub trait UploadApi {
    /// Upload a file as a new document, returning the new document id.
    /// With `version_controlled` the document starts a version history.
    async fn upload_file(&self, file: &Path, version_controlled: bool) -> ApiResult<i64>;

    /// Upload a file together with its PDF rendition, returning the new
    /// document id
    async fn upload_file_with_pdf(
        &self,
        file: &Path,
        pdf: &Path,
        version_controlled: bool,
    ) -> ApiResult<i64>;

    /// Add a new version to an existing document. With `fixed` the version
    /// is marked immutable.
    async fn add_version_to_document(&self, id: i64, file: &Path, fixed: bool)
        -> ApiResult<bool>;

    /// Add a new version with a PDF rendition to an existing document
    async fn add_version_with_pdf_to_document(
        &self,
        id: i64,
        file: &Path,
        pdf: &Path,
        fixed: bool,
    ) -> ApiResult<bool>;
}

#[async_trait]
impl UploadApi for Client {
    async fn upload_file(&self, file: &Path, version_controlled: bool) -> ApiResult<i64> {
        let form = Form::new().part("file", Client::file_part(file).await?);

        self.post_multipart(
            &format!("/uploadFile/{version_controlled}"),
            form,
            RequestOptions::new(),
        )
        .await
    }

    async fn upload_file_with_pdf(
        &self,
        file: &Path,
        pdf: &Path,
        version_controlled: bool,
    ) -> ApiResult<i64> {
        let form = Form::new()
            .part("file", Client::file_part(file).await?)
            .part("pdfFile", Client::file_part(pdf).await?);

        self.post_multipart(
            &format!("/uploadFileWithPdf/{version_controlled}"),
            form,
            RequestOptions::new(),
        )
        .await
    }

    async fn add_version_to_document(
        &self,
        id: i64,
        file: &Path,
        fixed: bool,
    ) -> ApiResult<bool> {
        let form = Form::new().part("file", Client::file_part(file).await?);

        self.post_multipart(
            &format!("/addVersionToDocument/{id}/{fixed}"),
            form,
            RequestOptions::new(),
        )
        .await
    }

    async fn add_version_with_pdf_to_document(
        &self,
        id: i64,
        file: &Path,
        pdf: &Path,
        fixed: bool,
    ) -> ApiResult<bool> {
        let form = Form::new()
            .part("file", Client::file_part(file).await?)
            .part("pdfFile", Client::file_part(pdf).await?);

        self.post_multipart(
            &format!("/addVersionToDocument/{id}/{fixed}"),
            form,
            RequestOptions::new(),
        )
        .await
    }
}
