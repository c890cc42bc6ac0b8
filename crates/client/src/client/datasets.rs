//! Dataset endpoints

use reqwest::multipart::{Form, Part};
use reqwest::{header, Method};
use serde_json::Value;
use tracing::warn;

use super::ApiClient;
use crate::response::ApiResponse;
use crate::types::{DatasetPreview, DatasetResponse};

impl ApiClient {
    /// Upload a dataset file into a project
    ///
    /// Sent as a multipart form with a single `file` part, so the JSON
    /// content type does not apply here. Failure normalization matches
    /// [`ApiClient::execute`] except both fallback messages are
    /// `"Upload failed"`.
    pub async fn upload_dataset(
        &self,
        project_id: i64,
        file_name: impl Into<String>,
        bytes: Vec<u8>,
    ) -> ApiResponse<DatasetResponse> {
        let url = format!(
            "{}/api/datasets/upload?project_id={project_id}",
            self.base_url()
        );
        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name.into()));

        let mut request = self.http.post(url).multipart(form);
        if let Some(token) = self.token() {
            request = request.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(error) => {
                warn!(%error, "upload transport failure");
                return ApiResponse::Error(error.to_string());
            }
        };

        let status = response.status();
        let value: Value = match response.json().await {
            Ok(value) => value,
            Err(error) => return ApiResponse::Error(error.to_string()),
        };

        if !status.is_success() {
            let message = match value.get("detail") {
                Some(Value::String(detail)) => detail.clone(),
                Some(detail) => detail.to_string(),
                None => "Upload failed".to_string(),
            };
            return ApiResponse::Error(message);
        }

        match serde_json::from_value(value) {
            Ok(dataset) => ApiResponse::Data(dataset),
            Err(error) => ApiResponse::Error(error.to_string()),
        }
    }

    /// Fetch a single dataset
    pub async fn get_dataset(&self, id: i64) -> ApiResponse<DatasetResponse> {
        let request = self.request(Method::GET, &format!("/api/datasets/{id}"));
        self.execute(request).await
    }

    /// Fetch the first rows of a dataset; `rows` defaults to 10
    pub async fn dataset_preview(
        &self,
        id: i64,
        rows: Option<u32>,
    ) -> ApiResponse<DatasetPreview> {
        let rows = rows.unwrap_or(10);
        let request = self.request(Method::GET, &format!("/api/datasets/{id}/preview?rows={rows}"));
        self.execute(request).await
    }
}
