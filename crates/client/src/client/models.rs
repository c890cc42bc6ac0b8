//! Model catalog endpoints

use reqwest::Method;

use super::ApiClient;
use crate::response::ApiResponse;
use crate::types::ModelCatalogResponse;

impl ApiClient {
    /// List catalog models, optionally filtered by task type
    pub async fn list_models(
        &self,
        task_type: Option<&str>,
    ) -> ApiResponse<Vec<ModelCatalogResponse>> {
        let path = match task_type {
            Some(task_type) => format!("/api/models?task_type={task_type}"),
            None => "/api/models".to_string(),
        };
        let request = self.request(Method::GET, &path);
        self.execute(request).await
    }

    /// Fetch a single catalog model
    pub async fn get_model(&self, id: i64) -> ApiResponse<ModelCatalogResponse> {
        let request = self.request(Method::GET, &format!("/api/models/{id}"));
        self.execute(request).await
    }
}
