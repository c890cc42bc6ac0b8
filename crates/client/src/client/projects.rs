//! Project endpoints

use reqwest::Method;

use super::ApiClient;
use crate::response::ApiResponse;
use crate::types::{
    DatasetResponse, ProjectCreate, ProjectResponse, ProjectUpdate, TrainingJobResponse,
};

impl ApiClient {
    /// List the caller's projects
    pub async fn list_projects(&self) -> ApiResponse<Vec<ProjectResponse>> {
        let request = self.request(Method::GET, "/api/projects");
        self.execute(request).await
    }

    /// Create a project
    pub async fn create_project(&self, project: &ProjectCreate) -> ApiResponse<ProjectResponse> {
        let request = self.request(Method::POST, "/api/projects").json(project);
        self.execute(request).await
    }

    /// Fetch a single project
    pub async fn get_project(&self, id: i64) -> ApiResponse<ProjectResponse> {
        let request = self.request(Method::GET, &format!("/api/projects/{id}"));
        self.execute(request).await
    }

    /// Update a project
    pub async fn update_project(
        &self,
        id: i64,
        update: &ProjectUpdate,
    ) -> ApiResponse<ProjectResponse> {
        let request = self
            .request(Method::PUT, &format!("/api/projects/{id}"))
            .json(update);
        self.execute(request).await
    }

    /// Delete a project
    pub async fn delete_project(&self, id: i64) -> ApiResponse<serde_json::Value> {
        let request = self.request(Method::DELETE, &format!("/api/projects/{id}"));
        self.execute(request).await
    }

    /// List datasets attached to a project
    pub async fn project_datasets(&self, id: i64) -> ApiResponse<Vec<DatasetResponse>> {
        let request = self.request(Method::GET, &format!("/api/projects/{id}/datasets"));
        self.execute(request).await
    }

    /// List training jobs launched from a project
    pub async fn project_training(&self, id: i64) -> ApiResponse<Vec<TrainingJobResponse>> {
        let request = self.request(Method::GET, &format!("/api/projects/{id}/training"));
        self.execute(request).await
    }
}
