//! Training lifecycle endpoints

use reqwest::Method;

use super::ApiClient;
use crate::response::ApiResponse;
use crate::types::{TrainingJobCreate, TrainingJobResponse};

impl ApiClient {
    /// Launch a training job
    pub async fn start_training(
        &self,
        job: &TrainingJobCreate,
    ) -> ApiResponse<TrainingJobResponse> {
        let request = self.request(Method::POST, "/api/training/start").json(job);
        self.execute(request).await
    }

    /// Fetch a training job and its progress
    pub async fn get_training_job(&self, id: i64) -> ApiResponse<TrainingJobResponse> {
        let request = self.request(Method::GET, &format!("/api/training/{id}"));
        self.execute(request).await
    }

    /// Pause a running job
    pub async fn pause_training(&self, id: i64) -> ApiResponse<TrainingJobResponse> {
        let request = self.request(Method::POST, &format!("/api/training/{id}/pause"));
        self.execute(request).await
    }

    /// Resume a paused job
    pub async fn resume_training(&self, id: i64) -> ApiResponse<TrainingJobResponse> {
        let request = self.request(Method::POST, &format!("/api/training/{id}/resume"));
        self.execute(request).await
    }

    /// Cancel a job
    pub async fn cancel_training(&self, id: i64) -> ApiResponse<TrainingJobResponse> {
        let request = self.request(Method::POST, &format!("/api/training/{id}/cancel"));
        self.execute(request).await
    }
}
