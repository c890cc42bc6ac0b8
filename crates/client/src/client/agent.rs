//! Assistant endpoints

use reqwest::Method;
use serde_json::Value;

use super::ApiClient;
use crate::response::ApiResponse;
use crate::types::{
    AgentChatRequest, AgentChatResponse, AgentRecommendationRequest, AgentRecommendationResponse,
};

impl ApiClient {
    /// Send a chat message to the assistant
    pub async fn chat(&self, chat: &AgentChatRequest) -> ApiResponse<AgentChatResponse> {
        let request = self.request(Method::POST, "/api/agent/chat").json(chat);
        self.execute(request).await
    }

    /// Ask for a model and training-config recommendation
    pub async fn recommendations(
        &self,
        query: &AgentRecommendationRequest,
    ) -> ApiResponse<AgentRecommendationResponse> {
        let request = self
            .request(Method::POST, "/api/agent/recommendations")
            .json(query);
        self.execute(request).await
    }

    /// Assistant health and capability report
    pub async fn agent_status(&self) -> ApiResponse<Value> {
        let request = self.request(Method::GET, "/api/agent/status");
        self.execute(request).await
    }
}
