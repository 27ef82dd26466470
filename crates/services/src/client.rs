use std::path::Path;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use prep_core::model::{
    BasicInfo, DashboardData, LessonContent, PlanId, SessionId, Topic, TopicId, UploadKind,
};

use crate::config::{ApiConfig, REQUEST_TIMEOUT};
use crate::error::{ApiError, detail_message};

/// Create-plan response: the new plan id plus echoed request fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CreatedPlan {
    #[serde(alias = "id")]
    pub plan_id: PlanId,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub exam_date: Option<String>,
}

/// Upload response: the extracted text plus whatever metadata came back.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PdfUpload {
    pub text: String,
    #[serde(default)]
    pub filename: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
}

/// Descriptor of a previously processed upload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExtractedFile {
    pub filename: String,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

/// Confirmation returned by the generate-plan endpoint.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlanSummary {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub total_sessions: Option<u32>,
}

/// Session state after marking it complete.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionState {
    #[serde(default)]
    pub session_id: Option<SessionId>,
    #[serde(default)]
    pub completed: bool,
}

#[derive(Deserialize)]
struct TopicsResponse {
    topics: Vec<Topic>,
}

#[derive(Deserialize)]
struct ExtractedFilesResponse {
    files: Vec<ExtractedFile>,
}

#[derive(serde::Serialize)]
struct ExtractTopicsRequest<'a> {
    text: &'a str,
    subject: &'a str,
}

#[derive(serde::Serialize)]
struct GeneratePlanRequest<'a> {
    topics: &'a [Topic],
}

/// The backend contract, one method per HTTP operation.
///
/// Views and workflows depend on this trait rather than on `ApiClient`
/// directly, so tests can substitute a recording stub.
#[async_trait]
pub trait StudyApi: Send + Sync {
    async fn create_study_plan(&self, info: &BasicInfo) -> Result<CreatedPlan, ApiError>;
    async fn upload_pdf(&self, path: &Path, kind: UploadKind) -> Result<PdfUpload, ApiError>;
    async fn extract_topics(&self, text: &str, subject: &str) -> Result<Vec<Topic>, ApiError>;
    async fn extract_topics_from_json(
        &self,
        json_paths: &[String],
    ) -> Result<Vec<Topic>, ApiError>;
    async fn list_extracted_files(&self) -> Result<Vec<ExtractedFile>, ApiError>;
    async fn generate_plan(
        &self,
        plan_id: PlanId,
        topics: &[Topic],
    ) -> Result<PlanSummary, ApiError>;
    async fn get_dashboard(&self, plan_id: PlanId) -> Result<DashboardData, ApiError>;
    async fn get_lesson(&self, topic_id: TopicId) -> Result<LessonContent, ApiError>;
    async fn mark_session_complete(&self, session_id: SessionId)
    -> Result<SessionState, ApiError>;
}

/// Single point of contact with the backend over a shared `reqwest::Client`.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// Builds a client with the fixed 30-second request timeout.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` when the TLS backend cannot be
    /// initialized.
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Sends a request and decodes the JSON body, funnelling every failure
    /// into one `ApiError` and logging it with request context.
    async fn execute<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await.inspect_err(|err| {
            tracing::error!(error = %err, "no response from backend");
        })?;

        let status = response.status();
        let url = response.url().clone();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(%status, %url, body = %body, "backend rejected request");
            let message = detail_message(&body)
                .unwrap_or_else(|| format!("request failed with status {status}"));
            return Err(ApiError::Server { status, message });
        }

        response.json().await.map_err(|err| {
            tracing::error!(%url, error = %err, "could not decode backend response");
            ApiError::Transport(err)
        })
    }
}

#[async_trait]
impl StudyApi for ApiClient {
    async fn create_study_plan(&self, info: &BasicInfo) -> Result<CreatedPlan, ApiError> {
        tracing::debug!(subject = info.subject(), "creating study plan");
        self.execute(
            self.client
                .post(self.url("/api/study-plan/create"))
                .json(info),
        )
        .await
    }

    async fn upload_pdf(&self, path: &Path, kind: UploadKind) -> Result<PdfUpload, ApiError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| ApiError::File {
                path: path.to_path_buf(),
                source,
            })?;
        let file_name = path
            .file_name()
            .map_or_else(|| "upload.pdf".to_string(), |name| name.to_string_lossy().into_owned());
        tracing::debug!(file = %file_name, kind = %kind, "uploading PDF");

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str("application/pdf")?;
        let form = Form::new()
            .part("file", part)
            .text("file_type", kind.as_str());
        self.execute(self.client.post(self.url("/api/upload/pdf")).multipart(form))
            .await
    }

    async fn extract_topics(&self, text: &str, subject: &str) -> Result<Vec<Topic>, ApiError> {
        let response: TopicsResponse = self
            .execute(
                self.client
                    .post(self.url("/api/upload/extract-topics"))
                    .json(&ExtractTopicsRequest { text, subject }),
            )
            .await?;
        Ok(response.topics)
    }

    async fn extract_topics_from_json(
        &self,
        json_paths: &[String],
    ) -> Result<Vec<Topic>, ApiError> {
        // The body is a bare array of paths, not an object.
        let response: TopicsResponse = self
            .execute(
                self.client
                    .post(self.url("/api/upload/extract-topics-from-json"))
                    .json(&json_paths),
            )
            .await?;
        Ok(response.topics)
    }

    async fn list_extracted_files(&self) -> Result<Vec<ExtractedFile>, ApiError> {
        let response: ExtractedFilesResponse = self
            .execute(self.client.get(self.url("/api/upload/list-extracted-files")))
            .await?;
        Ok(response.files)
    }

    async fn generate_plan(
        &self,
        plan_id: PlanId,
        topics: &[Topic],
    ) -> Result<PlanSummary, ApiError> {
        tracing::debug!(%plan_id, topics = topics.len(), "generating plan");
        self.execute(
            self.client
                .post(self.url(&format!("/api/study-plan/{plan_id}/generate-plan")))
                .json(&GeneratePlanRequest { topics }),
        )
        .await
    }

    async fn get_dashboard(&self, plan_id: PlanId) -> Result<DashboardData, ApiError> {
        self.execute(
            self.client
                .get(self.url(&format!("/api/study-plan/{plan_id}/dashboard"))),
        )
        .await
    }

    async fn get_lesson(&self, topic_id: TopicId) -> Result<LessonContent, ApiError> {
        self.execute(self.client.get(self.url(&format!("/api/lessons/{topic_id}"))))
            .await
    }

    async fn mark_session_complete(
        &self,
        session_id: SessionId,
    ) -> Result<SessionState, ApiError> {
        self.execute(
            self.client
                .post(self.url(&format!("/api/lessons/{session_id}/complete"))),
        )
        .await
    }
}
