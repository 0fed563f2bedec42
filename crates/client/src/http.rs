//! `reqwest`-backed implementation of [`CaseApi`].

use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use shared_types::{
    document_download_path, ApiConfig, AppError, AuthResponse, Case, CaseStatus,
    CreateCaseRequest, CreatedCase, Document, GrantAccessRequest, LoginRequest, Permission,
    RegisterRequest, UpdateStatusRequest, User, UserSummary,
};

use crate::api::{CaseApi, UploadFile};

/// Talks to the case API over HTTP.
///
/// Session cookies are carried by the browser on web builds and by reqwest's
/// cookie store on native builds, so clones share one session.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(config: &ApiConfig) -> Result<Self, AppError> {
        let builder = Client::builder();

        #[cfg(not(target_arch = "wasm32"))]
        let builder = {
            let builder = builder.cookie_store(true);
            if config.request_timeout_secs > 0 {
                builder.timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            } else {
                builder
            }
        };

        let client = builder
            .build()
            .map_err(|e| AppError::internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn case_url(&self, case_id: &str, suffix: &str) -> String {
        self.url(&format!("/api/case/{}{}", urlencoding::encode(case_id), suffix))
    }

    /// Send the request and turn non-2xx responses into [`AppError`]s.
    async fn execute(&self, request: RequestBuilder) -> Result<Response, AppError> {
        let response = with_credentials(request)
            .send()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let url = response.url().path().to_string();
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(status = status.as_u16(), path = %url, "case API returned an error status");
        Err(AppError::from_status(status.as_u16(), &body))
    }

    async fn fetch_json<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AppError> {
        let response = self.execute(request).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| AppError::decode(e.to_string()))
    }

    async fn fetch_ack(&self, request: RequestBuilder) -> Result<(), AppError> {
        self.execute(request).await.map(|_| ())
    }

    async fn fetch_user(&self, request: RequestBuilder) -> Result<User, AppError> {
        let body: AuthResponse = self.fetch_json(request).await?;
        body.user
            .ok_or_else(|| AppError::decode("response did not include a user"))
    }
}

#[cfg(target_arch = "wasm32")]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request.fetch_credentials_include()
}

#[cfg(not(target_arch = "wasm32"))]
fn with_credentials(request: RequestBuilder) -> RequestBuilder {
    request
}

impl CaseApi for HttpApi {
    async fn session(&self) -> Result<Option<User>, AppError> {
        let body: AuthResponse = self
            .fetch_json(self.client.get(self.url("/api/session")))
            .await?;
        Ok(body.user)
    }

    #[tracing::instrument(skip(self, req), fields(email = %req.email))]
    async fn login(&self, req: &LoginRequest) -> Result<User, AppError> {
        self.fetch_user(self.client.post(self.url("/api/login")).json(req))
            .await
    }

    #[tracing::instrument(skip(self, req), fields(email = %req.email, role = req.role.as_str()))]
    async fn register(&self, req: &RegisterRequest) -> Result<User, AppError> {
        self.fetch_user(self.client.post(self.url("/api/register")).json(req))
            .await
    }

    async fn logout(&self) -> Result<(), AppError> {
        self.fetch_ack(self.client.post(self.url("/api/logout")))
            .await
    }

    async fn list_cases(&self) -> Result<Vec<Case>, AppError> {
        self.fetch_json(self.client.get(self.url("/api/cases")))
            .await
    }

    async fn create_case(&self, req: &CreateCaseRequest) -> Result<CreatedCase, AppError> {
        let response = self
            .execute(self.client.post(self.url("/api/cases")).json(req))
            .await?;
        // A plain-text or empty ack still counts as success.
        let body = response.text().await.unwrap_or_default();
        Ok(serde_json::from_str(&body).unwrap_or_default())
    }

    async fn get_case(&self, case_id: &str) -> Result<Case, AppError> {
        self.fetch_json(self.client.get(self.case_url(case_id, "")))
            .await
    }

    async fn list_documents(&self, case_id: &str) -> Result<Vec<Document>, AppError> {
        self.fetch_json(self.client.get(self.case_url(case_id, "/documents")))
            .await
    }

    async fn list_permissions(&self, case_id: &str) -> Result<Vec<Permission>, AppError> {
        self.fetch_json(self.client.get(self.case_url(case_id, "/permissions")))
            .await
    }

    #[tracing::instrument(skip(self, file), fields(file_name = %file.file_name, size = file.bytes.len()))]
    async fn upload_document(&self, case_id: &str, file: &UploadFile) -> Result<(), AppError> {
        let mut part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
        if let Some(content_type) = &file.content_type {
            part = part
                .mime_str(content_type)
                .map_err(|e| AppError::bad_request(format!("invalid content type: {e}")))?;
        }
        let form = Form::new().part("file", part);
        self.fetch_ack(
            self.client
                .post(self.case_url(case_id, "/upload"))
                .multipart(form),
        )
        .await
    }

    async fn update_status(&self, case_id: &str, status: CaseStatus) -> Result<(), AppError> {
        self.fetch_ack(
            self.client
                .put(self.case_url(case_id, "/status"))
                .json(&UpdateStatusRequest { status }),
        )
        .await
    }

    async fn search_users(&self, email_fragment: &str) -> Result<Vec<UserSummary>, AppError> {
        let url = self.url(&format!(
            "/api/users/search?email={}",
            urlencoding::encode(email_fragment)
        ));
        self.fetch_json(self.client.get(url)).await
    }

    async fn grant_access(&self, case_id: &str, req: &GrantAccessRequest) -> Result<(), AppError> {
        self.fetch_ack(
            self.client
                .post(self.case_url(case_id, "/grant-access"))
                .json(req),
        )
        .await
    }

    fn download_url(&self, doc_id: &str) -> String {
        self.url(&document_download_path(&urlencoding::encode(doc_id)))
    }
}
