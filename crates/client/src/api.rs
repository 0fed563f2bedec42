//! The case API contract.
//!
//! [`CaseApi`] mirrors the REST endpoints one method per operation. The
//! production implementation is [`crate::http::HttpApi`]; tests script their
//! own.

use shared_types::{
    AppError, Case, CaseStatus, CreateCaseRequest, CreatedCase, Document, GrantAccessRequest,
    LoginRequest, Permission, RegisterRequest, User, UserSummary,
};

/// A file picked for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Client side of the case-management REST API.
///
/// Futures are not required to be `Send`: the client runs on a single
/// cooperative thread (the browser event loop or a current-thread runtime).
#[allow(async_fn_in_trait)]
pub trait CaseApi: Clone + 'static {
    /// `GET /api/session`. `Ok(None)` means the server reported no session.
    async fn session(&self) -> Result<Option<User>, AppError>;

    /// `POST /api/login`.
    async fn login(&self, req: &LoginRequest) -> Result<User, AppError>;

    /// `POST /api/register`.
    async fn register(&self, req: &RegisterRequest) -> Result<User, AppError>;

    /// `POST /api/logout`.
    async fn logout(&self) -> Result<(), AppError>;

    /// `GET /api/cases`: the cases visible to the current user.
    async fn list_cases(&self) -> Result<Vec<Case>, AppError>;

    /// `POST /api/cases`.
    async fn create_case(&self, req: &CreateCaseRequest) -> Result<CreatedCase, AppError>;

    /// `GET /api/case/{case_id}`.
    async fn get_case(&self, case_id: &str) -> Result<Case, AppError>;

    /// `GET /api/case/{case_id}/documents`.
    async fn list_documents(&self, case_id: &str) -> Result<Vec<Document>, AppError>;

    /// `GET /api/case/{case_id}/permissions`.
    async fn list_permissions(&self, case_id: &str) -> Result<Vec<Permission>, AppError>;

    /// `POST /api/case/{case_id}/upload` as multipart field `file`.
    async fn upload_document(&self, case_id: &str, file: &UploadFile) -> Result<(), AppError>;

    /// `PUT /api/case/{case_id}/status`.
    async fn update_status(&self, case_id: &str, status: CaseStatus) -> Result<(), AppError>;

    /// `GET /api/users/search?email=`.
    async fn search_users(&self, email_fragment: &str) -> Result<Vec<UserSummary>, AppError>;

    /// `POST /api/case/{case_id}/grant-access`.
    async fn grant_access(&self, case_id: &str, req: &GrantAccessRequest) -> Result<(), AppError>;

    /// Absolute URL of a document's binary download.
    fn download_url(&self, doc_id: &str) -> String;
}
