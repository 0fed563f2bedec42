use serde::{Deserialize, Serialize};

use crate::common::id_string;

/// A stored document attached to exactly one case. Immutable once uploaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(deserialize_with = "id_string")]
    pub doc_id: String,
    pub file_name: String,
}

/// Path of the binary download for a document.
pub fn document_download_path(doc_id: &str) -> String {
    format!("/api/document/{doc_id}/download")
}
