use serde::{Deserialize, Serialize};

/// Result of uploading a file to the backend's storage
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FileUploadResponse {
    /// Name the backend stored the file under
    #[serde(rename = "fileName")]
    pub file_name: String,
    /// URL the stored file is served from
    pub url: String,
    /// Detected content type
    #[serde(rename = "contentType")]
    pub content_type: Option<String>,
    /// Stored size in bytes
    pub size: u64,
}
