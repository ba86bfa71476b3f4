// crates/client/src/submit.rs
//! Document submission: validation rules and the JSON body the service
//! expects alongside the uploaded files.

use docdeck_core::ensure_metadata_count;
use serde_json::{json, Value};

use crate::error::ClientError;

/// Upload types the processing service accepts.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["pdf", "docx", "doc", "txt", "pptx", "ppt"];

pub const DEFAULT_FROM_PAGE: u32 = 0;
pub const DEFAULT_TO_PAGE: u32 = 100_000;
pub const DEFAULT_LANG: &str = "english";

/// One file picked up from the submission form.
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: None,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// MIME type for the multipart part, with the usual fallback.
    pub fn content_type_or_default(&self) -> &str {
        self.content_type
            .as_deref()
            .unwrap_or("application/octet-stream")
    }
}

/// Whether a filename has one of the supported document extensions.
pub fn supported_document(name: &str) -> bool {
    name.rsplit_once('.')
        .map(|(_, ext)| {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&ext.as_str())
        })
        .unwrap_or(false)
}

/// Split a textarea of URLs into one entry per non-blank line.
pub fn parse_url_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Everything the submission form collects for one `add_documents` call.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentSubmission {
    pub files: Vec<FileUpload>,
    pub urls: Vec<String>,
    /// One metadata object per document (files first, then URLs), or empty.
    pub metadatas: Vec<Value>,
    pub from_page: u32,
    pub to_page: u32,
    pub lang: String,
    pub with_embeddings: bool,
}

impl Default for DocumentSubmission {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            urls: Vec::new(),
            metadatas: Vec::new(),
            from_page: DEFAULT_FROM_PAGE,
            to_page: DEFAULT_TO_PAGE,
            lang: DEFAULT_LANG.to_string(),
            with_embeddings: true,
        }
    }
}

impl DocumentSubmission {
    /// Total documents in the submission (uploads plus URLs).
    pub fn document_count(&self) -> usize {
        self.files.len() + self.urls.len()
    }

    /// Pre-flight checks, applied before anything is sent:
    /// at least one document source, supported upload extensions, and the
    /// metadata count rule.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.document_count() == 0 {
            return Err(ClientError::submission(
                "provide at least one file or document URL",
            ));
        }

        if let Some(file) = self.files.iter().find(|f| !supported_document(&f.name)) {
            return Err(ClientError::submission(format!(
                "unsupported document type: {}",
                file.name
            )));
        }

        if self.to_page == 0 {
            return Err(ClientError::submission("to_page must be at least 1"));
        }

        ensure_metadata_count(&self.metadatas, self.document_count())?;
        Ok(())
    }

    /// The `body` part of the multipart request. Optional arrays are only
    /// present when non-empty, matching what the service expects.
    pub fn body_json(&self, agent_id: &str) -> Value {
        let mut body = json!({
            "agent_id": agent_id,
            "from_page": self.from_page,
            "to_page": self.to_page,
            "lang": self.lang,
            "with_embeddings": self.with_embeddings,
        });

        let obj = body.as_object_mut().expect("body is an object");
        if !self.urls.is_empty() {
            obj.insert("urls".to_string(), json!(self.urls));
        }
        if !self.metadatas.is_empty() {
            obj.insert("metadatas".to_string(), json!(self.metadatas));
        }
        body
    }
}
