//! multipart/form-data encoding
//!
//! Shared primitive for binary uploads across the SDK. Bodies are fully
//! materialized in memory before sending; parts are emitted in caller
//! order. Field names are written as supplied; callers must not pass
//! names containing quotes or CRLF.

use uuid::Uuid;

/// An encoded multipart body and its content type.
///
/// The content type embeds the boundary separating the parts; both live
/// only for the duration of one request construction.
#[derive(Debug, Clone)]
pub struct MultipartFormData {
    /// `multipart/form-data; boundary=...` header value
    pub content_type: String,
    /// The encoded request body
    pub body: Vec<u8>,
}

/// Generate a boundary token unique across concurrent encoders.
fn generate_boundary() -> String {
    format!("----WebKitFormBoundary{}", Uuid::new_v4().simple())
}

/// Encode text fields as a `multipart/form-data` body.
///
/// Emits one part per entry, in slice order.
pub fn encode_form(fields: &[(&str, &str)]) -> MultipartFormData {
    let boundary = generate_boundary();
    let mut body = Vec::new();

    for (key, value) in fields {
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", key).as_bytes(),
        );
        body.extend_from_slice(value.as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());

    MultipartFormData {
        content_type: format!("multipart/form-data; boundary={}", boundary),
        body,
    }
}

/// Encode binary file fields as a `multipart/form-data` body.
///
/// Each part carries `filename="file"` and an octet-stream content type,
/// matching what the service's upload endpoints expect.
pub fn encode_file_form(fields: &[(&str, &[u8])]) -> MultipartFormData {
    let boundary = generate_boundary();
    let mut body = Vec::new();

    for (key, value) in fields {
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"file\"\r\n",
                key
            )
            .as_bytes(),
        );
        body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
        body.extend_from_slice(value);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());

    MultipartFormData {
        content_type: format!("multipart/form-data; boundary={}", boundary),
        body,
    }
}
