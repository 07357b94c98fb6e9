//! Backend endpoint paths, form encoding, and CSRF helpers.
//!
//! Everything here is pure and natively tested; the wasm transport in
//! `bridge` consumes these builders verbatim.

use prover_host::{DirectoryId, FileId, NewDirectoryRequest};

/// Cookie the backend sets with the CSRF token.
pub const CSRF_COOKIE: &str = "csrftoken";
/// Header mutating requests must echo the CSRF token in.
pub const CSRF_HEADER: &str = "X-CSRFToken";

/// Create-directory endpoint (form-encoded POST).
pub const ADD_DIRECTORY_URL: &str = "add_dir/";
/// Create-file endpoint (multipart POST).
pub const ADD_FILE_URL: &str = "add_file/";

/// Listing endpoint; the `dir` parameter is omitted entirely for root scope.
pub fn listing_url(scope: Option<DirectoryId>) -> String {
    match scope {
        Some(directory) => format!("current_files_and_dirs/?dir={}", directory.0),
        None => "current_files_and_dirs/".to_string(),
    }
}

/// File document endpoint.
pub fn file_content_url(file: FileId) -> String {
    format!("file_content/{}/", file.0)
}

/// Delete-directory endpoint (empty-body POST).
pub fn delete_directory_url(directory: DirectoryId) -> String {
    format!("delete_dir/{}/", directory.0)
}

/// Delete-file endpoint (empty-body POST).
pub fn delete_file_url(file: FileId) -> String {
    format!("delete_file/{}/", file.0)
}

/// Prove endpoint (empty-body POST).
pub fn prove_url(file: FileId) -> String {
    format!("prove/{}/", file.0)
}

/// `parent_dir` field value; root scope is the empty string.
pub fn parent_field(parent: Option<DirectoryId>) -> String {
    parent
        .map(|directory| directory.0.to_string())
        .unwrap_or_default()
}

/// Form-encoded body for the create-directory request.
pub fn directory_form_body(request: &NewDirectoryRequest) -> String {
    form_urlencode(&[
        ("name", &request.name),
        ("description", &request.description),
        ("parent_dir", &parent_field(request.parent)),
    ])
}

/// Encodes field pairs as `application/x-www-form-urlencoded`.
pub fn form_urlencode(pairs: &[(&str, &str)]) -> String {
    let mut body = String::new();
    for (key, value) in pairs {
        if !body.is_empty() {
            body.push('&');
        }
        encode_component(&mut body, key);
        body.push('=');
        encode_component(&mut body, value);
    }
    body
}

fn encode_component(out: &mut String, raw: &str) {
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            b' ' => out.push('+'),
            _ => {
                out.push('%');
                out.push(char::from_digit((byte >> 4) as u32, 16).unwrap_or('0').to_ascii_uppercase());
                out.push(char::from_digit((byte & 0xf) as u32, 16).unwrap_or('0').to_ascii_uppercase());
            }
        }
    }
}

/// Extracts the CSRF token from a raw `document.cookie` string.
pub fn csrf_token_from_cookies(cookies: &str) -> Option<String> {
    cookies
        .split(';')
        .map(str::trim)
        .find_map(|cookie| cookie.strip_prefix(CSRF_COOKIE).and_then(|rest| rest.strip_prefix('=')))
        .map(str::to_string)
}
