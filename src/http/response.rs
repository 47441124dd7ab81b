use bytes::Bytes;

pub const CONTENT_TYPE_JSON: &str = "application/json";

/// Body sent when a path has no mapping or its file is missing.
pub const NO_MAPPING_BODY: &str = r#"{"error":true,"message":"No mapping found for request Path"}"#;

/// Body sent when the first line is not an HTTP request line.
pub const UNSUPPORTED_PROTOCOL_BODY: &str =
    r#"{"error":true,"message":"Only HTTP Protocol is supported"}"#;

/// HTTP status codes the server emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use jsonstub::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
        }
    }
}

/// A complete HTTP response ready to be serialized.
///
/// Headers keep their insertion order so the wire bytes are reproducible.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
    pub body: Bytes,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .header("Content-Type", "application/json")
///     .body("{}")
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Bytes,
}

impl ResponseBuilder {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Bytes::new(),
        }
    }

    /// Adds a header, replacing an existing one with the same
    /// (case-insensitive) name in place.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        set_header(&mut self.headers, key.into(), value.into());
        self
    }

    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }

    /// Builds the final Response.
    ///
    /// `Content-Length` is always derived from the body, overriding any
    /// value set by hand.
    pub fn build(mut self) -> Response {
        let length = self.body.len().to_string();
        set_header(&mut self.headers, "Content-Length".to_string(), length);

        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

fn set_header(headers: &mut Vec<(String, String)>, key: String, value: String) {
    match headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(&key)) {
        Some(existing) => existing.1 = value,
        None => headers.push((key, value)),
    }
}

impl Response {
    /// A JSON response with the given status and body.
    pub fn json(status: StatusCode, body: impl Into<Bytes>) -> Self {
        ResponseBuilder::new(status)
            .header("Content-Type", CONTENT_TYPE_JSON)
            .body(body)
            .build()
    }

    /// 200 OK carrying the raw file contents.
    pub fn ok(body: impl Into<Bytes>) -> Self {
        Self::json(StatusCode::Ok, body)
    }

    /// 400 for a path without mapping or without a file on disk.
    pub fn no_mapping() -> Self {
        Self::json(StatusCode::BadRequest, NO_MAPPING_BODY)
    }

    /// 400 for input whose first line is not an HTTP request line.
    pub fn unsupported_protocol() -> Self {
        Self::json(StatusCode::BadRequest, UNSUPPORTED_PROTOCOL_BODY)
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}
