use crate::http::request::{Method, Request};

/// Outcome of inspecting a drained request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Http(Request),
    NotHttp,
}

impl Classification {
    pub fn is_http(&self) -> bool {
        matches!(self, Classification::Http(_))
    }
}

/// Decides whether `request` is HTTP and extracts the requested path.
///
/// Only the first line is looked at. It is HTTP when it starts with one of
/// the nine method tokens; the path is the second whitespace-delimited token
/// with one leading `/` stripped. A missing target gives an empty path,
/// which simply fails resolution later.
pub fn classify(request: &str) -> Classification {
    let first_line = request_line(request);

    let Some(method) = Method::from_prefix(first_line) else {
        return Classification::NotHttp;
    };

    let target = first_line.split_whitespace().nth(1).unwrap_or("");
    let path = target.strip_prefix('/').unwrap_or(target);

    Classification::Http(Request {
        method,
        path: path.to_string(),
    })
}

fn request_line(request: &str) -> &str {
    let line = request.split('\n').next().unwrap_or("");
    line.strip_suffix('\r').unwrap_or(line)
}
