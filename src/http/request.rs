/// HTTP request methods recognized on the request line.
///
/// Nothing beyond recognition is done with them; every method is answered
/// the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    OPTIONS,
    PATCH,
    CONNECT,
    TRACE,
}

impl Method {
    /// Every recognized method, in the order prefixes are tested.
    pub const ALL: [Method; 9] = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::HEAD,
        Method::OPTIONS,
        Method::PATCH,
        Method::CONNECT,
        Method::TRACE,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
            Method::CONNECT => "CONNECT",
            Method::TRACE => "TRACE",
        }
    }

    /// Returns the method whose token starts `line`.
    ///
    /// Case-sensitive prefix match: no delimiter or version is required
    /// after the token.
    ///
    /// # Example
    ///
    /// ```
    /// # use jsonstub::http::request::Method;
    /// assert_eq!(Method::from_prefix("GET /person HTTP/1.1"), Some(Method::GET));
    /// assert_eq!(Method::from_prefix("get /person"), None);
    /// ```
    pub fn from_prefix(line: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|method| line.starts_with(method.as_str()))
    }
}

/// The parts of a request line the server acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    /// Request target with a single leading `/` removed (e.g. `person`)
    pub path: String,
}
