//! HTTP request and response values as plain data.
//!
//! # Design
//! `EmployeeClient` builds `HttpRequest` values and parses `HttpResponse`
//! values without ever touching the network; the `Transport` trait carries
//! them across the wire. Keeping the two halves separated by plain data
//! makes every request and response inspectable in tests.
//!
//! All fields use owned types (`String`, `Vec`) so values can be queued,
//! cloned, and compared freely.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

/// An HTTP request described as plain data.
///
/// Built by `EmployeeClient::build_*` methods and executed by a
/// `Transport` implementation. `path` is the full URL.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by a `Transport` implementation, then passed to
/// `EmployeeClient::parse_*` methods for interpretation.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}
