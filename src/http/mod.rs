//! HTTP-shaped request handling.
//!
//! Just enough HTTP/1.1 to answer a request line with a JSON payload.
//!
//! # Architecture
//!
//! - **`connection`**: drains a client stream and drives it through the state machine below
//! - **`parser`**: classifies drained input as HTTP or not and extracts the path
//! - **`request`**: the recognized methods and the classified request line
//! - **`response`**: status codes, the response builder and the fixed error payloads
//! - **`writer`**: serializes a response and writes it out in full
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Drain input until the client half-closes
//!        └──────┬──────┘
//!               │ Input complete
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← Classify, resolve, build response
//!        └──────┬───────────┘
//!               │ Response ready
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← Send response to client
//!        └──────┬───────────┘
//!               │ Response sent
//!               ├─ Non-HTTP → shutdown, Closed
//!               └─ HTTP → Closed (stream dropped)
//! ```
//!
//! There is no keep-alive: every connection carries exactly one request.

pub mod connection;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
