//! Generation backend API
//!
//! This module owns the wire contract with the external reply-generation
//! service: request/response types and the HTTP client that talks to
//! `POST {base}/api/generate-replies`.

mod client;
mod types;

#[cfg(test)]
pub(crate) mod test_server;

pub use client::GenerateClient;
pub use types::{EmailRequest, RepliesResponse, Reply};
