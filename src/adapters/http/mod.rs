//! HTTP surface for the document service.

pub mod documents_http;
pub mod xml;

pub use documents_http::{router, DocumentHttpServer, StatusResponse};
