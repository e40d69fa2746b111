//! Backend API access: the HTTP client, its request/response bodies and the
//! error type shared by every view.

mod client;
mod errors;
pub mod types;

pub use client::{endpoint_url, ApiClient, DEFAULT_TIMEOUT};
pub use errors::AppError;
pub use types::{LoginRequest, LoginResponse};
