//! HTTP API for Receipt Tally.
//!
//! Two endpoints over one shared in-memory store:
//!
//! - `POST /receipts/process` — validate a receipt, store it, answer
//!   `{"id": "<uuid>"}`. Bad JSON or a failed constraint answers 400 with
//!   a plain-text message naming the problem; nothing is stored.
//! - `GET /receipts/{id}/points` — 400 if `id` is not a v4 UUID, 404 if
//!   unknown, otherwise `{"points": <integer>}` from the scoring engine.

pub mod config;
pub mod error;
pub mod handler;
pub mod router;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::{ApiError, ServerError, ServerResult};
pub use server::TallyServer;
pub use state::AppState;
