//! # Recipe Service Access
//!
//! ```text
//! RequestKind ──► client ──► transport (reqwest) ──► HTTP
//!                   │
//!                   └──► mapper (wire JSON ⇄ model) ──► Payload | ErrorDetail
//! ```

pub mod client;
pub mod mapper;
pub mod transport;
pub mod types;
