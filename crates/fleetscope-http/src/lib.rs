//! # fleetscope-http
//!
//! HTTP transport for the fleetscope analytics read API: the three
//! analytics endpoints, liveness/readiness probes, and the server that
//! binds them to a TCP socket.

mod error;
pub mod response;
pub mod router;
pub mod server;

pub use error::HttpServerError;
pub use router::{build_router, AppState};
pub use server::HttpServer;
