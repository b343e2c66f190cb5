//! SajaruBox MCP server.
//!
//! Speaks JSON-RPC 2.0 over stdin/stdout, one message per line, and
//! routes requests to the knowledge base tools and resources. Logs go to
//! stderr only.

pub mod dispatcher;
pub mod error;
pub mod protocol;
pub mod transport;

pub use dispatcher::Dispatcher;
pub use error::ServerError;
pub use protocol::{Request, Response, RpcError, ServerInfo};
pub use transport::{serve, serve_stdio, ServeStats};
