//! Phonebook Server - HTTP API over the in-memory address book
//!
//! This crate wires [`phonebook::ContactStore`] to axum. The store sits behind
//! a `tokio::sync::RwLock` in [`ServerState`], so concurrent requests never
//! observe a half-applied add, delete, or update.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use server::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     server::start_server(config).await?;
//!     Ok(())
//! }
//! ```
//!
//! # API Endpoints
//!
//! All contact routes accept any HTTP method.
//!
//! - `/list` - JSON array of every contact, in insertion order
//! - `/add` - JSON body in, generated id out as plain text
//! - `/delete/{id}` - remove a contact
//! - `/update/{id}` - replace name, number, and email of a contact
//! - `/find/{id}` - one contact as JSON
//! - `/find-by-name/{text}` - first contact whose name contains `text`
//! - `GET /health` - liveness probe
//!
//! Errors come back as a status code with a plain-text message: 400 for an
//! unreadable body or id, 404 when nothing matches, 500 when encoding fails.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::{Cli, ServerConfig};
pub use error::{ServerError, ServerResult};
pub use server::{build_router, start_server};
pub use state::ServerState;
