//! In-memory address book core.
//!
//! This crate owns the contact model and the ordered collection that holds
//! every contact for the lifetime of the process. The HTTP layer in
//! `crates/server` wraps it behind a lock and maps its errors onto status codes.
//!
//! ## What lives here
//!
//! - [`Contact`] and [`ContactDraft`]: the stored record and the
//!   client-supplied fields used to create or replace one
//! - [`lookup`]: pure scans over a contact slice (by id, by name substring)
//! - [`ContactStore`]: insertion-ordered storage with add/remove/replace
//!
//! ## Invariants worth knowing
//!
//! - Identifiers are generated here on insert and never taken from input
//! - Insertion order is iteration order; removal keeps the relative order
//! - A failed lookup leaves the store untouched
//!
//! Nothing is persisted. Dropping the store drops the address book.

mod contact;
mod error;
pub mod lookup;
mod store;

pub use crate::contact::{Contact, ContactDraft};
pub use crate::error::{StoreError, StoreResult};
pub use crate::lookup::{find_by_id, find_by_name};
pub use crate::store::ContactStore;
pub use uuid::Uuid;
