//! Validated entity access over ordered key-value stores.
//!
//! Given a key prefix and a schema, [`EntityAccess`] produces a coherent set
//! of CRUD operations plus prefix-scoped, paginated listing, all executed
//! against a caller-supplied store transaction:
//!
//! - Every value crossing the boundary — inputs and stored data alike — is
//!   checked against the schema; failures surface as an [`ErrorTree`].
//! - `update` is a shallow merge by id: fields present in the patch
//!   overwrite the stored fields, everything else is preserved, and a
//!   missing target is a silent no-op.
//! - `list` walks the prefix in ascending id order, with an optional
//!   inclusive starting id and a limit that short-circuits the scan.
//!
//! The crate manages no transactions, resolves no conflicts, and performs no
//! replication. The [`Store`] trait is the seam where a transactional
//! backend plugs in; [`MemStore`] is the ordered in-memory implementation
//! used by tests and examples.
//!
//! # Example
//!
//! ```
//! use entity_engine::{EntityAccess, FieldType, ListOptions, MemStore, RecordSchema};
//! use serde_json::json;
//!
//! let schema = RecordSchema::new()
//!     .field("title", FieldType::String)
//!     .optional("done", FieldType::Bool);
//! let todos = EntityAccess::new("todo", schema);
//!
//! let mut tx = MemStore::new();
//! todos.create(&mut tx, &json!({"id": "t1", "title": "write docs"})).unwrap();
//! todos.update(&mut tx, &json!({"id": "t1", "done": true})).unwrap();
//!
//! let all = todos.list(&mut tx, &ListOptions::default()).unwrap();
//! assert_eq!(all.len(), 1);
//! assert_eq!(all[0]["done"], true);
//! ```

mod access;
mod error;
mod key;
mod memory;
mod schema;
mod store;
mod tree;

pub use access::{EntityAccess, ListOptions};
pub use error::{EntityError, EntityResult, StoreError, StoreResult};
pub use key::Keyspace;
pub use memory::MemStore;
pub use schema::{Entity, FieldType, RecordSchema, Schema};
pub use store::{ScanItem, Store};
pub use tree::ErrorTree;
