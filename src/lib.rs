//! blockfall (workspace facade crate).
//!
//! Re-exports the member crates under short names so integration tests,
//! benches and the binary can use `blockfall::{core,input,store,term,types}`.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_store as store;
pub use blockfall_term as term;
pub use blockfall_types as types;
