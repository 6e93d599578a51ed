//! Table schema derivation and materialization
//!
//! Turns a discovered key set into an ordered column layout and
//! (re)creates the matching table. Every table and column name passes
//! through [`quote_identifier`] before it reaches SQL text.

pub mod ident;
pub mod table;

pub use ident::quote_identifier;
pub use table::{materialize, TableSchema};
