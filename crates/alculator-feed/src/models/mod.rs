//! Data types for the beer pricing feed.
//!
//! Two schema generations exist: the flat one ([`FlatRecord`]) and the
//! nested one ([`RawProduct`]). Flat records are adapted into the nested
//! shape during ingestion, so everything downstream sees `RawProduct`.

mod common;
mod flat;
mod product;

pub use common::*;
pub use flat::*;
pub use product::*;
