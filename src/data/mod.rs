//! Annotated corpus ingestion and file helpers.

pub mod docs;
pub mod io;
