//! Relation-snippet extraction toolkit for clinical narratives.
//!
//! Turns gold-annotated clinical notes into `label|context` training lines,
//! where the context is a bounded token window around a pair of event
//! mentions inside one sentence.

pub mod cli;
pub mod config;
pub mod data;
pub mod logging;
pub mod nlp;
