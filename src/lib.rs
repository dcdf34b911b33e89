//! TranscriptStore - HTTP service over a file-backed transcription store
//!
//! This crate serves create, read, list, and delete operations for
//! transcription records, each persisted as a JSON file in a local directory.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: The transcription record entity, its list projection, and
//!   configuration value objects
//! - **Application**: Port interfaces (traits) for the record store and the
//!   config store
//! - **Infrastructure**: Adapter implementations (JSON directory store, XDG
//!   config file)
//! - **HTTP**: Axum router, request handlers, and error-to-status mapping
//! - **CLI**: Command-line interface, argument parsing, and the server runner

pub mod application;
pub mod cli;
pub mod domain;
pub mod http;
pub mod infrastructure;
