//! Application layer - Port interfaces
//!
//! Contains the trait definitions bounding the domain against external
//! systems. Handlers in the HTTP layer drive these ports directly; there is
//! no deeper orchestration in this service.

pub mod ports;
