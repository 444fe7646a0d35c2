//! Device-store admin fixtures, entity route table, and preview host.
//!
//! SYSTEM CONTEXT
//! ==============
//! `domain` holds the entity field contracts, `samples` the frozen fixture
//! records checked against them, and `routes` the lazily-loaded entity
//! route table. `http` is a read-only preview server over both.

pub mod config;
pub mod domain;
pub mod error;
pub mod http;
pub mod routes;
pub mod samples;
pub mod state;
