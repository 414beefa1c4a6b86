//! Integration tests for tokio_probes
//!
//! Each test binds a probe server in-process on an ephemeral port and
//! exercises the endpoints over real HTTP.
//!
//! Run with: cargo test --test integration

mod helpers;

mod endpoints;
