//! Integration tests against a local mock of the timedtext endpoint.

pub mod fixtures;
