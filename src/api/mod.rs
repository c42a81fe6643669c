//! # Chaos API
//!
//! The slice of the Qernal resource API the viewer needs: the wire models of a
//! function and its deployments, and a client that lists a project's functions.

pub mod client;
pub mod models;

pub use client::ChaosClient;
pub use models::{Deployment, Function, FunctionList, FunctionSize, FunctionType, Location};
