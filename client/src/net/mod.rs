//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `backend` talks to the hosted database on behalf of section loaders. The
//! router never touches the network.

pub mod backend;
