//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` implements the `rides::WheelsApi` contract over `gloo-net`. Wire
//! types and endpoint paths come from the `rides` crate.

pub mod api;
