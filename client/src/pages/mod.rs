//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration: it holds its draft in a
//! signal, runs the matching `rides::flow` operation on submit, and
//! delegates rendering details to `components`.

pub mod dashboard;
pub mod login;
pub mod register;
