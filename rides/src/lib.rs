//! Shared ride-sharing domain for the Wheels browser and terminal clients.
//!
//! This crate owns the wire DTOs, the REST contract, the session-store
//! contract, and the screen flows (session guard, list load, create and
//! refresh, login, registration, logout). It performs no I/O itself: the
//! `client` crate supplies `gloo-net` + `localStorage` adapters and the
//! `cli` crate supplies `reqwest` + file adapters.

pub mod api;
pub mod draft;
pub mod flow;
pub mod notice;
pub mod route;
pub mod session;
pub mod types;

pub use api::{ApiError, LoginReply, LoginResult, WheelsApi};
pub use draft::{DraftError, FieldBinding, FieldSpec, InputKind, RideDraft};
pub use flow::{Dashboard, DashboardState, Mount, Phase, Settled, SubmitStart, Submission, Transition};
pub use notice::Notice;
pub use route::Route;
pub use session::{AuthToken, DriverId, MemorySessionStore, SessionError, SessionStore, TokenClaims};
pub use types::{Credentials, RegistrationProfile, RideOffer, RideStatus};
