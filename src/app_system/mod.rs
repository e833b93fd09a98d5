//! System orchestration, startup, and shutdown logic.

pub mod session_service;
pub mod session_system;
pub mod telemetry;

pub use session_service::*;
pub use session_system::*;
pub use telemetry::*;
