// === PUBLIC CONTRACT ===
// The contract module carries the boundary types a front end consumes
pub mod contract;

// Re-export the public contract components
pub use contract::model::{Log, LogKind, NewUser, User};

// === SERVICES ===
pub mod domain;
pub use domain::error::DomainError;
pub use domain::logs::LogService;
pub use domain::users::UserService;

// === CONFIGURATION ===
pub mod config;
pub use config::UserManagementConfig;

// === STORE ===
// The store handle is constructed once at process start and injected into
// the services; everything below it is an implementation detail.
pub use infra::storage::Store;

// === INTERNAL MODULES ===
// Exposed for comprehensive testing; external consumers should stick to the
// re-exports above.
#[doc(hidden)]
pub mod infra;
