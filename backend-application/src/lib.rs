// Backend Application Layer

pub mod commands;
pub mod error;
pub mod metrics;
pub mod ops;
pub mod outcome;
pub mod preferences;
pub mod queries;
pub mod session;
pub mod signing;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_support;

pub use error::AppError;
pub use metrics::Metrics;
pub use ops::ChangeHub;
pub use outcome::{LocalWrite, RemoteSync, RemoteSyncStatus, WriteOutcome};
pub use preferences::PreferenceStore;
pub use session::SessionResolver;
pub use signing::resolve_qr_secret;
pub use state::AppState;
pub use store::DataStore;
