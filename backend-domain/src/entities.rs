// Domain entities

pub mod change;
pub mod config;
pub mod event;
pub mod preferences;
pub mod query;
pub mod session;
pub mod ticket;

pub use change::*;
pub use config::*;
pub use event::*;
pub use preferences::*;
pub use query::*;
pub use session::*;
pub use ticket::*;
