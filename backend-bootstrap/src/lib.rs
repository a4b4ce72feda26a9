pub mod cli;
pub mod context;
pub mod lifecycle;
pub mod logging;

pub use cli::{Cli, Command};
pub use context::AppContext;
pub use lifecycle::serve;
pub use logging::init_logging;
