pub mod change_handlers;
pub mod event_handlers;
pub mod ops_handlers;
pub mod preference_handlers;
pub mod session_handlers;
pub mod ticket_handlers;
pub mod write_response;

pub use change_handlers::*;
pub use event_handlers::*;
pub use ops_handlers::*;
pub use preference_handlers::*;
pub use session_handlers::*;
pub use ticket_handlers::*;
pub use write_response::*;
