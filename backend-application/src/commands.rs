pub mod event_commands;
pub mod preference_commands;
pub mod session_commands;
pub mod ticket_commands;
