pub mod event_queries;
pub mod preference_queries;
pub mod session_queries;
pub mod ticket_queries;
