pub mod change_hub;

pub use change_hub::ChangeHub;
