// Pure domain services

pub mod merge;
pub mod qr_payload;
pub mod seed;

pub use merge::*;
pub use qr_payload::*;
pub use seed::*;
