// Domain value objects
pub mod change_topic;
pub mod event_category;
pub mod event_image;
pub mod identifiers;

pub use change_topic::*;
pub use event_category::*;
pub use event_image::*;
pub use identifiers::*;
