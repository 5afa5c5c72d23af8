mod action;
mod elements;
mod link;
mod metadata;

pub use action::Action;
pub use elements::Elements;
pub use link::ServiceLink;
pub use metadata::PageMetadata;
