pub mod anchor;
pub mod geometry;
pub mod link;

pub use anchor::{Anchor, AnchorError};
pub use geometry::{HeaderBox, SectionBox};
pub use link::NavLink;
