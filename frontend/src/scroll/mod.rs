pub mod phase;
pub mod timeline;

pub use phase::{parallax_offset, section_progress};
pub use timeline::{HeroFrame, HeroTimeline, SERVICE_COUNT};
