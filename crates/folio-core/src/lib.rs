pub mod carousel;
pub mod clock;
pub mod config;
pub mod constants;
pub mod content;
pub mod easing;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod theme;
pub mod typewriter;

pub use carousel::*;
pub use config::CarouselConfig;
pub use error::*;
pub use geometry::*;
pub use gesture::*;
