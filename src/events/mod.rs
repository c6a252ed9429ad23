pub mod carousel;
pub mod nav;

pub use carousel::wire_carousel;
pub use nav::wire_nav;
