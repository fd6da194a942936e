pub mod constants;
pub mod geometry;
pub mod palette;
pub mod scene;
pub mod sparks;
pub mod trail;

pub use geometry::*;
pub use palette::*;
pub use scene::*;
pub use sparks::*;
pub use trail::*;
