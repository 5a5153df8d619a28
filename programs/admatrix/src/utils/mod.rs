pub mod money;
pub mod placement;
pub mod text;

pub use money::*;
pub use placement::*;
