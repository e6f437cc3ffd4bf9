mod input;
mod point;
mod point_pair;
mod result;

pub use input::*;
pub use point::*;
pub use point_pair::*;
pub use result::*;
