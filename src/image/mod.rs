pub mod buffer;
pub mod io;
pub mod traits;

pub use self::buffer::{PixelBuffer, PixelView, Shape};
pub use self::traits::{ImageView, Rows};
