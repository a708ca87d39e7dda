pub mod coordinate;
pub mod error;
pub mod slug;

pub use coordinate::{Coordinate, check_week, days, weeks};
pub use error::{Result, ResultExt, ScaffoldError};
pub use slug::ProjectSlug;
