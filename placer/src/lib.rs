pub mod canvas;
pub mod geom;
pub mod limits;
pub mod placer;
pub mod shapes;

pub use canvas::{Canvas, OccupancyMask};
pub use geom::{BoxFormat, convert_box};
pub use limits::ShapeLimits;
pub use placer::{MAX_TRIALS, PlacementError, Placer};
pub use shapes::{Annotation, PaletteColor, Shape, ShapeKind};
