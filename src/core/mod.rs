pub mod primitives;
pub mod record;
pub mod scale;
pub mod time_scale;
pub mod types;
pub mod value_scale;
pub mod window;
pub mod windowing;

pub use record::{Dataset, Record};
pub use scale::LinearScale;
pub use time_scale::TimeScale;
pub use types::{PixelRange, Viewport};
pub use value_scale::{ValueScale, max_value, nice_upper_bound};
pub use window::Window;
pub use windowing::{BrushRegion, brush_indices, filter_by_window, window_index_range};
