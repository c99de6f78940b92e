//! Page navigation: index state machine, gesture mapping, input selection

mod controller;
mod gesture;
mod input_source;
mod pager;

pub use controller::{PageSurface, PaginationController};
pub use gesture::SwipeTracker;
pub use input_source::{DeviceCapabilities, InputSource};
pub use pager::{Direction, Pager};
