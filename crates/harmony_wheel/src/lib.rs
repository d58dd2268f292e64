//! harmony_wheel - Color wheel picker core with harmony palettes
//!
//! The user picks hue and saturation on a circular wheel and brightness on a
//! vertical slider; the picker derives companion colors from a harmony rule
//! and reports the palette to a listener. This crate holds only the state,
//! geometry and harmony math plus a declarative [`RenderDescriptor`]; the
//! host platform owns layout passes, drawing and persistence.
//!
//! ```
//! use harmony_wheel::{ColorPicker, HarmonyType, PickerLayout};
//!
//! let layout = PickerLayout::from_width(500.0).unwrap();
//! let mut picker = ColorPicker::new(layout);
//! picker.set_harmony_type(HarmonyType::Complementary);
//! picker.set_color(0xFF0000);
//! assert_eq!(picker.harmonized_colors(), vec![0xFF0000, 0x00FFFF]);
//! ```

mod callback;
pub mod color;
pub mod constants;
mod event;
pub mod geometry;
mod harmony;
mod layout;
mod picker;
pub mod render;
mod state;

pub use callback::Listener;
pub use color::{Color, ColorState};
pub use event::PointerEvent;
pub use geometry::{Point, Region, ValueGeometry, WheelGeometry};
pub use harmony::{harmonize, HarmonizedColor, HarmonyType, ParseHarmonyTypeError};
pub use layout::{Bounds, PickerLayout};
pub use picker::ColorPicker;
pub use render::RenderDescriptor;
pub use state::{PersistedState, StateRestoreError};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::color::ColorState;
    pub use crate::event::PointerEvent;
    pub use crate::geometry::Point;
    pub use crate::harmony::HarmonyType;
    pub use crate::layout::PickerLayout;
    pub use crate::picker::ColorPicker;
    pub use crate::state::PersistedState;
}
