//! Picker layout derived from the host's view width.
//!
//! The view is `width x width * WHEEL_WIDTH_RATIO`. The wheel fills the
//! view height on the left; the value slider spans the full height on the
//! right, starting after a padding gap.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_VIEW_WIDTH, WHEEL_PADDING_RATIO, WHEEL_WIDTH_RATIO};
use crate::geometry::{classify, Point, Region, ValueGeometry, WheelGeometry};

/// Axis-aligned rectangle in view coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// Resolved geometry for one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PickerLayout {
    view: Bounds,
    wheel: WheelGeometry,
    slider: ValueGeometry,
}

impl PickerLayout {
    /// Lay the picker out for a view `width` pixels wide.
    ///
    /// Returns `None` for a width that is not finite and positive.
    pub fn from_width(width: f32) -> Option<Self> {
        let radius = width * WHEEL_WIDTH_RATIO / 2.0;
        (width.is_finite() && radius > 0.0).then(|| Self::build(width))
    }

    fn build(width: f32) -> Self {
        let height = width * WHEEL_WIDTH_RATIO;
        let radius = height / 2.0;
        let slider_left = (WHEEL_WIDTH_RATIO + WHEEL_PADDING_RATIO) * width;

        Self {
            view: Bounds::new(0.0, 0.0, width, height),
            wheel: WheelGeometry::new_unchecked(Point::new(radius, radius), radius),
            slider: ValueGeometry::new_unchecked(0.0, height, slider_left, width),
        }
    }

    /// Combine geometry supplied by an external layout pass.
    pub fn from_parts(view: Bounds, wheel: WheelGeometry, slider: ValueGeometry) -> Self {
        Self {
            view,
            wheel,
            slider,
        }
    }

    pub fn view(&self) -> Bounds {
        self.view
    }

    pub fn wheel(&self) -> &WheelGeometry {
        &self.wheel
    }

    pub fn slider(&self) -> &ValueGeometry {
        &self.slider
    }

    /// Bounds of the slider rectangle.
    pub fn slider_bounds(&self) -> Bounds {
        Bounds::new(
            self.slider.left(),
            self.slider.top(),
            self.slider.right() - self.slider.left(),
            self.slider.bottom() - self.slider.top(),
        )
    }

    /// Classify a pointer position, wheel first.
    pub fn classify(&self, point: Point) -> Region {
        classify(&self.wheel, &self.slider, point)
    }
}

impl Default for PickerLayout {
    fn default() -> Self {
        Self::build(DEFAULT_VIEW_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_width_matches_ratios() {
        let layout = PickerLayout::from_width(500.0).unwrap();
        assert_eq!(layout.view(), Bounds::new(0.0, 0.0, 500.0, 400.0));
        assert_eq!(layout.wheel().radius(), 200.0);
        assert_eq!(layout.wheel().center(), Point::new(200.0, 200.0));
        assert!((layout.slider().left() - 450.0).abs() < 1e-3);
        assert_eq!(layout.slider().right(), 500.0);
        let slider = layout.slider_bounds();
        assert!((slider.width - 50.0).abs() < 1e-3);
        assert_eq!(slider.height, 400.0);
    }

    #[test]
    fn test_from_width_rejects_degenerate_widths() {
        assert!(PickerLayout::from_width(0.0).is_none());
        assert!(PickerLayout::from_width(-10.0).is_none());
        assert!(PickerLayout::from_width(f32::INFINITY).is_none());
    }

    #[test]
    fn test_default_matches_default_width() {
        let expected = PickerLayout::from_width(DEFAULT_VIEW_WIDTH).unwrap();
        assert_eq!(PickerLayout::default(), expected);
    }

    #[test]
    fn test_gap_between_wheel_and_slider_is_outside() {
        let layout = PickerLayout::from_width(500.0).unwrap();
        assert_eq!(layout.classify(Point::new(420.0, 200.0)), Region::Outside);
        assert!(matches!(
            layout.classify(Point::new(460.0, 100.0)),
            Region::Value { .. }
        ));
    }

    #[test]
    fn test_from_parts_uses_supplied_geometry() {
        // Wheel on the right, slider strip on the left edge
        let wheel = WheelGeometry::new(Point::new(150.0, 50.0), 50.0).unwrap();
        let slider = ValueGeometry::new(0.0, 100.0, 0.0, 20.0).unwrap();
        let layout = PickerLayout::from_parts(Bounds::new(0.0, 0.0, 200.0, 100.0), wheel, slider);

        assert_eq!(layout.wheel(), &wheel);
        assert_eq!(layout.slider_bounds(), Bounds::new(0.0, 0.0, 20.0, 100.0));
        assert!(matches!(
            layout.classify(Point::new(190.0, 50.0)),
            Region::Wheel { .. }
        ));
        assert_eq!(
            layout.classify(Point::new(10.0, 25.0)),
            Region::Value { value: 0.75 }
        );
    }
}
