//! Mapping between pointer coordinates and color channels.
//!
//! [`WheelGeometry`] turns a point into hue (angle) and saturation (distance
//! from the center); [`ValueGeometry`] turns a vertical coordinate into the
//! value channel. Both mappings have inverses used to place pointers.

use serde::{Deserialize, Serialize};

use crate::color::{clamp_unit, normalize_hue};

/// A 2D point in view coordinates (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance_to(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Attempts at pulling a rounded rim point back inside before giving up.
const RIM_NUDGE_LIMIT: usize = 24;

/// Circular hue/saturation region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelGeometry {
    center: Point,
    radius: f32,
}

impl WheelGeometry {
    /// Returns `None` unless the radius is finite and positive.
    pub fn new(center: Point, radius: f32) -> Option<Self> {
        (radius.is_finite() && radius > 0.0).then_some(Self { center, radius })
    }

    /// Create without validation.
    /// Panics in debug builds if the radius is invalid.
    pub fn new_unchecked(center: Point, radius: f32) -> Self {
        debug_assert!(
            radius.is_finite() && radius > 0.0,
            "wheel radius must be finite and positive, got {}",
            radius
        );
        Self { center, radius }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Whether `point` lies on the wheel. The rim itself is inside.
    pub fn contains(&self, point: Point) -> bool {
        point.distance_to(self.center) <= self.radius
    }

    /// Hue and saturation under `point`, or `None` when it lies outside the
    /// wheel.
    ///
    /// The dead center resolves to hue 0 regardless of the sign of zero in
    /// the offsets.
    pub fn point_to_hue_saturation(&self, point: Point) -> Option<(f32, f32)> {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        let d = dx.hypot(dy);
        if d > self.radius {
            return None;
        }

        let hue = if dx == 0.0 && dy == 0.0 {
            0.0
        } else {
            normalize_hue(dy.atan2(dx).to_degrees() + 360.0)
        };
        Some((hue, clamp_unit(d / self.radius)))
    }

    /// Position of a hue/saturation pair on the wheel.
    ///
    /// The returned point always satisfies [`contains`](Self::contains), so
    /// feeding it back through [`point_to_hue_saturation`] never lands
    /// outside, even at the rim where `cos * R` can round past the radius.
    ///
    /// [`point_to_hue_saturation`]: Self::point_to_hue_saturation
    pub fn hue_saturation_to_point(&self, hue: f32, saturation: f32) -> Point {
        let angle = f64::from(hue).to_radians();
        let (sin, cos) = angle.sin_cos();
        let mut distance = f64::from(clamp_unit(saturation)) * f64::from(self.radius);
        let mut shrink = f64::from(f32::EPSILON);

        for _ in 0..RIM_NUDGE_LIMIT {
            let point = Point::new(
                (f64::from(self.center.x) + cos * distance) as f32,
                (f64::from(self.center.y) + sin * distance) as f32,
            );
            if self.contains(point) {
                return point;
            }
            // Pull toward the center until rounding lands on or inside the rim
            distance *= 1.0 - shrink;
            shrink *= 2.0;
        }
        self.center
    }
}

/// Vertical value slider occupying a fixed horizontal band.
///
/// The top edge maps to value 1, the bottom edge to value 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueGeometry {
    top: f32,
    bottom: f32,
    left: f32,
    right: f32,
}

impl ValueGeometry {
    /// Returns `None` unless `bottom > top` and `right >= left`, all finite.
    pub fn new(top: f32, bottom: f32, left: f32, right: f32) -> Option<Self> {
        let finite = [top, bottom, left, right].iter().all(|v| v.is_finite());
        (finite && bottom > top && right >= left).then_some(Self {
            top,
            bottom,
            left,
            right,
        })
    }

    /// Create without validation.
    /// Panics in debug builds if the extent is invalid.
    pub fn new_unchecked(top: f32, bottom: f32, left: f32, right: f32) -> Self {
        debug_assert!(
            bottom > top && right >= left,
            "slider extent must be non-empty, got top={top} bottom={bottom}"
        );
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    pub fn top(&self) -> f32 {
        self.top
    }

    pub fn bottom(&self) -> f32 {
        self.bottom
    }

    pub fn left(&self) -> f32 {
        self.left
    }

    pub fn right(&self) -> f32 {
        self.right
    }

    /// Whether `x` falls within the slider's horizontal band.
    ///
    /// The band is open to the right: a drag that leaves the view past the
    /// slider keeps adjusting the value.
    pub fn contains_x(&self, x: f32) -> bool {
        x >= self.left
    }

    /// Value under a vertical coordinate; clamps above and below the slider.
    pub fn y_to_value(&self, y: f32) -> f32 {
        if y <= self.top {
            1.0
        } else if y >= self.bottom {
            0.0
        } else {
            1.0 - (y - self.top) / (self.bottom - self.top)
        }
    }

    /// Vertical coordinate of a value.
    pub fn value_to_y(&self, value: f32) -> f32 {
        self.bottom - clamp_unit(value) * (self.bottom - self.top)
    }
}

/// Which part of the picker a pointer landed on, with the channel values it
/// selects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Region {
    Wheel { hue: f32, saturation: f32 },
    Value { value: f32 },
    Outside,
}

/// Classify `point`; the wheel takes precedence over the slider.
pub fn classify(wheel: &WheelGeometry, slider: &ValueGeometry, point: Point) -> Region {
    if let Some((hue, saturation)) = wheel.point_to_hue_saturation(point) {
        Region::Wheel { hue, saturation }
    } else if slider.contains_x(point.x) {
        Region::Value {
            value: slider.y_to_value(point.y),
        }
    } else {
        Region::Outside
    }
}
