//! Declarative drawing instructions for the picker.
//!
//! A [`RenderDescriptor`] is rebuilt after every update and handed to a
//! platform drawing adapter; nothing here touches a canvas.
//!
//! The wheel is an approximation: a 12-stop hue sweep with a white radial
//! fade composited on top (source-over). The fade makes the wheel wash out
//! toward the center, which reads like the saturation axis without being a
//! per-pixel HSV rendering.

use serde::{Deserialize, Serialize};

use crate::color::{clamp_unit, normalize_hue, Color, ColorState};
use crate::constants::{
    SWEEP_HUE_STEPS, SWEEP_STEP_DEGREES, VALUE_POINTER_STROKE, WHEEL_POINTER_ALPHA,
    WHEEL_POINTER_RATIO, WHEEL_POINTER_STROKE,
};
use crate::geometry::{Point, WheelGeometry};
use crate::harmony::HarmonizedColor;
use crate::layout::{Bounds, PickerLayout};

/// Color at a normalized position along a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

/// Evaluate evenly or unevenly spaced stops at `t` in `[0, 1]`.
fn sample_stops(stops: &[GradientStop], t: f32) -> Color {
    let t = clamp_unit(t);
    let Some(first) = stops.first() else {
        return Color::TRANSPARENT;
    };
    if t <= first.offset {
        return first.color;
    }
    for pair in stops.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if t <= b.offset {
            let span = b.offset - a.offset;
            let local = if span <= f32::EPSILON {
                1.0
            } else {
                (t - a.offset) / span
            };
            return a.color.lerp(b.color, local);
        }
    }
    stops[stops.len() - 1].color
}

/// Angular gradient around a center; angle 0 points along +x and increases
/// toward +y (clockwise on screen).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepGradient {
    pub center: Point,
    pub stops: Vec<GradientStop>,
}

impl SweepGradient {
    /// Fully saturated hues every 30 degrees; the last stop repeats the first
    /// so the sweep closes without a seam.
    pub fn hue_sweep(center: Point) -> Self {
        let stops = (0..=SWEEP_HUE_STEPS)
            .map(|i| {
                let hue = (i % SWEEP_HUE_STEPS) as f32 * SWEEP_STEP_DEGREES;
                GradientStop {
                    offset: i as f32 / SWEEP_HUE_STEPS as f32,
                    color: ColorState::new(hue, 1.0, 1.0).to_color(),
                }
            })
            .collect();
        Self { center, stops }
    }

    pub fn sample(&self, point: Point) -> Color {
        let dx = point.x - self.center.x;
        let dy = point.y - self.center.y;
        let angle = if dx == 0.0 && dy == 0.0 {
            0.0
        } else {
            normalize_hue(dy.atan2(dx).to_degrees())
        };
        sample_stops(&self.stops, angle / 360.0)
    }
}

/// Gradient varying with distance from a center, clamped past the radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadialGradient {
    pub center: Point,
    pub radius: f32,
    pub inner: Color,
    pub outer: Color,
}

impl RadialGradient {
    /// Opaque white at the center fading to transparent white at the rim.
    pub fn white_fade(center: Point, radius: f32) -> Self {
        Self {
            center,
            radius,
            inner: Color::WHITE,
            outer: Color::WHITE.with_alpha(0.0),
        }
    }

    pub fn sample(&self, point: Point) -> Color {
        let t = point.distance_to(self.center) / self.radius;
        self.inner.lerp(self.outer, t)
    }
}

/// Straight-line gradient between two points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    pub start: Point,
    pub end: Point,
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    pub fn two_stop(start: Point, end: Point, from: Color, to: Color) -> Self {
        Self {
            start,
            end,
            stops: vec![
                GradientStop {
                    offset: 0.0,
                    color: from,
                },
                GradientStop {
                    offset: 1.0,
                    color: to,
                },
            ],
        }
    }

    /// Color at `point`, projected onto the gradient axis.
    pub fn sample(&self, point: Point) -> Color {
        let ax = self.end.x - self.start.x;
        let ay = self.end.y - self.start.y;
        let len_sq = ax * ax + ay * ay;
        if len_sq <= f32::EPSILON {
            return sample_stops(&self.stops, 0.0);
        }
        let t = ((point.x - self.start.x) * ax + (point.y - self.start.y) * ay) / len_sq;
        sample_stops(&self.stops, t)
    }
}

/// How the overlay combines with the layer beneath it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlendMode {
    #[default]
    SourceOver,
}

/// The wheel disc: sweep underneath, radial fade on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WheelAppearance {
    pub center: Point,
    pub radius: f32,
    pub sweep: SweepGradient,
    pub overlay: RadialGradient,
    pub blend: BlendMode,
}

impl WheelAppearance {
    pub fn new(wheel: &WheelGeometry) -> Self {
        let center = wheel.center();
        let radius = wheel.radius();
        Self {
            center,
            radius,
            sweep: SweepGradient::hue_sweep(center),
            overlay: RadialGradient::white_fade(center, radius),
            blend: BlendMode::SourceOver,
        }
    }

    /// Composited color at `point`; transparent outside the disc.
    ///
    /// For adapters that rasterize the wheel themselves instead of using
    /// native gradient shaders.
    pub fn sample(&self, point: Point) -> Color {
        if point.distance_to(self.center) > self.radius {
            return Color::TRANSPARENT;
        }
        match self.blend {
            BlendMode::SourceOver => self.overlay.sample(point).over(self.sweep.sample(point)),
        }
    }
}

/// The value slider rectangle and its fill.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderAppearance {
    pub bounds: Bounds,
    pub gradient: LinearGradient,
}

impl SliderAppearance {
    /// Black at the bottom (value 0) up to the current hue and saturation at
    /// full value (value 1) at the top.
    pub fn new(bounds: Bounds, color: &ColorState) -> Self {
        let bottom = Point::new(bounds.x, bounds.bottom());
        let top = Point::new(bounds.x, bounds.y);
        Self {
            bounds,
            gradient: LinearGradient::two_stop(
                bottom,
                top,
                Color::BLACK,
                color.at_full_value().to_color(),
            ),
        }
    }
}

/// Stroked circle marking one palette entry on the wheel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelPointer {
    pub center: Point,
    pub diameter: f32,
    pub stroke_width: f32,
    pub color: Color,
}

/// Horizontal line marking the current value on the slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuePointer {
    pub start: Point,
    pub end: Point,
    pub stroke_width: f32,
    pub color: Color,
}

/// Everything a drawing adapter needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderDescriptor {
    pub wheel: WheelAppearance,
    pub slider: SliderAppearance,
    pub wheel_pointers: Vec<WheelPointer>,
    pub value_pointer: ValuePointer,
}

impl RenderDescriptor {
    pub fn build(layout: &PickerLayout, color: &ColorState, palette: &[HarmonizedColor]) -> Self {
        let wheel = layout.wheel();
        let diameter = WHEEL_POINTER_RATIO * wheel.radius();
        let wheel_pointers = palette
            .iter()
            .map(|entry| WheelPointer {
                center: wheel.hue_saturation_to_point(entry.hue(), entry.saturation()),
                diameter,
                stroke_width: WHEEL_POINTER_STROKE,
                color: Color::BLACK.with_alpha(WHEEL_POINTER_ALPHA),
            })
            .collect();

        let slider_bounds = layout.slider_bounds();
        let y = layout.slider().value_to_y(color.value());
        let value_pointer = ValuePointer {
            start: Point::new(slider_bounds.x, y),
            end: Point::new(slider_bounds.right(), y),
            stroke_width: VALUE_POINTER_STROKE,
            color: Color::gray(1.0 - color.value()),
        };

        Self {
            wheel: WheelAppearance::new(wheel),
            slider: SliderAppearance::new(slider_bounds, color),
            wheel_pointers,
            value_pointer,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::harmony::{harmonize, HarmonyType};

    fn close(a: Color, b: Color) -> bool {
        (a.r - b.r).abs() < 0.01
            && (a.g - b.g).abs() < 0.01
            && (a.b - b.b).abs() < 0.01
            && (a.a - b.a).abs() < 0.01
    }

    fn layout() -> PickerLayout {
        PickerLayout::from_width(500.0).unwrap()
    }

    #[test]
    fn test_hue_sweep_has_closed_loop_of_13_stops() {
        let sweep = SweepGradient::hue_sweep(Point::default());
        assert_eq!(sweep.stops.len(), 13);
        assert_eq!(sweep.stops[0].color, sweep.stops[12].color);
        assert_eq!(sweep.stops[12].offset, 1.0);
        assert!(close(sweep.stops[4].color, Color::rgb(0.0, 1.0, 0.0)));
    }

    #[test]
    fn test_wheel_sample_white_center_and_saturated_rim() {
        let descriptor = RenderDescriptor::build(&layout(), &ColorState::default(), &[]);
        let wheel = &descriptor.wheel;

        assert!(close(wheel.sample(Point::new(200.0, 200.0)), Color::WHITE));
        assert!(close(
            wheel.sample(Point::new(400.0, 200.0)),
            Color::rgb(1.0, 0.0, 0.0)
        ));
        // Straight down on screen is 90 degrees: chartreuse-green side of the sweep
        assert!(close(
            wheel.sample(Point::new(200.0, 400.0)),
            Color::rgb(0.5, 1.0, 0.0)
        ));
        assert_eq!(wheel.sample(Point::new(401.0, 200.0)), Color::TRANSPARENT);
    }

    #[test]
    fn test_wheel_midway_is_washed_out_not_true_hsv() {
        let descriptor = RenderDescriptor::build(&layout(), &ColorState::default(), &[]);
        let half = descriptor.wheel.sample(Point::new(300.0, 200.0));
        // Half-way to the rim the overlay leaves the sweep half covered
        assert!(close(half, Color::rgb(1.0, 0.5, 0.5)));
    }

    #[test]
    fn test_slider_runs_black_to_full_value_color() {
        let color = ColorState::new(240.0, 1.0, 0.3);
        let descriptor = RenderDescriptor::build(&layout(), &color, &[color]);
        let slider = &descriptor.slider;
        let bottom = Point::new(slider.bounds.x, slider.bounds.bottom());
        let top = Point::new(slider.bounds.x, slider.bounds.y);
        assert!(close(slider.gradient.sample(bottom), Color::BLACK));
        assert!(close(slider.gradient.sample(top), Color::rgb(0.0, 0.0, 1.0)));
    }

    #[test]
    fn test_one_wheel_pointer_per_palette_entry() {
        let base = ColorState::new(0.0, 1.0, 1.0);
        let palette = harmonize(base, HarmonyType::Complementary);
        let descriptor = RenderDescriptor::build(&layout(), &base, &palette);

        assert_eq!(descriptor.wheel_pointers.len(), 2);
        let first = descriptor.wheel_pointers[0];
        assert!((first.center.x - 400.0).abs() < 1e-3);
        assert!((first.center.y - 200.0).abs() < 1e-3);
        assert!((first.diameter - 15.0).abs() < 1e-3);
        let second = descriptor.wheel_pointers[1];
        assert!(second.center.x.abs() < 1e-2);
    }

    #[test]
    fn test_value_pointer_uses_inverted_gray() {
        let color = ColorState::new(0.0, 0.0, 0.25);
        let descriptor = RenderDescriptor::build(&layout(), &color, &[color]);
        let pointer = descriptor.value_pointer;
        assert!((pointer.start.y - 300.0).abs() < 1e-3);
        assert_eq!(pointer.start.y, pointer.end.y);
        assert!(close(pointer.color, Color::gray(0.75)));
        assert_eq!(pointer.stroke_width, VALUE_POINTER_STROKE);
    }
}
