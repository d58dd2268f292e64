//! Centralized constants for harmony_wheel
//!
//! Layout ratios, pointer styling and gradient parameters shared by the
//! geometry and render modules.

// =============================================================================
// Layout
// =============================================================================

/// Share of the view width occupied by the wheel; also the height/width ratio
/// of the whole view
pub const WHEEL_WIDTH_RATIO: f32 = 0.8;

/// Gap between the wheel column and the value slider, as a share of view width
pub const WHEEL_PADDING_RATIO: f32 = 0.1;

/// Default view width used when no configuration is supplied
pub const DEFAULT_VIEW_WIDTH: f32 = 480.0;

// =============================================================================
// Pointers
// =============================================================================

/// Wheel pointer diameter relative to the wheel radius
pub const WHEEL_POINTER_RATIO: f32 = 0.075;

/// Stroke width of the wheel pointer circles
pub const WHEEL_POINTER_STROKE: f32 = 2.0;

/// Alpha of the (black) wheel pointer stroke
pub const WHEEL_POINTER_ALPHA: f32 = 128.0 / 255.0;

/// Stroke width of the value slider marker line
pub const VALUE_POINTER_STROKE: f32 = 6.0;

// =============================================================================
// Gradients
// =============================================================================

/// Number of distinct hue stops in the wheel sweep (one per 30 degrees)
pub const SWEEP_HUE_STEPS: usize = 12;

/// Angular distance between neighbouring sweep stops
pub const SWEEP_STEP_DEGREES: f32 = 360.0 / SWEEP_HUE_STEPS as f32;
