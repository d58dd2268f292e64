//! The color picker facade a host platform drives.
//!
//! [`ColorPicker`] owns the color state, the active harmony, the derived
//! palette and render descriptor, and the palette listener. Every mutation
//! goes through one refresh step that recomputes the palette, rebuilds the
//! descriptor and notifies the listener, so readers never see a color
//! without its matching palette.
//!
//! The picker is single-threaded. A host dispatching events from several
//! threads must serialize whole calls (update and notification together).

use crate::callback::Listener;
use crate::color::ColorState;
use crate::event::PointerEvent;
use crate::geometry::{Point, Region};
use crate::harmony::{harmonize, HarmonizedColor, HarmonyType};
use crate::layout::PickerLayout;
use crate::render::RenderDescriptor;
use crate::state::{PersistedState, StateRestoreError};

/// Interactive hue/saturation wheel plus value slider with harmony palette.
#[derive(Debug)]
pub struct ColorPicker {
    color: ColorState,
    harmony: HarmonyType,
    palette: Vec<HarmonizedColor>,
    layout: PickerLayout,
    descriptor: RenderDescriptor,
    touchable: bool,
    listener: Listener<Vec<u32>>,
}

impl ColorPicker {
    /// White, no harmony, touchable, no listener.
    pub fn new(layout: PickerLayout) -> Self {
        let color = ColorState::default();
        let harmony = HarmonyType::default();
        let palette = harmonize(color, harmony);
        let descriptor = RenderDescriptor::build(&layout, &color, &palette);
        Self {
            color,
            harmony,
            palette,
            layout,
            descriptor,
            touchable: true,
            listener: Listener::none(),
        }
    }

    /// Build a picker from a persisted record, or report why it is invalid.
    pub fn from_persisted(
        record: &PersistedState,
        layout: PickerLayout,
    ) -> Result<Self, StateRestoreError> {
        let (color, harmony) = record.restore()?;
        let mut picker = Self::new(layout);
        picker.color = color;
        picker.harmony = harmony;
        picker.rebuild();
        Ok(picker)
    }

    /// Snapshot the state the host should persist.
    pub fn to_persisted(&self) -> PersistedState {
        PersistedState::capture(&self.color, self.harmony)
    }

    /// Apply a persisted record, falling back to white with no harmony when
    /// the record is malformed. Either way the palette is recomputed and the
    /// listener notified; the error is returned for the host to report.
    pub fn restore(&mut self, record: &PersistedState) -> Result<(), StateRestoreError> {
        match record.restore() {
            Ok((color, harmony)) => {
                self.color = color;
                self.harmony = harmony;
                self.refresh();
                Ok(())
            }
            Err(e) => {
                log::warn!("Rejected persisted picker state ({}), using defaults", e);
                self.reset();
                Err(e)
            }
        }
    }

    /// Return to white with no harmony, notifying the listener.
    pub fn reset(&mut self) {
        self.color = ColorState::default();
        self.harmony = HarmonyType::default();
        self.refresh();
    }

    /// Replace the layout (after a resize). Does not notify.
    pub fn set_layout(&mut self, layout: PickerLayout) {
        self.layout = layout;
        self.rebuild();
    }

    pub fn layout(&self) -> &PickerLayout {
        &self.layout
    }

    /// Set the base color from a packed `0xRRGGBB` value.
    pub fn set_color(&mut self, rgb: u32) {
        self.color.set_from_packed(rgb);
        self.refresh();
    }

    /// Base color as packed `0xRRGGBB`.
    pub fn color(&self) -> u32 {
        self.color.to_packed()
    }

    pub fn color_state(&self) -> ColorState {
        self.color
    }

    pub fn set_color_state(&mut self, color: ColorState) {
        self.color = color;
        self.refresh();
    }

    pub fn set_hue(&mut self, hue: f32) {
        self.color.set_hue(hue);
        self.refresh();
    }

    pub fn set_saturation(&mut self, saturation: f32) {
        self.color.set_saturation(saturation);
        self.refresh();
    }

    pub fn set_value(&mut self, value: f32) {
        self.color.set_value(value);
        self.refresh();
    }

    /// Change the harmony rule; re-derives the palette from the current color.
    pub fn set_harmony_type(&mut self, harmony: HarmonyType) {
        self.harmony = harmony;
        self.refresh();
    }

    pub fn harmony_type(&self) -> HarmonyType {
        self.harmony
    }

    /// The current palette in HSV form.
    pub fn harmonized(&self) -> &[HarmonizedColor] {
        &self.palette
    }

    /// The current palette as packed `0xRRGGBB` values.
    pub fn harmonized_colors(&self) -> Vec<u32> {
        self.palette.iter().map(ColorState::to_packed).collect()
    }

    pub fn set_touchable(&mut self, touchable: bool) {
        self.touchable = touchable;
    }

    pub fn is_touchable(&self) -> bool {
        self.touchable
    }

    /// Register the palette listener, replacing any previous one.
    pub fn on_palette_changed<F>(&mut self, handler: F)
    where
        F: Fn(Vec<u32>) + 'static,
    {
        self.listener.set(handler);
    }

    /// Drop the palette listener.
    pub fn clear_palette_listener(&mut self) {
        self.listener.clear();
    }

    /// Descriptor for the current frame.
    pub fn render_descriptor(&self) -> &RenderDescriptor {
        &self.descriptor
    }

    /// Run a pointer-down/move at `(x, y)` through the picker.
    ///
    /// Returns `false`, leaving state untouched, when touch is disabled or
    /// the point misses both the wheel and the slider.
    pub fn handle_pointer_event(&mut self, x: f32, y: f32) -> bool {
        if !self.touchable {
            return false;
        }

        match self.layout.classify(Point::new(x, y)) {
            Region::Wheel { hue, saturation } => {
                log::debug!(
                    "ColorPicker: wheel at ({x}, {y}) -> hue={hue:.1} sat={saturation:.3}"
                );
                self.color.set_hue(hue);
                self.color.set_saturation(saturation);
            }
            Region::Value { value } => {
                log::debug!("ColorPicker: value slider at ({x}, {y}) -> value={value:.3}");
                self.color.set_value(value);
            }
            Region::Outside => {
                log::debug!("ColorPicker: ignoring pointer at ({x}, {y})");
                return false;
            }
        }

        self.refresh();
        true
    }

    /// Handle a pointer event; only presses and moves select colors.
    pub fn on_event(&mut self, event: &PointerEvent) -> bool {
        if !event.selects() {
            return false;
        }
        let position = event.position();
        self.handle_pointer_event(position.x, position.y)
    }

    fn rebuild(&mut self) {
        self.palette = harmonize(self.color, self.harmony);
        self.descriptor = RenderDescriptor::build(&self.layout, &self.color, &self.palette);
    }

    fn refresh(&mut self) {
        self.rebuild();
        self.listener.emit(self.harmonized_colors());
    }
}

impl Default for ColorPicker {
    fn default() -> Self {
        Self::new(PickerLayout::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn picker() -> ColorPicker {
        ColorPicker::new(PickerLayout::from_width(500.0).unwrap())
    }

    fn recording(picker: &mut ColorPicker) -> Rc<RefCell<Vec<Vec<u32>>>> {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        picker.on_palette_changed(move |colors| sink.borrow_mut().push(colors));
        seen
    }

    #[test]
    fn test_defaults() {
        let p = picker();
        assert_eq!(p.color(), 0xFFFFFF);
        assert_eq!(p.harmony_type(), HarmonyType::None);
        assert_eq!(p.harmonized_colors(), vec![0xFFFFFF]);
        assert!(p.is_touchable());
    }

    #[test]
    fn test_set_color_notifies_with_palette() {
        let mut p = picker();
        p.set_harmony_type(HarmonyType::Complementary);
        let seen = recording(&mut p);

        p.set_color(0xFF0000);
        assert_eq!(p.color(), 0xFF0000);
        assert_eq!(*seen.borrow(), vec![vec![0xFF0000, 0x00FFFF]]);
    }

    #[test]
    fn test_harmony_change_rederives_from_current_color() {
        let mut p = picker();
        p.set_color(0x0000FF);
        let seen = recording(&mut p);

        p.set_harmony_type(HarmonyType::Triadic);
        assert_eq!(p.harmonized_colors(), vec![0x0000FF, 0xFF0000, 0x00FF00]);
        assert_eq!(seen.borrow().len(), 1);
        assert_eq!(p.color(), 0x0000FF);
    }

    #[test]
    fn test_wheel_touch_sets_hue_and_saturation() {
        let mut p = picker();
        let seen = recording(&mut p);

        // Rim on the +x axis of a 200px-radius wheel centered at (200, 200)
        assert!(p.handle_pointer_event(400.0, 200.0));
        let color = p.color_state();
        assert_eq!(color.hue(), 0.0);
        assert_eq!(color.saturation(), 1.0);
        assert_eq!(color.value(), 1.0);
        assert_eq!(*seen.borrow(), vec![vec![0xFF0000]]);
    }

    #[test]
    fn test_center_touch_is_hue_zero_saturation_zero() {
        let mut p = picker();
        p.set_color(0x00FF00);
        assert!(p.handle_pointer_event(200.0, 200.0));
        assert_eq!(p.color_state().hue(), 0.0);
        assert_eq!(p.color_state().saturation(), 0.0);
    }

    #[test]
    fn test_slider_touch_sets_value() {
        let mut p = picker();
        assert!(p.handle_pointer_event(470.0, 100.0));
        assert!((p.color_state().value() - 0.75).abs() < 1e-4);
    }

    #[test]
    fn test_slider_drag_past_right_edge_keeps_adjusting() {
        let mut p = picker();
        let seen = recording(&mut p);
        assert!(p.on_event(&PointerEvent::Moved {
            position: Point::new(505.0, 100.0),
        }));
        assert!((p.color_state().value() - 0.75).abs() < 1e-4);
        assert_eq!(seen.borrow().len(), 1);
    }

    #[test]
    fn test_touch_outside_is_not_consumed() {
        let mut p = picker();
        let seen = recording(&mut p);
        assert!(!p.handle_pointer_event(420.0, 200.0));
        assert_eq!(p.color(), 0xFFFFFF);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_untouchable_ignores_pointer() {
        let mut p = picker();
        let seen = recording(&mut p);
        p.set_touchable(false);
        assert!(!p.handle_pointer_event(400.0, 200.0));
        assert_eq!(p.color(), 0xFFFFFF);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn test_release_is_never_consumed() {
        let mut p = picker();
        let position = Point::new(400.0, 200.0);
        assert!(!p.on_event(&PointerEvent::Released { position }));
        assert!(p.on_event(&PointerEvent::Pressed { position }));
        assert!(p.on_event(&PointerEvent::Moved {
            position: Point::new(200.0, 200.0)
        }));
    }

    #[test]
    fn test_missing_listener_is_silent() {
        let mut p = picker();
        p.clear_palette_listener();
        p.set_color(0x123456);
        assert_eq!(p.color(), 0x123456);
    }

    #[test]
    fn test_descriptor_tracks_palette() {
        let mut p = picker();
        p.set_harmony_type(HarmonyType::SixTone);
        assert_eq!(p.render_descriptor().wheel_pointers.len(), 6);
        p.set_harmony_type(HarmonyType::None);
        assert_eq!(p.render_descriptor().wheel_pointers.len(), 1);
    }

    #[test]
    fn test_persisted_round_trip() {
        let mut p = picker();
        p.set_color(0x336699);
        p.set_harmony_type(HarmonyType::Square);

        let record = p.to_persisted();
        let restored = ColorPicker::from_persisted(&record, *p.layout()).unwrap();
        assert_eq!(restored.color(), 0x336699);
        assert_eq!(restored.harmony_type(), HarmonyType::Square);
        assert_eq!(restored.harmonized_colors(), p.harmonized_colors());
    }

    #[test]
    fn test_restore_falls_back_to_defaults_on_bad_record() {
        let mut p = picker();
        p.set_color(0xFF0000);
        p.set_harmony_type(HarmonyType::Clash);
        let seen = recording(&mut p);

        let bad = PersistedState {
            harmony_type: Some(99),
            ..p.to_persisted()
        };
        assert!(p.restore(&bad).is_err());
        assert_eq!(p.color(), 0xFFFFFF);
        assert_eq!(p.harmony_type(), HarmonyType::None);
        assert_eq!(*seen.borrow(), vec![vec![0xFFFFFF]]);
    }

    #[test]
    fn test_restore_normalizes_wrapped_hue() {
        let mut p = picker();
        let record = PersistedState {
            hue: Some(400.0),
            saturation: Some(1.0),
            value: Some(1.0),
            harmony_type: Some(HarmonyType::None.ordinal()),
        };
        assert!(p.restore(&record).is_ok());
        assert!((p.color_state().hue() - 40.0).abs() < 1e-4);
    }

    #[test]
    fn test_reset_notifies_with_white() {
        let mut p = picker();
        p.set_color(0x00FF00);
        p.set_harmony_type(HarmonyType::Analogous);
        let seen = recording(&mut p);

        p.reset();
        assert_eq!(p.color(), 0xFFFFFF);
        assert_eq!(p.harmony_type(), HarmonyType::None);
        assert_eq!(*seen.borrow(), vec![vec![0xFFFFFF]]);
    }
}
