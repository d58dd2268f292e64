//! Listener abstraction for palette notifications
//!
//! The picker reports every palette change to at most one listener. Instead
//! of storing `Option<Box<dyn Fn(T)>>` directly, it keeps a `Listener<T>`
//! which encapsulates registration, replacement and the "nobody listening"
//! case.
//!
//! # Examples
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use harmony_wheel::Listener;
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! let listener = Listener::new(move |colors: Vec<u32>| sink.borrow_mut().push(colors));
//!
//! listener.emit(vec![0xFF0000]);
//! assert_eq!(*seen.borrow(), vec![vec![0xFF0000]]);
//! ```

use std::fmt;

/// A single optional side-effect handler receiving values of type `T`.
///
/// Registering a new handler replaces the previous one; emitting with no
/// handler registered does nothing.
pub struct Listener<T> {
    f: Option<Box<dyn Fn(T)>>,
}

impl<T> Listener<T> {
    /// Create a listener from a function.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) + 'static,
    {
        Self {
            f: Some(Box::new(f)),
        }
    }

    /// Create an empty listener (no handler).
    pub fn none() -> Self {
        Self { f: None }
    }

    /// Replace the handler. Last registration wins.
    pub fn set<F>(&mut self, f: F)
    where
        F: Fn(T) + 'static,
    {
        self.f = Some(Box::new(f));
    }

    /// Drop the handler.
    pub fn clear(&mut self) {
        self.f = None;
    }

    /// Call the handler with a value, if one is registered.
    ///
    /// Returns whether a handler ran.
    pub fn emit(&self, value: T) -> bool {
        match self.f {
            Some(ref f) => {
                f(value);
                true
            }
            None => false,
        }
    }

    /// Check if a handler is registered.
    pub fn is_some(&self) -> bool {
        self.f.is_some()
    }

    /// Check if no handler is registered.
    pub fn is_none(&self) -> bool {
        self.f.is_none()
    }
}

impl<T> Default for Listener<T> {
    fn default() -> Self {
        Self::none()
    }
}

impl<T> fmt::Debug for Listener<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("set", &self.is_some())
            .finish()
    }
}
