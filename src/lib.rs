#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! Core engine behind a growable polyline renderable.
//!
//! The host renderer hands this crate raw point batches with optional
//! per-point width and color tables; the engine normalizes the points,
//! resamples the tables to the point count and merges extend batches into
//! existing shape state. Rendering stays on the JS side: material events
//! are queued here and drained by the host after every build call.

pub mod material;
pub mod shape;

use std::collections::BTreeMap;
use std::fmt;

use material::{MaterialEvent, MaterialQueue};
use shape::{ShapeBuilder, ShapeError, ShapeOptions, ShapeState};
use wasm_bindgen::JsError;
use wasm_bindgen::prelude::*;

cfg_if::cfg_if! {
    if #[cfg(all(feature = "console_error_panic_hook", target_arch = "wasm32"))] {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            console_error_panic_hook::set_once();
            init_logger();
        }
    } else {
        #[wasm_bindgen(start)]
        pub fn initialize() {
            // no-op fallback when panic hook is disabled
            init_logger();
        }
    }
}

#[cfg(feature = "debug_logs")]
fn init_logger() {
    use log::LevelFilter;
    use wasm_bindgen_console_logger::DEFAULT_LOGGER;
    log::set_logger(&DEFAULT_LOGGER).expect("error initializing logger");
    log::set_max_level(LevelFilter::Debug);
}

#[cfg(not(feature = "debug_logs"))]
fn init_logger() {
    // no-op fallback when debug logs are disabled
}

#[macro_export]
macro_rules! debug_log {
    ($($t:tt)*) => {{
        #[cfg(feature = "debug_logs")]
        {
            #[cfg(target_arch = "wasm32")]
            {
                ::web_sys::console::log_1(&::wasm_bindgen::JsValue::from_str(&format!($($t)*)));
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                println!("{}", format!($($t)*));
            }
        }
    }};
}

/// Public entry point for consumers. Owns every shape state built through
/// it, keyed by the id handed back to the caller, plus the queue of
/// material events the JS renderer drains.
#[wasm_bindgen]
pub struct Engine {
    shapes: BTreeMap<u32, ShapeState>,
    materials: MaterialQueue,
    next_shape_id: u32,
}

#[wasm_bindgen]
impl Engine {
    #[wasm_bindgen(constructor)]
    #[must_use]
    pub fn new() -> Engine {
        Engine {
            shapes: BTreeMap::new(),
            materials: MaterialQueue::new(),
            next_shape_id: 0,
        }
    }

    /// Build or extend a shape from one options object.
    ///
    /// Options carrying an `instance` id extend that shape; anything else
    /// creates a new one. Returns the id of the touched shape.
    #[wasm_bindgen]
    pub fn build_shape(&mut self, options: JsValue) -> Result<u32, JsValue> {
        let options: ShapeOptions = serde_wasm_bindgen::from_value(options)
            .map_err(|err| ShapeError::InvalidOptions(err.to_string()))
            .map_err(to_js_error)?;
        self.apply(options).map_err(to_js_error)
    }

    /// Number of shapes currently held.
    #[wasm_bindgen]
    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Point buffer of a shape, for inspection or upload.
    #[wasm_bindgen]
    pub fn shape_points(&self, id: u32) -> Result<JsValue, JsValue> {
        let state = self.state(id).map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&state.points).map_err(serde_error)
    }

    /// Flat width table of a shape, two entries per point.
    #[wasm_bindgen]
    pub fn shape_widths(&self, id: u32) -> Result<JsValue, JsValue> {
        let state = self.state(id).map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&state.widths).map_err(serde_error)
    }

    /// Color table of a shape; empty when it was built without colors.
    #[wasm_bindgen]
    pub fn shape_colors(&self, id: u32) -> Result<JsValue, JsValue> {
        let state = self.state(id).map_err(to_js_error)?;
        serde_wasm_bindgen::to_value(&state.colors).map_err(serde_error)
    }

    /// Drop a shape's state. Returns whether the id was known. The
    /// attached material, if any, stays with the collaborator.
    #[wasm_bindgen]
    pub fn remove_shape(&mut self, id: u32) -> bool {
        self.shapes.remove(&id).is_some()
    }

    /// Drain the queued material events for the JS renderer to apply.
    #[wasm_bindgen]
    pub fn take_material_updates(&mut self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.materials.drain()).map_err(serde_error)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Rust-level build entry point; [`Engine::build_shape`] is the JS
    /// wrapper around this.
    ///
    /// # Errors
    ///
    /// [`ShapeError::UnknownShape`] when `options.instance` names an id the
    /// engine does not hold.
    pub fn apply(&mut self, options: ShapeOptions) -> Result<u32, ShapeError> {
        match options.instance {
            Some(id) => {
                let state = self
                    .shapes
                    .get_mut(&id)
                    .ok_or(ShapeError::UnknownShape { id })?;
                ShapeBuilder::new(&mut self.materials).extend(state, &options);
                Ok(id)
            }
            None => {
                let state = ShapeBuilder::new(&mut self.materials).create(&options);
                let id = self.next_shape_id;
                self.next_shape_id += 1;
                self.shapes.insert(id, state);
                Ok(id)
            }
        }
    }

    /// Shape state by id, for rlib consumers.
    ///
    /// # Errors
    ///
    /// [`ShapeError::UnknownShape`] for an id the engine does not hold.
    pub fn state(&self, id: u32) -> Result<&ShapeState, ShapeError> {
        self.shapes.get(&id).ok_or(ShapeError::UnknownShape { id })
    }

    /// Drain the queued material events, for rlib consumers.
    pub fn drain_material_events(&mut self) -> Vec<MaterialEvent> {
        self.materials.drain()
    }
}

fn to_js_error<E: fmt::Display>(error: E) -> JsValue {
    js_error(&error.to_string())
}

fn serde_error(err: serde_wasm_bindgen::Error) -> JsValue {
    JsError::new(&err.to_string()).into()
}

fn js_error(message: &str) -> JsValue {
    #[cfg(target_arch = "wasm32")]
    {
        JsError::new(message).into()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = message;
        JsValue::NULL
    }
}
