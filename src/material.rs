//! Contract with the material/rendering collaborator.
//!
//! The engine never builds or inspects materials. It hands resampled color
//! tables across this seam and signals geometry changes; compiling shaders
//! and uploading buffers is the renderer's problem. The wasm facade plugs a
//! [`MaterialQueue`] in here and lets the JS side drain the recorded events,
//! the same way the engine ships geometry diffs instead of drawing anything
//! itself.

use serde::Serialize;

use crate::shape::Color;

/// Opaque key identifying a material held by the collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MaterialHandle(pub u32);

/// The narrow surface the engine needs from the material/rendering side.
pub trait MaterialSink {
    /// Attach a new material carrying `colors` and return its handle.
    fn attach_material(&mut self, colors: &[Color]) -> MaterialHandle;

    /// Replace the color table of an existing material. `deferred` asks the
    /// collaborator to postpone the rebuild until the caller flushes.
    fn update_colors(&mut self, handle: MaterialHandle, colors: &[Color], deferred: bool);

    /// Signal that a shape's point or width buffers changed.
    fn notify_geometry_changed(&mut self, deferred: bool);
}

/// One recorded collaborator call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum MaterialEvent {
    /// A material was attached with an initial color table.
    AttachMaterial {
        handle: MaterialHandle,
        colors: Vec<Color>,
    },
    /// A material's color table was replaced.
    UpdateColors {
        handle: MaterialHandle,
        colors: Vec<Color>,
        deferred: bool,
    },
    /// Point or width buffers changed.
    GeometryChanged { deferred: bool },
}

/// Records collaborator calls for a consumer to drain later.
///
/// The wasm facade keeps one of these per engine; JS drains it after every
/// build call and applies the events to the real renderer.
#[derive(Debug, Default)]
pub struct MaterialQueue {
    next_handle: u32,
    events: Vec<MaterialEvent>,
}

impl MaterialQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes all recorded events, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<MaterialEvent> {
        std::mem::take(&mut self.events)
    }

    /// Events recorded since the last drain.
    #[must_use]
    pub fn pending(&self) -> &[MaterialEvent] {
        &self.events
    }
}

impl MaterialSink for MaterialQueue {
    fn attach_material(&mut self, colors: &[Color]) -> MaterialHandle {
        let handle = MaterialHandle(self.next_handle);
        self.next_handle += 1;
        self.events.push(MaterialEvent::AttachMaterial {
            handle,
            colors: colors.to_vec(),
        });
        handle
    }

    fn update_colors(&mut self, handle: MaterialHandle, colors: &[Color], deferred: bool) {
        self.events.push(MaterialEvent::UpdateColors {
            handle,
            colors: colors.to_vec(),
            deferred,
        });
    }

    fn notify_geometry_changed(&mut self, deferred: bool) {
        self.events.push(MaterialEvent::GeometryChanged { deferred });
    }
}
