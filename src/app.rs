//! # Application core
//!
//! Owns the per-session state (current date, current sheet, hover target)
//! and routes typed input events to the component that owns each concern.
//! All routing is synchronous and single-threaded: by the time
//! [`App::dispatch`] returns, a mutation's persistence write and its
//! recolor request have both completed, so two mutations can never
//! interleave.

use std::path::PathBuf;

use crate::attendance::{AttendanceStore, DateKey};
use crate::error::{InitError, RollcallError};
use crate::export;
use crate::gfx::adapter::RenderAdapter;
use crate::gfx::camera::OrbitCamera;
use crate::gfx::picking;
use crate::registry::SeatRegistry;
use crate::roster::{Roster, SeatId};

/// Typed input events consumed by the core.
///
/// Pointer positions are in pixels relative to the render surface origin
/// (top-left), as delivered by the windowing layer.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerMove { x: f32, y: f32 },
    PointerDown { x: f32, y: f32 },
    DateChanged(DateKey),
    ResetRequested,
    ExportRequested(PathBuf),
}

/// The assembled attendance tool: roster, registry, store, camera and the
/// adapter that renders it all.
pub struct App<A: RenderAdapter> {
    adapter: A,
    camera: OrbitCamera,
    surface: (f32, f32),
    roster: Roster,
    registry: SeatRegistry,
    store: AttendanceStore,
    hover: Option<SeatId>,
}

impl<A: RenderAdapter> App<A> {
    /// Assemble the tool and build every seat visual.
    ///
    /// This is the one place that is allowed to fail fatally: without a
    /// render surface of usable size there is nothing to hit-test against.
    pub fn new(
        roster: Roster,
        mut adapter: A,
        store: AttendanceStore,
        camera: OrbitCamera,
        surface_width: f32,
        surface_height: f32,
    ) -> Result<Self, RollcallError> {
        if !(surface_width > 0.0 && surface_height > 0.0) {
            return Err(InitError::InvalidSurface {
                width: surface_width,
                height: surface_height,
            }
            .into());
        }

        let registry = SeatRegistry::build(&roster, &mut adapter, &store);
        log::info!(
            "rollcall ready: {} seats, date {}",
            registry.len(),
            store.date()
        );

        Ok(Self {
            adapter,
            camera,
            surface: (surface_width, surface_height),
            roster,
            registry,
            store,
            hover: None,
        })
    }

    /// Route one input event to its owning component.
    pub fn dispatch(&mut self, event: InputEvent) -> Result<(), RollcallError> {
        match event {
            InputEvent::PointerMove { x, y } => {
                self.pointer_moved((x, y));
                Ok(())
            }
            InputEvent::PointerDown { x, y } => self.pointer_down((x, y)),
            InputEvent::DateChanged(date) => {
                self.change_date(date);
                Ok(())
            }
            InputEvent::ResetRequested => self.reset(),
            InputEvent::ExportRequested(path) => {
                export::write_csv_path(&path, &self.roster, &self.store)?;
                log::info!("exported {} to {}", self.store.date(), path.display());
                Ok(())
            }
        }
    }

    /// Hover: highlight the seat under the pointer, clearing the previous
    /// highlight when the target changes or becomes none.
    fn pointer_moved(&mut self, pointer: (f32, f32)) {
        let target = picking::resolve_seat(&self.adapter, pointer, self.surface, &self.camera);
        if target == self.hover {
            return;
        }
        if let Some(previous) = self.hover.take() {
            if let Some(visual) = self.registry.get(&previous) {
                self.adapter.set_highlight(visual, false);
            }
        }
        if let Some(seat) = &target {
            if let Some(visual) = self.registry.get(seat) {
                self.adapter.set_highlight(visual, true);
            }
        }
        self.hover = target;
    }

    /// Click: cycle the seat under the pointer. A miss is a no-op.
    fn pointer_down(&mut self, pointer: (f32, f32)) -> Result<(), RollcallError> {
        let Some(seat) =
            picking::resolve_seat(&self.adapter, pointer, self.surface, &self.camera)
        else {
            return Ok(());
        };
        // Persist first (inside cycle), then recolor; both are done before
        // the next event can be dispatched.
        let status = self.store.cycle(seat.clone())?;
        self.registry.recolor(&mut self.adapter, &seat, status);
        Ok(())
    }

    /// Date switch: replace the sheet wholesale and repaint every seat.
    fn change_date(&mut self, date: DateKey) {
        log::info!("switching date {} -> {date}", self.store.date());
        self.clear_hover();
        self.store.set_date(date);
        self.registry.refresh(&mut self.adapter, &self.store);
    }

    fn reset(&mut self) -> Result<(), RollcallError> {
        log::info!("resetting sheet for {}", self.store.date());
        self.store.reset()?;
        self.registry.refresh(&mut self.adapter, &self.store);
        Ok(())
    }

    fn clear_hover(&mut self) {
        if let Some(previous) = self.hover.take() {
            if let Some(visual) = self.registry.get(&previous) {
                self.adapter.set_highlight(visual, false);
            }
        }
    }

    /// The render surface was resized.
    pub fn resize_surface(&mut self, width: f32, height: f32) {
        self.surface = (width, height);
        self.camera
            .resize_projection(width as u32, height as u32);
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn store(&self) -> &AttendanceStore {
        &self.store
    }

    pub fn registry(&self) -> &SeatRegistry {
        &self.registry
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn camera(&self) -> &OrbitCamera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut OrbitCamera {
        &mut self.camera
    }

    /// Seat currently under the pointer, if any.
    pub fn hover(&self) -> Option<&SeatId> {
        self.hover.as_ref()
    }
}
