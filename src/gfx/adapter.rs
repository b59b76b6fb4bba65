//! # Render adapter boundary
//!
//! The core never owns geometry, materials or the draw loop. It talks to
//! whatever renders the classroom through [`RenderAdapter`]: create one
//! visual per seat, recolor it when status changes, highlight it on hover,
//! and cast rays into it for picking. [`crate::gfx::arena::SceneArena`] is
//! the built-in implementation; a GPU renderer can stand in behind the same
//! trait without the core noticing.

use crate::attendance::Status;
use crate::gfx::picking::Ray;
use crate::roster::SeatId;

/// Index of a node in the scene arena. Opaque outside the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Handle to one seat's visual representation.
///
/// Created once per seat during scene construction and never destroyed
/// while the process runs. The registry holds these; the adapter owns the
/// geometry behind them.
#[derive(Debug, Clone)]
pub struct SeatVisual {
    /// Root of the seat subtree, the node carrying the seat-identity tag.
    pub root: NodeId,
    /// Sub-surfaces whose color encodes status (base, pad, backrest).
    pub surfaces: Vec<NodeId>,
    /// Surface that receives the hover highlight (the seat pad).
    pub primary: NodeId,
}

/// One ray intersection, already resolved to its owning seat (if any).
#[derive(Debug, Clone)]
pub struct RayHit {
    /// The leaf surface the ray struck.
    pub node: NodeId,
    /// Distance from the ray origin to the intersection point.
    pub distance: f32,
    /// Identity of the seat whose subtree contains the struck surface;
    /// `None` for decorative geometry.
    pub seat: Option<SeatId>,
}

/// Boundary the core consumes from the rendering side.
pub trait RenderAdapter {
    /// Create the visual for one seat at its grid position, seeded with the
    /// seat's current status color.
    fn create_seat_visual(
        &mut self,
        seat: SeatId,
        column: u32,
        row: u32,
        status: Status,
    ) -> SeatVisual;

    /// Recolor every status-bearing sub-surface of a seat.
    fn set_status_color(&mut self, visual: &SeatVisual, status: Status);

    /// Toggle the hover highlight on a seat's primary surface.
    fn set_highlight(&mut self, visual: &SeatVisual, on: bool);

    /// Cast a ray against all pickable seat geometry.
    ///
    /// Hits are ordered nearest-first. Decorative geometry is never
    /// pickable and must not appear here.
    fn intersect(&self, ray: &Ray) -> Vec<RayHit>;
}
