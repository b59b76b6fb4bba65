//! # Graphics-facing core
//!
//! Everything the attendance core knows about the 3D side of the tool:
//!
//! - **Adapter boundary** ([`adapter`]) - the trait the render side implements
//! - **Scene arena** ([`arena`]) - id-indexed node arena, the built-in adapter
//! - **Camera** ([`camera`]) - orbit camera supplying the projection context
//! - **Layout** ([`layout`]) - seat grid placement and chair proportions
//! - **Palette** ([`palette`]) - status and highlight colors
//! - **Picking** ([`picking`]) - pointer → ray → seat identity resolution
//!
//! Rendering proper (GPU pipelines, windowing, the draw loop) lives outside
//! the crate behind [`adapter::RenderAdapter`].

pub mod adapter;
pub mod arena;
pub mod camera;
pub mod layout;
pub mod palette;
pub mod picking;

// Re-export commonly used types
pub use adapter::{NodeId, RayHit, RenderAdapter, SeatVisual};
pub use arena::SceneArena;
pub use camera::OrbitCamera;
pub use layout::RoomLayout;
pub use palette::StatusPalette;
pub use picking::{resolve_seat, screen_to_ray, Aabb, Ray};
