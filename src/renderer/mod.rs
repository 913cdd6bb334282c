//! Rendering module
//!
//! The simulation is drawn as a list of backend-neutral commands. Solid shapes
//! tessellate into flat `bytemuck` vertex buffers (`[x, y, r, g, b, a]` in NDC);
//! images and text are resolved by name by the platform backend.

pub mod commands;
pub mod frame;
pub mod shapes;
pub mod vertex;

pub use commands::{DrawCommand, DrawList};
pub use frame::{build_frame, history_frame};
pub use shapes::tessellate;
pub use vertex::Vertex;
