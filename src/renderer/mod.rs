//! Rendering helpers
//!
//! Backend-agnostic vertex generation; callers upload the vertices with
//! whatever graphics API they use.

pub mod shapes;
pub mod vertex;

pub use vertex::Vertex;
