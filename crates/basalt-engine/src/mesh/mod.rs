//! Mesh geometry and GPU mesh storage.
//!
//! Geometry is described as a list of [`SubMesh`] streams, packed into a
//! single vertex/index buffer pair with one [`MeshRegion`] per sub-mesh.
//! Packing is pure CPU work ([`pack`]); uploading lives in [`MeshStore`].

mod cube;
mod geometry;
mod store;
mod vertex;

pub use cube::unit_cube_geometry;
pub use geometry::{MeshRegion, PackedGeometry, SubMesh, pack};
pub use store::{Mesh, MeshHandle, MeshStore};
pub use vertex::MeshVertex;
