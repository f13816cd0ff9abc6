//! # skewbox
//!
//! `skewbox` decides whether two arbitrary parallelepipeds intersect in 3D space. It is
//! designed to be used in Rust as well as compiled to WebAssembly (WASM).
//!
//! A [`Parallelepiped`] is built from four points: three corners `a1, b1, c1` of its top
//! parallelogram and a point `a2` whose offset from `a1` extrudes the top into the bottom face.
//!
//! ## Features
//!
//! - **Layered predicates**: plane/line, point/parallelogram, point/segment,
//!   segment/parallelogram, parallelogram/parallelogram and parallelepiped/parallelepiped.
//! - **Fixed tolerance**: derived quantities are compared with an absolute [`TOLERANCE`] of `1e-11`.
//! - **Batch queries**: [`Scene`] tests many solids at once on the rayon thread pool.
//! - **WASM-first**: Built with `wasm-bindgen` for use from JavaScript and TypeScript.
//!
//! ## Example
//!
//! ```
//! use skewbox::{intersects, Parallelepiped, Vector3d};
//!
//! let v = Vector3d::new;
//! let a = Parallelepiped::new(v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(1.0, 0.0, 1.0), v(0.0, 1.0, 0.0));
//! let b = a.translated(v(1.0, 1.0, 1.0));
//! let c = a.translated(v(3.0, 3.0, 3.0));
//!
//! assert!(intersects(&a, &b));
//! assert!(!intersects(&a, &c));
//! ```
//!
//! Boundaries that only touch count as intersecting. A solid strictly nested inside another
//! without boundary contact is not reported.

mod bounds;
mod error;
pub mod intersect;
mod parallelepiped;
mod parallelogram;
mod primitives;
mod scene;
pub mod vector;
mod wasm;

pub use bounds::BoundingBox;
pub use error::GeometryError;
pub use intersect::intersects;
pub use intersect::Intersects;
pub use parallelepiped::Parallelepiped;
pub use parallelogram::Parallelogram;
pub use primitives::Line;
pub use primitives::Plane;
pub use primitives::Segment;
pub use scene::Scene;
pub use vector::Vector3d;
pub use vector::TOLERANCE;
pub use wasm::Solid;
pub use wasm::SolidScene;
