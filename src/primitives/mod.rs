//! Floating-point geometric primitives.

mod frame;
mod point3;
mod range3;
mod segment3;
mod vec3;

pub use frame::Frame;
pub use point3::Point3;
pub use range3::Range3;
pub use segment3::{point_from_parametric_form, Segment3};
pub use vec3::{det2x2, Vec3};
