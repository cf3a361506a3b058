//! The crate's point type. We reuse `cgmath`'s `Vector3<f32>` rather than
//! rolling our own three-component value type: it already gives us `Copy`,
//! indexed component access, arithmetic, `dot` and `cross` for free.

pub use cgmath::Vector3;
pub use cgmath::InnerSpace;

/// Component-wise minimum.
pub fn component_min(a: Vector3<f32>, b: Vector3<f32>) -> Vector3<f32> {
    Vector3::new(a.x.min(b.x), a.y.min(b.y), a.z.min(b.z))
}

/// Component-wise maximum.
pub fn component_max(a: Vector3<f32>, b: Vector3<f32>) -> Vector3<f32> {
    Vector3::new(a.x.max(b.x), a.y.max(b.y), a.z.max(b.z))
}

/// Returns `v` with axis `axis` replaced by `value`.
pub fn with_axis(mut v: Vector3<f32>, axis: usize, value: f32) -> Vector3<f32> {
    v[axis] = value;
    v
}
