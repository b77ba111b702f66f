//! Back-face culling.

use crate::math::vec4::Vec4;
use crate::triangle::{Triangle, World};

/// Returns true when the camera sits on the outward side of the triangle.
///
/// The ray runs from the camera to the triangle's first vertex; a face is
/// visible when its normal points back against that ray. Must be evaluated in
/// world space, before any view or projection transform.
pub fn is_visible(normal: Vec4, triangle: &Triangle<World>, camera_position: Vec4) -> bool {
    let camera_ray = triangle.points()[0] - camera_position;
    normal.dot(camera_ray) < 0.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::rigid::RigidTransform;

    fn facing_minus_z(reversed: bool) -> Triangle<World> {
        let a = Vec4::new(0.0, 0.0, 5.0);
        let b = Vec4::new(0.0, 1.0, 5.0);
        let c = Vec4::new(1.0, 1.0, 5.0);
        let tri = if reversed {
            Triangle::new(a, c, b)
        } else {
            Triangle::new(a, b, c)
        };
        tri.to_world(&RigidTransform::identity())
    }

    #[test]
    fn camera_in_front_sees_face() {
        let tri = facing_minus_z(false);
        assert!(is_visible(tri.normal(), &tri, Vec4::ZERO));
    }

    #[test]
    fn camera_behind_face_culls_it() {
        // Normal points toward -z, away from a camera placed along +z.
        let tri = facing_minus_z(false);
        assert!(!is_visible(tri.normal(), &tri, Vec4::new(0.0, 0.0, 10.0)));
    }

    #[test]
    fn reversing_winding_flips_classification() {
        let camera = Vec4::new(0.0, 0.0, 10.0);
        let front = facing_minus_z(false);
        let back = facing_minus_z(true);
        assert!(!is_visible(front.normal(), &front, camera));
        assert!(is_visible(back.normal(), &back, camera));
    }

    #[test]
    fn edge_on_faces_are_culled() {
        let tri = facing_minus_z(false);
        assert!(!is_visible(tri.normal(), &tri, Vec4::new(-3.0, 0.0, 5.0)));
    }
}
