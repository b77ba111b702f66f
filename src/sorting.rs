//! Painter's algorithm ordering.

use crate::triangle::{Screen, Triangle};

/// Sort triangles by average depth in descending order (furthest first).
///
/// Unstable: triangles with equal depth end up in arbitrary relative order.
/// Uses `total_cmp`, so a stray NaN depth cannot panic the sort.
///
/// Time complexity: O(n log n)
pub fn sort_back_to_front(triangles: &mut [Triangle<Screen>]) {
    triangles.sort_unstable_by(|a, b| b.avg_depth().total_cmp(&a.avg_depth()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec4::Vec4;

    fn at_depth(z: f32) -> Triangle<Screen> {
        Triangle::from_points(
            [
                Vec4::new(0.0, 0.0, z - 1.0),
                Vec4::new(1.0, 0.0, z),
                Vec4::new(0.0, 1.0, z + 1.0),
            ],
            Some(z),
        )
    }

    #[test]
    fn farthest_triangle_comes_first() {
        let mut triangles = vec![at_depth(5.0), at_depth(1.0), at_depth(3.0)];
        sort_back_to_front(&mut triangles);

        let order: Vec<f32> = triangles.iter().map(|t| t.shade().unwrap()).collect();
        assert_eq!(order, vec![5.0, 3.0, 1.0]);
    }

    #[test]
    fn empty_and_single_are_fine() {
        let mut none: Vec<Triangle<Screen>> = Vec::new();
        sort_back_to_front(&mut none);

        let mut one = vec![at_depth(2.0)];
        sort_back_to_front(&mut one);
        assert_eq!(one[0].shade(), Some(2.0));
    }
}
