use bevy_ecs::prelude::Component;
use bevy_math::Vec2;

/// Axis-aligned collision box.
///
/// `origin` is the point inside the box (in pixels from its top-left) that
/// sits on the entity's [`MapPosition`](super::mapposition::MapPosition).
/// A centred sprite has `origin = size * 0.5`, a sprite anchored at its
/// bottom-centre has `origin = (size.x * 0.5, size.y)`.
#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    pub size: Vec2,
    pub origin: Vec2,
}

impl BoxCollider {
    /// Create a BoxCollider with given size, anchored at its top-left.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            origin: Vec2::ZERO,
        }
    }

    /// Create a BoxCollider whose origin is `anchor * size` (anchor in 0..=1).
    pub fn anchored(size: Vec2, anchor: Vec2) -> Self {
        Self {
            size,
            origin: size * anchor,
        }
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        let min = position - self.origin;
        (min, min + self.size)
    }

    /// Strict AABB overlap test against another BoxCollider. Touching edges do
    /// not count.
    pub fn overlaps(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchored_origin() {
        let c = BoxCollider::anchored(Vec2::new(42.0, 66.0), Vec2::new(0.5, 1.0));
        assert_eq!(c.origin, Vec2::new(21.0, 66.0));
        let (min, max) = c.aabb(Vec2::new(100.0, 200.0));
        assert_eq!(min, Vec2::new(79.0, 134.0));
        assert_eq!(max, Vec2::new(121.0, 200.0));
    }

    #[test]
    fn test_wall_anchors_flank_platform() {
        // Left wall anchored (1,1) at the platform's top-left, right wall (0,1)
        // at its top-right: both stand on the platform edge, outside it.
        let wall = Vec2::new(5.0, 42.0);
        let left = BoxCollider::anchored(wall, Vec2::new(1.0, 1.0));
        let right = BoxCollider::anchored(wall, Vec2::new(0.0, 1.0));
        let platform = BoxCollider::new(84.0, 42.0);
        let top_left = Vec2::new(300.0, 300.0);
        let top_right = Vec2::new(384.0, 300.0);

        let (lmin, lmax) = left.aabb(top_left);
        assert_eq!(lmax, top_left);
        assert_eq!(lmin, Vec2::new(295.0, 258.0));
        let (rmin, _) = right.aabb(top_right);
        assert_eq!(rmin, Vec2::new(384.0, 258.0));

        assert!(!left.overlaps(top_left, &platform, top_left));
        assert!(!right.overlaps(top_right, &platform, top_left));
    }

    #[test]
    fn test_overlap_is_strict() {
        let a = BoxCollider::new(10.0, 10.0);
        let b = BoxCollider::new(10.0, 10.0);
        assert!(a.overlaps(Vec2::ZERO, &b, Vec2::new(9.0, 9.0)));
        assert!(!a.overlaps(Vec2::ZERO, &b, Vec2::new(10.0, 0.0)));
        assert!(!a.overlaps(Vec2::ZERO, &b, Vec2::new(0.0, 10.0)));
    }
}
