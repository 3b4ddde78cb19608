use bevy::prelude::*;

/// Which overlap group an entity belongs to
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionLayer {
    Player,
    Mob,
    DynamicWeapon,
    StaticWeapon,
    ExpUp,
}

/// Axis-aligned collision box centred on the entity's translation.
/// The size is in world units and ignores `Transform::scale`, so a sprite
/// can be drawn larger or smaller than the area it collides with.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Footprint {
    pub size: Vec2,
}

impl Footprint {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    pub fn square(side: f32) -> Self {
        Self::new(side, side)
    }

    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }

    /// Whether this footprint at `position` overlaps `other` at `other_position`.
    /// Touching edges do not count as an overlap.
    pub fn overlaps(&self, position: Vec2, other: &Footprint, other_position: Vec2) -> bool {
        let delta = (position - other_position).abs();
        let reach = self.half_extents() + other.half_extents();
        delta.x < reach.x && delta.y < reach.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_footprint_square() {
        let footprint = Footprint::square(20.0);
        assert_eq!(footprint.size, Vec2::new(20.0, 20.0));
        assert_eq!(footprint.half_extents(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_footprints_overlap_when_centres_close() {
        let a = Footprint::square(20.0);
        let b = Footprint::square(20.0);
        assert!(a.overlaps(Vec2::ZERO, &b, Vec2::new(15.0, 5.0)));
    }

    #[test]
    fn test_footprints_apart_do_not_overlap() {
        let a = Footprint::square(20.0);
        let b = Footprint::new(10.0, 40.0);
        assert!(!a.overlaps(Vec2::ZERO, &b, Vec2::new(30.0, 0.0)));
        assert!(!a.overlaps(Vec2::ZERO, &b, Vec2::new(0.0, 31.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Footprint::square(20.0);
        let b = Footprint::square(20.0);
        assert!(!a.overlaps(Vec2::ZERO, &b, Vec2::new(20.0, 0.0)));
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let a = Footprint::new(12.0, 30.0);
        let b = Footprint::square(8.0);
        let pa = Vec2::new(3.0, -4.0);
        let pb = Vec2::new(10.0, 10.0);
        assert_eq!(a.overlaps(pa, &b, pb), b.overlaps(pb, &a, pa));
    }
}
