//! Disc-disc collision detection and response
//!
//! Overlapping discs are pushed apart half the overlap each, then their
//! velocities along the contact normal are exchanged with the 1-D elastic
//! collision formula. Tangential components pass through unchanged.

use glam::Vec2;

use super::disc::Disc;

/// Below this centre distance the contact normal is undefined
const COINCIDENT_EPSILON: f32 = 1e-6;

/// Contact between two discs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Unit normal pointing from the second disc toward the first
    pub normal: Vec2,
    /// Centre distance (0 for coincident discs)
    pub distance: f32,
    /// How far the discs interpenetrate (negative when apart)
    pub overlap: f32,
}

impl Contact {
    /// Contact geometry between `a` and `b`
    pub fn between(a: &Disc, b: &Disc) -> Self {
        let delta = a.pos - b.pos;
        let distance = delta.length();
        let radii = a.radius() + b.radius();

        if distance < COINCIDENT_EPSILON {
            // Coincident centres: separate along +x
            return Self {
                normal: Vec2::X,
                distance: 0.0,
                overlap: radii,
            };
        }

        Self {
            normal: delta / distance,
            distance,
            overlap: radii - distance,
        }
    }
}

/// True when the discs touch or overlap
#[inline]
pub fn discs_collide(a: &Disc, b: &Disc) -> bool {
    let radii = a.radius() + b.radius();
    a.pos.distance_squared(b.pos) <= radii * radii
}

/// Normal-axis speeds after a 1-D elastic collision
#[inline]
pub fn elastic_exchange(v1: f32, m1: f32, v2: f32, m2: f32) -> (f32, f32) {
    let total = m1 + m2;
    let v1_after = ((m1 - m2) * v1 + 2.0 * m2 * v2) / total;
    let v2_after = ((m2 - m1) * v2 + 2.0 * m1 * v1) / total;
    (v1_after, v2_after)
}

/// Separate two touching discs and exchange their normal velocities.
///
/// Callers invoke this for pairs where [`discs_collide`] holds. Positional
/// correction is always an even split regardless of mass.
pub fn resolve_collision(a: &mut Disc, b: &mut Disc) -> Contact {
    let contact = Contact::between(a, b);
    let n = contact.normal;

    if contact.overlap > 0.0 {
        let separation = n * (contact.overlap / 2.0);
        a.pos += separation;
        b.pos -= separation;
    }

    // Split into normal and tangential parts
    let v1n = a.vel.dot(n);
    let v2n = b.vel.dot(n);
    let t1 = a.vel - n * v1n;
    let t2 = b.vel - n * v2n;

    let (v1n_after, v2n_after) = elastic_exchange(v1n, a.mass(), v2n, b.mass());

    a.vel = t1 + n * v1n_after;
    b.vel = t2 + n * v2n_after;

    contact
}

/// Resolve every touching pair once, in ascending index order.
///
/// Resolving pair (i, j) can move disc i into or out of contact with a later
/// disc k; that pair is judged on the updated positions.
pub fn resolve_all(discs: &mut [Disc]) -> usize {
    let mut resolved = 0;
    for i in 0..discs.len() {
        let (head, tail) = discs.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if discs_collide(a, b) {
                resolve_collision(a, b);
                resolved += 1;
            }
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::disc::Side;
    use proptest::prelude::*;

    fn piece(x: f32, y: f32, r: f32) -> Disc {
        Disc::piece(0, Side::Home, Vec2::new(x, y), r)
    }

    #[test]
    fn test_discs_collide() {
        let a = piece(0.0, 0.0, 1.0);
        assert!(discs_collide(&a, &piece(1.5, 0.0, 1.0)));
        assert!(discs_collide(&a, &piece(2.0, 0.0, 1.0))); // touching
        assert!(!discs_collide(&a, &piece(2.01, 0.0, 1.0)));
        // Symmetric
        let b = piece(0.0, 1.9, 1.0);
        assert_eq!(discs_collide(&a, &b), discs_collide(&b, &a));
    }

    #[test]
    fn test_equal_mass_head_on_swaps_velocities() {
        let mut a = piece(0.0, 0.0, 1.0);
        let mut b = piece(1.5, 0.0, 1.0);
        a.vel = Vec2::new(1.0, 0.0);
        b.vel = Vec2::new(-1.0, 0.0);

        resolve_collision(&mut a, &mut b);

        assert!((a.vel - Vec2::new(-1.0, 0.0)).length() < 1e-5);
        assert!((b.vel - Vec2::new(1.0, 0.0)).length() < 1e-5);
        assert!((a.pos.distance(b.pos) - 2.0).abs() < 1e-5);
        // Even split: midpoint unchanged
        assert!((a.pos.x + b.pos.x - 1.5).abs() < 1e-5);
    }

    #[test]
    fn test_piece_strikes_resting_ball() {
        let mut piece = piece(-2.0, 0.0, 1.0);
        let mut ball = Disc::ball(1, Vec2::new(-0.1, 0.0), 1.0);
        piece.vel = Vec2::new(3.0, 0.0);

        resolve_collision(&mut piece, &mut ball);

        // m1 = 1, m2 = 2, u1 = 3, u2 = 0
        // v1 = (1 - 2) * 3 / 3 = -1, v2 = 2 * 1 * 3 / 3 = 2
        assert!((piece.vel.x - (-1.0)).abs() < 1e-5);
        assert!((ball.vel.x - 2.0).abs() < 1e-5);
        assert!(piece.vel.y.abs() < 1e-5);
        assert!(ball.vel.y.abs() < 1e-5);
    }

    #[test]
    fn test_tangential_velocity_passes_through() {
        let mut a = piece(0.0, 0.0, 1.0);
        let mut b = piece(1.8, 0.0, 1.0);
        a.vel = Vec2::new(0.0, 2.0);
        b.vel = Vec2::new(0.0, -1.0);

        resolve_collision(&mut a, &mut b);

        assert!((a.vel - Vec2::new(0.0, 2.0)).length() < 1e-5);
        assert!((b.vel - Vec2::new(0.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn test_coincident_centres_separate_along_x() {
        let mut a = piece(5.0, 5.0, 1.0);
        let mut b = piece(5.0, 5.0, 1.0);

        let contact = resolve_collision(&mut a, &mut b);

        assert_eq!(contact.normal, Vec2::X);
        assert!((a.pos - Vec2::new(6.0, 5.0)).length() < 1e-5);
        assert!((b.pos - Vec2::new(4.0, 5.0)).length() < 1e-5);
        assert!(a.pos.is_finite() && b.pos.is_finite());
        assert!(a.vel.is_finite() && b.vel.is_finite());
    }

    #[test]
    fn test_resolve_all_counts_pairs() {
        let mut discs = vec![
            piece(0.0, 0.0, 1.0),
            piece(1.5, 0.0, 1.0),
            piece(50.0, 0.0, 1.0),
        ];
        assert_eq!(resolve_all(&mut discs), 1);
        assert!(!discs_collide(&discs[0], &discs[2]));
    }

    proptest! {
        #[test]
        fn prop_separation_restores_contact_distance(
            ax in -100.0f32..100.0, ay in -100.0f32..100.0,
            dx in -20.0f32..20.0, dy in -20.0f32..20.0,
            ra in 0.5f32..20.0, rb in 0.5f32..20.0,
        ) {
            let mut a = piece(ax, ay, ra);
            let mut b = piece(ax + dx, ay + dy, rb);
            prop_assume!(discs_collide(&a, &b));

            resolve_collision(&mut a, &mut b);

            let distance = a.pos.distance(b.pos);
            prop_assert!((distance - (ra + rb)).abs() < 1e-3 * (ra + rb).max(1.0));
        }

        #[test]
        fn prop_momentum_and_energy_conserved(
            dx in -3.0f32..3.0, dy in -3.0f32..3.0,
            v1x in -50.0f32..50.0, v1y in -50.0f32..50.0,
            v2x in -50.0f32..50.0, v2y in -50.0f32..50.0,
            a_is_ball in any::<bool>(),
        ) {
            let mut a = if a_is_ball {
                Disc::ball(0, Vec2::ZERO, 2.0)
            } else {
                piece(0.0, 0.0, 2.0)
            };
            let mut b = piece(dx, dy, 2.0);
            a.vel = Vec2::new(v1x, v1y);
            b.vel = Vec2::new(v2x, v2y);

            let momentum = a.vel * a.mass() + b.vel * b.mass();
            let energy = a.mass() * a.vel.length_squared() + b.mass() * b.vel.length_squared();

            resolve_collision(&mut a, &mut b);

            let momentum_after = a.vel * a.mass() + b.vel * b.mass();
            let energy_after =
                a.mass() * a.vel.length_squared() + b.mass() * b.vel.length_squared();

            prop_assert!((momentum - momentum_after).length() < 1e-2);
            prop_assert!((energy - energy_after).abs() < 1e-3 * energy.max(1.0));
        }
    }
}
