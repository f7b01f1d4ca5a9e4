//! Ball-vs-platform landing and ball-vs-coin pickup tests
//!
//! Platforms are one-way: the ball can only land on a top surface, and only
//! while falling. Sides and undersides never collide.

use glam::Vec2;

use super::level::Platform;
use crate::consts::{COIN_PICKUP_TOLERANCE, LANDING_EPSILON};

/// Result of a landing check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Landing {
    /// Ball center y resting on the platform
    pub rest_y: f32,
}

/// Whether the ball crossed `platform`'s top this step.
///
/// `prev_y` is the ball center before integration, `y`/`vy` after.
pub fn crosses_top(platform: &Platform, x: f32, prev_y: f32, y: f32, vy: f32, radius: f32) -> bool {
    if vy < 0.0 || !platform.spans(x, radius) {
        return false;
    }
    let top = platform.top();
    prev_y + radius <= top + LANDING_EPSILON && y + radius >= top
}

/// Find the platform the ball lands on this step, if any.
///
/// When several tops were crossed in one step the highest one wins, since the
/// ball reached it first.
pub fn find_landing(
    platforms: &[Platform],
    x: f32,
    prev_y: f32,
    y: f32,
    vy: f32,
    radius: f32,
) -> Option<Landing> {
    platforms
        .iter()
        .filter(|p| crosses_top(p, x, prev_y, y, vy, radius))
        .min_by(|a, b| a.top().total_cmp(&b.top()))
        .map(|p| Landing {
            rest_y: p.top() - radius,
        })
}

/// Whether a ball touches a coin closely enough to pick it up
#[inline]
pub fn touches_coin(ball_pos: Vec2, ball_radius: f32, coin_pos: Vec2, coin_radius: f32) -> bool {
    ball_pos.distance(coin_pos) < ball_radius + coin_radius - COIN_PICKUP_TOLERANCE
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: f32 = 18.0;

    fn slab() -> Platform {
        Platform::new(100.0, 400.0, 200.0, 30.0)
    }

    #[test]
    fn test_lands_when_falling_through_top() {
        let p = slab();
        // Bottom goes from 398 to 404
        assert!(crosses_top(&p, 150.0, 380.0, 386.0, 300.0, R));
    }

    #[test]
    fn test_resting_ball_stays_landed() {
        let p = slab();
        // Bottom starts exactly on the top
        assert!(crosses_top(&p, 150.0, 382.0, 382.4, 22.0, R));
    }

    #[test]
    fn test_no_landing_while_rising() {
        let p = slab();
        assert!(!crosses_top(&p, 150.0, 380.0, 386.0, -10.0, R));
    }

    #[test]
    fn test_no_landing_from_below() {
        let p = slab();
        // Already below the top before the step
        assert!(!crosses_top(&p, 150.0, 390.0, 395.0, 100.0, R));
    }

    #[test]
    fn test_no_landing_outside_span() {
        let p = slab();
        assert!(!crosses_top(&p, 60.0, 380.0, 386.0, 300.0, R));
        // Radius inflation catches the rim
        assert!(crosses_top(&p, 85.0, 380.0, 386.0, 300.0, R));
    }

    #[test]
    fn test_highest_crossed_platform_wins() {
        let platforms = [
            Platform::new(0.0, 420.0, 200.0, 20.0),
            Platform::new(0.0, 405.0, 200.0, 20.0),
        ];
        let landing = find_landing(&platforms, 50.0, 370.0, 410.0, 900.0, R).unwrap();
        assert_eq!(landing.rest_y, 405.0 - R);

        assert!(find_landing(&platforms, 500.0, 370.0, 410.0, 900.0, R).is_none());
    }

    #[test]
    fn test_coin_pickup_tolerance() {
        let ball = Vec2::new(0.0, 0.0);
        // 18 + 10 - 4 = 24
        assert!(touches_coin(ball, R, Vec2::new(23.9, 0.0), 10.0));
        assert!(!touches_coin(ball, R, Vec2::new(24.0, 0.0), 10.0));
        assert!(!touches_coin(ball, R, Vec2::new(26.0, 0.0), 10.0));
    }
}
