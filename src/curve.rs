// Curve sampling: the parametric heart and the stochastic nudges applied to its points.
// Visual: every dot you see in the heart started life on `heart_curve` and was then
// pulled inward (`scatter_inward`) or pushed out into the halo (`shrink_outward`).

use crate::types::Point;
use rand::Rng;
use rand::distributions::Open01;
use std::f64::consts::PI;

/// Evaluate the classic heart curve at parameter `t` (radians, one lap is [0, 2π)).
/// `scale` enlarges the silhouette, `center` is where its origin lands on the surface.
/// Visual: the outline is point-down because surface y grows downward.
pub fn heart_curve(t: f64, scale: f64, center: Point) -> Point {
    let x = 16.0 * t.sin().powi(3);
    let y = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos());
    Point::new(x * scale + center.x, y * scale + center.y)
}

/// Pull `point` toward `center` by an exponentially distributed fraction per axis.
/// Larger `beta` spreads the points deeper into the shape.
pub fn scatter_inward<R: Rng + ?Sized>(point: Point, center: Point, beta: f64, rng: &mut R) -> Point {
    // Open01 keeps U away from 0 so ln(U) stays finite.
    let ratio_x = -beta * rng.sample::<f64, _>(Open01).ln();
    let ratio_y = -beta * rng.sample::<f64, _>(Open01).ln();
    let dx = ratio_x * (point.x - center.x);
    let dy = ratio_y * (point.y - center.y);
    Point::new(point.x - dx, point.y - dy)
}

/// Push `point` away from `center` with an inverse-power force `-1 / d^0.6`
/// (`d` = squared distance). Points closer to the center move further.
/// A point sitting exactly on `center` has no direction and stays put.
pub fn shrink_outward(point: Point, center: Point, ratio: f64) -> Point {
    let d = point.distance_squared(center);
    if d == 0.0 {
        return point;
    }
    let force = -1.0 / d.powf(0.6);
    let dx = ratio * force * (point.x - center.x);
    let dy = ratio * force * (point.y - center.y);
    Point::new(point.x - dx, point.y - dy)
}

/// Periodic beat signal, roughly in [-0.64, 0.64].
#[inline]
pub fn pulsation_curve(phase: f64) -> f64 {
    2.0 * (4.0 * phase).sin() / PI
}
