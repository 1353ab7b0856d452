// The "NO" button gag: when the pointer gets close, the button jumps somewhere
// else inside its container and gets a little smaller.
// Visual: the button is never caught, but also never shrinks below 35% or leaves the box.
//
// Positions are the element's top-left corner relative to the container;
// pointer coordinates arrive in surface coordinates.

use crate::types::{Point, Rect};
use log::debug;
use rand::Rng;

/// Gap kept between the element and every container edge.
pub const PADDING: f64 = 16.0;
/// Pointer distance (at scale 1) that makes the element jump.
pub const TRIGGER_RADIUS: f64 = 140.0;
pub const SHRINK_FACTOR: f64 = 0.88;
pub const MIN_SCALE: f64 = 0.35;
/// The element starts this far right of the container's middle.
pub const INITIAL_OFFSET_X: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvasionState {
    pub position: Point,
    /// Never grows; floored at [`MIN_SCALE`].
    pub scale: f64,
}

impl Default for EvasionState {
    fn default() -> Self {
        Self { position: Point::default(), scale: 1.0 }
    }
}

/// `v` limited to `[lo, hi]`. If the range is inverted `lo` wins, and NaN maps to `lo`.
#[inline]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v.is_nan() {
        return lo;
    }
    lo.max(hi.min(v))
}

/// Keep an element of `element`'s size fully inside `container` minus [`PADDING`].
pub fn clamp_position(p: Point, container: &Rect, element: &Rect) -> Point {
    let max_x = container.width - element.width - PADDING;
    let max_y = container.height - element.height - PADDING;
    Point::new(clamp(p.x, PADDING, max_x), clamp(p.y, PADDING, max_y))
}

/// Starting spot: a bit right of center, vertically centered.
pub fn place_initial(container: &Rect, element: &Rect) -> Point {
    let start = Point::new(
        container.width / 2.0 + INITIAL_OFFSET_X - element.width / 2.0,
        container.height / 2.0 - element.height / 2.0,
    );
    clamp_position(start, container, element)
}

/// Jump to a uniformly random spot inside the padded container and shrink.
/// The new spot doesn't depend on where the pointer is.
pub fn evade<R: Rng + ?Sized>(
    state: &EvasionState,
    container: &Rect,
    element: &Rect,
    rng: &mut R,
) -> EvasionState {
    let available_w = container.width - element.width - PADDING * 2.0;
    let available_h = container.height - element.height - PADDING * 2.0;
    let target = Point::new(
        PADDING + rng.r#gen::<f64>() * available_w,
        PADDING + rng.r#gen::<f64>() * available_h,
    );
    let next = EvasionState {
        position: clamp_position(target, container, element),
        scale: (state.scale * SHRINK_FACTOR).max(MIN_SCALE),
    };
    debug!(
        "evaded to ({:.1}, {:.1}), scale {:.3}",
        next.position.x, next.position.y, next.scale
    );
    next
}

/// True when `cursor` (container-relative) is inside the trigger radius around the element's center.
pub fn within_reach(cursor: Point, element: &Rect, state: &EvasionState) -> bool {
    let center = Point::new(
        state.position.x + element.width / 2.0,
        state.position.y + element.height / 2.0,
    );
    cursor.distance(center) < TRIGGER_RADIUS * state.scale
}

/// React to a pointer move. `cursor` is in surface coordinates, `element` carries the
/// element's current on-screen size. Returns the state to use from now on.
pub fn handle_pointer_move<R: Rng + ?Sized>(
    cursor: Point,
    container: &Rect,
    element: &Rect,
    state: &EvasionState,
    rng: &mut R,
) -> EvasionState {
    let local = Point::new(cursor.x - container.x, cursor.y - container.y);
    if within_reach(local, element, state) {
        evade(state, container, element, rng)
    } else {
        *state
    }
}
