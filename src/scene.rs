// The question screen shown before the heart: a title, a "YES" button and a "NO"
// button that runs away from the pointer.
// Visual: "BE MINE?" on top, two outlined buttons under it; hover near "NO" and it
// hops elsewhere, a little smaller each time. Clicking "YES" hides all of it.

use crate::draw::{draw_rect_outline, draw_text_scaled, fill_rect, text_width};
use crate::evasion::{self, EvasionState};
use crate::types::{FrameBuffer, Point, Rect};
use rand::Rng;

pub const YES_SIZE: (f64, f64) = (120.0, 48.0);
pub const NO_SIZE: (f64, f64) = (120.0, 48.0);
/// Gap between the container's middle and the "YES" button's right edge.
const YES_GAP: f64 = 30.0;
const TITLE: &str = "BE MINE?";
const TITLE_SCALE: i32 = 4;
const LABEL_COLOR: u32 = 0x00_FF_FF_FF;
const YES_FILL: u32 = 0x00_E0_3E_6B;
const NO_FILL: u32 = 0x00_44_44_44;

pub struct Scene {
    container: Rect,
    no: EvasionState,
    hidden: bool,
    last_cursor: Option<Point>, // last pointer position seen, to tell moves from polls
}

/// The actions container for a window: everything below the title strip.
fn container_for(width: f64, height: f64) -> Rect {
    let top = (height * 0.25).min(160.0);
    Rect::new(0.0, top, width, (height - top).max(0.0))
}

impl Scene {
    pub fn new(width: usize, height: usize) -> Self {
        let mut scene = Self {
            container: Rect::default(),
            no: EvasionState::default(),
            hidden: false,
            last_cursor: None,
        };
        scene.resize(width, height);
        scene
    }

    /// Lay the container out again and put "NO" back at its starting spot.
    /// The shrink so far is kept.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.container = container_for(width as f64, height as f64);
        let element = self.no_size();
        self.no.position = evasion::place_initial(&self.container, &element);
    }

    /// "YES" was chosen: the buttons go away for good.
    pub fn confirm(&mut self) {
        self.hidden = true;
    }

    pub fn no_state(&self) -> &EvasionState {
        &self.no
    }

    /// "NO" at its current scale; only width/height matter to the evasion math.
    fn no_size(&self) -> Rect {
        Rect::new(0.0, 0.0, NO_SIZE.0 * self.no.scale, NO_SIZE.1 * self.no.scale)
    }

    /// "NO" in surface coordinates.
    pub fn no_rect(&self) -> Rect {
        let size = self.no_size();
        Rect::new(
            self.container.x + self.no.position.x,
            self.container.y + self.no.position.y,
            size.width,
            size.height,
        )
    }

    /// "YES" in surface coordinates: left of the container's middle, vertically centered.
    pub fn yes_rect(&self) -> Rect {
        let c = self.container.center();
        Rect::new(c.x - YES_GAP - YES_SIZE.0, c.y - YES_SIZE.1 / 2.0, YES_SIZE.0, YES_SIZE.1)
    }

    /// Feed a polled pointer position (surface coordinates). Returns true if "NO" moved.
    /// Only an actual move inside the actions container counts: the same position
    /// twice in a row, or a pointer over the title strip, leaves "NO" alone.
    pub fn on_pointer_move<R: Rng + ?Sized>(&mut self, cursor: Point, rng: &mut R) -> bool {
        if self.hidden || self.last_cursor == Some(cursor) {
            return false;
        }
        self.last_cursor = Some(cursor);
        if !self.container.contains(cursor) {
            return false;
        }
        let element = self.no_size();
        let next = evasion::handle_pointer_move(cursor, &self.container, &element, &self.no, rng);
        let moved = next != self.no;
        self.no = next;
        moved
    }

    pub fn hits_yes(&self, cursor: Point) -> bool {
        !self.hidden && self.yes_rect().contains(cursor)
    }

    pub fn render(&self, fb: &mut FrameBuffer) {
        if self.hidden {
            return;
        }
        let title_x = (fb.width as i32 - text_width(TITLE, TITLE_SCALE)) / 2;
        let title_y = (self.container.y as i32 - 7 * TITLE_SCALE) / 2;
        draw_text_scaled(fb, title_x, title_y.max(8), TITLE, LABEL_COLOR, TITLE_SCALE);

        draw_button(fb, &self.yes_rect(), "YES", YES_FILL, 3);
        // Label shrinks with the button, never below 1x.
        let label_scale = (3.0 * self.no.scale).round() as i32;
        draw_button(fb, &self.no_rect(), "NO", NO_FILL, label_scale);
    }
}

fn draw_button(fb: &mut FrameBuffer, r: &Rect, label: &str, fill: u32, scale: i32) {
    let (x, y, w, h) = (r.x as i32, r.y as i32, r.width as i32, r.height as i32);
    fill_rect(fb, x, y, w, h, fill);
    draw_rect_outline(fb, x, y, w, h, LABEL_COLOR);
    let scale = scale.max(1);
    let tx = x + (w - text_width(label, scale)) / 2;
    let ty = y + (h - 7 * scale) / 2;
    draw_text_scaled(fb, tx, ty, label, LABEL_COLOR, scale);
}
