// Animation playback: picks a precomputed frame from wall-clock time and paints it.
// Visual: the heart beats at 8 logical frames per second no matter how fast the
// window refreshes; every tick wipes the surface and redraws one frame in pink.

use crate::error::Error;
use crate::shape::HeartShape;
use crate::types::SizedPoint;
use log::info;
use rand::Rng;

/// Logical animation rate, independent of the display refresh rate.
pub const FRAMES_PER_SECOND: f64 = 8.0;
/// Light pink, 0x00RRGGBB.
pub const HEART_COLOR: u32 = 0x00_FF_C0_CB;

/// Whatever the heart is painted on.
pub trait Surface {
    /// Wipe the whole surface.
    fn clear(&mut self);
    /// Fill a `size` x `size` square whose top-left corner is at (x, y).
    fn fill_square(&mut self, x: f64, y: f64, size: u8, color: u32);
}

/// Frame shown at `now_ms`: `floor(now_ms / 1000 * 8) mod len`.
/// Negative or NaN timestamps show frame 0; `None` when there are no frames.
pub fn frame_index(now_ms: f64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let step = (now_ms / 1000.0 * FRAMES_PER_SECOND).floor();
    // `as` saturates, and NaN becomes 0.
    let step = if step > 0.0 { step as u64 } else { 0 };
    Some((step % len as u64) as usize)
}

/// Paint a whole frame in one color on top of whatever is there.
pub fn paint_frame<S: Surface + ?Sized>(surface: &mut S, points: &[SizedPoint], color: u32) {
    for p in points {
        surface.fill_square(p.x, p.y, p.size, color);
    }
}

/// Proof that a playback chain is running; hand it back to [`Player::stop`].
#[derive(Debug, PartialEq, Eq)]
pub struct PlaybackHandle(u64);

#[derive(Debug)]
struct Playback {
    id: u64,
    started_at_ms: f64,
}

/// Owns the current heart and at most one running playback.
pub struct Player {
    shape: Option<HeartShape>,
    playback: Option<Playback>,
    next_id: u64,
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

impl Player {
    pub fn new() -> Self {
        Self { shape: None, playback: None, next_id: 1 }
    }

    pub fn shape(&self) -> Option<&HeartShape> {
        self.shape.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.playback.is_some()
    }

    /// When the running playback began, if any.
    pub fn started_at_ms(&self) -> Option<f64> {
        self.playback.as_ref().map(|p| p.started_at_ms)
    }

    /// Take ownership of `shape` and begin playback.
    /// Starting twice without a stop is refused so two loops never paint at once.
    pub fn start(&mut self, shape: HeartShape, now_ms: f64) -> Result<PlaybackHandle, Error> {
        if self.playback.is_some() {
            return Err(Error::AlreadyPlaying);
        }
        let id = self.next_id;
        self.next_id += 1;
        info!(
            "playback {id} started: {} frames at {}x{}",
            shape.frame_count(),
            shape.width(),
            shape.height()
        );
        self.shape = Some(shape);
        self.playback = Some(Playback { id, started_at_ms: now_ms });
        Ok(PlaybackHandle(id))
    }

    /// Cancel the playback `handle` belongs to. Stale handles do nothing and return false.
    pub fn stop(&mut self, handle: PlaybackHandle) -> bool {
        match &self.playback {
            Some(p) if p.id == handle.0 => {
                info!("playback {} stopped", p.id);
                self.playback = None;
                true
            }
            _ => false,
        }
    }

    /// Replace the heart with one built for the new surface size, keeping the frame count.
    /// Nothing to rebuild before the first start.
    pub fn resize<R: Rng + ?Sized>(&mut self, width: f64, height: f64, rng: &mut R) -> Result<(), Error> {
        let Some(old) = &self.shape else {
            return Ok(());
        };
        let frames = old.frame_count();
        info!("surface resized to {width}x{height}, rebuilding heart");
        self.shape = Some(HeartShape::build(width, height, frames, rng)?);
        Ok(())
    }

    /// One display-refresh tick. Returns true when a frame was painted.
    pub fn tick<S: Surface + ?Sized>(&self, now_ms: f64, surface: &mut S) -> bool {
        if self.playback.is_none() {
            return false;
        }
        let Some(shape) = &self.shape else {
            return false;
        };
        let Some(points) = frame_index(now_ms, shape.frame_count()).and_then(|i| shape.frame(i)) else {
            return false;
        };
        surface.clear();
        paint_frame(surface, points, HEART_COLOR);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    /// Records calls instead of drawing.
    #[derive(Default)]
    struct Recorder {
        clears: usize,
        squares: Vec<(f64, f64, u8, u32)>,
    }

    impl Surface for Recorder {
        fn clear(&mut self) {
            self.clears += 1;
            self.squares.clear();
        }
        fn fill_square(&mut self, x: f64, y: f64, size: u8, color: u32) {
            self.squares.push((x, y, size, color));
        }
    }

    fn small_shape(frames: usize) -> HeartShape {
        let mut rng = StdRng::seed_from_u64(77);
        HeartShape::build_with_samples(200.0, 200.0, frames, 100, &mut rng).expect("shape")
    }

    #[test]
    fn frame_index_runs_at_eight_fps() {
        assert_eq!(frame_index(1000.0, 20), Some(8));
        assert_eq!(frame_index(2500.0, 20), Some(0));
        assert_eq!(frame_index(124.9, 20), Some(0));
        assert_eq!(frame_index(125.0, 20), Some(1));
        assert_eq!(frame_index(-50.0, 20), Some(0));
        assert_eq!(frame_index(f64::NAN, 20), Some(0));
        assert_eq!(frame_index(1000.0, 0), None);
    }

    #[test]
    fn tick_does_nothing_before_start() {
        let player = Player::new();
        let mut rec = Recorder::default();
        assert!(!player.tick(0.0, &mut rec));
        assert_eq!(rec.clears, 0);
    }

    #[test]
    fn tick_clears_then_paints_the_selected_frame() {
        let shape = small_shape(4);
        let expected = shape.frame(1).expect("frame 1").len();
        let mut player = Player::new();
        let _handle = player.start(shape, 0.0).expect("start");

        let mut rec = Recorder::default();
        assert!(player.tick(130.0, &mut rec));
        assert_eq!(rec.clears, 1);
        assert_eq!(rec.squares.len(), expected);
        assert!(rec.squares.iter().all(|s| s.3 == HEART_COLOR));
    }

    #[test]
    fn double_start_is_refused() {
        let mut player = Player::new();
        let handle = player.start(small_shape(1), 3.0).expect("first start");
        assert!(matches!(player.start(small_shape(1), 5.0), Err(Error::AlreadyPlaying)));
        // The refused start leaves the running playback untouched.
        assert_eq!(player.started_at_ms(), Some(3.0));
        assert!(player.stop(handle));
        assert!(!player.is_playing());
        assert_eq!(player.started_at_ms(), None);
        assert!(player.start(small_shape(1), 10.0).is_ok());
        assert_eq!(player.started_at_ms(), Some(10.0));
    }

    #[test]
    fn stale_handle_does_not_stop_new_playback() {
        let mut player = Player::new();
        let first = player.start(small_shape(1), 0.0).expect("start");
        let first_id = first.0;
        assert!(player.stop(first));
        let _second = player.start(small_shape(1), 0.0).expect("restart");
        assert!(!player.stop(PlaybackHandle(first_id)));
        assert!(player.is_playing());

        let mut rec = Recorder::default();
        assert!(player.tick(0.0, &mut rec));
    }

    #[test]
    fn resize_rebuilds_with_same_frame_count() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut player = Player::new();
        player.resize(300.0, 300.0, &mut rng).expect("no-op before start");
        assert!(player.shape().is_none());

        let _h = player.start(small_shape(3), 0.0).expect("start");
        player.resize(640.0, 480.0, &mut rng).expect("resize");
        let shape = player.shape().expect("shape");
        assert_eq!(shape.frame_count(), 3);
        assert_eq!(shape.width(), 640.0);
        assert!(player.is_playing());

        assert!(player.resize(0.0, 480.0, &mut rng).is_err());
    }
}
