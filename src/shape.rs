// The heart itself: static point sets built once, plus every animation frame precomputed.
// Visual: `HeartShape` is everything the player needs to replay the beating heart;
// a window resize throws it away and builds a new one.

use crate::curve::{heart_curve, scatter_inward};
use crate::error::Error;
use crate::sequencer;
use crate::types::{Point, SizedPoint};
use log::info;
use rand::Rng;
use std::collections::HashSet;
use std::f64::consts::TAU;
use std::time::Instant;

/// Outline draws per build (draws, not accepted points: duplicates are dropped).
pub const SAMPLE_COUNT: usize = 2000;
/// Enlargement of the outline relative to the unit heart curve.
pub const IMAGE_ENLARGE: f64 = 11.0;
/// Diffusion points generated per accepted outline point, hugging the silhouette.
pub const EDGE_POINTS_PER_OUTLINE: usize = 3;
pub const EDGE_BETA: f64 = 0.05;
/// Interior fill: fixed count, seeded from random outline points.
pub const CENTER_DIFFUSION_COUNT: usize = 4000;
pub const CENTER_BETA: f64 = 0.17;
/// Frames generated for the live animation.
pub const DEFAULT_FRAME_COUNT: usize = 20;

/// The three static point sets the frames are derived from.
#[derive(Debug, Clone, Default)]
pub struct PointCloud {
    pub outline: Vec<Point>,
    pub edge_diffusion: Vec<Point>,
    pub center_diffusion: Vec<Point>,
}

impl PointCloud {
    /// Sample the outline and both diffusion sets around `center`.
    ///
    /// Exactly `sample_count` curve draws are made; a draw whose one-decimal
    /// rounding was already seen is dropped so high-curvature spots don't pile up.
    /// An empty outline leaves both diffusion sets empty too.
    pub fn build<R: Rng + ?Sized>(center: Point, sample_count: usize, rng: &mut R) -> Self {
        let mut seen = HashSet::with_capacity(sample_count);
        let mut outline = Vec::with_capacity(sample_count);
        for _ in 0..sample_count {
            let t = rng.gen_range(0.0..TAU);
            let p = heart_curve(t, IMAGE_ENLARGE, center);
            if seen.insert(p.dedup_key()) {
                outline.push(p);
            }
        }

        let mut edge_diffusion = Vec::with_capacity(outline.len() * EDGE_POINTS_PER_OUTLINE);
        for &p in &outline {
            for _ in 0..EDGE_POINTS_PER_OUTLINE {
                edge_diffusion.push(scatter_inward(p, center, EDGE_BETA, rng));
            }
        }

        let mut center_diffusion = Vec::with_capacity(CENTER_DIFFUSION_COUNT);
        if !outline.is_empty() {
            for _ in 0..CENTER_DIFFUSION_COUNT {
                let p = outline[rng.gen_range(0..outline.len())];
                center_diffusion.push(scatter_inward(p, center, CENTER_BETA, rng));
            }
        }

        Self { outline, edge_diffusion, center_diffusion }
    }

    pub fn len(&self) -> usize {
        self.outline.len() + self.edge_diffusion.len() + self.center_diffusion.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A fully built heart for one surface size. Immutable once built.
#[derive(Debug, Clone)]
pub struct HeartShape {
    width: f64,
    height: f64,
    center: Point,
    cloud: PointCloud,
    frames: Vec<Vec<SizedPoint>>,
}

impl HeartShape {
    /// Build a heart for a `width` x `height` surface with `frame_count` frames,
    /// computing every frame up front.
    pub fn build<R: Rng + ?Sized>(
        width: f64,
        height: f64,
        frame_count: usize,
        rng: &mut R,
    ) -> Result<Self, Error> {
        Self::build_with_samples(width, height, frame_count, SAMPLE_COUNT, rng)
    }

    /// Same as [`HeartShape::build`] with a custom number of outline draws.
    pub fn build_with_samples<R: Rng + ?Sized>(
        width: f64,
        height: f64,
        frame_count: usize,
        sample_count: usize,
        rng: &mut R,
    ) -> Result<Self, Error> {
        // `!(x > 0)` also rejects NaN.
        if !(width > 0.0 && height > 0.0) || !width.is_finite() || !height.is_finite() {
            return Err(Error::InvalidSize { width, height });
        }
        if frame_count == 0 {
            return Err(Error::EmptyFrames);
        }

        let started = Instant::now();
        let center = Point::new(width / 2.0, height / 2.0);
        let cloud = PointCloud::build(center, sample_count, rng);
        let frames = sequencer::compute_frames(&cloud, center, frame_count, rng);

        info!(
            "built heart {}x{}: {} outline, {} edge, {} center points, {} frames in {:.1?}",
            width,
            height,
            cloud.outline.len(),
            cloud.edge_diffusion.len(),
            cloud.center_diffusion.len(),
            frames.len(),
            started.elapsed()
        );

        Ok(Self { width, height, center, cloud, frames })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn base_points(&self) -> &[Point] {
        &self.cloud.outline
    }

    pub fn edge_diffusion_points(&self) -> &[Point] {
        &self.cloud.edge_diffusion
    }

    pub fn center_diffusion_points(&self) -> &[Point] {
        &self.cloud.center_diffusion
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn frame(&self, index: usize) -> Option<&[SizedPoint]> {
        self.frames.get(index).map(Vec::as_slice)
    }

    pub fn frames(&self) -> &[Vec<SizedPoint>] {
        &self.frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn shape(frames: usize) -> HeartShape {
        let mut rng = StdRng::seed_from_u64(2024);
        HeartShape::build(800.0, 600.0, frames, &mut rng).expect("valid size")
    }

    #[test]
    fn outline_points_are_unique_after_rounding() {
        let s = shape(1);
        let keys: HashSet<_> = s.base_points().iter().map(|p| p.dedup_key()).collect();
        assert_eq!(keys.len(), s.base_points().len());
        assert!(!s.base_points().is_empty());
        assert!(s.base_points().len() <= SAMPLE_COUNT);
    }

    #[test]
    fn outline_points_lie_on_the_curve() {
        let c = Point::new(400.0, 300.0);
        let rng = StdRng::seed_from_u64(31);
        // The outline draws its parameters first, so a clone replays the same t values.
        let mut replay = rng.clone();
        let cloud = PointCloud::build(c, 500, &mut rng.clone());

        let mut seen = HashSet::new();
        let mut expected = Vec::new();
        for _ in 0..500 {
            let t = replay.gen_range(0.0..TAU);
            let p = heart_curve(t, IMAGE_ENLARGE, c);
            if seen.insert(p.dedup_key()) {
                expected.push((t, p));
            }
        }

        assert_eq!(cloud.outline.len(), expected.len());
        for (got, (t, want)) in cloud.outline.iter().zip(&expected) {
            let x = 16.0 * t.sin().powi(3) * IMAGE_ENLARGE + c.x;
            let y = -(13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos())
                * IMAGE_ENLARGE
                + c.y;
            assert_eq!(got, want);
            assert!((got.x - x).abs() < 1e-9 && (got.y - y).abs() < 1e-9, "t {t}");
        }
    }

    #[test]
    fn diffusion_set_sizes() {
        let s = shape(1);
        assert_eq!(s.edge_diffusion_points().len(), 3 * s.base_points().len());
        assert_eq!(s.center_diffusion_points().len(), CENTER_DIFFUSION_COUNT);
    }

    #[test]
    fn frame_count_matches_request() {
        let s = shape(5);
        assert_eq!(s.frame_count(), 5);
        assert!(s.frames().iter().all(|f| !f.is_empty()));
        assert!(s.frame(5).is_none());
    }

    #[test]
    fn rejects_degenerate_sizes() {
        let mut rng = StdRng::seed_from_u64(1);
        for (w, h) in [(0.0, 600.0), (800.0, -1.0), (f64::NAN, 600.0), (f64::INFINITY, 10.0)] {
            assert!(matches!(
                HeartShape::build(w, h, 1, &mut rng),
                Err(Error::InvalidSize { .. })
            ));
        }
        assert!(matches!(HeartShape::build(800.0, 600.0, 0, &mut rng), Err(Error::EmptyFrames)));
    }

    #[test]
    fn empty_outline_yields_empty_cloud() {
        let mut rng = StdRng::seed_from_u64(3);
        let cloud = PointCloud::build(Point::new(10.0, 10.0), 0, &mut rng);
        assert!(cloud.is_empty());
    }
}
