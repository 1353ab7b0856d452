// Frame sequencing: turns the static point cloud into N beating-heart frames.
// Visual: each frame is the heart at one instant of the beat, with a freshly
// scattered glow (halo) around it. All frames are built before playback starts
// so the loop only ever copies precomputed points to the screen.

use crate::curve::{heart_curve, pulsation_curve, shrink_outward};
use crate::shape::PointCloud;
use crate::types::{Point, SizedPoint};
use log::debug;
use rand::Rng;
use std::collections::HashSet;
use std::f64::consts::{PI, TAU};

/// Halo outline is sampled slightly larger than the heart itself.
pub const HALO_ENLARGE: f64 = 11.6;
/// Max integer offset (each axis) applied to every surviving halo point.
pub const HALO_JITTER: i32 = 14;
/// Halo sizes, drawn uniformly: size 2 twice as likely as size 1.
const HALO_SIZES: [u8; 3] = [1, 2, 2];

/// Per-frame beat parameters, derived only from the frame index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    /// Strength of the push/pull on the static points (negative = outward).
    pub ratio: f64,
    /// Outward push applied to halo samples.
    pub halo_radius: f64,
    /// Halo candidates drawn this frame (before deduplication).
    pub halo_number: usize,
}

impl FrameParams {
    pub fn for_frame(index: usize) -> Self {
        let phase = (index as f64 / 10.0) * PI;
        let pulse = pulsation_curve(phase);
        Self {
            ratio: 10.0 * pulse,
            halo_radius: (4.0 + 6.0 * (1.0 + pulse)).floor(),
            halo_number: (3000.0 + 4000.0 * pulse.powi(2).abs()).floor() as usize,
        }
    }
}

/// Move `point` along the beat force `1 / d^0.52` (`d` = squared distance to `center`),
/// plus a -1/0/+1 jitter per axis. A point exactly on `center` only gets the jitter.
pub fn beat_position<R: Rng + ?Sized>(point: Point, center: Point, ratio: f64, rng: &mut R) -> Point {
    let d = point.distance_squared(center);
    let force = if d == 0.0 { 0.0 } else { 1.0 / d.powf(0.52) };
    let dx = ratio * force * (point.x - center.x) + rng.gen_range(-1..=1) as f64;
    let dy = ratio * force * (point.y - center.y) + rng.gen_range(-1..=1) as f64;
    Point::new(point.x - dx, point.y - dy)
}

/// Scatter this frame's halo: sample the enlarged curve, push outward, drop
/// rounding duplicates, jitter the survivors and give each a size.
pub fn halo_points<R: Rng + ?Sized>(center: Point, params: &FrameParams, rng: &mut R) -> Vec<SizedPoint> {
    let mut seen = HashSet::with_capacity(params.halo_number);
    let mut out = Vec::with_capacity(params.halo_number);
    for _ in 0..params.halo_number {
        let t = rng.gen_range(0.0..TAU);
        let p = shrink_outward(heart_curve(t, HALO_ENLARGE, center), center, params.halo_radius);
        if !seen.insert(p.dedup_key()) {
            continue;
        }
        let jitter = Point::new(
            rng.gen_range(-HALO_JITTER..=HALO_JITTER) as f64,
            rng.gen_range(-HALO_JITTER..=HALO_JITTER) as f64,
        );
        let size = HALO_SIZES[rng.gen_range(0..HALO_SIZES.len())];
        out.push(SizedPoint::new(p + jitter, size));
    }
    out
}

/// Build frame `index`: halo first, then outline, edge and center points after the beat force.
pub fn compute_frame<R: Rng + ?Sized>(
    cloud: &PointCloud,
    center: Point,
    index: usize,
    rng: &mut R,
) -> Vec<SizedPoint> {
    let params = FrameParams::for_frame(index);
    let mut points = halo_points(center, &params, rng);
    let halo = points.len();
    points.reserve(cloud.len());

    for &p in &cloud.outline {
        let size = rng.gen_range(1..=3);
        points.push(SizedPoint::new(beat_position(p, center, params.ratio, rng), size));
    }
    for &p in cloud.edge_diffusion.iter().chain(&cloud.center_diffusion) {
        let size = rng.gen_range(1..=2);
        points.push(SizedPoint::new(beat_position(p, center, params.ratio, rng), size));
    }

    debug!("frame {index}: ratio {:.2}, {halo} halo + {} body points", params.ratio, cloud.len());
    points
}

/// Every frame, eagerly, in order.
pub fn compute_frames<R: Rng + ?Sized>(
    cloud: &PointCloud,
    center: Point,
    frame_count: usize,
    rng: &mut R,
) -> Vec<Vec<SizedPoint>> {
    (0..frame_count).map(|i| compute_frame(cloud, center, i, rng)).collect()
}
