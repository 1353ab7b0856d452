// Headless export: paint one precomputed frame into a buffer and save it as PNG.
// Visual: the PNG looks exactly like the window would at that frame.

use crate::error::Error;
use crate::player::{HEART_COLOR, paint_frame};
use crate::shape::HeartShape;
use crate::types::FrameBuffer;
use image::{ImageFormat, Rgb, RgbImage};
use log::info;
use std::path::Path;

/// Frame `index` of `shape` on a black buffer the size of the shape's surface.
pub fn render_frame(shape: &HeartShape, index: usize) -> Result<FrameBuffer, Error> {
    let points = shape.frame(index).ok_or(Error::FrameOutOfRange {
        index,
        len: shape.frame_count(),
    })?;
    let mut fb = FrameBuffer::new(shape.width().ceil() as usize, shape.height().ceil() as usize);
    paint_frame(&mut fb, points, HEART_COLOR);
    Ok(fb)
}

/// Unpack 0x00RRGGBB pixels into an RGB image.
pub fn to_image(fb: &FrameBuffer) -> RgbImage {
    RgbImage::from_fn(fb.width as u32, fb.height as u32, |x, y| {
        let px = fb.pixels[y as usize * fb.width + x as usize];
        Rgb([((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8])
    })
}

pub fn save_png(fb: &FrameBuffer, path: &Path) -> Result<(), Error> {
    to_image(fb).save_with_format(path, ImageFormat::Png)?;
    info!("wrote {}x{} snapshot to {}", fb.width, fb.height, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rendered_frame_has_heart_pixels() {
        let mut rng = StdRng::seed_from_u64(21);
        let shape = HeartShape::build_with_samples(320.0, 240.0, 2, 300, &mut rng).expect("shape");
        let fb = render_frame(&shape, 1).expect("frame 1");
        assert_eq!((fb.width, fb.height), (320, 240));
        assert!(fb.pixels.iter().any(|&p| p == HEART_COLOR));

        // The heart is mirror-symmetric, so its pink pixels balance around the middle column.
        let img = to_image(&fb);
        let xs: Vec<f64> = img
            .enumerate_pixels()
            .filter(|(_, _, px)| px.0 == [0xFF, 0xC0, 0xCB])
            .map(|(x, _, _)| x as f64)
            .collect();
        let mean_x = xs.iter().sum::<f64>() / xs.len() as f64;
        assert!((mean_x - 160.0).abs() < 15.0, "mean x {mean_x}");
    }

    #[test]
    fn out_of_range_frame_is_an_error() {
        let mut rng = StdRng::seed_from_u64(22);
        let shape = HeartShape::build_with_samples(100.0, 100.0, 2, 50, &mut rng).expect("shape");
        assert!(matches!(
            render_frame(&shape, 2),
            Err(Error::FrameOutOfRange { index: 2, len: 2 })
        ));
    }
}
