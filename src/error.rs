// A tiny error type so we don't rely on anyhow/thiserror.
// Every variant states *where* things went wrong.
use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    InvalidSize { width: f64, height: f64 }, // Heart requested for a non-positive surface
    EmptyFrames,                             // Heart requested with zero frames
    AlreadyPlaying,                          // Playback started twice without a stop
    FrameOutOfRange { index: usize, len: usize }, // Snapshot of a frame that doesn't exist
    WindowInit(String),                      // Creating the window failed
    WindowUpdate(String),                    // Updating the window buffer failed
    Snapshot(image::ImageError),             // Writing the PNG failed
}

impl Display for Error {
    // This decides how the error is printed to your console.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSize { width, height } => {
                write!(f, "Invalid surface size {width}x{height}: both sides must be positive")
            }
            Error::EmptyFrames => write!(f, "Heart needs at least one frame"),
            Error::AlreadyPlaying => write!(f, "Playback already running; stop it before starting again"),
            Error::FrameOutOfRange { index, len } => {
                write!(f, "Frame {index} out of range (shape has {len} frames)")
            }
            Error::WindowInit(s) => write!(f, "Window init error: {s}"),
            Error::WindowUpdate(s) => write!(f, "Window update error: {s}"),
            Error::Snapshot(e) => write!(f, "Snapshot error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Snapshot(e) => Some(e),
            _ => None,
        }
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Snapshot(e)
    }
}
