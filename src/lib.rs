//! A beating point-cloud heart and the "NO" button that runs from the pointer.
//!
//! The heart is built once per surface size ([`HeartShape::build`]): an outline
//! sampled from the parametric heart curve, two sets of diffusion points, and every
//! animation frame precomputed with a pulsing force field and a fresh halo.
//! [`Player`] replays those frames at 8 frames per second onto any [`Surface`].
//!
//! The [`evasion`] module is independent: given the container and element
//! rectangles it decides where the "NO" button goes when the pointer gets close.
//!
//! Every random draw goes through a caller-supplied [`rand::Rng`], so a seeded
//! generator reproduces a heart exactly.

pub mod config;
pub mod curve;
pub mod draw;
pub mod error;
pub mod evasion;
pub mod player;
pub mod scene;
pub mod sequencer;
pub mod shape;
pub mod snapshot;
pub mod types;

pub use error::Error;
pub use evasion::{EvasionState, handle_pointer_move, place_initial};
pub use player::{PlaybackHandle, Player, Surface, frame_index};
pub use shape::HeartShape;
pub use types::{FrameBuffer, Point, Rect, SizedPoint};
