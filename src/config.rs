// Command line configuration.

use crate::shape::DEFAULT_FRAME_COUNT;
use clap::Parser;
use clap::builder::TypedValueParser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "heartbeat", version, about = "A beating point-cloud heart behind a NO button that won't be clicked")]
pub struct Config {
    /// Window (or snapshot) width in pixels
    #[arg(long, default_value_t = 800)]
    pub width: usize,

    /// Window (or snapshot) height in pixels
    #[arg(long, default_value_t = 600)]
    pub height: usize,

    /// Precomputed animation frames
    #[arg(long, default_value_t = DEFAULT_FRAME_COUNT, value_parser = clap::value_parser!(u16).range(1..).map(usize::from))]
    pub frames: usize,

    /// Seed for reproducible hearts and NO-button hops
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write one frame to this PNG and exit without opening a window
    #[arg(long)]
    pub snapshot: Option<PathBuf>,

    /// Frame index used by --snapshot
    #[arg(long, default_value_t = 0)]
    pub frame: usize,

    /// Skip the question and start the heart right away
    #[arg(long)]
    pub autostart: bool,
}

impl Config {
    /// Seeded when `--seed` is given, fresh entropy otherwise.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["heartbeat"]).expect("parse");
        assert_eq!((config.width, config.height, config.frames), (800, 600, 20));
        assert!(config.seed.is_none() && config.snapshot.is_none() && !config.autostart);
    }

    #[test]
    fn zero_frames_is_rejected() {
        assert!(Config::try_parse_from(["heartbeat", "--frames", "0"]).is_err());
    }

    #[test]
    fn seed_makes_rng_reproducible() {
        let config =
            Config::try_parse_from(["heartbeat", "--seed", "99", "--snapshot", "out.png"]).expect("parse");
        let a: u64 = config.rng().r#gen();
        let b: u64 = config.rng().r#gen();
        assert_eq!(a, b);
        assert_eq!(config.snapshot, Some(PathBuf::from("out.png")));
    }
}
