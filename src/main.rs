// What you SEE now:
// • "BE MINE?" with a YES and a NO button. NO runs away (and shrinks) when the mouse gets close.
// • Click YES (or press Y): the buttons vanish and a pink point-cloud heart starts beating.
// • Resize the window: the heart is rebuilt for the new size.
// • ESC quits. `--snapshot out.png` renders one frame without opening a window.

use clap::Parser;
use heartbeat::config::Config;
use heartbeat::draw::{Drawer, draw_text_5x7};
use heartbeat::scene::Scene;
use heartbeat::snapshot;
use heartbeat::{Error, FrameBuffer, HeartShape, PlaybackHandle, Player, Point, Surface};
use log::{debug, error, info, warn};
use rand::Rng;
use std::time::{Duration, Instant};

fn main() -> Result<(), Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let config = Config::parse();
    let mut rng = config.rng();

    /* --- Headless mode: one frame to PNG, no window --- */
    if let Some(path) = &config.snapshot {
        let shape = HeartShape::build(config.width as f64, config.height as f64, config.frames, &mut rng)?;
        let fb = snapshot::render_frame(&shape, config.frame)?;
        snapshot::save_png(&fb, path)?;
        return Ok(());
    }

    /* --- Window + reusable screen buffer ---
       Visual: this is the image you actually see each frame. */
    let mut drawer = Drawer::new("Be Mine?", config.width, config.height)?;
    let mut screen = FrameBuffer::new(config.width, config.height);

    let mut scene = Scene::new(screen.width, screen.height);
    let mut player = Player::new();
    let mut playback: Option<PlaybackHandle> = None;

    // Timestamps handed to the player are ms since launch, like a page clock.
    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_secs_f64() * 1000.0;

    if config.autostart {
        scene.confirm();
        playback = Some(start_heart(&mut player, &screen, config.frames, now_ms(), &mut rng)?);
    }

    /* --- HUD / FPS --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");

    /* ------------------------------ Main loop ------------------------------ */
    while drawer.is_open() && !drawer.esc_pressed() {
        let now = Instant::now();

        /* 1) Window resized: new buffer, NO back to its start, heart rebuilt. */
        let (w, h) = drawer.size();
        if (w, h) != (screen.width, screen.height) && w > 0 && h > 0 {
            screen.resize(w, h);
            scene.resize(w, h);
            if let Err(e) = player.resize(w as f64, h as f64, &mut rng) {
                error!("could not rebuild heart: {e}");
            }
        }

        /* 2) Inputs: moving near NO makes it hop; click on YES (or Y) starts the heart.
           The scene ignores polls where the pointer hasn't moved. */
        let clicked = drawer.left_clicked();
        let cursor = drawer.mouse_pos().map(|(x, y)| Point::new(x as f64, y as f64));
        if let Some(cursor) = cursor {
            scene.on_pointer_move(cursor, &mut rng);
        }
        let yes = drawer.y_pressed_once() || (clicked && cursor.is_some_and(|c| scene.hits_yes(c)));
        if yes {
            scene.confirm();
            // Y still works after the buttons are gone; one loop is enough.
            if player.is_playing() {
                warn!("heart already playing, ignoring second start");
            } else {
                playback = Some(start_heart(&mut player, &screen, config.frames, now_ms(), &mut rng)?);
            }
        }

        /* 3) Draw: the heart once it's playing, the question until then. */
        if !player.tick(now_ms(), &mut screen) {
            screen.clear();
            scene.render(&mut screen);
        }
        draw_text_5x7(&mut screen, 8, 8, &hud_fps_text, 0x00_80_80_80);

        /* 4) Present to the window (this is when the on-screen image updates). */
        drawer.present(&screen)?;

        /* 5) FPS counter (debug log + HUD once per second) */
        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            debug!("FPS: {:.1}", fps);
            hud_fps_text = format!("FPS: {:.1}", fps);
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    if let Some(started) = player.started_at_ms() {
        info!("heart beat for {:.1}s", (now_ms() - started) / 1000.0);
    }
    if let Some(handle) = playback.take() {
        player.stop(handle);
    }
    info!("bye");
    Ok(())
}

/// Build a heart for the current screen and hand it to the player.
fn start_heart<R: Rng + ?Sized>(
    player: &mut Player,
    screen: &FrameBuffer,
    frames: usize,
    now_ms: f64,
    rng: &mut R,
) -> Result<PlaybackHandle, Error> {
    let shape = HeartShape::build(screen.width as f64, screen.height as f64, frames, rng)?;
    player.start(shape, now_ms)
}
