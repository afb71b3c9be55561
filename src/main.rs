use std::time::Duration;

use anyhow::{Result, bail};
use clap::Parser;
use rand::seq::SliceRandom;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

mod card;
mod controls;
mod dots;
mod texture_loader;
mod track;

use carousel::cards::discover_cards;
use carousel::constants::DOT_BAR_HEIGHT;
use carousel::{Carousel, Cli, HoverTracker};

use crate::card::Card;
use crate::controls::{NavAction, NavButtons};
use crate::dots::Dots;
use crate::texture_loader::load_texture_with_exif_rotation;
use crate::track::Track;

/// Splits the window into the track and the indicator bar below it.
fn layout(screen_width: i32, screen_height: i32) -> (Rectangle, Rectangle) {
    let width = screen_width as f32;
    let height = screen_height as f32;
    let track_height = (height - DOT_BAR_HEIGHT).max(0.0);
    (
        Rectangle::new(0.0, 0.0, width, track_height),
        Rectangle::new(0.0, track_height, width, height - track_height),
    )
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,carousel=debug"));
    fmt().with_env_filter(filter).with_target(true).init();

    let settings = Cli::parse().settings()?;

    // --- Find Cards ---
    let mut card_paths = discover_cards(&settings.cards_dir)?;
    if settings.shuffle {
        card_paths.shuffle(&mut rand::rng());
    }
    info!("Found {} card images in {:?}", card_paths.len(), settings.cards_dir);

    let (mut rl, thread) = raylib::init()
        .size(settings.width as i32, settings.height as i32)
        .title("Carousel")
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(settings.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    // --- Load Cards ---
    let mut cards: Vec<Card> = Vec::new();
    for path in &card_paths {
        match load_texture_with_exif_rotation(&mut rl, &thread, path) {
            Ok(texture) => cards.push(Card::new(texture)),
            Err(e) => warn!("Skipping card {:?}: {:#}", path.file_name().unwrap_or_default(), e),
        }
    }
    if cards.is_empty() {
        bail!("none of the images in {:?} could be loaded", settings.cards_dir);
    }

    // --- Mount Carousel ---
    let (track_rect, bar_rect) = layout(rl.get_screen_width(), rl.get_screen_height());
    let mut carousel = Carousel::new(Track::new(track_rect), Dots::new(bar_rect), settings.interval);
    let mut nav = NavButtons::new(track_rect);
    carousel.initialize(cards.len());
    if settings.start_paused {
        carousel.stop_auto_advance();
    }
    let mut hover = HoverTracker::default();

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time();

        if rl.is_window_resized() {
            let (track_rect, bar_rect) = layout(rl.get_screen_width(), rl.get_screen_height());
            carousel.surface_mut().set_viewport(track_rect);
            carousel.indicators_mut().layout(bar_rect);
            nav.layout(track_rect);
            carousel.on_resize();
        }

        // Pointer attention on the track pauses auto-advance
        let mouse = rl.get_mouse_position();
        let inside_track = carousel.surface().contains(mouse);
        hover.update(&mut carousel, rl.is_cursor_on_screen(), inside_track);

        if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
            if let Some(action) = nav.hit_test(mouse) {
                match action {
                    NavAction::Previous => carousel.previous(),
                    NavAction::Next => carousel.next(),
                }
            } else if let Some(index) = carousel.indicators().hit_test(mouse) {
                carousel.go_to(index as isize);
            }
        }
        if rl.is_key_pressed(KeyboardKey::KEY_LEFT) {
            carousel.previous();
        }
        if rl.is_key_pressed(KeyboardKey::KEY_RIGHT) {
            carousel.next();
        }

        carousel.tick(Duration::from_secs_f32(dt.max(0.0)));
        carousel.surface_mut().update(dt);

        // --- Render ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        carousel.surface().draw(&mut d, &cards);
        nav.draw(&mut d);
        carousel.indicators().draw(&mut d);
    }

    info!("Window closed");
    Ok(())
}
