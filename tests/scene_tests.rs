//! Integration tests for SceneLibrary

mod common;
use common::*;

use ledstrip_scenes::scene::{OFF, WHITE, daylight, dusk};
use ledstrip_scenes::{PackedColor, Scene, SceneError, SceneLibrary};

fn library(pixels: usize, pin: MockPin) -> SceneLibrary<MockStrip, MockPin, MockDelay> {
    SceneLibrary::new(MockStrip::new(pixels), pin, MockDelay::new()).unwrap()
}

#[test]
fn built_in_sequences_match_the_scene_palette() {
    let daylight = daylight().unwrap();
    assert_eq!(
        daylight.colors(),
        &[
            PackedColor::rgb(250, 255, 0),
            PackedColor::rgb(255, 205, 0),
            PackedColor::rgb(205, 205, 0),
            PackedColor::rgb(200, 255, 0),
        ]
    );

    let dusk = dusk(100).unwrap();
    assert_eq!(dusk.len(), 3);
    assert!(dusk.colors().iter().all(|&c| c == PackedColor::pack(255, 1, 255, 100)));
}

#[test]
fn dawn_turns_sun_off_and_strip_white() {
    let mut library = library(8, MockPin::low());

    library.dawn().unwrap();

    assert!(!library.sun_mut().is_on().unwrap());
    assert!(library.strip().pixels().iter().all(|&p| p == WHITE));
    assert_eq!(library.strip().show_count(), 8);
}

#[test]
fn night_zeroes_alpha_on_every_pixel() {
    let lit = PackedColor(0xFFAB_CDEF);
    let mut library =
        SceneLibrary::new(MockStrip::filled(12, lit), MockPin::low(), MockDelay::new()).unwrap();

    library.night().unwrap();

    assert!(library.strip().pixels().iter().all(|p| p.alpha() == 0));
    assert!(library.strip().pixels().iter().all(|&p| p == OFF));
    assert!(!library.sun_mut().is_on().unwrap());
}

#[test]
fn set_color_stores_channels_in_strip_wiring_order() {
    let mut library = library(6, MockPin::low());

    library.set_color(255, 0, 0, 255).unwrap();
    assert!(library.strip().pixels().iter().all(|&p| p == PackedColor(0xFF00_FF00)));

    library.set_color(10, 20, 30, 255).unwrap();
    assert!(library.strip().pixels().iter().all(|&p| p == PackedColor(0xFF14_0A1E)));
    assert_eq!(library.strip().show_count(), 12);
    // Explicit colors leave the sun alone.
    assert!(library.sun_mut().is_on().unwrap());
}

#[test]
fn sunset_starts_white_then_fades_once_a_second() {
    let mut library = library(8, MockPin::low());

    library.sunset().unwrap();

    // 8 flushes for the white fill, then 254 fade passes
    assert_eq!(library.strip().show_count(), 8 + 254);
    let delays = library.sequencer().delay().millis();
    assert_eq!(delays.len(), 254);
    assert!(delays.iter().all(|&ms| ms == 1000));
    assert!(!library.sun_mut().is_on().unwrap());
}

#[test]
fn nightfall_ends_dark_with_sun_off() {
    let mut library = library(8, MockPin::low());

    library.nightfall().unwrap();

    // one snap pass, two 254-pass fades, then 8 per-pixel flushes
    assert_eq!(library.strip().show_count(), 1 + 254 + 254 + 8);
    let delays = library.sequencer().delay().millis();
    assert_eq!(delays.len(), 1 + 254 + 254);
    assert!(delays.iter().all(|&ms| ms == 100));
    assert!(library.strip().pixels().iter().all(|&p| p == OFF));
    assert!(!library.sun_mut().is_on().unwrap());
}

#[test]
fn nightfall_snaps_to_daylight_first() {
    let mut library = library(8, MockPin::high());

    library.nightfall().unwrap();

    let strip = library.strip();
    let first_pass = &strip.writes()[..strip.writes_at_show()[0]];
    let daylight = daylight().unwrap();
    for &(pixel, value) in first_pass {
        assert_eq!(value, strip_order(daylight.colors()[pixel / 2]));
    }
}

#[test]
fn play_dispatches_to_the_named_scene() {
    let mut library = library(4, MockPin::low());

    library
        .play(Scene::Color {
            red: 1,
            blue: 2,
            green: 3,
            brightness: 4,
        })
        .unwrap();
    assert_eq!(library.strip().pixels()[0], PackedColor(0x0402_0103));

    library.play(Scene::Night).unwrap();
    assert!(library.strip().pixels().iter().all(|&p| p == OFF));
    assert!(!library.sun_mut().is_on().unwrap());
}

#[test]
fn relay_failure_stops_the_scene_before_the_strip() {
    let mut library = library(4, MockPin::failing());

    let result = library.dawn();

    assert!(matches!(result, Err(SceneError::Relay(_))));
    assert!(library.strip().writes().is_empty());
}

#[test]
fn scene_names_display() {
    assert_eq!(Scene::Nightfall.to_string(), "nightfall");
    assert_eq!(
        Scene::Color {
            red: 1,
            blue: 2,
            green: 3,
            brightness: 4
        }
        .to_string(),
        "color(1, 2, 3, 4)"
    );
}
