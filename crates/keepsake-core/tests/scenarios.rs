use std::time::Duration;

use keepsake_core::content::default_memories;
use keepsake_core::{
    AnimationConfig, Carousel, CarouselConfig, Layer, ParticleField, Viewport,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn carousel(autoplay: bool) -> Carousel {
    Carousel::new(
        default_memories(),
        CarouselConfig {
            autoplay,
            interval_ms: 5000,
        },
    )
    .unwrap()
}

/// A host tick from a timer armed for whatever the carousel currently schedules.
fn fire(carousel: &mut Carousel) -> bool {
    let epoch = carousel.autoplay_epoch();
    carousel.on_timer_fired(epoch)
}

#[test]
fn autoplay_then_back_button() {
    let mut carousel = carousel(true);
    assert_eq!(carousel.len(), 5);
    let schedule = carousel.autoplay_schedule().unwrap();
    assert_eq!(schedule.interval, Duration::from_millis(5000));

    assert!(carousel.on_timer_fired(schedule.epoch));
    assert!(carousel.on_timer_fired(schedule.epoch));
    assert_eq!(carousel.current_index(), 2);
    assert!(carousel.is_auto_playing());

    carousel.previous();
    assert_eq!(carousel.current_index(), 1);
    assert!(!carousel.is_auto_playing());
    assert!(carousel.autoplay_schedule().is_none());
    // A tick already in flight from the released timer changes nothing.
    assert!(!carousel.on_timer_fired(schedule.epoch));
    assert!(!fire(&mut carousel));
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn autoplay_advances_indefinitely_modulo_len() {
    let mut carousel = Carousel::new(default_memories(), CarouselConfig::default()).unwrap();
    let epoch = carousel.autoplay_epoch();
    for step in 1..=23 {
        assert!(carousel.on_timer_fired(epoch));
        assert_eq!(carousel.current_index(), step % 5);
    }
    assert_eq!(carousel.autoplay_epoch(), epoch);
}

#[test]
fn go_to_overrides_any_prior_state() {
    for autoplay in [true, false] {
        for k in 0..5 {
            let mut carousel = carousel(autoplay);
            fire(&mut carousel);
            carousel.skip_forward();
            carousel.go_to(k).unwrap();
            assert_eq!(carousel.current_index(), k);
            assert!(!carousel.is_auto_playing());
            assert!(carousel.autoplay_schedule().is_none());
        }
    }
}

#[test]
fn half_density_counts() {
    let field = ParticleField::with_rng(
        AnimationConfig::default(),
        Viewport::default(),
        ChaCha8Rng::seed_from_u64(2024),
    )
    .unwrap();
    assert_eq!(field.particle_count(Layer::Hearts), 10);
    assert_eq!(field.particle_count(Layer::Petals), 7);
    assert_eq!(field.particle_count(Layer::Sparkles), 12);
}

#[test]
fn full_and_zero_density() {
    let mut field = ParticleField::with_rng(
        AnimationConfig {
            density: 1.0,
            ..AnimationConfig::default()
        },
        Viewport::default(),
        ChaCha8Rng::seed_from_u64(1),
    )
    .unwrap();
    assert_eq!(field.frames().count(), 20 + 15 + 25);

    field.set_density(0.0).unwrap();
    for layer in Layer::ALL {
        assert_eq!(field.particle_count(layer), 0);
    }

    field.set_density(0.5).unwrap();
    field.set_layer_enabled(Layer::Petals, false);
    field.set_layer_enabled(Layer::Petals, true);
    assert_eq!(field.particle_count(Layer::Petals), 7);
}
