use std::time::Duration;

use egui::{Color32, RichText, Sense, Slider};
use keepsake_core::{Carousel, Gallery, Hero, Layer, ParticleField};
use tracing::warn;

const ROSE: Color32 = Color32::from_rgb(0x9F, 0x12, 0x39);
const ACCENT: Color32 = Color32::from_rgb(0x8B, 0x4B, 0x8C);
const MUTED: Color32 = Color32::from_rgb(0x6B, 0x6B, 0x6B);
const CORAL: Color32 = Color32::from_rgb(0xFF, 0x7F, 0x7F);
const CARD_SIZE: [f32; 2] = [220.0, 140.0];
const GRID_COLUMNS: usize = 3;

/// Side panel exposing the shared animation settings.
pub(crate) fn controls(context: &egui::Context, field: &mut ParticleField, carousel: &mut Carousel) {
    egui::SidePanel::right("decorations")
        .resizable(false)
        .show(context, |ui| {
            ui.heading("Decorations");
            for layer in Layer::ALL {
                let mut enabled = field.config().layer_enabled(layer);
                let label = format!("{} ({})", title_case(layer.label()), field.particle_count(layer));
                if ui.checkbox(&mut enabled, label).changed() {
                    field.set_layer_enabled(layer, enabled);
                }
            }

            let mut density = field.config().density;
            if ui
                .add(Slider::new(&mut density, 0.0..=1.0).text("Density"))
                .changed()
            {
                if let Err(err) = field.set_density(density) {
                    warn!("density rejected: {err}");
                }
            }
            let mut speed = field.config().speed;
            if ui
                .add(Slider::new(&mut speed, 0.25..=3.0).text("Speed"))
                .changed()
            {
                if let Err(err) = field.set_speed(speed) {
                    warn!("speed rejected: {err}");
                }
            }

            ui.separator();
            let mut seconds = carousel.interval().as_secs_f32();
            if ui
                .add(Slider::new(&mut seconds, 1.0..=15.0).text("Slide seconds"))
                .changed()
            {
                if let Err(err) = carousel.set_interval(Duration::from_secs_f32(seconds)) {
                    warn!("interval rejected: {err}");
                }
            }
        });
}

/// Page content above the decorations: hero, carousel, then the reasons grid.
pub(crate) fn page(
    context: &egui::Context,
    hero: &Hero,
    carousel: &mut Carousel,
    gallery: &mut Gallery,
) {
    egui::CentralPanel::default()
        .frame(egui::Frame::NONE.inner_margin(egui::Margin::same(24)))
        .show(context, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    hero_banner(ui, hero);
                    ui.add_space(32.0);
                    ui.label(RichText::new("Our Memory Lane").size(36.0).color(ACCENT));
                    ui.add_space(12.0);
                    memory_carousel(ui, carousel);
                    ui.add_space(32.0);
                    ui.label(RichText::new("Why I Love You").size(36.0).color(ACCENT));
                    ui.label(RichText::new("Click on each card to discover the reasons").color(MUTED));
                    ui.add_space(12.0);
                    reasons_grid(ui, gallery);
                });
            });
        });
}

fn hero_banner(ui: &mut egui::Ui, hero: &Hero) {
    ui.add_space(48.0);
    ui.label(RichText::new(&hero.title).size(56.0).color(ROSE).strong());
    ui.add_space(12.0);
    ui.label(RichText::new(&hero.subtitle).size(22.0).italics().color(ACCENT));
}

fn memory_carousel(ui: &mut egui::Ui, carousel: &mut Carousel) {
    let item = carousel.current_item().clone();
    egui::Frame::group(ui.style())
        .fill(Color32::from_white_alpha(220))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(&item.milestone).color(CORAL).strong());
                ui.label(RichText::new(&item.date).color(MUTED).small());
                ui.label(RichText::new(format!("#{}", carousel.position())).strong());
            });
            ui.label(RichText::new(&item.caption).size(22.0).color(ACCENT))
                .on_hover_text(item.image.as_str());
        });

    ui.horizontal(|ui| {
        if ui.button("‹").clicked() {
            carousel.previous();
        }
        for index in 0..carousel.len() {
            let current = index == carousel.current_index();
            if ui.selectable_label(current, "●").clicked() {
                if let Err(err) = carousel.go_to(index) {
                    warn!("slide jump rejected: {err}");
                }
            }
        }
        if ui.button("›").clicked() {
            carousel.skip_forward();
        }
    });

    let label = if carousel.is_auto_playing() {
        "Pause Slideshow"
    } else {
        "Play Slideshow"
    };
    if ui.button(label).clicked() {
        carousel.toggle_autoplay();
    }
}

fn reasons_grid(ui: &mut egui::Ui, gallery: &mut Gallery) {
    let mut clicked = None;
    egui::Grid::new("reasons")
        .num_columns(GRID_COLUMNS)
        .spacing([12.0, 12.0])
        .show(ui, |ui| {
            for (i, reason) in gallery.reasons().iter().enumerate() {
                let [r, g, b] = reason.rgb();
                let (text, fill) = if gallery.is_flipped(reason.id) {
                    (RichText::new(&reason.description).color(MUTED), Color32::from_white_alpha(230))
                } else {
                    (
                        RichText::new(format!("{}\n{}", reason.icon, reason.title))
                            .size(20.0)
                            .color(ACCENT),
                        Color32::from_rgb(r, g, b),
                    )
                };
                let card = egui::Frame::NONE
                    .fill(fill)
                    .inner_margin(egui::Margin::same(12))
                    .show(ui, |ui| {
                        ui.set_min_size(CARD_SIZE.into());
                        ui.set_max_width(CARD_SIZE[0]);
                        ui.vertical_centered(|ui| ui.label(text));
                    });
                if card.response.interact(Sense::click()).clicked() {
                    clicked = Some(reason.id);
                }
                if (i + 1) % GRID_COLUMNS == 0 {
                    ui.end_row();
                }
            }
        });
    if let Some(id) = clicked {
        if let Err(err) = gallery.toggle(id) {
            warn!("card flip rejected: {err}");
        }
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
