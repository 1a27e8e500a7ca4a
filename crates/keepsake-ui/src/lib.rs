//! egui surface for the keepsake page: particle background, carousel,
//! reasons grid and the decoration controls.

mod paint;
mod panels;

use std::sync::Arc;

use keepsake_core::{AppConfig, Carousel, ContentPack, Gallery, Hero, ParticleField};
use keepsake_platform::{AutoplayDriver, DisplaySurface, ResizeWatcher};
use tracing::{info, warn};

#[derive(Clone)]
struct EguiSurface(egui::Context);

impl DisplaySurface for EguiSurface {
    fn surface_size(&self) -> (f32, f32) {
        let rect = self.0.screen_rect();
        (rect.width(), rect.height())
    }

    fn request_redraw(&self) {
        self.0.request_repaint();
    }
}

/// Opens the window and blocks until it closes.
pub fn run(config: AppConfig, content: ContentPack) -> keepsake_platform::Result<()> {
    let field = ParticleField::mount(config.animation, config.viewport)?;
    let carousel = Carousel::new(content.memories, config.carousel)?;
    let gallery = Gallery::new(content.reasons);
    let hero = content.hero;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Keepsake")
            .with_inner_size([config.viewport.width, config.viewport.height]),
        ..Default::default()
    };
    let result = eframe::run_native(
        "Keepsake",
        native_options,
        Box::new(move |creation_context| {
            let surface = EguiSurface(creation_context.egui_ctx.clone());
            Ok(Box::new(KeepsakeApp::new(surface, hero, field, carousel, gallery)))
        }),
    );
    if let Err(err) = result {
        return Err(format!("window failed: {err}").into());
    }
    info!("window closed");
    Ok(())
}

pub struct KeepsakeApp {
    surface: EguiSurface,
    hero: Hero,
    field: ParticleField,
    carousel: Carousel,
    gallery: Gallery,
    resize: ResizeWatcher,
    // Its ticker is cancelled and joined with the app.
    autoplay: AutoplayDriver,
}

impl KeepsakeApp {
    fn new(
        surface: EguiSurface,
        hero: Hero,
        field: ParticleField,
        carousel: Carousel,
        gallery: Gallery,
    ) -> Self {
        let autoplay = AutoplayDriver::new(Arc::new(surface.clone()));
        Self {
            surface,
            hero,
            field,
            carousel,
            gallery,
            resize: ResizeWatcher::new(),
            autoplay,
        }
    }
}

impl eframe::App for KeepsakeApp {
    fn update(&mut self, context: &egui::Context, _frame: &mut eframe::Frame) {
        self.autoplay.pump(&mut self.carousel);

        let (width, height) = self.surface.surface_size();
        if let Some(viewport) = self.resize.observe(width, height) {
            self.field.resize(viewport);
        }
        self.field.tick(context.input(|i| i.stable_dt));

        paint::particles(context, &self.field);
        panels::controls(context, &mut self.field, &mut self.carousel);
        panels::page(context, &self.hero, &mut self.carousel, &mut self.gallery);

        if let Err(err) = self.autoplay.sync(&self.carousel) {
            warn!("failed to start autoplay timer: {err}");
        }
        // The background is always moving.
        context.request_repaint();
    }
}
