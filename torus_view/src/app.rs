// app.rs - eframe front end: ticks the simulation and draws it on a torus

use conway::{CycleDetector, Grid, Rgba, SimConfig, Simulation};
use eframe::egui;
use egui::{Align2, Color32, ColorImage, FontId, Key, PointerButton, Sense, Shape, TextureHandle, TextureOptions, vec2};
use tracing::{error, info, warn};

use crate::camera::OrbitCamera;
use crate::clock::TickClock;
use crate::mesh::Torus;

const TITLE: &str = "Torus Game of Life";
const BACKGROUND: Color32 = Color32::from_rgb(10, 10, 15);
/// Scroll distance egui reports for one wheel notch.
const SCROLL_PER_NOTCH: f32 = 50.0;

fn color32(color: Rgba) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

/// The grid's color buffer as an egui image, one texel per cell.
fn color_image(grid: &Grid) -> ColorImage {
    ColorImage::from_rgba_unmultiplied([grid.width(), grid.height()], grid.color_bytes())
}

pub struct TorusApp {
    sim: Box<dyn Simulation>,
    config: SimConfig,
    clock: TickClock,
    camera: OrbitCamera,
    torus: Torus,
    texture: TextureHandle,
    cycles: CycleDetector,
    settled: bool,
    fps: f32,
}

impl TorusApp {
    pub fn new(cc: &eframe::CreationContext<'_>, config: SimConfig, sim: Box<dyn Simulation>) -> Self {
        let texture = cc
            .egui_ctx
            .load_texture("life", color_image(sim.grid()), TextureOptions::NEAREST);

        Self {
            clock: TickClock::new(config.tick_seconds),
            camera: OrbitCamera::default(),
            torus: Torus::default(),
            cycles: CycleDetector::default(),
            settled: false,
            fps: 0.0,
            texture,
            config,
            sim,
        }
    }

    fn upload(&mut self) {
        self.texture
            .set(color_image(self.sim.grid()), TextureOptions::NEAREST);
    }

    fn tick(&mut self) {
        if let Err(err) = self.sim.update_generation() {
            error!(%err, "step failed, pausing");
            self.clock.paused = true;
            return;
        }
        self.upload();

        if self.cycles.observe(self.sim.grid()) && !self.settled {
            self.settled = true;
            info!(generation = self.sim.grid().generation(), "simulation settled into a cycle");
        }
    }

    fn restart(&mut self) {
        self.cycles.reset();
        self.settled = false;
        self.upload();
    }

    fn reseed(&mut self) {
        match self.config.seed_grid(self.sim.grid_mut()) {
            Ok(()) => info!(population = self.sim.grid().population(), "reseeded"),
            Err(err) => warn!(%err, "reseed failed"),
        }
        self.restart();
    }

    fn clear(&mut self) {
        self.sim.clear_grid();
        info!("cleared");
        self.restart();
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        let (pause, reseed, clear) = ctx.input(|i| {
            (i.key_pressed(Key::Space), i.key_pressed(Key::R), i.key_pressed(Key::C))
        });
        if pause {
            self.clock.toggle();
            info!(paused = self.clock.paused, "toggled");
        }
        if reseed {
            self.reseed();
        }
        if clear {
            self.clear();
        }
    }
}

impl eframe::App for TorusApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dt = ctx.input(|i| i.unstable_dt);
        if dt > 0.0 {
            self.fps = if self.fps == 0.0 { 1.0 / dt } else { self.fps * 0.9 + 0.1 / dt };
        }

        self.handle_keys(ctx);
        if self.clock.advance(dt) {
            self.tick();
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());

                // Orbit controls
                if response.dragged_by(PointerButton::Primary) {
                    let delta = response.drag_delta();
                    self.camera.drag(delta.x, delta.y);
                }
                if response.hovered() {
                    let scroll = ctx.input(|i| i.scroll_delta.y);
                    if scroll != 0.0 {
                        self.camera.zoom(scroll / SCROLL_PER_NOTCH);
                    }
                }

                let rect = response.rect;
                let view = self.camera.view(rect.width() / rect.height().max(1.0));
                painter.add(Shape::mesh(self.torus.project(&view, rect, self.texture.id())));

                let accent = color32(self.config.foreground);
                painter.text(
                    rect.left_top() + vec2(20.0, 20.0),
                    Align2::LEFT_TOP,
                    TITLE,
                    FontId::proportional(20.0),
                    accent,
                );
                painter.text(
                    rect.right_top() + vec2(-20.0, 20.0),
                    Align2::RIGHT_TOP,
                    format!("{:.0} FPS", self.fps),
                    FontId::proportional(20.0),
                    Color32::LIGHT_GREEN,
                );

                let grid = self.sim.grid();
                let status = format!(
                    "Generation: {}   Live cells: {}{}",
                    grid.generation(),
                    grid.population(),
                    if self.clock.paused { "   (paused)" } else { "" },
                );
                painter.text(
                    rect.left_bottom() + vec2(20.0, -20.0),
                    Align2::LEFT_BOTTOM,
                    status,
                    FontId::proportional(14.0),
                    Color32::GRAY,
                );
            });

        // Keep the simulation ticking without input events
        ctx.request_repaint();
    }
}
