//! Hero section: particle field canvas with the headline on top

use crate::content::{HERO_CTA, HERO_LINES, HERO_SUBTITLE};
use crate::theme::Palette;
use egui::{Align2, FontId, Pos2, Rect, Sense, Stroke, Vec2};
use particle_simulation::ParticleField;

const LINK_ALPHA: f32 = 0.35;
const PARTICLE_ALPHA: f32 = 0.8;

pub struct HeroResponse {
    pub response: egui::Response,
    pub cta_clicked: bool,
}

fn to_pos(origin: Pos2, v: glam::Vec2) -> Pos2 {
    origin + Vec2::new(v.x, v.y)
}

/// Pointer position relative to the canvas, or `None` when it is off the canvas
fn canvas_pointer(rect: Rect, pos: Pos2) -> Option<glam::Vec2> {
    if !rect.contains(pos) {
        return None;
    }
    let local = pos - rect.min;
    Some(glam::Vec2::new(local.x, local.y))
}

/// Mount-on-first-show, follow the container width and pointer, then paint
pub fn hero(ui: &mut egui::Ui, field: &mut ParticleField, palette: &Palette) -> HeroResponse {
    let width = ui.available_width();
    let height = field.params().height;
    let (rect, response) = ui.allocate_exact_size(Vec2::new(width, height), Sense::hover());

    if field.is_mounted() {
        field.resize(rect.width());
    } else {
        field.mount(rect.width(), &mut rand::rng());
    }

    // False over the clipped strip under the navbar and under the modal
    if response.contains_pointer() {
        if let Some(local) = ui
            .input(|i| i.pointer.latest_pos())
            .and_then(|pos| canvas_pointer(rect, pos))
        {
            field.pointer_moved(local);
        }
    }

    paint_field(ui, rect, field, palette);
    let cta_clicked = paint_headline(ui, rect, palette);

    HeroResponse {
        response,
        cta_clicked,
    }
}

fn paint_field(ui: &egui::Ui, rect: Rect, field: &ParticleField, palette: &Palette) {
    let painter = ui.painter_at(rect);
    let color = palette.particle();
    let particles = field.particles();

    for link in field.connections() {
        let a = to_pos(rect.min, particles[link.a].position);
        let b = to_pos(rect.min, particles[link.b].position);
        painter.line_segment(
            [a, b],
            Stroke::new(1.0, color.gamma_multiply(link.opacity * LINK_ALPHA)),
        );
    }

    for particle in particles {
        painter.circle_filled(
            to_pos(rect.min, particle.position),
            particle.radius,
            color.gamma_multiply(PARTICLE_ALPHA),
        );
    }
}

fn paint_headline(ui: &mut egui::Ui, rect: Rect, palette: &Palette) -> bool {
    let painter = ui.painter_at(rect);
    let left = rect.left() + 64.0;
    let mut y = rect.top() + 80.0;

    let colors = [palette.text, palette.primary, palette.secondary];
    for (line, color) in HERO_LINES.iter().zip(colors) {
        painter.text(
            Pos2::new(left, y),
            Align2::LEFT_TOP,
            *line,
            FontId::proportional(84.0),
            color,
        );
        y += 92.0;
    }

    let subtitle = painter.layout(
        HERO_SUBTITLE.to_string(),
        FontId::proportional(18.0),
        palette.subtext,
        480.0_f32.min(rect.width() - 96.0).max(120.0),
    );
    let subtitle_height = subtitle.size().y;
    painter.galley(Pos2::new(left, y + 12.0), subtitle, palette.subtext);

    let cta = Rect::from_min_size(
        Pos2::new(left, y + subtitle_height + 36.0),
        Vec2::new(200.0, 44.0),
    );
    let button = egui::Button::new(egui::RichText::new(HERO_CTA).size(16.0).color(palette.background))
        .fill(palette.primary)
        .corner_radius(22.0);
    ui.put(cta, button).clicked()
}
