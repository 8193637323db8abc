//! Product carousel cards and the detail modal

use crate::theme::Palette;
use egui::{Align2, Color32, FontId, Pos2, Rect, RichText, Sense, Shape, Stroke, Vec2};
use product_carousel::{Carousel, Product, SlotAnimator, SlotStyle};

const CARD_SIZE: Vec2 = Vec2::new(340.0, 400.0);
const STAGE_HEIGHT: f32 = 460.0;
const CARD_PADDING: f32 = 24.0;
/// How strongly yaw shortens the far edge of a card
const PERSPECTIVE: f32 = 0.35;

/// Carousel stage with prev/next controls. Returns true if the active index changed.
pub fn carousel(
    ui: &mut egui::Ui,
    carousel: &mut Carousel,
    animator: &mut SlotAnimator,
    palette: &Palette,
) -> bool {
    let width = ui.available_width();
    let (stage, _) = ui.allocate_exact_size(Vec2::new(width, STAGE_HEIGHT), Sense::hover());
    let center = stage.center();

    // Back to front so the centered card ends up on top
    let mut order: Vec<_> = carousel.slots().collect();
    order.sort_by_key(|(_, slot)| slot.depth());

    let mut clicked = None;
    for (index, slot) in order {
        let style = animator.style(index);
        if !style.visible {
            continue;
        }

        let card_center = center + Vec2::new(style.offset_x * CARD_SIZE.x, 0.0);
        let size = CARD_SIZE * style.scale;
        let rect = Rect::from_center_size(card_center, size);
        paint_card(ui, rect, &style, &carousel.items()[index], palette);

        if slot.is_interactive() {
            let response = ui
                .interact(rect, ui.id().with(("product-card", index)), Sense::click())
                .on_hover_cursor(egui::CursorIcon::PointingHand);
            if response.clicked() {
                clicked = Some(index);
            }
        }
    }

    if let Some(index) = clicked {
        carousel.click(index);
    }

    let mut moved = false;
    ui.horizontal(|ui| {
        let dots_width = carousel.len() as f32 * 16.0 + 80.0;
        ui.add_space(((width - dots_width) / 2.0).max(0.0));

        if ui.button(RichText::new("‹").size(22.0)).clicked() {
            carousel.prev();
            moved = true;
        }
        for index in 0..carousel.len() {
            let color = if index == carousel.active_index() {
                palette.primary
            } else {
                palette.divider
            };
            let (dot, _) = ui.allocate_exact_size(Vec2::splat(12.0), Sense::hover());
            ui.painter().circle_filled(dot.center(), 4.0, color);
        }
        if ui.button(RichText::new("›").size(22.0)).clicked() {
            carousel.next();
            moved = true;
        }
    });

    if moved {
        animator.sync(carousel);
    }
    moved
}

/// Corners of a card turned by `rotation_y` degrees, clockwise from top-left
fn card_quad(rect: Rect, rotation_y: f32) -> [Pos2; 4] {
    let yaw = rotation_y.to_radians();
    let half_w = rect.width() * 0.5 * yaw.cos();
    let half_h = rect.height() * 0.5;
    let skew = yaw.sin() * PERSPECTIVE * 0.5;
    let c = rect.center();

    // Positive yaw pushes the right edge away
    let left_h = half_h * (1.0 + skew);
    let right_h = half_h * (1.0 - skew);

    [
        Pos2::new(c.x - half_w, c.y - left_h),
        Pos2::new(c.x + half_w, c.y - right_h),
        Pos2::new(c.x + half_w, c.y + right_h),
        Pos2::new(c.x - half_w, c.y + left_h),
    ]
}

fn paint_card(ui: &egui::Ui, rect: Rect, style: &SlotStyle, product: &Product, palette: &Palette) {
    let painter = ui.painter();
    let alpha = style.opacity;
    let fade = |color: Color32| color.gamma_multiply(alpha);

    painter.add(Shape::convex_polygon(
        card_quad(rect, style.rotation_y).to_vec(),
        fade(palette.paper),
        Stroke::new(1.0, fade(palette.divider)),
    ));

    // Text is laid out in the unturned rect; the yaw is small enough to read fine
    let inner = rect.shrink(CARD_PADDING * style.scale);
    let scale = style.scale;
    let text_width = inner.width().max(40.0);
    let mut y = inner.top();

    let logo = Rect::from_min_size(inner.left_top(), Vec2::splat(48.0 * scale));
    painter.rect_filled(logo, 12.0 * scale, fade(palette.primary.gamma_multiply(0.25)));
    painter.text(
        logo.center(),
        Align2::CENTER_CENTER,
        monogram(product),
        FontId::proportional(22.0 * scale),
        fade(palette.primary),
    );
    painter.text(
        Pos2::new(inner.right(), y),
        Align2::RIGHT_TOP,
        &product.year,
        FontId::monospace(13.0 * scale),
        fade(palette.primary),
    );
    y += 64.0 * scale;

    painter.text(
        Pos2::new(inner.left(), y),
        Align2::LEFT_TOP,
        &product.title,
        FontId::proportional(26.0 * scale),
        fade(palette.text),
    );
    y += 38.0 * scale;

    let description = painter.layout(
        product.description.clone(),
        FontId::proportional(14.0 * scale),
        fade(palette.subtext),
        text_width,
    );
    let description_height = description.size().y;
    painter.galley(Pos2::new(inner.left(), y), description, fade(palette.subtext));
    y += description_height + 14.0 * scale;

    let (shown, more) = product.headline_features(3);
    for feature in shown {
        painter.circle_filled(
            Pos2::new(inner.left() + 3.0 * scale, y + 8.0 * scale),
            3.0 * scale,
            fade(palette.secondary),
        );
        painter.text(
            Pos2::new(inner.left() + 14.0 * scale, y),
            Align2::LEFT_TOP,
            feature,
            FontId::proportional(13.0 * scale),
            fade(palette.subtext),
        );
        y += 20.0 * scale;
    }
    if more > 0 {
        painter.text(
            Pos2::new(inner.left(), y + 4.0 * scale),
            Align2::LEFT_TOP,
            format!("+ {more} more features"),
            FontId::proportional(12.0 * scale),
            fade(palette.primary),
        );
    }

    let tags = product.tags.join("  ·  ");
    painter.text(
        Pos2::new(inner.left(), inner.bottom()),
        Align2::LEFT_BOTTOM,
        tags,
        FontId::proportional(12.0 * scale),
        fade(palette.primary),
    );
}

fn monogram(product: &Product) -> char {
    product.title.chars().next().unwrap_or('?')
}

/// Caption over the screenshot frame: position when there are screenshots, else the title
fn placeholder_caption(product: &Product, active_image: usize) -> String {
    match product.screenshots.len() {
        0 => product.title.clone(),
        count => format!("Screenshot {} / {}", active_image + 1, count),
    }
}

/// Detail view for the selected product, if any
pub fn detail_modal(ctx: &egui::Context, carousel: &mut Carousel, palette: &Palette) {
    let Some(product) = carousel.selected().cloned() else {
        return;
    };

    let response = egui::Modal::new(egui::Id::new("product-detail"))
        .backdrop_color(palette.overlay)
        .show(ctx, |ui| {
            ui.set_width(ctx.screen_rect().width().min(960.0) - 80.0);
            let mut close = false;

            ui.horizontal_top(|ui| {
                screenshots(ui, carousel, &product, palette);
                ui.add_space(24.0);
                ui.vertical(|ui| {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(&product.title).size(32.0).strong());
                        ui.label(RichText::new(&product.year).color(palette.primary).monospace());
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                            close = ui.button("✕").clicked();
                        });
                    });
                    ui.add_space(12.0);
                    ui.label(RichText::new(&product.long_description).color(palette.subtext).size(16.0));

                    ui.add_space(16.0);
                    ui.label(RichText::new("Key Features").strong().size(18.0));
                    for feature in &product.features {
                        ui.label(RichText::new(format!("•  {feature}")).color(palette.subtext));
                    }

                    ui.add_space(16.0);
                    ui.separator();
                    ui.label(RichText::new("Built With").strong().size(18.0));
                    ui.horizontal_wrapped(|ui| {
                        for tag in &product.tags {
                            crate::sections::chip(ui, tag, palette);
                        }
                    });
                });
            });
            close
        });

    if response.inner || response.should_close() {
        carousel.close();
    }
}

fn screenshots(ui: &mut egui::Ui, carousel: &mut Carousel, product: &Product, palette: &Palette) {
    let (area, _) = ui.allocate_exact_size(Vec2::new(420.0, 420.0), Sense::hover());
    let painter = ui.painter_at(area);
    painter.rect_filled(area, 16.0, palette.background);

    // References carry no bundled pixels; draw a neutral frame instead
    painter.rect_filled(area.shrink(24.0), 16.0, palette.primary.gamma_multiply(0.1));
    painter.text(
        area.center(),
        Align2::CENTER_CENTER,
        monogram(product),
        FontId::proportional(96.0),
        palette.primary.gamma_multiply(0.6),
    );
    painter.text(
        area.center_top() + Vec2::new(0.0, 40.0),
        Align2::CENTER_TOP,
        placeholder_caption(product, carousel.active_image_index()),
        FontId::proportional(14.0),
        palette.subtext,
    );

    let count = product.screenshots.len();
    // Navigation only makes sense with more than one screenshot
    if count < 2 {
        return;
    }

    let arrow = Vec2::splat(36.0);
    let prev = Rect::from_center_size(area.left_center() + Vec2::new(32.0, 0.0), arrow);
    let next = Rect::from_center_size(area.right_center() - Vec2::new(32.0, 0.0), arrow);
    if ui.put(prev, egui::Button::new("‹")).clicked() {
        carousel.prev_image();
    }
    if ui.put(next, egui::Button::new("›")).clicked() {
        carousel.next_image();
    }

    let dots_left = area.center().x - count as f32 * 8.0;
    for index in 0..count {
        let dot = Rect::from_center_size(
            Pos2::new(dots_left + index as f32 * 16.0 + 8.0, area.bottom() - 24.0),
            Vec2::splat(12.0),
        );
        let response = ui.interact(dot, ui.id().with(("screenshot-dot", index)), Sense::click());
        if response.clicked() {
            carousel.select_image(index);
        }
        let color = if index == carousel.active_image_index() {
            palette.primary
        } else {
            palette.divider
        };
        ui.painter().circle_filled(dot.center(), 4.0, color);
    }
}
