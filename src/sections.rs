//! Navbar, content sections, contact form and footer

use crate::contact::{ContactForm, Interest, Notice};
use crate::content::{self, Section, NAV};
use crate::theme::{ColorMode, Palette};
use egui::{RichText, Stroke};

const CONTENT_MAX_WIDTH: f32 = 1100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    ScrollTo(Section),
    ToggleTheme,
}

pub fn navbar(ctx: &egui::Context, mode: ColorMode, palette: &Palette) -> Option<NavAction> {
    let mut action = None;

    egui::TopBottomPanel::top("navbar")
        .frame(
            egui::Frame::new()
                .fill(palette.background.gamma_multiply(0.92))
                .inner_margin(egui::Margin::symmetric(24, 12))
                .stroke(Stroke::new(1.0, palette.divider)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let brand = ui.add(
                    egui::Label::new(RichText::new(content::BRAND).size(20.0).strong())
                        .sense(egui::Sense::click()),
                );
                if brand.clicked() {
                    action = Some(NavAction::ScrollTo(Section::Home));
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(mode.toggled().label()).clicked() {
                        action = Some(NavAction::ToggleTheme);
                    }
                    ui.add_space(12.0);
                    // Right-to-left, so walk the entries backwards
                    for section in NAV.iter().rev() {
                        if ui.link(RichText::new(section.label()).color(palette.text)).clicked() {
                            action = Some(NavAction::ScrollTo(*section));
                        }
                    }
                });
            });
        });

    action
}

/// Centered column used by every section below the hero
pub fn centered<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> R {
    let width = ui.available_width().min(CONTENT_MAX_WIDTH);
    let margin = ((ui.available_width() - width) / 2.0).max(0.0);
    ui.horizontal(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_width(width);
            add_contents(ui)
        })
        .inner
    })
    .inner
}

/// Section heading; the returned response is the scroll target
pub fn heading(ui: &mut egui::Ui, eyebrow: &str, title: &str, palette: &Palette) -> egui::Response {
    ui.add_space(72.0);
    let response = ui.label(
        RichText::new(eyebrow.to_uppercase())
            .color(palette.primary)
            .monospace()
            .size(13.0),
    );
    ui.label(RichText::new(title).size(40.0).strong());
    ui.add_space(24.0);
    response
}

pub fn chip(ui: &mut egui::Ui, text: &str, palette: &Palette) {
    egui::Frame::new()
        .fill(palette.primary.gamma_multiply(0.12))
        .corner_radius(12)
        .inner_margin(egui::Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(12.0).color(palette.primary));
        });
}

fn card<R>(
    ui: &mut egui::Ui,
    palette: &Palette,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    egui::Frame::new()
        .fill(palette.paper)
        .stroke(Stroke::new(1.0, palette.divider))
        .corner_radius(16)
        .inner_margin(24)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui)
        })
        .inner
}

pub fn features(ui: &mut egui::Ui, palette: &Palette) {
    const PER_ROW: usize = 3;

    for row in content::FEATURES.chunks(PER_ROW) {
        ui.columns(PER_ROW, |columns| {
            for (ui, (title, body)) in columns.iter_mut().zip(row) {
                card(ui, palette, |ui| {
                    ui.vertical_centered(|ui| {
                        let (badge, _) =
                            ui.allocate_exact_size(egui::vec2(40.0, 40.0), egui::Sense::hover());
                        let painter = ui.painter();
                        painter.circle_filled(
                            badge.center(),
                            18.0,
                            palette.secondary.gamma_multiply(0.2),
                        );
                        painter.circle_stroke(
                            badge.center(),
                            10.0,
                            Stroke::new(2.0, palette.secondary),
                        );
                        ui.add_space(8.0);
                        ui.label(RichText::new(*title).size(18.0).strong());
                        ui.add_space(6.0);
                        ui.label(RichText::new(*body).color(palette.subtext));
                    });
                });
            }
        });
        ui.add_space(16.0);
    }
}

pub fn vision(ui: &mut egui::Ui, palette: &Palette) {
    ui.add_space(48.0);
    ui.vertical_centered(|ui| {
        ui.set_max_width(760.0);
        ui.label(
            RichText::new(content::VISION)
                .size(34.0)
                .italics()
                .color(palette.text),
        );
    });
    ui.add_space(48.0);
}

pub fn tech_stack(ui: &mut egui::Ui, palette: &Palette) {
    ui.label(RichText::new(content::STACK_BLURB).size(16.0).color(palette.subtext));
    ui.add_space(24.0);

    ui.columns(content::TECH_STACK.len(), |columns| {
        for (ui, tech) in columns.iter_mut().zip(&content::TECH_STACK) {
            let [r, g, b] = tech.color;
            let accent = egui::Color32::from_rgb(r, g, b);
            card(ui, palette, |ui| {
                ui.vertical_centered(|ui| {
                    let (badge, _) =
                        ui.allocate_exact_size(egui::vec2(40.0, 40.0), egui::Sense::hover());
                    let painter = ui.painter();
                    painter.circle_filled(badge.center(), 18.0, accent.gamma_multiply(0.15));
                    painter.circle_stroke(badge.center(), 12.0, Stroke::new(2.0, accent));
                    ui.add_space(8.0);
                    ui.label(RichText::new(tech.name).size(16.0).strong());
                    ui.label(RichText::new(tech.description).size(12.0).color(palette.subtext));
                });
            });
        }
    });
}

pub fn services(ui: &mut egui::Ui, palette: &Palette) {
    ui.columns(content::SERVICES.len(), |columns| {
        for (ui, service) in columns.iter_mut().zip(&content::SERVICES) {
            card(ui, palette, |ui| {
                ui.label(RichText::new(service.title).size(20.0).strong());
                ui.add_space(8.0);
                ui.label(RichText::new(service.description).color(palette.subtext));
                ui.add_space(12.0);
                ui.horizontal_wrapped(|ui| {
                    for tag in service.tags {
                        chip(ui, tag, palette);
                    }
                });
            });
        }
    });
}

pub fn insights(ui: &mut egui::Ui, palette: &Palette) {
    ui.columns(content::INSIGHTS.len(), |columns| {
        for (ui, insight) in columns.iter_mut().zip(&content::INSIGHTS) {
            card(ui, palette, |ui| {
                ui.horizontal(|ui| {
                    chip(ui, insight.category, palette);
                    ui.label(RichText::new(insight.date).size(12.0).color(palette.subtext));
                });
                ui.add_space(10.0);
                ui.label(RichText::new(insight.title).size(18.0).strong());
                ui.add_space(6.0);
                ui.label(RichText::new(insight.excerpt).color(palette.subtext));
            });
        }
    });
}

pub fn about(ui: &mut egui::Ui, palette: &Palette) {
    ui.label(RichText::new(content::TAGLINE).size(18.0).color(palette.subtext));
    ui.add_space(24.0);

    ui.columns(content::VALUES.len(), |columns| {
        for (ui, (title, body)) in columns.iter_mut().zip(&content::VALUES) {
            card(ui, palette, |ui| {
                ui.label(RichText::new(*title).size(18.0).strong());
                ui.add_space(6.0);
                ui.label(RichText::new(*body).color(palette.subtext));
            });
        }
    });

    ui.add_space(24.0);
    card(ui, palette, |ui| {
        ui.label(RichText::new(content::FOUNDER).size(22.0).strong());
        ui.label(RichText::new(content::FOUNDER_ROLE).color(palette.primary));
        ui.add_space(12.0);
        ui.label(RichText::new("Core Technologies").strong());
        ui.horizontal_wrapped(|ui| {
            for tech in content::CORE_TECHNOLOGIES {
                chip(ui, tech, palette);
            }
        });
    });
}

pub fn contact(ui: &mut egui::Ui, form: &mut ContactForm, palette: &Palette) {
    ui.columns(2, |columns| {
        let info = &mut columns[0];
        info.label(RichText::new(content::CONTACT_HEADLINE).size(32.0).strong());
        info.add_space(12.0);
        info.label(RichText::new(content::CONTACT_BLURB).color(palette.subtext));
        info.add_space(20.0);
        info.label(RichText::new("Email").strong());
        info.hyperlink_to(content::EMAIL, format!("mailto:{}", content::EMAIL));
        info.add_space(8.0);
        info.label(RichText::new("Location").strong());
        info.label(RichText::new(content::LOCATION).color(palette.subtext));

        card(&mut columns[1], palette, |ui| contact_form(ui, form, palette));
    });
}

fn contact_form(ui: &mut egui::Ui, form: &mut ContactForm, palette: &Palette) {
    let width = ui.available_width();

    ui.label("Name");
    ui.add(
        egui::TextEdit::singleline(&mut form.name)
            .hint_text("John Doe")
            .desired_width(width),
    );
    ui.add_space(8.0);

    ui.label("Email");
    ui.add(
        egui::TextEdit::singleline(&mut form.email)
            .hint_text("john@example.com")
            .desired_width(width),
    );
    ui.add_space(8.0);

    ui.label("Interest");
    egui::ComboBox::from_id_salt("contact-interest")
        .width(width)
        .selected_text(form.interest.label())
        .show_ui(ui, |ui| {
            for interest in Interest::ALL {
                ui.selectable_value(&mut form.interest, interest, interest.label());
            }
        });
    ui.add_space(8.0);

    ui.label("Message");
    ui.add(
        egui::TextEdit::multiline(&mut form.message)
            .hint_text("Tell us about your project...")
            .desired_rows(5)
            .desired_width(width),
    );
    ui.add_space(16.0);

    let send = egui::Button::new(RichText::new("Send Message").color(palette.background))
        .fill(palette.primary)
        .min_size(egui::vec2(width, 40.0));
    if ui.add(send).clicked() {
        let ctx = ui.ctx().clone();
        form.submit(content::EMAIL, |url| ctx.open_url(egui::OpenUrl::new_tab(url)));
    }

    match &form.notice {
        Some(Notice::Sent) => {
            ui.label(
                RichText::new("Opening your mail client. Thanks for reaching out!")
                    .color(palette.primary),
            );
        }
        Some(Notice::Failed(reason)) => {
            ui.label(
                RichText::new(format!("Something went wrong: {reason}")).color(palette.secondary),
            );
        }
        None => {}
    }
}

pub fn footer(ui: &mut egui::Ui, palette: &Palette) -> Option<NavAction> {
    let mut action = None;

    ui.add_space(72.0);
    ui.separator();
    ui.add_space(24.0);
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(content::BRAND).size(18.0).strong());
            ui.label(RichText::new(content::TAGLINE).size(12.0).color(palette.subtext));
        });
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            ui.hyperlink_to("GitHub", content::GITHUB);
            for section in [Section::Contact, Section::About, Section::Products] {
                if ui.link(section.label()).clicked() {
                    action = Some(NavAction::ScrollTo(section));
                }
            }
        });
    });
    ui.add_space(16.0);
    ui.label(
        RichText::new(format!("© 2026 {}. All rights reserved.", content::BRAND))
            .size(12.0)
            .color(palette.subtext),
    );
    ui.add_space(24.0);

    action
}
