//! Top-level page state, one `frame` call per redraw

use crate::backdrop;
use crate::contact::ContactForm;
use crate::content::{self, Section};
use crate::preferences::Preferences;
use crate::sections::{self, NavAction};
use crate::showcase;
use crate::theme::{self, ColorMode, Palette};
use egui::{Align, Key};
use particle_simulation::{frame_delta, FieldParams, ParticleField};
use product_carousel::{Carousel, CarouselError, SlotAnimator, Transition};

pub struct Site {
    mode: ColorMode,
    preferences: Preferences,
    field: ParticleField,
    carousel: Carousel,
    animator: SlotAnimator,
    contact: ContactForm,
    pending_scroll: Option<Section>,
    theme_dirty: bool,
}

impl Site {
    pub fn new(preferences: Preferences) -> Result<Self, CarouselError> {
        let carousel = Carousel::new(content::products())?
            .with_on_open(|product| log::info!("Opening details for {}", product.title));
        let animator = SlotAnimator::new(&carousel, Transition::standard());

        Ok(Self {
            mode: preferences.theme,
            preferences,
            field: ParticleField::new(FieldParams::default()),
            carousel,
            animator,
            contact: ContactForm::default(),
            pending_scroll: None,
            theme_dirty: true,
        })
    }

    pub fn mode(&self) -> ColorMode {
        self.mode
    }

    pub fn palette(&self) -> Palette {
        Palette::for_mode(self.mode)
    }

    pub fn is_modal_open(&self) -> bool {
        self.carousel.is_open()
    }

    pub fn toggle_theme(&mut self) {
        self.mode = self.mode.toggled();
        self.theme_dirty = true;
        log::debug!("theme -> {:?}", self.mode);

        self.preferences.theme = self.mode;
        if let Err(e) = self.preferences.save() {
            log::warn!("Failed to save preferences: {}", e);
        }
    }

    /// Stop the backdrop; called before the window goes away
    pub fn shutdown(&mut self) {
        self.field.unmount();
    }

    pub fn frame(&mut self, ctx: &egui::Context, dt_secs: f32) {
        if self.theme_dirty {
            theme::apply(ctx, self.mode);
            self.theme_dirty = false;
        }

        self.field.step(frame_delta(dt_secs));
        self.animator.advance(dt_secs);
        self.handle_keys(ctx);

        let palette = self.palette();

        match sections::navbar(ctx, self.mode, &palette) {
            Some(NavAction::ToggleTheme) => self.toggle_theme(),
            Some(NavAction::ScrollTo(section)) => self.pending_scroll = Some(section),
            None => {}
        }

        let mut footer_action = None;
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(palette.background))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        footer_action = self.page(ui, &palette);
                    });
            });

        if let Some(NavAction::ScrollTo(section)) = footer_action {
            self.pending_scroll = Some(section);
        }

        showcase::detail_modal(ctx, &mut self.carousel, &palette);

        // Keep the backdrop and tweens moving
        ctx.request_repaint();
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }

        let (left, right) = ctx.input(|i| {
            (
                i.key_pressed(Key::ArrowLeft),
                i.key_pressed(Key::ArrowRight),
            )
        });
        if self.carousel.is_open() {
            if left {
                self.carousel.prev_image();
            }
            if right {
                self.carousel.next_image();
            }
        } else if left || right {
            if left {
                self.carousel.prev();
            }
            if right {
                self.carousel.next();
            }
            self.animator.sync(&self.carousel);
        }
    }

    fn scroll_target(&mut self, section: Section, response: &egui::Response) {
        if self.pending_scroll == Some(section) {
            response.scroll_to_me(Some(Align::TOP));
            self.pending_scroll = None;
        }
    }

    fn page(&mut self, ui: &mut egui::Ui, palette: &Palette) -> Option<NavAction> {
        let hero = backdrop::hero(ui, &mut self.field, palette);
        self.scroll_target(Section::Home, &hero.response);
        if hero.cta_clicked {
            self.pending_scroll = Some(Section::Products);
        }

        sections::centered(ui, |ui| {
            let heading = sections::heading(ui, "Our Work", "Featured Products", palette);
            self.scroll_target(Section::Products, &heading);
            showcase::carousel(ui, &mut self.carousel, &mut self.animator, palette);

            let heading = sections::heading(ui, "Our Promise", "Why Choose Us", palette);
            self.scroll_target(Section::Features, &heading);
            sections::features(ui, palette);

            let heading = sections::heading(ui, "Where We're Going", "Vision", palette);
            self.scroll_target(Section::Vision, &heading);
            sections::vision(ui, palette);

            let heading = sections::heading(ui, "Under The Hood", content::STACK_HEADLINE, palette);
            self.scroll_target(Section::Stack, &heading);
            sections::tech_stack(ui, palette);

            let heading = sections::heading(ui, "What We Do", "Services", palette);
            self.scroll_target(Section::Services, &heading);
            sections::services(ui, palette);

            let heading = sections::heading(ui, "From the Lab", "Insights", palette);
            self.scroll_target(Section::Insights, &heading);
            sections::insights(ui, palette);

            let heading = sections::heading(ui, "Who We Are", "About", palette);
            self.scroll_target(Section::About, &heading);
            sections::about(ui, palette);

            let heading = sections::heading(ui, "Get in Touch", "Contact", palette);
            self.scroll_target(Section::Contact, &heading);
            sections::contact(ui, &mut self.contact, palette);

            sections::footer(ui, palette)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_starts_with_products() {
        let site = Site::new(Preferences::default()).unwrap();
        assert_eq!(site.carousel.len(), 3);
        assert_eq!(site.mode(), ColorMode::Dark);
        assert!(!site.is_modal_open());
        assert!(!site.field.is_mounted());
    }

    #[test]
    fn test_light_preference_is_used() {
        let site = Site::new(Preferences {
            theme: ColorMode::Light,
        })
        .unwrap();
        assert_eq!(site.mode(), ColorMode::Light);
        assert_eq!(site.palette(), Palette::for_mode(ColorMode::Light));
    }

    #[test]
    fn test_shutdown_unmounts_field() {
        let mut site = Site::new(Preferences::default()).unwrap();
        site.field.mount(800.0, &mut rand::rng());
        assert!(site.field.is_mounted());

        site.shutdown();
        assert!(!site.field.is_mounted());
    }
}
