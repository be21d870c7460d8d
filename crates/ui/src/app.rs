use eframe::egui;
use petalfolio_core::nav::NavCoordinator;
use petalfolio_core::{particles, ContentStore, MenuController, Particle, Section};

use crate::petals;
use crate::sections;
use crate::theme::{self, ThemeToken};

/// Main application state.
pub struct PortfolioApp {
    content: ContentStore,
    nav: NavCoordinator,
    menu: MenuController,
    /// Scattered once at construction, immutable for the whole session.
    particles: Vec<Particle>,
    /// Section requested via the URL fragment; applied once its anchor
    /// exists, dropped if it never resolves.
    deep_link: Option<Section>,
}

impl PortfolioApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(theme::blossom_visuals());
        theme::apply_blossom_typography(&cc.egui_ctx);
        egui_extras::install_image_loaders(&cc.egui_ctx);

        let mut rng = rand::thread_rng();

        Self {
            content: ContentStore::default(),
            nav: NavCoordinator::new(),
            menu: MenuController::new(),
            particles: particles::scatter(&mut rng),
            deep_link: Self::fragment_section(),
        }
    }

    /// On the web, `#projects`-style fragments select the initial section,
    /// the same way unknown fragments fall through to the default view.
    #[cfg(target_arch = "wasm32")]
    fn fragment_section() -> Option<Section> {
        let window = web_sys::window()?;
        let hash = window.location().hash().ok()?;
        let section = Section::from_fragment(&hash);
        if let Some(s) = section {
            web_sys::console::log_1(&format!("petalfolio: deep link to #{s}").into());
        }
        section
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn fragment_section() -> Option<Section> {
        None
    }

    fn navbar(&mut self, ctx: &egui::Context) {
        // Header bar is always transparent; the scrolled flag is tracked
        // but does not restyle it.
        let frame = egui::Frame::new()
            .fill(egui::Color32::TRANSPARENT)
            .inner_margin(egui::Margin::symmetric(16, 10));

        egui::TopBottomPanel::top("navbar")
            .frame(frame)
            .show_separator_line(false)
            .show(ctx, |ui| {
                let toggle_label = if self.menu.is_open() { "✕" } else { "☰" };
                let toggle = egui::Button::new(
                    egui::RichText::new(toggle_label)
                        .size(theme::FONT_HEADING)
                        .color(theme::resolve(ThemeToken::AccentPinkDeep)),
                )
                .fill(egui::Color32::TRANSPARENT);
                if ui.add(toggle).clicked() {
                    self.menu.toggle();
                }

                if self.menu.is_open() {
                    ui.add_space(4.0);
                    for section in Section::ALL {
                        let active = section == self.nav.active();
                        let text = egui::RichText::new(section.label()).color(if active {
                            theme::resolve(ThemeToken::AccentPink)
                        } else {
                            theme::resolve(ThemeToken::TextSecondary)
                        });
                        let fill = if active {
                            theme::resolve(ThemeToken::MenuEntryActive)
                        } else {
                            egui::Color32::TRANSPARENT
                        };
                        let entry = egui::Button::new(text)
                            .fill(fill)
                            .min_size(egui::vec2(160.0, 28.0));
                        if ui.add(entry).clicked() {
                            // One click, two effects: navigate and dismiss.
                            self.nav.select(section);
                            self.menu.close();
                        }
                    }
                    ui.add_space(4.0);
                }
            });
    }

    fn page(&mut self, ctx: &egui::Context) {
        let frame = egui::Frame::new().fill(theme::resolve(ThemeToken::Background));
        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            // Fixed petal layer: painted before the scroll content so it
            // sits under the page, and via the painter only so it can never
            // intercept input.
            let time = ui.input(|i| i.time);
            petals::paint(&ui.painter_at(ui.max_rect()), ui.max_rect(), &self.particles, time);

            // Apply a pending deep link once its anchor is registered.
            if let Some(section) = self.deep_link {
                if self.nav.select(section) {
                    self.deep_link = None;
                }
            }

            let scroll_target = self.nav.take_scroll_request();
            let mut navigate: Option<Section> = None;

            let output = egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for section in Section::ALL {
                        let inner =
                            ui.scope(|ui| sections::render(ui, section, &self.content));
                        self.nav.register_anchor(section);
                        if scroll_target == Some(section) {
                            inner.response.scroll_to_me(Some(egui::Align::Min));
                        }
                        if let Some(target) = inner.inner {
                            navigate = Some(target);
                        }
                    }
                });

            self.nav.on_scroll(output.state.offset.y);

            if let Some(target) = navigate {
                self.nav.select(target);
            }
        });
    }
}

impl eframe::App for PortfolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Escape is only polled while the menu is open — the closed menu
        // never observes the key.
        if self.menu.is_open() && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.menu.on_escape();
        }

        self.navbar(ctx);
        self.page(ctx);

        // Petals animate continuously.
        ctx.request_repaint();
    }
}
