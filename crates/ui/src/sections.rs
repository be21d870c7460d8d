//! The five content sections, rendered from the read-only content store.
//!
//! Each section is pure presentation: it reads the store, draws widgets, and
//! reports at most one navigation intent (the hero's chevron). All other
//! interactions are outbound links opened directly.

use egui::{CornerRadius, Frame, Margin, RichText, Stroke, vec2};
use petalfolio_core::content::{ContentStore, ExperienceEntry, Profile, Project};
use petalfolio_core::Section;

use crate::theme::{self, ThemeToken, FONT_BODY, FONT_CAPTION, FONT_DISPLAY, FONT_TITLE};

/// Maximum width of the centered content column.
const CONTENT_WIDTH: f32 = 880.0;

/// Render one section; returns a navigation intent if the user clicked an
/// in-page navigation control.
pub fn render(ui: &mut egui::Ui, section: Section, store: &ContentStore) -> Option<Section> {
    match section {
        Section::Home => home(ui, store.profile()),
        Section::About => {
            about(ui, store);
            None
        }
        Section::Projects => {
            projects(ui, store.projects());
            None
        }
        Section::Experience => {
            experience(ui, store.experience());
            None
        }
        Section::Contact => {
            contact(ui, store.profile());
            None
        }
    }
}

fn home(ui: &mut egui::Ui, profile: &Profile) -> Option<Section> {
    let mut navigate = None;
    let screen_h = ui.ctx().screen_rect().height();

    ui.vertical_centered(|ui| {
        ui.set_max_width(CONTENT_WIDTH);
        ui.add_space((screen_h * 0.18).max(48.0));

        // Portrait from a fixed relative asset path. If the asset is
        // missing the loader shows its placeholder; nothing to handle.
        ui.add(
            egui::Image::new(profile.portrait_path)
                .fit_to_exact_size(vec2(176.0, 176.0))
                .corner_radius(CornerRadius::same(88)),
        );
        ui.add_space(16.0);

        ui.label(
            RichText::new(profile.name)
                .size(FONT_DISPLAY)
                .strong()
                .color(theme::resolve(ThemeToken::AccentPink)),
        );
        ui.add_space(8.0);
        ui.label(
            RichText::new(profile.tagline)
                .size(FONT_BODY + 2.0)
                .color(theme::resolve(ThemeToken::TextSecondary)),
        );
        ui.add_space(24.0);

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing.x = 16.0;
            // Center the three round links by padding from the column edge.
            ui.add_space((ui.available_width() / 2.0 - 140.0).max(0.0));
            if round_link(ui, "GitHub", ThemeToken::AccentPinkDeep).clicked() {
                ui.ctx().open_url(egui::OpenUrl::new_tab(profile.github_url));
            }
            if round_link(ui, "LinkedIn", ThemeToken::AccentPurpleDeep).clicked() {
                ui.ctx()
                    .open_url(egui::OpenUrl::new_tab(profile.linkedin_url));
            }
            if round_link(ui, "Email", ThemeToken::AccentPinkDeep).clicked() {
                ui.ctx().open_url(egui::OpenUrl::same_tab(profile.mailto()));
            }
        });

        ui.add_space((screen_h * 0.16).max(40.0));
        if ui
            .button(RichText::new("⌄").size(FONT_TITLE))
            .on_hover_text("Scroll to About section")
            .clicked()
        {
            navigate = Some(Section::About);
        }
    });

    navigate
}

fn about(ui: &mut egui::Ui, store: &ContentStore) {
    let profile = store.profile();
    section_heading(ui, "About Me");

    ui.vertical_centered(|ui| {
        ui.set_max_width(CONTENT_WIDTH);

        ui.columns(2, |cols| {
            card(&mut cols[0], ThemeToken::BorderPink, |ui| {
                card_title(ui, "🎓 Education");
                ui.label(
                    RichText::new(profile.school)
                        .color(theme::resolve(ThemeToken::AccentPurpleDeep))
                        .strong(),
                );
                ui.label(profile.degree);
                ui.label(
                    RichText::new(profile.graduation)
                        .size(FONT_CAPTION)
                        .color(theme::resolve(ThemeToken::TextMuted)),
                );
            });
            card(&mut cols[1], ThemeToken::BorderPurple, |ui| {
                card_title(ui, "💻 Focus Areas");
                for area in profile.focus_areas {
                    ui.label(format!("🌸 {area}"));
                }
            });
        });

        ui.add_space(12.0);
        card(ui, ThemeToken::BorderPink, |ui| {
            ui.vertical_centered(|ui| {
                card_title(ui, "Technical Skills");
            });
            for category in store.skills() {
                ui.label(
                    RichText::new(capitalize(category.name))
                        .strong()
                        .color(theme::resolve(ThemeToken::AccentPinkDeep)),
                );
                ui.horizontal_wrapped(|ui| {
                    for skill in category.items {
                        chip(ui, skill, ThemeToken::ChipPinkFill, ThemeToken::ChipPinkBorder);
                    }
                });
                ui.add_space(6.0);
            }
        });
    });
}

fn projects(ui: &mut egui::Ui, projects: &[Project]) {
    section_heading(ui, "Featured Projects");

    ui.vertical_centered(|ui| {
        ui.set_max_width(CONTENT_WIDTH);
        for project in projects {
            card(ui, ThemeToken::BorderPink, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(project.title)
                            .size(FONT_TITLE - 6.0)
                            .strong()
                            .color(theme::resolve(ThemeToken::AccentPurpleDeep)),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(project.period)
                                .size(FONT_CAPTION)
                                .color(theme::resolve(ThemeToken::TextMuted)),
                        );
                    });
                });
                ui.label(project.description);
                ui.add_space(4.0);
                ui.horizontal_wrapped(|ui| {
                    for tech in project.tech {
                        chip(
                            ui,
                            tech,
                            ThemeToken::ChipPurpleFill,
                            ThemeToken::ChipPurpleBorder,
                        );
                    }
                });
                ui.add_space(4.0);
                for highlight in project.highlights {
                    ui.label(
                        RichText::new(format!("🌸 {highlight}"))
                            .size(FONT_CAPTION)
                            .color(theme::resolve(ThemeToken::TextSecondary)),
                    );
                }
            });
            ui.add_space(12.0);
        }
    });
}

fn experience(ui: &mut egui::Ui, entries: &[ExperienceEntry]) {
    section_heading(ui, "Experience");

    ui.vertical_centered(|ui| {
        ui.set_max_width(CONTENT_WIDTH);
        for entry in entries {
            card(ui, ThemeToken::BorderPurple, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        RichText::new(format!("💼 {}", entry.role))
                            .size(FONT_TITLE - 8.0)
                            .strong()
                            .color(theme::resolve(ThemeToken::AccentPurpleDeep)),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(entry.period)
                                .size(FONT_CAPTION)
                                .color(theme::resolve(ThemeToken::TextMuted)),
                        );
                    });
                });
                ui.label(RichText::new(entry.company).strong());
                ui.label(
                    RichText::new(entry.description)
                        .color(theme::resolve(ThemeToken::TextSecondary)),
                );
                ui.add_space(4.0);
                for achievement in entry.achievements {
                    ui.label(
                        RichText::new(format!("🌸 {achievement}"))
                            .size(FONT_CAPTION)
                            .color(theme::resolve(ThemeToken::TextSecondary)),
                    );
                }
            });
            ui.add_space(12.0);
        }
    });
}

fn contact(ui: &mut egui::Ui, profile: &Profile) {
    section_heading(ui, "Let's Connect");

    ui.vertical_centered(|ui| {
        ui.set_max_width(CONTENT_WIDTH);
        ui.label(
            RichText::new(profile.contact_blurb)
                .size(FONT_BODY + 2.0)
                .color(theme::resolve(ThemeToken::TextSecondary)),
        );
        ui.add_space(24.0);

        ui.columns(3, |cols| {
            if contact_card(&mut cols[0], ThemeToken::BorderPink, "✉ Email", profile.email) {
                cols[0].ctx().open_url(egui::OpenUrl::same_tab(profile.mailto()));
            }
            if contact_card(
                &mut cols[1],
                ThemeToken::BorderPurple,
                "in LinkedIn",
                profile.linkedin_handle,
            ) {
                cols[1]
                    .ctx()
                    .open_url(egui::OpenUrl::new_tab(profile.linkedin_url));
            }
            if contact_card(
                &mut cols[2],
                ThemeToken::BorderPink,
                "⌂ GitHub",
                profile.github_handle,
            ) {
                cols[2]
                    .ctx()
                    .open_url(egui::OpenUrl::new_tab(profile.github_url));
            }
        });
        ui.add_space(64.0);
    });
}

// ── shared widgets ─────────────────────────────────────────────────────────

fn section_heading(ui: &mut egui::Ui, title: &str) {
    ui.add_space(64.0);
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new(title)
                .size(FONT_TITLE)
                .strong()
                .color(theme::resolve(ThemeToken::AccentPinkDeep)),
        );
    });
    ui.add_space(24.0);
}

fn card_title(ui: &mut egui::Ui, title: &str) {
    ui.label(
        RichText::new(title)
            .size(FONT_TITLE - 8.0)
            .strong()
            .color(theme::resolve(ThemeToken::TextPrimary)),
    );
    ui.add_space(6.0);
}

fn card(ui: &mut egui::Ui, border: ThemeToken, add_contents: impl FnOnce(&mut egui::Ui)) {
    Frame::new()
        .fill(theme::resolve(ThemeToken::Surface))
        .stroke(Stroke::new(1.0, theme::resolve(border)))
        .corner_radius(CornerRadius::same(18))
        .inner_margin(Margin::same(20))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}

fn chip(ui: &mut egui::Ui, text: &str, fill: ThemeToken, border: ThemeToken) {
    Frame::new()
        .fill(theme::resolve(fill))
        .stroke(Stroke::new(1.0, theme::resolve(border)))
        .corner_radius(CornerRadius::same(12))
        .inner_margin(Margin::symmetric(10, 3))
        .show(ui, |ui| {
            ui.label(
                RichText::new(text)
                    .size(FONT_CAPTION)
                    .color(theme::resolve(ThemeToken::TextSecondary)),
            );
        });
}

fn round_link(ui: &mut egui::Ui, label: &str, color: ThemeToken) -> egui::Response {
    ui.add(
        egui::Button::new(RichText::new(label).color(theme::resolve(color)))
            .fill(theme::resolve(ThemeToken::ChipPinkFill))
            .corner_radius(CornerRadius::same(16)),
    )
}

/// Clickable contact tile; returns whether it was clicked.
fn contact_card(ui: &mut egui::Ui, border: ThemeToken, title: &str, detail: &str) -> bool {
    let response = ui
        .scope(|ui| {
            card(ui, border, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(title).strong());
                    ui.label(
                        RichText::new(detail)
                            .size(FONT_CAPTION)
                            .color(theme::resolve(ThemeToken::AccentPurpleDeep)),
                    );
                });
            });
        })
        .response;
    let response = response.interact(egui::Sense::click());
    if response.hovered() {
        ui.painter().rect_stroke(
            response.rect,
            CornerRadius::same(18),
            Stroke::new(1.5, theme::resolve(ThemeToken::AccentPink)),
            egui::StrokeKind::Outside,
        );
    }
    response.clicked()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_handles_ascii_and_empty() {
        assert_eq!(capitalize("languages"), "Languages");
        assert_eq!(capitalize("databases"), "Databases");
        assert_eq!(capitalize(""), "");
    }
}
