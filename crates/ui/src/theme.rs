//! Blossom palette: semantic tokens resolved to egui colors, plus the
//! widget visuals and typography applied at startup.

/// Resolved RGBA color for egui rendering.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ResolvedColor {
    const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_color32(self) -> egui::Color32 {
        egui::Color32::from_rgba_unmultiplied(self.r, self.g, self.b, self.a)
    }
}

/// Semantic color tokens resolved by the active palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeToken {
    Background,
    Surface,
    BorderPink,
    BorderPurple,

    AccentPink,
    AccentPinkDeep,
    AccentPurple,
    AccentPurpleDeep,

    TextPrimary,
    TextSecondary,
    TextMuted,

    ChipPinkFill,
    ChipPinkBorder,
    ChipPurpleFill,
    ChipPurpleBorder,

    MenuEntryActive,

    // Petal layer
    LeafFill,
    LeafVein,
    PetalPink,
    PetalRose,
    FlowerCore,
}

pub fn resolve(token: ThemeToken) -> egui::Color32 {
    use ThemeToken::*;
    match token {
        Background => ResolvedColor::rgb(0xfd, 0xf5, 0xfa), // blush white
        Surface => ResolvedColor::rgba(0xff, 0xff, 0xff, 210),
        BorderPink => ResolvedColor::rgb(0xfb, 0xcf, 0xe8),
        BorderPurple => ResolvedColor::rgb(0xe9, 0xd5, 0xff),

        AccentPink => ResolvedColor::rgb(0xec, 0x48, 0x99),
        AccentPinkDeep => ResolvedColor::rgb(0xdb, 0x27, 0x77),
        AccentPurple => ResolvedColor::rgb(0xa8, 0x55, 0xf7),
        AccentPurpleDeep => ResolvedColor::rgb(0x93, 0x33, 0xea),

        TextPrimary => ResolvedColor::rgb(0x1f, 0x29, 0x37),
        TextSecondary => ResolvedColor::rgb(0x4b, 0x55, 0x63),
        TextMuted => ResolvedColor::rgb(0x6b, 0x72, 0x80),

        ChipPinkFill => ResolvedColor::rgb(0xfc, 0xe7, 0xf3),
        ChipPinkBorder => ResolvedColor::rgb(0xf9, 0xa8, 0xd4),
        ChipPurpleFill => ResolvedColor::rgb(0xf3, 0xe8, 0xff),
        ChipPurpleBorder => ResolvedColor::rgb(0xd8, 0xb4, 0xfe),

        MenuEntryActive => ResolvedColor::rgba(0xff, 0xff, 0xff, 60),

        LeafFill => ResolvedColor::rgb(0x7f, 0xb0, 0x69),
        LeafVein => ResolvedColor::rgb(0x5a, 0x90, 0x48),
        PetalPink => ResolvedColor::rgb(0xff, 0xc0, 0xcb),
        PetalRose => ResolvedColor::rgb(0xff, 0xb3, 0xd9),
        FlowerCore => ResolvedColor::rgb(0xff, 0xd7, 0x00),
    }
    .to_color32()
}

// ── Typography scale ───────────────────────────────────────────────────────

pub const FONT_DISPLAY: f32 = 42.0;
pub const FONT_TITLE: f32 = 28.0;
pub const FONT_HEADING: f32 = 18.0;
pub const FONT_BODY: f32 = 14.0;
pub const FONT_CAPTION: f32 = 12.0;

// ── egui visual presets ────────────────────────────────────────────────────

/// Blossom light visuals for egui widgets.
pub fn blossom_visuals() -> egui::Visuals {
    let mut v = egui::Visuals::light();
    v.panel_fill = resolve(ThemeToken::Background);
    v.window_fill = egui::Color32::WHITE;
    v.extreme_bg_color = egui::Color32::WHITE;
    v.faint_bg_color = resolve(ThemeToken::ChipPinkFill);
    v.widgets.noninteractive.fg_stroke =
        egui::Stroke::new(1.0, resolve(ThemeToken::TextSecondary));
    v.widgets.noninteractive.bg_stroke =
        egui::Stroke::new(1.0, resolve(ThemeToken::BorderPink));
    v.widgets.inactive.bg_fill = resolve(ThemeToken::ChipPinkFill);
    v.widgets.inactive.weak_bg_fill = resolve(ThemeToken::ChipPinkFill);
    v.widgets.inactive.fg_stroke = egui::Stroke::new(1.0, resolve(ThemeToken::TextSecondary));
    v.widgets.hovered.bg_fill = resolve(ThemeToken::ChipPinkBorder);
    v.widgets.hovered.weak_bg_fill = resolve(ThemeToken::ChipPinkBorder);
    v.widgets.hovered.fg_stroke = egui::Stroke::new(1.0, resolve(ThemeToken::TextPrimary));
    v.widgets.active.bg_fill = resolve(ThemeToken::AccentPink);
    v.widgets.active.fg_stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);
    v.selection.bg_fill = resolve(ThemeToken::MenuEntryActive);
    v.selection.stroke = egui::Stroke::new(1.0, resolve(ThemeToken::AccentPink));
    v.window_corner_radius = egui::CornerRadius::same(16);
    v.menu_corner_radius = egui::CornerRadius::same(12);
    v.widgets.noninteractive.corner_radius = egui::CornerRadius::same(10);
    v.widgets.inactive.corner_radius = egui::CornerRadius::same(10);
    v.widgets.hovered.corner_radius = egui::CornerRadius::same(10);
    v.widgets.active.corner_radius = egui::CornerRadius::same(10);
    v.widgets.open.corner_radius = egui::CornerRadius::same(10);
    v.hyperlink_color = resolve(ThemeToken::AccentPurple);
    v.warn_fg_color = egui::Color32::from_rgb(230, 170, 0);
    v.error_fg_color = egui::Color32::from_rgb(211, 47, 47);
    v
}

/// Apply the project's typography scale to egui styles.
pub fn apply_blossom_typography(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.text_styles.insert(
        egui::TextStyle::Heading,
        egui::FontId::proportional(FONT_HEADING),
    );
    style
        .text_styles
        .insert(egui::TextStyle::Body, egui::FontId::proportional(FONT_BODY));
    style.text_styles.insert(
        egui::TextStyle::Button,
        egui::FontId::proportional(FONT_BODY),
    );
    style.text_styles.insert(
        egui::TextStyle::Small,
        egui::FontId::proportional(FONT_CAPTION),
    );
    style.spacing.item_spacing = egui::vec2(8.0, 8.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);
    style.spacing.interact_size.y = 28.0;
    ctx.set_style(style);
}
