// Icon component.
//
// Inline SVG with `stroke="currentColor"`, so the wrapping element's color
// style (a theme signal) drives the stroke. Markup is embedded as consts
// rather than fetched, keeping icons available before any asset roundtrip.

use crate::tokens::*;
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconName {
    ArrowRight,
    Check,
    ChevronDown,
    ChevronRight,
    ChevronUp,
    CircleAlert,
    CircleCheck,
    Code,
    Copy,
    ExternalLink,
    House,
    Image,
    Info,
    Menu,
    Moon,
    Search,
    Sliders,
    Sun,
    TriangleAlert,
    X,
    Zap,
}

const SVG_ATTRS: &str = r#"xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round""#;

impl IconName {
    fn markup(self) -> String {
        let body = match self {
            IconName::ArrowRight => r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#,
            IconName::Check => r#"<path d="M20 6 9 17l-5-5"/>"#,
            IconName::ChevronDown => r#"<path d="m6 9 6 6 6-6"/>"#,
            IconName::ChevronRight => r#"<path d="m9 18 6-6-6-6"/>"#,
            IconName::ChevronUp => r#"<path d="m18 15-6-6-6 6"/>"#,
            IconName::CircleAlert => {
                r#"<circle cx="12" cy="12" r="10"/><path d="M12 8v4"/><path d="M12 16h.01"/>"#
            }
            IconName::CircleCheck => {
                r#"<circle cx="12" cy="12" r="10"/><path d="m9 12 2 2 4-4"/>"#
            }
            IconName::Code => r#"<path d="m16 18 6-6-6-6"/><path d="m8 6-6 6 6 6"/>"#,
            IconName::Copy => {
                r#"<rect width="14" height="14" x="8" y="8" rx="2" ry="2"/><path d="M4 16c-1.1 0-2-.9-2-2V4c0-1.1.9-2 2-2h10c1.1 0 2 .9 2 2"/>"#
            }
            IconName::ExternalLink => {
                r#"<path d="M15 3h6v6"/><path d="M10 14 21 3"/><path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/>"#
            }
            IconName::House => {
                r#"<path d="M3 10a2 2 0 0 1 .7-1.5l7-6a2 2 0 0 1 2.6 0l7 6a2 2 0 0 1 .7 1.5v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z"/><path d="M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8"/>"#
            }
            IconName::Image => {
                r#"<rect width="18" height="18" x="3" y="3" rx="2" ry="2"/><circle cx="9" cy="9" r="2"/><path d="m21 15-3.086-3.086a2 2 0 0 0-2.828 0L6 21"/>"#
            }
            IconName::Info => {
                r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-4"/><path d="M12 8h.01"/>"#
            }
            IconName::Menu => {
                r#"<path d="M4 6h16"/><path d="M4 12h16"/><path d="M4 18h16"/>"#
            }
            IconName::Moon => r#"<path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z"/>"#,
            IconName::Search => {
                r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#
            }
            IconName::Sliders => {
                r#"<path d="M20 7h-9"/><path d="M14 17H5"/><circle cx="17" cy="17" r="3"/><circle cx="7" cy="7" r="3"/>"#
            }
            IconName::Sun => {
                r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#
            }
            IconName::TriangleAlert => {
                r#"<path d="m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3"/><path d="M12 9v4"/><path d="M12 17h.01"/>"#
            }
            IconName::X => r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#,
            IconName::Zap => {
                r#"<path d="M13 2 3 14h9l-1 8 10-12h-9l1-8z"/>"#
            }
        };
        format!("<svg {SVG_ATTRS}>{body}</svg>")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconSize {
    Small,  // 16px
    Medium, // 20px
    Large,  // 24px
}

impl IconSize {
    pub fn to_px(self) -> u32 {
        match self {
            IconSize::Small => 16,
            IconSize::Medium => 20,
            IconSize::Large => 24,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconColor {
    /// Inherit from the parent element.
    Current,
    Primary,
    Secondary,
    Muted,
    Custom(&'static str),
}

pub struct IconBuilder {
    name: IconName,
    size: IconSize,
    color: IconColor,
}

impl IconBuilder {
    pub fn new(name: IconName) -> Self {
        Self {
            name,
            size: IconSize::Medium,
            color: IconColor::Current,
        }
    }

    pub fn size(mut self, size: IconSize) -> Self {
        self.size = size;
        self
    }

    pub fn color(mut self, color: IconColor) -> Self {
        self.color = color;
        self
    }

    pub fn build(self) -> impl Element {
        let size_px = self.size.to_px();
        let color = self.color;
        let color_signal = theme().map(move |t| match (color, t) {
            (IconColor::Current, _) => "currentColor",
            (IconColor::Primary, Theme::Light) => "oklch(55% 0.19 15)",
            (IconColor::Primary, Theme::Dark) => "oklch(70% 0.17 15)",
            (IconColor::Secondary, Theme::Light) => "oklch(43% 0.02 260)",
            (IconColor::Secondary, Theme::Dark) => "oklch(75% 0.02 260)",
            (IconColor::Muted, Theme::Light) => "oklch(62% 0.02 260)",
            (IconColor::Muted, Theme::Dark) => "oklch(60% 0.02 260)",
            (IconColor::Custom(value), _) => value,
        });
        let name = self.name;

        El::new()
            .s(Width::exact(size_px))
            .s(Height::exact(size_px))
            .s(Align::center())
            .child_signal(color_signal.map(move |color| {
                let markup = name
                    .markup()
                    .replace("width=\"24\"", &format!("width=\"{size_px}\""))
                    .replace("height=\"24\"", &format!("height=\"{size_px}\""));
                RawHtmlEl::new("div")
                    .style("color", color)
                    .style("display", "flex")
                    .inner_markup(&markup)
                    .into_element()
            }))
    }
}

pub fn icon(name: IconName) -> IconBuilder {
    IconBuilder::new(name)
}

pub fn sun() -> IconBuilder {
    IconBuilder::new(IconName::Sun)
}

pub fn moon() -> IconBuilder {
    IconBuilder::new(IconName::Moon)
}

pub fn search() -> IconBuilder {
    IconBuilder::new(IconName::Search)
}

pub fn chevron_down() -> IconBuilder {
    IconBuilder::new(IconName::ChevronDown)
}

pub fn chevron_right() -> IconBuilder {
    IconBuilder::new(IconName::ChevronRight)
}
