//! Landing page: hero, feature grid and FAQ.

use moonzoon_baselui::*;
use zoon::*;

use crate::app::App;
use crate::platform;

pub fn page(app: &App) -> RawElOrText {
    Column::new()
        .s(Width::fill())
        .item(hero(app))
        .item(features())
        .item(faq_section(app))
        .unify()
}

fn hero(app: &App) -> impl Element {
    let version_badge = format!("Version {} available", app.meta().version);
    let get_started = {
        let app = app.clone();
        button()
            .label("Get Started")
            .variant(ButtonVariant::Primary)
            .size(ButtonSize::Large)
            .fill_width()
            .on_press(move || app.go("/docs"))
            .build()
    };
    let repository = {
        let url = app.meta().repository.clone();
        button()
            .label("GitHub Repository")
            .variant(ButtonVariant::Outline)
            .size(ButtonSize::Large)
            .fill_width()
            .on_press(move || platform::open_in_new_tab(&url))
            .build()
    };

    El::new()
        .s(Width::fill())
        .s(Padding::new().x(SPACING_24).top(SPACING_64).bottom(SPACING_48))
        .s(Borders::new().bottom_signal(
            neutral_4().map(|color| Border::new().width(BORDER_WIDTH_1).color(color)),
        ))
        .child(
            Column::new()
                .s(Width::fill())
                .s(Align::new().center_x())
                .s(Gap::new().y(SPACING_24))
                .update_raw_el(|raw_el| raw_el.style("max-width", "480px"))
                .item(El::new().s(Align::new().left()).child(
                    badge(version_badge).variant(BadgeVariant::Outline).build(),
                ))
                .item(headline())
                .item(lead(
                    "A strictly minimalist component library for MoonZoon. \
                     Rust end to end, reactive by construction, themed through \
                     design tokens.",
                ))
                .item(
                    Column::new()
                        .s(Width::fill())
                        .s(Gap::new().y(SPACING_12))
                        .item(get_started)
                        .item(repository),
                ),
        )
}

fn headline() -> impl Element {
    Paragraph::new()
        .s(Font::new()
            .size(FONT_SIZE_48)
            .weight(FontWeight::Number(FONT_WEIGHT_9))
            .line_height(line_height_tight(FONT_SIZE_48))
            .color_signal(neutral_12()))
        .content("Build universal apps with ")
        .content(
            El::new()
                .s(Font::new().color_signal(primary_7()))
                .child(Text::new("precision")),
        )
}

fn features() -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Padding::new().x(SPACING_24).y(SPACING_64))
        .s(Background::new().color_signal(neutral_2()))
        .child(
            Column::new()
                .s(Width::fill())
                .s(Align::new().center_x())
                .s(Gap::new().y(SPACING_16))
                .update_raw_el(|raw_el| raw_el.style("max-width", "720px"))
                .item(h2("Designed for performance"))
                .item(
                    card_feature(
                        IconName::Zap,
                        "Blisteringly fast",
                        "Rendered straight from signals, no virtual DOM diffing. \
                         Components restyle in microseconds when the theme flips.",
                    )
                    .build(),
                )
                .item(
                    Row::new()
                        .s(Width::fill())
                        .s(Gap::new().x(SPACING_16).y(SPACING_16))
                        .multiline()
                        .item(
                            card_info(
                                "Native reactivity",
                                "Every token is a signal; state changes propagate \
                                 without a render loop.",
                            )
                            .size(CardSize::Small)
                            .build(),
                        )
                        .item(
                            card_info(
                                "100% customizable",
                                "Swap the token tables to restyle every component \
                                 at once.",
                            )
                            .size(CardSize::Small)
                            .filled(true)
                            .build(),
                        ),
                )
                .item(
                    card_feature(
                        IconName::Code,
                        "Rust + WASM",
                        "One language from the server to the pixel. The type \
                         system holds the UI contract together.",
                    )
                    .build(),
                ),
        )
}

fn faq_section(app: &App) -> impl Element {
    let name = app.meta().name.clone();
    El::new()
        .s(Width::fill())
        .s(Padding::new().x(SPACING_24).bottom(SPACING_64))
        .s(Background::new().color_signal(neutral_2()))
        .child(
            El::new()
                .s(Width::fill())
                .s(Align::new().center_x())
                .update_raw_el(|raw_el| raw_el.style("max-width", "720px"))
                .child(
                    faq("Answers to your questions")
                        .entries([
                            FaqEntry::new(
                                format!("What is {name}?"),
                                "A lightweight component library for MoonZoon \
                                 applications, focused on performance and \
                                 minimalism. Components are plain Rust builders \
                                 that return zoon elements.",
                            ),
                            FaqEntry::new(
                                "Why MoonZoon?",
                                "MoonZoon keeps the whole stack in Rust and its \
                                 signal-based rendering maps directly onto the \
                                 reactive token system, so there is no framework \
                                 translation layer to pay for.",
                            ),
                            FaqEntry::new(
                                "Can I use it in my existing app?",
                                "Yes. Add the crate, seed the theme once at \
                                 startup, and use any component on its own. \
                                 There is no global setup beyond the theme.",
                            ),
                        ])
                        .build(),
                ),
        )
}
