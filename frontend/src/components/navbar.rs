//! Top navigation bar: logo, doc search, docs link and the theme toggle.

use moonzoon_baselui::*;
use zoon::*;

use crate::app::App;
use crate::routes;

pub fn navbar(app: &App) -> impl Element {
    Row::new()
        .s(Width::fill())
        .s(Height::exact(60))
        .s(Padding::new().x(SPACING_24))
        .s(Gap::new().x(SPACING_16))
        .s(Align::new().center_y())
        .s(Background::new().color_signal(neutral_1()))
        .s(Borders::new().bottom_signal(
            neutral_4().map(|color| Border::new().width(BORDER_WIDTH_1).color(color)),
        ))
        .item(logo(app))
        .item(El::new().s(Width::fill()).child(search_box(app)))
        .item(docs_link(app))
        .item(theme_toggle(app))
}

fn logo(app: &App) -> impl Element {
    let name = app.meta().name.clone();
    let app = app.clone();
    Button::new()
        .s(Font::new()
            .size(FONT_SIZE_18)
            .weight(FontWeight::Number(FONT_WEIGHT_9))
            .color_signal(neutral_12()))
        .s(Cursor::new(CursorIcon::Pointer))
        .update_raw_el(|raw_el| raw_el.style("letter-spacing", "0.05em"))
        .label(
            Row::new()
                .s(Gap::new().x(SPACING_8))
                .s(Align::new().center_y())
                .item(
                    El::new()
                        .s(Width::exact(28))
                        .s(Height::exact(28))
                        .s(RoundedCorners::all(CORNER_RADIUS_4))
                        .s(Background::new().color_signal(primary_7()))
                        .child(
                            El::new()
                                .s(Align::center())
                                .s(Font::new()
                                    .size(FONT_SIZE_14)
                                    .weight(FontWeight::Number(FONT_WEIGHT_9))
                                    .color("oklch(99% 0 0)"))
                                .child(Text::new("B")),
                        ),
                )
                .item(Text::new(name.to_uppercase())),
        )
        .on_press(move || app.go("/"))
}

fn search_box(app: &App) -> impl Element {
    let query: Mutable<String> = Mutable::new(String::new());
    // Bumped to rebuild the input empty after a result is picked.
    let generation: Mutable<u32> = Mutable::new(0);

    let field = El::new()
        .s(Width::fill())
        .s(Align::center())
        .update_raw_el(|raw_el| raw_el.style("max-width", "360px"))
        .child_signal(generation.signal().map({
            let query = query.clone();
            move |_| {
                let query = query.clone();
                input()
                    .placeholder("Search docs…")
                    .size(InputSize::Small)
                    .left_icon(IconName::Search)
                    .label("Search documentation")
                    .on_change(move |value| query.set_neq(value))
                    .build()
            }
        }));

    field
        .element_below_signal(query.signal_cloned().map({
            let app = app.clone();
            let query_handle = query.clone();
            let generation = generation.clone();
            move |current| {
                let trimmed = current.trim().to_owned();
                if trimmed.is_empty() {
                    return None;
                }
                Some(results_panel(
                    &app,
                    &trimmed,
                    query_handle.clone(),
                    generation.clone(),
                ))
            }
        }))
}

fn results_panel(
    app: &App,
    query: &str,
    query_handle: Mutable<String>,
    generation: Mutable<u32>,
) -> impl Element {
    let hits = routes::search(query);

    let mut panel = Column::new()
        .s(Width::fill())
        .s(Transform::new().move_down(4))
        .s(Padding::all(SPACING_4))
        .s(RoundedCorners::all(CORNER_RADIUS_8))
        .s(Background::new().color_signal(neutral_1()))
        .s(Borders::all_signal(
            neutral_4().map(|color| Border::new().width(BORDER_WIDTH_1).color(color)),
        ))
        .s(Shadows::new([
            Shadow::new().y(4).blur(6).spread(-1).color(SHADOW_COLOR_NEUTRAL),
            Shadow::new().y(2).blur(4).spread(-2).color(SHADOW_COLOR_NEUTRAL),
        ]));

    if hits.is_empty() {
        panel = panel.item(
            El::new()
                .s(Padding::new().x(SPACING_12).y(SPACING_8))
                .s(Font::new().size(FONT_SIZE_14).color_signal(neutral_8()))
                .child(Text::new("No results")),
        );
        return panel;
    }

    for entry in hits {
        let app = app.clone();
        let query_handle = query_handle.clone();
        let generation = generation.clone();
        let (hovered, hovered_signal) = Mutable::new_and_signal(false);
        panel = panel.item(
            Button::new()
                .s(Width::fill())
                .s(Padding::new().x(SPACING_12).y(SPACING_8))
                .s(RoundedCorners::all(CORNER_RADIUS_4))
                .s(Background::new().color_signal(map_ref! {
                    let hovered = hovered_signal,
                    let hover_bg = neutral_3() =>
                    if *hovered { *hover_bg } else { "transparent" }
                }))
                .s(Font::new().size(FONT_SIZE_14).color_signal(neutral_10()))
                .s(Cursor::new(CursorIcon::Pointer))
                .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
                .label(
                    El::new()
                        .s(Align::new().left())
                        .child(Text::new(entry.title)),
                )
                .on_press(move || {
                    query_handle.set(String::new());
                    generation.update(|generation| generation + 1);
                    app.go(&entry.path());
                }),
        );
    }
    panel
}

fn docs_link(app: &App) -> impl Element {
    let (hovered, hovered_signal) = Mutable::new_and_signal(false);
    let app = app.clone();
    Button::new()
        .s(Font::new()
            .size(FONT_SIZE_14)
            .weight(FontWeight::Number(FONT_WEIGHT_6))
            .color_signal(map_ref! {
                let hovered = hovered_signal,
                let base = neutral_10(),
                let hover = primary_7() =>
                if *hovered { *hover } else { *base }
            }))
        .s(transition_colors())
        .s(Cursor::new(CursorIcon::Pointer))
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .label(Text::new("Docs"))
        .on_press(move || app.go("/docs"))
}

fn theme_toggle(app: &App) -> impl Element {
    let (hovered, hovered_signal) = Mutable::new_and_signal(false);
    let app = app.clone();
    Button::new()
        .s(Width::exact(36))
        .s(Height::exact(36))
        .s(RoundedCorners::all(CORNER_RADIUS_MAX))
        .s(Background::new().color_signal(map_ref! {
            let hovered = hovered_signal,
            let hover_bg = neutral_3() =>
            if *hovered { *hover_bg } else { "transparent" }
        }))
        .s(transition_colors())
        .s(Cursor::new(CursorIcon::Pointer))
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .label(El::new().s(Align::center()).child_signal(theme().map(|t| {
            icon(match t {
                Theme::Light => IconName::Moon,
                Theme::Dark => IconName::Sun,
            })
            .size(IconSize::Medium)
            .color(IconColor::Secondary)
            .build()
        })))
        .on_press(move || app.toggle_theme())
}
