//! Site footer: project blurb plus resource and legal columns.

use moonzoon_baselui::*;
use zoon::*;

use crate::app::App;

pub fn footer(app: &App) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Padding::new().x(SPACING_24).y(SPACING_48))
        .s(Gap::new().y(SPACING_32))
        .s(Background::new().color_signal(neutral_2()))
        .s(Borders::new().top_signal(
            neutral_4().map(|color| Border::new().width(BORDER_WIDTH_1).color(color)),
        ))
        .item(
            Row::new()
                .s(Width::fill())
                .s(Gap::new().x(SPACING_64).y(SPACING_32))
                .multiline()
                .item(project_column(app))
                .item(resources_column(app))
                .item(legal_column())
        )
        .item(
            El::new()
                .s(Font::new().size(FONT_SIZE_12).color_signal(neutral_8()))
                .child(Text::new(format!(
                    "© 2026 {}. Built with MoonZoon.",
                    app.meta().name,
                ))),
        )
}

fn project_column(app: &App) -> impl Element {
    Column::new()
        .s(Width::exact(280))
        .s(Gap::new().y(SPACING_12))
        .item(
            El::new()
                .s(Font::new()
                    .size(FONT_SIZE_18)
                    .weight(FontWeight::Number(FONT_WEIGHT_9))
                    .color_signal(neutral_12()))
                .child(Text::new(&app.meta().name)),
        )
        .item(
            El::new()
                .s(Font::new()
                    .size(FONT_SIZE_14)
                    .line_height(line_height_relaxed(FONT_SIZE_14))
                    .color_signal(neutral_9()))
                .child(Text::new(&app.meta().tagline)),
        )
}

fn resources_column(app: &App) -> impl Element {
    let docs = {
        let app = app.clone();
        internal_link("Documentation", move || app.go("/docs"))
    };
    let install = {
        let app = app.clone();
        internal_link("Installation", move || app.go("/docs/install"))
    };
    Column::new()
        .s(Gap::new().y(SPACING_8))
        .item(column_title("Resources"))
        .item(docs)
        .item(install)
        .item(external_link("GitHub", app.meta().repository.clone()))
        .item(external_link(
            "crates.io",
            format!("https://crates.io/crates/{}", app.meta().crate_name),
        ))
}

fn legal_column() -> impl Element {
    Column::new()
        .s(Gap::new().y(SPACING_8))
        .item(column_title("Legal"))
        .item(
            El::new()
                .s(Font::new().size(FONT_SIZE_14).color_signal(neutral_9()))
                .child(Text::new("MIT License")),
        )
}

fn column_title(title: &'static str) -> impl Element {
    El::new()
        .s(Font::new()
            .size(FONT_SIZE_12)
            .weight(FontWeight::Number(FONT_WEIGHT_7))
            .color_signal(neutral_8()))
        .update_raw_el(|raw_el| {
            raw_el
                .style("text-transform", "uppercase")
                .style("letter-spacing", "0.1em")
        })
        .child(Text::new(title))
}

fn internal_link(label: &'static str, on_press: impl Fn() + 'static) -> impl Element {
    let (hovered, hovered_signal) = Mutable::new_and_signal(false);
    Button::new()
        .s(Font::new().size(FONT_SIZE_14).color_signal(map_ref! {
            let hovered = hovered_signal,
            let base = neutral_9(),
            let hover = primary_7() =>
            if *hovered { *hover } else { *base }
        }))
        .s(transition_colors())
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .label(Text::new(label))
        .on_press(on_press)
}

fn external_link(label: &'static str, url: String) -> impl Element {
    let (hovered, hovered_signal) = Mutable::new_and_signal(false);
    Link::new()
        .s(Font::new().size(FONT_SIZE_14).color_signal(map_ref! {
            let hovered = hovered_signal,
            let base = neutral_9(),
            let hover = primary_7() =>
            if *hovered { *hover } else { *base }
        }))
        .s(transition_colors())
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .label(Text::new(label))
        .to(url)
        .new_tab(NewTab::new())
}
