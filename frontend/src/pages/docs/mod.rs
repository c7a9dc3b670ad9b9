//! Documentation shell and shared page scaffolding.

pub mod accordion;
pub mod alerts;
pub mod breadcrumbs;
pub mod button;
pub mod card_feature;
pub mod card_info;
pub mod card_product;
pub mod dropdown;
pub mod faqs;
pub mod input;
pub mod install;
pub mod intro;
pub mod theming;

use moonzoon_baselui::{self as ui, *};
use zoon::*;

use crate::app::App;
use crate::components::nav_item::nav_item;
use crate::platform;
use crate::routes::{DocGroup, DOC_ENTRIES};

const MOBILE_BREAKPOINT: u32 = 768;
const SIDEBAR_WIDTH: u32 = 260;

/// The `/docs` container: sidebar plus content outlet.
///
/// Below the breakpoint the sidebar becomes an overlay behind a toggle and
/// a backdrop. `sidebar_open` belongs to the view instance, so it survives
/// swaps between doc pages.
pub fn container(app: &App, child: Option<RawElOrText>, sidebar_open: Mutable<bool>) -> RawElOrText {
    let viewport_width = Mutable::new(1280_u32);
    let is_mobile = viewport_width
        .signal()
        .map(|width| width < MOBILE_BREAKPOINT)
        .broadcast();

    let content = Column::new()
        .s(Width::fill())
        .s(Height::fill())
        .item_signal(is_mobile.signal().map_true({
            let sidebar_open = sidebar_open.clone();
            move || mobile_toggle(sidebar_open.clone())
        }))
        .item(
            El::new()
                .s(Width::fill())
                .s(Height::fill())
                .s(Scrollbars::both())
                .child(
                    El::new()
                        .s(Width::fill())
                        .s(Padding::new().x(SPACING_24).y(SPACING_32))
                        .update_raw_el(|raw_el| raw_el.style("max-width", "820px"))
                        .child(child.unwrap_or_else(|| El::new().unify())),
                ),
        );

    let base = Row::new()
        .s(Width::fill())
        .s(Height::fill())
        .item_signal(is_mobile.signal().map({
            let app = app.clone();
            move |mobile| (!mobile).then(|| docked_sidebar(&app))
        }))
        .item(content);

    Stack::new()
        .s(Width::fill())
        .s(Height::fill())
        .on_viewport_size_change({
            let viewport_width = viewport_width.clone();
            move |width, _| viewport_width.set_neq(width)
        })
        .layer(base)
        .layer_signal(
            map_ref! {
                let mobile = is_mobile.signal(),
                let open = sidebar_open.signal() =>
                *mobile && *open
            }
            .map_true({
                let app = app.clone();
                let sidebar_open = sidebar_open.clone();
                move || overlay_sidebar(&app, sidebar_open.clone())
            }),
        )
        .unify()
}

fn mobile_toggle(sidebar_open: Mutable<bool>) -> impl Element {
    Row::new()
        .s(Width::fill())
        .s(Padding::new().x(SPACING_16).y(SPACING_8))
        .s(Borders::new().bottom_signal(
            ui::neutral_4().map(|color| Border::new().width(BORDER_WIDTH_1).color(color)),
        ))
        .item(
            Button::new()
                .s(Font::new()
                    .size(FONT_SIZE_14)
                    .weight(FontWeight::Number(FONT_WEIGHT_6))
                    .color_signal(ui::neutral_10()))
                .s(Cursor::new(CursorIcon::Pointer))
                .label(
                    Row::new()
                        .s(Gap::new().x(SPACING_8))
                        .s(Align::new().center_y())
                        .item(
                            icon(IconName::Menu)
                                .size(IconSize::Medium)
                                .color(IconColor::Secondary)
                                .build(),
                        )
                        .item(Text::new("Menu")),
                )
                .on_press(move || sidebar_open.set_neq(!sidebar_open.get())),
        )
}

fn docked_sidebar(app: &App) -> impl Element {
    El::new()
        .s(Width::exact(SIDEBAR_WIDTH))
        .s(Height::fill())
        .s(Scrollbars::both())
        .s(Borders::new().right_signal(
            ui::neutral_4().map(|color| Border::new().width(BORDER_WIDTH_1).color(color)),
        ))
        .child(sidebar_nav(app, || {}))
}

fn overlay_sidebar(app: &App, sidebar_open: Mutable<bool>) -> impl Element {
    let close = {
        let sidebar_open = sidebar_open.clone();
        move || sidebar_open.set_neq(false)
    };
    Stack::new()
        .s(Width::fill())
        .s(Height::fill())
        .layer(
            El::new()
                .s(Width::fill())
                .s(Height::fill())
                .s(Background::new().color(SHADOW_COLOR_BLACK_STRONG))
                .on_click({
                    let close = close.clone();
                    move || close()
                }),
        )
        .layer(
            El::new()
                .s(Width::exact(SIDEBAR_WIDTH))
                .s(Height::fill())
                .s(Align::new().left())
                .s(Background::new().color_signal(ui::neutral_1()))
                .s(Scrollbars::both())
                .s(Shadows::new([Shadow::new()
                    .x(4)
                    .blur(24)
                    .color(SHADOW_COLOR_NEUTRAL)]))
                .child(sidebar_nav(app, close)),
        )
}

fn sidebar_nav(app: &App, on_navigate: impl Fn() + Clone + 'static) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Padding::all(SPACING_16))
        .s(Gap::new().y(SPACING_24))
        .item(nav_group(app, DocGroup::GettingStarted, on_navigate.clone()))
        .item(nav_group(app, DocGroup::Components, on_navigate))
}

fn nav_group(app: &App, group: DocGroup, on_navigate: impl Fn() + Clone + 'static) -> impl Element {
    let mut column = Column::new().s(Width::fill()).s(Gap::new().y(SPACING_4)).item(
        El::new()
            .s(Padding::new().x(SPACING_12).bottom(SPACING_4))
            .s(Font::new()
                .size(FONT_SIZE_12)
                .weight(FontWeight::Number(FONT_WEIGHT_7))
                .color_signal(ui::neutral_8()))
            .update_raw_el(|raw_el| {
                raw_el
                    .style("text-transform", "uppercase")
                    .style("letter-spacing", "0.1em")
            })
            .child(Text::new(group.title())),
    );
    for entry in DOC_ENTRIES.iter().filter(|entry| entry.group == group) {
        let on_navigate = on_navigate.clone();
        column = column.item(nav_item(app, entry.title, entry.path(), on_navigate));
    }
    column
}

// Shared scaffolding for the doc pages.

pub(crate) fn page_column(items: impl IntoIterator<Item = RawElOrText>) -> RawElOrText {
    let mut column = Column::new().s(Width::fill()).s(Gap::new().y(SPACING_32));
    for item in items {
        column = column.item(item);
    }
    column.unify()
}

pub(crate) fn header(kicker: &'static str, title: &str, lead_text: &str) -> impl Element {
    Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_16))
        .item(El::new().s(Align::new().left()).child(
            badge(kicker).variant(BadgeVariant::Solid).build(),
        ))
        .item(h1(title))
        .item(lead(lead_text))
}

pub(crate) fn section(
    title: &'static str,
    items: impl IntoIterator<Item = RawElOrText>,
) -> impl Element {
    let mut column = Column::new()
        .s(Width::fill())
        .s(Gap::new().y(SPACING_16))
        .item(h2(title));
    for item in items {
        column = column.item(item);
    }
    column
}

/// Live component preview on a bordered surface.
pub(crate) fn preview(element: impl Element) -> impl Element {
    El::new()
        .s(Width::fill())
        .s(Padding::all(SPACING_24))
        .s(RoundedCorners::all(CORNER_RADIUS_8))
        .s(Background::new().color_signal(ui::neutral_2()))
        .s(Borders::all_signal(
            ui::neutral_4().map(|color| Border::new().width(BORDER_WIDTH_1).color(color)),
        ))
        .child(element)
}

/// Copyable Rust snippet.
pub(crate) fn snippet(code: &'static str) -> impl Element {
    code_block(code)
        .language("rust")
        .on_copy(|text| platform::copy_to_clipboard(text))
        .build()
}

/// Copyable snippet in another language (shell, toml).
pub(crate) fn snippet_in(language: &'static str, code: &'static str) -> impl Element {
    code_block(code)
        .language(language)
        .on_copy(|text| platform::copy_to_clipboard(text))
        .build()
}
