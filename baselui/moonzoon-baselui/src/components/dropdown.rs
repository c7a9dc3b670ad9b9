// Dropdown menu: trigger button with a panel attached below, dismissed by a
// selection or a click outside.

use std::rc::Rc;

use crate::components::icon::{IconBuilder, IconColor, IconName, IconSize};
use crate::tokens::*;
use zoon::*;

#[derive(Clone, Debug)]
pub struct DropdownItem {
    pub value: String,
    pub label: String,
}

impl DropdownItem {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

pub struct DropdownBuilder {
    label: String,
    items: Vec<DropdownItem>,
    on_select: Option<Rc<dyn Fn(String)>>,
}

impl DropdownBuilder {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            items: Vec::new(),
            on_select: None,
        }
    }

    pub fn items(mut self, items: impl IntoIterator<Item = DropdownItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn on_select<F>(mut self, handler: F) -> Self
    where
        F: Fn(String) + 'static,
    {
        self.on_select = Some(Rc::new(handler));
        self
    }

    pub fn build(self) -> impl Element {
        let is_open = Mutable::new(false);
        let items = Rc::new(self.items);
        let on_select = self.on_select;

        let trigger = Button::new()
            .s(Padding::new().x(SPACING_16).y(SPACING_8))
            .s(RoundedCorners::all(CORNER_RADIUS_4))
            .s(Background::new().color_signal(neutral_2()))
            .s(Borders::all_signal(
                neutral_5().map(|color| Border::new().width(BORDER_WIDTH_1).color(color)),
            ))
            .s(Font::new().size(FONT_SIZE_16).color_signal(neutral_11()))
            .s(transition_colors())
            .s(Cursor::new(CursorIcon::Pointer))
            .label(
                Row::new()
                    .s(Align::new().center_y())
                    .s(Gap::new().x(SPACING_8))
                    .item(Text::new(&self.label))
                    .item_signal(is_open.signal().map(|open| {
                        IconBuilder::new(if open {
                            IconName::ChevronUp
                        } else {
                            IconName::ChevronDown
                        })
                        .size(IconSize::Small)
                        .color(IconColor::Current)
                        .build()
                    })),
            )
            .on_press({
                let is_open = is_open.clone();
                move || is_open.set_neq(!is_open.get())
            });

        trigger
            .element_below_signal(is_open.signal().map_true({
                let is_open = is_open.clone();
                move || {
                    let items = Rc::clone(&items);
                    let on_select = on_select.clone();
                    let is_open = is_open.clone();
                    Column::new()
                        .s(Transform::new().move_down(4))
                        .s(RoundedCorners::all(CORNER_RADIUS_8))
                        .s(Background::new().color_signal(neutral_1()))
                        .s(Borders::all_signal(
                            neutral_4()
                                .map(|color| Border::new().width(BORDER_WIDTH_1).color(color)),
                        ))
                        .s(Shadows::new([
                            Shadow::new().y(4).blur(6).spread(-1).color(SHADOW_COLOR_NEUTRAL),
                            Shadow::new().y(2).blur(4).spread(-2).color(SHADOW_COLOR_NEUTRAL),
                        ]))
                        .s(Padding::all(SPACING_4))
                        .items(items.iter().cloned().map(move |item| {
                            menu_item(item, on_select.clone(), is_open.clone())
                        }))
                }
            }))
            .on_click_outside({
                let is_open = is_open.clone();
                move || is_open.set_neq(false)
            })
    }
}

fn menu_item(
    item: DropdownItem,
    on_select: Option<Rc<dyn Fn(String)>>,
    is_open: Mutable<bool>,
) -> impl Element {
    let (hovered, hovered_signal) = Mutable::new_and_signal(false);
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
        .label(Text::new(item.label))
        .on_press(move || {
            is_open.set_neq(false);
            if let Some(handler) = &on_select {
                handler(item.value.clone());
            }
        })
}

pub fn dropdown(label: impl Into<String>) -> DropdownBuilder {
    DropdownBuilder::new(label)
}
