// Accordion component.

use std::rc::Rc;

use crate::components::icon::{IconBuilder, IconColor, IconName, IconSize};
use crate::tokens::*;
use zoon::*;

#[derive(Clone, Debug)]
pub struct AccordionItem {
    pub title: String,
    pub content: String,
}

impl AccordionItem {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}

pub struct AccordionBuilder {
    items: Vec<AccordionItem>,
    allow_multiple: bool,
    default_expanded: Vec<usize>,
}

impl AccordionBuilder {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            allow_multiple: false,
            default_expanded: Vec::new(),
        }
    }

    pub fn item(mut self, item: AccordionItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = AccordionItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn allow_multiple(mut self, allow_multiple: bool) -> Self {
        self.allow_multiple = allow_multiple;
        self
    }

    pub fn default_expanded(mut self, indices: Vec<usize>) -> Self {
        self.default_expanded = indices;
        self
    }

    pub fn build(self) -> impl Element {
        let expanded: Rc<Vec<Mutable<bool>>> = Rc::new(
            (0..self.items.len())
                .map(|index| Mutable::new(self.default_expanded.contains(&index)))
                .collect(),
        );
        let allow_multiple = self.allow_multiple;

        Column::new()
            .s(Width::fill())
            .s(Gap::new().y(SPACING_8))
            .items(self.items.into_iter().enumerate().map({
                let expanded = Rc::clone(&expanded);
                move |(index, item)| {
                    accordion_item(item, index, Rc::clone(&expanded), allow_multiple)
                }
            }))
    }
}

fn accordion_item(
    item: AccordionItem,
    index: usize,
    expanded: Rc<Vec<Mutable<bool>>>,
    allow_multiple: bool,
) -> impl Element {
    let is_expanded = expanded[index].clone();

    Column::new()
        .s(Width::fill())
        .s(Borders::all_signal(
            neutral_4().map(|color| Border::new().width(BORDER_WIDTH_1).color(color)),
        ))
        .s(RoundedCorners::all(CORNER_RADIUS_4))
        .s(Background::new().color_signal(neutral_1()))
        .s(Clip::both())
        .item(
            Button::new()
                .s(Width::fill())
                .s(Padding::new().x(SPACING_16).y(SPACING_12))
                .s(Background::new().color("transparent"))
                .s(Cursor::new(CursorIcon::Pointer))
                .label(
                    Row::new()
                        .s(Width::fill())
                        .s(Align::new().center_y())
                        .item(
                            El::new()
                                .s(Width::fill())
                                .s(Font::new()
                                    .size(FONT_SIZE_16)
                                    .weight(FontWeight::Number(FONT_WEIGHT_6))
                                    .color_signal(neutral_11()))
                                .child(Text::new(item.title)),
                        )
                        .item(El::new().s(transition_transform()).child_signal(
                            is_expanded.signal().map(|open| {
                                IconBuilder::new(if open {
                                    IconName::ChevronUp
                                } else {
                                    IconName::ChevronDown
                                })
                                .size(IconSize::Small)
                                .color(IconColor::Muted)
                                .build()
                            }),
                        )),
                )
                .on_press({
                    let is_expanded = is_expanded.clone();
                    move || {
                        let next = !is_expanded.get();
                        if next && !allow_multiple {
                            for state in expanded.iter() {
                                state.set_neq(false);
                            }
                        }
                        is_expanded.set_neq(next);
                    }
                }),
        )
        .item_signal(is_expanded.signal().map_true(move || {
            El::new()
                .s(Width::fill())
                .s(Padding::new().x(SPACING_16).bottom(SPACING_16).top(SPACING_4))
                .s(Font::new()
                    .size(FONT_SIZE_14)
                    .line_height(line_height_relaxed(FONT_SIZE_14))
                    .color_signal(neutral_9()))
                .child(Text::new(&item.content))
        }))
}

pub fn accordion() -> AccordionBuilder {
    AccordionBuilder::new()
}
