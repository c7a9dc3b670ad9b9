// Breadcrumbs component.

use std::rc::Rc;

use crate::components::icon::{IconBuilder, IconColor, IconName, IconSize};
use crate::tokens::*;
use zoon::*;

#[derive(Clone, Debug)]
pub struct BreadcrumbItem {
    pub label: String,
    /// `None` marks the current location; it renders inert.
    pub path: Option<String>,
}

impl BreadcrumbItem {
    pub fn link(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: Some(path.into()),
        }
    }

    pub fn current(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: None,
        }
    }
}

pub struct BreadcrumbsBuilder {
    items: Vec<BreadcrumbItem>,
    on_navigate: Option<Rc<dyn Fn(String)>>,
}

impl BreadcrumbsBuilder {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            on_navigate: None,
        }
    }

    pub fn item(mut self, item: BreadcrumbItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = BreadcrumbItem>) -> Self {
        self.items.extend(items);
        self
    }

    pub fn on_navigate<F>(mut self, handler: F) -> Self
    where
        F: Fn(String) + 'static,
    {
        self.on_navigate = Some(Rc::new(handler));
        self
    }

    pub fn build(self) -> impl Element {
        let on_navigate = self.on_navigate;
        let last = self.items.len().saturating_sub(1);

        let mut row = Row::new()
            .s(Align::new().center_y())
            .s(Gap::new().x(SPACING_6))
            .multiline();

        for (index, item) in self.items.into_iter().enumerate() {
            if index > 0 {
                row = row.item(
                    IconBuilder::new(IconName::ChevronRight)
                        .size(IconSize::Small)
                        .color(IconColor::Muted)
                        .build(),
                );
            }
            row = row.item(crumb(item, index == last, on_navigate.clone()));
        }
        row
    }
}

fn crumb(
    item: BreadcrumbItem,
    is_last: bool,
    on_navigate: Option<Rc<dyn Fn(String)>>,
) -> impl Element {
    match (item.path, is_last) {
        (Some(path), false) => {
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
                .label(Text::new(item.label))
                .on_press(move || {
                    if let Some(handler) = &on_navigate {
                        handler(path.clone());
                    }
                })
                .unify()
        }
        _ => El::new()
            .s(Font::new()
                .size(FONT_SIZE_14)
                .weight(FontWeight::Number(FONT_WEIGHT_6))
                .color_signal(neutral_11()))
            .child(Text::new(item.label))
            .unify(),
    }
}

pub fn breadcrumbs() -> BreadcrumbsBuilder {
    BreadcrumbsBuilder::new()
}
