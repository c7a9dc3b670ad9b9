// Code block: monospace snippet panel with an optional copy affordance.
//
// Copying itself is delegated to the host through `on_copy`; the component
// has no clipboard access of its own.

use std::rc::Rc;

use crate::components::icon::{IconBuilder, IconColor, IconName, IconSize};
use crate::tokens::*;
use zoon::*;

pub struct CodeBlockBuilder {
    code: String,
    language: Option<String>,
    on_copy: Option<Rc<dyn Fn(String)>>,
}

impl CodeBlockBuilder {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            language: None,
            on_copy: None,
        }
    }

    pub fn language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn on_copy<F>(mut self, handler: F) -> Self
    where
        F: Fn(String) + 'static,
    {
        self.on_copy = Some(Rc::new(handler));
        self
    }

    pub fn build(self) -> impl Element {
        let code = Rc::new(self.code);

        let mut header = Row::new()
            .s(Width::fill())
            .s(Align::new().center_y())
            .s(Padding::new().x(SPACING_16).y(SPACING_8))
            .s(Borders::new().bottom_signal(
                neutral_4().map(|color| Border::new().width(BORDER_WIDTH_1).color(color)),
            ));

        header = header.item(
            El::new()
                .s(Width::fill())
                .s(font_mono())
                .s(Font::new()
                    .size(FONT_SIZE_12)
                    .color_signal(neutral_8()))
                .child(Text::new(self.language.unwrap_or_else(|| "code".to_owned()))),
        );

        if let Some(on_copy) = self.on_copy {
            let copied = Mutable::new(false);
            header = header.item(copy_button(Rc::clone(&code), on_copy, copied));
        }

        Column::new()
            .s(Width::fill())
            .s(RoundedCorners::all(CORNER_RADIUS_8))
            .s(Background::new().color_signal(neutral_2()))
            .s(Borders::all_signal(
                neutral_4().map(|color| Border::new().width(BORDER_WIDTH_1).color(color)),
            ))
            .s(Clip::both())
            .item(header)
            .item(
                El::new()
                    .s(Width::fill())
                    .s(Padding::all(SPACING_16))
                    .s(font_mono())
                    .s(Font::new()
                        .size(FONT_SIZE_14)
                        .line_height(line_height_relaxed(FONT_SIZE_14))
                        .color_signal(neutral_11()))
                    .s(Scrollbars::x_and_clip_y())
                    .update_raw_el(|raw_el| raw_el.style("white-space", "pre"))
                    .child(Text::new(code.as_str())),
            )
    }
}

fn copy_button(
    code: Rc<String>,
    on_copy: Rc<dyn Fn(String)>,
    copied: Mutable<bool>,
) -> impl Element {
    let (hovered, hovered_signal) = Mutable::new_and_signal(false);
    Button::new()
        .s(Padding::all(SPACING_4))
        .s(RoundedCorners::all(CORNER_RADIUS_4))
        .s(Background::new().color_signal(map_ref! {
            let hovered = hovered_signal,
            let hover_bg = neutral_4() =>
            if *hovered { *hover_bg } else { "transparent" }
        }))
        .s(Cursor::new(CursorIcon::Pointer))
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .label_signal(copied.signal().map(|was_copied| {
            IconBuilder::new(if was_copied {
                IconName::Check
            } else {
                IconName::Copy
            })
            .size(IconSize::Small)
            .color(if was_copied {
                IconColor::Primary
            } else {
                IconColor::Muted
            })
            .build()
        }))
        .on_press(move || {
            on_copy(code.as_str().to_owned());
            copied.set_neq(true);
            Task::start({
                let copied = copied.clone();
                async move {
                    Timer::sleep(1500).await;
                    copied.set_neq(false);
                }
            });
        })
}

pub fn code_block(code: impl Into<String>) -> CodeBlockBuilder {
    CodeBlockBuilder::new(code)
}
