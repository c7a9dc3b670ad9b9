//! Sidebar navigation link with active-path highlighting.

use moonzoon_baselui::*;
use zoon::*;

use crate::app::App;

pub fn nav_item(
    app: &App,
    label: &'static str,
    path: String,
    on_navigate: impl Fn() + 'static,
) -> impl Element {
    let (hovered, hovered_signal) = Mutable::new_and_signal(false);
    let current_path = app.current_path();

    let active_for_bg = {
        let path = path.clone();
        current_path
            .signal_cloned()
            .map(move |current| current == path)
    };
    let active_for_text = {
        let path = path.clone();
        current_path
            .signal_cloned()
            .map(move |current| current == path)
    };

    let app = app.clone();
    Button::new()
        .s(Width::fill())
        .s(Padding::new().x(SPACING_12).y(SPACING_6))
        .s(RoundedCorners::all(CORNER_RADIUS_4))
        .s(Background::new().color_signal(map_ref! {
            let active = active_for_bg,
            let hovered = hovered_signal,
            let active_bg = primary_2(),
            let hover_bg = neutral_3() =>
            if *active {
                *active_bg
            } else if *hovered {
                *hover_bg
            } else {
                "transparent"
            }
        }))
        .s(Font::new()
            .size(FONT_SIZE_14)
            .weight(FontWeight::Number(FONT_WEIGHT_5))
            .color_signal(map_ref! {
                let active = active_for_text,
                let active_color = primary_8(),
                let base = neutral_10() =>
                if *active { *active_color } else { *base }
            }))
        .s(transition_colors())
        .s(Cursor::new(CursorIcon::Pointer))
        .on_hovered_change(move |is_hovered| hovered.set_neq(is_hovered))
        .label(
            El::new()
                .s(Align::new().left())
                .child(Text::new(label)),
        )
        .on_press(move || {
            app.go(&path);
            on_navigate();
        })
}
