use moonzoon_baselui::*;
use zoon::*;

use super::{header, page_column, preview, section, snippet};
use crate::app::App;

pub fn page(app: &App) -> RawElOrText {
    let toggle = {
        let app = app.clone();
        button()
            .label("Toggle theme")
            .variant(ButtonVariant::Secondary)
            .left_icon(IconName::Sun)
            .on_press(move || app.toggle_theme())
            .build()
    };

    page_column([
        header(
            "Getting Started",
            "Dark Mode",
            "The library renders whichever theme the host sets. Your app owns \
             the flag, its persistence and the toggle; the tokens follow.",
        )
        .unify(),
        section(
            "Try it",
            [
                paragraph(
                    "This button drives the same store as the toggle in the \
                     navbar. Watch the whole page restyle:",
                )
                .unify(),
                preview(toggle).unify(),
            ],
        )
        .unify(),
        section(
            "Initialization",
            [
                paragraph(
                    "Resolve the initial value from storage, falling back to the \
                     system preference, and push it into the library once:",
                )
                .unify(),
                snippet(
                    "let saved = local_storage_theme();           // Option<Theme>\n\
                     let ambient = prefers_dark_media_query();    // bool\n\
                     let initial = saved.unwrap_or(if ambient { Theme::Dark } else { Theme::Light });\n\
                     set_theme(initial);",
                )
                .unify(),
            ],
        )
        .unify(),
        section(
            "Toggling",
            [
                paragraph(
                    "On toggle, write your store first, persist, then notify the \
                     library. Components subscribe to the token signals, so no \
                     manual invalidation is needed:",
                )
                .unify(),
                snippet(
                    "fn on_toggle_pressed() {\n    \
                     let next = match current_theme() {\n        \
                     Theme::Light => Theme::Dark,\n        \
                     Theme::Dark => Theme::Light,\n    \
                     };\n    \
                     persist(next);\n    \
                     set_theme(next);\n\
                     }",
                )
                .unify(),
            ],
        )
        .unify(),
    ])
}
