use moonzoon_baselui::*;
use zoon::*;

use super::{header, page_column, section, snippet};
use crate::app::App;

pub fn page(app: &App) -> RawElOrText {
    let name = app.meta().name.clone();
    page_column([
        header(
            "Getting Started",
            "Introduction",
            &format!(
                "{name} is a strictly minimalist component library for MoonZoon. \
                 Every component is a plain Rust builder returning a zoon element, \
                 styled through theme-reactive design tokens.",
            ),
        )
        .unify(),
        section(
            "Philosophy",
            [
                paragraph(
                    "Components carry no hidden state machine and no stylesheet. \
                     A builder collects options, `build()` returns an element, and \
                     every color in it is a signal derived from the current theme. \
                     Flip the theme and the whole tree restyles without re-rendering.",
                )
                .unify(),
                paragraph(
                    "The library deliberately owns nothing global except the theme \
                     flag, and even that is write-only from the outside: your \
                     application decides when it changes and where it is persisted.",
                )
                .unify(),
            ],
        )
        .unify(),
        section(
            "A first component",
            [
                paragraph(
                    "Bring the prelude into scope and compose builders like any \
                     other zoon element:",
                )
                .unify(),
                snippet(
                    "use moonzoon_baselui::*;\n\
                     use zoon::*;\n\
                     \n\
                     fn call_to_action() -> impl Element {\n    \
                     button()\n        \
                     .label(\"Get Started\")\n        \
                     .variant(ButtonVariant::Primary)\n        \
                     .size(ButtonSize::Large)\n        \
                     .on_press(|| zoon::println!(\"clicked\"))\n        \
                     .build()\n\
                     }",
                )
                .unify(),
            ],
        )
        .unify(),
    ])
}
