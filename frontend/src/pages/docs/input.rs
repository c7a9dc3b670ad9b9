use moonzoon_baselui::*;
use zoon::*;

use super::{header, page_column, preview, section, snippet};
use crate::app::App;

pub fn page(_app: &App) -> RawElOrText {
    page_column([
        header(
            "Components",
            "Input",
            "Single-line text field with label, placeholder, icon and a \
             dedicated error state.",
        )
        .unify(),
        section(
            "Basic usage",
            [
                preview(
                    Column::new()
                        .s(Width::fill())
                        .s(Gap::new().y(SPACING_16))
                        .item(
                            input()
                                .label("Email")
                                .placeholder("you@example.com")
                                .build(),
                        )
                        .item(
                            input()
                                .label("Search")
                                .placeholder("Search…")
                                .left_icon(IconName::Search)
                                .build(),
                        ),
                )
                .unify(),
                snippet(
                    "input()\n    \
                     .label(\"Email\")\n    \
                     .placeholder(\"you@example.com\")\n    \
                     .on_change(|value| { /* … */ })\n    \
                     .build()",
                )
                .unify(),
            ],
        )
        .unify(),
        section(
            "Error and disabled states",
            [
                preview(
                    Column::new()
                        .s(Width::fill())
                        .s(Gap::new().y(SPACING_16))
                        .item(
                            input()
                                .label("Username")
                                .value("basel ui")
                                .error_message("Spaces are not allowed.")
                                .build(),
                        )
                        .item(
                            input()
                                .label("Plan")
                                .value("Free tier")
                                .disabled()
                                .build(),
                        ),
                )
                .unify(),
                snippet(
                    "input()\n    \
                     .label(\"Username\")\n    \
                     .error_message(\"Spaces are not allowed.\")\n    \
                     .build()",
                )
                .unify(),
            ],
        )
        .unify(),
        section(
            "Sizes",
            [
                preview(
                    Column::new()
                        .s(Width::fill())
                        .s(Gap::new().y(SPACING_16))
                        .item(input().placeholder("Small").size(InputSize::Small).build())
                        .item(input().placeholder("Medium").size(InputSize::Medium).build())
                        .item(input().placeholder("Large").size(InputSize::Large).build()),
                )
                .unify(),
            ],
        )
        .unify(),
    ])
}
