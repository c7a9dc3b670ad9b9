use moonzoon_baselui::*;
use zoon::*;

use super::{header, page_column, preview, section, snippet};
use crate::app::App;

pub fn page(_app: &App) -> RawElOrText {
    page_column([
        header(
            "Components",
            "Button",
            "Pressable action in five variants and three sizes, with optional \
             icons on either side.",
        )
        .unify(),
        section(
            "Variants",
            [
                preview(
                    Row::new()
                        .s(Gap::new().x(SPACING_12).y(SPACING_12))
                        .multiline()
                        .item(button().label("Primary").variant(ButtonVariant::Primary).build())
                        .item(button().label("Secondary").variant(ButtonVariant::Secondary).build())
                        .item(button().label("Outline").variant(ButtonVariant::Outline).build())
                        .item(button().label("Ghost").variant(ButtonVariant::Ghost).build())
                        .item(button().label("Link").variant(ButtonVariant::Link).build()),
                )
                .unify(),
                snippet(
                    "button()\n    \
                     .label(\"Primary\")\n    \
                     .variant(ButtonVariant::Primary)\n    \
                     .on_press(|| { /* … */ })\n    \
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
                    Row::new()
                        .s(Gap::new().x(SPACING_12))
                        .s(Align::new().center_y())
                        .item(button().label("Small").size(ButtonSize::Small).build())
                        .item(button().label("Medium").size(ButtonSize::Medium).build())
                        .item(button().label("Large").size(ButtonSize::Large).build()),
                )
                .unify(),
            ],
        )
        .unify(),
        section(
            "Icons and states",
            [
                preview(
                    Row::new()
                        .s(Gap::new().x(SPACING_12).y(SPACING_12))
                        .multiline()
                        .item(
                            button()
                                .label("Continue")
                                .right_icon(IconName::ArrowRight)
                                .build(),
                        )
                        .item(
                            button()
                                .label("Search")
                                .variant(ButtonVariant::Secondary)
                                .left_icon(IconName::Search)
                                .build(),
                        )
                        .item(button().label("Disabled").disabled(true).build()),
                )
                .unify(),
                snippet(
                    "button()\n    \
                     .label(\"Continue\")\n    \
                     .right_icon(IconName::ArrowRight)\n    \
                     .build()",
                )
                .unify(),
            ],
        )
        .unify(),
    ])
}
