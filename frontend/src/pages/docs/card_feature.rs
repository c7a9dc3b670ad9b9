use moonzoon_baselui::*;
use zoon::*;

use super::{header, page_column, preview, section, snippet};
use crate::app::App;

pub fn page(_app: &App) -> RawElOrText {
    page_column([
        header(
            "Components",
            "Feature Card",
            "Icon, title and description in a bordered panel. The marketing \
             building block of a feature grid.",
        )
        .unify(),
        section(
            "Usage",
            [
                preview(
                    Row::new()
                        .s(Width::fill())
                        .s(Gap::new().x(SPACING_16).y(SPACING_16))
                        .multiline()
                        .item(
                            card_feature(
                                IconName::Zap,
                                "Fast by default",
                                "Signal-driven rendering with no diffing overhead.",
                            )
                            .build(),
                        )
                        .item(
                            card_feature(
                                IconName::Sliders,
                                "Tokenized",
                                "Spacing, color and type all come from one scale.",
                            )
                            .build(),
                        ),
                )
                .unify(),
                snippet(
                    "card_feature(\n    \
                     IconName::Zap,\n    \
                     \"Fast by default\",\n    \
                     \"Signal-driven rendering with no diffing overhead.\",\n\
                     )\n\
                     .build()",
                )
                .unify(),
            ],
        )
        .unify(),
    ])
}
