use moonzoon_baselui::*;
use zoon::*;

use super::{header, page_column, preview, section, snippet};
use crate::app::App;

pub fn page(_app: &App) -> RawElOrText {
    page_column([
        header(
            "Components",
            "Info Card",
            "Compact title-and-text panel in three sizes, plain or filled.",
        )
        .unify(),
        section(
            "Sizes",
            [
                preview(
                    Column::new()
                        .s(Width::fill())
                        .s(Gap::new().y(SPACING_16))
                        .item(
                            card_info("Small", "Tight padding for dense layouts.")
                                .size(CardSize::Small)
                                .build(),
                        )
                        .item(
                            card_info("Medium", "The default.")
                                .size(CardSize::Medium)
                                .build(),
                        )
                        .item(
                            card_info("Large", "Generous padding for hero sections.")
                                .size(CardSize::Large)
                                .build(),
                        ),
                )
                .unify(),
                snippet(
                    "card_info(\"Small\", \"Tight padding for dense layouts.\")\n    \
                     .size(CardSize::Small)\n    \
                     .build()",
                )
                .unify(),
            ],
        )
        .unify(),
        section(
            "Filled",
            [
                preview(
                    card_info("Filled", "Sits on the secondary surface color.")
                        .filled(true)
                        .build(),
                )
                .unify(),
                snippet("card_info(\"Filled\", \"…\").filled(true).build()").unify(),
            ],
        )
        .unify(),
    ])
}
