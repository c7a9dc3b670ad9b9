use moonzoon_baselui::*;
use zoon::*;

use super::{header, page_column, preview, section, snippet};
use crate::app::App;

pub fn page(_app: &App) -> RawElOrText {
    page_column([
        header(
            "Components",
            "Accordion",
            "Vertically stacked disclosure panels. One panel open at a time by \
             default, or several with allow_multiple.",
        )
        .unify(),
        section(
            "Basic usage",
            [
                preview(
                    accordion()
                        .item(AccordionItem::new(
                            "Is it accessible?",
                            "Panels are rendered as buttons, so keyboard focus and \
                             activation come from the browser.",
                        ))
                        .item(AccordionItem::new(
                            "Is it styled?",
                            "Borders, radii and colors all come from the token \
                             tables and follow the active theme.",
                        ))
                        .item(AccordionItem::new(
                            "Is it animated?",
                            "The chevron rotates with the library's transform \
                             transition; the panel itself snaps to keep layout \
                             simple.",
                        ))
                        .default_expanded(vec![0])
                        .build(),
                )
                .unify(),
                snippet(
                    "accordion()\n    \
                     .item(AccordionItem::new(\"Is it accessible?\", \"…\"))\n    \
                     .item(AccordionItem::new(\"Is it styled?\", \"…\"))\n    \
                     .default_expanded(vec![0])\n    \
                     .build()",
                )
                .unify(),
            ],
        )
        .unify(),
        section(
            "Multiple panels open",
            [
                preview(
                    accordion()
                        .allow_multiple(true)
                        .item(AccordionItem::new("First", "Stays open independently."))
                        .item(AccordionItem::new("Second", "So does this one."))
                        .build(),
                )
                .unify(),
                snippet("accordion().allow_multiple(true) /* … */ .build()").unify(),
            ],
        )
        .unify(),
    ])
}
