use moonzoon_baselui::*;
use zoon::*;

use super::{header, page_column, preview, section, snippet};
use crate::app::App;

pub fn page(_app: &App) -> RawElOrText {
    let added: Mutable<u32> = Mutable::new(0);

    let demo = Column::new()
        .s(Gap::new().y(SPACING_12))
        .item(
            El::new()
                .update_raw_el(|raw_el| raw_el.style("max-width", "320px"))
                .child(
                    card_product("Field Notes", "$12.00")
                        .description("Pocket notebook, dot grid, 48 pages.")
                        .on_action({
                            let added = added.clone();
                            move || added.update(|count| count + 1)
                        })
                        .build(),
                ),
        )
        .item(El::new().child_signal(
            added
                .signal()
                .map(|count| muted(format!("Added to cart {count} times."))),
        ));

    page_column([
        header(
            "Components",
            "Product Card",
            "Image area, name, price and a call-to-action button for commerce \
             layouts.",
        )
        .unify(),
        section(
            "Usage",
            [
                preview(demo).unify(),
                snippet(
                    "card_product(\"Field Notes\", \"$12.00\")\n    \
                     .description(\"Pocket notebook, dot grid, 48 pages.\")\n    \
                     .on_action(|| { /* add to cart */ })\n    \
                     .build()",
                )
                .unify(),
            ],
        )
        .unify(),
    ])
}
