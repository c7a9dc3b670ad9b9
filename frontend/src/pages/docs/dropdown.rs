use moonzoon_baselui::*;
use zoon::*;

use super::{header, page_column, preview, section, snippet};
use crate::app::App;

pub fn page(_app: &App) -> RawElOrText {
    let picked: Mutable<Option<String>> = Mutable::new(None);

    let demo = Column::new()
        .s(Gap::new().y(SPACING_12))
        .s(Align::new().left())
        .item(
            dropdown("Export as…")
                .items([
                    DropdownItem::new("json", "JSON"),
                    DropdownItem::new("csv", "CSV"),
                    DropdownItem::new("toml", "TOML"),
                ])
                .on_select({
                    let picked = picked.clone();
                    move |value| picked.set(Some(value))
                })
                .build(),
        )
        .item(El::new().child_signal(picked.signal_cloned().map(|picked| {
            muted(match picked {
                Some(value) => format!("Selected: {value}"),
                None => "Nothing selected yet.".to_owned(),
            })
        })));

    page_column([
        header(
            "Components",
            "Dropdown",
            "Trigger button with a menu panel below. Closes on selection or on \
             a click outside.",
        )
        .unify(),
        section(
            "Usage",
            [
                preview(demo).unify(),
                snippet(
                    "dropdown(\"Export as…\")\n    \
                     .items([\n        \
                     DropdownItem::new(\"json\", \"JSON\"),\n        \
                     DropdownItem::new(\"csv\", \"CSV\"),\n    \
                     ])\n    \
                     .on_select(|value| { /* … */ })\n    \
                     .build()",
                )
                .unify(),
            ],
        )
        .unify(),
    ])
}
