use moonzoon_baselui::*;
use zoon::*;

use super::{header, page_column, preview, section, snippet};
use crate::app::App;

pub fn page(_app: &App) -> RawElOrText {
    page_column([
        header(
            "Components",
            "Alerts",
            "Inline status message with a colored accent stripe, an icon and an \
             optional title.",
        )
        .unify(),
        section(
            "Variants",
            [
                preview(
                    Column::new()
                        .s(Width::fill())
                        .s(Gap::new().y(SPACING_12))
                        .item(
                            alert("Release 0.1.0 is out.")
                                .variant(AlertVariant::Info)
                                .build(),
                        )
                        .item(
                            alert("Settings saved.")
                                .variant(AlertVariant::Success)
                                .build(),
                        )
                        .item(
                            alert("This API is experimental and may change.")
                                .variant(AlertVariant::Warning)
                                .build(),
                        )
                        .item(
                            alert("The connection was lost.")
                                .variant(AlertVariant::Error)
                                .build(),
                        ),
                )
                .unify(),
                snippet(
                    "alert(\"Settings saved.\")\n    \
                     .variant(AlertVariant::Success)\n    \
                     .build()",
                )
                .unify(),
            ],
        )
        .unify(),
        section(
            "With a title",
            [
                preview(
                    alert("The uploaded file exceeds the 10 MB limit and was rejected.")
                        .variant(AlertVariant::Error)
                        .title("Upload failed")
                        .build(),
                )
                .unify(),
                snippet(
                    "alert(\"The uploaded file exceeds the 10 MB limit.\")\n    \
                     .variant(AlertVariant::Error)\n    \
                     .title(\"Upload failed\")\n    \
                     .build()",
                )
                .unify(),
            ],
        )
        .unify(),
    ])
}
