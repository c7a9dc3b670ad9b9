use moonzoon_baselui::*;
use zoon::*;

use super::{header, page_column, preview, section, snippet};
use crate::app::App;

pub fn page(_app: &App) -> RawElOrText {
    page_column([
        header(
            "Components",
            "FAQs",
            "Titled question-and-answer section built on the accordion, for \
             landing pages and support sections.",
        )
        .unify(),
        section(
            "Usage",
            [
                preview(
                    faq("Frequently asked questions")
                        .entries([
                            FaqEntry::new(
                                "Do I need the whole library?",
                                "No. Every component is usable on its own; pull in \
                                 only what your page needs.",
                            ),
                            FaqEntry::new(
                                "Does it work offline?",
                                "Yes. All assets are compiled into the WASM bundle, \
                                 nothing is fetched at runtime.",
                            ),
                        ])
                        .build(),
                )
                .unify(),
                snippet(
                    "faq(\"Frequently asked questions\")\n    \
                     .entries([\n        \
                     FaqEntry::new(\"Do I need the whole library?\", \"No. …\"),\n        \
                     FaqEntry::new(\"Does it work offline?\", \"Yes. …\"),\n    \
                     ])\n    \
                     .build()",
                )
                .unify(),
            ],
        )
        .unify(),
    ])
}
