use moonzoon_baselui::*;
use zoon::*;

use super::{header, page_column, preview, section, snippet};
use crate::app::App;

pub fn page(app: &App) -> RawElOrText {
    let trail = {
        let app = app.clone();
        breadcrumbs()
            .item(BreadcrumbItem::link("Home", "/"))
            .item(BreadcrumbItem::link("Docs", "/docs"))
            .item(BreadcrumbItem::current("Breadcrumbs"))
            .on_navigate(move |path| app.go(&path))
            .build()
    };

    page_column([
        header(
            "Components",
            "Breadcrumbs",
            "Hierarchical location trail. Every crumb but the last navigates; \
             the current one renders inert.",
        )
        .unify(),
        section(
            "Usage",
            [
                preview(trail).unify(),
                snippet(
                    "breadcrumbs()\n    \
                     .item(BreadcrumbItem::link(\"Home\", \"/\"))\n    \
                     .item(BreadcrumbItem::link(\"Docs\", \"/docs\"))\n    \
                     .item(BreadcrumbItem::current(\"Breadcrumbs\"))\n    \
                     .on_navigate(|path| router.go(&path))\n    \
                     .build()",
                )
                .unify(),
            ],
        )
        .unify(),
    ])
}
