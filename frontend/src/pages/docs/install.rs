use moonzoon_baselui::*;
use zoon::*;

use super::{header, page_column, section, snippet, snippet_in};
use crate::app::App;

pub fn page(app: &App) -> RawElOrText {
    let crate_name = app.meta().crate_name.clone();
    page_column([
        header(
            "Getting Started",
            "Installation",
            "Add the crate to your MoonZoon workspace, seed the theme once at \
             startup, and every component is ready to use.",
        )
        .unify(),
        section(
            "Add the dependency",
            [
                paragraph(format!(
                    "Declare {crate_name} in your frontend crate. The library \
                     only depends on zoon, so it follows whatever MoonZoon \
                     revision your workspace pins.",
                ))
                .unify(),
                snippet_in(
                    "toml",
                    "[dependencies]\n\
                     zoon.workspace = true\n\
                     moonzoon-baselui = \"0.1\"",
                )
                .unify(),
            ],
        )
        .unify(),
        section(
            "Seed the theme",
            [
                paragraph(
                    "Token signals default to the light theme. Set the initial \
                     value before `start_app` so the first paint is already \
                     correct:",
                )
                .unify(),
                snippet(
                    "use moonzoon_baselui::{set_theme, Theme};\n\
                     use zoon::*;\n\
                     \n\
                     fn main() {\n    \
                     set_theme(Theme::Dark);\n    \
                     start_app(\"app\", root);\n\
                     }",
                )
                .unify(),
            ],
        )
        .unify(),
        section(
            "Run it",
            [
                paragraph("Serve the app with the MoonZoon CLI as usual:").unify(),
                snippet_in("sh", "mzoon start --open").unify(),
            ],
        )
        .unify(),
    ])
}
