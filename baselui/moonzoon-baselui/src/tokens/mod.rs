// Basel UI design token system.
// Color tokens are reactive signals over the library theme; the rest are
// plain constants.

pub mod animation;
pub mod border;
pub mod color;
pub mod corner_radius;
pub mod opacity;
pub mod shadow;
pub mod spacing;
pub mod theme;
pub mod typography;

pub use animation::*;
pub use border::*;
pub use color::*;
pub use corner_radius::*;
pub use opacity::*;
pub use shadow::*;
pub use spacing::*;
pub use theme::*;
pub use typography::*;
