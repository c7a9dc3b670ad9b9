//! # Basel UI for MoonZoon
//!
//! Declarative, builder-style components styled through a reactive design
//! token system. Every color token is a signal derived from the library
//! theme, so components restyle themselves when the host flips the theme.
//!
//! The library deliberately does not persist the theme. The host application
//! owns the single source of truth and pushes changes in through
//! [`tokens::theme::set_theme`].
//!
//! ```rust
//! use moonzoon_baselui::*;
//! use zoon::*;
//!
//! fn cta() -> impl Element {
//!     button()
//!         .label("Get Started")
//!         .variant(ButtonVariant::Primary)
//!         .size(ButtonSize::Large)
//!         .on_press(|| { /* navigate */ })
//!         .build()
//! }
//! ```

pub mod components;
pub mod tokens;

pub use components::*;
pub use tokens::*;

pub use zoon;
