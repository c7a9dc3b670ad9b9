// Color token system.
//
// Each token is a signal that swaps its oklch value when the theme flips.
// The primary scale is the Basel crimson; neutrals carry a faint cool cast.

use super::theme::{theme, Theme};
use zoon::*;

// Primary (crimson) scale
pub fn primary_1() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(98% 0.01 15)",
        Theme::Dark => "oklch(20% 0.02 15)",
    })
}

pub fn primary_2() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(95% 0.03 15)",
        Theme::Dark => "oklch(25% 0.04 15)",
    })
}

pub fn primary_3() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(90% 0.06 15)",
        Theme::Dark => "oklch(32% 0.07 15)",
    })
}

pub fn primary_5() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(72% 0.13 15)",
        Theme::Dark => "oklch(48% 0.13 15)",
    })
}

pub fn primary_7() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(55% 0.19 15)",
        Theme::Dark => "oklch(66% 0.19 15)",
    })
}

pub fn primary_8() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(47% 0.19 15)",
        Theme::Dark => "oklch(74% 0.17 15)",
    })
}

pub fn primary_9() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(36% 0.15 15)",
        Theme::Dark => "oklch(84% 0.12 15)",
    })
}

// Neutral scale
pub fn neutral_1() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(99% 0.005 260)",
        Theme::Dark => "oklch(13% 0.01 260)",
    })
}

pub fn neutral_2() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(96.5% 0.007 260)",
        Theme::Dark => "oklch(16% 0.012 260)",
    })
}

pub fn neutral_3() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(93% 0.01 260)",
        Theme::Dark => "oklch(21% 0.015 260)",
    })
}

pub fn neutral_4() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(90% 0.012 260)",
        Theme::Dark => "oklch(25% 0.015 260)",
    })
}

pub fn neutral_5() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(84% 0.015 260)",
        Theme::Dark => "oklch(32% 0.018 260)",
    })
}

pub fn neutral_6() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(74% 0.018 260)",
        Theme::Dark => "oklch(40% 0.02 260)",
    })
}

pub fn neutral_7() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(62% 0.02 260)",
        Theme::Dark => "oklch(52% 0.02 260)",
    })
}

pub fn neutral_8() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(52% 0.02 260)",
        Theme::Dark => "oklch(62% 0.02 260)",
    })
}

pub fn neutral_9() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(43% 0.02 260)",
        Theme::Dark => "oklch(72% 0.018 260)",
    })
}

pub fn neutral_10() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(33% 0.018 260)",
        Theme::Dark => "oklch(81% 0.015 260)",
    })
}

pub fn neutral_11() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(24% 0.015 260)",
        Theme::Dark => "oklch(88% 0.012 260)",
    })
}

pub fn neutral_12() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(16% 0.012 260)",
        Theme::Dark => "oklch(95% 0.008 260)",
    })
}

// Success scale
pub fn success_1() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(97% 0.03 150)",
        Theme::Dark => "oklch(16% 0.03 150)",
    })
}

pub fn success_7() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(52% 0.14 150)",
        Theme::Dark => "oklch(68% 0.14 150)",
    })
}

pub fn success_9() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(32% 0.12 150)",
        Theme::Dark => "oklch(86% 0.11 150)",
    })
}

// Warning scale
pub fn warning_1() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(97% 0.04 90)",
        Theme::Dark => "oklch(16% 0.04 90)",
    })
}

pub fn warning_7() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(55% 0.15 90)",
        Theme::Dark => "oklch(72% 0.15 90)",
    })
}

pub fn warning_9() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(33% 0.12 90)",
        Theme::Dark => "oklch(87% 0.12 90)",
    })
}

// Error scale
pub fn error_1() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(97% 0.03 30)",
        Theme::Dark => "oklch(16% 0.03 30)",
    })
}

pub fn error_7() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(52% 0.19 30)",
        Theme::Dark => "oklch(68% 0.18 30)",
    })
}

pub fn error_9() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(32% 0.15 30)",
        Theme::Dark => "oklch(86% 0.12 30)",
    })
}

// Static colors
pub fn transparent() -> &'static str {
    "transparent"
}

pub fn white() -> &'static str {
    "oklch(100% 0 0)"
}
