//! fontopt-core: a polite note to the font resolver
//!
//! Before any glyph is drawn, somebody has to say which font they mean and
//! how big it should be. This library is that note: an immutable bundle of
//! wishes (family and style, or an exact typeface, fallbacks, size, tracking,
//! underline, metric overrides, variable-font axes) that a typeface resolver
//! can read, compare and use as a cache key.
//!
//! ## What's in the envelope
//!
//! - [`FontOptions`](options::FontOptions): the bundle itself, built one
//!   `with_*` call at a time
//! - [`AxisTag`](tags::AxisTag) and [`AxisSetting`](variation::AxisSetting):
//!   which variable-font dial to turn, and how far
//! - [`FontStyleFlags`](style::FontStyleFlags): the classic bold/italic/underlined switches
//! - [`Typeface`](typeface::Typeface): the door to a typeface loaded elsewhere
//! - [`FontOptionsConfig`](config::FontOptionsConfig): the same wishes written down as JSON
//!
//! ## A Sample Note
//!
//! ```rust
//! use fontopt_core::options::FontOptions;
//! use fontopt_core::style::FontStyleFlags;
//! use fontopt_core::tags::AxisTag;
//!
//! let body = FontOptions::from_name("Inter", 15.0, FontStyleFlags::PLAIN)
//!     .with_fallbacks(vec!["Noto Sans".into()])
//!     .with_kerning_factor(0.01)
//!     .with_variation(AxisTag::parse("wght")?, 420.0);
//!
//! let heading = body.clone().with_height(28.0).with_variation(AxisTag::parse("wght")?, 720.0);
//!
//! assert_eq!(body.variations().len(), 1);
//! assert!(body < heading);
//! #
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## House Rules
//!
//! - Values never change in place; every `with_*` hands back a new bundle
//! - Pixel height and point height take turns: setting one clears the other
//! - An attached typeface speaks for itself, so name and style follow it
//! - Each axis appears at most once; setting it again updates it where it sits
//!
//! ---
//!
//! Crafted with care at FontLab https://www.fontlab.com/

pub mod config;
mod ord;
pub mod options;
pub mod output;
pub mod style;
pub mod tags;
pub mod typeface;
pub mod variation;
