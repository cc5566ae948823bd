//! Internationalization (i18n) module for the site's three languages.
//!
//! All locale-related logic lives here: the closed `Locale` set, the alias
//! normalization applied to UI-selected language codes, and the localized
//! interface strings used by the page shell.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for supported locales and their metadata
//! - `locale`: The `Locale` type and `normalize_locale`
//! - `strings`: Centralized localized interface strings
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::i18n::{normalize_locale, Locale};
//!
//! assert_eq!(normalize_locale("ky"), Locale::Kg);
//! let strings = Locale::En.strings();
//! ```

mod locale;
mod registry;
mod strings;

pub use locale::{normalize_locale, Locale};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use strings::LocaleStrings;
