pub mod config;
pub mod content;
pub mod html;
pub mod i18n;
pub mod routes;
pub mod seo;
pub mod web;
