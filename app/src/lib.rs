#![recursion_limit = "256"]

pub mod api;
#[cfg(feature = "ssr")]
pub mod api_impl;
pub mod components;
pub mod config;
pub mod error;
pub mod languages;
pub mod map_view;
pub mod navigation;
pub mod stops;
pub mod tour;
pub mod translation_cache;
#[cfg(feature = "ssr")]
pub mod translator;
