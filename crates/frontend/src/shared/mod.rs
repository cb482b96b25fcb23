pub mod api_context;
pub mod api_utils;
pub mod collection;
pub mod components;
pub mod config;
pub mod icons;
pub mod rest;
pub mod session;
