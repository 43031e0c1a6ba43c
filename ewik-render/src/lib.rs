//! # ewik-render
//!
//! Template rendering library for ewik.
//!
//! This crate fills the page layout, landing page, stylesheet and client
//! script templates using Askama.

pub mod templates;

pub use templates::{
    render_index, IndexBodyTemplate, LayoutTemplate, RenderError, ScriptTemplate, StylesTemplate,
};
