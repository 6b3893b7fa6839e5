//! CLI command implementations.

pub(crate) mod render;

pub(crate) use render::{RenderArgs, style_help};
