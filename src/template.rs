//! Stylesheet template.
//!
//! Substitutes per-tier shadow lists into the fixed star field stylesheet:
//! a full-viewport container, one scrolling layer per tier with an `:after`
//! copy one field below it, and the shared keyframe loop.

use crate::types::{Tier, FIELD_EXTENT};

/// Name of the shared keyframe animation.
pub const ANIMATION_NAME: &str = "animStar";

/// Class name of the background container.
pub const CONTAINER_SELECTOR: &str = "stars-container";

/// Background of the container.
pub const CONTAINER_BACKGROUND: &str =
    "radial-gradient(ellipse at bottom, #1b2735 0%, #090a0f 100%)";

/// Fixed declarations of the container rule, in emitted order.
pub const CONTAINER_DECLARATIONS: [(&str, &str); 9] = [
    ("position", "fixed"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
    ("z-index", "-1"),
    ("overflow", "hidden"),
    ("pointer-events", "none"),
    ("background", CONTAINER_BACKGROUND),
];

/// Background of every star layer and its `:after` copy.
pub const LAYER_BACKGROUND: &str = "transparent";

/// `content` of the `:after` copy; a non-empty value makes it render.
pub const AFTER_CONTENT: &str = "\" \"";

/// A tier paired with its serialized `box-shadow` list.
#[derive(Debug, Clone, Copy)]
pub struct Layer<'a> {
    pub tier: &'a Tier,
    pub shadows: &'a str,
}

impl<'a> Layer<'a> {
    pub fn new(tier: &'a Tier, shadows: &'a str) -> Self {
        Self { tier, shadows }
    }
}

/// Assemble the full stylesheet.
///
/// Layers are emitted in the given order. The output starts with a blank
/// line, separates rules with a blank line and ends with a newline.
pub fn render_stylesheet(layers: &[Layer<'_>]) -> String {
    let mut css = String::from("\n");
    css.push_str(&container_rule());

    for layer in layers {
        css.push('\n');
        css.push_str(&layer_rule(layer));
        css.push('\n');
        css.push_str(&after_rule(layer));
    }

    css.push('\n');
    css.push_str(&keyframes_rule());
    css
}

fn container_rule() -> String {
    let mut rule = format!(".{CONTAINER_SELECTOR} {{\n");
    for (name, value) in CONTAINER_DECLARATIONS {
        rule.push_str(&format!("    {name}: {value};\n"));
    }
    rule.push_str("}\n");
    rule
}

fn layer_rule(layer: &Layer<'_>) -> String {
    let tier = layer.tier;
    format!(
        ".{selector} {{\n\
         \x20   width: {size}px;\n\
         \x20   height: {size}px;\n\
         \x20   background: {LAYER_BACKGROUND};\n\
         \x20   box-shadow: {shadows};\n\
         \x20   animation: {ANIMATION_NAME} {duration}s linear infinite;\n\
         }}\n",
        selector = tier.selector(),
        size = tier.size_px(),
        shadows = layer.shadows,
        duration = tier.duration_secs(),
    )
}

fn after_rule(layer: &Layer<'_>) -> String {
    let tier = layer.tier;
    format!(
        ".{selector}:after {{\n\
         \x20   content: {AFTER_CONTENT};\n\
         \x20   position: absolute;\n\
         \x20   top: {FIELD_EXTENT}px;\n\
         \x20   width: {size}px;\n\
         \x20   height: {size}px;\n\
         \x20   background: {LAYER_BACKGROUND};\n\
         \x20   box-shadow: {shadows};\n\
         }}\n",
        selector = tier.selector(),
        size = tier.size_px(),
        shadows = layer.shadows,
    )
}

fn keyframes_rule() -> String {
    format!(
        "@keyframes {ANIMATION_NAME} {{\n\
         \x20   from {{\n\
         \x20       transform: translateY(0px);\n\
         \x20   }}\n\
         \x20   to {{\n\
         \x20       transform: translateY(-{FIELD_EXTENT}px);\n\
         \x20   }}\n\
         }}\n"
    )
}
