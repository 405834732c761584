//! Structural checks for generated stylesheets.
//!
//! Coordinates are random, so a stylesheet is verified by its shape: the
//! rule set, the entry count and colour of every layer, and the shared
//! keyframe loop.

mod rules;

pub use rules::{parse_rules, parse_shadow_list, Rule};

use crate::error::Result;
use crate::template::{
    AFTER_CONTENT, ANIMATION_NAME, CONTAINER_DECLARATIONS, CONTAINER_SELECTOR, LAYER_BACKGROUND,
};
use crate::types::{ShadowPoint, Tier, FIELD_EXTENT};

/// What was found for one star layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSummary {
    pub selector: String,
    pub points: Vec<ShadowPoint>,
    pub width: Option<String>,
    pub animation: Option<String>,
}

/// Result of checking a stylesheet against a set of tiers.
#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub layers: Vec<LayerSummary>,
    pub problems: Vec<String>,
}

impl CheckReport {
    pub fn is_ok(&self) -> bool {
        self.problems.is_empty()
    }

    fn problem(&mut self, message: impl Into<String>) {
        self.problems.push(message.into());
    }
}

/// Check a stylesheet against the tiers it should have been generated from.
///
/// Returns an error only when the text cannot be split into rules; every
/// other deviation is recorded as a problem in the report.
pub fn check_stylesheet(css: &str, tiers: &[Tier]) -> Result<CheckReport> {
    let rules = parse_rules(css)?;
    let mut report = CheckReport::default();

    let container = format!(".{}", CONTAINER_SELECTOR);
    if let Some(rule) = single_rule(&rules, &container, &mut report) {
        for (name, value) in CONTAINER_DECLARATIONS {
            expect_declaration(rule, name, value, &mut report);
        }
    }

    check_keyframes(&rules, &mut report);

    let mut known = vec![container];
    for tier in tiers {
        let selector = format!(".{}", tier.selector());
        let after = format!("{}:after", selector);

        let layer_shadows = single_rule(&rules, &selector, &mut report)
            .map(|rule| check_layer(rule, tier, &mut report));

        if let Some(rule) = single_rule(&rules, &after, &mut report) {
            check_after(rule, tier, layer_shadows.flatten(), &mut report);
        }

        known.push(selector);
        known.push(after);
    }

    for rule in &rules {
        if !rule.is_keyframes() && !known.contains(&rule.selector) {
            report.problem(format!("unexpected rule '{}'", rule.selector));
        }
    }

    Ok(report)
}

/// Find the one rule with `selector`, recording a problem when there is not exactly one.
fn single_rule<'a>(rules: &'a [Rule], selector: &str, report: &mut CheckReport) -> Option<&'a Rule> {
    let matches: Vec<&Rule> = rules.iter().filter(|r| r.selector == selector).collect();
    match matches.as_slice() {
        [rule] => Some(*rule),
        [] => {
            report.problem(format!("missing rule '{}'", selector));
            None
        }
        many => {
            report.problem(format!("rule '{}' appears {} times", selector, many.len()));
            None
        }
    }
}

fn check_keyframes(rules: &[Rule], report: &mut CheckReport) {
    let keyframes: Vec<&Rule> = rules.iter().filter(|r| r.is_keyframes()).collect();
    let [rule] = keyframes.as_slice() else {
        report.problem(format!(
            "expected exactly one @keyframes rule, found {}",
            keyframes.len()
        ));
        return;
    };

    let expected = format!("@keyframes {}", ANIMATION_NAME);
    if rule.selector != expected {
        report.problem(format!("expected '{}', found '{}'", expected, rule.selector));
    }

    let scroll = format!("translateY(-{}px)", FIELD_EXTENT);
    if !rule.body.contains("translateY(0px)") || !rule.body.contains(&scroll) {
        report.problem(format!("keyframes must translate from 0px to -{}px", FIELD_EXTENT));
    }
}

/// Check a layer rule; returns its raw `box-shadow` value when present.
fn check_layer<'a>(rule: &'a Rule, tier: &Tier, report: &mut CheckReport) -> Option<&'a str> {
    let selector = &rule.selector;
    let size = format!("{}px", tier.size_px());
    expect_declaration(rule, "width", &size, report);
    expect_declaration(rule, "height", &size, report);
    expect_declaration(rule, "background", LAYER_BACKGROUND, report);

    let animation = format!(
        "{} {}s linear infinite",
        ANIMATION_NAME,
        tier.duration_secs()
    );
    expect_declaration(rule, "animation", &animation, report);

    let shadows = rule.declaration("box-shadow");
    let points = match shadows {
        Some(value) => parse_points(selector, value, report),
        None => {
            report.problem(format!("{}: missing box-shadow", selector));
            Vec::new()
        }
    };

    if shadows.is_some() && points.len() != tier.count {
        report.problem(format!(
            "{}: expected {} shadow entries, found {}",
            selector,
            tier.count,
            points.len()
        ));
    }

    if let Some(point) = points.iter().find(|p| p.colour != tier.colour) {
        report.problem(format!(
            "{}: expected colour {}, found {}",
            selector, tier.colour, point.colour
        ));
    }

    report.layers.push(LayerSummary {
        selector: selector.clone(),
        points,
        width: rule.declaration("width").map(str::to_string),
        animation: rule.declaration("animation").map(str::to_string),
    });

    shadows
}

fn check_after(rule: &Rule, tier: &Tier, layer_shadows: Option<&str>, report: &mut CheckReport) {
    let size = format!("{}px", tier.size_px());
    expect_declaration(rule, "content", AFTER_CONTENT, report);
    expect_declaration(rule, "position", "absolute", report);
    expect_declaration(rule, "top", &format!("{}px", FIELD_EXTENT), report);
    expect_declaration(rule, "width", &size, report);
    expect_declaration(rule, "height", &size, report);
    expect_declaration(rule, "background", LAYER_BACKGROUND, report);

    match (rule.declaration("box-shadow"), layer_shadows) {
        (Some(after), Some(layer)) if after != layer => {
            report.problem(format!(
                "{}: box-shadow differs from its layer",
                rule.selector
            ));
        }
        (None, _) => report.problem(format!("{}: missing box-shadow", rule.selector)),
        _ => {}
    }
}

fn expect_declaration(rule: &Rule, name: &str, expected: &str, report: &mut CheckReport) {
    match rule.declaration(name) {
        Some(value) if value == expected => {}
        Some(value) => report.problem(format!(
            "{}: expected {}: {}, found {}",
            rule.selector, name, expected, value
        )),
        None => report.problem(format!("{}: missing {}", rule.selector, name)),
    }
}

fn parse_points(selector: &str, value: &str, report: &mut CheckReport) -> Vec<ShadowPoint> {
    match parse_shadow_list(value) {
        Ok(points) => points,
        Err(e) => {
            report.problem(format!("{}: {}", selector, e));
            Vec::new()
        }
    }
}
