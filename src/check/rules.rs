//! Top-level rule splitting.
//!
//! Only what the star field template emits is understood: selectors,
//! brace-delimited bodies (nested once for `@keyframes`) and `name: value;`
//! declarations. Comments and strings containing braces are not handled.

use crate::error::{Result, StarfieldError};
use crate::sampler::SHADOW_SEPARATOR;
use crate::types::ShadowPoint;

/// A top-level rule: its prelude and the raw text between its braces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub selector: String,
    pub body: String,
}

impl Rule {
    pub fn is_keyframes(&self) -> bool {
        self.selector.starts_with("@keyframes")
    }

    /// `name: value` pairs in order, trimmed.
    pub fn declarations(&self) -> Vec<(&str, &str)> {
        self.body
            .split(';')
            .filter_map(|decl| decl.split_once(':'))
            .map(|(name, value)| (name.trim(), value.trim()))
            .collect()
    }

    /// Value of the last declaration of `name`.
    pub fn declaration(&self, name: &str) -> Option<&str> {
        self.declarations()
            .into_iter()
            .rev()
            .find(|(n, _)| *n == name)
            .map(|(_, value)| value)
    }
}

/// Split a stylesheet into its top-level rules.
pub fn parse_rules(css: &str) -> Result<Vec<Rule>> {
    let mut rules = Vec::new();
    let mut depth = 0usize;
    let mut prelude_start = 0;
    let mut body_start = 0;

    for (i, c) in css.char_indices() {
        match c {
            '{' => {
                if depth == 0 {
                    body_start = i + 1;
                }
                depth += 1;
            }
            '}' => {
                if depth == 0 {
                    return Err(unbalanced(css, i));
                }
                depth -= 1;
                if depth == 0 {
                    rules.push(Rule {
                        selector: css[prelude_start..body_start - 1].trim().to_string(),
                        body: css[body_start..i].to_string(),
                    });
                    prelude_start = i + 1;
                }
            }
            _ => {}
        }
    }

    if depth != 0 {
        return Err(StarfieldError::Parse {
            message: format!("{} unclosed block(s) at end of stylesheet", depth),
            help: Some("Every '{' needs a matching '}'".to_string()),
        });
    }

    Ok(rules)
}

/// Parse a `box-shadow` value into its points. An empty value has none.
pub fn parse_shadow_list(value: &str) -> Result<Vec<ShadowPoint>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(Vec::new());
    }

    value
        .split(SHADOW_SEPARATOR.trim())
        .map(str::parse)
        .collect()
}

fn unbalanced(css: &str, offset: usize) -> StarfieldError {
    let line = css[..offset].matches('\n').count() + 1;
    StarfieldError::Parse {
        message: format!("Unexpected '}}' on line {}", line),
        help: Some("Every '}' must close an open block".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;

    #[test]
    fn test_parse_rules_with_nested_keyframes() {
        let css = "\n.a {\n    width: 1px;\n}\n\n@keyframes spin {\n    from {\n        x: 0;\n    }\n}\n";
        let rules = parse_rules(css).unwrap();

        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].selector, ".a");
        assert_eq!(rules[1].selector, "@keyframes spin");
        assert!(rules[1].is_keyframes());
        assert!(rules[1].body.contains("from {"));
    }

    #[test]
    fn test_declarations() {
        let rule = Rule {
            selector: ".stars:after".to_string(),
            body: "\n    content: \" \";\n    top: 2000px;\n    box-shadow: ;\n".to_string(),
        };

        assert_eq!(rule.declaration("content"), Some("\" \""));
        assert_eq!(rule.declaration("top"), Some("2000px"));
        assert_eq!(rule.declaration("box-shadow"), Some(""));
        assert_eq!(rule.declaration("width"), None);
    }

    #[test]
    fn test_unbalanced_close() {
        let err = parse_rules(".a {\n}\n}\n").unwrap_err();
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_unclosed_block() {
        assert!(parse_rules(".a {\n    width: 1px;\n").is_err());
    }

    #[test]
    fn test_parse_shadow_list() {
        let points = parse_shadow_list("1px 2px #ffd700, 3px 4px #ffd700").unwrap();
        assert_eq!(
            points,
            vec![
                ShadowPoint::new(1, 2, Colour::GOLD),
                ShadowPoint::new(3, 4, Colour::GOLD),
            ]
        );
    }

    #[test]
    fn test_parse_empty_shadow_list() {
        assert!(parse_shadow_list("").unwrap().is_empty());
        assert!(parse_shadow_list("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_shadow_list_trailing_separator() {
        assert!(parse_shadow_list("1px 2px #ffd700, ").is_err());
    }
}
