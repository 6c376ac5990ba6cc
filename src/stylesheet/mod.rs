//! Textual rule-block matching over stylesheet source
//!
//! The checks only need to know that a named rule block exists and contains a
//! given declaration, so the stylesheet is searched in source form with
//! whitespace-tolerant patterns. No cascade or computed-style evaluation is
//! performed.

use regex::Regex;

/// Outcome of a declaration check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCheck {
    /// Block found and the declaration is present
    Present,
    /// No block matched the selector pattern
    SelectorNotFound,
    /// Block found but the declaration is missing
    DeclarationNotFound,
}

impl RuleCheck {
    pub fn is_present(&self) -> bool {
        matches!(self, Self::Present)
    }
}

/// Matches rule blocks and declarations in stylesheet text
pub struct RuleMatcher {
    source: String,
}

impl RuleMatcher {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
        }
    }

    /// Locate the first brace-delimited block whose selector matches the
    /// given literal selector, tolerating arbitrary whitespace between
    /// selector tokens and before the opening brace. Returns the block body.
    pub fn find_block(&self, selector: &str) -> Option<&str> {
        let tokens: Vec<String> = selector.split_whitespace().map(|t| regex::escape(t)).collect();
        if tokens.is_empty() {
            return None;
        }
        let pattern = format!(r"{}\s*\{{([^}}]*)\}}", tokens.join(r"\s+"));
        let re = Regex::new(&pattern).ok()?;
        re.captures(&self.source)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Check whether a block body contains `property: value`, tolerating
    /// whitespace around the colon
    pub fn declaration_in(body: &str, property: &str, value: &str) -> bool {
        let pattern = format!(r"{}\s*:\s*{}", regex::escape(property), regex::escape(value));
        Regex::new(&pattern)
            .map(|re| re.is_match(body))
            .unwrap_or(false)
    }

    /// Locate the selector's block and check one declaration, reporting
    /// "selector not found" and "declaration not found" as distinct outcomes
    pub fn check(&self, selector: &str, property: &str, value: &str) -> RuleCheck {
        match self.find_block(selector) {
            None => RuleCheck::SelectorNotFound,
            Some(body) => {
                if Self::declaration_in(body, property, value) {
                    RuleCheck::Present
                } else {
                    RuleCheck::DeclarationNotFound
                }
            }
        }
    }
}
