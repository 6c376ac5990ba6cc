//! Streaming markup scan built on the html5ever tokenizer

use super::{Marker, ScanConfig, ScanResult};
use html5ever::tendril::StrTendril;
use html5ever::tokenizer::{
    BufferQueue, Tag, TagKind, Token, TokenSink, TokenSinkResult, Tokenizer, TokenizerOpts,
};
use markup5ever::Attribute;
use std::cell::RefCell;

/// Scans page markup and produces a [`ScanResult`]
pub struct PageScanner {
    config: ScanConfig,
}

impl PageScanner {
    /// Create a scanner with the default page vocabulary
    pub fn new() -> Self {
        Self {
            config: ScanConfig::default(),
        }
    }

    /// Create a scanner with custom region predicates
    pub fn with_config(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Scan document text in a single forward pass
    ///
    /// Never fails: malformed or unbalanced markup degrades to a partial
    /// result, and a region that never matches yields an empty summary.
    pub fn scan(&self, content: &str) -> ScanResult {
        let sink = ScanSink::new(self.config.clone());
        let tokenizer = Tokenizer::new(sink, TokenizerOpts::default());

        let input = BufferQueue::default();
        input.push_back(StrTendril::from(content));
        let _ = tokenizer.feed(&input);
        tokenizer.end();

        let result = tokenizer.sink.into_result();
        log::debug!(
            "scan: grid={} fields={} triggers={} links={}",
            result.has_contact_grid,
            result.copyable_fields.len(),
            result.copy_triggers.len(),
            result.link_markers.len()
        );
        result
    }
}

impl Default for PageScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// Mutable scan state, scoped to one tokenizer run
#[derive(Default)]
struct ScanState {
    in_contact_region: bool,
    contact_depth: u32,
    in_link_region: bool,
    link_depth: u32,
    /// Markers collected for the currently open link, if any
    current_link: Option<Vec<Marker>>,
    result: ScanResult,
}

/// Token sink tracking both regions independently during one pass
struct ScanSink {
    config: ScanConfig,
    state: RefCell<ScanState>,
}

impl ScanSink {
    fn new(config: ScanConfig) -> Self {
        Self {
            config,
            state: RefCell::new(ScanState::default()),
        }
    }

    fn into_result(self) -> ScanResult {
        self.state.into_inner().result
    }

    fn handle_start_tag(&self, tag: &Tag) {
        let name: &str = &tag.name;
        let state = &mut *self.state.borrow_mut();

        // Contact region: enter at depth 0, track nested same-tag containers
        if !state.in_contact_region {
            if name == self.config.region_tag
                && attr(&tag.attrs, "id") == Some(self.config.region_id.as_str())
            {
                state.in_contact_region = true;
                state.contact_depth = 1;
            }
        } else {
            if name == self.config.region_tag {
                state.contact_depth += 1;
            }

            if has_class(&tag.attrs, &self.config.grid_class) {
                state.result.has_contact_grid = true;
            }

            if name == self.config.field_tag
                && attr(&tag.attrs, &self.config.field_flag).is_some()
            {
                // Fields without an identifier are skipped, not recorded empty
                if let Some(id) = attr(&tag.attrs, "id").filter(|id| !id.is_empty()) {
                    state.result.copyable_fields.push(id.to_string());
                }
            }

            if name == self.config.trigger_tag {
                if let Some(target) =
                    attr(&tag.attrs, &self.config.trigger_attr).filter(|t| !t.is_empty())
                {
                    state.result.copy_triggers.push(target.to_string());
                }
            }
        }

        // Link container, tracked independently of the contact region
        if !state.in_link_region {
            if name == self.config.links_tag && has_class(&tag.attrs, &self.config.links_class) {
                state.in_link_region = true;
                state.link_depth = 1;
            }
            return;
        }

        if name == self.config.links_tag {
            state.link_depth += 1;
        }

        if name == self.config.link_tag {
            state.current_link = Some(Vec::new());
        } else if name == self.config.marker_tag {
            if let Some(markers) = state.current_link.as_mut() {
                if has_class(&tag.attrs, &self.config.icon_class) {
                    markers.push(Marker::Icon);
                }
                if has_class(&tag.attrs, &self.config.label_class) {
                    markers.push(Marker::Label);
                }
            }
        }
    }

    fn handle_end_tag(&self, tag: &Tag) {
        let name: &str = &tag.name;
        let state = &mut *self.state.borrow_mut();

        // Spurious end tags outside a region are ignored; depth never goes
        // negative
        if state.in_contact_region && name == self.config.region_tag {
            state.contact_depth = state.contact_depth.saturating_sub(1);
            if state.contact_depth == 0 {
                state.in_contact_region = false;
            }
        }

        if !state.in_link_region {
            return;
        }

        if name == self.config.link_tag {
            if let Some(markers) = state.current_link.take() {
                if !markers.is_empty() {
                    state.result.link_markers.push(markers);
                }
            }
        } else if name == self.config.links_tag {
            state.link_depth = state.link_depth.saturating_sub(1);
            if state.link_depth == 0 {
                state.in_link_region = false;
                state.current_link = None;
            }
        }
    }
}

impl TokenSink for ScanSink {
    type Handle = ();

    fn process_token(&self, token: Token, _line_number: u64) -> TokenSinkResult<()> {
        match token {
            Token::TagToken(tag) => match tag.kind {
                TagKind::StartTag => self.handle_start_tag(&tag),
                TagKind::EndTag => self.handle_end_tag(&tag),
            },
            // Text content is not semantically inspected; tokenizer errors
            // are tolerated
            _ => {}
        }
        TokenSinkResult::Continue
    }
}

fn attr<'a>(attrs: &'a [Attribute], name: &str) -> Option<&'a str> {
    attrs
        .iter()
        .find(|a| &*a.name.local == name)
        .map(|a| &*a.value)
}

fn has_class(attrs: &[Attribute], class: &str) -> bool {
    attr(attrs, "class")
        .map(|c| c.split_whitespace().any(|token| token == class))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contact_section_scenario() {
        let scanner = PageScanner::new();
        let result = scanner.scan(
            r#"<section id="contacts"><div class="contact-grid"><input id="email" readonly><button data-copy-target="email">Copy</button></div></section>"#,
        );

        assert!(result.has_contact_grid);
        assert_eq!(result.copyable_fields, vec!["email".to_string()]);
        assert_eq!(result.copy_triggers, vec!["email".to_string()]);
    }

    #[test]
    fn test_region_never_matches() {
        let scanner = PageScanner::new();
        let result = scanner.scan(r#"<section id="about"><input id="x" readonly></section>"#);
        assert_eq!(result, ScanResult::default());
    }

    #[test]
    fn test_elements_outside_region_ignored() {
        let scanner = PageScanner::new();
        let result = scanner.scan(
            r#"<input id="stray" readonly>
               <section id="contacts"><input id="email" readonly></section>
               <button data-copy-target="late">Copy</button>"#,
        );
        assert_eq!(result.copyable_fields, vec!["email".to_string()]);
        assert!(result.copy_triggers.is_empty());
    }

    #[test]
    fn test_nested_same_tag_does_not_close_region() {
        let scanner = PageScanner::new();
        let result = scanner.scan(
            r#"<section id="contacts">
                 <section class="inner">
                   <input id="phone" readonly>
                 </section>
                 <input id="email" readonly>
               </section>
               <input id="outside" readonly>"#,
        );
        assert_eq!(
            result.copyable_fields,
            vec!["phone".to_string(), "email".to_string()]
        );
    }

    #[test]
    fn test_field_without_id_skipped() {
        let scanner = PageScanner::new();
        let result = scanner.scan(
            r#"<section id="contacts"><input readonly><input id="email" readonly></section>"#,
        );
        assert_eq!(result.copyable_fields, vec!["email".to_string()]);
    }

    #[test]
    fn test_trigger_with_empty_target_skipped() {
        let scanner = PageScanner::new();
        let result = scanner.scan(
            r#"<section id="contacts">
                 <button data-copy-target="">Copy</button>
                 <button data-copy-target="email">Copy</button>
               </section>"#,
        );
        assert_eq!(result.copy_triggers, vec!["email".to_string()]);
    }

    #[test]
    fn test_non_readonly_input_skipped() {
        let scanner = PageScanner::new();
        let result =
            scanner.scan(r#"<section id="contacts"><input id="editable"></section>"#);
        assert!(result.copyable_fields.is_empty());
    }

    #[test]
    fn test_link_marker_order() {
        let scanner = PageScanner::new();
        let result = scanner.scan(
            r##"<div class="social-links">
                 <a href="#"><span class="social-icon">i</span><span class="social-label">GitHub</span></a>
                 <a href="#"><span class="social-label">Mail</span><span class="social-icon">i</span></a>
               </div>"##,
        );
        assert_eq!(
            result.link_markers,
            vec![
                vec![Marker::Icon, Marker::Label],
                vec![Marker::Label, Marker::Icon],
            ]
        );
    }

    #[test]
    fn test_link_without_markers_not_recorded() {
        let scanner = PageScanner::new();
        let result = scanner.scan(
            r##"<div class="social-links">
                 <a href="#">bare</a>
                 <a href="#"><span class="social-icon">i</span></a>
               </div>"##,
        );
        assert_eq!(result.link_markers, vec![vec![Marker::Icon]]);
    }

    #[test]
    fn test_links_outside_container_ignored() {
        let scanner = PageScanner::new();
        let result = scanner.scan(
            r##"<a href="#"><span class="social-icon">i</span></a>
               <div class="social-links"></div>"##,
        );
        assert!(result.link_markers.is_empty());
    }

    #[test]
    fn test_scan_is_idempotent() {
        let scanner = PageScanner::new();
        let content = r##"<section id="contacts"><div class="contact-grid">
            <input id="email" readonly><button data-copy-target="email">Copy</button>
            </div></section>
            <div class="social-links"><a href="#"><span class="social-icon">i</span><span class="social-label">x</span></a></div>"##;
        assert_eq!(scanner.scan(content), scanner.scan(content));
    }

    #[test]
    fn test_unmatched_closing_tag_degrades_gracefully() {
        let scanner = PageScanner::new();
        let result = scanner.scan(
            r#"</section>
               <section id="contacts"><input id="email" readonly></section>
               </section></section>"#,
        );
        assert_eq!(result.copyable_fields, vec!["email".to_string()]);
    }

    #[test]
    fn test_unclosed_region_keeps_observations() {
        let scanner = PageScanner::new();
        let result =
            scanner.scan(r#"<section id="contacts"><input id="email" readonly>"#);
        assert_eq!(result.copyable_fields, vec!["email".to_string()]);
    }

    #[test]
    fn test_empty_input() {
        let scanner = PageScanner::new();
        assert_eq!(scanner.scan(""), ScanResult::default());
    }

    #[test]
    fn test_custom_config() {
        let config = ScanConfig {
            region_tag: "footer".into(),
            region_id: "reach-me".into(),
            ..ScanConfig::default()
        };
        let scanner = PageScanner::with_config(config);
        let result =
            scanner.scan(r#"<footer id="reach-me"><input id="email" readonly></footer>"#);
        assert_eq!(result.copyable_fields, vec!["email".to_string()]);
    }
}
