//! Markup structural scanner
//!
//! Walks the page markup in a single streaming pass and derives a summary of
//! the regions the checks care about: the contact section (grid container,
//! copyable fields, copy triggers) and the social-link container (per-link
//! icon/label marker order).

mod markup;

pub use markup::PageScanner;

/// Role of a marker element inside a social link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    /// Icon span, expected to render above the label
    Icon,
    /// Text label span
    Label,
}

impl Marker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Icon => "social-icon",
            Self::Label => "social-label",
        }
    }
}

/// Region predicates and element designators for a scan
///
/// Defaults match the résumé page vocabulary; tests override individual
/// fields to scan synthetic documents.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    /// Tag of the contact region container
    pub region_tag: String,
    /// Required `id` of the contact region container
    pub region_id: String,
    /// Class token marking the grid container inside the region
    pub grid_class: String,
    /// Tag of copyable field elements
    pub field_tag: String,
    /// Boolean attribute marking a field as copyable
    pub field_flag: String,
    /// Tag of copy trigger elements
    pub trigger_tag: String,
    /// Data attribute holding the trigger's target identifier
    pub trigger_attr: String,
    /// Tag of the link container
    pub links_tag: String,
    /// Class token marking the link container
    pub links_class: String,
    /// Tag of link elements inside the container
    pub link_tag: String,
    /// Tag of marker elements inside a link
    pub marker_tag: String,
    /// Class token of icon markers
    pub icon_class: String,
    /// Class token of label markers
    pub label_class: String,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            region_tag: "section".into(),
            region_id: "contacts".into(),
            grid_class: "contact-grid".into(),
            field_tag: "input".into(),
            field_flag: "readonly".into(),
            trigger_tag: "button".into(),
            trigger_attr: "data-copy-target".into(),
            links_tag: "div".into(),
            links_class: "social-links".into(),
            link_tag: "a".into(),
            marker_tag: "span".into(),
            icon_class: "social-icon".into(),
            label_class: "social-label".into(),
        }
    }
}

/// Derived structural summary of one document
///
/// Immutable once produced; every scan yields a fresh result. Order of the
/// recorded sequences reflects document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Whether an element with the grid class token was seen inside the
    /// contact region
    pub has_contact_grid: bool,
    /// Identifiers of copyable fields, in encounter order
    pub copyable_fields: Vec<String>,
    /// Target identifiers referenced by copy triggers, in encounter order
    pub copy_triggers: Vec<String>,
    /// Ordered marker tokens per completed link; links without markers are
    /// not recorded
    pub link_markers: Vec<Vec<Marker>>,
}
