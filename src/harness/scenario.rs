//! Check scenarios - defines what each structural check verifies

use super::CheckCategory;

/// What a scenario verifies against the page
#[derive(Debug, Clone)]
pub enum Check {
    /// The contact region contains a grid container
    ContactGridPresent,
    /// Copy triggers and copyable fields reference the same identifiers
    CopyablePairing,
    /// The contact region holds at least this many copyable fields
    MinCopyableFields(usize),
    /// Every recorded link lists its icon marker before its label marker
    IconBeforeLabel,
    /// At least this many social links are recorded
    MinSocialLinks(usize),
    /// The first block matching `selector` declares `property: value`
    DeclarationPresent {
        selector: &'static str,
        property: &'static str,
        value: &'static str,
    },
}

/// A single named check scenario
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Unique scenario identifier
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Scenario category
    pub category: CheckCategory,
    /// What to verify
    pub check: Check,
}

impl Scenario {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: CheckCategory,
        check: Check,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            check,
        }
    }
}

/// Ordered collection of scenarios for one run
pub struct ScenarioSet {
    scenarios: Vec<Scenario>,
}

impl ScenarioSet {
    pub fn new() -> Self {
        Self {
            scenarios: Vec::new(),
        }
    }

    pub fn add(&mut self, scenario: Scenario) {
        self.scenarios.push(scenario);
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn by_category(&self, category: CheckCategory) -> Vec<&Scenario> {
        self.scenarios
            .iter()
            .filter(|s| s.category == category)
            .collect()
    }

    /// Load the built-in checks for the résumé page
    pub fn load_builtin(&mut self) {
        self.add_markup_scenarios();
        self.add_style_scenarios();
    }

    fn add_markup_scenarios(&mut self) {
        self.add(Scenario::new(
            "markup/contacts/grid",
            "Contact section includes a grid container",
            CheckCategory::Markup,
            Check::ContactGridPresent,
        ));
        self.add(Scenario::new(
            "markup/contacts/cardinality",
            "Contact section holds at least 2 copyable fields",
            CheckCategory::Markup,
            Check::MinCopyableFields(2),
        ));
        self.add(Scenario::new(
            "markup/contacts/pairing",
            "Each copy button targets exactly one readonly input",
            CheckCategory::Markup,
            Check::CopyablePairing,
        ));
        self.add(Scenario::new(
            "markup/social/count",
            "At least 3 social links are present",
            CheckCategory::Markup,
            Check::MinSocialLinks(3),
        ));
        self.add(Scenario::new(
            "markup/social/order",
            "Icon appears before label in each social link",
            CheckCategory::Markup,
            Check::IconBeforeLabel,
        ));
    }

    fn add_style_scenarios(&mut self) {
        self.add(Scenario::new(
            "style/contacts/grid",
            "Contact grid uses CSS grid layout",
            CheckCategory::Style,
            Check::DeclarationPresent {
                selector: ".contact-grid",
                property: "display",
                value: "grid",
            },
        ));
        self.add(Scenario::new(
            "style/contacts/cursor",
            "Copy button uses a pointer cursor",
            CheckCategory::Style,
            Check::DeclarationPresent {
                selector: ".copy-btn",
                property: "cursor",
                value: "pointer",
            },
        ));
        self.add(Scenario::new(
            "style/social/column",
            "Social links stack icon over label with column flex",
            CheckCategory::Style,
            Check::DeclarationPresent {
                selector: ".social-links a",
                property: "flex-direction",
                value: "column",
            },
        ));
        self.add(Scenario::new(
            "style/social/label-block",
            "Social label is block-level",
            CheckCategory::Style,
            Check::DeclarationPresent {
                selector: ".social-links .social-label",
                property: "display",
                value: "block",
            },
        ));
    }
}

impl Default for ScenarioSet {
    fn default() -> Self {
        Self::new()
    }
}
