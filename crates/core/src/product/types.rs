//! Product domain types.

use std::fmt;

use continental_shared::types::{CategoryId, ProductId, TemplateId};
use serde::{Deserialize, Serialize};

/// Method used to recompute a product's cost price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostPriceMethod {
    /// Standard price, set by hand.
    #[default]
    Fixed,
    /// Moving average of incoming costs.
    Average,
    /// Cost of the oldest stock still on hand.
    Fifo,
}

impl CostPriceMethod {
    /// Returns the string representation of the method.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Average => "average",
            Self::Fifo => "fifo",
        }
    }

    /// Parses a method from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "fixed" => Some(Self::Fixed),
            "average" => Some(Self::Average),
            "fifo" => Some(Self::Fifo),
            _ => None,
        }
    }
}

impl fmt::Display for CostPriceMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A product template; variants share its defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Unique identifier.
    pub id: TemplateId,
    /// Template name.
    pub name: String,
    /// Cost price method of every variant.
    pub cost_price_method: CostPriceMethod,
    /// Category providing the accounting configuration.
    pub account_category: Option<CategoryId>,
}

impl Template {
    /// Creates a template without accounting category.
    #[must_use]
    pub fn new(name: impl Into<String>, cost_price_method: CostPriceMethod) -> Self {
        Self {
            id: TemplateId::new(),
            name: name.into(),
            cost_price_method,
            account_category: None,
        }
    }

    /// Sets the accounting category.
    #[must_use]
    pub fn in_category(mut self, category: CategoryId) -> Self {
        self.account_category = Some(category);
        self
    }
}

/// A product variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,
    /// The template this variant belongs to.
    pub template: TemplateId,
    /// Variant code.
    pub code: String,
}

impl Product {
    /// Creates a variant of `template`.
    #[must_use]
    pub fn new(template: TemplateId, code: impl Into<String>) -> Self {
        Self {
            id: ProductId::new(),
            template,
            code: code.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parse() {
        assert_eq!(CostPriceMethod::parse("average"), Some(CostPriceMethod::Average));
        assert_eq!(CostPriceMethod::parse("FIFO"), Some(CostPriceMethod::Fifo));
        assert_eq!(CostPriceMethod::parse("Fixed"), Some(CostPriceMethod::Fixed));
        assert_eq!(CostPriceMethod::parse("lifo"), None);
    }

    #[test]
    fn test_method_display() {
        assert_eq!(CostPriceMethod::Average.to_string(), "average");
        assert_eq!(CostPriceMethod::default(), CostPriceMethod::Fixed);
    }

    #[test]
    fn test_template_builder() {
        let category = CategoryId::new();
        let template = Template::new("Chair", CostPriceMethod::Average).in_category(category);
        assert_eq!(template.account_category, Some(category));

        let product = Product::new(template.id, "CH-1");
        assert_eq!(product.template, template.id);
    }
}
