mod splitter;
mod template;

pub use splitter::RecursiveSplitter;
pub use template::{PromptTemplate, AD_REWRITE_TEMPLATE, TEMPLATES_BEGIN, TEMPLATES_END};

use crate::config::{ConfigError, PromptConfig};

/// Passages are stuffed into the context separated by a blank line.
const PASSAGE_SEPARATOR: &str = "\n\n";

/// Turns comparables plus the user's draft into one prompt string.
pub trait PromptComposer: Send + Sync {
    fn compose(&self, comparables: &[String], ad_text: &str) -> String;
}

#[derive(Debug, Clone)]
pub struct TemplateComposer {
    template: PromptTemplate,
    splitter: RecursiveSplitter,
}

impl TemplateComposer {
    pub fn new(template: PromptTemplate, splitter: RecursiveSplitter) -> Self {
        Self { template, splitter }
    }

    /// The realtor rewrite template with the configured chunking.
    pub fn from_config(cfg: &PromptConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            PromptTemplate::new(AD_REWRITE_TEMPLATE)?,
            RecursiveSplitter::from_config(cfg)?,
        ))
    }
}

impl PromptComposer for TemplateComposer {
    fn compose(&self, comparables: &[String], ad_text: &str) -> String {
        let context = self
            .splitter
            .split_documents(comparables)
            .join(PASSAGE_SEPARATOR);
        self.template.render(&context, ad_text)
    }
}
