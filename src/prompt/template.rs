use crate::config::ConfigError;

pub const TEMPLATES_BEGIN: &str = "--- TEMPLATES BEGIN HERE ---";
pub const TEMPLATES_END: &str = "--- TEMPLATES END HERE ---";

/// The realtor instructions. `{context}` receives the comparable ads,
/// `{question}` the user's draft.
pub const AD_REWRITE_TEMPLATE: &str = "\
You are a realtor advertising a new home on Zillow. Your goal is to sell it as soon as possible.
Below are templates of home advertisement descriptions that sold very fast in the same market with similar configurations.

--- TEMPLATES BEGIN HERE ---
{context}
--- TEMPLATES END HERE ---

Think step-by-step about what makes these templates sell faster than the copy provided.
Rewrite the text below based on the learnings extracted from templates.
{question}
Explain your rationale after providing your answer.

---
Helpful Answer:
";

/// A template pre-split around its two slots so that rendering never
/// re-scans user text for placeholders.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    head: String,
    middle: String,
    tail: String,
}

impl PromptTemplate {
    pub fn new(text: &str) -> Result<Self, ConfigError> {
        let (head, rest) = text
            .split_once("{context}")
            .ok_or(ConfigError::InvalidTemplate)?;
        let (middle, tail) = rest
            .split_once("{question}")
            .ok_or(ConfigError::InvalidTemplate)?;

        Ok(Self {
            head: head.to_string(),
            middle: middle.to_string(),
            tail: tail.to_string(),
        })
    }

    pub fn render(&self, context: &str, question: &str) -> String {
        let mut out = String::with_capacity(
            self.head.len() + context.len() + self.middle.len() + question.len() + self.tail.len(),
        );
        out.push_str(&self.head);
        out.push_str(context);
        out.push_str(&self.middle);
        out.push_str(question);
        out.push_str(&self.tail);
        out
    }
}
