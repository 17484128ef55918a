mod new;
mod respond;

use super::Topic;

/// One topic and the substrings that select it. Triggers are stored lowercase.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    pub topic: Topic,
    pub triggers: &'static [&'static str],
    pub response: &'static str,
}

impl Rule {
    pub const fn new(topic: Topic, triggers: &'static [&'static str], response: &'static str) -> Self {
        Self { topic, triggers, response }
    }

    /// `normalized` must already be lowercase
    pub fn matches(&self, normalized: &str) -> bool {
        self.triggers.iter().any(|trigger| normalized.contains(trigger))
    }
}

/// Ordered rules, first match wins, with a fallback when nothing matches
#[derive(Debug, Clone, PartialEq)]
pub struct RuleTable {
    rules: Vec<Rule>,
    fallback: &'static str,
}
