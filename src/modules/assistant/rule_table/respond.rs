use super::{Rule, RuleTable};
use crate::modules::assistant::Topic;

impl RuleTable {
    /// First rule (in priority order) whose trigger occurs in the input
    pub fn matching_rule(&self, input: &str) -> Option<&Rule> {
        let normalized = input.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&normalized))
    }

    pub fn resolve(&self, input: &str) -> Topic {
        self.matching_rule(input)
            .map(|rule| rule.topic)
            .unwrap_or(Topic::Fallback)
    }

    /// Total over all inputs: the fallback covers anything unmatched.
    pub fn respond(&self, input: &str) -> &'static str {
        self.matching_rule(input)
            .map(|rule| rule.response)
            .unwrap_or(self.fallback)
    }
}
