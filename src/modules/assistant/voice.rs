// src/modules/assistant/voice.rs
// Voice assistant: compliance and score questions

use super::{Rule, RuleTable, Topic};

pub const GREETING: &str = "Hello! How can I help you today?";

pub const SUSTAINABILITY_TIPS: &str = "For better sustainability in your business, consider switching to LED lighting, installing rainwater harvesting, and using eco-friendly packaging materials.";

pub const FINE_GUIDANCE: &str = "To avoid fines, ensure proper waste segregation, maintain compliance records, and regularly check for updates on environmental regulations.";

pub const REWARD_TIPS: &str = "You can earn more sustainability points by reducing water consumption, switching to renewable energy, and participating in community clean-up events.";

pub const GREETING_REPLY: &str = "Hello! I'm here to help with sustainability practices, compliance guidance, and waste management solutions. What would you like to know?";

pub const DEFAULT_REPLY: &str = "I understand you need assistance. Would you like tips on sustainability practices, information about rewards, or guidance on avoiding compliance penalties?";

/// What stopping a recording puts in the input box
pub const MOCK_TRANSCRIPTION: &str = "How can I improve my sustainability score?";

const RULES: [Rule; 4] = [
    Rule::new(Topic::Sustainability, &["sustainability"], SUSTAINABILITY_TIPS),
    Rule::new(Topic::Fines, &["fine", "penalty"], FINE_GUIDANCE),
    Rule::new(Topic::Rewards, &["reward", "points"], REWARD_TIPS),
    Rule::new(Topic::Greeting, &["hello", "hi"], GREETING_REPLY),
];

pub fn rule_table() -> RuleTable {
    RuleTable::new(RULES.to_vec(), DEFAULT_REPLY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcription_resolves_to_sustainability() {
        assert_eq!(rule_table().respond(MOCK_TRANSCRIPTION), SUSTAINABILITY_TIPS);
    }

    #[test]
    fn priority_order_is_fixed() {
        let table = rule_table();
        assert_eq!(table.resolve("hello, any penalty for plastic?"), Topic::Fines);
        assert_eq!(table.resolve("hello, how do I get reward points"), Topic::Rewards);
        assert_eq!(table.resolve("sustainability fine"), Topic::Sustainability);
        // No water rule here, so reward is the first match
        assert_eq!(table.resolve("water reward"), Topic::Rewards);
    }

    #[test]
    fn greeting_trigger_is_a_plain_substring() {
        // "hi" inside "this" still counts
        assert_eq!(rule_table().resolve("what is this"), Topic::Greeting);
    }

    #[test]
    fn unmatched_input_gets_default_reply() {
        assert_eq!(rule_table().respond("good morning"), DEFAULT_REPLY);
    }

    #[test]
    fn fine_matches_inside_other_words() {
        // "define" contains "fine"
        assert_eq!(rule_table().resolve("define compliance"), Topic::Fines);
    }
}
