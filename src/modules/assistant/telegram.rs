// src/modules/assistant/telegram.rs
// Telegram bot: business improvement tips

use super::{Rule, RuleTable, Topic};

pub const GREETING: &str = "Hello! I'm your Jugaad Guru Telegram assistant. I can provide sustainability tips and suggest ways to improve your business. How can I help you today?";

pub const ENERGY_TIPS: &str = "To save energy in your business, consider:\n1. Switching to LED lighting\n2. Using energy-efficient equipment\n3. Installing motion sensors\n4. Conducting an energy audit\n\nThese changes can reduce energy costs by up to 30%!";

pub const PACKAGING_TIPS: &str = "For sustainable packaging alternatives:\n1. Paper or cardboard packaging\n2. Compostable bags made from corn starch\n3. Reusable containers with deposit system\n4. Biodegradable packaging made from sugarcane waste\n\nMany of our users report 15-20% cost savings after switching!";

pub const WATER_TIPS: &str = "Water conservation tips:\n1. Install low-flow faucets and toilets\n2. Collect and reuse rainwater\n3. Fix leaks promptly\n4. Use water-efficient processes in manufacturing\n\nA textile business in Tirupur reduced water usage by 40% with these methods!";

pub const HELP_MENU: &str = "I can help you with:\n- Energy saving tips\n- Sustainable packaging alternatives\n- Water conservation methods\n- Waste reduction strategies\n- Connecting with vendors\n\nWhat specific area would you like to improve in your business?";

const RULES: [Rule; 3] = [
    Rule::new(Topic::Energy, &["energy", "electricity"], ENERGY_TIPS),
    Rule::new(Topic::Packaging, &["packaging", "plastic"], PACKAGING_TIPS),
    Rule::new(Topic::Water, &["water", "saving"], WATER_TIPS),
];

pub fn rule_table() -> RuleTable {
    RuleTable::new(RULES.to_vec(), HELP_MENU)
}
