use super::Reward;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redemption {
    Available,
    NeedsPoints(u32),
}

impl Redemption {
    pub fn label(&self) -> String {
        match self {
            Redemption::Available => "Redeem Now".to_string(),
            Redemption::NeedsPoints(missing) => format!("Need {} more points", missing),
        }
    }
}

impl Reward {
    /// Compares the user's sustainability score against the reward's price
    pub fn redemption(&self, score: u32) -> Redemption {
        if score > 0 && score >= self.points {
            Redemption::Available
        } else {
            Redemption::NeedsPoints(self.points - score.min(self.points))
        }
    }
}
