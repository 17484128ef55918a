use super::{Fine, FineStatus};

/// Where pending fines sit relative to the limit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FineStanding {
    Good,
    /// Over 50% of the limit
    Caution,
    /// Over 75% of the limit
    Critical,
}

impl FineStanding {
    pub fn advice(&self) -> &'static str {
        match self {
            FineStanding::Good => "Good standing: Keep up the sustainable practices!",
            FineStanding::Caution => "Caution: Consider addressing compliance issues soon.",
            FineStanding::Critical => "Warning: You are approaching your fine limit! Take immediate action.",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FineSummary {
    pub pending_total: u32,
    pub limit: u32,
    pub percentage: f64,
    pub standing: FineStanding,
}

impl FineSummary {
    /// Only pending fines count; paid and appealed ones are settled or on hold.
    pub fn from_fines(fines: &[Fine], limit: u32) -> Self {
        let pending_total: u32 = fines
            .iter()
            .filter(|fine| fine.status == FineStatus::Pending)
            .map(|fine| fine.amount)
            .sum();

        let percentage = if limit == 0 {
            100.0
        } else {
            f64::from(pending_total) / f64::from(limit) * 100.0
        };

        let standing = if percentage > 75.0 {
            FineStanding::Critical
        } else if percentage > 50.0 {
            FineStanding::Caution
        } else {
            FineStanding::Good
        };

        Self { pending_total, limit, percentage, standing }
    }

    /// Fill ratio for a gauge, capped at 1.0
    pub fn ratio(&self) -> f64 {
        (self.percentage / 100.0).clamp(0.0, 1.0)
    }
}

/// Indian digit grouping as used for rupee amounts: 1,00,000
pub fn format_rupees(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("₹{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::MockDataStore;

    fn fine(amount: u32, status: FineStatus) -> Fine {
        Fine {
            id: amount.to_string(),
            title: "t".to_string(),
            description: "d".to_string(),
            amount,
            due_date: "2024-07-15".to_string(),
            status,
        }
    }

    #[test]
    fn bundled_fines_are_in_caution() {
        let store = MockDataStore::load().unwrap();
        let summary = FineSummary::from_fines(&store.fines, 25_000);
        assert_eq!(summary.pending_total, 12_500);
        assert!((summary.percentage - 50.0).abs() < f64::EPSILON);
        // Exactly 50% is not over the caution line
        assert_eq!(summary.standing, FineStanding::Good);
    }

    #[test]
    fn standing_thresholds() {
        let caution = FineSummary::from_fines(&[fine(13_000, FineStatus::Pending)], 25_000);
        assert_eq!(caution.standing, FineStanding::Caution);

        let critical = FineSummary::from_fines(&[fine(20_000, FineStatus::Pending)], 25_000);
        assert_eq!(critical.standing, FineStanding::Critical);
    }

    #[test]
    fn settled_fines_do_not_count() {
        let fines = [fine(30_000, FineStatus::Paid), fine(30_000, FineStatus::Appealed)];
        let summary = FineSummary::from_fines(&fines, 25_000);
        assert_eq!(summary.pending_total, 0);
        assert_eq!(summary.standing, FineStanding::Good);
    }

    #[test]
    fn ratio_is_capped() {
        let summary = FineSummary::from_fines(&[fine(50_000, FineStatus::Pending)], 25_000);
        assert_eq!(summary.ratio(), 1.0);
    }

    #[test]
    fn rupees_use_indian_grouping() {
        assert_eq!(format_rupees(500), "₹500");
        assert_eq!(format_rupees(7500), "₹7,500");
        assert_eq!(format_rupees(25_000), "₹25,000");
        assert_eq!(format_rupees(100_000), "₹1,00,000");
        assert_eq!(format_rupees(12_345_678), "₹1,23,45,678");
    }
}
