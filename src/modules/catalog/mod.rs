// src/modules/catalog/mod.rs
//! Read-only mock data store behind every screen

pub mod carousel;
pub mod fines;
pub mod reels;
pub mod rewards;
pub mod vendors;

pub use carousel::Carousel;
pub use fines::{FineStanding, FineSummary};
pub use reels::ReelFeed;
pub use rewards::Redemption;
pub use vendors::{VendorQuery, VendorSort};

use serde::{Deserialize, Serialize};

use crate::error::{JugaadError, Result};
use crate::modules::session::User;

const MOCK_DATA: &str = include_str!("../../../assets/mock_data.yml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sector {
    pub id: String,
    pub name: String,
    pub image: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessOwner {
    pub id: String,
    pub name: String,
    pub business: String,
    pub sector: String,
    pub image: String,
    pub story: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reward {
    pub id: String,
    pub title: String,
    pub description: String,
    pub points: u32,
    pub image: String,
    pub expiry_date: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FineStatus {
    Pending,
    Paid,
    Appealed,
}

impl FineStatus {
    pub fn as_str(&self) -> &str {
        match self {
            FineStatus::Pending => "Pending",
            FineStatus::Paid => "Paid",
            FineStatus::Appealed => "Appealed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fine {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Rupees
    pub amount: u32,
    pub due_date: String,
    pub status: FineStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub id: String,
    pub name: String,
    pub service: String,
    pub address: String,
    /// Display text such as "3.5 km"
    pub distance: String,
    pub rating: f32,
    pub contact: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reel {
    pub id: String,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub likes: u32,
    pub comments: u32,
    pub author: String,
    pub author_image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthTip {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthCamp {
    pub id: String,
    pub title: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub organizer: String,
    pub contact: String,
}

impl HealthCamp {
    /// "Saturday, 20 July 2024"; the raw string if it isn't an ISO date
    pub fn display_date(&self) -> String {
        chrono::NaiveDate::parse_from_str(&self.date, "%Y-%m-%d")
            .map(|date| date.format("%A, %-d %B %Y").to_string())
            .unwrap_or_else(|_| self.date.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MockDataStore {
    pub user: User,
    pub sectors: Vec<Sector>,
    pub business_owners: Vec<BusinessOwner>,
    pub rewards: Vec<Reward>,
    pub fines: Vec<Fine>,
    pub vendors: Vec<Vendor>,
    pub reels: Vec<Reel>,
    pub health_tips: Vec<HealthTip>,
    pub health_camps: Vec<HealthCamp>,
}

impl MockDataStore {
    /// The bundled sample data
    pub fn load() -> Result<Self> {
        Self::from_yaml(MOCK_DATA)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn sector(&self, id: &str) -> Option<&Sector> {
        self.sectors.iter().find(|s| s.id == id)
    }

    pub fn require_sector(&self, id: &str) -> Result<&Sector> {
        self.sector(id)
            .ok_or_else(|| JugaadError::SectorNotFound(id.to_string()))
    }

    pub fn owners_in_sector(&self, sector_name: &str) -> Vec<&BusinessOwner> {
        self.business_owners
            .iter()
            .filter(|owner| owner.sector == sector_name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_data_loads() {
        let store = MockDataStore::load().unwrap();
        assert_eq!(store.user.name, "Rajesh Kumar");
        assert_eq!(store.user.sustainability_score, 78);
        assert_eq!(store.sectors.len(), 6);
        assert_eq!(store.business_owners.len(), 5);
        assert_eq!(store.rewards.len(), 4);
        assert_eq!(store.fines.len(), 4);
        assert_eq!(store.vendors.len(), 4);
        assert_eq!(store.reels.len(), 4);
        assert_eq!(store.health_tips.len(), 4);
        assert_eq!(store.health_camps.len(), 3);
    }

    #[test]
    fn optional_fields_default_to_none() {
        let store = MockDataStore::load().unwrap();
        let consultation = store.rewards.iter().find(|r| r.id == "4").unwrap();
        assert_eq!(consultation.expiry_date, None);
        assert_eq!(store.rewards[0].expiry_date.as_deref(), Some("2025-12-31"));
    }

    #[test]
    fn sector_lookup_by_id() {
        let store = MockDataStore::load().unwrap();
        assert_eq!(store.sector("3").map(|s| s.name.as_str()), Some("Textile"));
        assert_eq!(store.sector("42"), None);
        assert!(matches!(store.require_sector("42"), Err(JugaadError::SectorNotFound(id)) if id == "42"));
    }

    #[test]
    fn owners_are_grouped_by_sector_name() {
        let store = MockDataStore::load().unwrap();
        let owners = store.owners_in_sector("F&B");
        assert_eq!(owners.len(), 1);
        assert_eq!(owners[0].business, "Spice Delight");
        assert!(store.owners_in_sector("Retail").is_empty());
    }

    #[test]
    fn fine_status_parses_lowercase() {
        let store = MockDataStore::load().unwrap();
        let statuses: Vec<FineStatus> = store.fines.iter().map(|f| f.status).collect();
        assert_eq!(
            statuses,
            vec![FineStatus::Pending, FineStatus::Pending, FineStatus::Appealed, FineStatus::Paid]
        );
    }

    #[test]
    fn camp_dates_are_spelled_out() {
        let store = MockDataStore::load().unwrap();
        assert_eq!(store.health_camps[0].display_date(), "Saturday, 20 July 2024");
    }
}
