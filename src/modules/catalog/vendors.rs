use std::cmp::Ordering;

use super::Vendor;

/// Service categories offered as filter chips
pub const FILTER_CATEGORIES: [&str; 5] = [
    "Plastic Recycling",
    "E-Waste",
    "Fabric Waste",
    "Food Waste",
    "Chemical Waste",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VendorSort {
    #[default]
    Distance,
    Rating,
}

impl VendorSort {
    pub fn label(&self) -> &str {
        match self {
            VendorSort::Distance => "Nearest",
            VendorSort::Rating => "Top Rated",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VendorQuery {
    pub search: String,
    pub filter: Option<String>,
    pub sort: VendorSort,
}

impl VendorQuery {
    /// Choosing the active filter again clears it
    pub fn select_filter(&mut self, category: &str) {
        if self.filter.as_deref() == Some(category) {
            self.filter = None;
        } else {
            self.filter = Some(category.to_string());
        }
    }

    pub fn toggle_sort(&mut self) {
        self.sort = match self.sort {
            VendorSort::Distance => VendorSort::Rating,
            VendorSort::Rating => VendorSort::Distance,
        };
    }

    /// Search is case-insensitive over name and service; the category filter
    /// is a case-sensitive substring of the service.
    pub fn matches(&self, vendor: &Vendor) -> bool {
        let search = self.search.to_lowercase();
        let matches_search = vendor.name.to_lowercase().contains(&search)
            || vendor.service.to_lowercase().contains(&search);
        let matches_filter = self
            .filter
            .as_deref()
            .map_or(true, |category| vendor.service.contains(category));
        matches_search && matches_filter
    }

    pub fn apply<'a>(&self, vendors: &'a [Vendor]) -> Vec<&'a Vendor> {
        let mut results: Vec<&Vendor> = vendors.iter().filter(|v| self.matches(v)).collect();
        match self.sort {
            VendorSort::Distance => results.sort_by(|a, b| {
                distance_km(&a.distance)
                    .partial_cmp(&distance_km(&b.distance))
                    .unwrap_or(Ordering::Equal)
            }),
            VendorSort::Rating => results.sort_by(|a, b| {
                b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal)
            }),
        }
        results
    }
}

/// Leading number of a distance label ("3.5 km" -> 3.5). Unparseable labels sort last.
pub fn distance_km(label: &str) -> f64 {
    let numeric: String = label
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    numeric.parse().unwrap_or(f64::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::MockDataStore;

    fn names(vendors: &[&Vendor]) -> Vec<String> {
        vendors.iter().map(|v| v.name.clone()).collect()
    }

    #[test]
    fn default_query_sorts_by_distance() {
        let store = MockDataStore::load().unwrap();
        let results = VendorQuery::default().apply(&store.vendors);
        assert_eq!(
            names(&results),
            vec!["Textile Recyclers", "GreenWaste Solutions", "BioDegradables", "EcoDisposal"]
        );
    }

    #[test]
    fn rating_sort_is_descending() {
        let store = MockDataStore::load().unwrap();
        let mut query = VendorQuery::default();
        query.toggle_sort();
        assert_eq!(query.sort.label(), "Top Rated");
        let results = query.apply(&store.vendors);
        assert_eq!(
            names(&results),
            vec!["Textile Recyclers", "GreenWaste Solutions", "EcoDisposal", "BioDegradables"]
        );
    }

    #[test]
    fn search_covers_name_and_service() {
        let store = MockDataStore::load().unwrap();
        let query = VendorQuery { search: "COMPOST".to_string(), ..Default::default() };
        assert_eq!(names(&query.apply(&store.vendors)), vec!["BioDegradables"]);

        let query = VendorQuery { search: "eco".to_string(), ..Default::default() };
        assert_eq!(names(&query.apply(&store.vendors)), vec!["EcoDisposal"]);
    }

    #[test]
    fn filter_toggles_and_narrows() {
        let store = MockDataStore::load().unwrap();
        let mut query = VendorQuery::default();
        query.select_filter("E-Waste");
        assert_eq!(names(&query.apply(&store.vendors)), vec!["EcoDisposal"]);

        query.select_filter("E-Waste");
        assert_eq!(query.filter, None);
        assert_eq!(query.apply(&store.vendors).len(), 4);
    }

    #[test]
    fn chemical_waste_has_no_vendors() {
        let store = MockDataStore::load().unwrap();
        let mut query = VendorQuery::default();
        query.select_filter("Chemical Waste");
        assert!(query.apply(&store.vendors).is_empty());
    }

    #[test]
    fn distance_parsing() {
        assert_eq!(distance_km("3.5 km"), 3.5);
        assert_eq!(distance_km("12km"), 12.0);
        assert_eq!(distance_km("far away"), f64::INFINITY);
    }
}
