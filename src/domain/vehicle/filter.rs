use crate::shared::PageRequest;

/// Catalog search criteria. Every criterion is optional and they are ANDed.
/// The catalog only ever lists available vehicles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleFilter {
    pub brand_id: Option<i32>,
    /// Exact, case-sensitive match
    pub fuel_type: Option<String>,
    /// Inclusive lower price bound
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    pub max_price: Option<f64>,
    /// Case-insensitive substring of vehicle name, model or brand name
    pub search: Option<String>,
    pub page: PageRequest,
}

impl VehicleFilter {
    /// The search term as a lowercase `LIKE` pattern.
    pub fn search_pattern(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(|term| format!("%{}%", term.to_lowercase()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_pattern_is_lowercase_substring() {
        let filter = VehicleFilter {
            search: Some("CaMrY".into()),
            ..Default::default()
        };
        assert_eq!(filter.search_pattern().as_deref(), Some("%camry%"));
        assert_eq!(VehicleFilter::default().search_pattern(), None);
    }
}
