// leadscore-core/src/domain/merchant/record.rs

use serde::{Deserialize, Serialize};

/// A merchant as supplied by the discovery collaborator.
///
/// Optional fields stay optional all the way through scoring: an absent
/// rating is not a zero rating, and the feature deriver applies its own
/// defaults for each absence.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct RawMerchantRecord {
    #[serde(default, alias = "place_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "types", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// "City, ST" as reported by the discovery query.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_level: Option<u8>,
    /// Externally detected presence on a competitor delivery platform.
    /// `None` defers to the injected competitor signal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competitor_platform: Option<bool>,

    // Pass-through contact data, never read by scoring.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

impl RawMerchantRecord {
    /// Trimmed identifier, `None` when absent or blank.
    pub fn identifier(&self) -> Option<&str> {
        self.id.as_deref().map(str::trim).filter(|id| !id.is_empty())
    }

    /// The explicit city, falling back to the first segment of `source_location`.
    pub fn effective_city(&self) -> Option<&str> {
        non_blank(self.city.as_deref())
            .or_else(|| self.location_segment(0))
    }

    /// The explicit state, falling back to the second segment of `source_location`.
    pub fn effective_state(&self) -> Option<&str> {
        non_blank(self.state.as_deref())
            .or_else(|| self.location_segment(1))
    }

    fn location_segment(&self, index: usize) -> Option<&str> {
        let location = self.source_location.as_deref()?;
        non_blank(location.split(',').nth(index))
    }

    /// Fills every absent field of `self` from `other`. Present fields win.
    pub fn fill_from(&mut self, other: &RawMerchantRecord) {
        fn fill<T: Clone>(slot: &mut Option<T>, other: &Option<T>) {
            if slot.is_none() {
                slot.clone_from(other);
            }
        }

        if self.name.trim().is_empty() {
            self.name.clone_from(&other.name);
        }
        fill(&mut self.category, &other.category);
        fill(&mut self.city, &other.city);
        fill(&mut self.state, &other.state);
        fill(&mut self.source_location, &other.source_location);
        fill(&mut self.rating, &other.rating);
        fill(&mut self.review_count, &other.review_count);
        fill(&mut self.price_level, &other.price_level);
        fill(&mut self.competitor_platform, &other.competitor_platform);
        fill(&mut self.address, &other.address);
        fill(&mut self.phone, &other.phone);
        fill(&mut self.website, &other.website);
        fill(&mut self.hours, &other.hours);
        fill(&mut self.latitude, &other.latitude);
        fill(&mut self.longitude, &other.longitude);
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;

    #[test]
    fn test_deserialize_places_shape() -> Result<()> {
        let json = r#"{
            "place_id": "ChIJ123",
            "name": "Tony's Pizza",
            "types": "restaurant,food",
            "rating": 4.6,
            "review_count": 812,
            "source_location": "San Francisco, CA"
        }"#;
        let record: RawMerchantRecord = serde_json::from_str(json)?;
        assert_eq!(record.identifier(), Some("ChIJ123"));
        assert_eq!(record.category.as_deref(), Some("restaurant,food"));
        assert_eq!(record.price_level, None);
        assert_eq!(record.effective_city(), Some("San Francisco"));
        assert_eq!(record.effective_state(), Some("CA"));
        Ok(())
    }

    #[test]
    fn test_blank_identifier_is_missing() {
        let record = RawMerchantRecord {
            id: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(record.identifier(), None);
        assert_eq!(RawMerchantRecord::default().identifier(), None);
    }

    #[test]
    fn test_explicit_city_wins_over_source_location() {
        let record = RawMerchantRecord {
            city: Some(" Seattle ".into()),
            source_location: Some("Chicago, IL".into()),
            ..Default::default()
        };
        assert_eq!(record.effective_city(), Some("Seattle"));
        assert_eq!(record.effective_state(), Some("IL"));
    }

    #[test]
    fn test_fill_from_keeps_present_fields() {
        let mut first = RawMerchantRecord {
            id: Some("a".into()),
            name: "First".into(),
            rating: Some(4.1),
            ..Default::default()
        };
        let second = RawMerchantRecord {
            id: Some("a".into()),
            name: "Second".into(),
            rating: Some(2.0),
            review_count: Some(120),
            ..Default::default()
        };
        first.fill_from(&second);
        assert_eq!(first.name, "First");
        assert_eq!(first.rating, Some(4.1));
        assert_eq!(first.review_count, Some(120));
    }
}
