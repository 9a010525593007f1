use crate::packing::{
    ItemCategory, PackRecommendation, PackingList, TripParameters, TripType, WorkIntensity,
};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub const GENERATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripInfoView {
    #[serde(rename = "type")]
    pub trip_type: TripType,
    pub duration: String,
    pub duration_days: u32,
    pub work_intensity: WorkIntensity,
    #[serde(default)]
    pub include_extras: bool,
    pub generated_at: String,
}

/// Serializable packing list stamped with its generation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingDocument {
    pub trip_info: TripInfoView,
    pub recommended_pack: PackRecommendation,
    pub items: Vec<ItemCategory>,
    pub modules: Vec<String>,
    pub total_items: usize,
}

impl PackingDocument {
    pub fn new(list: &PackingList, generated_at: NaiveDateTime) -> Self {
        let trip = &list.trip;
        Self {
            trip_info: TripInfoView {
                trip_type: trip.trip_type,
                duration: trip.duration_label(),
                duration_days: trip.duration_days,
                work_intensity: trip.work_intensity,
                include_extras: trip.include_extras,
                generated_at: generated_at.format(GENERATED_AT_FORMAT).to_string(),
            },
            recommended_pack: list.pack.clone(),
            items: list.categories.clone(),
            modules: list.modules.clone(),
            total_items: list.total_items,
        }
    }

    pub fn to_packing_list(&self) -> PackingList {
        PackingList {
            trip: TripParameters::new(
                self.trip_info.trip_type,
                self.trip_info.duration_days,
                self.trip_info.work_intensity,
                self.trip_info.include_extras,
            ),
            pack: self.recommended_pack.clone(),
            categories: self.items.clone(),
            modules: self.modules.clone(),
            total_items: self.total_items,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
