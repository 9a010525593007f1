use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripType {
    Commute,
    Weekend,
    Nomad,
}

impl TripType {
    pub const fn ordered() -> [Self; 3] {
        [Self::Commute, Self::Weekend, Self::Nomad]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Commute => "commute",
            Self::Weekend => "weekend",
            Self::Nomad => "nomad",
        }
    }

    /// Nomad trips pack a capsule wardrobe on top of the extended clothing set.
    pub const fn is_capsule(self) -> bool {
        matches!(self, Self::Nomad)
    }
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TripType {
    type Err = ParameterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "commute" => Ok(Self::Commute),
            "weekend" => Ok(Self::Weekend),
            "nomad" => Ok(Self::Nomad),
            other => Err(ParameterError::UnknownTripType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkIntensity {
    Light,
    #[default]
    Medium,
    Heavy,
}

impl WorkIntensity {
    pub const fn ordered() -> [Self; 3] {
        [Self::Light, Self::Medium, Self::Heavy]
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Heavy => "heavy",
        }
    }
}

impl fmt::Display for WorkIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkIntensity {
    type Err = ParameterError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "medium" => Ok(Self::Medium),
            "heavy" => Ok(Self::Heavy),
            other => Err(ParameterError::UnknownWorkIntensity(other.to_string())),
        }
    }
}

/// Duration buckets shared by every duration-driven rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DurationTier {
    /// Same-day trip, at most one day.
    Trivial,
    /// Two or three days.
    Short,
    /// Four days or more.
    Extended,
}

impl DurationTier {
    pub const fn classify(duration_days: u32) -> Self {
        match duration_days {
            0..=1 => Self::Trivial,
            2..=3 => Self::Short,
            _ => Self::Extended,
        }
    }
}

/// Inputs for a single packing list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripParameters {
    pub trip_type: TripType,
    pub duration_days: u32,
    pub work_intensity: WorkIntensity,
    pub include_extras: bool,
}

impl TripParameters {
    pub fn new(
        trip_type: TripType,
        duration_days: u32,
        work_intensity: WorkIntensity,
        include_extras: bool,
    ) -> Self {
        Self {
            trip_type,
            duration_days,
            work_intensity,
            include_extras,
        }
    }

    pub fn duration_label(&self) -> String {
        format!("{} day(s)", self.duration_days)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryKind {
    TechEssentials,
    EverydayCarry,
    WorkGear,
    Clothing,
    ToiletriesAndHealth,
    TravelEssentials,
    OptionalExtras,
}

impl CategoryKind {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::TechEssentials,
            Self::EverydayCarry,
            Self::WorkGear,
            Self::Clothing,
            Self::ToiletriesAndHealth,
            Self::TravelEssentials,
            Self::OptionalExtras,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::TechEssentials => "Tech Essentials",
            Self::EverydayCarry => "Everyday Carry",
            Self::WorkGear => "Work Gear",
            Self::Clothing => "Clothing",
            Self::ToiletriesAndHealth => "Toiletries & Health",
            Self::TravelEssentials => "Travel Essentials",
            Self::OptionalExtras => "Optional Extras",
        }
    }

    /// Organizer modules that come along whenever this category is packed.
    pub const fn modules(self) -> &'static [OrganizerModule] {
        match self {
            Self::TechEssentials => &[OrganizerModule::CoilCrateCase],
            Self::EverydayCarry => &[OrganizerModule::KeyBitPouch],
            Self::Clothing => &[
                OrganizerModule::PackLiteComboFlat,
                OrganizerModule::PackLiteComboCube,
            ],
            Self::ToiletriesAndHealth => &[OrganizerModule::DripDryCase],
            Self::WorkGear | Self::TravelEssentials | Self::OptionalExtras => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizerModule {
    CoilCrateCase,
    KeyBitPouch,
    PackLiteComboFlat,
    PackLiteComboCube,
    DripDryCase,
}

impl OrganizerModule {
    pub const fn label(self) -> &'static str {
        match self {
            Self::CoilCrateCase => "CoilCrate Case",
            Self::KeyBitPouch => "KeyBit Pouch",
            Self::PackLiteComboFlat => "PackLite Combo Flat 4P",
            Self::PackLiteComboCube => "PackLite Combo Cube 4P",
            Self::DripDryCase => "DripDry Case",
        }
    }
}

/// A named group of items in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCategory {
    #[serde(rename = "category")]
    pub name: String,
    pub items: Vec<String>,
}

impl ItemCategory {
    pub fn new(kind: CategoryKind, items: &[&str]) -> Self {
        Self {
            name: kind.label().to_string(),
            items: items.iter().map(|item| item.to_string()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackTier {
    Compact,
    Flex,
    Extended,
}

impl PackTier {
    pub fn recommendation(self) -> PackRecommendation {
        let model = super::catalog::pack_model(self);
        PackRecommendation {
            pack: model.name.to_string(),
            url: model.url.to_string(),
            capacity: model.capacity.to_string(),
        }
    }
}

/// Carrying case suggested for the trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackRecommendation {
    pub pack: String,
    pub url: String,
    pub capacity: String,
}

/// Fully assembled recommendation for one set of trip parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackingList {
    pub trip: TripParameters,
    pub pack: PackRecommendation,
    pub categories: Vec<ItemCategory>,
    pub modules: Vec<String>,
    pub total_items: usize,
}

impl PackingList {
    pub fn category(&self, kind: CategoryKind) -> Option<&ItemCategory> {
        self.categories
            .iter()
            .find(|category| category.name == kind.label())
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories
            .iter()
            .map(|category| category.name.as_str())
            .collect()
    }

    /// Recomputes the item count from the categories rather than trusting `total_items`.
    pub fn count_items(&self) -> usize {
        self.categories.iter().map(ItemCategory::len).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParameterError {
    #[error("unknown trip type '{0}' (expected commute, weekend, or nomad)")]
    UnknownTripType(String),
    #[error("unknown work intensity '{0}' (expected light, medium, or heavy)")]
    UnknownWorkIntensity(String),
}
