use super::catalog;
use super::domain::{DurationTier, PackTier, TripType, WorkIntensity};

/// Trips longer than this many days pull in the desk setup and travel essentials.
pub const LONG_STAY_DAYS: u32 = 7;

pub fn clothing_items(duration_days: u32, capsule: bool) -> Vec<&'static str> {
    match DurationTier::classify(duration_days) {
        DurationTier::Trivial => Vec::new(),
        DurationTier::Short => catalog::CLOTHING_SHORT.to_vec(),
        DurationTier::Extended => {
            let mut items = catalog::CLOTHING_EXTENDED.to_vec();
            if capsule {
                items.extend_from_slice(catalog::CLOTHING_CAPSULE);
            }
            items
        }
    }
}

pub fn toiletries_items(duration_days: u32) -> Vec<&'static str> {
    match DurationTier::classify(duration_days) {
        DurationTier::Trivial => Vec::new(),
        DurationTier::Short => catalog::TOILETRIES_SHORT.to_vec(),
        DurationTier::Extended => catalog::TOILETRIES_EXTENDED.to_vec(),
    }
}

pub fn work_gear_items(work_intensity: WorkIntensity, duration_days: u32) -> Vec<&'static str> {
    let mut items = Vec::new();

    if matches!(work_intensity, WorkIntensity::Medium | WorkIntensity::Heavy) {
        items.extend_from_slice(catalog::WORK_GEAR_BASE);
    }

    // Independent of the first check: a light workload still gets a desk setup on long stays.
    if work_intensity == WorkIntensity::Heavy || duration_days > LONG_STAY_DAYS {
        items.extend_from_slice(catalog::WORK_GEAR_DESK_SETUP);
    }

    items
}

/// First match wins. Duration is checked before the trip type can upgrade the pack,
/// so a one-day nomad trip still lands on the compact pack.
pub fn base_pack_tier(trip_type: TripType, duration_days: u32) -> PackTier {
    if trip_type == TripType::Commute || duration_days <= 1 {
        PackTier::Compact
    } else if trip_type == TripType::Weekend || duration_days <= 3 {
        PackTier::Flex
    } else {
        PackTier::Extended
    }
}

pub fn needs_travel_essentials(trip_type: TripType, duration_days: u32) -> bool {
    trip_type == TripType::Nomad || duration_days > LONG_STAY_DAYS
}
