use crate::packing::{TripParameters, TripType, WorkIntensity};

pub(super) const ALL_DURATIONS: std::ops::RangeInclusive<u32> = 0..=30;

pub(super) fn trip(trip_type: TripType, duration_days: u32) -> TripParameters {
    TripParameters::new(trip_type, duration_days, WorkIntensity::Medium, false)
}

/// Every combination of the enum inputs over a month of durations.
pub(super) fn every_trip() -> Vec<TripParameters> {
    let mut trips = Vec::new();
    for trip_type in TripType::ordered() {
        for work_intensity in WorkIntensity::ordered() {
            for include_extras in [false, true] {
                for duration_days in ALL_DURATIONS {
                    trips.push(TripParameters::new(
                        trip_type,
                        duration_days,
                        work_intensity,
                        include_extras,
                    ));
                }
            }
        }
    }
    trips
}
