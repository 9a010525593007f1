pub mod catalog;
pub mod domain;
mod rules;

#[cfg(test)]
mod tests;

pub use domain::{
    CategoryKind, DurationTier, ItemCategory, OrganizerModule, PackRecommendation, PackTier,
    PackingList, ParameterError, TripParameters, TripType, WorkIntensity,
};
pub use rules::{
    base_pack_tier, clothing_items, needs_travel_essentials, toiletries_items, work_gear_items,
    LONG_STAY_DAYS,
};

use std::collections::HashSet;

pub fn generate(
    trip_type: TripType,
    duration_days: u32,
    work_intensity: WorkIntensity,
    include_extras: bool,
) -> PackingList {
    generate_packing_list(&TripParameters::new(
        trip_type,
        duration_days,
        work_intensity,
        include_extras,
    ))
}

/// Builds the full recommendation. Total over every well-typed input.
pub fn generate_packing_list(params: &TripParameters) -> PackingList {
    let TripParameters {
        trip_type,
        duration_days,
        work_intensity,
        include_extras,
    } = *params;

    let mut sections: Vec<(CategoryKind, Vec<&'static str>)> = vec![
        (CategoryKind::TechEssentials, catalog::TECH_ESSENTIALS.to_vec()),
        (CategoryKind::EverydayCarry, catalog::EVERYDAY_CARRY.to_vec()),
        (
            CategoryKind::WorkGear,
            work_gear_items(work_intensity, duration_days),
        ),
        (
            CategoryKind::Clothing,
            clothing_items(duration_days, trip_type.is_capsule()),
        ),
        (
            CategoryKind::ToiletriesAndHealth,
            toiletries_items(duration_days),
        ),
    ];

    if needs_travel_essentials(trip_type, duration_days) {
        sections.push((
            CategoryKind::TravelEssentials,
            catalog::TRAVEL_ESSENTIALS.to_vec(),
        ));
    }

    if include_extras {
        sections.push((CategoryKind::OptionalExtras, catalog::OPTIONAL_EXTRAS.to_vec()));
    }

    let sections: Vec<_> = sections
        .into_iter()
        .filter(|(_, items)| !items.is_empty())
        .collect();

    let modules = dedup_modules(
        sections
            .iter()
            .flat_map(|(kind, _)| kind.modules().iter().copied()),
    );

    let categories: Vec<ItemCategory> = sections
        .iter()
        .map(|(kind, items)| ItemCategory::new(*kind, items))
        .collect();

    let total_items = categories.iter().map(ItemCategory::len).sum();

    PackingList {
        trip: *params,
        pack: base_pack_tier(trip_type, duration_days).recommendation(),
        categories,
        modules,
        total_items,
    }
}

/// Keeps the first occurrence of each module so output order is reproducible.
fn dedup_modules(modules: impl IntoIterator<Item = OrganizerModule>) -> Vec<String> {
    let mut seen = HashSet::new();
    modules
        .into_iter()
        .filter(|module| seen.insert(*module))
        .map(|module| module.label().to_string())
        .collect()
}
