use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{
    Block, BlockLocations, DayCell, PodRows, PractitionerRow, ResolvedPod,
    ScheduleError, ScheduleGrid, SchedulePayload, SURGERY_COLUMN_KEY,
};

/// Known short forms for cramped grid cells; anything else passes through.
fn abbreviate_location(label: &str) -> String {
    match label.to_lowercase().as_str() {
        "telehealth" => "TH".to_string(),
        "surgery" => "SX".to_string(),
        "irvine" => "IRV".to_string(),
        _ => label.to_string(),
    }
}

/// Display name for a location key. The surgery column is its own label;
/// unregistered ids fall back to the id itself.
fn location_display_name<'a>(loc_id: &'a str, location_names: &'a HashMap<String, String>) -> &'a str {
    if loc_id == SURGERY_COLUMN_KEY {
        SURGERY_COLUMN_KEY
    } else {
        location_names
            .get(loc_id)
            .map(String::as_str)
            .unwrap_or(loc_id)
    }
}

fn is_telehealth_location(loc_id: &str, location_names: &HashMap<String, String>) -> bool {
    location_display_name(loc_id, location_names).eq_ignore_ascii_case("telehealth")
}

/// Every block key in the payload must be AM or PM. Anything else is a
/// malformed feed and fails the whole aggregation rather than rendering a
/// silently wrong grid.
pub fn validate_blocks(payload: &SchedulePayload) -> Result<(), ScheduleError> {
    for practitioners in payload.schedule.values() {
        for blocks in practitioners.values() {
            for key in blocks.keys() {
                key.parse::<Block>()?;
            }
        }
    }
    Ok(())
}

fn block_entries<'a>(
    payload: &'a SchedulePayload,
    date: &str,
    practitioner_id: &str,
    block: Block,
) -> Option<&'a BlockLocations> {
    payload
        .schedule
        .get(date)?
        .get(practitioner_id)?
        .get(block.as_str())
}

/// Collapse a block's location entries into one label, or None when nothing
/// is scheduled.
///
/// Telehealth is low-signal: it is hidden whenever any in-person entry
/// shares the block, and shown only when it is the sole entry. After
/// suppression only the first surviving entry renders (entries are ordered
/// by location id); showing one location per half-day is a deliberate
/// simplification, not data loss.
pub fn block_label(
    payload: &SchedulePayload,
    date: &str,
    practitioner_id: &str,
    block: Block,
) -> Option<String> {
    let entries = block_entries(payload, date, practitioner_id, block)?;
    if entries.is_empty() {
        return None;
    }

    let non_telehealth: Vec<(&String, &String)> = entries
        .iter()
        .filter(|(id, _)| !is_telehealth_location(id, &payload.location_names))
        .collect();

    let (loc_id, time) = if non_telehealth.is_empty() {
        entries.iter().next()?
    } else {
        non_telehealth.into_iter().next()?
    };

    let label = abbreviate_location(location_display_name(loc_id, &payload.location_names));
    if time.is_empty() {
        Some(label)
    } else {
        Some(format!("{} {}", time, label))
    }
}

/// Final per-block cell text. "OUT" is the explicit absence sentinel; a cell
/// is never empty.
pub fn block_cell(
    payload: &SchedulePayload,
    date: &str,
    practitioner_id: &str,
    block: Block,
) -> String {
    match block_label(payload, date, practitioner_id, block) {
        Some(label) => format!("{}: {}", block, label),
        None => format!("{}: OUT", block),
    }
}

/// Column header form of a date: MM/DD.
pub fn format_column_label(date: NaiveDate) -> String {
    date.format("%m/%d").to_string()
}

/// "Name (Role)" when a role is on file, otherwise just the name.
pub fn display_practitioner(practitioner_id: &str, payload: &SchedulePayload) -> String {
    let name = payload
        .practitioner_names
        .get(practitioner_id)
        .map(String::as_str)
        .unwrap_or(practitioner_id);
    match payload
        .practitioner_roles
        .get(practitioner_id)
        .filter(|role| !role.is_empty())
    {
        Some(role) => format!("{} ({})", name, role),
        None => name.to_string(),
    }
}

/// Assemble the full display grid for the resolved dates and roster. Pure:
/// the same inputs always yield the same grid, and missing data degrades to
/// OUT cells rather than erroring. Only a structurally malformed payload
/// fails.
pub fn build_grid(
    days: &[NaiveDate],
    pods: &[ResolvedPod],
    payload: &SchedulePayload,
) -> Result<ScheduleGrid, ScheduleError> {
    validate_blocks(payload)?;

    let pods_out = pods
        .iter()
        .map(|pod| PodRows {
            name: pod.name.clone(),
            rows: pod
                .practitioner_ids
                .iter()
                .map(|id| PractitionerRow {
                    practitioner_id: id.clone(),
                    display_name: display_practitioner(id, payload),
                    cells: days
                        .iter()
                        .map(|day| {
                            let date = day.to_string();
                            DayCell {
                                column_label: format_column_label(*day),
                                am: block_cell(payload, &date, id, Block::Am),
                                pm: block_cell(payload, &date, id, Block::Pm),
                                date,
                            }
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect();

    Ok(ScheduleGrid {
        days: days.iter().map(|d| d.to_string()).collect(),
        pods: pods_out,
    })
}
