//! Route-creation wizard draft and stage progression.
//!
//! DESIGN
//! ======
//! The wizard is the one multi-step flow in the operator console: route
//! details, then segments, then fares, then a schedule. The draft is a plain
//! serializable struct so the page can persist it to `localStorage` between
//! reloads; stage gating is pure so it stays testable off-browser.

#[cfg(test)]
#[path = "wizard_test.rs"]
mod wizard_test;

use serde::{Deserialize, Serialize};

use crate::net::types::SeatType;
use crate::util::format::parse_hhmm;

/// The four wizard stages, in submission order. Also used to label which
/// step of the server-side sequence failed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WizardStage {
    #[default]
    Route,
    Segments,
    Fares,
    Schedule,
}

impl WizardStage {
    pub fn label(self) -> &'static str {
        match self {
            WizardStage::Route => "route details",
            WizardStage::Segments => "segments",
            WizardStage::Fares => "fares",
            WizardStage::Schedule => "schedule",
        }
    }

    pub fn next(self) -> Option<WizardStage> {
        match self {
            WizardStage::Route => Some(WizardStage::Segments),
            WizardStage::Segments => Some(WizardStage::Fares),
            WizardStage::Fares => Some(WizardStage::Schedule),
            WizardStage::Schedule => None,
        }
    }

    pub fn prev(self) -> Option<WizardStage> {
        match self {
            WizardStage::Route => None,
            WizardStage::Segments => Some(WizardStage::Route),
            WizardStage::Fares => Some(WizardStage::Segments),
            WizardStage::Schedule => Some(WizardStage::Fares),
        }
    }
}

/// A fare entry keyed to a draft segment by index; segment ids only exist
/// after the segments step has run server-side.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FareDraft {
    pub segment_index: usize,
    pub seat_type: SeatType,
    /// Price in minor currency units.
    pub amount_minor: i64,
}

/// Everything the wizard collects before submission.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteDraft {
    pub name: String,
    pub origin: String,
    pub destination: String,
    /// Intermediate stops in travel order.
    pub stops: Vec<String>,
    pub fares: Vec<FareDraft>,
    pub bus_id: String,
    /// `HH:MM` 24-hour local departure.
    pub departure_time: String,
    /// Operating days as `MON`..`SUN` labels.
    pub days_of_week: Vec<String>,
}

impl RouteDraft {
    /// Upsert the fare for one segment and seat class.
    pub fn set_fare(&mut self, segment_index: usize, seat_type: SeatType, amount_minor: i64) {
        if let Some(existing) = self
            .fares
            .iter_mut()
            .find(|fare| fare.segment_index == segment_index && fare.seat_type == seat_type)
        {
            existing.amount_minor = amount_minor;
        } else {
            self.fares.push(FareDraft {
                segment_index,
                seat_type,
                amount_minor,
            });
        }
    }

    /// Remove the fare for one segment and seat class, if present.
    pub fn clear_fare(&mut self, segment_index: usize, seat_type: SeatType) {
        self.fares
            .retain(|fare| !(fare.segment_index == segment_index && fare.seat_type == seat_type));
    }

    /// Current fare for one segment and seat class.
    pub fn fare_amount(&self, segment_index: usize, seat_type: SeatType) -> Option<i64> {
        self.fares
            .iter()
            .find(|fare| fare.segment_index == segment_index && fare.seat_type == seat_type)
            .map(|fare| fare.amount_minor)
    }
}

/// A leg between two consecutive stops, before it has a server id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentDraft {
    pub origin_stop: String,
    pub destination_stop: String,
}

/// Expand origin + intermediate stops + destination into consecutive legs.
/// With no intermediate stops this is the single origin→destination leg.
pub fn segments_from_stops(origin: &str, stops: &[String], destination: &str) -> Vec<SegmentDraft> {
    let mut points = Vec::with_capacity(stops.len() + 2);
    points.push(origin.to_owned());
    points.extend(stops.iter().cloned());
    points.push(destination.to_owned());

    points
        .windows(2)
        .map(|pair| SegmentDraft {
            origin_stop: pair[0].clone(),
            destination_stop: pair[1].clone(),
        })
        .collect()
}

/// Segment indexes that have no fare yet. The fares stage cannot advance
/// while this is non-empty.
pub fn unfared_segments(draft: &RouteDraft) -> Vec<usize> {
    let segment_count = segments_from_stops(&draft.origin, &draft.stops, &draft.destination).len();
    (0..segment_count)
        .filter(|index| !draft.fares.iter().any(|fare| fare.segment_index == *index))
        .collect()
}

/// Gate for leaving `stage`. Returns the message to show inline when the
/// draft is not ready.
pub fn validate_stage(stage: WizardStage, draft: &RouteDraft) -> Result<(), String> {
    match stage {
        WizardStage::Route => {
            if draft.name.trim().is_empty()
                || draft.origin.trim().is_empty()
                || draft.destination.trim().is_empty()
            {
                return Err("Enter a route name, origin, and destination.".to_owned());
            }
            if draft.origin.trim() == draft.destination.trim() {
                return Err("Origin and destination must differ.".to_owned());
            }
            Ok(())
        }
        WizardStage::Segments => {
            if draft.stops.iter().any(|stop| stop.trim().is_empty()) {
                return Err("Remove or fill in empty stops.".to_owned());
            }
            Ok(())
        }
        WizardStage::Fares => {
            let missing = unfared_segments(draft);
            if !missing.is_empty() {
                return Err(format!("{} segment(s) still need a fare.", missing.len()));
            }
            if draft.fares.iter().any(|fare| fare.amount_minor <= 0) {
                return Err("Fares must be greater than zero.".to_owned());
            }
            Ok(())
        }
        WizardStage::Schedule => {
            if draft.bus_id.trim().is_empty() {
                return Err("Pick a bus for this schedule.".to_owned());
            }
            if parse_hhmm(&draft.departure_time).is_none() {
                return Err("Enter a departure time as HH:MM.".to_owned());
            }
            if draft.days_of_week.is_empty() {
                return Err("Pick at least one operating day.".to_owned());
            }
            Ok(())
        }
    }
}

/// Run every stage gate in order, for the final submit.
pub fn validate_all(draft: &RouteDraft) -> Result<(), String> {
    for stage in [
        WizardStage::Route,
        WizardStage::Segments,
        WizardStage::Fares,
        WizardStage::Schedule,
    ] {
        validate_stage(stage, draft)?;
    }
    Ok(())
}

/// Shared wizard state provided via context.
#[derive(Clone, Debug, Default)]
pub struct WizardState {
    pub stage: WizardStage,
    pub draft: RouteDraft,
    pub submitting: bool,
    pub error: Option<String>,
    /// Set once the full sequence has completed, to drive navigation.
    pub completed_route_id: Option<String>,
}

/// `localStorage` key the wizard page persists its draft under.
pub const DRAFT_STORAGE_KEY: &str = "busline_route_draft";
