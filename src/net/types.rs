//! Wire DTOs for the client/backend REST boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON payloads (camelCase on the wire) so
//! serde round-trips stay lossless and feature API modules can stay
//! schema-driven.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Token pair returned by `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    /// Bearer token attached to authenticated requests. Opaque to the client.
    pub access_token: String,
    /// Opaque token exchanged at `POST /auth/refresh` when the access token
    /// expires.
    pub refresh_token: String,
}

/// Response of `POST /auth/refresh`.
///
/// The backend always returns a fresh access token and may rotate the
/// refresh token alongside it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
}

/// The authenticated user as returned by `GET /users/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Role labels granted to this account (e.g. `"OPERATOR"`).
    #[serde(default)]
    pub roles: Vec<String>,
}

impl UserProfile {
    /// Highest-precedence role for routing and menu decisions.
    pub fn primary_role(&self) -> Role {
        Role::from_labels(&self.roles)
    }
}

/// Account role, ordered by precedence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Role {
    Admin,
    Operator,
    #[default]
    User,
}

impl Role {
    /// Derive the primary role from a label set. Precedence is fixed:
    /// ADMIN over OPERATOR over USER; unknown labels count as USER.
    pub fn from_labels<S: AsRef<str>>(labels: &[S]) -> Self {
        let mut role = Role::User;
        for label in labels {
            match label.as_ref() {
                "ADMIN" => return Role::Admin,
                "OPERATOR" => role = Role::Operator,
                _ => {}
            }
        }
        role
    }

    /// Whether this role may use the operator console.
    pub fn can_operate(self) -> bool {
        matches!(self, Role::Admin | Role::Operator)
    }
}

/// A bus in the operator's fleet.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bus {
    pub id: String,
    /// Vehicle registration plate, unique per operator.
    pub registration_no: String,
    /// Friendly display name shown to customers.
    pub name: String,
    /// Layout code understood by the seat map renderer (e.g. `"2x2"`).
    pub seat_layout: String,
    pub total_seats: u32,
    /// Amenity ids offered on this bus.
    #[serde(default)]
    pub amenity_ids: Vec<String>,
}

/// A route owned by the operator: an ordered chain of stops between an
/// origin and a destination city.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusRoute {
    pub id: String,
    pub name: String,
    pub origin: String,
    pub destination: String,
    /// Intermediate stops in travel order, excluding origin and destination.
    #[serde(default)]
    pub stops: Vec<String>,
}

/// A bookable leg between two consecutive stops on a route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteSegment {
    pub id: String,
    pub origin_stop: String,
    pub destination_stop: String,
    /// Zero-based order of this segment along the route.
    pub position: u32,
}

/// Seat classes fares are priced per.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatType {
    Seater,
    Sleeper,
}

impl SeatType {
    /// All seat classes, in display order.
    pub fn all() -> [SeatType; 2] {
        [SeatType::Seater, SeatType::Sleeper]
    }

    pub fn label(self) -> &'static str {
        match self {
            SeatType::Seater => "Seater",
            SeatType::Sleeper => "Sleeper",
        }
    }
}

/// A fare for one segment and seat class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fare {
    pub segment_id: String,
    pub seat_type: SeatType,
    /// Price in minor currency units (cents).
    pub amount_minor: i64,
}

/// A recurring departure of a bus along a route.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: String,
    pub route_id: String,
    pub bus_id: String,
    /// Local departure time, `HH:MM` 24-hour.
    pub departure_time: String,
    /// Operating days as `MON`..`SUN` labels.
    #[serde(default)]
    pub days_of_week: Vec<String>,
    pub active: bool,
}

/// An amenity the platform knows about (wifi, charging, ...).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amenity {
    pub id: String,
    pub name: String,
}

/// Price quote for one seat class on a searched trip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FareQuote {
    pub seat_type: SeatType,
    pub amount_minor: i64,
}

/// One result row from `GET /search`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResult {
    pub schedule_id: String,
    pub route_name: String,
    pub origin: String,
    pub destination: String,
    /// Local departure time, `HH:MM` 24-hour.
    pub departure_time: String,
    /// Local arrival time, `HH:MM` 24-hour; may be past midnight.
    pub arrival_time: String,
    /// Quotes for the seat classes available on this trip.
    #[serde(default)]
    pub seat_types: Vec<FareQuote>,
    #[serde(default)]
    pub amenity_ids: Vec<String>,
}

/// Resource id envelope returned by create endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedId {
    pub id: String,
}
