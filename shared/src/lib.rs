use serde::{Deserialize, Serialize};

/// A single geographic stop with a stable identity. `name` is display-only
/// and never participates in the optimization itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub id: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// An ordered visiting sequence over a set of waypoints, with aggregate
/// great-circle distance (km) and estimated travel time (minutes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub points: Vec<Waypoint>,
    pub total_distance_km: f64,
    pub total_time_min: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteStatistics {
    pub total_points: usize,
    pub total_distance: String,
    pub total_time: String,
    pub average_time_per_point: f64,
}

/// One day-bucket of an itinerary. Totals cover only the legs traveled
/// within the day; the overnight leg between buckets is charged to neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: usize,
    pub points: Vec<Waypoint>,
    pub distance_km: f64,
    pub time_min: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeRequest {
    pub waypoints: Vec<Waypoint>,
    #[serde(default = "default_use_improvement")]
    pub use_improvement: bool,
    /// When set, the optimized order is additionally grouped into day
    /// buckets with at most this many minutes of travel per day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_minutes_per_day: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizeResponse {
    pub route: Route,
    pub statistics: RouteStatistics,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<Vec<ItineraryDay>>,
    pub gpx_base64: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CitySummary {
    pub slug: String,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub attraction_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
}

pub fn default_use_improvement() -> bool {
    true
}
