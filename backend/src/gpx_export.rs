use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use geo_types::Point;
use gpx::{Gpx, GpxVersion, Track, TrackSegment, Waypoint as GpxWaypoint};

use crate::error::PlannerError;
use shared::{Route, Waypoint};

pub fn encode_route_as_gpx(route: &Route) -> Result<String, PlannerError> {
    let mut gpx = Gpx {
        version: GpxVersion::Gpx11,
        creator: Some("morocco_trip_planner".into()),
        ..Default::default()
    };
    let mut track = Track {
        name: Some("Optimized itinerary".into()),
        ..Default::default()
    };

    let mut segment = TrackSegment::new();
    for waypoint in route.points.iter().map(to_gpx_waypoint) {
        segment.points.push(waypoint);
    }
    track.segments.push(segment);
    gpx.tracks.push(track);

    let mut buffer = Vec::new();
    gpx::write(&gpx, &mut buffer)?;
    Ok(BASE64.encode(buffer))
}

fn to_gpx_waypoint(point: &Waypoint) -> GpxWaypoint {
    let mut waypoint = GpxWaypoint::new(Point::new(point.lon, point.lat));
    waypoint.name = point.name.clone();
    waypoint
}
