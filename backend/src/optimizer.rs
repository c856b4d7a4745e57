use shared::{Route, Waypoint};

const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Assumed door-to-door average speed between stops, in km/h. Leg times
/// are proportional to great-circle distance, not road-network travel
/// time; a known approximation for itinerary estimates.
pub const AVERAGE_SPEED_KMH: f64 = 30.0;

pub fn haversine_km(a: &Waypoint, b: &Waypoint) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let sin_dlat = (dlat / 2.0).sin();
    let sin_dlon = (dlon / 2.0).sin();

    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

pub fn travel_time_min(a: &Waypoint, b: &Waypoint) -> f64 {
    haversine_km(a, b) / AVERAGE_SPEED_KMH * 60.0
}

pub fn path_distance_km(points: &[Waypoint]) -> f64 {
    points.windows(2).map(|w| haversine_km(&w[0], &w[1])).sum()
}

fn path_time_min(points: &[Waypoint]) -> f64 {
    points.windows(2).map(|w| travel_time_min(&w[0], &w[1])).sum()
}

/// Greedy construction: start at the first waypoint as given, then always
/// travel to the closest unvisited one. Ties keep the earliest remaining
/// candidate, so the result is deterministic for a given input order.
///
/// O(n²), fine for itinerary-sized inputs (tens of stops).
pub fn nearest_neighbor_route(waypoints: &[Waypoint]) -> Route {
    if waypoints.len() < 2 {
        return Route {
            points: waypoints.to_vec(),
            total_distance_km: 0.0,
            total_time_min: 0.0,
        };
    }

    let mut visited = vec![false; waypoints.len()];
    let mut points = Vec::with_capacity(waypoints.len());
    let mut total_distance_km = 0.0;
    let mut total_time_min = 0.0;

    let mut current = 0;
    visited[0] = true;
    points.push(waypoints[0].clone());

    for _ in 1..waypoints.len() {
        let mut next: Option<usize> = None;
        let mut best_km = f64::INFINITY;
        for (idx, candidate) in waypoints.iter().enumerate() {
            if visited[idx] {
                continue;
            }
            let km = haversine_km(&waypoints[current], candidate);
            if next.is_none() || km < best_km {
                next = Some(idx);
                best_km = km;
            }
        }
        let Some(next) = next else { break };

        total_distance_km += best_km;
        total_time_min += travel_time_min(&waypoints[current], &waypoints[next]);
        visited[next] = true;
        points.push(waypoints[next].clone());
        current = next;
    }

    Route {
        points,
        total_distance_km,
        total_time_min,
    }
}

/// Classic 2-opt local search: reverse the sub-sequence between two
/// indices whenever that shortens the tour, until a full sweep finds no
/// improving reversal. First-improvement with restart: an accepted
/// reversal immediately restarts the scan. Index 0 is anchored, the
/// route always starts where the traveler starts.
///
/// Total distance never increases; termination follows from the strict
/// decrease on every accepted reversal.
pub fn two_opt_improve(route: Route) -> Route {
    if route.points.len() <= 2 {
        return route;
    }

    let mut points = route.points;
    let mut best_km = path_distance_km(&points);

    let mut improved = true;
    while improved {
        improved = false;
        'scan: for i in 1..points.len() - 1 {
            for j in i + 1..points.len() {
                let mut candidate = points.clone();
                candidate[i..=j].reverse();
                let km = path_distance_km(&candidate);
                if km < best_km {
                    points = candidate;
                    best_km = km;
                    improved = true;
                    break 'scan;
                }
            }
        }
    }

    let total_time_min = path_time_min(&points);
    Route {
        points,
        total_distance_km: best_km,
        total_time_min,
    }
}

/// Builds a nearest-neighbor route and, unless disabled, polishes it with
/// 2-opt. Pure function: same input, same output, no I/O.
pub fn optimize_route(waypoints: &[Waypoint], use_improvement: bool) -> Route {
    let route = nearest_neighbor_route(waypoints);
    if use_improvement && waypoints.len() > 2 {
        two_opt_improve(route)
    } else {
        route
    }
}
