use shared::{Route, RouteStatistics};

/// Distances under a kilometer read better in meters.
pub fn format_distance(km: f64) -> String {
    if km < 1.0 {
        format!("{}m", (km * 1000.0).round() as i64)
    } else {
        format!("{km:.1}km")
    }
}

pub fn format_time(minutes: f64) -> String {
    if minutes < 60.0 {
        return format!("{}min", minutes.round() as i64);
    }
    let hours = (minutes / 60.0).floor() as i64;
    let rest = (minutes % 60.0).round() as i64;
    if rest == 0 {
        format!("{hours}h")
    } else {
        format!("{hours}h {rest}min")
    }
}

pub fn route_statistics(route: &Route) -> RouteStatistics {
    let total_points = route.points.len();
    // mean over points, not legs; callers display "time per stop"
    let average_time_per_point = if total_points > 0 {
        route.total_time_min / total_points as f64
    } else {
        0.0
    };

    RouteStatistics {
        total_points,
        total_distance: format_distance(route.total_distance_km),
        total_time: format_time(route.total_time_min),
        average_time_per_point,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Waypoint;

    #[test]
    fn test_format_distance_boundaries() {
        assert_eq!(format_distance(0.999), "999m");
        assert_eq!(format_distance(1.0), "1.0km");
        assert_eq!(format_distance(0.0), "0m");
        assert_eq!(format_distance(12.34), "12.3km");
    }

    #[test]
    fn test_format_time_boundaries() {
        assert_eq!(format_time(0.0), "0min");
        assert_eq!(format_time(59.0), "59min");
        assert_eq!(format_time(60.0), "1h");
        assert_eq!(format_time(90.0), "1h 30min");
        assert_eq!(format_time(125.4), "2h 5min");
    }

    #[test]
    fn test_statistics_empty_route() {
        let route = Route {
            points: vec![],
            total_distance_km: 0.0,
            total_time_min: 0.0,
        };
        let stats = route_statistics(&route);
        assert_eq!(stats.total_points, 0);
        assert_eq!(stats.total_distance, "0m");
        assert_eq!(stats.total_time, "0min");
        assert_eq!(stats.average_time_per_point, 0.0);
    }

    #[test]
    fn test_statistics_averages_over_points_not_legs() {
        let point = |id: &str| Waypoint {
            id: id.to_string(),
            lat: 31.6,
            lon: -7.9,
            name: None,
        };
        let route = Route {
            points: vec![point("a"), point("b"), point("c")],
            total_distance_km: 4.5,
            total_time_min: 90.0,
        };
        let stats = route_statistics(&route);
        assert_eq!(stats.total_points, 3);
        assert_eq!(stats.total_distance, "4.5km");
        assert_eq!(stats.total_time, "1h 30min");
        // 90 minutes over 3 points, not over 2 legs
        assert_eq!(stats.average_time_per_point, 30.0);
    }
}
