use shared::{ItineraryDay, Route};

use crate::optimizer::{haversine_km, travel_time_min};

/// Groups an optimized visiting order into day buckets. A leg that would
/// push the current day past `max_minutes_per_day` of travel starts the
/// next day instead; the overnight leg is charged to neither day.
///
/// Every point lands in exactly one day, in route order.
pub fn split_into_days(route: &Route, max_minutes_per_day: f64) -> Vec<ItineraryDay> {
    let mut days = Vec::new();
    let mut points = Vec::new();
    let mut distance_km = 0.0;
    let mut time_min = 0.0;

    for (idx, point) in route.points.iter().enumerate() {
        if points.is_empty() {
            points.push(point.clone());
            continue;
        }

        let prev = &route.points[idx - 1];
        let leg_min = travel_time_min(prev, point);
        if time_min + leg_min > max_minutes_per_day {
            days.push(ItineraryDay {
                day: days.len() + 1,
                points: std::mem::take(&mut points),
                distance_km,
                time_min,
            });
            distance_km = 0.0;
            time_min = 0.0;
            points.push(point.clone());
        } else {
            distance_km += haversine_km(prev, point);
            time_min += leg_min;
            points.push(point.clone());
        }
    }

    if !points.is_empty() {
        days.push(ItineraryDay {
            day: days.len() + 1,
            points,
            distance_km,
            time_min,
        });
    }

    days
}
