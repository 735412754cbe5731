/// Health and status API routes
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::fmt::Write;
use std::time::Duration;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub service: String,
    pub uptime: String,
}

/// GET /health - Health check endpoint
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

/// GET /status - Service status with uptime since start
pub async fn status(State(app_state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        service: "running".to_string(),
        uptime: format_uptime(app_state.uptime()),
    })
}

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// Render a duration as `1h2m3.5s`, `1m30s`, `2.5s` or `250ms`
pub fn format_uptime(uptime: Duration) -> String {
    let nanos = uptime.as_nanos();
    if nanos == 0 {
        return "0s".to_string();
    }

    if nanos < NANOS_PER_SEC {
        let (scale, unit) = match nanos {
            0..=999 => (1, "ns"),
            1_000..=999_999 => (1_000, "µs"),
            _ => (1_000_000, "ms"),
        };
        return format!("{}{}", fixed_point(nanos, scale), unit);
    }

    let total_secs = uptime.as_secs();
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = u128::from(total_secs % 60) * NANOS_PER_SEC + u128::from(uptime.subsec_nanos());

    let mut out = String::new();
    if hours > 0 {
        let _ = write!(out, "{}h", hours);
    }
    if hours > 0 || minutes > 0 {
        let _ = write!(out, "{}m", minutes);
    }
    let _ = write!(out, "{}s", fixed_point(seconds, NANOS_PER_SEC));
    out
}

/// `value / scale` as a decimal with trailing zeros trimmed
fn fixed_point(value: u128, scale: u128) -> String {
    let whole = value / scale;
    let frac = value % scale;
    if frac == 0 {
        return whole.to_string();
    }

    let width = scale.to_string().len() - 1;
    let digits = format!("{:0width$}", frac, width = width);
    format!("{}.{}", whole, digits.trim_end_matches('0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero() {
        assert_eq!(format_uptime(Duration::ZERO), "0s");
    }

    #[test]
    fn sub_second_units() {
        assert_eq!(format_uptime(Duration::from_nanos(42)), "42ns");
        assert_eq!(format_uptime(Duration::from_micros(1500)), "1.5ms");
        assert_eq!(format_uptime(Duration::from_micros(12)), "12µs");
        assert_eq!(format_uptime(Duration::from_millis(250)), "250ms");
    }

    #[test]
    fn seconds_with_fraction() {
        assert_eq!(format_uptime(Duration::from_millis(1500)), "1.5s");
        assert_eq!(format_uptime(Duration::from_secs(59)), "59s");
        assert_eq!(format_uptime(Duration::new(2, 5)), "2.000000005s");
    }

    #[test]
    fn minutes_and_hours() {
        assert_eq!(format_uptime(Duration::from_secs(90)), "1m30s");
        assert_eq!(format_uptime(Duration::from_secs(3600)), "1h0m0s");
        assert_eq!(
            format_uptime(Duration::from_secs(3723) + Duration::from_millis(500)),
            "1h2m3.5s"
        );
        assert_eq!(format_uptime(Duration::from_secs(26 * 3600)), "26h0m0s");
    }
}
