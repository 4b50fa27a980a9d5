use chrono::Local;

/// Wall-clock source for record timestamps.
///
/// The zone label is resolved once when the clock is constructed and reused
/// for every timestamp in the session, so it cannot reflect zone changes
/// (e.g. a DST transition) that happen after startup.
#[derive(Debug, Clone)]
pub struct LocalClock {
    zone_label: String,
}

impl LocalClock {
    pub fn new(zone_label: String) -> Self {
        Self { zone_label }
    }

    /// Resolve the zone label from the `TZ` environment variable, falling
    /// back to the system's current UTC offset when it is unset or empty.
    pub fn from_env() -> Self {
        let zone_label = std::env::var("TZ")
            .ok()
            .filter(|tz| !tz.is_empty())
            .unwrap_or_else(|| Local::now().format("%:z").to_string());
        Self::new(zone_label)
    }

    pub fn zone_label(&self) -> &str {
        &self.zone_label
    }

    /// Current local time rendered as "<ISO-8601 date-time> <zone label>"
    pub fn now(&self) -> String {
        format!(
            "{} {}",
            Local::now().format("%Y-%m-%dT%H:%M:%S%.6f"),
            self.zone_label
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn timestamp_ends_with_cached_zone_label() {
        let clock = LocalClock::new("JST".to_string());
        let stamp = clock.now();
        assert!(stamp.ends_with(" JST"));
    }

    #[test]
    fn timestamp_date_time_part_is_iso_8601() {
        let clock = LocalClock::new("UTC".to_string());
        let stamp = clock.now();
        let date_time = stamp.strip_suffix(" UTC").expect("zone label suffix");
        NaiveDateTime::parse_from_str(date_time, "%Y-%m-%dT%H:%M:%S%.6f")
            .expect("parseable ISO-8601 local date-time");
    }

    #[test]
    fn zone_label_is_stable_across_calls() {
        let clock = LocalClock::new("PST".to_string());
        assert_eq!(clock.zone_label(), "PST");
        let first = clock.now();
        let second = clock.now();
        assert!(first.ends_with(" PST"));
        assert!(second.ends_with(" PST"));
    }
}
