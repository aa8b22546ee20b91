use chrono::{DateTime, Utc};
use chrono_tz::Tz;

#[derive(Clone, Debug, PartialEq)]
pub struct RosterEntry {
    pub name: &'static str,
    pub role: &'static str,
    pub image_url: &'static str,
    /// Second of the team video where this member starts speaking.
    pub video_timestamp_seconds: f64,
    pub timezone_label: &'static str,
    pub zone: Tz,
}

impl RosterEntry {
    /// CSS-friendly handle, "Abel Ortega" -> "Abel-Ortega".
    pub fn slug(&self) -> String {
        self.name.split_whitespace().collect::<Vec<_>>().join("-")
    }
}

pub const ROSTER: &[RosterEntry] = &[
    RosterEntry {
        name: "Abel Ortega",
        role: "CEO / Team Leader",
        image_url: "https://i.postimg.cc/9fBF7473/Abel.jpg",
        video_timestamp_seconds: 5.0,
        timezone_label: "UTC-5",
        zone: chrono_tz::America::Lima,
    },
    RosterEntry {
        name: "Alex Avila",
        role: "Backend Developer",
        image_url: "https://i.postimg.cc/qRbJ19wj/Alex.jpg",
        video_timestamp_seconds: 97.0,
        timezone_label: "UTC-5",
        zone: chrono_tz::America::Lima,
    },
    RosterEntry {
        name: "Mateo Vilchez",
        role: "Frontend Developer",
        image_url: "https://i.postimg.cc/pr32Hzgj/Mateo.jpg",
        video_timestamp_seconds: 175.0,
        timezone_label: "UTC-5",
        zone: chrono_tz::America::Lima,
    },
    RosterEntry {
        name: "Belen Ramos",
        role: "Frontend Developer",
        image_url: "https://i.postimg.cc/NFKgSpPY/Belen.jpg",
        video_timestamp_seconds: 389.0,
        timezone_label: "UTC-5",
        zone: chrono_tz::America::Lima,
    },
];

/// Wall clock of a member, e.g. "09:41".
pub fn local_clock(entry: &RosterEntry, now: DateTime<Utc>) -> String {
    now.with_timezone(&entry.zone).format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn roster_timestamps_are_strictly_increasing() {
        let stamps: Vec<f64> = ROSTER.iter().map(|m| m.video_timestamp_seconds).collect();
        assert!(stamps.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn slug_joins_words_with_dashes() {
        assert_eq!(ROSTER[2].slug(), "Mateo-Vilchez");
    }

    #[test]
    fn local_clock_applies_member_zone() {
        let noon_utc = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        // Lima has no daylight saving, always UTC-5
        assert_eq!(local_clock(&ROSTER[0], noon_utc), "07:00");
    }
}
