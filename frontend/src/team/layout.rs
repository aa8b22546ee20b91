use std::f64::consts::PI;

pub const ORBIT_RADIUS: f64 = 180.0;
/// Offset of the orbit centre inside the carousel box.
pub const ORBIT_CENTER: (f64, f64) = (365.0, 180.0);

const TOKEN_BASE_SIZE: f64 = 120.0;
const TOKEN_SIZE_STEP: f64 = 15.0;
const TOKEN_MIN_SIZE: f64 = 48.0;
const ENTRANCE_STAGGER_SECS: f64 = 0.2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitPosition {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
}

/// Point `k` of `m` evenly spaced on a circle, the first one at the top.
pub fn circle_position(k: usize, m: usize, radius: f64) -> OrbitPosition {
    let m = m.max(1) as f64;
    let angle = (k as f64 * 2.0 * PI) / m - PI / 2.0;
    OrbitPosition {
        x: radius * angle.cos(),
        y: radius * angle.sin(),
        angle,
    }
}

/// Diameter in px of the token shown at `display_index` (the active slot is 0).
pub fn token_size(display_index: usize) -> f64 {
    (TOKEN_BASE_SIZE - TOKEN_SIZE_STEP * display_index as f64).max(TOKEN_MIN_SIZE)
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitSlot {
    pub display_index: usize,
    pub position: OrbitPosition,
    pub size: f64,
}

impl OrbitSlot {
    /// Resting transform, relative to the carousel box.
    pub fn transform(&self) -> String {
        format!(
            "translate({:.1}px, {:.1}px)",
            ORBIT_CENTER.0 + self.position.x,
            ORBIT_CENTER.1 + self.position.y
        )
    }

    /// Where the token waits before its entrance: twice as far out, turned
    /// by its own angle and collapsed.
    pub fn hidden_transform(&self) -> String {
        format!(
            "translate({:.1}px, {:.1}px) rotate({:.1}deg) scale(0)",
            ORBIT_CENTER.0 + self.position.x * 2.0,
            ORBIT_CENTER.1 + self.position.y * 2.0,
            self.position.angle.to_degrees()
        )
    }

    pub fn entrance_delay_secs(&self) -> f64 {
        self.display_index as f64 * ENTRANCE_STAGGER_SECS
    }
}

/// Slots for every member except the active one, for a display order of
/// `len` members.
pub fn orbit_slots(len: usize, radius: f64) -> Vec<OrbitSlot> {
    let remaining = len.saturating_sub(1);
    (1..len)
        .map(|display_index| OrbitSlot {
            display_index,
            position: circle_position(display_index - 1, remaining, radius),
            size: token_size(display_index),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn first_position_is_at_the_top() {
        let p = circle_position(0, 3, 180.0);
        assert!(close(p.x, 0.0));
        assert!(close(p.y, -180.0));
        assert!(close(p.angle, -PI / 2.0));
    }

    #[test]
    fn positions_are_evenly_spaced_on_the_radius() {
        for k in 0..3 {
            let p = circle_position(k, 3, 180.0);
            assert!(close(p.x.hypot(p.y), 180.0));
        }
        let a = circle_position(0, 3, 1.0).angle;
        let b = circle_position(1, 3, 1.0).angle;
        assert!(close(b - a, 2.0 * PI / 3.0));
    }

    #[test]
    fn token_size_shrinks_linearly_with_floor() {
        assert_eq!(token_size(1), 105.0);
        assert_eq!(token_size(2), 90.0);
        assert_eq!(token_size(3), 75.0);
        assert_eq!(token_size(10), 48.0);
    }

    #[test]
    fn orbit_skips_the_active_slot() {
        let slots = orbit_slots(4, ORBIT_RADIUS);
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[0].display_index, 1);
        assert!(close(slots[0].position.y, -ORBIT_RADIUS));
        assert!(close(slots[2].entrance_delay_secs(), 0.6));
        assert!(orbit_slots(1, ORBIT_RADIUS).is_empty());
        assert!(orbit_slots(0, ORBIT_RADIUS).is_empty());
    }

    #[test]
    fn transforms_are_offset_by_the_centre() {
        let slot = &orbit_slots(4, ORBIT_RADIUS)[0];
        assert_eq!(slot.transform(), "translate(365.0px, 0.0px)");
        assert_eq!(slot.hidden_transform(), "translate(365.0px, -180.0px) rotate(-90.0deg) scale(0)");
    }
}
