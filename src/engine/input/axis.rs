// Analog stick dead-zone handling

/// Default dead zone for a normalised (-1.0 to 1.0) stick axis
pub const DEFAULT_DEAD_ZONE: f32 = 0.3;

/// Reduce one analog axis to a discrete intent of -1, 0 or 1.
///
/// Values must exceed the dead zone strictly. NaN and infinities are neutral.
pub fn axis_intent(value: f32, dead_zone: f32) -> i32 {
    if !value.is_finite() {
        0
    } else if value > dead_zone {
        1
    } else if value < -dead_zone {
        -1
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inside_dead_zone_is_neutral() {
        assert_eq!(axis_intent(0.0, DEFAULT_DEAD_ZONE), 0);
        assert_eq!(axis_intent(0.29, DEFAULT_DEAD_ZONE), 0);
        assert_eq!(axis_intent(-0.3, DEFAULT_DEAD_ZONE), 0);
    }

    #[test]
    fn test_outside_dead_zone() {
        assert_eq!(axis_intent(0.31, DEFAULT_DEAD_ZONE), 1);
        assert_eq!(axis_intent(-1.0, DEFAULT_DEAD_ZONE), -1);
    }

    #[test]
    fn test_non_finite_is_neutral() {
        assert_eq!(axis_intent(f32::NAN, DEFAULT_DEAD_ZONE), 0);
        assert_eq!(axis_intent(f32::INFINITY, DEFAULT_DEAD_ZONE), 0);
        assert_eq!(axis_intent(f32::NEG_INFINITY, DEFAULT_DEAD_ZONE), 0);
    }
}
