// Placeholder constant until a real distance/speed estimator exists.
const PLACEHOLDER_ETA_MINUTES: u32 = 10;

pub fn estimate_eta_minutes(speed_mps: Option<f64>) -> Option<u32> {
    match speed_mps {
        Some(speed) if speed > 0.0 => Some(PLACEHOLDER_ETA_MINUTES),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::estimate_eta_minutes;

    #[test]
    fn no_speed_means_no_estimate() {
        assert_eq!(estimate_eta_minutes(None), None);
    }

    #[test]
    fn stationary_courier_has_no_estimate() {
        assert_eq!(estimate_eta_minutes(Some(0.0)), None);
    }

    #[test]
    fn any_positive_speed_gets_the_placeholder() {
        assert_eq!(estimate_eta_minutes(Some(5.0)), Some(10));
        assert_eq!(estimate_eta_minutes(Some(0.1)), Some(10));
    }
}
