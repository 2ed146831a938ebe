use std::time::Duration;

use dioxus::prelude::*;

pub const COUNTER_DURATION_MS: u64 = 1_500;
const FRAME: Duration = Duration::from_millis(16);

pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Displayed value `elapsed_ms` into an animation from 0 to `target`.
pub fn counter_value(target: u64, elapsed_ms: u64, duration_ms: u64) -> u64 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return target;
    }
    let progress = ease_out_cubic(elapsed_ms as f64 / duration_ms as f64);
    (target as f64 * progress).floor() as u64
}

/// Counts up to `value` whenever it changes.
#[component]
pub fn AnimatedCounter(value: u64) -> Element {
    let mut shown = use_signal(|| 0u64);

    let _ = use_resource(use_reactive!(|(value,)| async move {
        let target = value;
        let mut elapsed = 0u64;
        loop {
            shown.set(counter_value(target, elapsed, COUNTER_DURATION_MS));
            if elapsed >= COUNTER_DURATION_MS {
                break;
            }
            crate::sleep(FRAME).await;
            elapsed += FRAME.as_millis() as u64;
        }
    }));

    rsx! {
        span { class: "counter", "{shown}" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert_eq!(ease_out_cubic(1.0), 1.0);
        assert!(ease_out_cubic(0.5) > 0.5);
        assert_eq!(ease_out_cubic(2.0), 1.0);
    }

    #[test]
    fn test_counter_reaches_target() {
        assert_eq!(counter_value(250, 0, 1_500), 0);
        assert_eq!(counter_value(250, 750, 1_500), 218);
        assert_eq!(counter_value(250, 1_500, 1_500), 250);
        assert_eq!(counter_value(250, 9_000, 1_500), 250);
        assert_eq!(counter_value(0, 700, 1_500), 0);
    }

    #[test]
    fn test_counter_is_monotonic() {
        let values: Vec<u64> = (0..=1_500).step_by(16).map(|t| counter_value(1_000, t, 1_500)).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
    }
}
