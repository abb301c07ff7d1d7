use std::time::Duration;

/// Default tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// How long a transient flash message stays on screen
pub const FLASH_MS: u64 = 2000;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// Get flash message duration
pub fn flash_duration() -> Duration {
    Duration::from_millis(FLASH_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_duration() {
        let duration = tick_duration();
        assert_eq!(duration, Duration::from_millis(250));
    }

    #[test]
    fn test_flash_outlives_several_ticks() {
        assert!(flash_duration() > tick_duration());
    }
}
