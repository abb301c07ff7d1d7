/// Cross-platform notification support
/// Currently only implements macOS notifications

#[cfg(target_os = "macos")]
use std::process::Command;

/// Send a notification when the last pending task is completed
pub fn notify_all_done(total: usize) {
    #[cfg(target_os = "macos")]
    {
        let script = format!(
            r#"display notification "All {} task{} completed!" with title "Tick""#,
            total,
            if total == 1 { "" } else { "s" }
        );

        let _ = Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .output();
    }

    #[cfg(not(target_os = "macos"))]
    {
        // No-op on other platforms
        let _ = total;
    }
}
