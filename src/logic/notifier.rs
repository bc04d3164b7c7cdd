//! Desktop Notifications
//!
//! Fire-and-forget alerts for high severity threats. A missing notification
//! backend is normal on headless hosts, so `dispatch` never reports failure
//! to its caller.

use std::process::{Command, Stdio};
use std::time::Duration;

/// Title prefix for every alert
pub const ALERT_TITLE: &str = "🚨 CRITICAL THREAT";

/// How long the desktop keeps the alert on screen
pub const ALERT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
    pub timeout: Duration,
}

impl Alert {
    pub fn critical(message: impl Into<String>) -> Self {
        Self {
            title: ALERT_TITLE.to_string(),
            message: message.into(),
            timeout: ALERT_TIMEOUT,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("no notification backend for this platform")]
    Unsupported,

    #[error("failed to launch {command}: {source}")]
    Spawn {
        command: &'static str,
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// NOTIFIER TRAIT
// ============================================================================

pub trait Notifier: Send + Sync {
    fn kind(&self) -> &'static str;
    fn notify(&self, alert: &Alert) -> Result<(), NotifyError>;
}

/// Send an alert, swallowing any failure
pub fn dispatch(notifier: &dyn Notifier, alert: &Alert) {
    if let Err(e) = notifier.notify(alert) {
        tracing::debug!("Notification via {} dropped: {}", notifier.kind(), e);
    }
}

// ============================================================================
// BACKENDS
// ============================================================================

/// Does nothing. Used when notifications are disabled.
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn kind(&self) -> &'static str {
        "noop"
    }

    fn notify(&self, _alert: &Alert) -> Result<(), NotifyError> {
        Ok(())
    }
}

/// Shells out to the platform notification tool without waiting for it
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn kind(&self) -> &'static str {
        "desktop"
    }

    fn notify(&self, alert: &Alert) -> Result<(), NotifyError> {
        let (program, mut command) = platform_command(alert)?;

        let mut child = command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| NotifyError::Spawn { command: program, source })?;

        // Reap in the background so the caller never waits on the desktop
        std::thread::spawn(move || {
            let _ = child.wait();
        });

        Ok(())
    }
}

#[cfg(all(unix, not(target_os = "macos")))]
fn platform_command(alert: &Alert) -> Result<(&'static str, Command), NotifyError> {
    let mut command = Command::new("notify-send");
    command
        .arg("--expire-time")
        .arg(alert.timeout.as_millis().to_string())
        .arg(&alert.title)
        .arg(&alert.message);
    Ok(("notify-send", command))
}

#[cfg(target_os = "macos")]
fn platform_command(alert: &Alert) -> Result<(&'static str, Command), NotifyError> {
    let script = format!(
        "display notification {} with title {}",
        applescript_quote(&alert.message),
        applescript_quote(&alert.title),
    );
    let mut command = Command::new("osascript");
    command.arg("-e").arg(script);
    Ok(("osascript", command))
}

#[cfg(windows)]
fn platform_command(alert: &Alert) -> Result<(&'static str, Command), NotifyError> {
    let script = format!(
        "[reflection.assembly]::loadwithpartialname('System.Windows.Forms') | Out-Null; \
         $n = New-Object System.Windows.Forms.NotifyIcon; \
         $n.Icon = [System.Drawing.SystemIcons]::Warning; \
         $n.Visible = $true; \
         $n.ShowBalloonTip({}, '{}', '{}', 'Warning'); \
         Start-Sleep -Milliseconds {}; $n.Dispose()",
        alert.timeout.as_millis(),
        alert.title.replace('\'', "''"),
        alert.message.replace('\'', "''"),
        alert.timeout.as_millis(),
    );
    let mut command = Command::new("powershell");
    command.args(["-NoProfile", "-WindowStyle", "Hidden", "-Command", &script]);
    Ok(("powershell", command))
}

#[cfg(not(any(unix, windows)))]
fn platform_command(_alert: &Alert) -> Result<(&'static str, Command), NotifyError> {
    Err(NotifyError::Unsupported)
}

#[cfg(any(target_os = "macos", test))]
fn applescript_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FailingNotifier {
        calls: AtomicUsize,
    }

    impl Notifier for FailingNotifier {
        fn kind(&self) -> &'static str {
            "failing"
        }

        fn notify(&self, _alert: &Alert) -> Result<(), NotifyError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(NotifyError::Unsupported)
        }
    }

    #[test]
    fn test_dispatch_swallows_failure() {
        let notifier = FailingNotifier { calls: AtomicUsize::new(0) };
        dispatch(&notifier, &Alert::critical("boom"));
        assert_eq!(notifier.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_critical_alert_defaults() {
        let alert = Alert::critical("Malicious connection blocked: c2-server.xyz");
        assert_eq!(alert.title, ALERT_TITLE);
        assert_eq!(alert.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_noop_always_succeeds() {
        assert!(NoopNotifier.notify(&Alert::critical("x")).is_ok());
    }

    #[test]
    fn test_applescript_quote_escapes() {
        assert_eq!(applescript_quote(r#"say "hi""#), r#""say \"hi\"""#);
    }
}
