use std::process::Command;
use std::time::{Duration, Instant};

/// Drives the binary inside a detached tmux session
pub struct TmuxHarness {
    session: String,
}

impl TmuxHarness {
    pub fn new(name: &str) -> Self {
        Self {
            session: format!("paramform-test-{}-{}", name, std::process::id()),
        }
    }

    pub fn start(&self, command: &str) -> Result<(), String> {
        let status = Command::new("tmux")
            .args(["new-session", "-d", "-s", &self.session, "-x", "100", "-y", "30", command])
            .status()
            .map_err(|e| e.to_string())?;
        if status.success() {
            Ok(())
        } else {
            Err(format!("tmux new-session failed: {}", status))
        }
    }

    pub fn send_key(&self, key: &str) -> Result<(), String> {
        self.tmux(&["send-keys", "-t", &self.session, key])
    }

    pub fn send_text(&self, text: &str) -> Result<(), String> {
        self.tmux(&["send-keys", "-t", &self.session, "-l", text])
    }

    pub fn capture_screen(&self) -> Result<String, String> {
        let output = Command::new("tmux")
            .args(["capture-pane", "-p", "-t", &self.session])
            .output()
            .map_err(|e| e.to_string())?;
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Poll the screen until `text` shows up or the timeout passes
    pub fn wait_for_text(&self, text: &str, timeout: Duration) -> Result<(), String> {
        let start = Instant::now();
        loop {
            let screen = self.capture_screen()?;
            if screen.contains(text) {
                return Ok(());
            }
            if start.elapsed() > timeout {
                return Err(format!("'{}' not found on screen:\n{}", text, screen));
            }
            std::thread::sleep(Duration::from_millis(50));
        }
    }

    pub fn is_running(&self) -> bool {
        Command::new("tmux")
            .args(["has-session", "-t", &self.session])
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    pub fn wait_for_exit(&self, timeout: Duration) -> Result<(), String> {
        let start = Instant::now();
        while self.is_running() {
            if start.elapsed() > timeout {
                return Err("app still running".to_string());
            }
            std::thread::sleep(Duration::from_millis(50));
        }
        Ok(())
    }

    fn tmux(&self, args: &[&str]) -> Result<(), String> {
        let status = Command::new("tmux")
            .args(args)
            .status()
            .map_err(|e| e.to_string())?;
        if status.success() {
            Ok(())
        } else {
            Err(format!("tmux {:?} failed: {}", args, status))
        }
    }
}

impl Drop for TmuxHarness {
    fn drop(&mut self) {
        let _ = Command::new("tmux")
            .args(["kill-session", "-t", &self.session])
            .status();
    }
}
