use std::sync::atomic::{AtomicBool, Ordering};

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use pv_core::{Reason, VerificationResult};

static JSON_MODE: AtomicBool = AtomicBool::new(false);

pub fn set_json_mode(enabled: bool) {
    JSON_MODE.store(enabled, Ordering::Relaxed);
}

pub fn is_json() -> bool {
    JSON_MODE.load(Ordering::Relaxed)
}

pub fn success(msg: &str) {
    if !is_json() {
        eprintln!("{}", msg.green());
    }
}

pub fn error_msg(msg: &str) {
    if !is_json() {
        eprintln!("{}", msg.red());
    }
}

/// Print a verification outcome; timeouts are called out separately from
/// rejected proofs
pub fn verdict(result: &VerificationResult) {
    if is_json() {
        json_output(serde_json::to_value(result).unwrap_or_default());
        return;
    }
    if result.valid {
        success("proof is valid");
        return;
    }
    match result.reason {
        Some(Reason::Timeout) => eprintln!("{}", "verification timed out".yellow()),
        _ => error_msg("proof is invalid"),
    }
    if let Some(reason) = result.reason {
        label("reason", reason.as_str());
    }
    if let Some(message) = &result.message {
        label("message", message);
    }
}

pub fn label(key: &str, val: &str) {
    if !is_json() {
        eprintln!("{} {}", format!("{}:", key).bold(), val);
    }
}

pub fn json_output(value: serde_json::Value) {
    match serde_json::to_string_pretty(&value) {
        Ok(s) => println!("{s}"),
        Err(_) => println!("{value}"),
    }
}

pub fn spinner(msg: &str) -> ProgressBar {
    if is_json() {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏")
        .template("{spinner:.cyan} {msg}")
    {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

pub fn fail_with_hint(error: &str, hint: &str) -> anyhow::Error {
    anyhow::anyhow!("{}\n{} {}", error.red(), "hint:".bold(), hint)
}
