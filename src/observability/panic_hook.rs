//! Custom panic hook for structured crash reports.
//!
//! When savingscalc crashes the report shows the command, the calculation
//! phase and the configuration file that were active, followed by the panic
//! message and location.

use super::context::{get_current_context, CalculationContext};
use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const RULE: &str = "════════════════════════════════════════════════════════════════════════════════";

/// Install the custom panic hook. Call this early in `main`.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        print_crash_report(info);
    }));
}

fn print_crash_report(info: &PanicHookInfo<'_>) {
    let context = get_current_context();

    eprintln!();
    for line in crash_report_lines(&context, &extract_panic_message(info), location(info)) {
        eprintln!("{line}");
    }
}

fn location(info: &PanicHookInfo<'_>) -> Option<String> {
    info.location()
        .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
}

fn crash_report_lines(
    context: &CalculationContext,
    message: &str,
    location: Option<String>,
) -> Vec<String> {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    let mut lines = vec![
        RULE.to_string(),
        "SAVINGSCALC CRASH REPORT".to_string(),
        RULE.to_string(),
        format!("  Version:  {VERSION}"),
        format!("  Platform: {}", std::env::consts::OS),
        format!("  Time:     {timestamp}"),
        String::new(),
        format!("  PANIC: {}", truncate(message, 68)),
    ];

    if let Some(location) = location {
        lines.push(format!("  Location: {}", truncate(&location, 66)));
    }

    lines.push(String::new());
    lines.push("  CONTEXT:".to_string());
    lines.push(format!(
        "    Command: {}",
        context.command.as_deref().unwrap_or("(none)")
    ));
    match context.phase {
        Some(phase) => lines.push(format!("    Phase: {phase}")),
        None => lines.push("    Phase: (not set)".to_string()),
    }
    if let Some(path) = &context.config_file {
        lines.push(format!("    Config: {}", path.display()));
    }

    lines.push(String::new());
    if std::env::var("RUST_BACKTRACE").is_ok() {
        lines.push(std::backtrace::Backtrace::capture().to_string());
    } else {
        lines.push("  Run with RUST_BACKTRACE=1 for stack trace".to_string());
    }
    lines.push(RULE.to_string());
    lines
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
