use crate::severity::LogSeverity;
use crate::time::now;
use once_cell::sync::OnceCell;

static MIN_SEVERITY: OnceCell<LogSeverity> = OnceCell::new();

/// Sets the minimum severity that gets printed. Only the first call has an
/// effect; until then everything from `Info` up is printed.
pub fn init(min_severity: LogSeverity) {
    let _ = MIN_SEVERITY.set(min_severity);
}

pub fn enabled(severity: LogSeverity) -> bool {
    severity >= *MIN_SEVERITY.get().unwrap_or(&LogSeverity::Info)
}

pub fn format_line(msg: &str, severity: LogSeverity, timestamp: &str) -> String {
    format!("[{}] {} {}", severity, timestamp, msg)
}

pub fn log(msg: String, log_severity: LogSeverity) {
    if !enabled(log_severity) {
        return;
    }

    let line = format_line(&msg, log_severity, &now());
    if log_severity.is_diagnostic() {
        eprintln!("{}", line);
    } else {
        println!("{}", line);
    }
}
