/// Format a duration in whole seconds as "HH:MM:SS"
///
/// Minutes and seconds are always two digits; hours are padded to at
/// least two digits but grow wider when needed (360000 seconds formats
/// as "100:00:00").
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    format!("{hours:02}:{minutes:02}:{secs:02}")
}
