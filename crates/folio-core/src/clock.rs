/// Format a 24h wall-clock time as `h:mm AM/PM` (e.g. `10:30 PM`, `12:05 AM`).
pub fn format_clock(hours: u32, minutes: u32) -> String {
    let hours = hours % 24;
    let suffix = if hours < 12 { "AM" } else { "PM" };
    let h12 = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", h12, minutes % 60, suffix)
}
