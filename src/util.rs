// Formatting and console helpers shared by the components

use wasm_bindgen::JsValue;

pub fn format_points(points: f64) -> String {
    // -0.0 would otherwise print as "-0.00"
    let points = if points == 0.0 { 0.0 } else { points };
    format!("{:.2}", points)
}

/// Zero-padded `HH:MM`, minutes truncated. Overtime is shown as `-HH:MM`.
pub fn format_remaining(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let secs = secs.unsigned_abs();
    let h = secs / 3600;
    let m = (secs % 3600) / 60;
    format!("{}{:02}:{:02}", sign, h, m)
}

pub fn clog(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub fn cerr(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn points_two_decimals() {
        assert_eq!(format_points(0.0), "0.00");
        assert_eq!(format_points(-0.0), "0.00");
        assert_eq!(format_points(12.3456), "12.35");
        assert_eq!(format_points(-270.0), "-270.00");
    }

    #[test]
    fn remaining_pads_and_truncates() {
        assert_eq!(format_remaining(28_800), "08:00");
        assert_eq!(format_remaining(28_799), "07:59");
        assert_eq!(format_remaining(59), "00:00");
        assert_eq!(format_remaining(0), "00:00");
        assert_eq!(format_remaining(36 * 3600 + 61), "36:01");
    }

    #[test]
    fn remaining_overtime_is_signed() {
        assert_eq!(format_remaining(-100), "-00:01");
        assert_eq!(format_remaining(-3 * 3600 - 15 * 60), "-03:15");
    }
}
