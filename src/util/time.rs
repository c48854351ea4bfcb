//! Message timestamps.
//!
//! Timestamps are milliseconds since the Unix epoch, as `f64` to match
//! `Date.now()`. Labels are the local wall-clock time as `HH:MM`.

#[cfg(test)]
#[path = "time_test.rs"]
mod time_test;

const MS_PER_MINUTE: f64 = 60_000.0;
const MINUTES_PER_DAY: i64 = 24 * 60;

/// Current time in epoch milliseconds.
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |d| d.as_secs_f64() * 1000.0)
    }
}

/// Zero-padded `HH:MM`.
pub fn pad_clock(hours: u32, minutes: u32) -> String {
    format!("{hours:02}:{minutes:02}")
}

/// Format `ms` as `HH:MM`, shifted by `utc_offset_minutes` (east of UTC is
/// positive). Used where no browser clock is available.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_clock(ms: f64, utc_offset_minutes: i32) -> String {
    let minutes = (ms / MS_PER_MINUTE).floor() as i64 + i64::from(utc_offset_minutes);
    let of_day = minutes.rem_euclid(MINUTES_PER_DAY) as u32;
    pad_clock(of_day / 60, of_day % 60)
}

/// Local `HH:MM` label for a message timestamp. Native builds use UTC.
pub fn clock_label(ms: f64) -> String {
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(ms));
        pad_clock(date.get_hours(), date.get_minutes())
    }
    #[cfg(not(feature = "csr"))]
    {
        format_clock(ms, 0)
    }
}
