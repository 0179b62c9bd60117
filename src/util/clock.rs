//! Wall-clock timestamps for outgoing messages.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Zero-padded 24h `HH:MM`.
#[must_use]
pub fn format_hh_mm(hours: u32, minutes: u32) -> String {
    format!("{:02}:{:02}", hours % 24, minutes % 60)
}

/// Current time of day, hours and minutes only.
///
/// In the browser this is the user's locale rendering with two-digit hour
/// and minute (`09:30`, `09:30 AM`, ...). Natively it falls back to 24h
/// [`format_hh_mm`] in UTC, where no locale or time zone database is
/// available without extra dependencies.
#[must_use]
pub fn now_hh_mm() -> String {
    #[cfg(feature = "csr")]
    {
        locale_time(&js_sys::Date::new_0())
    }
    #[cfg(not(feature = "csr"))]
    {
        let secs = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_secs());
        let of_day = secs % 86_400;
        let hours = u32::try_from(of_day / 3600).unwrap_or_default();
        let minutes = u32::try_from((of_day % 3600) / 60).unwrap_or_default();
        format_hh_mm(hours, minutes)
    }
}

#[cfg(feature = "csr")]
fn locale_time(date: &js_sys::Date) -> String {
    use wasm_bindgen::JsValue;

    let options = js_sys::Object::new();
    for field in ["hour", "minute"] {
        if let Err(err) = js_sys::Reflect::set(&options, &JsValue::from_str(field), &JsValue::from_str("2-digit")) {
            log::warn!("time format options unavailable, using 24h: {err:?}");
            return format_hh_mm(date.get_hours(), date.get_minutes());
        }
    }
    String::from(date.to_locale_time_string_with_options("default", &options))
}
