//! Wall-clock reads for rendered dates.

/// Current calendar year (UTC natively, local time in the browser).
pub fn current_year() -> i32 {
    #[cfg(feature = "csr")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        time::OffsetDateTime::now_utc().year()
    }
}
