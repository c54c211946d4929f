pub const FALLBACK_DATE: &str = "1970-01-01";

/// `YYYYMMDD` to `YYYY-MM-DD`. Only the shape is checked, not the calendar.
pub fn ymd_to_iso(ymd: &str) -> String {
    if ymd.len() == 8 && ymd.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}-{}-{}", &ymd[0..4], &ymd[4..6], &ymd[6..8])
    } else {
        FALLBACK_DATE.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::ymd_to_iso;

    #[test]
    fn formats_eight_digit_stamps() {
        assert_eq!(ymd_to_iso("20240115"), "2024-01-15");
        assert_eq!(ymd_to_iso("20241399"), "2024-13-99");
    }

    #[test]
    fn malformed_stamps_fall_back_to_epoch() {
        assert_eq!(ymd_to_iso("abc"), "1970-01-01");
        assert_eq!(ymd_to_iso("2024011"), "1970-01-01");
        assert_eq!(ymd_to_iso("202401150"), "1970-01-01");
        assert_eq!(ymd_to_iso("2024O115"), "1970-01-01");
        assert_eq!(ymd_to_iso(""), "1970-01-01");
    }
}
