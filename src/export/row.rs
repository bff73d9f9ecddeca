//! Splitting record strings into table/CSV rows.

/// Splits a `"<TYPE> <data>"` record string on its first space.
///
/// Returns `None` for strings without a space; such strings are dropped from
/// every table and CSV file without raising an error.
pub fn split_record(record: &str) -> Option<(&str, &str)> {
    record.split_once(' ')
}

/// Two-column rows for every splittable record string, in input order.
pub fn record_rows<S: AsRef<str>>(records: &[S]) -> Vec<(&str, &str)> {
    records
        .iter()
        .filter_map(|record| {
            let row = split_record(record.as_ref());
            if row.is_none() {
                log::debug!("Dropping malformed record string {:?}", record.as_ref());
            }
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_record_on_first_space_only() {
        assert_eq!(
            split_record("MX mail.example.com. 10"),
            Some(("MX", "mail.example.com. 10"))
        );
        assert_eq!(
            split_record("TXT \"hello world\""),
            Some(("TXT", "\"hello world\""))
        );
        assert_eq!(split_record("A 93.184.216.34"), Some(("A", "93.184.216.34")));
    }

    #[test]
    fn test_split_record_without_space() {
        assert_eq!(split_record("NODATA"), None);
        assert_eq!(split_record(""), None);
    }

    #[test]
    fn test_split_record_trailing_space_gives_empty_value() {
        assert_eq!(split_record("CNAME "), Some(("CNAME", "")));
    }

    #[test]
    fn test_record_rows_drops_malformed() {
        let records = vec![
            "A 93.184.216.34".to_string(),
            "NODATA".to_string(),
            "NS a.iana-servers.net.".to_string(),
        ];
        assert_eq!(
            record_rows(&records),
            vec![("A", "93.184.216.34"), ("NS", "a.iana-servers.net.")]
        );
    }
}
