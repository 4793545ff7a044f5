//! Backward day iteration and day-file naming.

use chrono::{Days, NaiveDate};

/// Iterator over calendar days walking backward from `from` down to `floor`
/// (both inclusive).
#[derive(Debug, Clone)]
pub struct DaySearch {
    next: Option<NaiveDate>,
    floor: NaiveDate,
}

impl DaySearch {
    /// Creates a backward search. Empty if `from < floor`.
    #[must_use]
    pub const fn new(from: NaiveDate, floor: NaiveDate) -> Self {
        Self {
            next: Some(from),
            floor,
        }
    }

    /// Returns the lowest day this search will visit.
    #[must_use]
    pub const fn floor(&self) -> NaiveDate {
        self.floor
    }
}

impl Iterator for DaySearch {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let day = self.next.filter(|day| *day >= self.floor)?;
        self.next = day.checked_sub_days(Days::new(1));
        Some(day)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(day) if day >= self.floor => {
                let days = (day - self.floor).num_days() as usize + 1;
                (days, Some(days))
            }
            _ => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for DaySearch {}

/// Extracts the day from a day-file name such as `20240115.zticks`.
#[must_use]
pub fn day_from_file_name(name: &str) -> Option<NaiveDate> {
    let stem = name.strip_suffix(".zticks")?;
    if stem.len() != 8 || !stem.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    NaiveDate::parse_from_str(stem, "%Y%m%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_search_backward() {
        let days: Vec<_> = DaySearch::new(day(2024, 3, 2), day(2024, 2, 28)).collect();
        assert_eq!(
            days,
            vec![day(2024, 3, 2), day(2024, 3, 1), day(2024, 2, 29), day(2024, 2, 28)]
        );
    }

    #[test]
    fn test_search_len() {
        let search = DaySearch::new(day(2024, 1, 10), day(2024, 1, 1));
        assert_eq!(search.len(), 10);
        assert_eq!(search.floor(), day(2024, 1, 1));
    }

    #[test]
    fn test_search_empty_when_from_below_floor() {
        let mut search = DaySearch::new(day(2024, 1, 1), day(2024, 1, 2));
        assert_eq!(search.len(), 0);
        assert_eq!(search.next(), None);
    }

    #[test]
    fn test_day_from_file_name() {
        assert_eq!(day_from_file_name("20240115.zticks"), Some(day(2024, 1, 15)));
        assert_eq!(day_from_file_name("20241315.zticks"), None);
        assert_eq!(day_from_file_name("2024011.zticks"), None);
        assert_eq!(day_from_file_name("20240115.bi5"), None);
    }
}
