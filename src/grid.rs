//! Month and week geometry for the calendar views. All weeks start on Sunday.

use chrono::{Datelike, Duration, Local, NaiveDate};
use std::ops::RangeInclusive;

pub const DAYS_IN_WEEK: usize = 7;
/// Rows in a month grid, enough for any month.
pub const GRID_ROWS: usize = 6;

/// Day names indexed by Sunday-first column.
pub const DAY_NAMES: [&str; DAYS_IN_WEEK] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

pub fn day_name(column: usize) -> &'static str {
    DAY_NAMES[column % DAYS_IN_WEEK]
}

/// One-letter column header (`s m t w t f s`).
pub fn day_initial(column: usize) -> &'static str {
    &day_name(column)[..1]
}

/// How many years either side of the current one an event may be entered for.
pub const ENTRY_YEAR_SPAN: i32 = 5;

/// Years offered by the event entry form: `center - span ..= center + span`.
pub fn year_options(center: i32, span: i32) -> RangeInclusive<i32> {
    center - span..=center + span
}

/// A calendar month, represented by its first day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// `None` when `month` is not 1..=12 or the year is outside chrono's range.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first| YearMonth { first })
    }

    pub fn containing(date: NaiveDate) -> Self {
        YearMonth {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Previous month; January steps back to December of the prior year.
    pub fn prev(self) -> Self {
        let (year, month) = match self.month() {
            1 => (self.year() - 1, 12),
            m => (self.year(), m - 1),
        };
        Self::new(year, month).unwrap_or(self)
    }

    /// Next month; December steps forward to January of the next year.
    pub fn next(self) -> Self {
        let (year, month) = match self.month() {
            12 => (self.year() + 1, 1),
            m => (self.year(), m + 1),
        };
        Self::new(year, month).unwrap_or(self)
    }

    /// Every date in the month, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let month = self.month();
        self.first.iter_days().take_while(move |d| d.month() == month)
    }

    pub fn day_count(&self) -> u32 {
        self.days().count() as u32
    }

    /// Sunday-first column of the 1st, i.e. the number of leading blanks.
    pub fn first_column(&self) -> usize {
        self.first.weekday().num_days_from_sunday() as usize
    }

    /// e.g. `january 2024`
    pub fn title(&self) -> String {
        self.first.format("%B %Y").to_string().to_lowercase()
    }

    pub fn grid(&self) -> MonthGrid {
        let mut cells = [[None; DAYS_IN_WEEK]; GRID_ROWS];
        let offset = self.first_column();
        for (i, date) in self.days().enumerate() {
            let slot = offset + i;
            cells[slot / DAYS_IN_WEEK][slot % DAYS_IN_WEEK] = Some(date.day());
        }
        MonthGrid { month: *self, cells }
    }
}

/// Six Sunday-first weeks of day numbers; cells outside the month are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: YearMonth,
    cells: [[Option<u32>; DAYS_IN_WEEK]; GRID_ROWS],
}

impl MonthGrid {
    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn rows(&self) -> &[[Option<u32>; DAYS_IN_WEEK]; GRID_ROWS] {
        &self.cells
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<u32> {
        self.cells.get(row)?.get(column).copied().flatten()
    }

    /// The date behind a cell, for jumping the week view to it.
    pub fn date_at(&self, row: usize, column: usize) -> Option<NaiveDate> {
        let day = self.cell(row, column)?;
        self.month.first.with_day(day)
    }

    pub fn filled_cells(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }
}

/// A Sunday-to-Saturday week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Week {
    sunday: NaiveDate,
}

impl Week {
    pub fn containing(date: NaiveDate) -> Self {
        let back = date.weekday().number_from_monday() % DAYS_IN_WEEK as u32;
        Week {
            sunday: date - Duration::days(i64::from(back)),
        }
    }

    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn sunday(&self) -> NaiveDate {
        self.sunday
    }

    pub fn days(&self) -> [NaiveDate; DAYS_IN_WEEK] {
        std::array::from_fn(|i| self.sunday + Duration::days(i as i64))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        Week::containing(date) == *self
    }

    pub fn prev(self) -> Self {
        self.shift(-1)
    }

    pub fn next(self) -> Self {
        self.shift(1)
    }

    pub fn shift(self, weeks: i64) -> Self {
        Week {
            sunday: self.sunday + Duration::weeks(weeks),
        }
    }

    /// e.g. `week of 01/14, 2024`
    pub fn label(&self) -> String {
        format!("week of {}", self.sunday.format("%m/%d, %Y"))
    }

    /// Column heading such as `wednesday 17`.
    pub fn day_label(&self, column: usize) -> String {
        let date = self.sunday + Duration::days((column % DAYS_IN_WEEK) as i64);
        format!("{} {:02}", day_name(column), date.day())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn ym(y: i32, m: u32) -> YearMonth {
        YearMonth::new(y, m).unwrap()
    }

    #[test]
    fn every_month_fills_its_length() {
        for year in [1900, 1999, 2000, 2023, 2024, 2100] {
            for month in 1..=12 {
                let month = ym(year, month);
                let grid = month.grid();
                assert_eq!(grid.rows().len(), GRID_ROWS);
                assert!(grid.rows().iter().all(|r| r.len() == DAYS_IN_WEEK));
                assert_eq!(grid.filled_cells() as u32, month.day_count());
                assert!((28..=31).contains(&month.day_count()));
            }
        }
    }

    #[test]
    fn leap_februaries() {
        assert_eq!(ym(2000, 2).grid().filled_cells(), 29);
        assert_eq!(ym(1900, 2).grid().filled_cells(), 28);
        assert_eq!(ym(2024, 2).day_count(), 29);
        assert_eq!(ym(2023, 2).day_count(), 28);
    }

    #[test]
    fn january_2024_layout() {
        // Jan 1 2024 was a Monday.
        let grid = ym(2024, 1).grid();
        assert_eq!(grid.cell(0, 0), None);
        assert_eq!(grid.cell(0, 1), Some(1));
        assert_eq!(grid.cell(0, 6), Some(6));
        assert_eq!(grid.cell(4, 3), Some(31));
        assert_eq!(grid.cell(4, 4), None);
        assert!(grid.rows()[5].iter().all(Option::is_none));
        assert_eq!(grid.date_at(2, 3), Some(d(2024, 1, 17)));
        assert_eq!(grid.date_at(0, 0), None);
        assert_eq!(grid.cell(9, 9), None);
    }

    #[test]
    fn a_month_can_need_all_six_rows() {
        // Sep 1 2024 was a Sunday, Mar 1 2025 a Saturday.
        assert_eq!(ym(2024, 9).first_column(), 0);
        let grid = ym(2025, 3).grid();
        assert_eq!(grid.cell(0, 6), Some(1));
        assert_eq!(grid.cell(5, 1), Some(31));
    }

    #[test]
    fn month_navigation_wraps_years() {
        assert_eq!(ym(2024, 1).prev(), ym(2023, 12));
        assert_eq!(ym(2023, 12).next(), ym(2024, 1));
        assert_eq!(ym(2024, 5).next(), ym(2024, 6));
        assert_eq!(ym(2024, 5).prev(), ym(2024, 4));
        assert!(YearMonth::new(2024, 13).is_none());
        assert!(YearMonth::new(2024, 0).is_none());
    }

    #[test]
    fn titles() {
        assert_eq!(ym(2024, 1).title(), "january 2024");
        assert_eq!(YearMonth::containing(d(2023, 9, 30)), ym(2023, 9));
    }

    #[test]
    fn weeks_start_on_sunday() {
        let week = Week::containing(d(2024, 1, 17));
        assert_eq!(week.sunday(), d(2024, 1, 14));
        assert_eq!(Week::containing(d(2024, 1, 14)).sunday(), d(2024, 1, 14));
        assert_eq!(Week::containing(d(2024, 1, 20)).sunday(), d(2024, 1, 14));
        assert_eq!(Week::containing(d(2024, 1, 1)).sunday(), d(2023, 12, 31));

        let days = week.days();
        assert_eq!(days[0], d(2024, 1, 14));
        assert_eq!(days[6], d(2024, 1, 20));
        assert!(week.contains(d(2024, 1, 20)));
        assert!(!week.contains(d(2024, 1, 21)));
    }

    #[test]
    fn week_navigation_and_labels() {
        let week = Week::containing(d(2024, 1, 17));
        assert_eq!(week.next().sunday(), d(2024, 1, 21));
        assert_eq!(week.prev().sunday(), d(2024, 1, 7));
        assert_eq!(week.label(), "week of 01/14, 2024");
        assert_eq!(week.day_label(3), "wednesday 17");
        assert_eq!(week.day_label(0), "sunday 14");
    }

    #[test]
    fn day_names_are_sunday_first() {
        assert_eq!(day_name(0), "sunday");
        assert_eq!(day_name(6), "saturday");
        let initials: Vec<_> = (0..7).map(day_initial).collect();
        assert_eq!(initials, ["s", "m", "t", "w", "t", "f", "s"]);
        let years = year_options(2024, ENTRY_YEAR_SPAN);
        assert_eq!(years.clone().count(), 11);
        assert!(years.contains(&2019) && years.contains(&2029));
        assert!(!years.contains(&2030));
    }
}
