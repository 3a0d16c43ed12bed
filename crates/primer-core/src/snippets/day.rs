//! Day-of-week classifier.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<chrono::Weekday> for Day {
    fn from(weekday: chrono::Weekday) -> Self {
        use chrono::Weekday;

        match weekday {
            Weekday::Mon => Self::Monday,
            Weekday::Tue => Self::Tuesday,
            Weekday::Wed => Self::Wednesday,
            Weekday::Thu => Self::Thursday,
            Weekday::Fri => Self::Friday,
            Weekday::Sat => Self::Saturday,
            Weekday::Sun => Self::Sunday,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayType {
    Weekday,
    Weekend,
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekday => f.write_str("Weekday"),
            Self::Weekend => f.write_str("Weekend"),
        }
    }
}

pub fn get_day_type(day: Day) -> DayType {
    match day {
        Day::Saturday | Day::Sunday => DayType::Weekend,
        _ => DayType::Weekday,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Day::Monday, "Weekday")]
    #[case(Day::Wednesday, "Weekday")]
    #[case(Day::Friday, "Weekday")]
    #[case(Day::Saturday, "Weekend")]
    #[case(Day::Sunday, "Weekend")]
    fn classifies(#[case] day: Day, #[case] expected: &str) {
        assert_eq!(get_day_type(day).to_string(), expected);
    }

    #[test]
    fn converts_from_chrono_weekday() {
        assert_eq!(Day::from(chrono::Weekday::Sat), Day::Saturday);
        assert_eq!(get_day_type(chrono::Weekday::Tue.into()), DayType::Weekday);
    }
}
