use crate::error::{AbookError, Result};
use crate::fields::{Birthday, Field, Name, Phone, BIRTHDAY_FORMAT};
use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

pub const PHONE_SEPARATOR: &str = "; ";

/// One contact: a name, an ordered list of phones and an optional birthday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    name: Name,
    phones: Vec<Phone>,
    birthday: Option<Birthday>,
}

impl Record {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            name: Name::parse(name)?,
            phones: Vec::new(),
            birthday: None,
        })
    }

    pub fn with_birthday(name: &str, birthday: &str) -> Result<Self> {
        let mut record = Self::new(name)?;
        record.set_birthday(birthday)?;
        Ok(record)
    }

    pub(crate) fn from_parts(name: Name, phones: Vec<Phone>, birthday: Option<Birthday>) -> Self {
        Self {
            name,
            phones,
            birthday,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn set_birthday(&mut self, birthday: &str) -> Result<()> {
        self.birthday = Some(Birthday::parse(birthday)?);
        Ok(())
    }

    /// Appends a phone. Duplicates are kept.
    pub fn add_phone(&mut self, number: &str) -> Result<()> {
        self.phones.push(Phone::parse(number)?);
        Ok(())
    }

    /// Removes the first phone equal to `number`. Returns whether one was removed.
    pub fn remove_phone(&mut self, number: &str) -> bool {
        match self.position_of(number) {
            Some(pos) => {
                self.phones.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Replaces the first phone equal to `old` with `new`.
    ///
    /// Fails with [`AbookError::PhoneNotFound`] when no phone matches anywhere in
    /// the list, or with a validation error when `new` is not a valid phone. The
    /// phone list is untouched on failure.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let pos = self
            .position_of(old)
            .ok_or_else(|| AbookError::PhoneNotFound {
                contact: self.name.to_string(),
                phone: old.to_string(),
            })?;
        self.phones[pos] = Phone::parse(new)?;
        Ok(())
    }

    pub fn find_phone(&self, number: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.value() == number)
    }

    /// Days from the local date today until the next birthday.
    pub fn days_to_birthday(&self) -> Result<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Days from `today` until the next occurrence of the birthday's month and
    /// day. Zero when the birthday is `today`. A 29 February birthday is
    /// celebrated on 28 February in non-leap years.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Result<i64> {
        let birthday = self
            .birthday
            .as_ref()
            .ok_or_else(|| AbookError::NoBirthday(self.name.to_string()))?;

        let this_year = occurrence_in(birthday.date(), today.year())?;
        let next = if this_year >= today {
            this_year
        } else {
            occurrence_in(birthday.date(), today.year() + 1)?
        };
        Ok((next - today).num_days())
    }

    /// Phones joined with `"; "`, the form used in listings, search and the
    /// contacts file.
    pub fn phones_text(&self) -> String {
        self.phones
            .iter()
            .map(Phone::value)
            .collect::<Vec<_>>()
            .join(PHONE_SEPARATOR)
    }

    fn position_of(&self, number: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.value() == number)
    }
}

/// The birthday's month and day in `year`. Fails only when `year` is outside
/// the range chrono can represent.
fn occurrence_in(date: NaiveDate, year: i32) -> Result<NaiveDate> {
    date.with_year(year)
        .or_else(|| NaiveDate::from_ymd_opt(year, date.month(), date.day() - 1))
        .ok_or_else(|| AbookError::BirthdayOutOfRange {
            birthday: date.format(BIRTHDAY_FORMAT).to_string(),
            year,
        })
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Contact name: {}, phones: {}, birthday: {}",
            self.name,
            self.phones_text(),
            self.birthday.as_ref().map(Birthday::value).unwrap_or("-")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use chrono::Duration;

    fn john() -> Record {
        let mut record = Record::new("John").unwrap();
        record.add_phone("1234567890").unwrap();
        record.add_phone("5555555555").unwrap();
        record
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn add_phone_validates_and_keeps_duplicates() {
        let mut record = john();
        record.add_phone("1234567890").unwrap();
        assert_eq!(record.phones().len(), 3);

        let err = record.add_phone("12345").unwrap_err();
        assert!(matches!(
            err,
            AbookError::Validation(ValidationError::InvalidPhone(_))
        ));
        assert_eq!(record.phones().len(), 3);
    }

    #[test]
    fn remove_phone_removes_first_match_only() {
        let mut record = john();
        record.add_phone("1234567890").unwrap();

        assert!(record.remove_phone("1234567890"));
        assert_eq!(record.phones_text(), "5555555555; 1234567890");
    }

    #[test]
    fn remove_missing_phone_is_noop() {
        let mut record = john();
        assert!(!record.remove_phone("0000000000"));
        assert_eq!(record.phones().len(), 2);
    }

    #[test]
    fn edit_phone_replaces_match() {
        let mut record = john();
        record.edit_phone("1234567890", "1112223333").unwrap();

        assert!(record.find_phone("1112223333").is_some());
        assert!(record.find_phone("1234567890").is_none());
        assert_eq!(record.phones_text(), "1112223333; 5555555555");
    }

    #[test]
    fn edit_phone_finds_match_after_non_matching_entries() {
        let mut record = john();
        record.edit_phone("5555555555", "9998887777").unwrap();
        assert_eq!(record.phones_text(), "1234567890; 9998887777");
    }

    #[test]
    fn edit_missing_phone_fails_and_leaves_phones_unchanged() {
        let mut record = john();
        let err = record.edit_phone("0000000000", "1112223333").unwrap_err();

        match err {
            AbookError::PhoneNotFound { contact, phone } => {
                assert_eq!(contact, "John");
                assert_eq!(phone, "0000000000");
            }
            other => panic!("Expected PhoneNotFound, got {:?}", other),
        }
        assert_eq!(record.phones_text(), "1234567890; 5555555555");
    }

    #[test]
    fn edit_phone_with_invalid_replacement_leaves_phones_unchanged() {
        let mut record = john();
        assert!(record.edit_phone("1234567890", "abc").is_err());
        assert_eq!(record.phones_text(), "1234567890; 5555555555");
    }

    #[test]
    fn find_phone_returns_none_when_absent() {
        let record = john();
        let phone = record.find_phone("5555555555").unwrap();
        assert_eq!(phone.value(), "5555555555");
        assert!(record.find_phone("7777777777").is_none());
    }

    #[test]
    fn days_to_birthday_later_this_year() {
        let record = Record::with_birthday("Vicky", "23.03.1996").unwrap();
        assert_eq!(record.days_to_birthday_from(ymd(2025, 3, 20)).unwrap(), 3);
    }

    #[test]
    fn days_to_birthday_wraps_to_next_year() {
        let record = Record::with_birthday("Vicky", "23.03.1996").unwrap();
        // 24.03.2025 -> 23.03.2026
        assert_eq!(record.days_to_birthday_from(ymd(2025, 3, 24)).unwrap(), 364);
        // 24.03.2023 -> 23.03.2024 crosses 29.02.2024
        assert_eq!(record.days_to_birthday_from(ymd(2023, 3, 24)).unwrap(), 365);
    }

    #[test]
    fn days_to_birthday_is_zero_on_the_day() {
        let record = Record::with_birthday("Vicky", "23.03.1996").unwrap();
        assert_eq!(record.days_to_birthday_from(ymd(2025, 3, 23)).unwrap(), 0);
    }

    #[test]
    fn days_to_birthday_against_local_today() {
        let today = Local::now().date_naive();
        let text = today.format(BIRTHDAY_FORMAT).to_string();
        let record = Record::with_birthday("Today", &text).unwrap();
        assert_eq!(record.days_to_birthday().unwrap(), 0);

        let yesterday = (today - Duration::days(1))
            .format(BIRTHDAY_FORMAT)
            .to_string();
        let record = Record::with_birthday("Yesterday", &yesterday).unwrap();
        let days = record.days_to_birthday().unwrap();
        assert!(days == 364 || days == 365, "got {days}");
    }

    #[test]
    fn leap_day_birthday_falls_on_feb_28_in_common_years() {
        let record = Record::with_birthday("Leap", "29.02.2000").unwrap();
        assert_eq!(record.days_to_birthday_from(ymd(2025, 2, 27)).unwrap(), 1);
        assert_eq!(record.days_to_birthday_from(ymd(2024, 2, 27)).unwrap(), 2);
    }

    #[test]
    fn year_beyond_calendar_range_is_an_error() {
        let date = ymd(1996, 3, 23);
        assert_eq!(occurrence_in(date, 2026).unwrap(), ymd(2026, 3, 23));

        match occurrence_in(date, i32::MAX) {
            Err(AbookError::BirthdayOutOfRange { birthday, year }) => {
                assert_eq!(birthday, "23.03.1996");
                assert_eq!(year, i32::MAX);
            }
            other => panic!("Expected BirthdayOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn days_to_birthday_without_birthday_fails() {
        let record = john();
        assert!(matches!(
            record.days_to_birthday_from(ymd(2025, 1, 1)),
            Err(AbookError::NoBirthday(name)) if name == "John"
        ));
    }

    #[test]
    fn display_renders_all_fields() {
        let mut record = Record::with_birthday("Vicky", "23.03.1996").unwrap();
        record.add_phone("7777777777").unwrap();
        assert_eq!(
            record.to_string(),
            "Contact name: Vicky, phones: 7777777777, birthday: 23.03.1996"
        );
        assert_eq!(
            john().to_string(),
            "Contact name: John, phones: 1234567890; 5555555555, birthday: -"
        );
    }
}
