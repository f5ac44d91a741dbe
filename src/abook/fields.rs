//! # Contact Fields
//!
//! Every scalar attribute of a contact is a validated value object. The only way
//! to obtain a [`Name`], [`Phone`] or [`Birthday`] is through [`Field::parse`],
//! so an invalid value can never be stored in a [`Record`](crate::model::Record).
//! Assignment goes through the same validation via [`Field::set_value`].
//!
//! | Field      | Rule                                              |
//! |------------|---------------------------------------------------|
//! | `Name`     | non-empty                                         |
//! | `Phone`    | exactly 10 ASCII digits                           |
//! | `Birthday` | `DD.MM.YYYY`, naming a real calendar date         |

use crate::error::ValidationError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const BIRTHDAY_FORMAT: &str = "%d.%m.%Y";
const PHONE_DIGITS: usize = 10;

/// A validated, text-backed contact attribute.
pub trait Field: Sized + fmt::Display {
    /// Validate `value` and build the field.
    fn parse(value: &str) -> Result<Self, ValidationError>;

    /// The stored text.
    fn value(&self) -> &str;

    /// Replace the stored value. On failure the current value is kept.
    fn set_value(&mut self, value: &str) -> Result<(), ValidationError> {
        *self = Self::parse(value)?;
        Ok(())
    }
}

fn require_text(value: &str, what: &'static str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::Empty(what));
    }
    Ok(())
}

/// Display and serde plumbing shared by all fields: they render and serialize as
/// their text, and deserialize through [`Field::parse`].
macro_rules! text_field {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.value())
            }
        }

        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                self.value().serialize(serializer)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                <$ty as Field>::parse(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name(String);

impl Field for Name {
    fn parse(value: &str) -> Result<Self, ValidationError> {
        require_text(value, "Name")?;
        Ok(Self(value.to_string()))
    }

    fn value(&self) -> &str {
        &self.0
    }
}

text_field!(Name);

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    fn is_valid(value: &str) -> bool {
        value.len() == PHONE_DIGITS && value.chars().all(|c| c.is_ascii_digit())
    }
}

impl Field for Phone {
    fn parse(value: &str) -> Result<Self, ValidationError> {
        require_text(value, "Phone")?;
        if !Self::is_valid(value) {
            return Err(ValidationError::InvalidPhone(value.to_string()));
        }
        Ok(Self(value.to_string()))
    }

    fn value(&self) -> &str {
        &self.0
    }
}

text_field!(Phone);

/// A birth date, kept both as entered and as a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    text: String,
    date: NaiveDate,
}

impl Birthday {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// `DD.MM.YYYY` with every position checked; chrono alone would accept
    /// single-digit days and months.
    fn has_shape(value: &str) -> bool {
        let bytes = value.as_bytes();
        bytes.len() == 10
            && bytes.iter().enumerate().all(|(i, b)| match i {
                2 | 5 => *b == b'.',
                _ => b.is_ascii_digit(),
            })
    }
}

impl Field for Birthday {
    fn parse(value: &str) -> Result<Self, ValidationError> {
        require_text(value, "Birthday")?;
        if !Self::has_shape(value) {
            return Err(ValidationError::InvalidBirthday(value.to_string()));
        }
        let date = NaiveDate::parse_from_str(value, BIRTHDAY_FORMAT)
            .map_err(|_| ValidationError::InvalidBirthday(value.to_string()))?;
        Ok(Self {
            text: value.to_string(),
            date,
        })
    }

    fn value(&self) -> &str {
        &self.text
    }
}

text_field!(Birthday);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_rejects_empty() {
        assert_eq!(Name::parse(""), Err(ValidationError::Empty("Name")));
    }

    #[test]
    fn name_is_stored_as_given() {
        let name = Name::parse("  John ").unwrap();
        assert_eq!(name.value(), "  John ");
        assert_eq!(Name::parse("   ").unwrap().value(), "   ");
    }

    #[test]
    fn phone_accepts_ten_digits() {
        for digits in ["1234567890", "0000000000", "5555555555", "0987654321"] {
            let phone = Phone::parse(digits).unwrap();
            assert_eq!(phone.to_string(), digits);
        }
    }

    #[test]
    fn phone_rejects_wrong_length_or_non_digits() {
        for bad in [
            "123456789",
            "12345678901",
            "12345abcde",
            "+123456789",
            "123 456 78",
        ] {
            assert_eq!(
                Phone::parse(bad),
                Err(ValidationError::InvalidPhone(bad.to_string())),
                "{bad} should be rejected"
            );
        }
        assert_eq!(Phone::parse(""), Err(ValidationError::Empty("Phone")));
    }

    #[test]
    fn birthday_parses_day_month_year() {
        let birthday = Birthday::parse("23.03.1996").unwrap();
        assert_eq!(birthday.value(), "23.03.1996");
        assert_eq!(
            birthday.date(),
            NaiveDate::from_ymd_opt(1996, 3, 23).unwrap()
        );
    }

    #[test]
    fn birthday_rejects_bad_format_and_impossible_dates() {
        for bad in [
            "31.02.2020",
            "29.02.2019",
            "1.3.1996",
            "1996-03-23",
            "23/03/1996",
            "23.03.96",
            "23.13.1996",
            "00.01.2000",
            "23.03.19960",
            "aa.bb.cccc",
        ] {
            assert!(
                matches!(
                    Birthday::parse(bad),
                    Err(ValidationError::InvalidBirthday(_))
                ),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn set_value_validates_and_keeps_old_value_on_error() {
        let mut phone = Phone::parse("1234567890").unwrap();
        assert!(phone.set_value("12").is_err());
        assert_eq!(phone.value(), "1234567890");

        phone.set_value("1112223333").unwrap();
        assert_eq!(phone.value(), "1112223333");
    }

    #[test]
    fn serde_goes_through_validation() {
        let phone: Phone = serde_json::from_str("\"7777777777\"").unwrap();
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"7777777777\"");

        let bad: std::result::Result<Birthday, _> = serde_json::from_str("\"31.02.2020\"");
        assert!(bad.is_err());
    }
}
