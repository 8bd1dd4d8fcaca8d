use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime};

use crate::errors::ParseError;

#[derive(Debug)]
pub(crate) struct ISODateModel(NaiveDate);

impl FromStr for ISODateModel {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let d = NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| ParseError::InvalidIsoDate {
            date: s.to_string(),
        })?;
        Ok(ISODateModel(d))
    }
}

impl Into<NaiveDate> for ISODateModel {
    fn into(self) -> NaiveDate {
        self.0
    }
}

/// Wall-clock date and time as entered on the device, without zone; combined
/// with the receipt's time-zone column to produce the UTC timestamp.
#[derive(Debug)]
pub(crate) struct ISODateTimeModel(NaiveDateTime);

impl FromStr for ISODateTimeModel {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let dt = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").map_err(|_| {
            ParseError::InvalidIsoDate {
                date: s.to_string(),
            }
        })?;
        Ok(ISODateTimeModel(dt))
    }
}

impl Into<NaiveDateTime> for ISODateTimeModel {
    fn into(self) -> NaiveDateTime {
        self.0
    }
}
