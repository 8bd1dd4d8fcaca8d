use std::str::FromStr;

use chrono_tz::Tz;

use crate::errors::ParseError;

/// IANA zone name, e.g. "America/New_York".
#[derive(Debug)]
pub(crate) struct TimeZoneModel(pub Tz);

impl FromStr for TimeZoneModel {
    type Err = ParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tz = s.trim().parse::<Tz>().map_err(|_| ParseError::InvalidTimeZone {
            zone: s.to_string(),
        })?;
        Ok(TimeZoneModel(tz))
    }
}

impl Into<Tz> for TimeZoneModel {
    fn into(self) -> Tz {
        self.0
    }
}
