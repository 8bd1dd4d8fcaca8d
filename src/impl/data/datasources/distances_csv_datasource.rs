use std::str::FromStr as _;

use crate::{
    data::models::{amount_model::AmountModel, iso_date_model::ISODateModel},
    domain::entities::distance::Distance,
    errors::ParseError,
};

/// Positional columns: location, distance, rate, date, comment.
pub(crate) trait DistancesCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<Distance>, ParseError>;
}

pub(crate) struct DistancesCsvDatasourceImpl;

impl DistancesCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl DistancesCsvDatasource for DistancesCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<Distance>, ParseError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .map(|r| {
                r.map_err(ParseError::from).and_then(|r| {
                    // Extract from CSV record.
                    let raw_location = r.get(0).unwrap_or("");
                    let raw_distance = r.get(1).unwrap_or("0");
                    let raw_rate = r.get(2).unwrap_or("0");
                    let raw_date = r.get(3).unwrap_or("");
                    let raw_comment = r.get(4).unwrap_or("");

                    // Parse.
                    let distance: AmountModel = AmountModel::from_str(raw_distance)?;
                    let rate: AmountModel = AmountModel::from_str(raw_rate)?;
                    let date: ISODateModel = ISODateModel::from_str(raw_date)?;

                    // Build.
                    Ok(Distance {
                        location: raw_location.to_string(),
                        distance: distance.into(),
                        rate: rate.into(),
                        date: date.into(),
                        comment: match raw_comment {
                            "" => None,
                            comment => Some(comment.to_string()),
                        },
                    })
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "location,distance,rate,date,comment\n";

    #[test]
    fn test_parse_row() {
        let csv = format!("{HEADER}Airport,12.5,0.30,2016-11-02,shuttle\n");
        let distances = DistancesCsvDatasourceImpl::new().from_string(&csv).unwrap();
        assert_eq!(distances.len(), 1);

        let distance = &distances[0];
        assert_eq!(distance.location, "Airport");
        assert_eq!(distance.distance, "12.5".parse().unwrap());
        assert_eq!(distance.rate, "0.30".parse().unwrap());
        assert_eq!(
            distance.date,
            chrono::NaiveDate::from_ymd_opt(2016, 11, 2).unwrap()
        );
        assert_eq!(distance.comment.as_deref(), Some("shuttle"));
    }

    #[test]
    fn test_parse_empty_input() {
        let distances = DistancesCsvDatasourceImpl::new().from_string("").unwrap();
        assert!(distances.is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_date() {
        let csv = format!("{HEADER}Airport,12.5,0.30,11/02/2016,\n");
        assert!(DistancesCsvDatasourceImpl::new().from_string(&csv).is_err());
    }
}
