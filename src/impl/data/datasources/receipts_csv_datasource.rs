use std::str::FromStr as _;

use chrono::{TimeZone as _, Utc};
use chrono_tz::Tz;
use rust_decimal::Decimal;

use crate::{
    data::models::{
        amount_model::AmountModel, currency_model::CurrencyModel,
        iso_date_model::ISODateTimeModel, time_zone_model::TimeZoneModel,
    },
    domain::entities::{
        category::Category, payment_method::PaymentMethod, price::Price, receipt::Receipt,
    },
    errors::ParseError,
};

/// Positional columns: name, local date-time, time zone, category name,
/// category code, payment method (empty = none), amount, currency code,
/// exchange rate into the trip currency (empty = unknown), tax, secondary
/// tax, reimbursable flag, comment, image path.
pub(crate) trait ReceiptsCsvDatasource {
    fn from_string(&self, s: &str) -> Result<Vec<Receipt>, ParseError>;
}

pub(crate) struct ReceiptsCsvDatasourceImpl;

impl ReceiptsCsvDatasourceImpl {
    pub(crate) fn new() -> Self {
        Self
    }
}

impl ReceiptsCsvDatasource for ReceiptsCsvDatasourceImpl {
    fn from_string(&self, s: &str) -> Result<Vec<Receipt>, ParseError> {
        csv::Reader::from_reader(s.as_bytes())
            .records()
            .enumerate()
            .map(|(i, r)| {
                r.map_err(ParseError::from).and_then(|r| {
                    // Extract from CSV record.
                    let raw_name = r.get(0).unwrap_or("");
                    let raw_date_time = r.get(1).unwrap_or("");
                    let raw_time_zone = r.get(2).unwrap_or("");
                    let raw_category_name = r.get(3).unwrap_or("");
                    let raw_category_code = r.get(4).unwrap_or("");
                    let raw_payment_method = r.get(5).unwrap_or("");
                    let raw_amount = r.get(6).unwrap_or("0");
                    let raw_currency = r.get(7).unwrap_or("");
                    let raw_exchange_rate = r.get(8).unwrap_or("");
                    let raw_tax = r.get(9).unwrap_or("0");
                    let raw_tax2 = r.get(10).unwrap_or("0");
                    let raw_reimbursable = r.get(11).unwrap_or("");
                    let raw_comment = r.get(12).unwrap_or("");
                    let raw_image_path = r.get(13).unwrap_or("");

                    // Parse.
                    let date_time: ISODateTimeModel = ISODateTimeModel::from_str(raw_date_time)?;
                    let time_zone: Tz = TimeZoneModel::from_str(raw_time_zone)?.into();
                    let payment_method = match raw_payment_method {
                        "" => None,
                        name => Some(PaymentMethod::new(name)),
                    };
                    let amount: AmountModel = AmountModel::from_str(raw_amount)?;
                    let currency = CurrencyModel::from_str(raw_currency)?.into();
                    let exchange_rate: Option<Decimal> = match raw_exchange_rate {
                        "" => None,
                        value => Some(value.parse::<Decimal>().map_err(|_| {
                            ParseError::InvalidExchangeRate {
                                value: value.to_string(),
                            }
                        })?),
                    };
                    let tax: AmountModel = AmountModel::from_str(raw_tax)?;
                    let tax2: AmountModel = AmountModel::from_str(raw_tax2)?;
                    let reimbursable = match raw_reimbursable {
                        "true" => true,
                        "false" => false,
                        other => {
                            return Err(ParseError::InvalidCsvContent {
                                details: format!(
                                    "row {}: invalid reimbursable flag '{}'",
                                    i + 1,
                                    other
                                ),
                            })
                        }
                    };
                    let timestamp = time_zone
                        .from_local_datetime(&date_time.into())
                        .earliest()
                        .ok_or_else(|| ParseError::InvalidCsvContent {
                            details: format!(
                                "row {}: local time '{}' does not exist in zone '{}'",
                                i + 1,
                                raw_date_time,
                                raw_time_zone
                            ),
                        })?
                        .with_timezone(&Utc);

                    let price = |model: AmountModel| Price {
                        amount: model.into(),
                        currency,
                        exchange_rate,
                    };

                    // Build.
                    Ok(Receipt {
                        index: i as u32 + 1,
                        name: raw_name.to_string(),
                        timestamp,
                        time_zone,
                        category: Category::new(raw_category_name, raw_category_code),
                        payment_method,
                        price: price(amount),
                        tax: price(tax),
                        tax2: price(tax2),
                        reimbursable,
                        comment: match raw_comment {
                            "" => None,
                            comment => Some(comment.to_string()),
                        },
                        image_path: match raw_image_path {
                            "" => None,
                            path => Some(path.to_string()),
                        },
                    })
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use iso_currency::Currency;

    use super::*;

    const HEADER: &str = "name,date_time,time_zone,category_name,category_code,payment_method,amount,currency,exchange_rate,tax,tax2,reimbursable,comment,image_path\n";

    #[test]
    fn test_parse_full_row() {
        let csv = format!(
            "{HEADER}Lunch,2016-11-01T12:30:00,America/New_York,Meals,MEAL,Cash,\"1,024.50\",USD,,1.00,0.50,true,team lunch,img/1.jpg\n"
        );
        let receipts = ReceiptsCsvDatasourceImpl::new().from_string(&csv).unwrap();
        assert_eq!(receipts.len(), 1);

        let receipt = &receipts[0];
        assert_eq!(receipt.index, 1);
        assert_eq!(receipt.name, "Lunch");
        assert_eq!(receipt.category, Category::new("Meals", "MEAL"));
        assert_eq!(receipt.payment_method, Some(PaymentMethod::new("Cash")));
        assert_eq!(receipt.price.amount, "1024.50".parse().unwrap());
        assert_eq!(receipt.price.currency, Currency::USD);
        assert_eq!(receipt.price.exchange_rate, None);
        assert_eq!(receipt.tax.amount, "1.00".parse().unwrap());
        assert_eq!(receipt.tax2.amount, "0.50".parse().unwrap());
        assert!(receipt.reimbursable);
        assert_eq!(receipt.comment.as_deref(), Some("team lunch"));
        assert_eq!(receipt.image_path.as_deref(), Some("img/1.jpg"));
        assert_eq!(
            receipt.local_date(),
            chrono::NaiveDate::from_ymd_opt(2016, 11, 1).unwrap()
        );
    }

    #[test]
    fn test_parse_optional_fields_empty() {
        let csv = format!(
            "{HEADER}Taxi,2016-11-02T08:00:00,Europe/Berlin,Travel,TRVL,,20.00,EUR,1.10,0,0,false,,\n"
        );
        let receipts = ReceiptsCsvDatasourceImpl::new().from_string(&csv).unwrap();

        let receipt = &receipts[0];
        assert_eq!(receipt.payment_method, None);
        assert_eq!(receipt.price.exchange_rate, Some("1.10".parse().unwrap()));
        assert_eq!(receipt.comment, None);
        assert_eq!(receipt.image_path, None);
        assert!(!receipt.reimbursable);
    }

    #[test]
    fn test_parse_empty_input() {
        let receipts = ReceiptsCsvDatasourceImpl::new().from_string(HEADER).unwrap();
        assert!(receipts.is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_flag() {
        let csv = format!(
            "{HEADER}Taxi,2016-11-02T08:00:00,Europe/Berlin,Travel,TRVL,,20.00,EUR,,0,0,maybe,,\n"
        );
        let err = ReceiptsCsvDatasourceImpl::new()
            .from_string(&csv)
            .unwrap_err();
        assert!(matches!(err, ParseError::InvalidCsvContent { .. }));
    }

    #[test]
    fn test_parse_rejects_bad_currency() {
        let csv = format!(
            "{HEADER}Taxi,2016-11-02T08:00:00,Europe/Berlin,Travel,TRVL,,20.00,EU,,0,0,true,,\n"
        );
        let err = ReceiptsCsvDatasourceImpl::new()
            .from_string(&csv)
            .unwrap_err();
        assert!(matches!(err, ParseError::InvalidIsoCurrencyCode { .. }));
    }
}
