use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};

use crate::domain::entities::{
    category::Category,
    payment_method::PaymentMethod,
    price::PriceTotal,
    receipt::Receipt,
    report_config::ReportConfig,
    summaries::{
        CategoryGroup, CategorySum, DaySum, GroupingSummaries, PaymentMethodSum, ReimbursementSum,
    },
    trip::Trip,
};

/// The aggregation engine: buckets a trip's receipts by category, payment
/// method, reimbursement status, and calendar day, and reduces each bucket
/// into sums against the trip's base currency.
///
/// Pure and synchronous. When the configuration asks for reimbursable-only
/// output, non-reimbursable receipts are dropped once at construction, before
/// any bucketing, so every operation sees the same filtered set. An empty
/// receipt set is a valid input and yields empty groupings and zero totals.
pub struct GroupingProcessor<'a> {
    trip: &'a Trip,
    receipts: Vec<&'a Receipt>,
}

impl<'a> GroupingProcessor<'a> {
    pub fn new(trip: &'a Trip, receipts: &'a [Receipt], config: &ReportConfig) -> Self {
        let receipts = receipts
            .iter()
            .filter(|r| !config.only_include_reimbursable || r.reimbursable)
            .collect();
        Self { trip, receipts }
    }

    /// The receipt set every operation works over, after the
    /// reimbursable-only pre-filter.
    pub fn receipts(&self) -> &[&'a Receipt] {
        &self.receipts
    }

    /// One bucket per distinct category present, in (name, code) order.
    pub fn by_category(&self) -> Vec<CategoryGroup> {
        let mut buckets: BTreeMap<Category, Vec<Receipt>> = BTreeMap::new();
        for &receipt in &self.receipts {
            buckets
                .entry(receipt.category.clone())
                .or_default()
                .push(receipt.clone());
        }
        buckets
            .into_iter()
            .map(|(category, receipts)| CategoryGroup { category, receipts })
            .collect()
    }

    /// Price and tax sums (primary plus secondary tax) per category bucket,
    /// with the receipt count of each bucket.
    pub fn sum_by_category(&self) -> Vec<CategorySum> {
        let base = self.trip.base_currency;
        self.bucket_by(|r| Some(r.category.clone()))
            .into_iter()
            .map(|(category, receipts)| CategorySum {
                count: receipts.len(),
                price: PriceTotal::sum(base, receipts.iter().map(|r| &r.price)),
                tax: PriceTotal::sum(base, receipts.iter().flat_map(|r| [&r.tax, &r.tax2])),
                category,
            })
            .collect()
    }

    /// Price sum per payment-method bucket. Receipts without a payment method
    /// fall into no bucket.
    pub fn sum_by_payment_method(&self) -> Vec<PaymentMethodSum> {
        let base = self.trip.base_currency;
        self.bucket_by(|r| r.payment_method.clone())
            .into_iter()
            .map(|(payment_method, receipts)| PaymentMethodSum {
                payment_method,
                price: PriceTotal::sum(base, receipts.iter().map(|r| &r.price)),
            })
            .collect()
    }

    /// Price sum per reimbursement bucket. Only non-empty buckets are
    /// returned, the non-reimbursable one first.
    pub fn sum_by_reimbursement(&self) -> Vec<ReimbursementSum> {
        let base = self.trip.base_currency;
        let (reimbursable, non_reimbursable): (Vec<_>, Vec<_>) =
            self.receipts.iter().copied().partition(|r| r.reimbursable);
        [(false, non_reimbursable), (true, reimbursable)]
            .into_iter()
            .filter(|(_, receipts)| !receipts.is_empty())
            .map(|(flag, receipts)| ReimbursementSum {
                reimbursable: flag,
                price: PriceTotal::sum(base, receipts.iter().map(|r| &r.price)),
            })
            .collect()
    }

    /// Price sum per local calendar day, ascending, with zero-valued entries
    /// filling every gap between the first and last day so the series charts
    /// as a continuous line.
    pub fn sum_by_day(&self) -> Vec<DaySum> {
        let base = self.trip.base_currency;
        let mut buckets: BTreeMap<i64, Vec<&Receipt>> = BTreeMap::new();
        for &receipt in &self.receipts {
            buckets.entry(receipt.epoch_day()).or_default().push(receipt);
        }
        let (Some((&first, _)), Some((&last, _))) =
            (buckets.first_key_value(), buckets.last_key_value())
        else {
            return Vec::new();
        };
        (first..=last)
            .map(|day| DaySum {
                date: NaiveDate::default() + Duration::days(day),
                price: buckets
                    .get(&day)
                    .map(|receipts| PriceTotal::sum(base, receipts.iter().map(|r| &r.price)))
                    .unwrap_or_else(|| PriceTotal::zero(base)),
            })
            .collect()
    }

    /// Every summation at once, the bundle the chart layer consumes.
    pub fn summaries(&self) -> GroupingSummaries {
        GroupingSummaries {
            by_category: self.sum_by_category(),
            by_payment_method: self.sum_by_payment_method(),
            by_reimbursement: self.sum_by_reimbursement(),
            by_day: self.sum_by_day(),
        }
    }

    fn bucket_by<K, F>(&self, key: F) -> BTreeMap<K, Vec<&'a Receipt>>
    where
        K: Ord,
        F: Fn(&Receipt) -> Option<K>,
    {
        let mut buckets: BTreeMap<K, Vec<&'a Receipt>> = BTreeMap::new();
        for &receipt in &self.receipts {
            if let Some(k) = key(receipt) {
                buckets.entry(k).or_default().push(receipt);
            }
        }
        buckets
    }
}
