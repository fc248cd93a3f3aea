//! Demo session seed
//!
//! Builds the demo data every fresh session starts from: four bills across
//! two categories, two recent activities, and a wallet balance.

use chrono::{Duration, NaiveDate, Utc};

use crate::models::{Activity, Bill, BillStatus, Money};

/// The wallet balance of the demo session
pub fn demo_wallet_balance() -> Money {
    Money::from_cents(28764)
}

/// The four bills of the demo session
pub fn demo_bills() -> Vec<Bill> {
    let mut electricity = Bill::new(
        "Electricity Bill",
        Money::from_cents(8950),
        date(2024, 10, 1),
        "Utilities",
        "Latvenergo",
    );
    electricity.status = BillStatus::Paid;

    let mut internet = Bill::new(
        "Internet Bill",
        Money::from_cents(2499),
        date(2024, 10, 5),
        "Telecommunications",
        "Bite",
    );
    internet.status = BillStatus::Pending;

    let mut water = Bill::new(
        "Water Bill",
        Money::from_cents(15630),
        date(2024, 10, 8),
        "Utilities",
        "Rigas Udens",
    );
    water.status = BillStatus::Insufficient;

    let mut mobile = Bill::new(
        "Mobile Bill",
        Money::from_cents(1590),
        date(2024, 10, 15),
        "Telecommunications",
        "Tele2",
    );
    mobile.status = BillStatus::NotReceived;

    vec![electricity, internet, water, mobile]
}

/// The two seeded activity entries, newest first
pub fn demo_activities() -> Vec<Activity> {
    let mut payment = Activity::new(
        "Bill Payment",
        "Electricity bill paid successfully",
        Some(Money::from_cents(-8950)),
    );
    payment.timestamp = Utc::now();

    let mut top_up = Activity::new(
        "Wallet Top-up",
        "Added funds via Swedbank",
        Some(Money::from_cents(50000)),
    );
    top_up.timestamp = Utc::now() - Duration::hours(1);

    vec![payment, top_up]
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // The demo calendar is fixed; these constants are always valid
    NaiveDate::from_ymd_opt(y, m, d).expect("valid demo date")
}
