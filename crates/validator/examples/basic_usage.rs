//! Basic usage example for binding-validator

use binding_validator::prelude::*;
use chrono::{TimeZone, Utc};

#[derive(Debug, Record)]
pub struct Address {
    #[binding("max=10,omitempty")]
    pub street: String,
    #[binding("min=1,max=20")]
    pub city: String,
}

#[derive(Debug, Record)]
pub struct Registration {
    #[binding(name = "ID", rules = "required,min=1")]
    pub id: i64,
    #[binding("required,gte=60")]
    pub score: i64,
    #[binding("min=2025-11-27T00:00:00Z")]
    pub submitted_at: chrono::DateTime<Utc>,
    pub address: Address,
    #[binding("required")]
    pub mailing: Option<Box<Address>>,
}

fn report(label: &str, result: ValidationResult) {
    match result {
        Ok(()) => println!("✓ {label} is valid"),
        Err(e) => println!("✗ {label} is invalid: {e} (code: {})", e.code()),
    }
}

fn main() {
    // Walk and skip decisions are logged at trace level
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_target(false)
        .init();

    let validator = match Validator::new(ValidatorConfig::new().with_time_zone(TimeZoneSetting::Utc))
    {
        Ok(validator) => validator,
        Err(e) => {
            eprintln!("bad config: {e}");
            return;
        }
    };

    let address = || Address {
        street: String::new(),
        city: "Lisbon".into(),
    };
    let valid = Registration {
        id: 7,
        score: 99,
        submitted_at: Utc.with_ymd_and_hms(2025, 12, 1, 9, 30, 0).unwrap(),
        address: address(),
        mailing: Some(Box::new(address())),
    };
    report("complete registration", valid.validate_with(&validator));

    // Declaration order: ID fails before score is looked at
    let missing_id = Registration { id: 0, score: 10, ..valid };
    report("registration without ID", missing_id.validate_with(&validator));

    let nested = Registration {
        address: Address {
            street: "Rua Augusta 100".into(),
            city: "Lisbon".into(),
        },
        id: 7,
        ..missing_id
    };
    report("registration with long street", nested.validate_with(&validator));

    let no_mailing = Registration {
        mailing: None,
        address: address(),
        score: 80,
        ..nested
    };
    report("registration without mailing address", no_mailing.validate_with(&validator));

    report("a plain integer", validator.validate(&42));
}
