use binding_validator::prelude::*;
use chrono::{DateTime, Utc};

#[derive(Record)]
pub struct Address {
    #[binding("max=10,omitempty")]
    pub street: String,
    #[binding(name = "zip", rules = "required")]
    pub postal_code: Option<String>,
}

#[derive(Record)]
pub struct Order {
    #[binding("required,gt=0")]
    pub quantity: u32,
    #[binding("min=1,max=5")]
    pub tags: Vec<String>,
    #[binding("gte=2020-01-01T00:00:00Z")]
    pub placed_at: DateTime<Utc>,
    pub shipping: Address,
    pub billing: Option<Box<Address>>,
    pub r#type: &'static str,
    #[binding(skip)]
    pub raw: Vec<u8>,
    note: String,
}

#[derive(Record)]
pub struct Empty {}

fn main() {
    let order = Order {
        quantity: 1,
        tags: vec!["a".into()],
        placed_at: Utc::now(),
        shipping: Address {
            street: String::new(),
            postal_code: Some("12345".into()),
        },
        billing: None,
        r#type: "retail",
        raw: Vec::new(),
        note: String::new(),
    };
    let _ = order.note.len();
    let _: Result<(), ValidationError> = order.validate();
    let _ = Validator::default().validate(&Empty {});
    assert_eq!(Record::fields(&order).len(), 6);
}
