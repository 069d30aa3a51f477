use binding_validator::prelude::*;

#[derive(Record)]
pub struct Page<T> {
    #[binding("max=50")]
    pub items: Vec<T>,
    pub cursor: Option<T>,
}

#[derive(Record)]
pub struct Named<'a> {
    #[binding("required,max=16")]
    pub name: &'a str,
}

fn main() {
    let page = Page {
        items: vec![1u8, 2, 3],
        cursor: Some(3u8),
    };
    assert!(page.validate().is_ok());

    let name = String::from("alice");
    assert!(Named { name: &name }.validate().is_ok());
}
