use serde::{Deserialize, Serialize};
use serde_json::json;
use viewlist::*;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
struct Product {
    id: String,
    title: String,
    rating: f32,
}

impl Item for Product {
    type Id = String;

    fn id(&self) -> &String {
        &self.id
    }
}

fn product(id: &str, title: &str, rating: f32) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        rating,
    }
}

fn catalog() -> Vec<Product> {
    vec![
        product("1", "Wireless Earbuds", 3.0),
        product("2", "Mechanical Keyboard", 4.5),
        product("3", "USB-C Dock", 4.0),
    ]
}

#[test]
fn serializes_master_as_a_sequence() {
    let mut products = ViewList::new();
    products.replace_all(catalog()).unwrap();

    // The active predicate is not part of the serialized form; hidden items
    // are written out too.
    products.apply_predicate(Predicate::new(|p: &Product| p.rating >= 4.0));
    assert_eq!(products.view().len(), 2);

    assert_eq!(
        serde_json::to_value(&products).unwrap(),
        json!([
            { "id": "1", "title": "Wireless Earbuds", "rating": 3.0 },
            { "id": "2", "title": "Mechanical Keyboard", "rating": 4.5 },
            { "id": "3", "title": "USB-C Dock", "rating": 4.0 },
        ])
    );
}

#[test]
fn round_trip_preserves_order() {
    let mut products = ViewList::new();
    products.replace_all(catalog()).unwrap();

    let json = serde_json::to_string(&products).unwrap();
    let restored: ViewList<Product> = serde_json::from_str(&json).unwrap();

    assert_eq!(
        restored.iter().cloned().collect::<Vec<_>>(),
        products.iter().cloned().collect::<Vec<_>>()
    );
}

#[test]
fn deserialized_list_starts_unfiltered() {
    let mut products = ViewList::new();
    products.replace_all(catalog()).unwrap();
    products.apply_predicate(Predicate::new(|p: &Product| p.rating >= 4.0));

    let json = serde_json::to_string(&products).unwrap();
    let mut restored: ViewList<Product> = serde_json::from_str(&json).unwrap();

    // The predicate did not survive the round trip; the view starts full.
    assert_eq!(restored.view().len(), 3);
    assert_eq!(restored.skipped(), 0);

    restored.apply_predicate(Predicate::new(|p: &Product| p.rating >= 4.0));
    assert_eq!(restored.view().len(), 2);
}

#[test]
fn duplicate_ids_fail_to_deserialize() {
    let json = r#"[
        { "id": "1", "title": "A", "rating": 1.0 },
        { "id": "1", "title": "B", "rating": 2.0 }
    ]"#;
    let err = serde_json::from_str::<ViewList<Product>>(json).unwrap_err();
    assert!(err.to_string().contains("duplicate item id \"1\""));
}
