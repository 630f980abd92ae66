use viewlist::{Item, Predicate, ViewChange, ViewList, ViewReader};

#[derive(Clone, PartialEq, Debug)]
struct Product {
    id: u32,
    title: &'static str,
    rating: f32,
}

impl Item for Product {
    type Id = u32;

    fn id(&self) -> &u32 {
        &self.id
    }
}

fn product(id: u32, title: &'static str, rating: f32) -> Product {
    Product { id, title, rating }
}

fn main() {
    let mut products = ViewList::new();
    let mut reader = ViewReader::new();

    products
        .replace_all(vec![
            product(1, "Wireless Earbuds", 3.0),
            product(2, "Mechanical Keyboard", 4.5),
            product(3, "USB-C Dock", 4.0),
        ])
        .unwrap();
    render(&mut reader, &products); // + Wireless Earbuds, + Mechanical Keyboard, + USB-C Dock

    products.apply_predicate(Predicate::new(|p: &Product| p.rating >= 4.0));
    render(&mut reader, &products); // - Wireless Earbuds

    products.insert(product(4, "Webcam", 4.2)).unwrap();
    products.update(&2, |p| p.rating = 3.5);
    render(&mut reader, &products); // - Mechanical Keyboard, + Webcam

    products.apply_predicate(Predicate::accept_all());
    render(&mut reader, &products); // + Wireless Earbuds, + Mechanical Keyboard

    products
        .replace_all(vec![
            product(4, "Webcam", 4.2),
            product(1, "Wireless Earbuds", 3.0),
            product(2, "Mechanical Keyboard", 3.5),
            product(3, "USB-C Dock", 4.0),
        ])
        .unwrap();
    render(&mut reader, &products); // ^ 3 -> 0
}

fn render(reader: &mut ViewReader<Product>, products: &ViewList<Product>) {
    for change in reader.read(products).changes() {
        match change {
            ViewChange::Insert { new_value, .. } => println!("+ {}", new_value.title),
            ViewChange::Remove { old_value, .. } => println!("- {}", old_value.title),
            ViewChange::Set {
                old_value,
                new_value,
                ..
            } => println!("~ {} -> {}", old_value.title, new_value.title),
            ViewChange::Move {
                old_index,
                new_index,
            } => println!("^ {old_index} -> {new_index}"),
        }
    }
    let titles: Vec<_> = products.view().iter().map(|p| p.title).collect();
    println!("view: {titles:?}");
}
