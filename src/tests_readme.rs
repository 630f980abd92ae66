// #![include_doc("../README.md", start)]
//! # viewlist
//!
//! [![Crates.io](https://img.shields.io/crates/v/viewlist.svg)](https://crates.io/crates/viewlist)
//! [![Docs.rs](https://docs.rs/viewlist/badge.svg)](https://docs.rs/viewlist/)
//!
//! `viewlist` is a list state container with predicate-derived views, designed to be used as a foundation for UI frameworks.
//!
//! > [!WARNING]
//! > Warning: This crate is still in the early stages of development. APIs will change.
//!
//! ## Features
//!
//! - Explicit, owned state: every list is a plain value, with no global registry behind it
//! - Items are unique by a stable, caller-assigned id
//! - Non-destructive filtering: the master list survives every predicate change
//! - Fallible predicates: a failing item is excluded and counted, never fatal
//! - Pull-based change tracking with keyed replay scripts
//! - Serde support for the master list
//!
//! ### List state as plain values
//!
//! State management is conducted using the following primitives:
//!
//! - [`ViewList<T>`]: An id-keyed list similar to `Vec<T>`, with a view derived from the active predicate.
//! - [`Predicate<T>`]: Similar to `Rc<dyn Fn(&T) -> bool>`, but cloneable and allowed to fail per item.
//! - [`ViewReader<T>`]: Turns successive reads of a view into keyed change scripts.
//!
//! [`ViewList<T>`]: https://docs.rs/viewlist/latest/viewlist/struct.ViewList.html
//! [`Predicate<T>`]: https://docs.rs/viewlist/latest/viewlist/struct.Predicate.html
//! [`ViewReader<T>`]: https://docs.rs/viewlist/latest/viewlist/struct.ViewReader.html
//!
//! ```rust
//! use viewlist::{Item, Predicate, ViewList, ViewReader};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Product {
//!     id: u32,
//!     title: String,
//!     rating: f32,
//! }
//!
//! impl Item for Product {
//!     type Id = u32;
//!     fn id(&self) -> &u32 {
//!         &self.id
//!     }
//! }
//!
//! fn product(id: u32, title: &str, rating: f32) -> Product {
//!     Product { id, title: title.to_string(), rating }
//! }
//!
//! let mut products = ViewList::new();
//! products
//!     .replace_all(vec![
//!         product(1, "Wireless Earbuds", 3.0),
//!         product(2, "Mechanical Keyboard", 4.5),
//!         product(3, "USB-C Dock", 4.0),
//!     ])
//!     .unwrap();
//!
//! // Filtering derives the view and keeps the master list intact.
//! products.apply_predicate(Predicate::new(|p: &Product| p.rating >= 4.0));
//! assert_eq!(products.view().len(), 2);
//! assert_eq!(products.len(), 3);
//!
//! // Any filter can be reversed later.
//! products.apply_predicate(Predicate::accept_all());
//! assert_eq!(products.view().len(), 3);
//!
//! // Readers turn successive view states into replay scripts.
//! let mut reader = ViewReader::new();
//! let mut screen: Vec<Product> = Vec::new();
//! for change in reader.read(&products).changes() {
//!     change.apply_to(&mut screen);
//! }
//! assert_eq!(screen.len(), 3);
//!
//! products.remove(&2);
//! for change in reader.read(&products).changes() {
//!     change.apply_to(&mut screen);
//! }
//! assert_eq!(
//!     screen.iter().map(|p| p.title.as_str()).collect::<Vec<_>>(),
//!     ["Wireless Earbuds", "USB-C Dock"]
//! );
//! ```
//!
//! ### Non-destructive filtering
//!
//! A common defect in hand-rolled list state is to apply a filter by overwriting the list with the filter result, after which the unfiltered data is gone and a second filter stacks on top of the first. `ViewList` treats the view as derived state: applying a predicate replaces the previous one and recomputes the view from the full master list, so filters never stack and never destroy data.
//!
//! A predicate is also allowed to fail for an individual item. The failing item is excluded from the view and counted in `skipped`, while the rest of the view is computed normally.
//!
//! ### Stable identity
//!
//! Positions are a poor identity for list items: they shift on every insertion, removal, and reorder. Frameworks that render lists warn against using the array index as a key for this reason, such as [React](https://react.dev/learn/rendering-lists#rules-of-keys). `ViewList` requires each item to carry its own id via the [`Item`] trait and addresses items only by id. Change scripts produced by [`ViewReader<T>`] match items by id as well, so a reorder is reported as moves rather than as a rewrite of every position.
//!
//! [`Item`]: https://docs.rs/viewlist/latest/viewlist/trait.Item.html
//!
//! ### Pull-based change tracking
//!
//! The list does not keep a subscriber registry. A [`ViewReader<T>`] owns its position in the change history and computes the difference on each read, so readers can be created and dropped freely, read at their own pace, and observe a coalesced script when several mutations happened between reads. Applying the script in order to the previously read sequence reproduces the current view exactly.
//!
//! ## License
//!
//! This project is dual licensed under Apache-2.0/MIT.
//!
//! ## Contribution
//!
//! Unless you explicitly state otherwise, any contribution intentionally submitted for inclusion in the work by you, as defined in the Apache-2.0 license, shall be dual licensed as above, without any additional terms or conditions.
// #![include_doc("../README.md", end)]
