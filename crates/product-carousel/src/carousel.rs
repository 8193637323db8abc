//! Carousel state machine
//!
//! Two independent pieces of state live here: the active index that decides
//! which card is centered, and the detail view (selected product plus the
//! screenshot being shown). Closing the detail view never moves the carousel.

use crate::slot::{offset, slot_for_offset, Slot};
use crate::{CarouselError, Product};

/// Invoked with the product whenever its detail view opens
pub type OpenCallback = Box<dyn FnMut(&Product)>;

pub struct Carousel {
    items: Vec<Product>,
    active_index: usize,
    selected: Option<usize>,
    active_image_index: usize,
    on_open: Option<OpenCallback>,
}

impl Carousel {
    pub fn new(items: Vec<Product>) -> Result<Self, CarouselError> {
        if items.is_empty() {
            return Err(CarouselError::Empty);
        }

        Ok(Self {
            items,
            active_index: 0,
            selected: None,
            active_image_index: 0,
            on_open: None,
        })
    }

    pub fn with_on_open(mut self, on_open: impl FnMut(&Product) + 'static) -> Self {
        self.on_open = Some(Box::new(on_open));
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn active_item(&self) -> &Product {
        &self.items[self.active_index]
    }

    pub fn next(&mut self) {
        self.active_index = (self.active_index + 1) % self.len();
        log::debug!("carousel -> {}", self.active_index);
    }

    pub fn prev(&mut self) {
        let len = self.len();
        self.active_index = (self.active_index + len - 1) % len;
        log::debug!("carousel -> {}", self.active_index);
    }

    pub fn offset_of(&self, index: usize) -> usize {
        offset(index, self.active_index, self.len())
    }

    pub fn slot_of(&self, index: usize) -> Slot {
        slot_for_offset(self.offset_of(index), self.len())
    }

    /// `(index, slot)` for every item, in list order
    pub fn slots(&self) -> impl Iterator<Item = (usize, Slot)> + '_ {
        (0..self.len()).map(move |index| (index, self.slot_of(index)))
    }

    /// Click on a card. Only the centered card opens its detail view;
    /// anything else is ignored and returns false.
    pub fn click(&mut self, index: usize) -> bool {
        if index >= self.len() || !self.slot_of(index).is_interactive() {
            return false;
        }
        self.open(index).is_ok()
    }

    /// Open the detail view for `index`, resetting the screenshot to the first one
    pub fn open(&mut self, index: usize) -> Result<&Product, CarouselError> {
        let len = self.len();
        if index >= len {
            return Err(CarouselError::IndexOutOfRange { index, len });
        }

        self.selected = Some(index);
        self.active_image_index = 0;
        log::debug!("detail view opened: {}", self.items[index].title);

        if let Some(on_open) = self.on_open.as_mut() {
            on_open(&self.items[index]);
        }

        Ok(&self.items[index])
    }

    pub fn close(&mut self) {
        if self.selected.take().is_some() {
            log::debug!("detail view closed");
        }
    }

    pub fn selected(&self) -> Option<&Product> {
        self.selected.map(|index| &self.items[index])
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn active_image_index(&self) -> usize {
        self.active_image_index
    }

    fn screenshot_count(&self) -> usize {
        self.selected().map_or(0, |product| product.screenshots.len())
    }

    /// No-op without a selection or without screenshots
    pub fn next_image(&mut self) {
        let count = self.screenshot_count();
        if count > 0 {
            self.active_image_index = (self.active_image_index + 1) % count;
        }
    }

    /// No-op without a selection or without screenshots
    pub fn prev_image(&mut self) {
        let count = self.screenshot_count();
        if count > 0 {
            self.active_image_index = (self.active_image_index + count - 1) % count;
        }
    }

    /// Jump straight to a screenshot (dot indicators). Returns false if out of range.
    pub fn select_image(&mut self, index: usize) -> bool {
        if index < self.screenshot_count() {
            self.active_image_index = index;
            true
        } else {
            false
        }
    }

    pub fn active_screenshot(&self) -> Option<&str> {
        self.selected()?
            .screenshots
            .get(self.active_image_index)
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn products(titles: &[&str]) -> Vec<Product> {
        titles.iter().map(|t| Product::new(*t, "2025")).collect()
    }

    fn with_screenshots(count: usize) -> Carousel {
        let shots: Vec<String> = (0..count).map(|i| format!("shot_{i}.jpg")).collect();
        Carousel::new(vec![
            Product::new("FamBudget", "2025").with_screenshots(shots),
            Product::new("GenXLink", "2025"),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_is_rejected() {
        assert_eq!(Carousel::new(Vec::new()).err(), Some(CarouselError::Empty));
    }

    #[test]
    fn test_four_items_slots() {
        let mut carousel = Carousel::new(products(&["A", "B", "C", "D"])).unwrap();

        let slots: Vec<Slot> = carousel.slots().map(|(_, slot)| slot).collect();
        assert_eq!(slots, vec![Slot::Center, Slot::Right, Slot::Hidden, Slot::Left]);

        carousel.next();
        carousel.next();
        carousel.next();

        assert_eq!(carousel.active_index(), 3);
        assert_eq!(carousel.active_item().title, "D");
        assert_eq!(carousel.slot_of(3), Slot::Center);
        assert_eq!(carousel.slot_of(0), Slot::Right);
        assert_eq!(carousel.slot_of(2), Slot::Left);
        assert_eq!(carousel.slot_of(1), Slot::Hidden);
    }

    #[test]
    fn test_wraparound() {
        let mut carousel = Carousel::new(products(&["A", "B", "C", "D"])).unwrap();

        carousel.prev();
        assert_eq!(carousel.active_index(), 3);

        carousel.next();
        assert_eq!(carousel.active_index(), 0);
    }

    #[test]
    fn test_single_item() {
        let mut carousel = Carousel::new(products(&["Solo"])).unwrap();
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.active_index(), 0);
        assert_eq!(carousel.slot_of(0), Slot::Center);
    }

    #[test]
    fn test_click_only_center() {
        let opened = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&opened);
        let mut carousel = Carousel::new(products(&["A", "B", "C"]))
            .unwrap()
            .with_on_open(move |product| log.borrow_mut().push(product.title.clone()));

        assert!(!carousel.click(1));
        assert!(!carousel.click(2));
        assert!(!carousel.click(42));
        assert!(!carousel.is_open());

        assert!(carousel.click(0));
        assert_eq!(carousel.selected().map(|p| p.title.as_str()), Some("A"));
        assert_eq!(*opened.borrow(), vec!["A".to_string()]);
    }

    #[test]
    fn test_open_out_of_range() {
        let mut carousel = Carousel::new(products(&["A"])).unwrap();
        assert_eq!(
            carousel.open(3).err(),
            Some(CarouselError::IndexOutOfRange { index: 3, len: 1 })
        );
    }

    #[test]
    fn test_close_keeps_position() {
        let mut carousel = Carousel::new(products(&["A", "B", "C"])).unwrap();
        carousel.next();
        carousel.click(1);
        carousel.close();

        assert!(!carousel.is_open());
        assert_eq!(carousel.active_index(), 1);
    }

    #[test]
    fn test_open_resets_image() {
        let mut carousel = with_screenshots(5);
        carousel.open(0).unwrap();
        carousel.next_image();
        carousel.next_image();
        assert_eq!(carousel.active_image_index(), 2);

        carousel.close();
        carousel.open(0).unwrap();
        assert_eq!(carousel.active_image_index(), 0);
    }

    #[test]
    fn test_image_wraparound() {
        let mut carousel = with_screenshots(5);
        carousel.open(0).unwrap();

        carousel.prev_image();
        assert_eq!(carousel.active_image_index(), 4);
        assert_eq!(carousel.active_screenshot(), Some("shot_4.jpg"));

        carousel.next_image();
        assert_eq!(carousel.active_image_index(), 0);
    }

    #[test]
    fn test_image_navigation_without_screenshots() {
        let mut carousel = with_screenshots(5);

        // Nothing selected
        carousel.next_image();
        assert_eq!(carousel.active_image_index(), 0);

        carousel.open(1).unwrap();
        carousel.next_image();
        carousel.prev_image();
        assert_eq!(carousel.active_image_index(), 0);
        assert_eq!(carousel.active_screenshot(), None);
    }

    #[test]
    fn test_select_image() {
        let mut carousel = with_screenshots(3);
        carousel.open(0).unwrap();

        assert!(carousel.select_image(2));
        assert_eq!(carousel.active_image_index(), 2);
        assert!(!carousel.select_image(3));
        assert_eq!(carousel.active_image_index(), 2);
    }
}
