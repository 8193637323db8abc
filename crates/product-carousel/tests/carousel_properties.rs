use product_carousel::{Carousel, Product, Slot};
use proptest::prelude::*;

fn carousel(len: usize) -> Carousel {
    Carousel::new((0..len).map(|i| Product::new(format!("P{i}"), "2025")).collect()).unwrap()
}

fn carousel_at(len: usize, active: usize) -> Carousel {
    let mut c = carousel(len);
    for _ in 0..active {
        c.next();
    }
    c
}

proptest! {
    #[test]
    fn test_exactly_one_center(len in 1usize..32, active in 0usize..32) {
        let c = carousel_at(len, active % len);
        let centers = c.slots().filter(|(_, slot)| *slot == Slot::Center).count();
        prop_assert_eq!(centers, 1);
        prop_assert_eq!(c.slot_of(c.active_index()), Slot::Center);
    }

    #[test]
    fn test_at_most_three_visible(len in 1usize..32, active in 0usize..32) {
        let c = carousel_at(len, active % len);
        let visible = c.slots().filter(|(_, slot)| *slot != Slot::Hidden).count();
        prop_assert_eq!(visible, len.min(3));
    }

    #[test]
    fn test_next_then_prev_restores(len in 1usize..32, active in 0usize..32) {
        let mut c = carousel_at(len, active % len);
        let start = c.active_index();

        c.next();
        c.prev();
        prop_assert_eq!(c.active_index(), start);

        c.prev();
        c.next();
        prop_assert_eq!(c.active_index(), start);
    }

    #[test]
    fn test_open_always_resets_image(shots in 1usize..12, steps in 0usize..30) {
        let screenshots: Vec<String> = (0..shots).map(|i| format!("{i}.jpg")).collect();
        let mut c = Carousel::new(vec![Product::new("A", "2025").with_screenshots(screenshots)]).unwrap();

        c.open(0).unwrap();
        for _ in 0..steps {
            c.next_image();
        }
        prop_assert_eq!(c.active_image_index(), steps % shots);

        c.open(0).unwrap();
        prop_assert_eq!(c.active_image_index(), 0);
    }
}

#[test]
fn test_four_item_scenario() {
    let mut c = Carousel::new(
        ["A", "B", "C", "D"]
            .into_iter()
            .map(|t| Product::new(t, "2025"))
            .collect(),
    )
    .unwrap();

    assert_eq!(c.slot_of(0), Slot::Center);
    assert_eq!(c.slot_of(1), Slot::Right);
    assert_eq!(c.slot_of(2), Slot::Hidden);
    assert_eq!(c.slot_of(3), Slot::Left);

    c.next();
    c.next();
    c.next();

    assert_eq!(c.active_index(), 3);
    assert_eq!(c.active_item().title, "D");
}

#[test]
fn test_image_wrap_with_five_screenshots() {
    let shots: Vec<String> = (1..=5).map(|i| format!("shot{i}.jpg")).collect();
    let mut c = Carousel::new(vec![Product::new("FamBudget", "2025").with_screenshots(shots)]).unwrap();
    c.open(0).unwrap();

    assert!(c.select_image(4));
    c.next_image();
    assert_eq!(c.active_image_index(), 0);

    c.prev_image();
    assert_eq!(c.active_image_index(), 4);
}
