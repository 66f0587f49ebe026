use ordered_containers::{DisplayTag, Kind, NodeView, OrderedContainer};
use simplelog::{Config, LevelFilter, TestLogger};

fn build_with(kind: Kind, values: &[i32]) -> Box<dyn OrderedContainer<i32>> {
    // Only the first call installs the logger.
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
    let mut container = kind.build();
    for value in values {
        container.insert(*value);
    }
    container
}

/// The value and color tag of a view's child, for compact assertions.
fn child(view: &dyn NodeView<i32>, left: bool) -> Option<(i32, DisplayTag)> {
    let child = if left { view.left() } else { view.right() };
    child.map(|c| (*c.value(), c.color_tag()))
}

#[test]
fn avl_ascending_inserts_rotate_left_at_root() {
    let tree = build_with(Kind::Avl, &[10, 20, 30]);
    let root = tree.root_view().unwrap();

    assert_eq!(*root.value(), 20);
    assert_eq!(child(&*root, true), Some((10, DisplayTag::Green)));
    assert_eq!(child(&*root, false), Some((30, DisplayTag::Green)));
}

#[test]
fn red_black_ascending_inserts_make_black_root_with_red_children() {
    let tree = build_with(Kind::RedBlack, &[10, 20, 30]);
    let root = tree.root_view().unwrap();

    assert_eq!((*root.value(), root.color_tag()), (20, DisplayTag::Black));
    assert_eq!(child(&*root, true), Some((10, DisplayTag::Red)));
    assert_eq!(child(&*root, false), Some((30, DisplayTag::Red)));
}

#[test]
fn max_heap_puts_largest_on_top() {
    let heap = build_with(Kind::MaxHeap, &[5, 3, 8]);

    assert_eq!(heap.ordered_sequence().copied().collect::<Vec<_>>(), [8, 3, 5]);
    assert_eq!(heap.root_view().map(|r| *r.value()), Some(8));
}

#[test]
fn min_heap_puts_smallest_on_top() {
    let heap = build_with(Kind::MinHeap, &[5, 3, 8]);

    assert_eq!(heap.root_view().map(|r| *r.value()), Some(3));
}

#[test]
fn kinds_and_tags() {
    let described: Vec<_> = Kind::ALL
        .iter()
        .map(|kind| {
            let container = build_with(*kind, &[1]);
            let root_tag = container.root_view().unwrap().color_tag();
            (container.kind().to_string(), container.display_tag(), root_tag)
        })
        .collect();

    assert_eq!(
        described,
        [
            ("AVL".to_string(), DisplayTag::Green, DisplayTag::Green),
            ("RBT".to_string(), DisplayTag::Blue, DisplayTag::Black),
            ("Minimum Heap".to_string(), DisplayTag::Blue, DisplayTag::Blue),
            ("Maximum Heap".to_string(), DisplayTag::Plum, DisplayTag::Plum),
        ]
    );
}

#[test]
fn clear_resets_every_container() {
    for kind in Kind::ALL {
        let mut container = build_with(kind, &[4, 2, 6, 1, 3, 5, 7]);
        container.clear();

        assert_eq!(container.size(), 0);
        assert!(container.root_view().is_none());
        assert_eq!(container.ordered_sequence().next(), None);

        // Still usable afterwards.
        assert!(container.insert(9));
        assert!(container.contains(&9));
    }
}

#[test]
fn heap_sequence_is_storage_order_not_sorted() {
    let heap = build_with(Kind::MinHeap, &[1, 5, 2, 6, 7, 3]);

    let stored: Vec<_> = heap.ordered_sequence().copied().collect();
    assert_eq!(stored, [1, 5, 2, 6, 7, 3]);
    assert_eq!(heap.validate(), Ok(()));
}
