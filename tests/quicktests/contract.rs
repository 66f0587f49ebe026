use std::collections::BTreeSet;

use ordered_containers::{Kind, NodeView, OrderedContainer};

use crate::{init_logging, Op};

fn trees() -> [Box<dyn OrderedContainer<i8>>; 2] {
    [Kind::Avl.build(), Kind::RedBlack.build()]
}

fn heaps() -> [Box<dyn OrderedContainer<i8>>; 2] {
    [Kind::MinHeap.build(), Kind::MaxHeap.build()]
}

/// Counts the nodes reachable through the node view.
fn count_views(view: Option<Box<dyn NodeView<i8> + '_>>) -> usize {
    view.map_or(0, |v| 1 + count_views(v.left()) + count_views(v.right()))
}

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same set of values in both.
fn do_ops(ops: &[Op<i8>], tree: &mut dyn OrderedContainer<i8>, set: &mut BTreeSet<i8>) -> bool {
    for op in ops {
        let agrees = match op {
            Op::Insert(x) => tree.insert(*x) == set.insert(*x),
            Op::Delete(x) => tree.delete(x) == set.remove(x),
            Op::Sequence => tree.ordered_sequence().eq(set.iter()),
        };
        if !agrees || tree.validate().is_err() {
            return false;
        }
    }
    true
}

quickcheck::quickcheck! {
    fn fuzz_trees_against_set(ops: Vec<Op<i8>>) -> bool {
        init_logging();
        trees().iter_mut().all(|tree| {
            let mut set = BTreeSet::new();
            do_ops(&ops, &mut **tree, &mut set)
                && tree.size() == set.len()
                && count_views(tree.root_view()) == set.len()
        })
    }
}

quickcheck::quickcheck! {
    fn trees_enumerate_sorted_and_distinct(xs: Vec<i8>) -> bool {
        init_logging();
        let expected: Vec<_> = xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
        trees().iter_mut().all(|tree| {
            for x in &xs {
                tree.insert(*x);
            }
            tree.ordered_sequence().copied().eq(expected.iter().copied())
        })
    }
}

quickcheck::quickcheck! {
    fn second_insert_changes_nothing(xs: Vec<i8>, x: i8) -> bool {
        init_logging();
        trees().iter_mut().all(|tree| {
            for x in &xs {
                tree.insert(*x);
            }
            tree.insert(x);
            let size = tree.size();
            let before: Vec<_> = tree.ordered_sequence().copied().collect();

            !tree.insert(x)
                && tree.size() == size
                && tree.ordered_sequence().copied().eq(before)
        })
    }
}

quickcheck::quickcheck! {
    fn heaps_keep_parent_order(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        init_logging();
        heaps().iter_mut().all(|heap| {
            xs.iter().all(|x| heap.insert(*x) && heap.validate().is_ok())
                && deletes.iter().all(|x| {
                    let expected = heap.contains(x);
                    heap.delete(x) == expected && heap.validate().is_ok()
                })
        })
    }
}

quickcheck::quickcheck! {
    fn insert_then_delete_everything_empties(xs: Vec<i8>) -> bool {
        init_logging();
        trees().into_iter().chain(heaps()).all(|mut container| {
            for x in &xs {
                container.insert(*x);
            }
            let stored: Vec<_> = container.ordered_sequence().copied().collect();
            for x in stored.iter().rev() {
                if !container.delete(x) {
                    return false;
                }
            }
            container.size() == 0 && container.root_view().is_none()
        })
    }
}

quickcheck::quickcheck! {
    fn deleting_absent_value_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
        init_logging();
        trees().into_iter().chain(heaps()).all(|mut container| {
            for x in xs.iter().filter(|&&x| x != missing) {
                container.insert(*x);
            }
            let size = container.size();
            let before: Vec<_> = container.ordered_sequence().copied().collect();

            !container.delete(&missing)
                && container.size() == size
                && container.ordered_sequence().copied().eq(before)
        })
    }
}
