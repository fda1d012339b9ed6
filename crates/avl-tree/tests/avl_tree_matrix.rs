use avl_tree::{AvlTree, InvariantError};

const SCENARIO: [i32; 13] = [14, 17, 11, 7, 53, 4, 13, 12, 8, 60, 19, 16, 20];

fn scenario_tree() -> AvlTree<i32> {
    let mut tree = AvlTree::new();
    for k in SCENARIO {
        assert!(tree.insert(k));
        tree.assert_valid().unwrap();
    }
    tree
}

#[test]
fn scenario_insert_shape_matrix() {
    let tree = scenario_tree();
    assert_eq!(tree.len(), 13);
    assert_eq!(
        tree.level_order(),
        vec![14, 11, 19, 7, 12, 17, 53, 4, 8, 13, 16, 20, 60]
    );
    assert_eq!(tree.height(), Some(3));
    assert_eq!(tree.root().map(|n| *n.value()), Some(14));
}

#[test]
fn scenario_remove_matrix() {
    let mut tree = scenario_tree();

    assert!(tree.remove(&8));
    tree.assert_valid().unwrap();
    assert_eq!(
        tree.level_order(),
        vec![14, 11, 19, 7, 12, 17, 53, 4, 13, 16, 20, 60]
    );

    assert!(tree.remove(&7));
    tree.assert_valid().unwrap();
    assert_eq!(
        tree.level_order(),
        vec![14, 11, 19, 4, 12, 17, 53, 13, 16, 20, 60]
    );

    // Two children of equal height: the successor 12 takes the slot.
    assert!(tree.remove(&11));
    tree.assert_valid().unwrap();
    assert_eq!(
        tree.level_order(),
        vec![14, 12, 19, 4, 13, 17, 53, 16, 20, 60]
    );
    assert_eq!(tree.len(), 10);

    assert_eq!(tree.find_successor(&13), Some(&14));
    assert_eq!(tree.find_predecessor(&13), Some(&12));
}

#[test]
fn predecessor_successor_matrix() {
    let mut tree = scenario_tree();
    for k in [8, 7, 11] {
        tree.remove(&k);
    }

    // Leaf nodes resolve through the nearest ancestor.
    assert_eq!(tree.find_predecessor(&16), Some(&14));
    assert_eq!(tree.find_successor(&16), Some(&17));
    assert_eq!(tree.find_successor(&20), Some(&53));
    assert_eq!(tree.find_predecessor(&4), None);
    assert_eq!(tree.find_successor(&60), None);

    // Inner nodes resolve through their subtrees.
    assert_eq!(tree.find_predecessor(&14), Some(&13));
    assert_eq!(tree.find_successor(&14), Some(&16));
    assert_eq!(tree.find_predecessor(&19), Some(&17));

    // Absent keys have neither.
    assert_eq!(tree.find_predecessor(&15), None);
    assert_eq!(tree.find_successor(&15), None);
}

#[test]
fn rotation_cases_matrix() {
    for (keys, case) in [
        ([3, 2, 1], "left-left"),
        ([1, 2, 3], "right-right"),
        ([3, 1, 2], "left-right"),
        ([1, 3, 2], "right-left"),
    ] {
        let tree: AvlTree<i32> = keys.into_iter().collect();
        assert_eq!(tree.level_order(), vec![2, 1, 3], "{case}");
        let root = tree.root().unwrap();
        assert_eq!((root.height(), root.bf()), (1, 0), "{case}");
        tree.assert_valid().unwrap();
    }
}

#[test]
fn duplicate_insert_matrix() {
    let mut tree = scenario_tree();
    let before = tree.level_order();
    assert!(!tree.insert(53));
    assert!(!tree.insert(14));
    assert_eq!(tree.level_order(), before);
    assert_eq!(tree.len(), 13);
}

#[test]
fn missing_remove_matrix() {
    let mut tree = scenario_tree();
    let before = tree.level_order();
    assert!(!tree.remove(&99));
    assert_eq!(tree.take(&99), None);
    assert_eq!(tree.level_order(), before);
    assert_eq!(tree.len(), 13);

    let mut empty = AvlTree::<i32>::new();
    assert!(!empty.remove(&1));
    assert!(empty.is_empty());
}

#[test]
fn remove_cases_matrix() {
    // Leaf.
    let mut tree: AvlTree<i32> = [2, 1, 3].into_iter().collect();
    assert!(tree.remove(&1));
    assert_eq!(tree.level_order(), vec![2, 3]);

    // One child.
    assert!(tree.remove(&2));
    assert_eq!(tree.level_order(), vec![3]);

    // Last node.
    assert_eq!(tree.take(&3), Some(3));
    assert!(tree.is_empty());
    assert_eq!(tree.height(), None);

    // Left subtree taller: the predecessor takes the slot.
    let mut tree: AvlTree<i32> = [5, 3, 8, 1, 4].into_iter().collect();
    assert!(tree.remove(&5));
    assert_eq!(tree.level_order(), vec![4, 3, 8, 1]);
    tree.assert_valid().unwrap();
}

#[test]
fn removal_rebalances_ancestors_matrix() {
    //     2
    //   1   3
    //         4
    let mut tree: AvlTree<i32> = [2, 1, 3, 4].into_iter().collect();
    assert!(tree.remove(&1));
    assert_eq!(tree.level_order(), vec![3, 2, 4]);
    tree.assert_valid().unwrap();
}

#[test]
fn ladder_insert_delete_matrix() {
    let mut tree = AvlTree::new();
    for i in 0..300 {
        tree.insert(i);
        tree.assert_valid().unwrap();
    }
    assert_eq!(tree.len(), 300);
    assert!(tree.height().unwrap() <= 9);

    for i in (0..300).step_by(3) {
        assert!(tree.remove(&i));
        tree.assert_valid().unwrap();
    }
    for i in 0..300 {
        assert_eq!(tree.find(&i), i % 3 != 0, "key {i}");
    }
}

#[test]
fn misc_api_matrix() {
    let mut tree = AvlTree::<i64>::default();
    assert!(tree.is_empty());
    assert_eq!(tree.first(), None);
    assert_eq!(tree.last(), None);
    assert!(tree.find_node(&1).is_none());

    tree.extend([10, 5, 20]);
    assert_eq!(tree.first(), Some(&5));
    assert_eq!(tree.last(), Some(&20));
    let node = tree.find_node(&10).unwrap();
    assert_eq!(node.left().map(|n| *n.value()), Some(5));
    assert_eq!(node.right().map(|n| *n.value()), Some(20));
    assert!(node.left().unwrap().is_leaf());

    tree.clear();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert!(tree.in_order().is_empty());
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Pair(i32, i32);

#[test]
fn custom_comparator_matrix() {
    let desc = |a: &i32, b: &i32| b.cmp(a);
    let mut tree = AvlTree::with_comparator(desc);
    tree.extend([1, 5, 3, 9]);
    assert_eq!(tree.in_order(), vec![9, 5, 3, 1]);
    assert_eq!(tree.find_successor(&5), Some(&3));
    tree.assert_valid().unwrap();

    let mut pairs = AvlTree::with_comparator(|a: &Pair, b: &Pair| (a.0, a.1).cmp(&(b.0, b.1)));
    pairs.insert(Pair(0, 1));
    pairs.insert(Pair(0, 0));
    pairs.insert(Pair(2, 3));
    assert!(!pairs.insert(Pair(0, 0)));
    assert_eq!(pairs.first(), Some(&Pair(0, 0)));
    assert_eq!(pairs.len(), 3);
}

#[test]
fn print_matrix() {
    let tree: AvlTree<i32> = [2, 1, 3].into_iter().collect();
    assert_eq!(
        tree.to_string(),
        "AvlTree 2 [h=1, bf=0]\nL=1 [h=0, bf=0]\n  L=∅\n  R=∅\nR=3 [h=0, bf=0]\n  L=∅\n  R=∅"
    );
    assert_eq!(format!("{tree:?}"), "{1, 2, 3}");
    assert_eq!(AvlTree::<i32>::new().to_string(), "AvlTree ∅");
}

#[test]
fn invariant_error_display_matrix() {
    assert_eq!(
        InvariantError::Unbalanced { bf: 2 }.to_string(),
        "AVL balance violated: balance factor 2"
    );
    assert_eq!(
        InvariantError::OrderViolated { index: 3 }.to_string(),
        "node order violated at in-order position 3"
    );
}
