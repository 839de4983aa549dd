use rand::Rng;
use rb_collections::{RedBlackMap, RedBlackSet};
use std::collections::{BTreeMap, BTreeSet};

const NUM_OF_OPERATIONS: usize = 100_000;

#[test]
fn int_test_red_black_map() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut map = RedBlackMap::new();
    let mut expected = BTreeMap::new();

    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.gen_range(0, 10_000);
        let val = rng.next_u32();

        if rng.gen::<bool>() {
            assert_eq!(map.insert(key, val), !expected.contains_key(&key));
            expected.entry(key).or_insert(val);
        } else {
            assert_eq!(map.remove(&key), expected.remove_entry(&key));
        }
        assert_eq!(map.len(), expected.len());
    }

    assert!(map.verify());
    assert_eq!(map.min(), expected.keys().next());
    assert_eq!(map.max(), expected.keys().next_back());
    assert_eq!(
        map.iter().collect::<Vec<(&u32, &u32)>>(),
        expected.iter().collect::<Vec<(&u32, &u32)>>(),
    );
    assert_eq!(
        map.into_iter().collect::<Vec<(u32, u32)>>(),
        expected.into_iter().collect::<Vec<(u32, u32)>>(),
    );
}

#[test]
fn int_test_red_black_set_invariants_after_every_operation() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);

    for _ in 0..1000 {
        let mut set = RedBlackSet::new();
        let mut expected = BTreeSet::new();

        for _ in 0..200 {
            let key = rng.gen_range(0, 100);
            if rng.gen_range(0, 3) < 2 {
                assert_eq!(set.insert(key), expected.insert(key));
            } else {
                assert_eq!(set.remove(&key).is_some(), expected.remove(&key));
            }
            assert_eq!(set.validate(), Ok(()));
            assert_eq!(set.len(), expected.len());
        }

        assert_eq!(
            set.iter().collect::<Vec<&u32>>(),
            expected.iter().collect::<Vec<&u32>>(),
        );
    }
}

#[test]
fn int_test_red_black_set_neighbours() {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = RedBlackSet::new();
    let mut expected = BTreeSet::new();

    for _ in 0..1000 {
        let key = rng.gen_range(0, 5000);
        set.insert(key);
        expected.insert(key);
    }

    for key in 0..5000 {
        if expected.contains(&key) {
            assert_eq!(set.predecessor(&key), expected.range(..key).next_back());
            assert_eq!(set.successor(&key), expected.range(key + 1..).next());
        } else {
            assert_eq!(set.predecessor(&key), None);
            assert_eq!(set.successor(&key), None);
        }
        assert_eq!(set.floor(&key), expected.range(..=key).next_back());
        assert_eq!(set.ceil(&key), expected.range(key..).next());
    }
}

#[test]
fn int_test_red_black_set_height_bound() {
    let mut set = RedBlackSet::new();
    for key in 0..(1u32 << 14) {
        set.insert(key);
    }
    for key in (0..(1u32 << 14)).filter(|key| key % 3 == 0) {
        set.remove(&key);
    }

    let bound = 2.0 * ((set.len() + 1) as f64).log2();
    assert!((set.height() as f64) <= bound);
    assert!(set.verify());
}
