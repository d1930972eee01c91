use std::collections::BTreeMap;

use order::OrderedMap;
use proptest::prelude::*;

const MAP_SIZE: usize = 300;

#[derive(Clone, Debug)]
enum Op {
    Put(u16, u32),
    DeleteMin,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..512u16, any::<u32>()).prop_map(|(k, v)| Op::Put(k, v)),
        1 => Just(Op::DeleteMin),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn matches_btree_map_after_every_mutation(ops in proptest::collection::vec(op(), 0..MAP_SIZE)) {
        let mut map = OrderedMap::new();
        let mut model = BTreeMap::new();

        for op in ops {
            match op {
                Op::Put(k, v) => {
                    prop_assert_eq!(map.put(k, v), model.insert(k, v));
                }
                Op::DeleteMin => {
                    prop_assert_eq!(map.delete_min(), model.pop_first());
                }
            }

            if let Err(e) = map.assert_valid() {
                return Err(TestCaseError::fail(e));
            }
            prop_assert_eq!(map.len(), model.len());
            prop_assert_eq!(map.is_empty(), model.is_empty());
            prop_assert_eq!(map.min(), model.keys().next());
        }

        let got: Vec<(u16, u32)> = map.iter().map(|(k, v)| (*k, *v)).collect();
        let want: Vec<(u16, u32)> = model.into_iter().collect();
        prop_assert_eq!(got, want);
    }

    #[test]
    fn get_returns_latest_value(
        inserts in proptest::collection::vec((0..1000i32, any::<i64>()), 0..MAP_SIZE),
        absent in proptest::collection::vec(1000..2000i32, 0..10),
    ) {
        let mut map = OrderedMap::new();
        let mut latest = BTreeMap::new();
        for (k, v) in &inserts {
            map.put(*k, *v);
            latest.insert(*k, *v);
        }

        for (k, v) in &latest {
            prop_assert_eq!(map.get(k), Some(v));
            prop_assert!(map.contains(k));
        }
        for k in &absent {
            prop_assert_eq!(map.get(k), None);
            prop_assert!(!map.contains(k));
        }
        prop_assert_eq!(map.len(), latest.len());
    }

    #[test]
    fn iteration_is_strictly_ascending(keys in proptest::collection::vec(any::<i32>(), 0..MAP_SIZE)) {
        let map: OrderedMap<i32, ()> = keys.iter().map(|k| (*k, ())).collect();

        let got: Vec<i32> = map.keys().copied().collect();
        prop_assert!(got.windows(2).all(|w| w[0] < w[1]));

        let mut want = keys.clone();
        want.sort_unstable();
        want.dedup();
        prop_assert_eq!(&got, &want);
        prop_assert_eq!(map.min(), got.first());
    }

    #[test]
    fn delete_min_drains_in_sorted_order(keys in proptest::collection::hash_set(any::<i32>(), 0..MAP_SIZE)) {
        let mut map: OrderedMap<i32, i32> = keys.iter().map(|k| (*k, k.wrapping_neg())).collect();

        let mut want: Vec<i32> = keys.into_iter().collect();
        want.sort_unstable();

        for k in want {
            prop_assert_eq!(map.delete_min(), Some((k, k.wrapping_neg())));
            if let Err(e) = map.assert_valid() {
                return Err(TestCaseError::fail(e));
            }
        }
        prop_assert_eq!(map.delete_min(), None);
        prop_assert!(map.is_empty());
    }

    #[test]
    fn height_stays_logarithmic(keys in proptest::collection::vec(any::<u32>(), 1..MAP_SIZE)) {
        let map: OrderedMap<u32, ()> = keys.iter().map(|k| (*k, ())).collect();
        let bound = 2.0 * ((map.len() + 1) as f64).log2();
        prop_assert!(map.height() as f64 <= bound, "height {} > {}", map.height(), bound);
    }
}

#[test]
fn ascending_and_descending_inserts_stay_balanced() {
    let mut asc = OrderedMap::new();
    let mut desc = OrderedMap::new();
    for i in 0..1024u32 {
        asc.put(i, ());
        desc.put(1023 - i, ());
    }
    asc.assert_valid().unwrap();
    desc.assert_valid().unwrap();
    assert!(asc.height() <= 20);
    assert!(desc.height() <= 20);
}
