#![cfg(test)]

// Property tests for HashTable kept inside the crate so they can reach the
// slot layout directly.

use crate::config::TableConfig;
use crate::error::TableError;
use crate::hash_table::HashTable;
use crate::probe::ProbeStrategy;
use crate::slot::Slot;
use proptest::prelude::*;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hasher};

// Pool-indexed operations to improve shrinking: indices shrink to earlier keys,
// pool length shrinks, and op lists shrink in length.
#[derive(Clone, Debug)]
enum OpI {
    Insert(usize, u16),
    Delete(usize),
    Search(usize),
    SearchRaw(String),
    Iterate,
}

fn arb_scenario() -> impl Strategy<Value = (Vec<String>, Vec<OpI>)> {
    proptest::collection::vec("[a-z]{1,5}", 1..=12).prop_flat_map(|pool| {
        let idxs: Vec<usize> = (0..pool.len()).collect();
        let idx = proptest::sample::select(idxs);
        let op = prop_oneof![
            3 => (idx.clone(), any::<u16>()).prop_map(|(i, v)| OpI::Insert(i, v)),
            2 => idx.clone().prop_map(OpI::Delete),
            2 => idx.clone().prop_map(OpI::Search),
            1 => "[a-z]{0,5}".prop_map(OpI::SearchRaw),
            1 => Just(OpI::Iterate),
        ];
        proptest::collection::vec(op, 1..80).prop_map(move |ops| (pool.clone(), ops))
    })
}

#[derive(Clone, Default)]
struct ConstBuildHasher;
struct ConstHasher;
impl BuildHasher for ConstBuildHasher {
    type Hasher = ConstHasher;
    fn build_hasher(&self) -> Self::Hasher {
        ConstHasher
    }
}
impl Hasher for ConstHasher {
    fn write(&mut self, _bytes: &[u8]) {}
    fn finish(&self) -> u64 {
        0
    }
}

// State-machine equivalence against std::collections::HashMap, shared by the
// hasher variants below. Capacity is smaller than some pools so TableFull is
// exercised too.
fn run_state_machine<S: BuildHasher>(
    mut sut: HashTable<S>,
    pool: &[String],
    ops: Vec<OpI>,
) -> Result<(), TestCaseError> {
    let mut model: HashMap<String, String> = HashMap::new();

    for op in ops {
        match op {
            OpI::Insert(i, v) => {
                let k = &pool[i];
                let v = v.to_string();
                let tombstones = sut.tombstones();
                match sut.insert(k, &v) {
                    Ok(prev) => {
                        prop_assert_eq!(prev, model.insert(k.clone(), v));
                    }
                    Err(TableError::TableFull { capacity }) => {
                        prop_assert!(!model.contains_key(k), "updates never need a free slot");
                        prop_assert_eq!(capacity, sut.capacity());
                        prop_assert_eq!(model.len(), capacity);
                        prop_assert_eq!(tombstones, 0);
                    }
                    Err(e) => prop_assert!(false, "unexpected error: {e}"),
                }
            }
            OpI::Delete(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.delete(k), model.remove(k));
                prop_assert!(sut.search(k).is_none());
            }
            OpI::Search(i) => {
                let k = &pool[i];
                prop_assert_eq!(sut.search(k), model.get(k).map(String::as_str));
            }
            OpI::SearchRaw(s) => {
                prop_assert_eq!(sut.search(&s), model.get(&s).map(String::as_str));
                prop_assert_eq!(sut.contains_key(&s), model.contains_key(&s));
            }
            OpI::Iterate => {
                let s: BTreeMap<_, _> = sut.iter().collect();
                let m: BTreeMap<_, _> =
                    model.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
                prop_assert_eq!(s, m);
            }
        }

        // Slot accounting after each op
        let occupied = sut.slots().filter(|(_, s)| s.is_occupied()).count();
        let deleted = sut.slots().filter(|(_, s)| matches!(s, Slot::Deleted)).count();
        prop_assert_eq!(occupied, sut.count());
        prop_assert_eq!(deleted, sut.tombstones());
        prop_assert_eq!(sut.count(), model.len());
        prop_assert!(sut.count() <= sut.capacity());
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 128, .. ProptestConfig::default() })]

    #[test]
    fn prop_state_machine((pool, ops) in arb_scenario(), cap in 1usize..16) {
        run_state_machine(HashTable::new(cap).unwrap(), &pool, ops)?;
    }

    #[test]
    fn prop_state_machine_double_hash((pool, ops) in arb_scenario(), cap in 1usize..16) {
        let config = TableConfig::new(cap).probe(ProbeStrategy::DoubleHash);
        run_state_machine(HashTable::with_config(config).unwrap(), &pool, ops)?;
    }

    // Worst-case collisions: every key shares one probe run, so tombstone
    // skip-through and reuse are exercised on nearly every op.
    #[test]
    fn prop_state_machine_with_collisions((pool, ops) in arb_scenario(), cap in 1usize..16) {
        let sut = HashTable::with_hasher(cap, ConstBuildHasher).unwrap();
        run_state_machine(sut, &pool, ops)?;
    }

    // With growth enabled, inserts never fail and the threshold holds.
    #[test]
    fn prop_growth_never_full((pool, ops) in arb_scenario(), lf in 0.3f64..=1.0) {
        let config = TableConfig::new(1).max_load_factor(lf);
        let mut sut = HashTable::with_config(config).unwrap();
        let mut model: HashMap<String, String> = HashMap::new();
        for op in ops {
            match op {
                OpI::Insert(i, v) => {
                    let v = v.to_string();
                    prop_assert_eq!(sut.insert(&pool[i], &v).unwrap(), model.insert(pool[i].clone(), v));
                    prop_assert!(sut.load_factor() <= lf);
                }
                OpI::Delete(i) => {
                    prop_assert_eq!(sut.delete(&pool[i]), model.remove(&pool[i]));
                }
                _ => {}
            }
            for (k, v) in &model {
                prop_assert_eq!(sut.search(k), Some(v.as_str()));
            }
        }
    }
}
