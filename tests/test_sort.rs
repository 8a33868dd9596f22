use std::env;

use lazy_static::lazy_static;
use rand::prelude::SliceRandom;
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

use dynarray::{Complex, DynamicArray, SortAlgorithm};

lazy_static! {
    static ref SEED: u64 = initialize_seed();
    static ref NUM_RUNS: usize = get_num_runs();
    static ref MAX_ELEMENTS: usize = get_max_elements();
}

fn initialize_seed() -> u64 {
    let randomize_seed = env::var("RANDOMIZE_SEED")
        .map(|val| val == "true")
        .unwrap_or(false);

    if randomize_seed {
        let seed: u64 = thread_rng().gen_range(0..u64::MAX);
        println!("Seed: {}", seed);
        seed
    } else {
        let seed = env::var("SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(12345);
        println!("Seed: {}", seed);
        seed
    }
}

fn get_num_runs() -> usize {
    env::var("NUM_RUNS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(4)
}

fn get_max_elements() -> usize {
    env::var("MAX_ELEMENTS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(4096)
}

fn verify_sorted(arr: &[u64]) {
    for i in 1..arr.len() {
        assert!(
            arr[i - 1] <= arr[i],
            "Array not sorted! {} (i={}) > {} (i={}). Seed: {}",
            arr[i - 1],
            i - 1,
            arr[i],
            i,
            *SEED
        );
    }
}

#[test]
fn every_algorithm_sorts_and_preserves_the_multiset() {
    let mut rng = StdRng::seed_from_u64(*SEED);
    for algorithm in SortAlgorithm::ALL {
        let values: Vec<u64> = (0..1000).map(|_| rng.gen_range(0..500)).collect();
        let mut expected = values.clone();
        expected.sort();

        let mut arr = DynamicArray::from_slice(&values);
        arr.sort(algorithm);
        verify_sorted(arr.as_slice());
        assert_eq!(
            arr.as_slice(),
            expected.as_slice(),
            "{} sort changed the multiset",
            algorithm
        );
    }
}

#[test]
fn random_lengths_and_contents() {
    let mut rng = StdRng::seed_from_u64(*SEED);
    for i in 0..*NUM_RUNS {
        let n = rng.gen_range(1..*MAX_ELEMENTS);
        println!("i={i}, n={n}");
        let mut shuffle_rng = StdRng::seed_from_u64(*SEED + i as u64);
        let values: Vec<u64> = (0..n).map(|_| shuffle_rng.gen_range(0..u64::MAX)).collect();
        for algorithm in SortAlgorithm::ALL {
            let mut arr = DynamicArray::from_slice(&values);
            arr.sort(algorithm);
            verify_sorted(arr.as_slice());
        }
    }
}

#[test]
fn stable_algorithms_keep_equal_elements_in_order() {
    // key carries the order, tag is invisible to comparisons
    #[derive(Debug, Clone, Copy)]
    struct Tagged {
        key: u32,
        tag: usize,
    }
    impl PartialEq for Tagged {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }
    impl Eq for Tagged {}
    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
            Some(self.cmp(other))
        }
    }
    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> std::cmp::Ordering {
            self.key.cmp(&other.key)
        }
    }

    let keys = [4u32, 2, 2, 8, 5, 2];
    for algorithm in [
        SortAlgorithm::Bubble,
        SortAlgorithm::Insertion,
        SortAlgorithm::Merge,
    ] {
        assert!(algorithm.is_stable());
        let mut arr: DynamicArray<Tagged> = keys
            .iter()
            .enumerate()
            .map(|(tag, key)| Tagged { key: *key, tag })
            .collect();
        arr.sort(algorithm);

        let sorted_keys: Vec<u32> = arr.iter().map(|elem| elem.key).collect();
        assert_eq!(sorted_keys, vec![2, 2, 2, 4, 5, 8]);
        // the three equal 2s entered at tags 1, 2, 5 and must come out that way
        let equal_tags: Vec<usize> = arr
            .iter()
            .filter(|elem| elem.key == 2)
            .map(|elem| elem.tag)
            .collect();
        assert_eq!(equal_tags, vec![1, 2, 5], "{} sort was not stable", algorithm);
    }
}

#[test]
fn ascending_and_descending_complex_inputs() {
    let mut rng = StdRng::seed_from_u64(*SEED);
    let mut values: Vec<Complex> = (0..300)
        .map(|_| {
            Complex::new(
                rng.gen_range(0..100) as f64 / 10.0,
                rng.gen_range(0..100) as f64 / 10.0,
            )
        })
        .collect();
    values.sort();

    for algorithm in SortAlgorithm::ALL {
        let mut ascending = DynamicArray::from_slice(&values);
        ascending.sort(algorithm);
        assert_eq!(ascending.disordered(), 0);
        assert_eq!(ascending.as_slice(), values.as_slice());

        let reversed: Vec<Complex> = values.iter().rev().copied().collect();
        let mut descending = DynamicArray::from_slice(&reversed);
        descending.sort(algorithm);
        assert_eq!(descending.disordered(), 0);
        assert_eq!(descending.as_slice(), values.as_slice());
    }
}

#[test]
fn sort_by_decoded_id_matches_std_sort() {
    let mut rng = StdRng::seed_from_u64(*SEED);
    let values: Vec<u64> = (0..500).map(|_| rng.gen_range(0..100)).collect();
    let mut expected = values.clone();
    expected.sort();
    for id in 1..=6u8 {
        let algorithm = SortAlgorithm::from_id(id).unwrap();
        let mut arr = DynamicArray::from_slice(&values);
        arr.sort(algorithm);
        assert_eq!(arr.as_slice(), expected.as_slice(), "id {} ({})", id, algorithm);
    }
}

#[test]
fn full_range_sort_equals_whole_array_sort() {
    let mut shuffle_rng = StdRng::seed_from_u64(*SEED);
    let mut values: Vec<u64> = (0..777).collect();
    values.shuffle(&mut shuffle_rng);

    let mut ranged = DynamicArray::from_slice(&values);
    let mut whole = DynamicArray::from_slice(&values);
    ranged.sort_range(0, values.len(), SortAlgorithm::Merge).unwrap();
    whole.sort(SortAlgorithm::Merge);
    assert_eq!(ranged, whole);
}
