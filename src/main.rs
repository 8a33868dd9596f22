use std::time::Instant;

use log::{info, LevelFilter};
use rand::prelude::SliceRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dynarray::{ArrayError, Complex, DynamicArray, SortAlgorithm};

fn verify_sorted<T: Ord>(arr: &DynamicArray<T>) {
    assert_eq!(arr.disordered(), 0);
}

/// Collects the elements of a sorted array whose magnitude falls in
/// `[min_mag, max_mag)`.
fn interval_search(
    parent: &DynamicArray<Complex>,
    min_mag: f64,
    max_mag: f64,
) -> DynamicArray<Complex> {
    let mut child = DynamicArray::new();
    for elem in parent {
        if elem.magnitude() >= min_mag && elem.magnitude() < max_mag {
            child.push_back(*elem);
        }
    }
    child
}

fn complex_demo(rng: &mut StdRng) -> Result<(), ArrayError> {
    let mut arr: DynamicArray<Complex> = DynamicArray::new();
    for _ in 0..20 {
        arr.push_back(Complex::new(
            (rng.gen_range(0..100) as f64) / 10.0,
            (rng.gen_range(0..100) as f64) / 10.0,
        ));
    }
    // seed some duplicates so deduplication has work to do
    for i in 0..arr.len() / 3 {
        let copy = *arr.at(rng.gen_range(0..arr.len()))?;
        *arr.at_mut(i)? = copy;
    }
    println!("generated: {:?}", arr);

    arr.unsort();
    println!("shuffled:  {:?}", arr);

    let probe = *arr.at(rng.gen_range(0..arr.len()))?;
    println!("find {} -> {:?}", probe, arr.find(&probe));

    let fresh = Complex::new(rng.gen_range(0..10) as f64, rng.gen_range(0..10) as f64);
    let at = arr.insert(rng.gen_range(0..arr.len()), fresh)?;
    println!("inserted {} at index {}", fresh, at);

    let gone = arr.remove(rng.gen_range(0..arr.len()))?;
    println!("removed {}", gone);

    let dropped = arr.deduplicate();
    println!("deduplicated {} elements: {:?}", dropped, arr);

    arr.sort(SortAlgorithm::Merge);
    verify_sorted(&arr);
    let dropped = arr.uniquify();
    println!("uniquified {} more after sorting: {:?}", dropped, arr);

    let lo = arr.at(arr.len() / 4)?.magnitude();
    let hi = arr.at(3 * arr.len() / 4)?.magnitude();
    let within = interval_search(&arr, lo, hi);
    println!("magnitudes in [{:.2}, {:.2}): {:?}", lo, hi, within);
    println!();
    Ok(())
}

fn time_sorts(rng: &mut StdRng, n: usize) {
    let ascending: Vec<i64> = (0..n as i64).collect();
    let descending: Vec<i64> = (0..n as i64).rev().collect();
    let mut random = ascending.clone();
    random.shuffle(rng);

    println!("timing {} algorithms on {} elements", SortAlgorithm::ALL.len(), n);
    for (shape, data) in [
        ("ascending", &ascending),
        ("descending", &descending),
        ("random", &random),
    ] {
        for algorithm in SortAlgorithm::ALL {
            let mut arr = DynamicArray::from_slice(data);
            let start = Instant::now();
            arr.sort(algorithm);
            let duration = start.elapsed();
            verify_sorted(&arr);
            println!("{:>10} sort, {:>10} input: {:?}", algorithm.name(), shape, duration);
        }
        println!();
    }
}

fn main() -> Result<(), ArrayError> {
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let mut rng = StdRng::seed_from_u64(12345);

    info!("complex-number container walkthrough");
    complex_demo(&mut rng)?;

    info!("sort timing comparison");
    time_sorts(&mut rng, 10_000);

    Ok(())
}
