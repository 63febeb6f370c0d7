use std::env;

use once_cell::sync::OnceCell;
use rand::distributions::uniform::SampleRange;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Length of the strings produced by [`random_str`].
pub const STR_LEN: usize = 5;

static SEED: OnceCell<u64> = OnceCell::new();

/// Seed shared by every generator in this process.
///
/// Chosen at random once per run, unless overridden via the `OVERRIDE_SEED`
/// environment variable. Re-running with the printed/exported seed reproduces
/// the exact same inputs.
pub fn random_init_seed() -> u64 {
    *SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(val) => val
            .parse()
            .expect("invalid OVERRIDE_SEED value, expected u64"),
        Err(_) => thread_rng().gen(),
    })
}

fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}

/// Random `i32` values from the full value domain.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = seeded_rng();
    (0..len).map(|_| rng.gen()).collect()
}

/// Random `i32` values drawn uniformly from `range`.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: SampleRange<i32> + Clone,
{
    let mut rng = seeded_rng();
    (0..len).map(|_| rng.gen_range(range.clone())).collect()
}

/// Random `f64` values drawn uniformly from the half-open `[min, max)`.
pub fn random_f64_uniform(len: usize, min: f64, max: f64) -> Vec<f64> {
    let mut rng = seeded_rng();
    (0..len).map(|_| rng.gen_range(min..max)).collect()
}

/// Random strings of [`STR_LEN`] lowercase letters, each character drawn
/// independently.
pub fn random_str(len: usize) -> Vec<String> {
    let mut rng = seeded_rng();
    (0..len)
        .map(|_| {
            (0..STR_LEN)
                .map(|_| rng.gen_range(b'a'..=b'z') as char)
                .collect()
        })
        .collect()
}

/// Zipfian distributed values, i.e. heavily skewed towards a couple of hot
/// values. Exercises inputs with many duplicates.
pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    let mut rng = seeded_rng();
    let dist = zipf::ZipfDistribution::new(len.max(1), exponent).unwrap();
    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

/// Already sorted input.
pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

/// Reverse sorted input, the adversarial case for the fixed-pivot quicksort.
pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// All elements equal.
pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}
