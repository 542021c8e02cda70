use rand::rngs::StdRng;
use rand::SeedableRng;

const FNV_OFFSET: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 0x0100_0193;

/// RNG seeded from coordinates rounded to four decimals plus a per-generator salt.
pub(crate) fn geo_rng(lat: f64, lon: f64, salt: &str) -> StdRng {
    let key = format!("{lat:.4}{lon:.4}{salt}");
    let hash = key
        .bytes()
        .fold(FNV_OFFSET, |h, b| (h ^ u32::from(b)).wrapping_mul(FNV_PRIME));
    StdRng::seed_from_u64(u64::from(hash))
}
