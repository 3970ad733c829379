use rand::RngCore;

pub fn generate_array<const N: usize>(rng: &mut impl RngCore) -> Result<[u8; N], rand::Error> {
    let mut buf = [0; N];
    rng.try_fill_bytes(&mut buf)?;
    Ok(buf)
}

/// a fresh rng together with its seed, so failing fuzz runs can be reported and replayed
#[allow(clippy::module_name_repetitions)]
#[cfg(test)]
pub fn seeded_rng() -> ([u8; 32], rand::rngs::StdRng) {
    let seed = generate_array(&mut rand::rngs::OsRng).expect("failed to generate seed");
    let rng = <rand::rngs::StdRng as rand::SeedableRng>::from_seed(seed);
    (seed, rng)
}
