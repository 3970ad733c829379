pub mod big_int;

pub use big_int::{BigInt as BigInt128, SigNum};

mod util {
    pub mod rng;
}
