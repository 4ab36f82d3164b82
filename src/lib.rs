#![deny(rust_2018_idioms)]
#![deny(future_incompatible)]

mod regexp;

pub use automata;
pub use fare_compiler as compiler;
pub use regexp::*;
