#![deny(rust_2018_idioms)]
#![deny(future_incompatible)]

mod combine;
mod convert;
mod error;
mod minimize;
mod model;
mod table;
mod variant;

pub mod dfa;
pub mod enfa;
pub mod nfa;

pub use convert::Determinized;
pub use dfa::DFA;
pub use enfa::ENFA;
pub use error::{InvalidSymbolError, MalformedAutomatonError, Result, RunError};
pub use minimize::Minimized;
pub use model::{Alphabet, Automaton, Edge, State, StateSet, Symbol, Transition};
pub use nfa::NFA;
pub use table::Table;
pub use variant::AnyAutomaton;
