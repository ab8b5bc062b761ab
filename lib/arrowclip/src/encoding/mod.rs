mod error;
pub use error::*;

mod io;
pub use io::*;

pub mod ascii85;

mod payload;
pub use payload::*;

mod tempo;
pub use tempo::*;

mod notes;
pub use notes::*;

#[cfg(test)]
mod test;
