#![forbid(unsafe_code)]

pub use sorteringen_core as core;
pub use sorteringen_xml as xml;
pub use sorteringen_c14n as c14n;
