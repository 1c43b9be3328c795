// Adapters layer: concrete implementations of the domain ports backed by the
// go toolchain and goda.

pub mod go_tools;

pub use go_tools::{GoModTidy, GoModuleResolver, GodaLister};
