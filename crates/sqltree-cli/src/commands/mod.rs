pub mod check;
pub mod source_loader;
pub mod trace;
pub mod tree;
