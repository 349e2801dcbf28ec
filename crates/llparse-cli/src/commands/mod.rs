pub mod ast;
pub mod dump;
pub mod eval;
pub mod trace;
