// crates/lexdrift-cli/src/commands/mod.rs
//
// Command module declarations for the Lexdrift CLI.

pub mod distance;
pub mod run;
pub mod tokenize;
pub mod variants;
