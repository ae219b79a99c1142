// error_chain macro can recurse deeply
#![recursion_limit = "1024"]

#[macro_use]
extern crate error_chain;
#[macro_use(lazy_static)]
extern crate lazy_static;

pub mod args;
pub mod commands;
pub mod constants;
pub mod cut;
pub mod digest;
pub mod enzyme;
pub mod errors;
pub mod fragment;
pub mod iupac;
pub mod pattern;
pub mod progress;
pub mod report;
pub mod sequence;
pub mod site;
pub mod table;
