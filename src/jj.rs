//! Main module for jjformat library functionality

pub mod formatting;
pub mod lexing;
pub mod testing;
pub mod token;
