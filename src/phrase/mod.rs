//! Keyword and keyphrase extraction

pub mod chunker;
pub mod extraction;
