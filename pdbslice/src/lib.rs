pub mod test_utils;

pub mod application;
pub mod fragment;
pub mod parsers;
pub mod sequence;
pub mod source;
