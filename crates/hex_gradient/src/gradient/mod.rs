pub mod scale;
pub mod sequence;
pub mod split;
