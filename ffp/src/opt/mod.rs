pub mod dedup;
pub mod filler;
pub mod packer;
pub mod placer;
pub mod strategy;
