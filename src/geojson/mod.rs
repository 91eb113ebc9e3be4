pub mod encoder;
pub mod feature;
