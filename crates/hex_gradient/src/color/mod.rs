pub mod hex;
pub mod rgb;
