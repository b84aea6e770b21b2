//! Manifest codecs.

mod yaml;

pub use yaml::YamlCodec;
