// src/core/serialization/mod.rs

pub mod json_converter;

pub use json_converter::json_converters;
