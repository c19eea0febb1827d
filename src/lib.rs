#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use varmix_cfg as cfg;
pub use varmix_variant as variant;
