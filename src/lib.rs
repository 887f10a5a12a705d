#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use figura_render as render;
pub use figura_utils as utils;
pub use figura_value as value;

pub use figura_render::literally;
