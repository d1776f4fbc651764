#![doc = include_str!("../README.md")]

mod attributes;
mod class_list;
mod condition;
mod style_list;

pub use crate::attributes::{AttributeValue, Attributes, IntoAttributeValue};
pub use crate::class_list::{ClassListBuilder, IntoClassToken};
pub use crate::style_list::StyleListBuilder;
