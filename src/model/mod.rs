// src/model/mod.rs
//
// Wire types for the Fashion Data Engine API. Field names follow the JSON
// exactly; nullable fields are `Option<T>`.

mod admin;
mod catalog;
mod editorial;
mod money;
mod product;
mod purchase;

pub use admin::*;
pub use catalog::*;
pub use editorial::*;
pub use money::Krw;
pub use product::*;
pub use purchase::*;
