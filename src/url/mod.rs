//! Low-level URL primitives shared by the state and viewport codecs.

mod encoding;
mod fragment;
mod query;

pub use encoding::{decode_component, encode_component};
pub use fragment::Fragment;
pub use query::QueryParams;
