//! Event payload decoders
//!
//! Three independent decoders for the known event families: aggregate count
//! results (0x24), per-banknote transaction records (0x23), and the device
//! status flag field (0x48). Each consumes a full byte sequence as parsed
//! from a block and skips the 3 leading header bytes itself.

pub mod count;
pub mod errors;
pub mod item;

pub use count::decode_count;
pub use errors::decode_errors;
pub use item::decode_item;

/// Header/command bytes preceding every event payload
pub(crate) const HEADER_LEN: usize = 3;
