//! platform-utils
//!
//! A small collection of stateless array and string manipulation helpers.
//! Every function is a single-pass, synchronous transformation over
//! caller-owned data: inputs are borrowed read-only, outputs are newly
//! allocated containers or borrowed subslices.
//!
//! # Features
//!
//! - **Array helpers**: shuffle (optionally seeded), head/tail concat,
//!   default-initialized allocation, non-boxing slice views
//! - **String helpers**: fast single-char split, first/last occurrence
//!   replace, first/last char checks, UTF-8 byte length, trailing-char trim
//!
//! # Quick Start
//!
//! ```rust
//! use platform_utils::{concat_back, split};
//!
//! let tags = concat_back(&["alpha", "beta"], "gamma");
//! assert_eq!(tags, vec!["alpha", "beta", "gamma"]);
//!
//! let parts = split(Some("a,,b"), ',', 4);
//! assert_eq!(parts, Some(vec!["a".to_string(), "b".to_string()]));
//! ```

/// Crate version constant
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod array;
pub mod strings;

// Re-export commonly used utilities
pub use array::{
    shuffle,
    shuffle_with,
    concat_front,
    concat_back,
    new_array,
    as_list,
    SliceList,
};

pub use strings::{
    split,
    replace_first,
    replace_last,
    starts_with_char,
    ends_with_char,
    utf8_encoded_length,
    remove_trailing_char,
};
