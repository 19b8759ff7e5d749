//! Static pattern tables and pure detection predicates.
//!
//! Each submodule covers one family of guessable structure.

mod keyboard;
mod leet;
mod lexicon;
mod shapes;

pub use keyboard::{contains_keyboard_pattern, contains_sequential_pattern};
pub use leet::{contains_leet, normalize_leet};
pub use lexicon::{
    extended_lexicon_size, extract_dictionary_substrings, first_name_hit, is_common_after_leet,
    is_common_password, topic_word_hit,
};
pub use shapes::{contains_date_pattern, contains_phone_pattern, contains_repeating_pattern};
