//! Built-in password lexicon and topic word tables.
//!
//! All tables are static and case-folded. The custom blacklist (see
//! [`crate::blacklist`]) extends the built-in lists at runtime.

use super::leet::normalize_leet;

/// Most common passwords seen in public dumps.
pub(crate) const COMMON_PASSWORDS: &[&str] = &[
    "password", "123456", "123456789", "12345678", "12345", "1234", "111111",
    "1234567", "dragon", "123123", "baseball", "abc123", "football", "monkey",
    "letmein", "696969", "shadow", "master", "666666", "qwertyuiop", "123321",
    "mustang", "1234567890", "michael", "654321", "superman", "1qaz2wsx",
    "7777777", "121212", "000000", "qwerty", "qazwsx", "123qwe", "killer",
    "trustno1", "jordan", "jennifer", "zxcvbnm", "asdfgh", "hunter", "buster",
    "soccer", "harley", "batman", "andrew", "tigger", "sunshine", "iloveyou",
    "2000", "charlie", "robert", "thomas", "hockey", "ranger", "daniel",
    "starwars", "klaster", "112233", "george", "computer", "michelle",
    "jessica", "pepper", "1111", "zxcvbn", "555555", "11111111", "131313",
    "freedom", "777777", "pass", "maggie", "159753", "aaaaaa", "ginger",
    "princess", "joshua", "cheese", "amanda", "summer", "love", "ashley",
    "nicole", "chelsea", "biteme", "matthew", "access", "yankees", "987654321",
    "dallas", "austin", "thunder", "taylor", "matrix", "admin", "welcome",
    "login", "hello", "passw0rd", "password1", "password123", "secret",
    "whatever", "donald", "qwerty123", "letmein1",
];

/// Extended lexicon: weaker but still guessable passwords that hybrid
/// attacks try early.
pub(crate) const EXTENDED_PASSWORDS: &[&str] = &[
    "mobilemail", "marlboro", "srinivas", "internet", "action", "carter",
    "jasper", "monster", "teresa", "jeremy", "11111", "purple", "sparky",
    "yellow", "camaro", "gizmo", "peanut", "spider", "liverpool", "corvette",
    "mercedes", "bigdog", "spanky", "bitch", "cameron", "money", "carlos",
    "phoenix", "mickey", "bailey", "knight", "iceman", "tigers", "diamond",
    "redsox", "banana", "horny", "blowme", "ferrari", "cookie", "nascar",
    "coffee", "scooby", "winter", "brandy", "compaq", "merlin", "cowboy",
    "apollo", "parker", "xavier", "steelers", "smokey", "sierra", "winner",
    "wizard", "doctor", "gateway", "golfer", "heaven", "hammer", "topgun",
    "bronco", "hannah", "sandra", "midnight", "college", "angel", "junior",
    "booboo", "united", "turtle", "tiffany", "profit", "chicken", "boston",
    "eagles", "lakers", "samsung", "iphone", "nirvana", "metallica",
    "slipknot", "pokemon", "arsenal", "chocolate", "orange", "flower",
    "silver", "golden", "bandit", "marine", "maverick", "falcon", "rainbow",
    "snoopy", "warrior", "scorpio", "mountain", "victory", "service",
    "captain", "october", "november", "december", "spring", "autumn",
    "guitar", "piano", "rocket", "planet", "castle", "garden",
];

const COLORS: &[&str] = &[
    "black", "white", "blue", "green", "yellow", "purple", "orange", "pink",
    "brown", "silver", "golden", "violet",
];

const ANIMALS: &[&str] = &[
    "tiger", "lion", "bear", "wolf", "eagle", "horse", "dragon", "monkey",
    "panda", "shark", "snake", "falcon", "rabbit", "turtle",
];

const SPORTS: &[&str] = &[
    "soccer", "football", "baseball", "basketball", "hockey", "tennis",
    "golf", "rugby", "cricket", "boxing",
];

const MONTHS: &[&str] = &[
    "january", "february", "march", "april", "june", "july", "august",
    "september", "october", "november", "december",
];

const DAYS: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday",
    "sunday",
];

/// Topic categories scanned in fixed order.
const TOPICS: &[&[&str]] = &[COLORS, ANIMALS, SPORTS, MONTHS, DAYS];

const FIRST_NAMES: &[&str] = &[
    "james", "john", "robert", "michael", "william", "david", "richard",
    "joseph", "thomas", "charles", "daniel", "matthew", "anthony", "mark",
    "donald", "steven", "paul", "andrew", "joshua", "kenneth", "mary",
    "patricia", "jennifer", "linda", "elizabeth", "barbara", "susan",
    "jessica", "sarah", "karen", "emily", "ashley", "amanda", "melissa",
    "deborah", "stephanie", "rebecca", "laura", "sharon", "cynthia",
];

/// Number of entries hybrid attacks are assumed to seed from.
pub fn extended_lexicon_size() -> usize {
    COMMON_PASSWORDS.len() + EXTENDED_PASSWORDS.len()
}

fn in_builtin_lexicon(folded: &str) -> bool {
    COMMON_PASSWORDS.contains(&folded) || EXTENDED_PASSWORDS.contains(&folded)
}

/// Exact match against the built-in lists and the custom blacklist,
/// case-insensitive.
pub fn is_common_password(password: &str) -> bool {
    let folded = password.to_lowercase();
    in_builtin_lexicon(&folded) || crate::blacklist::is_blacklisted(&folded)
}

/// Exact match after leet normalization ("P@ssw0rd" -> "password").
pub fn is_common_after_leet(password: &str) -> bool {
    let normalized = normalize_leet(password);
    in_builtin_lexicon(&normalized) || crate::blacklist::is_blacklisted(&normalized)
}

/// Every lexicon entry of length >= 4 occurring as a substring of the
/// leet-normalized, case-folded password.
pub fn extract_dictionary_substrings(password: &str) -> Vec<&'static str> {
    let normalized = normalize_leet(password);
    COMMON_PASSWORDS
        .iter()
        .chain(EXTENDED_PASSWORDS.iter())
        .filter(|word| word.len() >= 4 && normalized.contains(*word))
        .copied()
        .collect()
}

/// First topic word found as a substring, scanning categories in order and
/// stopping at the first hit.
pub fn topic_word_hit(password: &str) -> Option<&'static str> {
    let folded = password.to_lowercase();
    for category in TOPICS {
        if let Some(word) = category.iter().find(|w| folded.contains(**w)) {
            return Some(*word);
        }
    }
    None
}

/// First name found as a substring of the case-folded password.
pub fn first_name_hit(password: &str) -> Option<&'static str> {
    let folded = password.to_lowercase();
    FIRST_NAMES.iter().find(|n| folded.contains(*n)).copied()
}
