//! Date, phone and repeated-block shape detection.
//!
//! Shapes are matched with explicit digit-run scans instead of regex.

/// Maximal runs of ASCII digits.
fn digit_runs(chars: &[char]) -> Vec<String> {
    let mut runs = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i].is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            runs.push(chars[start..i].iter().collect());
        } else {
            i += 1;
        }
    }
    runs
}

fn is_year(n: u32) -> bool {
    (1900..=2099).contains(&n)
}

fn is_month(n: u32) -> bool {
    (1..=12).contains(&n)
}

fn is_day(n: u32) -> bool {
    (1..=31).contains(&n)
}

/// Parses 1..=max digits starting at `i`, longest first.
fn take_digits(chars: &[char], i: usize, min: usize, max: usize) -> Option<(u32, usize)> {
    for len in (min..=max).rev() {
        if i + len > chars.len() {
            continue;
        }
        let group = &chars[i..i + len];
        if group.iter().all(|c| c.is_ascii_digit()) {
            let value: String = group.iter().collect();
            return Some((value.parse().ok()?, i + len));
        }
    }
    None
}

fn delimited_date_at(chars: &[char], start: usize) -> bool {
    const SEPARATORS: &[char] = &['/', '-', '.'];

    // MM/DD/YYYY-like: d{1,2} sep d{1,2} sep d{2,4}
    if let Some((first, i)) = take_digits(chars, start, 1, 2) {
        for &sep in SEPARATORS {
            if chars.get(i) == Some(&sep) {
                if let Some((second, j)) = take_digits(chars, i + 1, 1, 2) {
                    if chars.get(j) == Some(&sep)
                        && take_digits(chars, j + 1, 2, 4).is_some()
                        && ((is_month(first) && is_day(second))
                            || (is_day(first) && is_month(second)))
                    {
                        return true;
                    }
                }
            }
        }
    }

    // YYYY-MM-DD-like: d{4} sep d{1,2} sep d{1,2}
    if let Some((year, i)) = take_digits(chars, start, 4, 4) {
        if is_year(year) {
            for &sep in SEPARATORS {
                if chars.get(i) == Some(&sep) {
                    if let Some((month, j)) = take_digits(chars, i + 1, 1, 2) {
                        if chars.get(j) == Some(&sep) {
                            if let Some((day, _)) = take_digits(chars, j + 1, 1, 2) {
                                if is_month(month) && is_day(day) {
                                    return true;
                                }
                            }
                        }
                    }
                }
            }
        }
    }

    false
}

/// Bare years (1900-2099), 4-digit MMDD/DDMM runs and delimited dates.
pub fn contains_date_pattern(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();

    for run in digit_runs(&chars) {
        if run.len() == 4 {
            let value: u32 = match run.parse() {
                Ok(v) => v,
                Err(_) => continue,
            };
            if is_year(value) {
                return true;
            }
            let head: u32 = run[..2].parse().unwrap_or(0);
            let tail: u32 = run[2..].parse().unwrap_or(0);
            if (is_month(head) && is_day(tail)) || (is_day(head) && is_month(tail)) {
                return true;
            }
        }
    }

    (0..chars.len()).any(|i| delimited_date_at(&chars, i))
}

fn dashed_phone_at(chars: &[char], start: usize) -> bool {
    // XXX-XXX-XXXX
    let shape = [3, 3, 4];
    let mut i = start;
    for (idx, &group_len) in shape.iter().enumerate() {
        if i + group_len > chars.len() || !chars[i..i + group_len].iter().all(|c| c.is_ascii_digit())
        {
            return false;
        }
        i += group_len;
        if idx < shape.len() - 1 {
            if chars.get(i) != Some(&'-') {
                return false;
            }
            i += 1;
        }
    }
    true
}

fn parenthesized_phone_at(chars: &[char], start: usize) -> bool {
    // (XXX) XXX-XXXX, space optional
    if chars.get(start) != Some(&'(') {
        return false;
    }
    let mut i = start + 1;
    if i + 3 > chars.len() || !chars[i..i + 3].iter().all(|c| c.is_ascii_digit()) {
        return false;
    }
    i += 3;
    if chars.get(i) != Some(&')') {
        return false;
    }
    i += 1;
    if chars.get(i) == Some(&' ') {
        i += 1;
    }
    dashed_phone_tail(chars, i)
}

fn dashed_phone_tail(chars: &[char], start: usize) -> bool {
    // XXX-XXXX
    let mut i = start;
    if i + 3 > chars.len() || !chars[i..i + 3].iter().all(|c| c.is_ascii_digit()) {
        return false;
    }
    i += 3;
    if chars.get(i) != Some(&'-') {
        return false;
    }
    i += 1;
    i + 4 <= chars.len() && chars[i..i + 4].iter().all(|c| c.is_ascii_digit())
}

/// US-style phone shapes: dashed 3-3-4, parenthesized area code, or a bare
/// 10-digit run.
pub fn contains_phone_pattern(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();

    if digit_runs(&chars).iter().any(|run| run.len() == 10) {
        return true;
    }

    (0..chars.len()).any(|i| dashed_phone_at(&chars, i) || parenthesized_phone_at(&chars, i))
}

/// Any 1-3 character block repeated at least 3 times contiguously.
pub fn contains_repeating_pattern(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    for block in 1..=3usize {
        if chars.len() < block * 3 {
            break;
        }
        for i in 0..=chars.len() - block * 3 {
            let first = &chars[i..i + block];
            if first == &chars[i + block..i + 2 * block]
                && first == &chars[i + 2 * block..i + 3 * block]
            {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_year() {
        assert!(contains_date_pattern("born1984"));
        assert!(contains_date_pattern("2024"));
        assert!(!contains_date_pattern("1776"));
    }

    #[test]
    fn test_mmdd_and_ddmm() {
        assert!(contains_date_pattern("xx0231"));
        assert!(contains_date_pattern("3112xx"));
        assert!(!contains_date_pattern("0000"));
    }

    #[test]
    fn test_delimited_dates() {
        assert!(contains_date_pattern("12/25/1990"));
        assert!(contains_date_pattern("25-12-90"));
        assert!(contains_date_pattern("1.1.2000"));
        assert!(contains_date_pattern("1990-12-25"));
        assert!(!contains_date_pattern("99/99/99"));
    }

    #[test]
    fn test_no_date_in_clean_string() {
        assert!(!contains_date_pattern("kTmQpL$x"));
        assert!(!contains_date_pattern(""));
    }

    #[test]
    fn test_dashed_phone() {
        assert!(contains_phone_pattern("555-123-4567"));
        assert!(!contains_phone_pattern("55-123-4567"));
    }

    #[test]
    fn test_parenthesized_phone() {
        assert!(contains_phone_pattern("(555) 123-4567"));
        assert!(contains_phone_pattern("(555)123-4567"));
    }

    #[test]
    fn test_bare_ten_digit_run() {
        assert!(contains_phone_pattern("5551234567"));
        // 11 digits is not a 10-digit run
        assert!(!contains_phone_pattern("55512345678"));
    }

    #[test]
    fn test_repeating_single_char() {
        assert!(contains_repeating_pattern("aaab"));
        assert!(!contains_repeating_pattern("aabb"));
    }

    #[test]
    fn test_repeating_blocks() {
        assert!(contains_repeating_pattern("ababab"));
        assert!(contains_repeating_pattern("xyzxyzxyz"));
        assert!(!contains_repeating_pattern("abab"));
        assert!(!contains_repeating_pattern("xyzxyz"));
    }
}
