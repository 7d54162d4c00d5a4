#![no_main]
use libfuzzer_sys::fuzz_target;
use oxistr::search;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte sizes the needle; the rest is the haystack.
    let needle_len = (data[0] as usize) % 16;
    let payload = &data[1..];
    if payload.len() < needle_len {
        return;
    }
    let (needle, haystack) = payload.split_at(needle_len);

    let expected = if needle.is_empty() {
        Some(0)
    } else {
        haystack.windows(needle.len()).position(|w| w == needle)
    };
    assert_eq!(search::find(haystack, needle), expected);

    let expected_rev = if needle.is_empty() {
        Some(haystack.len())
    } else if needle.len() <= haystack.len() {
        (0..=haystack.len() - needle.len())
            .rev()
            .find(|&i| &haystack[i..i + needle.len()] == needle)
    } else {
        None
    };
    assert_eq!(search::rfind(haystack, needle), expected_rev);

    if let Some(&byte) = needle.first() {
        assert_eq!(
            search::find_byte(haystack, byte),
            haystack.iter().position(|&b| b == byte)
        );
        assert_eq!(
            search::rfind_byte(haystack, byte),
            haystack.iter().rposition(|&b| b == byte)
        );
    }
});
