#![no_main]
use libfuzzer_sys::fuzz_target;
use oxistr::utf8;

fuzz_target!(|data: &[u8]| {
    // Folding must be total over arbitrary bytes, stay within the 3x
    // budget, preserve validity of valid input, and be idempotent.
    let mut folded = vec![0u8; data.len() * 3];
    let written = utf8::case_fold(data, &mut folded);
    assert!(written <= folded.len());
    folded.truncate(written);

    if utf8::valid(data) {
        assert!(utf8::valid(&folded), "folding broke UTF-8 validity");

        let mut refolded = vec![0u8; folded.len() * 3];
        let rewritten = utf8::case_fold(&folded, &mut refolded);
        assert_eq!(&refolded[..rewritten], &folded[..], "folding not idempotent");
    }

    // Case-insensitive self-search must succeed on valid non-empty input
    // (bounded so the folded needle stays under the supported rune limit).
    if utf8::valid(data) && !data.is_empty() && data.len() <= 512 {
        let found = utf8::case_insensitive_find(data, data);
        assert_eq!(found, Some((0, data.len())));
    }
});
