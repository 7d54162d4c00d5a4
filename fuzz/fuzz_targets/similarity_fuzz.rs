#![no_main]
use libfuzzer_sys::fuzz_target;
use oxistr::scratch::SystemAllocator;
use oxistr::similarity::levenshtein;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() || data.len() > 512 {
        return;
    }
    let split = (data[0] as usize + 1) % data.len();
    let (a, b) = data.split_at(split);

    let alloc = SystemAllocator;
    let dab = levenshtein(a, b, &alloc).unwrap();
    let dba = levenshtein(b, a, &alloc).unwrap();
    assert_eq!(dab, dba, "distance must be symmetric");
    assert!(dab >= a.len().abs_diff(b.len()));
    assert!(dab <= a.len().max(b.len()));
    assert_eq!(levenshtein(a, a, &alloc).unwrap(), 0);
});
