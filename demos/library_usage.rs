use oxistr::scratch::SystemAllocator;
use oxistr::sequence::argsort;
use oxistr::similarity::levenshtein_utf8;
use oxistr::{hash, search, utf8};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let text = "Die STRAẞE nach Ἀθήνα ist lang.\r\nZweite Zeile.";
    let bytes = text.as_bytes();

    // Validation and scanning.
    assert!(utf8::valid(bytes));
    let (newline_at, newline_len) = utf8::find_newline(bytes).unwrap();
    println!("first line: {} bytes, terminator {} bytes", newline_at, newline_len);

    // Case-insensitive search: ẞ matches "ss".
    let (at, len) = utf8::case_insensitive_find(bytes, "straße".as_bytes()).unwrap();
    println!("found {:?} at byte {}", &text[at..at + len], at);

    // Plain substring search.
    assert_eq!(search::find(bytes, "Zeile".as_bytes()), Some(text.find("Zeile").unwrap()));

    // Streaming hash equals the one-shot hash.
    let mut state = hash::Hasher::new(42);
    for chunk in bytes.chunks(7) {
        state.update(chunk);
    }
    assert_eq!(state.digest(), hash::hash(bytes, 42));

    // Rune-level edit distance.
    let alloc = SystemAllocator;
    let d = levenshtein_utf8("kätzchen".as_bytes(), "sätzchen".as_bytes(), &alloc)?;
    println!("levenshtein(kätzchen, sätzchen) = {d}");

    // Lexicographic argsort over borrowed views.
    let words: Vec<&[u8]> = vec![b"pear", b"apple", b"orange"];
    let mut order = vec![0usize; words.len()];
    argsort(&words[..], &alloc, &mut order)?;
    let sorted: Vec<&str> = order
        .iter()
        .map(|&i| std::str::from_utf8(words[i]).unwrap())
        .collect();
    println!("sorted: {sorted:?}");

    Ok(())
}
