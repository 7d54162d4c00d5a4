// Folds stdin-sized text in memory and de-duplicates lines
// case-insensitively, showing the fold + hash + intersect kernels working
// together.

use oxistr::scratch::SystemAllocator;
use oxistr::sequence::intersect;
use oxistr::utf8;

fn fold_line(line: &str) -> Vec<u8> {
    let mut out = vec![0u8; line.len() * 3];
    let written = utf8::case_fold(line.as_bytes(), &mut out);
    out.truncate(written);
    out
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let left = ["Straße", "Apfel", "ZEBRA", "ﬁnal"];
    let right = ["strasse", "zebra", "FINAL", "birne"];

    let left_folded: Vec<Vec<u8>> = left.iter().map(|l| fold_line(l)).collect();
    let right_folded: Vec<Vec<u8>> = right.iter().map(|l| fold_line(l)).collect();

    let mut out_a = vec![0usize; left.len() * right.len()];
    let mut out_b = vec![0usize; left.len() * right.len()];
    let count = intersect(
        &left_folded,
        &right_folded,
        &SystemAllocator,
        0xFEED,
        true,
        &mut out_a,
        &mut out_b,
    )?;

    println!("{count} case-insensitive matches:");
    for k in 0..count {
        println!("  {:?} == {:?}", left[out_a[k]], right[out_b[k]]);
    }
    Ok(())
}
