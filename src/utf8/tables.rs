// Case-folding data: full (locale-independent) Unicode folding, per
// CaseFolding.txt, Unicode 17.0.
//
// Three sorted side tables cover everything outside ASCII:
//   - `RANGE_FOLDS`: contiguous codepoint ranges folded by one additive
//     delta (Cyrillic +0x20, Armenian +0x30, Greek Extended -8, ...).
//   - `PARITY_FOLDS`: ranges where every second codepoint is uppercase and
//     folds to its successor (Latin Extended-A/B, Coptic, ...). A codepoint
//     folds iff it shares the parity of the range start.
//   - `IRREGULAR_FOLDS`: one-to-one singletons that fit no range.
//   - `EXPANSIONS`: one-to-many folds, at most three runes out.
//
// Simple folding of U+0130 (LATIN CAPITAL LETTER I WITH DOT ABOVE) and
// ASCII `I` is intentional: no Turkic special casing anywhere.

/// Contiguous range folded by adding `delta`.
#[derive(Debug, Clone, Copy)]
pub struct RangeFold {
    pub first: u32,
    pub last: u32,
    pub delta: i32,
}

const fn range(first: u32, last: u32, delta: i32) -> RangeFold {
    RangeFold { first, last, delta }
}

/// Additive folding ranges, sorted by `first`, non-overlapping.
pub const RANGE_FOLDS: &[RangeFold] = &[
    range(0x00C0, 0x00D6, 0x20),    // Latin-1 À-Ö (× excluded)
    range(0x00D8, 0x00DE, 0x20),    // Latin-1 Ø-Þ (ß expands instead)
    range(0x0388, 0x038A, 0x25),    // Greek Έ-Ί
    range(0x0391, 0x03A1, 0x20),    // Greek Α-Ρ
    range(0x03A3, 0x03AB, 0x20),    // Greek Σ-Ϋ
    range(0x03FD, 0x03FF, -130),    // Greek Ͻ-Ͽ
    range(0x0400, 0x040F, 0x50),    // Cyrillic Ѐ-Џ
    range(0x0410, 0x042F, 0x20),    // Cyrillic А-Я
    range(0x0531, 0x0556, 0x30),    // Armenian Ա-Ֆ
    range(0x10A0, 0x10C5, 0x1C60),  // Georgian Ⴀ-Ⴥ
    range(0x13F8, 0x13FD, -8),      // Cherokee Ᏸ-Ᏽ
    range(0x1C90, 0x1CBA, -0xBC0),  // Georgian Mtavruli Ა-Ჺ
    range(0x1CBD, 0x1CBF, -0xBC0),  // Georgian Mtavruli Ჽ-Ჿ
    range(0x1F08, 0x1F0F, -8),      // Greek Extended Ἀ-Ἇ
    range(0x1F18, 0x1F1D, -8),      // Greek Extended Ἐ-Ἕ
    range(0x1F28, 0x1F2F, -8),      // Greek Extended Ἠ-Ἧ
    range(0x1F38, 0x1F3F, -8),      // Greek Extended Ἰ-Ἷ
    range(0x1F48, 0x1F4D, -8),      // Greek Extended Ὀ-Ὅ
    range(0x1F68, 0x1F6F, -8),      // Greek Extended Ὠ-Ὧ
    range(0x1FC8, 0x1FCB, -86),     // Greek Extended Ὲ-Ή
    range(0x2160, 0x216F, 0x10),    // Roman numerals Ⅰ-Ⅿ
    range(0x24B6, 0x24CF, 0x1A),    // Circled Ⓐ-Ⓩ
    range(0x2C00, 0x2C2F, 0x30),    // Glagolitic Ⰰ-Ⱟ
    range(0xAB70, 0xABBF, -0x97D0), // Cherokee Ꭰ-Ᏼ (to 13A0-13EF)
    range(0xFF21, 0xFF3A, 0x20),    // Fullwidth Ａ-Ｚ
    range(0x10400, 0x10427, 0x28),  // Deseret
    range(0x104B0, 0x104D3, 0x28),  // Osage
    range(0x10570, 0x1057A, 0x27),  // Vithkuqi, first block
    range(0x1057C, 0x1058A, 0x27),  // Vithkuqi, second block
    range(0x1058C, 0x10592, 0x27),  // Vithkuqi, third block
    range(0x10C80, 0x10CB2, 0x40),  // Old Hungarian
    range(0x10D50, 0x10D65, 0x20),  // Garay
    range(0x118A0, 0x118BF, 0x20),  // Warang Citi
    range(0x16E40, 0x16E5F, 0x20),  // Medefaidrin
    range(0x16EA0, 0x16EB8, 0x1B),  // Beria Erfe
    range(0x1E900, 0x1E921, 0x22),  // Adlam
];

/// Alternating-case ranges: a codepoint folds by +1 iff it shares the
/// parity of the range start. Sorted by start, non-overlapping.
pub const PARITY_FOLDS: &[(u32, u32)] = &[
    (0x0100, 0x012E), // Latin Extended-A Ā-Į
    (0x0132, 0x0136), // Latin Extended-A Ĳ-Ķ
    (0x0139, 0x0147), // Latin Extended-A Ĺ-Ň
    (0x014A, 0x0176), // Latin Extended-A Ŋ-Ŷ
    (0x0179, 0x017D), // Latin Extended-A Ź-Ž
    (0x01CD, 0x01DB), // Latin Extended-B Ǎ-Ǜ
    (0x01DE, 0x01EE), // Latin Extended-B Ǟ-Ǯ
    (0x01F8, 0x01FE), // Latin Extended-B Ǹ-Ǿ
    (0x0200, 0x021E), // Latin Extended-B Ȁ-Ȟ
    (0x0222, 0x0232), // Latin Extended-B Ȣ-Ȳ
    (0x0246, 0x024E), // Latin Extended-B Ɇ-Ɏ
    (0x0370, 0x0372), // Greek archaic Ͱ-Ͳ
    (0x03D8, 0x03EE), // Greek archaic Ϙ-Ϯ
    (0x0460, 0x0480), // Cyrillic Ѡ-Ҁ
    (0x048A, 0x04BE), // Cyrillic Ҋ-Ҿ
    (0x04C1, 0x04CD), // Cyrillic Ӂ-Ӎ
    (0x04D0, 0x04FE), // Cyrillic Ӑ-Ӿ
    (0x0500, 0x052E), // Cyrillic Ԁ-Ԯ
    (0x1E00, 0x1E94), // Latin Extended Additional Ḁ-Ẕ
    (0x1EA0, 0x1EFE), // Latin Extended Additional Ạ-Ỿ
    (0x2C80, 0x2CE2), // Coptic Ⲁ-Ⳣ
    (0xA640, 0xA66C), // Cyrillic Extended-B Ꙁ-Ꙭ
    (0xA680, 0xA69A), // Cyrillic Extended-B Ꚁ-Ꚛ
    (0xA722, 0xA72E), // Latin Extended-D Ꜣ-Ꜯ
    (0xA732, 0xA76E), // Latin Extended-D Ꜳ-Ꝯ
    (0xA77E, 0xA786), // Latin Extended-D Ꝿ-Ꞇ
    (0xA790, 0xA792), // Latin Extended-D Ꞑ-Ꞓ
    (0xA796, 0xA7A8), // Latin Extended-D Ꞗ-Ꞩ
    (0xA7B4, 0xA7C2), // Latin Extended-D Ꞵ-Ꟃ
];

/// One-to-one singleton folds, sorted by source codepoint.
pub const IRREGULAR_FOLDS: &[(u32, u32)] = &[
    (0x00B5, 0x03BC), // µ micro sign to Greek mu
    (0x0178, 0x00FF), // Ÿ
    (0x017F, 0x0073), // ſ long s
    (0x0181, 0x0253), // Ɓ
    (0x0182, 0x0183),
    (0x0184, 0x0185),
    (0x0186, 0x0254), // Ɔ
    (0x0187, 0x0188),
    (0x0189, 0x0256), // Ɖ
    (0x018A, 0x0257), // Ɗ
    (0x018B, 0x018C),
    (0x018E, 0x01DD), // Ǝ
    (0x018F, 0x0259), // Ə schwa
    (0x0190, 0x025B), // Ɛ
    (0x0191, 0x0192),
    (0x0193, 0x0260), // Ɠ
    (0x0194, 0x0263), // Ɣ
    (0x0196, 0x0269), // Ɩ
    (0x0197, 0x0268), // Ɨ
    (0x0198, 0x0199),
    (0x019C, 0x026F), // Ɯ
    (0x019D, 0x0272), // Ɲ
    (0x019F, 0x0275), // Ɵ
    (0x01A0, 0x01A1), // Ơ
    (0x01A2, 0x01A3),
    (0x01A4, 0x01A5),
    (0x01A6, 0x0280), // Ʀ
    (0x01A7, 0x01A8),
    (0x01A9, 0x0283), // Ʃ
    (0x01AC, 0x01AD),
    (0x01AE, 0x0288), // Ʈ
    (0x01AF, 0x01B0), // Ư
    (0x01B1, 0x028A), // Ʊ
    (0x01B2, 0x028B), // Ʋ
    (0x01B3, 0x01B4),
    (0x01B5, 0x01B6),
    (0x01B7, 0x0292), // Ʒ
    (0x01B8, 0x01B9),
    (0x01BC, 0x01BD),
    (0x01C4, 0x01C6), // Ǆ
    (0x01C5, 0x01C6), // ǅ titlecase
    (0x01C7, 0x01C9), // Ǉ
    (0x01C8, 0x01C9), // ǈ titlecase
    (0x01CA, 0x01CC), // Ǌ
    (0x01CB, 0x01CC), // ǋ titlecase
    (0x01F1, 0x01F3), // Ǳ
    (0x01F2, 0x01F3), // ǲ titlecase
    (0x01F4, 0x01F5), // Ǵ
    (0x01F6, 0x0195), // Ƕ hwair
    (0x01F7, 0x01BF), // Ƿ wynn
    (0x0220, 0x019E), // Ƞ
    (0x023A, 0x2C65), // Ⱥ
    (0x023B, 0x023C), // Ȼ
    (0x023D, 0x019A), // Ƚ
    (0x023E, 0x2C66), // Ⱦ
    (0x0241, 0x0242), // Ɂ
    (0x0243, 0x0180), // Ƀ
    (0x0244, 0x0289), // Ʉ
    (0x0245, 0x028C), // Ʌ
    (0x0345, 0x03B9), // combining iota subscript
    (0x0376, 0x0377), // Ͷ
    (0x037F, 0x03F3), // Ϳ
    (0x0386, 0x03AC), // Ά
    (0x038C, 0x03CC), // Ό
    (0x038E, 0x03CD), // Ύ
    (0x038F, 0x03CE), // Ώ
    (0x03C2, 0x03C3), // ς final sigma
    (0x03CF, 0x03D7), // Ϗ
    (0x03D0, 0x03B2), // ϐ beta symbol
    (0x03D1, 0x03B8), // ϑ theta symbol
    (0x03D5, 0x03C6), // ϕ phi symbol
    (0x03D6, 0x03C0), // ϖ pi symbol
    (0x03F0, 0x03BA), // ϰ kappa symbol
    (0x03F1, 0x03C1), // ϱ rho symbol
    (0x03F4, 0x03B8), // ϴ
    (0x03F5, 0x03B5), // ϵ lunate epsilon
    (0x03F7, 0x03F8), // Ϸ
    (0x03F9, 0x03F2), // Ϲ lunate sigma
    (0x03FA, 0x03FB), // Ϻ
    (0x04C0, 0x04CF), // Ӏ palochka
    (0x10C7, 0x2D27), // Georgian Ⴧ
    (0x10CD, 0x2D2D), // Georgian Ⴭ
    (0x1C80, 0x0432), // Cyrillic Extended-C ᲀ → в
    (0x1C81, 0x0434), // ᲁ → д
    (0x1C82, 0x043E), // ᲂ → о
    (0x1C83, 0x0441), // ᲃ → с
    (0x1C84, 0x0442), // ᲄ → т
    (0x1C85, 0x0442), // ᲅ → т
    (0x1C86, 0x044A), // ᲆ → ъ
    (0x1C87, 0x0463), // ᲇ → ѣ
    (0x1C88, 0xA64B), // ᲈ → ꙋ
    (0x1C89, 0x1C8A), // Ᲊ
    (0x1E9B, 0x1E61), // ẛ long s with dot
    (0x1F59, 0x1F51), // Ὑ
    (0x1F5B, 0x1F53), // Ὓ
    (0x1F5D, 0x1F55), // Ὕ
    (0x1F5F, 0x1F57), // Ὗ
    (0x1FB8, 0x1FB0), // Ᾰ
    (0x1FB9, 0x1FB1), // Ᾱ
    (0x1FBA, 0x1F70), // Ὰ
    (0x1FBB, 0x1F71), // Ά
    (0x1FBE, 0x03B9), // prosgegrammeni → ι
    (0x1FD8, 0x1FD0), // Ῐ
    (0x1FD9, 0x1FD1), // Ῑ
    (0x1FDA, 0x1F76), // Ὶ
    (0x1FDB, 0x1F77), // Ί
    (0x1FE8, 0x1FE0), // Ῠ
    (0x1FE9, 0x1FE1), // Ῡ
    (0x1FEA, 0x1F7A), // Ὺ
    (0x1FEB, 0x1F7B), // Ύ
    (0x1FEC, 0x1FE5), // Ῥ
    (0x1FF8, 0x1F78), // Ὸ
    (0x1FF9, 0x1F79), // Ό
    (0x1FFA, 0x1F7C), // Ὼ
    (0x1FFB, 0x1F7D), // Ώ
    (0x2126, 0x03C9), // Ω ohm sign
    (0x212A, 0x006B), // K kelvin sign
    (0x212B, 0x00E5), // Å angstrom sign
    (0x2132, 0x214E), // Ⅎ
    (0x2183, 0x2184), // Ↄ
    (0x2C60, 0x2C61), // Ⱡ
    (0x2C62, 0x026B), // Ɫ
    (0x2C63, 0x1D7D), // Ᵽ
    (0x2C64, 0x027D), // Ɽ
    (0x2C67, 0x2C68), // Ⱨ
    (0x2C69, 0x2C6A), // Ⱪ
    (0x2C6B, 0x2C6C), // Ⱬ
    (0x2C6D, 0x0251), // Ɑ
    (0x2C6E, 0x0271), // Ɱ
    (0x2C6F, 0x0250), // Ɐ
    (0x2C70, 0x0252), // Ɒ
    (0x2C72, 0x2C73), // Ⱳ
    (0x2C75, 0x2C76), // Ⱶ
    (0x2C7E, 0x023F), // Ȿ
    (0x2C7F, 0x0240), // Ɀ
    (0x2CEB, 0x2CEC), // Coptic Ⳬ
    (0x2CED, 0x2CEE), // Coptic Ⳮ
    (0x2CF2, 0x2CF3), // Coptic Ⳳ
    (0xA779, 0xA77A), // Ꝺ
    (0xA77B, 0xA77C), // Ꝼ
    (0xA77D, 0x1D79), // Ᵹ
    (0xA78B, 0xA78C), // Ꞌ
    (0xA78D, 0x0265), // Ɥ
    (0xA7AA, 0x0266), // Ɦ
    (0xA7AB, 0x025C), // Ɜ
    (0xA7AC, 0x0261), // Ɡ
    (0xA7AD, 0x026C), // Ɬ
    (0xA7AE, 0x026A), // Ɪ
    (0xA7B0, 0x029E), // Ʞ
    (0xA7B1, 0x0287), // Ʇ
    (0xA7B2, 0x029D), // Ʝ
    (0xA7B3, 0xAB53), // Ꭓ
    (0xA7C4, 0xA794), // Ꞔ
    (0xA7C5, 0x0282), // Ʂ
    (0xA7C6, 0x1D8E), // Ᶎ
    (0xA7C7, 0xA7C8), // Ꟈ
    (0xA7C9, 0xA7CA), // Ꟊ
    (0xA7CB, 0x0264), // Ɤ
    (0xA7CC, 0xA7CD), // Ꟍ
    (0xA7CE, 0xA7CF),
    (0xA7D0, 0xA7D1), // Ꟑ
    (0xA7D2, 0xA7D3),
    (0xA7D4, 0xA7D5),
    (0xA7D6, 0xA7D7), // Ꟗ
    (0xA7D8, 0xA7D9), // Ꟙ
    (0xA7DA, 0xA7DB), // Ꟛ
    (0xA7DC, 0x019B), // Ƛ
    (0xA7F5, 0xA7F6), // Ꟶ
    (0x10594, 0x105BB), // Vithkuqi irregular
    (0x10595, 0x105BC), // Vithkuqi irregular
];

/// One-to-many folds: up to three runes out. Sorted by source codepoint.
#[derive(Debug, Clone, Copy)]
pub struct Expansion {
    pub from: u32,
    pub to: [u32; 3],
    pub len: u8,
}

const fn exp2(from: u32, a: u32, b: u32) -> Expansion {
    Expansion { from, to: [a, b, 0], len: 2 }
}

const fn exp3(from: u32, a: u32, b: u32, c: u32) -> Expansion {
    Expansion { from, to: [a, b, c], len: 3 }
}

pub const EXPANSIONS: &[Expansion] = &[
    exp2(0x00DF, 0x0073, 0x0073),         // ß → ss
    exp2(0x0130, 0x0069, 0x0307),         // İ → i + combining dot above
    exp2(0x0149, 0x02BC, 0x006E),         // ŉ → ʼn
    exp2(0x01F0, 0x006A, 0x030C),         // ǰ → j + combining caron
    exp3(0x0390, 0x03B9, 0x0308, 0x0301), // ΐ
    exp3(0x03B0, 0x03C5, 0x0308, 0x0301), // ΰ
    exp2(0x0587, 0x0565, 0x0582),         // և → եւ
    exp2(0x1E96, 0x0068, 0x0331),         // ẖ
    exp2(0x1E97, 0x0074, 0x0308),         // ẗ
    exp2(0x1E98, 0x0077, 0x030A),         // ẘ
    exp2(0x1E99, 0x0079, 0x030A),         // ẙ
    exp2(0x1E9A, 0x0061, 0x02BE),         // ẚ
    exp2(0x1E9E, 0x0073, 0x0073),         // ẞ capital Eszett → ss
    exp2(0x1F50, 0x03C5, 0x0313),         // ὐ
    exp3(0x1F52, 0x03C5, 0x0313, 0x0300), // ὒ
    exp3(0x1F54, 0x03C5, 0x0313, 0x0301), // ὔ
    exp3(0x1F56, 0x03C5, 0x0313, 0x0342), // ὖ
    // Greek Extended iota-subscript combinations: the uppercase half
    // (1F88-1F8F etc.) folds like the lowercase half.
    exp2(0x1F80, 0x1F00, 0x03B9),
    exp2(0x1F81, 0x1F01, 0x03B9),
    exp2(0x1F82, 0x1F02, 0x03B9),
    exp2(0x1F83, 0x1F03, 0x03B9),
    exp2(0x1F84, 0x1F04, 0x03B9),
    exp2(0x1F85, 0x1F05, 0x03B9),
    exp2(0x1F86, 0x1F06, 0x03B9),
    exp2(0x1F87, 0x1F07, 0x03B9),
    exp2(0x1F88, 0x1F00, 0x03B9),
    exp2(0x1F89, 0x1F01, 0x03B9),
    exp2(0x1F8A, 0x1F02, 0x03B9),
    exp2(0x1F8B, 0x1F03, 0x03B9),
    exp2(0x1F8C, 0x1F04, 0x03B9),
    exp2(0x1F8D, 0x1F05, 0x03B9),
    exp2(0x1F8E, 0x1F06, 0x03B9),
    exp2(0x1F8F, 0x1F07, 0x03B9),
    exp2(0x1F90, 0x1F20, 0x03B9),
    exp2(0x1F91, 0x1F21, 0x03B9),
    exp2(0x1F92, 0x1F22, 0x03B9),
    exp2(0x1F93, 0x1F23, 0x03B9),
    exp2(0x1F94, 0x1F24, 0x03B9),
    exp2(0x1F95, 0x1F25, 0x03B9),
    exp2(0x1F96, 0x1F26, 0x03B9),
    exp2(0x1F97, 0x1F27, 0x03B9),
    exp2(0x1F98, 0x1F20, 0x03B9),
    exp2(0x1F99, 0x1F21, 0x03B9),
    exp2(0x1F9A, 0x1F22, 0x03B9),
    exp2(0x1F9B, 0x1F23, 0x03B9),
    exp2(0x1F9C, 0x1F24, 0x03B9),
    exp2(0x1F9D, 0x1F25, 0x03B9),
    exp2(0x1F9E, 0x1F26, 0x03B9),
    exp2(0x1F9F, 0x1F27, 0x03B9),
    exp2(0x1FA0, 0x1F60, 0x03B9),
    exp2(0x1FA1, 0x1F61, 0x03B9),
    exp2(0x1FA2, 0x1F62, 0x03B9),
    exp2(0x1FA3, 0x1F63, 0x03B9),
    exp2(0x1FA4, 0x1F64, 0x03B9),
    exp2(0x1FA5, 0x1F65, 0x03B9),
    exp2(0x1FA6, 0x1F66, 0x03B9),
    exp2(0x1FA7, 0x1F67, 0x03B9),
    exp2(0x1FA8, 0x1F60, 0x03B9),
    exp2(0x1FA9, 0x1F61, 0x03B9),
    exp2(0x1FAA, 0x1F62, 0x03B9),
    exp2(0x1FAB, 0x1F63, 0x03B9),
    exp2(0x1FAC, 0x1F64, 0x03B9),
    exp2(0x1FAD, 0x1F65, 0x03B9),
    exp2(0x1FAE, 0x1F66, 0x03B9),
    exp2(0x1FAF, 0x1F67, 0x03B9),
    exp2(0x1FB2, 0x1F70, 0x03B9),         // ᾲ
    exp2(0x1FB3, 0x03B1, 0x03B9),         // ᾳ
    exp2(0x1FB4, 0x03AC, 0x03B9),         // ᾴ
    exp2(0x1FB6, 0x03B1, 0x0342),         // ᾶ
    exp3(0x1FB7, 0x03B1, 0x0342, 0x03B9), // ᾷ
    exp2(0x1FBC, 0x03B1, 0x03B9),         // ᾼ
    exp2(0x1FC2, 0x1F74, 0x03B9),         // ῂ
    exp2(0x1FC3, 0x03B7, 0x03B9),         // ῃ
    exp2(0x1FC4, 0x03AE, 0x03B9),         // ῄ
    exp2(0x1FC6, 0x03B7, 0x0342),         // ῆ
    exp3(0x1FC7, 0x03B7, 0x0342, 0x03B9), // ῇ
    exp2(0x1FCC, 0x03B7, 0x03B9),         // ῌ
    exp3(0x1FD2, 0x03B9, 0x0308, 0x0300), // ῒ
    exp3(0x1FD3, 0x03B9, 0x0308, 0x0301), // ΐ
    exp2(0x1FD6, 0x03B9, 0x0342),         // ῖ
    exp3(0x1FD7, 0x03B9, 0x0308, 0x0342), // ῗ
    exp3(0x1FE2, 0x03C5, 0x0308, 0x0300), // ῢ
    exp3(0x1FE3, 0x03C5, 0x0308, 0x0301), // ΰ
    exp2(0x1FE4, 0x03C1, 0x0313),         // ῤ
    exp2(0x1FE6, 0x03C5, 0x0342),         // ῦ
    exp3(0x1FE7, 0x03C5, 0x0308, 0x0342), // ῧ
    exp2(0x1FF2, 0x1F7C, 0x03B9),         // ῲ
    exp2(0x1FF3, 0x03C9, 0x03B9),         // ῳ
    exp2(0x1FF4, 0x03CE, 0x03B9),         // ῴ
    exp2(0x1FF6, 0x03C9, 0x0342),         // ῶ
    exp3(0x1FF7, 0x03C9, 0x0342, 0x03B9), // ῷ
    exp2(0x1FFC, 0x03C9, 0x03B9),         // ῼ
    exp2(0xFB00, 0x0066, 0x0066),         // ﬀ
    exp2(0xFB01, 0x0066, 0x0069),         // ﬁ
    exp2(0xFB02, 0x0066, 0x006C),         // ﬂ
    exp3(0xFB03, 0x0066, 0x0066, 0x0069), // ﬃ
    exp3(0xFB04, 0x0066, 0x0066, 0x006C), // ﬄ
    exp2(0xFB05, 0x0073, 0x0074),         // ﬅ
    exp2(0xFB06, 0x0073, 0x0074),         // ﬆ
    exp2(0xFB13, 0x0574, 0x0576),         // ﬓ Armenian men-now
    exp2(0xFB14, 0x0574, 0x0565),         // ﬔ Armenian men-ech
    exp2(0xFB15, 0x0574, 0x056B),         // ﬕ Armenian men-ini
    exp2(0xFB16, 0x057E, 0x0576),         // ﬖ Armenian vew-now
    exp2(0xFB17, 0x0574, 0x056D),         // ﬗ Armenian men-xeh
];
