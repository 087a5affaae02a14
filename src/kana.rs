// 🈂 Kana width normalization
// Zengin account-holder names travel as half-width (hankaku) katakana.
// This converts full-width katakana, full-width ASCII, and the ideographic
// space to their half-width forms; everything else passes through untouched.

// ============================================================================
// KATAKANA TABLE
// ============================================================================

/// Half-width form of a single full-width katakana character.
///
/// Voiced (dakuten) and semi-voiced (handakuten) kana have no precomposed
/// half-width codepoint; they decompose into the base kana plus a trailing
/// `ﾞ` (U+FF9E) or `ﾟ` (U+FF9F) mark, which is how the Zengin record format
/// carries them.
fn katakana_halfwidth(c: char) -> Option<&'static str> {
    let s = match c {
        // Small vowels
        'ァ' => "ｧ",
        'ィ' => "ｨ",
        'ゥ' => "ｩ",
        'ェ' => "ｪ",
        'ォ' => "ｫ",

        // Vowels
        'ア' => "ｱ",
        'イ' => "ｲ",
        'ウ' => "ｳ",
        'エ' => "ｴ",
        'オ' => "ｵ",

        // K row
        'カ' => "ｶ",
        'キ' => "ｷ",
        'ク' => "ｸ",
        'ケ' => "ｹ",
        'コ' => "ｺ",
        'ガ' => "ｶﾞ",
        'ギ' => "ｷﾞ",
        'グ' => "ｸﾞ",
        'ゲ' => "ｹﾞ",
        'ゴ' => "ｺﾞ",

        // S row
        'サ' => "ｻ",
        'シ' => "ｼ",
        'ス' => "ｽ",
        'セ' => "ｾ",
        'ソ' => "ｿ",
        'ザ' => "ｻﾞ",
        'ジ' => "ｼﾞ",
        'ズ' => "ｽﾞ",
        'ゼ' => "ｾﾞ",
        'ゾ' => "ｿﾞ",

        // T row
        'タ' => "ﾀ",
        'チ' => "ﾁ",
        'ツ' => "ﾂ",
        'テ' => "ﾃ",
        'ト' => "ﾄ",
        'ダ' => "ﾀﾞ",
        'ヂ' => "ﾁﾞ",
        'ヅ' => "ﾂﾞ",
        'デ' => "ﾃﾞ",
        'ド' => "ﾄﾞ",
        'ッ' => "ｯ",

        // N row
        'ナ' => "ﾅ",
        'ニ' => "ﾆ",
        'ヌ' => "ﾇ",
        'ネ' => "ﾈ",
        'ノ' => "ﾉ",

        // H row
        'ハ' => "ﾊ",
        'ヒ' => "ﾋ",
        'フ' => "ﾌ",
        'ヘ' => "ﾍ",
        'ホ' => "ﾎ",
        'バ' => "ﾊﾞ",
        'ビ' => "ﾋﾞ",
        'ブ' => "ﾌﾞ",
        'ベ' => "ﾍﾞ",
        'ボ' => "ﾎﾞ",
        'パ' => "ﾊﾟ",
        'ピ' => "ﾋﾟ",
        'プ' => "ﾌﾟ",
        'ペ' => "ﾍﾟ",
        'ポ' => "ﾎﾟ",

        // M row
        'マ' => "ﾏ",
        'ミ' => "ﾐ",
        'ム' => "ﾑ",
        'メ' => "ﾒ",
        'モ' => "ﾓ",

        // Y row
        'ヤ' => "ﾔ",
        'ユ' => "ﾕ",
        'ヨ' => "ﾖ",
        'ャ' => "ｬ",
        'ュ' => "ｭ",
        'ョ' => "ｮ",

        // R row
        'ラ' => "ﾗ",
        'リ' => "ﾘ",
        'ル' => "ﾙ",
        'レ' => "ﾚ",
        'ロ' => "ﾛ",

        // W row and the rest
        'ワ' => "ﾜ",
        'ヲ' => "ｦ",
        'ン' => "ﾝ",
        'ヴ' => "ｳﾞ",

        // Punctuation and marks
        '。' => "｡",
        '、' => "､",
        '・' => "･",
        '「' => "｢",
        '」' => "｣",
        'ー' => "ｰ",
        '゛' => "ﾞ",
        '゜' => "ﾟ",

        _ => return None,
    };
    Some(s)
}

// ============================================================================
// CONVERSION
// ============================================================================

/// Convert a string to its half-width representation.
///
/// Covers three classes of characters:
/// - full-width katakana → half-width katakana (voiced kana decompose)
/// - full-width ASCII (U+FF01..U+FF5E) → plain ASCII
/// - ideographic space (U+3000) → ASCII space
///
/// Characters outside those classes (hiragana, kanji, already-half-width
/// text) are left unchanged, so the transform is idempotent.
pub fn to_halfwidth(input: &str) -> String {
    let mut out = String::with_capacity(input.len());

    for c in input.chars() {
        if let Some(kana) = katakana_halfwidth(c) {
            out.push_str(kana);
        } else if ('\u{FF01}'..='\u{FF5E}').contains(&c) {
            // Full-width ASCII is a fixed offset from the ASCII block
            let shifted = (c as u32) - 0xFEE0;
            out.push(char::from_u32(shifted).unwrap_or(c));
        } else if c == '\u{3000}' {
            out.push(' ');
        } else {
            out.push(c);
        }
    }

    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_katakana() {
        assert_eq!(to_halfwidth("タロウ"), "ﾀﾛｳ");
        assert_eq!(to_halfwidth("ヤマダ"), "ﾔﾏﾀﾞ");
    }

    #[test]
    fn test_voiced_kana_decomposes() {
        // Dakuten kana become base + mark
        assert_eq!(to_halfwidth("ガ"), "ｶﾞ");
        assert_eq!(to_halfwidth("ダノク"), "ﾀﾞﾉｸ");
        // Handakuten
        assert_eq!(to_halfwidth("パピプ"), "ﾊﾟﾋﾟﾌﾟ");
        assert_eq!(to_halfwidth("ヴ"), "ｳﾞ");
    }

    #[test]
    fn test_small_kana_and_long_vowel() {
        assert_eq!(to_halfwidth("キャッシュ"), "ｷｬｯｼｭ");
        assert_eq!(to_halfwidth("コーポレーション"), "ｺｰﾎﾟﾚｰｼｮﾝ");
    }

    #[test]
    fn test_fullwidth_ascii_and_space() {
        assert_eq!(to_halfwidth("ＡＢＣ１２３"), "ABC123");
        assert_eq!(to_halfwidth("ヤマダ　タロウ"), "ﾔﾏﾀﾞ ﾀﾛｳ");
        assert_eq!(to_halfwidth("（カ）"), "(ｶ)");
    }

    #[test]
    fn test_already_halfwidth_is_unchanged() {
        // Idempotence: half-width input passes through verbatim
        assert_eq!(to_halfwidth("ﾀﾞﾉｸ"), "ﾀﾞﾉｸ");
        assert_eq!(to_halfwidth("YAMADA TARO 123"), "YAMADA TARO 123");
    }

    #[test]
    fn test_idempotent() {
        let once = to_halfwidth("ヤマダ　ガンバ（カ）Ａ１");
        let twice = to_halfwidth(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_non_kana_passes_through() {
        // Kanji and hiragana are not part of the transform
        assert_eq!(to_halfwidth("山田たろうﾀﾛｳ"), "山田たろうﾀﾛｳ");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(to_halfwidth(""), "");
    }
}
