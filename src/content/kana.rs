pub type KanaRow = (&'static str, &'static [(&'static str, &'static str)]);

pub const HIRAGANA_ROWS: &[KanaRow] = &[
    ("a", &[("あ", "a"), ("い", "i"), ("う", "u"), ("え", "e"), ("お", "o")]),
    ("ka", &[("か", "ka"), ("き", "ki"), ("く", "ku"), ("け", "ke"), ("こ", "ko")]),
    ("sa", &[("さ", "sa"), ("し", "shi"), ("す", "su"), ("せ", "se"), ("そ", "so")]),
    ("ta", &[("た", "ta"), ("ち", "chi"), ("つ", "tsu"), ("て", "te"), ("と", "to")]),
    ("na", &[("な", "na"), ("に", "ni"), ("ぬ", "nu"), ("ね", "ne"), ("の", "no")]),
    ("ha", &[("は", "ha"), ("ひ", "hi"), ("ふ", "fu"), ("へ", "he"), ("ほ", "ho")]),
    ("ma", &[("ま", "ma"), ("み", "mi"), ("む", "mu"), ("め", "me"), ("も", "mo")]),
    ("ya", &[("や", "ya"), ("ゆ", "yu"), ("よ", "yo")]),
    ("ra", &[("ら", "ra"), ("り", "ri"), ("る", "ru"), ("れ", "re"), ("ろ", "ro")]),
    ("wa", &[("わ", "wa"), ("を", "wo")]),
    ("special", &[("ん", "n")]),
];

pub const KATAKANA_ROWS: &[KanaRow] = &[
    ("a", &[("ア", "a"), ("イ", "i"), ("ウ", "u"), ("エ", "e"), ("オ", "o")]),
    ("ka", &[("カ", "ka"), ("キ", "ki"), ("ク", "ku"), ("ケ", "ke"), ("コ", "ko")]),
    ("sa", &[("サ", "sa"), ("シ", "shi"), ("ス", "su"), ("セ", "se"), ("ソ", "so")]),
    ("ta", &[("タ", "ta"), ("チ", "chi"), ("ツ", "tsu"), ("テ", "te"), ("ト", "to")]),
    ("na", &[("ナ", "na"), ("ニ", "ni"), ("ヌ", "nu"), ("ネ", "ne"), ("ノ", "no")]),
    ("ha", &[("ハ", "ha"), ("ヒ", "hi"), ("フ", "fu"), ("ヘ", "he"), ("ホ", "ho")]),
    ("ma", &[("マ", "ma"), ("ミ", "mi"), ("ム", "mu"), ("メ", "me"), ("モ", "mo")]),
    ("ya", &[("ヤ", "ya"), ("ユ", "yu"), ("ヨ", "yo")]),
    ("ra", &[("ラ", "ra"), ("リ", "ri"), ("ル", "ru"), ("レ", "re"), ("ロ", "ro")]),
    ("wa", &[("ワ", "wa"), ("ヲ", "wo")]),
    ("special", &[("ン", "n")]),
];

/// Common short words written in hiragana. は/を use their particle readings.
pub const FREQUENT_WORDS: &[(&str, &str)] = &[
    ("これ", "kore"),
    ("それ", "sore"),
    ("あれ", "are"),
    ("です", "desu"),
    ("ます", "masu"),
    ("は", "wa"),
    ("が", "ga"),
    ("の", "no"),
    ("に", "ni"),
    ("を", "wo"),
];

/// Everyday words, some with a kanji gloss in brackets. The gloss is part of
/// the prompt, so でんわ and でんわ（電話） are separate cards.
pub const EVERYDAY_WORDS: &[(&str, &str)] = &[
    ("これ", "kore"),
    ("それ", "sore"),
    ("あれ", "are"),
    ("です", "desu"),
    ("ます", "masu"),
    ("ぼく", "boku"),
    ("いわし", "iwashi"),
    ("うんこ", "unko"),
    ("もれる", "moreru"),
    ("うんち", "unchi"),
    ("まぐろ", "maguro"),
    ("ようこ", "youko"),
    ("かるろ", "karuro"),
    ("るい", "rui"),
    ("あいさつ（挨拶）", "aisatsu"),
    ("ありがとう", "arigatou"),
    ("ごめんなさい", "gomennasai"),
    ("こんにちは（挨拶）", "konnichiha"),
    ("おはよう", "ohayou"),
    ("さようなら", "sayounara"),
    ("はい", "hai"),
    ("いいえ", "iie"),
    ("ともだち（友達）", "tomodachi"),
    ("がっこう（学校）", "gakkou"),
    ("せんせい（先生）", "sensei"),
    ("ほん（本）", "hon"),
    ("かばん", "kaban"),
    ("おかあさん（お母さん）", "okaasan"),
    ("おとうさん（お父さん）", "otousan"),
    ("きょうだい（兄弟）", "kyoudai"),
    ("いぬ（犬）", "inu"),
    ("ねこ（猫）", "neko"),
    ("おちゃ（お茶）", "ocha"),
    ("おかし（お菓子）", "okashi"),
    ("ごはん（食事/米）", "gohan"),
    ("みず（水）", "mizu"),
    ("おかね（お金）", "okane"),
    ("でんわ（電話）", "denwa"),
    ("やきゅう（野球）", "yakyuu"),
    ("え（絵）", "e"),
    ("うた（歌）", "uta"),
    ("おんがく（音楽）", "ongaku"),
    ("がっき", "gakki"),
    ("つくえ（机）", "tsukue"),
    ("いす（椅子）", "isu"),
    ("しゅくだい（宿題）", "shukudai"),
    ("べんきょう（勉強）", "benkyou"),
    ("やすみ（休み）", "yasumi"),
    ("あそぶ（遊ぶ）", "asobu"),
    ("いく（行く）", "iku"),
    ("くる（来る）", "kuru"),
    ("たべる（食べる）", "taberu"),
    ("のむ（飲む）", "nomu"),
    ("ねる（寝る）", "neru"),
    ("へや", "heya"),
    ("まど", "mado"),
    ("けしごむ", "keshigomu"),
    ("じしょ", "jisho"),
    ("きょう", "kyou"),
    ("あした", "ashita"),
    ("きのう", "kinou"),
    ("いま", "ima"),
    ("とき", "toki"),
    ("ひる", "hiru"),
    ("よる", "yoru"),
    ("あさ", "asa"),
    ("ばん", "ban"),
    ("せかい", "sekai"),
    ("さかな", "sakana"),
    ("むし", "mushi"),
    ("くるま", "kuruma"),
    ("じてんしゃ", "jitensha"),
    ("でんしゃ", "densha"),
    ("おなら", "onara"),
    ("ひこうき", "hikouki"),
    ("でんわ", "denwa"),
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn glyph_count(rows: &[KanaRow]) -> usize {
        rows.iter().map(|(_, chars)| chars.len()).sum()
    }

    #[test]
    fn test_basic_gojuon_has_46_glyphs() {
        assert_eq!(glyph_count(HIRAGANA_ROWS), 46);
        assert_eq!(glyph_count(KATAKANA_ROWS), 46);
    }

    #[test]
    fn test_glyphs_are_unique_per_script() {
        for rows in [HIRAGANA_ROWS, KATAKANA_ROWS] {
            let glyphs: HashSet<&str> = rows
                .iter()
                .flat_map(|(_, chars)| chars.iter().map(|(g, _)| *g))
                .collect();
            assert_eq!(glyphs.len(), glyph_count(rows));
        }
    }

    #[test]
    fn test_scripts_share_readings() {
        for (h, k) in HIRAGANA_ROWS.iter().zip(KATAKANA_ROWS) {
            assert_eq!(h.0, k.0);
            let hr: Vec<&str> = h.1.iter().map(|(_, r)| *r).collect();
            let kr: Vec<&str> = k.1.iter().map(|(_, r)| *r).collect();
            assert_eq!(hr, kr);
        }
    }

    #[test]
    fn test_everyday_words_keep_glossed_and_plain_forms() {
        let denwa: Vec<&str> = EVERYDAY_WORDS
            .iter()
            .filter(|(_, r)| *r == "denwa")
            .map(|(g, _)| *g)
            .collect();
        assert_eq!(denwa, ["でんわ（電話）", "でんわ"]);
    }
}
