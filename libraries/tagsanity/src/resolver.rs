//! Language / script identifier resolution
//!
//! Release data labels language and script with codes from several
//! overlapping standards: ISO 639-1 and ISO 639-3 language codes, ISO
//! 15924 script codes, and the ISO 3166 country codes that colloquially
//! stand in for a language. This module maps any recognized code onto the
//! small set of supported transliteration targets.

use tagsanity_core::types::Lang;

/// Resolve a language and/or script code to a supported target.
///
/// The language code wins; the script code is only consulted when the
/// language is absent or unmapped. Returns `None` when neither code is
/// recognized — downstream then proceeds without transliteration, which
/// is a normal outcome rather than a failure.
///
/// The ISO 15924 script "Hani" is ambiguous: it can denote Hanzi, Kanji,
/// or Hanja. `han_preference` decides which language to assume when that
/// script is all there is to go on.
pub fn resolve(language: Option<&str>, script: Option<&str>, han_preference: Lang) -> Option<Lang> {
    language
        .and_then(|code| lookup(code, han_preference))
        .or_else(|| script.and_then(|code| lookup(code, han_preference)))
}

#[rustfmt::skip]
fn lookup(code: &str, han_preference: Lang) -> Option<Lang> {
    let target = match code {
        "Hani" => han_preference,

        "Hrkt" => Lang::Ja, // ISO 15924          : Katakana + Hiragana
        "Kana" => Lang::Ja, // ISO 15924          : Katakana
        "Hira" => Lang::Ja, // ISO 15924          : Hiragana
        "Jpan" => Lang::Ja, // ISO 15924          : Han + Hiragana + Katakana
        "ja"   => Lang::Ja, // ISO 639-1          : The Japanese language
        "jpn"  => Lang::Ja, // ISO 639-3          : The Japanese language (also ISO 3166-1 alpha-3 for Japan)
        "jp"   => Lang::Ja, // ISO 3166-1 alpha-2 : Japan, the country

        "Hang" => Lang::Kr, // ISO 15924          : Hangul
        "Kore" => Lang::Kr, // ISO 15924          : Hangul + Han
        "ko"   => Lang::Kr, // ISO 639-1          : The Korean language
        "kor"  => Lang::Kr, // ISO 639-3          : The Korean language (also ISO 3166-1 alpha-3 for Korea)
        "kr"   => Lang::Kr, // ISO 3166-1 alpha-2 : Republic of Korea, the country

        "vi"   => Lang::Vn, // ISO 639-1          : The Vietnamese language
        "vie"  => Lang::Vn, // ISO 639-3          : The Vietnamese language
        "vn"   => Lang::Vn, // ISO 3166-1 alpha-2 : Viet Nam, the country
        "vnm"  => Lang::Vn, // ISO 3166-1 alpha-3 : Viet Nam, the country

        "Hans" => Lang::Zh, // ISO 15924          : Han (simplified)
        "Hant" => Lang::Zh, // ISO 15924          : Han (traditional)
        "zh"   => Lang::Zh, // ISO 639-1          : The Chinese language
        "zho"  => Lang::Zh, // ISO 639-3          : The Chinese language
        "cdo"  => Lang::Zh, // ISO 639-3          : The Chinese language (Min Dong)
        "cjy"  => Lang::Zh, // ISO 639-3          : The Chinese language (Jinyu)
        "cmn"  => Lang::Zh, // ISO 639-3          : The Chinese language (Mandarin)
        "cnp"  => Lang::Zh, // ISO 639-3          : The Chinese language (Northern Ping)
        "cpi"  => Lang::Zh, // ISO 639-3          : The Chinese language (Pu-Xian)
        "csp"  => Lang::Zh, // ISO 639-3          : The Chinese language (Southern Ping)
        "czh"  => Lang::Zh, // ISO 639-3          : The Chinese language (Huizhou)
        "czo"  => Lang::Zh, // ISO 639-3          : The Chinese language (Min Zhong)
        "cn"   => Lang::Zh, // ISO 3166-1 alpha-2 : China, the country
        "chn"  => Lang::Zh, // ISO 3166-1 alpha-3 : China, the country

        _ => return None,
    };
    Some(target)
}
