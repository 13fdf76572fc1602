use phf::phf_map;

use crate::error::{Error, Result};
use crate::lookup::normalize;

/// ISO 639 language, addressable by its 639-1 or 639-2/T code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    iso2: &'static str,
    iso3: &'static str,
    name: &'static str,
}

impl Language {
    pub fn from_iso_code(code: &str) -> Option<Language> {
        let code = code.trim().to_ascii_lowercase();
        match code.len() {
            2 => LANGUAGES.get_entry(code.as_str()).map(Self::from_entry),
            3 => LANGUAGES
                .entries()
                .find(|(_, (iso3, _))| *iso3 == code)
                .map(Self::from_entry),
            _ => None,
        }
    }

    /// Resolve an ISO code or, failing that, a normalized variant name.
    pub fn lookup(value: &str) -> Result<Language> {
        Self::from_iso_code(value)
            .or_else(|| {
                let wanted = normalize(value);
                LANGUAGES
                    .entries()
                    .find(|(_, (_, name))| !wanted.is_empty() && normalize(name) == wanted)
                    .map(Self::from_entry)
            })
            .ok_or_else(|| Error::UnknownVariant {
                vocabulary: "Language",
                value: value.to_string(),
            })
    }

    pub fn iso2_code(&self) -> &'static str {
        self.iso2
    }

    pub fn iso3_code(&self) -> &'static str {
        self.iso3
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn from_entry(
        (iso2, (iso3, name)): (&&'static str, &(&'static str, &'static str)),
    ) -> Language {
        Language {
            iso2: *iso2,
            iso3: *iso3,
            name: *name,
        }
    }
}

static LANGUAGES: phf::Map<&'static str, (&'static str, &'static str)> = phf_map! {
    "aa" => ("aar", "AFAR"),
    "ab" => ("abk", "ABKHAZIAN"),
    "ae" => ("ave", "AVESTAN"),
    "af" => ("afr", "AFRIKAANS"),
    "ak" => ("aka", "AKAN"),
    "am" => ("amh", "AMHARIC"),
    "an" => ("arg", "ARAGONESE"),
    "ar" => ("ara", "ARABIC"),
    "as" => ("asm", "ASSAMESE"),
    "av" => ("ava", "AVARIC"),
    "ay" => ("aym", "AYMARA"),
    "az" => ("aze", "AZERBAIJANI"),
    "ba" => ("bak", "BASHKIR"),
    "be" => ("bel", "BELARUSIAN"),
    "bg" => ("bul", "BULGARIAN"),
    "bh" => ("bih", "BIHARI"),
    "bi" => ("bis", "BISLAMA"),
    "bm" => ("bam", "BAMBARA"),
    "bn" => ("ben", "BENGALI"),
    "bo" => ("bod", "TIBETAN"),
    "br" => ("bre", "BRETON"),
    "bs" => ("bos", "BOSNIAN"),
    "ca" => ("cat", "CATALAN"),
    "ce" => ("che", "CHECHEN"),
    "ch" => ("cha", "CHAMORRO"),
    "co" => ("cos", "CORSICAN"),
    "cr" => ("cre", "CREE"),
    "cs" => ("ces", "CZECH"),
    "cu" => ("chu", "CHURCH_SLAVIC"),
    "cv" => ("chv", "CHUVASH"),
    "cy" => ("cym", "WELSH"),
    "da" => ("dan", "DANISH"),
    "de" => ("deu", "GERMAN"),
    "dv" => ("div", "DIVEHI"),
    "dz" => ("dzo", "DZONGKHA"),
    "ee" => ("ewe", "EWE"),
    "el" => ("ell", "GREEK"),
    "en" => ("eng", "ENGLISH"),
    "eo" => ("epo", "ESPERANTO"),
    "es" => ("spa", "SPANISH"),
    "et" => ("est", "ESTONIAN"),
    "eu" => ("eus", "BASQUE"),
    "fa" => ("fas", "PERSIAN"),
    "ff" => ("ful", "FULAH"),
    "fi" => ("fin", "FINNISH"),
    "fj" => ("fij", "FIJIAN"),
    "fo" => ("fao", "FAROESE"),
    "fr" => ("fra", "FRENCH"),
    "fy" => ("fry", "WESTERN_FRISIAN"),
    "ga" => ("gle", "IRISH"),
    "gd" => ("gla", "SCOTTISH_GAELIC"),
    "gl" => ("glg", "GALICIAN"),
    "gn" => ("grn", "GUARANI"),
    "gu" => ("guj", "GUJARATI"),
    "gv" => ("glv", "MANX"),
    "ha" => ("hau", "HAUSA"),
    "he" => ("heb", "HEBREW"),
    "hi" => ("hin", "HINDI"),
    "ho" => ("hmo", "HIRI_MOTU"),
    "hr" => ("hrv", "CROATIAN"),
    "ht" => ("hat", "HAITIAN"),
    "hu" => ("hun", "HUNGARIAN"),
    "hy" => ("hye", "ARMENIAN"),
    "hz" => ("her", "HERERO"),
    "ia" => ("ina", "INTERLINGUA"),
    "id" => ("ind", "INDONESIAN"),
    "ie" => ("ile", "INTERLINGUE"),
    "ig" => ("ibo", "IGBO"),
    "ii" => ("iii", "SICHUAN_YI"),
    "ik" => ("ipk", "INUPIAQ"),
    "io" => ("ido", "IDO"),
    "is" => ("isl", "ICELANDIC"),
    "it" => ("ita", "ITALIAN"),
    "iu" => ("iku", "INUKTITUT"),
    "ja" => ("jpn", "JAPANESE"),
    "jv" => ("jav", "JAVANESE"),
    "ka" => ("kat", "GEORGIAN"),
    "kg" => ("kon", "KONGO"),
    "ki" => ("kik", "KIKUYU"),
    "kj" => ("kua", "KUANYAMA"),
    "kk" => ("kaz", "KAZAKH"),
    "kl" => ("kal", "KALAALLISUT"),
    "km" => ("khm", "KHMER"),
    "kn" => ("kan", "KANNADA"),
    "ko" => ("kor", "KOREAN"),
    "kr" => ("kau", "KANURI"),
    "ks" => ("kas", "KASHMIRI"),
    "ku" => ("kur", "KURDISH"),
    "kv" => ("kom", "KOMI"),
    "kw" => ("cor", "CORNISH"),
    "ky" => ("kir", "KIRGHIZ"),
    "la" => ("lat", "LATIN"),
    "lb" => ("ltz", "LUXEMBOURGISH"),
    "lg" => ("lug", "GANDA"),
    "li" => ("lim", "LIMBURGISH"),
    "ln" => ("lin", "LINGALA"),
    "lo" => ("lao", "LAO"),
    "lt" => ("lit", "LITHUANIAN"),
    "lu" => ("lub", "LUBA_KATANGA"),
    "lv" => ("lav", "LATVIAN"),
    "mg" => ("mlg", "MALAGASY"),
    "mh" => ("mah", "MARSHALLESE"),
    "mi" => ("mri", "MAORI"),
    "mk" => ("mkd", "MACEDONIAN"),
    "ml" => ("mal", "MALAYALAM"),
    "mn" => ("mon", "MONGOLIAN"),
    "mr" => ("mar", "MARATHI"),
    "ms" => ("msa", "MALAY"),
    "mt" => ("mlt", "MALTESE"),
    "my" => ("mya", "BURMESE"),
    "na" => ("nau", "NAURU"),
    "nb" => ("nob", "NORWEGIAN_BOKMAL"),
    "nd" => ("nde", "NORTH_NDEBELE"),
    "ne" => ("nep", "NEPALI"),
    "ng" => ("ndo", "NDONGA"),
    "nl" => ("nld", "DUTCH"),
    "nn" => ("nno", "NORWEGIAN_NYNORSK"),
    "no" => ("nor", "NORWEGIAN"),
    "nr" => ("nbl", "SOUTH_NDEBELE"),
    "nv" => ("nav", "NAVAJO"),
    "ny" => ("nya", "CHICHEWA"),
    "oc" => ("oci", "OCCITAN"),
    "oj" => ("oji", "OJIBWA"),
    "om" => ("orm", "OROMO"),
    "or" => ("ori", "ORIYA"),
    "os" => ("oss", "OSSETIAN"),
    "pa" => ("pan", "PUNJABI"),
    "pi" => ("pli", "PALI"),
    "pl" => ("pol", "POLISH"),
    "ps" => ("pus", "PASHTO"),
    "pt" => ("por", "PORTUGUESE"),
    "qu" => ("que", "QUECHUA"),
    "rm" => ("roh", "ROMANSH"),
    "rn" => ("run", "RUNDI"),
    "ro" => ("ron", "ROMANIAN"),
    "ru" => ("rus", "RUSSIAN"),
    "rw" => ("kin", "KINYARWANDA"),
    "sa" => ("san", "SANSKRIT"),
    "sc" => ("srd", "SARDINIAN"),
    "sd" => ("snd", "SINDHI"),
    "se" => ("sme", "NORTHERN_SAMI"),
    "sg" => ("sag", "SANGO"),
    "si" => ("sin", "SINHALA"),
    "sk" => ("slk", "SLOVAK"),
    "sl" => ("slv", "SLOVENIAN"),
    "sm" => ("smo", "SAMOAN"),
    "sn" => ("sna", "SHONA"),
    "so" => ("som", "SOMALI"),
    "sq" => ("sqi", "ALBANIAN"),
    "sr" => ("srp", "SERBIAN"),
    "ss" => ("ssw", "SWATI"),
    "st" => ("sot", "SOUTHERN_SOTHO"),
    "su" => ("sun", "SUNDANESE"),
    "sv" => ("swe", "SWEDISH"),
    "sw" => ("swa", "SWAHILI"),
    "ta" => ("tam", "TAMIL"),
    "te" => ("tel", "TELUGU"),
    "tg" => ("tgk", "TAJIK"),
    "th" => ("tha", "THAI"),
    "ti" => ("tir", "TIGRINYA"),
    "tk" => ("tuk", "TURKMEN"),
    "tl" => ("tgl", "TAGALOG"),
    "tn" => ("tsn", "TSWANA"),
    "to" => ("ton", "TONGA"),
    "tr" => ("tur", "TURKISH"),
    "ts" => ("tso", "TSONGA"),
    "tt" => ("tat", "TATAR"),
    "tw" => ("twi", "TWI"),
    "ty" => ("tah", "TAHITIAN"),
    "ug" => ("uig", "UIGHUR"),
    "uk" => ("ukr", "UKRAINIAN"),
    "ur" => ("urd", "URDU"),
    "uz" => ("uzb", "UZBEK"),
    "ve" => ("ven", "VENDA"),
    "vi" => ("vie", "VIETNAMESE"),
    "vo" => ("vol", "VOLAPUK"),
    "wa" => ("wln", "WALLOON"),
    "wo" => ("wol", "WOLOF"),
    "xh" => ("xho", "XHOSA"),
    "yi" => ("yid", "YIDDISH"),
    "yo" => ("yor", "YORUBA"),
    "za" => ("zha", "ZHUANG"),
    "zh" => ("zho", "CHINESE"),
    "zu" => ("zul", "ZULU"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_iso_codes() {
        assert_eq!(Language::from_iso_code("de").unwrap().name(), "GERMAN");
        assert_eq!(Language::from_iso_code("EN").unwrap().iso3_code(), "eng");
        assert_eq!(Language::from_iso_code("spa").unwrap().iso2_code(), "es");
    }

    #[test]
    fn resolves_names_as_fallback() {
        assert_eq!(Language::lookup("german").unwrap().iso2_code(), "de");
        assert_eq!(Language::lookup("norwegian bokmal").unwrap().iso2_code(), "nb");
    }

    #[test]
    fn rejects_unknown_codes() {
        assert!(Language::from_iso_code("xx").is_none());
        assert!(Language::lookup("klingon").is_err());
        assert!(Language::lookup("").is_err());
    }
}
