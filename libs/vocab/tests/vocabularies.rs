use lichen_vocab::{
    lookup, Country, Language, VariantSet, BASIS_OF_RECORD, CONTINENT, MEDIA_TYPE, TYPE_STATUS,
};

#[test]
fn builtin_vocabularies_resolve_loose_spellings() {
    assert_eq!(lookup("preserved specimen", &BASIS_OF_RECORD), Some("PRESERVED_SPECIMEN"));
    assert_eq!(lookup("north-america", &CONTINENT), Some("NORTH_AMERICA"));
    assert_eq!(lookup("StillImage", &MEDIA_TYPE), Some("StillImage"));
    assert_eq!(lookup("still_image", &MEDIA_TYPE), Some("StillImage"));
    assert_eq!(lookup("TYPE", &TYPE_STATUS), Some("TYPE"));
    assert_eq!(lookup("holo.type", &TYPE_STATUS), Some("HOLOTYPE"));
}

#[test]
fn builtin_vocabularies_reject_unknown_names() {
    assert_eq!(lookup("dinosaur", &BASIS_OF_RECORD), None);
    assert!(MEDIA_TYPE.parse("Hologram").is_err());
}

#[test]
fn vocabulary_names_are_normalized() {
    assert_eq!(VariantSet::by_name("TYPE_STATUS").unwrap(), TYPE_STATUS);
    assert_eq!(VariantSet::by_name("mediatype").unwrap(), MEDIA_TYPE);
}

#[test]
fn countries_accept_codes_and_names() {
    for value in ["CR", "cri", "Costa Rica", "COSTA_RICA"] {
        assert_eq!(Country::lookup(value).unwrap().iso2_code(), "CR", "{value}");
    }
    assert!(Country::lookup("CRCRCC").is_err());
}

#[test]
fn languages_accept_both_code_lengths() {
    assert_eq!(Language::lookup("fr").unwrap(), Language::lookup("fra").unwrap());
}
