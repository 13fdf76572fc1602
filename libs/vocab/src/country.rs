use phf::phf_map;

use crate::error::{Error, Result};
use crate::lookup::normalize;

/// ISO 3166-1 country, plus the user-assigned codes for Kosovo, international
/// waters and "unknown".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Country {
    alpha2: &'static str,
    alpha3: &'static str,
    name: &'static str,
}

impl Country {
    /// Resolve a 2 or 3 letter ISO code, case-insensitively.
    pub fn from_iso_code(code: &str) -> Option<Country> {
        let code = code.trim().to_ascii_uppercase();
        match code.len() {
            2 => COUNTRIES.get_entry(code.as_str()).map(Self::from_entry),
            3 => COUNTRIES
                .entries()
                .find(|(_, (alpha3, _))| *alpha3 == code)
                .map(Self::from_entry),
            _ => None,
        }
    }

    /// Resolve by normalized variant name, e.g. `costa rica` or `COSTA_RICA`.
    pub fn from_name(name: &str) -> Option<Country> {
        if name.is_empty() {
            return None;
        }
        let wanted = normalize(name);
        COUNTRIES
            .entries()
            .find(|(_, (_, variant))| normalize(variant) == wanted)
            .map(Self::from_entry)
    }

    /// ISO code first, variant name second.
    pub fn lookup(value: &str) -> Result<Country> {
        Self::from_iso_code(value)
            .or_else(|| Self::from_name(value))
            .ok_or_else(|| Error::UnknownVariant {
                vocabulary: "Country",
                value: value.to_string(),
            })
    }

    pub fn iso2_code(&self) -> &'static str {
        self.alpha2
    }

    pub fn iso3_code(&self) -> &'static str {
        self.alpha3
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    fn from_entry(
        (alpha2, (alpha3, name)): (&&'static str, &(&'static str, &'static str)),
    ) -> Country {
        Country {
            alpha2: *alpha2,
            alpha3: *alpha3,
            name: *name,
        }
    }
}

static COUNTRIES: phf::Map<&'static str, (&'static str, &'static str)> = phf_map! {
    "AD" => ("AND", "ANDORRA"),
    "AE" => ("ARE", "UNITED_ARAB_EMIRATES"),
    "AF" => ("AFG", "AFGHANISTAN"),
    "AG" => ("ATG", "ANTIGUA_BARBUDA"),
    "AI" => ("AIA", "ANGUILLA"),
    "AL" => ("ALB", "ALBANIA"),
    "AM" => ("ARM", "ARMENIA"),
    "AO" => ("AGO", "ANGOLA"),
    "AQ" => ("ATA", "ANTARCTICA"),
    "AR" => ("ARG", "ARGENTINA"),
    "AS" => ("ASM", "AMERICAN_SAMOA"),
    "AT" => ("AUT", "AUSTRIA"),
    "AU" => ("AUS", "AUSTRALIA"),
    "AW" => ("ABW", "ARUBA"),
    "AX" => ("ALA", "ALAND_ISLANDS"),
    "AZ" => ("AZE", "AZERBAIJAN"),
    "BA" => ("BIH", "BOSNIA_HERZEGOVINA"),
    "BB" => ("BRB", "BARBADOS"),
    "BD" => ("BGD", "BANGLADESH"),
    "BE" => ("BEL", "BELGIUM"),
    "BF" => ("BFA", "BURKINA_FASO"),
    "BG" => ("BGR", "BULGARIA"),
    "BH" => ("BHR", "BAHRAIN"),
    "BI" => ("BDI", "BURUNDI"),
    "BJ" => ("BEN", "BENIN"),
    "BL" => ("BLM", "SAINT_BARTHELEMY"),
    "BM" => ("BMU", "BERMUDA"),
    "BN" => ("BRN", "BRUNEI_DARUSSALAM"),
    "BO" => ("BOL", "BOLIVIA"),
    "BQ" => ("BES", "BONAIRE_SINT_EUSTATIUS_SABA"),
    "BR" => ("BRA", "BRAZIL"),
    "BS" => ("BHS", "BAHAMAS"),
    "BT" => ("BTN", "BHUTAN"),
    "BV" => ("BVT", "BOUVET_ISLAND"),
    "BW" => ("BWA", "BOTSWANA"),
    "BY" => ("BLR", "BELARUS"),
    "BZ" => ("BLZ", "BELIZE"),
    "CA" => ("CAN", "CANADA"),
    "CC" => ("CCK", "COCOS_ISLANDS"),
    "CD" => ("COD", "CONGO_DEMOCRATIC_REPUBLIC"),
    "CF" => ("CAF", "CENTRAL_AFRICAN_REPUBLIC"),
    "CG" => ("COG", "CONGO"),
    "CH" => ("CHE", "SWITZERLAND"),
    "CI" => ("CIV", "COTE_DIVOIRE"),
    "CK" => ("COK", "COOK_ISLANDS"),
    "CL" => ("CHL", "CHILE"),
    "CM" => ("CMR", "CAMEROON"),
    "CN" => ("CHN", "CHINA"),
    "CO" => ("COL", "COLOMBIA"),
    "CR" => ("CRI", "COSTA_RICA"),
    "CU" => ("CUB", "CUBA"),
    "CV" => ("CPV", "CAPE_VERDE"),
    "CW" => ("CUW", "CURACAO"),
    "CX" => ("CXR", "CHRISTMAS_ISLAND"),
    "CY" => ("CYP", "CYPRUS"),
    "CZ" => ("CZE", "CZECH_REPUBLIC"),
    "DE" => ("DEU", "GERMANY"),
    "DJ" => ("DJI", "DJIBOUTI"),
    "DK" => ("DNK", "DENMARK"),
    "DM" => ("DMA", "DOMINICA"),
    "DO" => ("DOM", "DOMINICAN_REPUBLIC"),
    "DZ" => ("DZA", "ALGERIA"),
    "EC" => ("ECU", "ECUADOR"),
    "EE" => ("EST", "ESTONIA"),
    "EG" => ("EGY", "EGYPT"),
    "EH" => ("ESH", "WESTERN_SAHARA"),
    "ER" => ("ERI", "ERITREA"),
    "ES" => ("ESP", "SPAIN"),
    "ET" => ("ETH", "ETHIOPIA"),
    "FI" => ("FIN", "FINLAND"),
    "FJ" => ("FJI", "FIJI"),
    "FK" => ("FLK", "FALKLAND_ISLANDS"),
    "FM" => ("FSM", "MICRONESIA"),
    "FO" => ("FRO", "FAROE_ISLANDS"),
    "FR" => ("FRA", "FRANCE"),
    "GA" => ("GAB", "GABON"),
    "GB" => ("GBR", "UNITED_KINGDOM"),
    "GD" => ("GRD", "GRENADA"),
    "GE" => ("GEO", "GEORGIA"),
    "GF" => ("GUF", "FRENCH_GUIANA"),
    "GG" => ("GGY", "GUERNSEY"),
    "GH" => ("GHA", "GHANA"),
    "GI" => ("GIB", "GIBRALTAR"),
    "GL" => ("GRL", "GREENLAND"),
    "GM" => ("GMB", "GAMBIA"),
    "GN" => ("GIN", "GUINEA"),
    "GP" => ("GLP", "GUADELOUPE"),
    "GQ" => ("GNQ", "EQUATORIAL_GUINEA"),
    "GR" => ("GRC", "GREECE"),
    "GS" => ("SGS", "SOUTH_GEORGIA_SANDWICH_ISLANDS"),
    "GT" => ("GTM", "GUATEMALA"),
    "GU" => ("GUM", "GUAM"),
    "GW" => ("GNB", "GUINEA_BISSAU"),
    "GY" => ("GUY", "GUYANA"),
    "HK" => ("HKG", "HONG_KONG"),
    "HM" => ("HMD", "HEARD_MCDONALD_ISLANDS"),
    "HN" => ("HND", "HONDURAS"),
    "HR" => ("HRV", "CROATIA"),
    "HT" => ("HTI", "HAITI"),
    "HU" => ("HUN", "HUNGARY"),
    "ID" => ("IDN", "INDONESIA"),
    "IE" => ("IRL", "IRELAND"),
    "IL" => ("ISR", "ISRAEL"),
    "IM" => ("IMN", "ISLE_OF_MAN"),
    "IN" => ("IND", "INDIA"),
    "IO" => ("IOT", "BRITISH_INDIAN_OCEAN_TERRITORY"),
    "IQ" => ("IRQ", "IRAQ"),
    "IR" => ("IRN", "IRAN"),
    "IS" => ("ISL", "ICELAND"),
    "IT" => ("ITA", "ITALY"),
    "JE" => ("JEY", "JERSEY"),
    "JM" => ("JAM", "JAMAICA"),
    "JO" => ("JOR", "JORDAN"),
    "JP" => ("JPN", "JAPAN"),
    "KE" => ("KEN", "KENYA"),
    "KG" => ("KGZ", "KYRGYZSTAN"),
    "KH" => ("KHM", "CAMBODIA"),
    "KI" => ("KIR", "KIRIBATI"),
    "KM" => ("COM", "COMOROS"),
    "KN" => ("KNA", "SAINT_KITTS_NEVIS"),
    "KP" => ("PRK", "KOREA_NORTH"),
    "KR" => ("KOR", "KOREA_SOUTH"),
    "KW" => ("KWT", "KUWAIT"),
    "KY" => ("CYM", "CAYMAN_ISLANDS"),
    "KZ" => ("KAZ", "KAZAKHSTAN"),
    "LA" => ("LAO", "LAO"),
    "LB" => ("LBN", "LEBANON"),
    "LC" => ("LCA", "SAINT_LUCIA"),
    "LI" => ("LIE", "LIECHTENSTEIN"),
    "LK" => ("LKA", "SRI_LANKA"),
    "LR" => ("LBR", "LIBERIA"),
    "LS" => ("LSO", "LESOTHO"),
    "LT" => ("LTU", "LITHUANIA"),
    "LU" => ("LUX", "LUXEMBOURG"),
    "LV" => ("LVA", "LATVIA"),
    "LY" => ("LBY", "LIBYA"),
    "MA" => ("MAR", "MOROCCO"),
    "MC" => ("MCO", "MONACO"),
    "MD" => ("MDA", "MOLDOVA"),
    "ME" => ("MNE", "MONTENEGRO"),
    "MF" => ("MAF", "SAINT_MARTIN_FRENCH"),
    "MG" => ("MDG", "MADAGASCAR"),
    "MH" => ("MHL", "MARSHALL_ISLANDS"),
    "MK" => ("MKD", "MACEDONIA"),
    "ML" => ("MLI", "MALI"),
    "MM" => ("MMR", "MYANMAR"),
    "MN" => ("MNG", "MONGOLIA"),
    "MO" => ("MAC", "MACAO"),
    "MP" => ("MNP", "NORTHERN_MARIANA_ISLANDS"),
    "MQ" => ("MTQ", "MARTINIQUE"),
    "MR" => ("MRT", "MAURITANIA"),
    "MS" => ("MSR", "MONTSERRAT"),
    "MT" => ("MLT", "MALTA"),
    "MU" => ("MUS", "MAURITIUS"),
    "MV" => ("MDV", "MALDIVES"),
    "MW" => ("MWI", "MALAWI"),
    "MX" => ("MEX", "MEXICO"),
    "MY" => ("MYS", "MALAYSIA"),
    "MZ" => ("MOZ", "MOZAMBIQUE"),
    "NA" => ("NAM", "NAMIBIA"),
    "NC" => ("NCL", "NEW_CALEDONIA"),
    "NE" => ("NER", "NIGER"),
    "NF" => ("NFK", "NORFOLK_ISLAND"),
    "NG" => ("NGA", "NIGERIA"),
    "NI" => ("NIC", "NICARAGUA"),
    "NL" => ("NLD", "NETHERLANDS"),
    "NO" => ("NOR", "NORWAY"),
    "NP" => ("NPL", "NEPAL"),
    "NR" => ("NRU", "NAURU"),
    "NU" => ("NIU", "NIUE"),
    "NZ" => ("NZL", "NEW_ZEALAND"),
    "OM" => ("OMN", "OMAN"),
    "PA" => ("PAN", "PANAMA"),
    "PE" => ("PER", "PERU"),
    "PF" => ("PYF", "FRENCH_POLYNESIA"),
    "PG" => ("PNG", "PAPUA_NEW_GUINEA"),
    "PH" => ("PHL", "PHILIPPINES"),
    "PK" => ("PAK", "PAKISTAN"),
    "PL" => ("POL", "POLAND"),
    "PM" => ("SPM", "SAINT_PIERRE_MIQUELON"),
    "PN" => ("PCN", "PITCAIRN"),
    "PR" => ("PRI", "PUERTO_RICO"),
    "PS" => ("PSE", "PALESTINIAN_TERRITORY"),
    "PT" => ("PRT", "PORTUGAL"),
    "PW" => ("PLW", "PALAU"),
    "PY" => ("PRY", "PARAGUAY"),
    "QA" => ("QAT", "QATAR"),
    "RE" => ("REU", "REUNION"),
    "RO" => ("ROU", "ROMANIA"),
    "RS" => ("SRB", "SERBIA"),
    "RU" => ("RUS", "RUSSIAN_FEDERATION"),
    "RW" => ("RWA", "RWANDA"),
    "SA" => ("SAU", "SAUDI_ARABIA"),
    "SB" => ("SLB", "SOLOMON_ISLANDS"),
    "SC" => ("SYC", "SEYCHELLES"),
    "SD" => ("SDN", "SUDAN"),
    "SE" => ("SWE", "SWEDEN"),
    "SG" => ("SGP", "SINGAPORE"),
    "SH" => ("SHN", "SAINT_HELENA_ASCENSION_TRISTAN_DA_CUNHA"),
    "SI" => ("SVN", "SLOVENIA"),
    "SJ" => ("SJM", "SVALBARD_JAN_MAYEN"),
    "SK" => ("SVK", "SLOVAKIA"),
    "SL" => ("SLE", "SIERRA_LEONE"),
    "SM" => ("SMR", "SAN_MARINO"),
    "SN" => ("SEN", "SENEGAL"),
    "SO" => ("SOM", "SOMALIA"),
    "SR" => ("SUR", "SURINAME"),
    "SS" => ("SSD", "SOUTH_SUDAN"),
    "ST" => ("STP", "SAO_TOME_PRINCIPE"),
    "SV" => ("SLV", "EL_SALVADOR"),
    "SX" => ("SXM", "SINT_MAARTEN"),
    "SY" => ("SYR", "SYRIA"),
    "SZ" => ("SWZ", "SWAZILAND"),
    "TC" => ("TCA", "TURKS_CAICOS_ISLANDS"),
    "TD" => ("TCD", "CHAD"),
    "TF" => ("ATF", "FRENCH_SOUTHERN_TERRITORIES"),
    "TG" => ("TGO", "TOGO"),
    "TH" => ("THA", "THAILAND"),
    "TJ" => ("TJK", "TAJIKISTAN"),
    "TK" => ("TKL", "TOKELAU"),
    "TL" => ("TLS", "TIMOR_LESTE"),
    "TM" => ("TKM", "TURKMENISTAN"),
    "TN" => ("TUN", "TUNISIA"),
    "TO" => ("TON", "TONGA"),
    "TR" => ("TUR", "TURKEY"),
    "TT" => ("TTO", "TRINIDAD_TOBAGO"),
    "TV" => ("TUV", "TUVALU"),
    "TW" => ("TWN", "TAIWAN"),
    "TZ" => ("TZA", "TANZANIA"),
    "UA" => ("UKR", "UKRAINE"),
    "UG" => ("UGA", "UGANDA"),
    "UM" => ("UMI", "UNITED_STATES_OUTLYING_ISLANDS"),
    "US" => ("USA", "UNITED_STATES"),
    "UY" => ("URY", "URUGUAY"),
    "UZ" => ("UZB", "UZBEKISTAN"),
    "VA" => ("VAT", "VATICAN"),
    "VC" => ("VCT", "SAINT_VINCENT_GRENADINES"),
    "VE" => ("VEN", "VENEZUELA"),
    "VG" => ("VGB", "VIRGIN_ISLANDS_BRITISH"),
    "VI" => ("VIR", "VIRGIN_ISLANDS"),
    "VN" => ("VNM", "VIETNAM"),
    "VU" => ("VUT", "VANUATU"),
    "WF" => ("WLF", "WALLIS_FUTUNA"),
    "WS" => ("WSM", "SAMOA"),
    "XK" => ("XKX", "KOSOVO"),
    "XZ" => ("XZZ", "INTERNATIONAL_WATERS"),
    "YE" => ("YEM", "YEMEN"),
    "YT" => ("MYT", "MAYOTTE"),
    "ZA" => ("ZAF", "SOUTH_AFRICA"),
    "ZM" => ("ZMB", "ZAMBIA"),
    "ZW" => ("ZWE", "ZIMBABWE"),
    "ZZ" => ("ZZZ", "UNKNOWN"),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_two_letter_codes() {
        let cr = Country::from_iso_code("CR").unwrap();
        assert_eq!(cr.iso3_code(), "CRI");
        assert_eq!(cr.name(), "COSTA_RICA");
        assert_eq!(Country::from_iso_code("de").unwrap().iso2_code(), "DE");
    }

    #[test]
    fn resolves_three_letter_codes() {
        assert_eq!(Country::from_iso_code("DEU").unwrap().iso2_code(), "DE");
        assert_eq!(Country::from_iso_code("xkx").unwrap().name(), "KOSOVO");
    }

    #[test]
    fn resolves_names() {
        assert_eq!(Country::lookup("costa rica").unwrap().iso2_code(), "CR");
        assert_eq!(Country::lookup("United-Kingdom").unwrap().iso2_code(), "GB");
    }

    #[test]
    fn rejects_unknown_values() {
        assert!(Country::lookup("CRCRCC").is_err());
        assert!(Country::lookup("").is_err());
        assert!(Country::from_iso_code("QQ").is_none());
    }
}
