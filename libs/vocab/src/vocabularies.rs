use crate::lookup::VariantSet;

pub const BASIS_OF_RECORD: VariantSet = VariantSet::new(
    "BasisOfRecord",
    &[
        "PRESERVED_SPECIMEN",
        "FOSSIL_SPECIMEN",
        "LIVING_SPECIMEN",
        "OBSERVATION",
        "HUMAN_OBSERVATION",
        "MACHINE_OBSERVATION",
        "MATERIAL_SAMPLE",
        "LITERATURE",
        "MATERIAL_CITATION",
        "OCCURRENCE",
        "UNKNOWN",
    ],
);

pub const CONTINENT: VariantSet = VariantSet::new(
    "Continent",
    &[
        "AFRICA",
        "ANTARCTICA",
        "ASIA",
        "OCEANIA",
        "EUROPE",
        "NORTH_AMERICA",
        "SOUTH_AMERICA",
    ],
);

pub const ENDPOINT_TYPE: VariantSet = VariantSet::new(
    "EndpointType",
    &[
        "EML",
        "FEED",
        "WFS",
        "WMS",
        "TCS_RDF",
        "TCS_XML",
        "DWC_ARCHIVE",
        "DIGIR",
        "DIGIR_MANIS",
        "TAPIR",
        "BIOCASE",
        "BIOCASE_XML_ARCHIVE",
        "OAI_PMH",
        "CAMTRAP_DP",
        "COLDP",
        "ACEF",
        "TEXT_TREE",
        "OTHER",
    ],
);

pub const ESTABLISHMENT_MEANS: VariantSet = VariantSet::new(
    "EstablishmentMeans",
    &[
        "NATIVE",
        "INTRODUCED",
        "NATURALISED",
        "INVASIVE",
        "MANAGED",
        "UNCERTAIN",
    ],
);

pub const LICENSE: VariantSet = VariantSet::new(
    "License",
    &[
        "CC0_1_0",
        "CC_BY_4_0",
        "CC_BY_NC_4_0",
        "UNSPECIFIED",
        "UNSUPPORTED",
    ],
);

pub const MEDIA_TYPE: VariantSet =
    VariantSet::new("MediaType", &["StillImage", "MovingImage", "Sound"]);

pub const TYPE_STATUS: VariantSet = VariantSet::new(
    "TypeStatus",
    &[
        "TYPE",
        "TYPE_SPECIES",
        "TYPE_GENUS",
        "ALLOLECTOTYPE",
        "ALLONEOTYPE",
        "ALLOTYPE",
        "COTYPE",
        "EPITYPE",
        "EXEPITYPE",
        "EXHOLOTYPE",
        "EXISOTYPE",
        "EXLECTOTYPE",
        "EXNEOTYPE",
        "EXPARATYPE",
        "EXSYNTYPE",
        "EXTYPE",
        "HAPANTOTYPE",
        "HOLOTYPE",
        "ICONOTYPE",
        "ISOLECTOTYPE",
        "ISONEOTYPE",
        "ISOSYNTYPE",
        "ISOTYPE",
        "LECTOTYPE",
        "NEOTYPE",
        "NOTATYPE",
        "ORIGINALMATERIAL",
        "PARALECTOTYPE",
        "PARANEOTYPE",
        "PARATYPE",
        "PLASTOHOLOTYPE",
        "PLASTOISOTYPE",
        "PLASTOLECTOTYPE",
        "PLASTONEOTYPE",
        "PLASTOPARATYPE",
        "PLASTOSYNTYPE",
        "PLASTOTYPE",
        "SECONDARYTYPE",
        "SUPPLEMENTARYTYPE",
        "SYNTYPE",
        "TOPOTYPE",
    ],
);

pub(crate) const ALL: &[VariantSet] = &[
    BASIS_OF_RECORD,
    CONTINENT,
    ENDPOINT_TYPE,
    ESTABLISHMENT_MEANS,
    LICENSE,
    MEDIA_TYPE,
    TYPE_STATUS,
];
