//! Static sample data the generators draw from.

use serde::Serialize;

use x12_types::LineOfBusiness;

pub const COMPANY_NAMES: &[&str] = &[
    "ACME CORP",
    "GLOBEX INC",
    "INITECH LLC",
    "UMBRELLA CO",
    "WAYNE ENTERPRISES",
    "STARK INDUSTRIES",
    "CYBERDYNE SYSTEMS",
    "OSCORP INDUSTRIES",
    "SOYLENT CORP",
    "MASSIVE DYNAMIC",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Address {
    pub street: &'static str,
    pub city: &'static str,
    pub state: &'static str,
    pub postal_code: &'static str,
}

const fn addr(
    street: &'static str,
    city: &'static str,
    state: &'static str,
    postal_code: &'static str,
) -> Address {
    Address {
        street,
        city,
        state,
        postal_code,
    }
}

pub const ADDRESSES: &[Address] = &[
    addr("123 MAIN ST", "NEW YORK", "NY", "10001"),
    addr("456 OAK AVE", "LOS ANGELES", "CA", "90001"),
    addr("789 PINE RD", "CHICAGO", "IL", "60601"),
    addr("321 ELM BLVD", "HOUSTON", "TX", "77001"),
    addr("654 MAPLE DR", "PHOENIX", "AZ", "85001"),
    addr("987 CEDAR LN", "SEATTLE", "WA", "98101"),
    addr("111 BIRCH CT", "DENVER", "CO", "80201"),
    addr("222 WALNUT ST", "ATLANTA", "GA", "30301"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Product {
    pub sku: &'static str,
    pub description: &'static str,
    pub unit_price_cents: i64,
    pub unit: &'static str,
}

const fn product(
    sku: &'static str,
    description: &'static str,
    unit_price_cents: i64,
    unit: &'static str,
) -> Product {
    Product {
        sku,
        description,
        unit_price_cents,
        unit,
    }
}

pub const PRODUCTS: &[Product] = &[
    product("WIDGET-A100", "Industrial Widget Type A", 1_250, "EA"),
    product("GADGET-B200", "Electronic Gadget Model B", 4_599, "EA"),
    product("BOLT-HX-10MM", "Hex Bolt 10mm Grade 8", 35, "PK"),
    product("PIPE-SCH40-2", "Steel Pipe SCH40 2 inch", 2_875, "FT"),
    product("FILTER-OIL-5", "Oil Filter 5 Micron", 899, "EA"),
    product("CABLE-CAT6-B", "CAT6 Ethernet Cable Blue", 1_540, "EA"),
    product("BEARING-6205", "Ball Bearing 6205-2RS", 625, "EA"),
    product("SEAL-ORING-L", "O-Ring Seal Large", 110, "BG"),
    product("MOTOR-AC-1HP", "AC Motor 1HP 1750RPM", 18_900, "EA"),
    product("VALVE-GATE-3", "Gate Valve 3 inch Brass", 7_450, "EA"),
];

/// `(SCAC code, carrier name)`.
pub const CARRIERS: &[(&str, &str)] = &[
    ("UPSN", "UPS GROUND"),
    ("FEDX", "FEDEX EXPRESS"),
    ("USPS", "USPS PRIORITY"),
    ("RDWY", "ROADWAY EXPRESS"),
    ("ABFS", "ABF FREIGHT"),
];

/// `(ITD01 terms type code, description)`.
pub const PAYMENT_TERMS: &[(&str, &str)] = &[
    ("01", "NET 30"),
    ("02", "NET 60"),
    ("05", "2% 10 NET 30"),
    ("08", "NET 15"),
    ("14", "DUE ON RECEIPT"),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Payer {
    pub name: &'static str,
    pub payer_id: &'static str,
    pub line_of_business: LineOfBusiness,
}

const fn payer(name: &'static str, payer_id: &'static str, lob: LineOfBusiness) -> Payer {
    Payer {
        name,
        payer_id,
        line_of_business: lob,
    }
}

pub const PAYERS: &[Payer] = &[
    payer("BLUE SHIELD OF EXAMPLE", "BSX01", LineOfBusiness::Commercial),
    payer("UNITED SAMPLE HEALTH", "USH87", LineOfBusiness::Commercial),
    payer("AETNA TEST PLAN", "ATP60", LineOfBusiness::Commercial),
    payer("MEDICARE PART B REGION 1", "MCRB1", LineOfBusiness::Medicare),
    payer("MEDICARE ADVANTAGE DEMO", "MAD22", LineOfBusiness::Medicare),
    payer("STATE MEDICAID AGENCY", "SMA05", LineOfBusiness::Medicaid),
    payer("MEDICAID MANAGED CARE CO", "MMC31", LineOfBusiness::Medicaid),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Provider {
    pub name: &'static str,
    pub npi: &'static str,
    pub taxonomy: &'static str,
}

pub const PROVIDERS: &[Provider] = &[
    Provider {
        name: "RIVERSIDE FAMILY PRACTICE",
        npi: "1234567893",
        taxonomy: "207Q00000X",
    },
    Provider {
        name: "LAKESHORE PEDIATRICS",
        npi: "1588667638",
        taxonomy: "208000000X",
    },
    Provider {
        name: "SUMMIT ORTHOPEDIC GROUP",
        npi: "1497758544",
        taxonomy: "207X00000X",
    },
    Provider {
        name: "VALLEY INTERNAL MEDICINE",
        npi: "1972557387",
        taxonomy: "207R00000X",
    },
];

pub const FIRST_NAMES: &[&str] = &[
    "JOHN", "MARY", "ROBERT", "PATRICIA", "MICHAEL", "LINDA", "DAVID", "ELENA", "JAMES", "SUSAN",
];

pub const LAST_NAMES: &[&str] = &[
    "SMITH", "JOHNSON", "WILLIAMS", "BROWN", "JONES", "GARCIA", "MILLER", "DAVIS", "LOPEZ", "NGUYEN",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Procedure {
    pub code: &'static str,
    pub description: &'static str,
    pub charge_cents: i64,
}

const fn procedure(code: &'static str, description: &'static str, charge_cents: i64) -> Procedure {
    Procedure {
        code,
        description,
        charge_cents,
    }
}

pub const PROCEDURES: &[Procedure] = &[
    procedure("99213", "OFFICE VISIT EST LEVEL 3", 12_500),
    procedure("99214", "OFFICE VISIT EST LEVEL 4", 18_500),
    procedure("99203", "OFFICE VISIT NEW LEVEL 3", 16_000),
    procedure("85025", "COMPLETE CBC W/AUTO DIFF", 3_200),
    procedure("80053", "COMPREHENSIVE METABOLIC PANEL", 4_500),
    procedure("93000", "ELECTROCARDIOGRAM COMPLETE", 7_500),
    procedure("71046", "CHEST X-RAY 2 VIEWS", 9_800),
    procedure("90686", "FLU VACCINE QUADRIVALENT", 2_800),
];

/// ICD-10-CM codes without the decimal point, as transmitted.
pub const DIAGNOSES: &[&str] = &["E119", "I10", "J069", "M545", "Z0000", "R05", "K219", "E785"];

/// `(place of service code, description)`.
pub const PLACES_OF_SERVICE: &[(&str, &str)] = &[
    ("11", "OFFICE"),
    ("22", "ON CAMPUS OUTPATIENT HOSPITAL"),
    ("02", "TELEHEALTH"),
];

/// The sample pools available to one generation run.
///
/// Built once from the run's configuration and passed to every generator,
/// so a line-of-business restriction never leaks between runs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DataPool {
    line_of_business: Option<LineOfBusiness>,
    payers: Vec<Payer>,
}

impl DataPool {
    /// All payers, or only those of one line of business.
    pub fn new(line_of_business: Option<LineOfBusiness>) -> Self {
        let payers = PAYERS
            .iter()
            .filter(|p| line_of_business.map_or(true, |lob| p.line_of_business == lob))
            .copied()
            .collect();
        Self {
            line_of_business,
            payers,
        }
    }

    pub fn line_of_business(&self) -> Option<LineOfBusiness> {
        self.line_of_business
    }

    pub fn payers(&self) -> &[Payer] {
        &self.payers
    }
}

impl Default for DataPool {
    fn default() -> Self {
        Self::new(None)
    }
}
