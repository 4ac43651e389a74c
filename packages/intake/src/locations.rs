//! Municipality and barangay reference data for the province.
//!
//! Values use the `NAME/PSGC-CODE` form the spreadsheet expects; use
//! [`display_name`] to drop the code for review screens.

type Table = &'static [(&'static str, &'static [&'static str])];

/// Closed list of municipalities and the barangays that belong to each.
#[derive(Clone, Copy, Debug)]
pub struct LocationCatalog {
    table: Table,
}

impl Default for LocationCatalog {
    fn default() -> Self {
        Self::camarines_norte()
    }
}

impl LocationCatalog {
    pub const fn new(table: Table) -> Self {
        Self { table }
    }

    /// The catalog the intake form ships with.
    pub const fn camarines_norte() -> Self {
        Self::new(CAMARINES_NORTE)
    }

    pub fn municipalities(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.table.iter().map(|(name, _)| *name)
    }

    pub fn has_municipality(&self, municipality: &str) -> bool {
        self.table.iter().any(|(name, _)| *name == municipality)
    }

    /// Barangays of `municipality`; empty for an unknown municipality.
    pub fn barangays_of(&self, municipality: &str) -> &'static [&'static str] {
        self.table
            .iter()
            .find(|(name, _)| *name == municipality)
            .map(|(_, barangays)| *barangays)
            .unwrap_or(&[])
    }

    pub fn contains(&self, municipality: &str, barangay: &str) -> bool {
        self.barangays_of(municipality)
            .iter()
            .any(|candidate| *candidate == barangay)
    }
}

/// `"DAET (Capital)/051603000"` → `"DAET (Capital)"`.
///
/// Splits on the last `/` so names that contain one keep it.
pub fn display_name(value: &str) -> &str {
    match value.rsplit_once('/') {
        Some((name, code)) if !code.is_empty() && code.chars().all(|c| c.is_ascii_digit()) => name,
        _ => value,
    }
}

const CAMARINES_NORTE: Table = &[
    (
        "BASUD/051601000",
        &[
            "ANGAS/051601001",
            "BACTAS/051601002",
            "BINATAGAN/051601003",
            "CAAYUNAN/051601004",
            "GUINATUNGAN/051601005",
            "HINAMPACAN/051601006",
            "LANGA/051601007",
            "LANITON/051601008",
            "LIDONG/051601009",
            "MAMPILI/051601010",
            "MANDAZO/051601011",
            "MANGCAMAGONG/051601012",
            "MANMUNTAY/051601014",
            "MANTUGAWE/051601015",
            "MATNOG/051601016",
            "MOCONG/051601017",
            "OLIVA/051601018",
            "PAGSANGAHAN/051601019",
            "PINAGWARASAN/051601020",
            "PLARIDEL/051601021",
            "POBLACION 1/051601022",
            "SAN FELIPE/051601025",
            "SAN JOSE/051601027",
            "SAN PASCUAL/051601028",
            "TABA-TABA/051601030",
            "TACAD/051601031",
            "TAISAN/051601032",
            "TUACA/051601033",
            "POBLACION 2/051601034",
        ],
    ),
    (
        "DAET (Capital)/051603000",
        &[
            "ALAWIHAO/051603001",
            "AWITAN/051603002",
            "BAGASBAS/051603003",
            "BIBIRAO/051603004",
            "BORABOD/051603005",
            "CALASGASAN/051603006",
            "CAMAMBUGAN/051603007",
            "COBANGBANG (CARUMPIT)/051603008",
            "DOGONGAN/051603012",
            "GAHONON/051603013",
            "GUBAT/051603014",
            "LAG-ON/051603015",
            "MAGANG/051603018",
            "MAMBALITE/051603019",
            "MANCRUZ (MANGCRUZ)/051603021",
            "PAMORANGON/051603023",
            "BARANGAY I (POB.)/051603024",
            "BARANGAY II (POB.)/051603025",
            "BARANGAY III (POB.)/051603026",
            "BARANGAY IV (POB.)/051603027",
            "BARANGAY V (POB.)/051603028",
            "BARANGAY VI (POB.)/051603029",
            "BARANGAY VII (POB.)/051603030",
            "BARANGAY VIII (POB.)/051603031",
            "SAN ISIDRO/051603032",
        ],
    ),
    (
        "MERCEDES/051607000",
        &[
            "APUAO/051607001",
            "BARANGAY I (POB.)/051607002",
            "BARANGAY II (POB.)/051607003",
            "BARANGAY III (POB.)/051607004",
            "BARANGAY IV (POB.)/051607005",
            "BARANGAY V (POB.)/051607006",
            "BARANGAY VI (POB.)/051607007",
            "BARANGAY VII (POB.)/051607008",
            "CARINGO/051607009",
            "CATANDUNGANON/051607010",
            "CAYUCYUCAN/051607011",
            "COLASI/051607012",
            "DEL ROSARIO (TAGONGTONG)/051607013",
            "GABOC/051607014",
            "HAMORAON/051607015",
            "HINIPAAN/051607016",
            "LALAWIGAN/051607017",
            "LANOT/051607018",
            "MAMBUNGALON/051607019",
            "MANGUISOC/051607020",
            "MASALONGSALONG/051607021",
            "MATOOGTOOG/051607022",
            "PAMBUHAN/051607023",
            "QUINAPAGUIAN/051607024",
            "SAN ROQUE/051607025",
            "TARUM/051607026",
        ],
    ),
    (
        "SAN LORENZO RUIZ (IMELDA)/051604000",
        &[
            "DACULANG BOLO/051604001",
            "DAGOTDOTAN/051604002",
            "LANGGA/051604003",
            "LANITON/051604004",
            "MAISOG/051604005",
            "MAMPUROG/051604006",
            "MANLIMONSITO/051604007",
            "MATACONG (POB.)/051604008",
            "SALVACION/051604009",
            "SAN ANTONIO/051604010",
            "SAN ISIDRO/051604011",
            "SAN RAMON/051604012",
        ],
    ),
    (
        "SAN VICENTE/051609000",
        &[
            "ASDUM/051609001",
            "CABANBANAN/051609002",
            "CALABAGAS/051609003",
            "FABRICA/051609004",
            "IRAYA SUR/051609005",
            "MAN-OGOB/051609006",
            "POBLACION DISTRICT I (SILANGAN/BGY. 1)/051609007",
            "POBLACION DISTRICT II (KANLURAN/BGY. 2)/051609008",
            "SAN JOSE (IRAYA NORTE)/051609009",
        ],
    ),
    (
        "TALISAY/051611000",
        &[
            "BINANUAAN/051611001",
            "CAAWIGAN/051611002",
            "CAHABAAN/051611003",
            "CALINTAAN/051611004",
            "DEL CARMEN/051611005",
            "GABON/051611006",
            "ITOMANG/051611007",
            "POBLACION/051611008",
            "SAN FRANCISCO/051611009",
            "SAN ISIDRO/051611010",
            "SAN JOSE/051611011",
            "SAN NICOLAS/051611012",
            "SANTA CRUZ/051611013",
            "SANTA ELENA/051611014",
            "SANTO NIÑO/051611015",
        ],
    ),
    (
        "VINZONS/051612000",
        &[
            "AGUIT-IT/051612001",
            "BANOCBOC/051612002",
            "CAGBALOGO/051612004",
            "CALANGCAWAN NORTE/051612005",
            "CALANGCAWAN SUR/051612006",
            "GUINACUTAN/051612007",
            "MANGCAYO/051612008",
            "MANGCAWAYAN/051612009",
            "MANLUCUGAN/051612010",
            "MATANGO/051612011",
            "NAPILIHAN/051612012",
            "PINAGTIGASAN/051612013",
            "BARANGAY I (POB.)/051612014",
            "BARANGAY II (POB.)/051612015",
            "BARANGAY III (POB.)/051612016",
            "SABANG/051612017",
            "SANTO DOMINGO/051612018",
            "SINGI/051612019",
            "SULA/051612020",
        ],
    ),
];
