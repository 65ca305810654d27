use super::types::Site;

/// Every known antenna, in display roster order.
pub(super) const ANTENNAS: &[(&str, Site)] = &[
    ("DSS26", Site::Goldstone),
    ("DSS25", Site::Goldstone),
    ("DSS24", Site::Goldstone),
    ("DSS14", Site::Goldstone),
    ("DSS34", Site::Canberra),
    ("DSS35", Site::Canberra),
    ("DSS36", Site::Canberra),
    ("DSS43", Site::Canberra),
    ("DSS54", Site::Madrid),
    ("DSS55", Site::Madrid),
    ("DSS56", Site::Madrid),
    ("DSS65", Site::Madrid),
    ("DSS63", Site::Madrid),
];

type SourceRow = (&'static str, &'static str);

// id, short name, long name, sources
pub(super) const SPACECRAFT: &[(&str, &str, &str, &[SourceRow])] = &[
    (
        "96",
        "SPP",
        "Parker Solar Probe",
        &[(
            "Parker Solar Probe, Wikipedia",
            "https://en.wikipedia.org/wiki/Parker_Solar_Probe",
        )],
    ),
    (
        "234",
        "STA",
        "STEREO A",
        &[("STEREO, Wikipedia", "https://en.wikipedia.org/wiki/STEREO")],
    ),
    (
        "64",
        "ORX",
        "OSIRIS-REx",
        &[(
            "OSIRIS-REx, Wikipedia",
            "https://en.wikipedia.org/wiki/OSIRIS-REx",
        )],
    ),
    (
        "168",
        "M20",
        "Mars 2020 (Perseverance)",
        &[(
            "Perseverance (rover), Wikipedia",
            "https://en.wikipedia.org/wiki/Perseverance_(rover)",
        )],
    ),
    (
        "62",
        "EMM",
        "Emirates Mars Mission (Hope)",
        &[(
            "Emirates Mars Mission (Hope), Wikipedia",
            "https://en.wikipedia.org/wiki/Emirates_Mars_Mission",
        )],
    ),
    (
        "202",
        "MVN",
        "Mars Atmosphere and Volatile EvolutioN (MAVEN)",
        &[("MAVEN, Wikipedia", "https://en.wikipedia.org/wiki/MAVEN")],
    ),
    (
        "53",
        "M01O",
        "Mars Odyssey",
        &[(
            "Mars Odyssey, Wikipedia",
            "https://en.wikipedia.org/wiki/2001_Mars_Odyssey",
        )],
    ),
    (
        "76",
        "MSL",
        "Mars Science Laboratory (Curiosity)",
        &[(
            "Curiosity (rover), Wikipedia",
            "https://en.wikipedia.org/wiki/Curiosity_(rover)",
        )],
    ),
    (
        "143",
        "TGO",
        "Trace Gas Orbiter",
        &[(
            "Trace Gas Orbiter, Wikipedia",
            "https://en.wikipedia.org/wiki/Trace_Gas_Orbiter",
        )],
    ),
    (
        "74",
        "MRO",
        "Mars Reconnaissance Orbiter",
        &[(
            "Mars Reconnaissance Orbiter, Wikipedia",
            "https://en.wikipedia.org/wiki/Mars_Reconnaissance_Orbiter",
        )],
    ),
    (
        "32",
        "VGR2",
        "Voyager 2",
        &[("Voyager 2, Wikipedia", "https://en.wikipedia.org/wiki/Voyager_2")],
    ),
    (
        "151",
        "CHDR",
        "Chandra X-ray Observatory",
        &[(
            "Chandra X-ray Observatory, Wikipedia",
            "https://en.wikipedia.org/wiki/Chandra_X-ray_Observatory",
        )],
    ),
    (
        "85",
        "LRO",
        "Lunar Reconnaissance Orbiter",
        &[(
            "Lunar Reconnaissance Orbiter, Wikipedia",
            "https://en.wikipedia.org/wiki/Lunar_Reconnaissance_Orbiter",
        )],
    ),
    (
        "21",
        "SOHO",
        "Solar and Heliospheric Observatory",
        &[(
            "Solar and Heliospheric Observatory, Wikipedia",
            "https://en.wikipedia.org/wiki/Solar_and_Heliospheric_Observatory",
        )],
    ),
    (
        "31",
        "VGR1",
        "Voyager 1",
        &[("Voyager 1, Wikipedia", "https://en.wikipedia.org/wiki/Voyager_1")],
    ),
    (
        "1",
        "GTL",
        "Geotail",
        &[("Geotail, Wikipedia", "https://en.wikipedia.org/wiki/Geotail")],
    ),
    ("50", "DSN", "Testing", &[]),
    ("99", "TEST", "Testing", &[]),
    (
        "61",
        "JNO",
        "Juno",
        &[(
            "Juno, Wikipedia",
            "https://en.wikipedia.org/wiki/Juno_(spacecraft)",
        )],
    ),
    (
        "78",
        "DSCO",
        "Deep Space Climate Observatory",
        &[(
            "Deep Space Climate Observatory, Wikipedia",
            "https://en.wikipedia.org/wiki/Deep_Space_Climate_Observatory",
        )],
    ),
    (
        "217",
        "GBRA",
        "Ground Based Radio Astronomy",
        &[(
            "Radio Telescope, Wikipedia",
            "https://en.wikipedia.org/wiki/Radio_telescope",
        )],
    ),
    (
        "108",
        "MMS1",
        "Magnetospheric Multiscale Mission 1",
        &[(
            "Magnetospheric Multiscale Mission, Wikipedia",
            "https://en.wikipedia.org/wiki/Magnetospheric_Multiscale_Mission",
        )],
    ),
    (
        "109",
        "MMS2",
        "Magnetospheric Multiscale Mission 2",
        &[(
            "Magnetospheric Multiscale Mission, Wikipedia",
            "https://en.wikipedia.org/wiki/Magnetospheric_Multiscale_Mission",
        )],
    ),
    (
        "110",
        "MMS3",
        "Magnetospheric Multiscale Mission 3",
        &[(
            "Magnetospheric Multiscale Mission, Wikipedia",
            "https://en.wikipedia.org/wiki/Magnetospheric_Multiscale_Mission",
        )],
    ),
    (
        "113",
        "MMS4",
        "Magnetospheric Multiscale Mission 4",
        &[(
            "Magnetospheric Multiscale Mission, Wikipedia",
            "https://en.wikipedia.org/wiki/Magnetospheric_Multiscale_Mission",
        )],
    ),
    (
        "192",
        "THB",
        "THEMIS B",
        &[("THEMIS, Wikipedia", "https://en.wikipedia.org/wiki/THEMIS")],
    ),
    (
        "189",
        "NYST",
        "InSight",
        &[("InSight, Wikipedia", "https://en.wikipedia.org/wiki/InSight")],
    ),
    (
        "41",
        "MEX",
        "Mars Express",
        &[(
            "Mars Express, Wikipedia",
            "https://en.wikipedia.org/wiki/Mars_Express",
        )],
    ),
    (
        "92",
        "ACE",
        "Advanced Composition Explorer",
        &[(
            "Advanced Composition Explorer, Wikipedia",
            "https://en.wikipedia.org/wiki/Advanced_Composition_Explorer",
        )],
    ),
    (
        "98",
        "NHPC",
        "New Horizons",
        &[(
            "New Horizons, Wikipedia",
            "https://en.wikipedia.org/wiki/New_Horizons",
        )],
    ),
];
