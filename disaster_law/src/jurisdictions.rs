//! Static reference data for the 56 tracked jurisdictions.

use crate::config::Region;

/// What is known about a jurisdiction independently of any source file.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct JurisdictionInfo {
    pub name: &'static str,
    /// Two-letter postal code, also used as the map location code.
    pub abbreviation: &'static str,
    /// Region used when no source file convention assigns one.
    pub fallback_region: Region,
    /// False for the District of Columbia and the five territories.
    pub is_state: bool,
    /// Approximate (latitude, longitude) centroid. Only the 50 states have one.
    pub centroid: Option<(f64, f64)>,
}

/// The 50 states, then the District of Columbia and the territories.
/// This is the order of the normalized output.
pub const JURISDICTIONS: [JurisdictionInfo; 56] = [
    JurisdictionInfo {
        name: "Alabama",
        abbreviation: "AL",
        fallback_region: Region::Southeast,
        is_state: true,
        centroid: Some((32.361667, -86.279167)),
    },
    JurisdictionInfo {
        name: "Alaska",
        abbreviation: "AK",
        fallback_region: Region::AlaskaHawaii,
        is_state: true,
        centroid: Some((64.200841, -149.493673)),
    },
    JurisdictionInfo {
        name: "Arizona",
        abbreviation: "AZ",
        fallback_region: Region::Southwest,
        is_state: true,
        centroid: Some((34.048928, -111.093731)),
    },
    JurisdictionInfo {
        name: "Arkansas",
        abbreviation: "AR",
        fallback_region: Region::Southeast,
        is_state: true,
        centroid: Some((35.20105, -92.500481)),
    },
    JurisdictionInfo {
        name: "California",
        abbreviation: "CA",
        fallback_region: Region::WestCoast,
        is_state: true,
        centroid: Some((36.778261, -119.417932)),
    },
    JurisdictionInfo {
        name: "Colorado",
        abbreviation: "CO",
        fallback_region: Region::MountainWest,
        is_state: true,
        centroid: Some((39.550051, -105.782067)),
    },
    JurisdictionInfo {
        name: "Connecticut",
        abbreviation: "CT",
        fallback_region: Region::Northeast,
        is_state: true,
        centroid: Some((41.603221, -73.087749)),
    },
    JurisdictionInfo {
        name: "Delaware",
        abbreviation: "DE",
        fallback_region: Region::MidAtlantic,
        is_state: true,
        centroid: Some((38.910832, -75.52767)),
    },
    JurisdictionInfo {
        name: "Florida",
        abbreviation: "FL",
        fallback_region: Region::Southeast,
        is_state: true,
        centroid: Some((27.664827, -81.515754)),
    },
    JurisdictionInfo {
        name: "Georgia",
        abbreviation: "GA",
        fallback_region: Region::Southeast,
        is_state: true,
        centroid: Some((32.165622, -82.900075)),
    },
    JurisdictionInfo {
        name: "Hawaii",
        abbreviation: "HI",
        fallback_region: Region::AlaskaHawaii,
        is_state: true,
        centroid: Some((19.896766, -155.582782)),
    },
    JurisdictionInfo {
        name: "Idaho",
        abbreviation: "ID",
        fallback_region: Region::MountainWest,
        is_state: true,
        centroid: Some((44.068202, -114.742041)),
    },
    JurisdictionInfo {
        name: "Illinois",
        abbreviation: "IL",
        fallback_region: Region::Midwest,
        is_state: true,
        centroid: Some((40.633125, -89.398528)),
    },
    JurisdictionInfo {
        name: "Indiana",
        abbreviation: "IN",
        fallback_region: Region::Midwest,
        is_state: true,
        centroid: Some((40.267194, -86.134902)),
    },
    JurisdictionInfo {
        name: "Iowa",
        abbreviation: "IA",
        fallback_region: Region::Midwest,
        is_state: true,
        centroid: Some((41.878003, -93.097702)),
    },
    JurisdictionInfo {
        name: "Kansas",
        abbreviation: "KS",
        fallback_region: Region::Midwest,
        is_state: true,
        centroid: Some((39.011902, -98.484246)),
    },
    JurisdictionInfo {
        name: "Kentucky",
        abbreviation: "KY",
        fallback_region: Region::Appalachia,
        is_state: true,
        centroid: Some((37.839333, -84.270018)),
    },
    JurisdictionInfo {
        name: "Louisiana",
        abbreviation: "LA",
        fallback_region: Region::Southeast,
        is_state: true,
        centroid: Some((30.984298, -91.962333)),
    },
    JurisdictionInfo {
        name: "Maine",
        abbreviation: "ME",
        fallback_region: Region::Northeast,
        is_state: true,
        centroid: Some((45.253783, -69.445469)),
    },
    JurisdictionInfo {
        name: "Maryland",
        abbreviation: "MD",
        fallback_region: Region::MidAtlantic,
        is_state: true,
        centroid: Some((39.045755, -76.641271)),
    },
    JurisdictionInfo {
        name: "Massachusetts",
        abbreviation: "MA",
        fallback_region: Region::Northeast,
        is_state: true,
        centroid: Some((42.407211, -71.382437)),
    },
    JurisdictionInfo {
        name: "Michigan",
        abbreviation: "MI",
        fallback_region: Region::Midwest,
        is_state: true,
        centroid: Some((44.314844, -85.602364)),
    },
    JurisdictionInfo {
        name: "Minnesota",
        abbreviation: "MN",
        fallback_region: Region::Midwest,
        is_state: true,
        centroid: Some((46.729553, -94.6859)),
    },
    JurisdictionInfo {
        name: "Mississippi",
        abbreviation: "MS",
        fallback_region: Region::Southeast,
        is_state: true,
        centroid: Some((32.354668, -89.398528)),
    },
    JurisdictionInfo {
        name: "Missouri",
        abbreviation: "MO",
        fallback_region: Region::Midwest,
        is_state: true,
        centroid: Some((37.964253, -91.831833)),
    },
    JurisdictionInfo {
        name: "Montana",
        abbreviation: "MT",
        fallback_region: Region::MountainWest,
        is_state: true,
        centroid: Some((46.879682, -110.362566)),
    },
    JurisdictionInfo {
        name: "Nebraska",
        abbreviation: "NE",
        fallback_region: Region::Midwest,
        is_state: true,
        centroid: Some((41.492537, -99.901813)),
    },
    JurisdictionInfo {
        name: "Nevada",
        abbreviation: "NV",
        fallback_region: Region::MountainWest,
        is_state: true,
        centroid: Some((38.80261, -116.419389)),
    },
    JurisdictionInfo {
        name: "New Hampshire",
        abbreviation: "NH",
        fallback_region: Region::Northeast,
        is_state: true,
        centroid: Some((43.193852, -71.572395)),
    },
    JurisdictionInfo {
        name: "New Jersey",
        abbreviation: "NJ",
        fallback_region: Region::MidAtlantic,
        is_state: true,
        centroid: Some((40.058324, -74.405661)),
    },
    JurisdictionInfo {
        name: "New Mexico",
        abbreviation: "NM",
        fallback_region: Region::Southwest,
        is_state: true,
        centroid: Some((34.51994, -105.87009)),
    },
    JurisdictionInfo {
        name: "New York",
        abbreviation: "NY",
        fallback_region: Region::Northeast,
        is_state: true,
        centroid: Some((43.299428, -74.217933)),
    },
    JurisdictionInfo {
        name: "North Carolina",
        abbreviation: "NC",
        fallback_region: Region::Southeast,
        is_state: true,
        centroid: Some((35.759573, -79.0193)),
    },
    JurisdictionInfo {
        name: "North Dakota",
        abbreviation: "ND",
        fallback_region: Region::Midwest,
        is_state: true,
        centroid: Some((47.551493, -101.002012)),
    },
    JurisdictionInfo {
        name: "Ohio",
        abbreviation: "OH",
        fallback_region: Region::Midwest,
        is_state: true,
        centroid: Some((40.417287, -82.907123)),
    },
    JurisdictionInfo {
        name: "Oklahoma",
        abbreviation: "OK",
        fallback_region: Region::Southwest,
        is_state: true,
        centroid: Some((35.007752, -97.092877)),
    },
    JurisdictionInfo {
        name: "Oregon",
        abbreviation: "OR",
        fallback_region: Region::WestCoast,
        is_state: true,
        centroid: Some((43.804133, -120.554201)),
    },
    JurisdictionInfo {
        name: "Pennsylvania",
        abbreviation: "PA",
        fallback_region: Region::MidAtlantic,
        is_state: true,
        centroid: Some((41.203322, -77.194525)),
    },
    JurisdictionInfo {
        name: "Rhode Island",
        abbreviation: "RI",
        fallback_region: Region::Northeast,
        is_state: true,
        centroid: Some((41.580095, -71.477429)),
    },
    JurisdictionInfo {
        name: "South Carolina",
        abbreviation: "SC",
        fallback_region: Region::Southeast,
        is_state: true,
        centroid: Some((33.836081, -81.163725)),
    },
    JurisdictionInfo {
        name: "South Dakota",
        abbreviation: "SD",
        fallback_region: Region::Midwest,
        is_state: true,
        centroid: Some((43.969515, -99.901813)),
    },
    JurisdictionInfo {
        name: "Tennessee",
        abbreviation: "TN",
        fallback_region: Region::Appalachia,
        is_state: true,
        centroid: Some((35.517491, -86.580447)),
    },
    JurisdictionInfo {
        name: "Texas",
        abbreviation: "TX",
        fallback_region: Region::Southwest,
        is_state: true,
        centroid: Some((31.968599, -99.901813)),
    },
    JurisdictionInfo {
        name: "Utah",
        abbreviation: "UT",
        fallback_region: Region::MountainWest,
        is_state: true,
        centroid: Some((39.32098, -111.093731)),
    },
    JurisdictionInfo {
        name: "Vermont",
        abbreviation: "VT",
        fallback_region: Region::Northeast,
        is_state: true,
        centroid: Some((44.558803, -72.577841)),
    },
    JurisdictionInfo {
        name: "Virginia",
        abbreviation: "VA",
        fallback_region: Region::MidAtlantic,
        is_state: true,
        centroid: Some((37.431573, -78.656894)),
    },
    JurisdictionInfo {
        name: "Washington",
        abbreviation: "WA",
        fallback_region: Region::WestCoast,
        is_state: true,
        centroid: Some((47.751074, -120.740139)),
    },
    JurisdictionInfo {
        name: "West Virginia",
        abbreviation: "WV",
        fallback_region: Region::Appalachia,
        is_state: true,
        centroid: Some((38.597626, -80.454903)),
    },
    JurisdictionInfo {
        name: "Wisconsin",
        abbreviation: "WI",
        fallback_region: Region::Midwest,
        is_state: true,
        centroid: Some((43.78444, -88.787868)),
    },
    JurisdictionInfo {
        name: "Wyoming",
        abbreviation: "WY",
        fallback_region: Region::MountainWest,
        is_state: true,
        centroid: Some((43.075968, -107.290284)),
    },
    JurisdictionInfo {
        name: "District of Columbia",
        abbreviation: "DC",
        fallback_region: Region::MidAtlantic,
        is_state: false,
        centroid: None,
    },
    JurisdictionInfo {
        name: "Puerto Rico",
        abbreviation: "PR",
        fallback_region: Region::Territories,
        is_state: false,
        centroid: None,
    },
    JurisdictionInfo {
        name: "Guam",
        abbreviation: "GU",
        fallback_region: Region::Territories,
        is_state: false,
        centroid: None,
    },
    JurisdictionInfo {
        name: "U.S. Virgin Islands",
        abbreviation: "VI",
        fallback_region: Region::Territories,
        is_state: false,
        centroid: None,
    },
    JurisdictionInfo {
        name: "American Samoa",
        abbreviation: "AS",
        fallback_region: Region::Territories,
        is_state: false,
        centroid: None,
    },
    JurisdictionInfo {
        name: "Northern Mariana Islands",
        abbreviation: "MP",
        fallback_region: Region::Territories,
        is_state: false,
        centroid: None,
    },
];

pub fn lookup(name: &str) -> Option<&'static JurisdictionInfo> {
    JURISDICTIONS.iter().find(|j| j.name == name)
}

pub fn lookup_abbreviation(abbreviation: &str) -> Option<&'static JurisdictionInfo> {
    JURISDICTIONS
        .iter()
        .find(|j| j.abbreviation.eq_ignore_ascii_case(abbreviation))
}

/// The canonical spelling of a jurisdiction name, if the text is exactly one.
pub fn canonical_name(name: &str) -> Option<&'static str> {
    lookup(name).map(|j| j.name)
}

pub fn fallback_region(name: &str) -> Option<Region> {
    lookup(name).map(|j| j.fallback_region)
}
