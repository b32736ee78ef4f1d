use crate::model::Location;

/// The virtual sensor network: critical locations across Hyderabad.
///
/// Compiled into the binary; names must stay pairwise distinct because they
/// are the upsert conflict key.
pub const LOCATIONS: &[Location] = &[
    Location { name: "Hitech City", lat: 17.4486, lng: 78.3918 },
    Location { name: "Gachibowli", lat: 17.4410, lng: 78.3439 },
    Location { name: "Banjara Hills", lat: 17.4150, lng: 78.4412 },
    Location { name: "Secunderabad", lat: 17.4399, lng: 78.4983 },
    Location { name: "Charminar", lat: 17.3616, lng: 78.4747 },
    Location { name: "Kukatpally", lat: 17.4848, lng: 78.4118 },
    Location { name: "Begumpet", lat: 17.4428, lng: 78.4682 },
    Location { name: "Uppal", lat: 17.3984, lng: 78.5583 },
];
