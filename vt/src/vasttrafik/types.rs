//! Västtrafik REST API response DTOs.
//!
//! These types map directly to the JSON produced by the v1 API. The API
//! encodes "one element" as a bare object and "several" as an array, so
//! list-valued fields go through [`OneOrMany`]. Optional fields are simply
//! left out of the response when unknown.

use serde::Deserialize;

/// A field that holds either a single object or an array of them.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// Flatten into a vector, keeping order.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// Response of the `trip` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct TripResponse {
    #[serde(rename = "TripList")]
    pub trip_list: TripList,
}

/// Trip suggestions, or an error reported inside a successful response.
#[derive(Debug, Clone, Deserialize)]
pub struct TripList {
    /// Server time when the response was produced (`HH:MM`).
    #[serde(rename = "servertime")]
    pub server_time: Option<String>,

    /// Server date when the response was produced (`YYYY-MM-DD`).
    #[serde(rename = "serverdate")]
    pub server_date: Option<String>,

    /// Suggested trips, absent when there are none.
    #[serde(rename = "Trip")]
    pub trips: Option<OneOrMany<TripDto>>,

    /// Machine-readable error code.
    pub error: Option<String>,

    /// Human-readable error message.
    #[serde(rename = "errorText")]
    pub error_text: Option<String>,
}

/// One suggested trip.
#[derive(Debug, Clone, Deserialize)]
pub struct TripDto {
    /// A single leg object, or the ordered list of legs.
    #[serde(rename = "Leg")]
    pub legs: OneOrMany<LegDto>,
}

/// One leg of a trip.
#[derive(Debug, Clone, Deserialize)]
pub struct LegDto {
    /// Full line name, e.g. "Spårvagn 6" or "Gå".
    pub name: Option<String>,

    /// Short line name, e.g. "6". Absent for walks.
    pub sname: Option<String>,

    /// Leg type: "TRAM", "BUS", "VAS", "WALK", ...
    #[serde(rename = "type")]
    pub kind: Option<String>,

    /// Headsign of the vehicle.
    pub direction: Option<String>,

    /// Line foreground color from the operator, `#rrggbb`.
    #[serde(rename = "fgColor")]
    pub fg_color: Option<String>,

    /// Line background color from the operator, `#rrggbb`.
    #[serde(rename = "bgColor")]
    pub bg_color: Option<String>,

    #[serde(rename = "Origin")]
    pub origin: StopDto,

    #[serde(rename = "Destination")]
    pub destination: StopDto,
}

/// Departure or arrival point of a leg.
#[derive(Debug, Clone, Deserialize)]
pub struct StopDto {
    /// Stop name, usually suffixed with the city.
    pub name: String,

    /// Stop id.
    pub id: Option<String>,

    /// Scheduled date.
    #[serde(default)]
    pub date: String,

    /// Scheduled time.
    #[serde(default)]
    pub time: String,

    /// Real-time date.
    #[serde(rename = "rtDate")]
    pub rt_date: Option<String>,

    /// Real-time time.
    #[serde(rename = "rtTime")]
    pub rt_time: Option<String>,

    /// Platform or stand.
    pub track: Option<String>,
}

/// Response of the `location.name` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationResponse {
    #[serde(rename = "LocationList")]
    pub location_list: LocationList,
}

/// Stops matching a name query.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationList {
    /// Matching stops, best match first.
    #[serde(rename = "StopLocation")]
    pub stop_locations: Option<OneOrMany<StopLocation>>,

    pub error: Option<String>,

    #[serde(rename = "errorText")]
    pub error_text: Option<String>,
}

/// A stop returned by the name lookup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StopLocation {
    pub name: String,
    pub id: String,
    pub lat: Option<String>,
    pub lon: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_multi_leg_trip_list() {
        let json = r##"{
            "TripList": {
                "noNamespaceSchemaLocation": "http://api.vasttrafik.se/v1/hafasRestTrip.xsd",
                "servertime": "09:58",
                "serverdate": "2014-05-03",
                "Trip": [
                    {
                        "Leg": [
                            {
                                "name": "Spårvagn 6",
                                "sname": "6",
                                "type": "TRAM",
                                "id": "9015014500600040",
                                "direction": "Kortedala",
                                "fgColor": "#fa8719",
                                "bgColor": "#ffffff",
                                "Origin": {
                                    "name": "Chalmers, Göteborg",
                                    "type": "ST",
                                    "id": "9021014001960001",
                                    "routeIdx": "12",
                                    "time": "10:00",
                                    "date": "2014-05-03",
                                    "track": "A",
                                    "rtTime": "10:01",
                                    "rtDate": "2014-05-03"
                                },
                                "Destination": {
                                    "name": "Kapellplatsen, Göteborg",
                                    "type": "ST",
                                    "id": "9021014003760001",
                                    "routeIdx": "13",
                                    "time": "10:02",
                                    "date": "2014-05-03",
                                    "track": "B"
                                }
                            },
                            {
                                "name": "Gå",
                                "type": "WALK",
                                "Origin": {
                                    "name": "Kapellplatsen, Göteborg",
                                    "time": "10:02",
                                    "date": "2014-05-03"
                                },
                                "Destination": {
                                    "name": "Kapellplatsen, Göteborg",
                                    "time": "10:04",
                                    "date": "2014-05-03"
                                }
                            }
                        ]
                    },
                    {
                        "cancelled": "true",
                        "Leg": {
                            "name": "Buss 19",
                            "sname": "19",
                            "type": "BUS",
                            "Origin": {"name": "Chalmers, Göteborg", "time": "10:05", "date": "2014-05-03"},
                            "Destination": {"name": "Brunnsparken, Göteborg", "time": "10:20", "date": "2014-05-03"}
                        }
                    }
                ]
            }
        }"##;

        let response: TripResponse = serde_json::from_str(json).unwrap();
        let list = response.trip_list;
        assert_eq!(list.server_time.as_deref(), Some("09:58"));

        let trips = list.trips.unwrap().into_vec();
        assert_eq!(trips.len(), 2);

        let OneOrMany::Many(legs) = &trips[0].legs else {
            panic!("expected a leg list");
        };
        assert_eq!(legs.len(), 2);
        assert_eq!(legs[0].sname.as_deref(), Some("6"));
        assert_eq!(legs[0].origin.rt_time.as_deref(), Some("10:01"));
        assert_eq!(legs[0].destination.track.as_deref(), Some("B"));
        assert_eq!(legs[1].kind.as_deref(), Some("WALK"));
        assert_eq!(legs[1].sname, None);

        let OneOrMany::One(leg) = &trips[1].legs else {
            panic!("expected a single leg");
        };
        assert_eq!(leg.sname.as_deref(), Some("19"));
    }

    #[test]
    fn deserialize_single_trip_object() {
        let json = r#"{
            "TripList": {
                "Trip": {
                    "Leg": {
                        "sname": "3",
                        "Origin": {"name": "Järntorget, Göteborg", "time": "12:00", "date": "2014-05-03"},
                        "Destination": {"name": "Marklandsgatan, Göteborg", "time": "12:09", "date": "2014-05-03"}
                    }
                }
            }
        }"#;

        let response: TripResponse = serde_json::from_str(json).unwrap();
        let trips = response.trip_list.trips.unwrap().into_vec();
        assert_eq!(trips.len(), 1);
        assert!(matches!(trips[0].legs, OneOrMany::One(_)));
    }

    #[test]
    fn deserialize_error_response() {
        let json = r#"{
            "TripList": {
                "error": "H890",
                "errorText": "No connections found"
            }
        }"#;

        let response: TripResponse = serde_json::from_str(json).unwrap();
        assert!(response.trip_list.trips.is_none());
        assert_eq!(
            response.trip_list.error_text.as_deref(),
            Some("No connections found")
        );
    }

    #[test]
    fn stop_without_times_defaults_to_empty() {
        let stop: StopDto = serde_json::from_str(r#"{"name": "Okänd"}"#).unwrap();
        assert_eq!(stop.date, "");
        assert_eq!(stop.time, "");
        assert_eq!(stop.rt_time, None);
        assert_eq!(stop.track, None);
    }

    #[test]
    fn deserialize_location_list() {
        let json = r#"{
            "LocationList": {
                "servertime": "10:00",
                "serverdate": "2014-05-03",
                "StopLocation": [
                    {"name": "Centralstationen, Göteborg", "lon": "11.973479", "lat": "57.708895", "id": "9021014001950000", "idx": "1"},
                    {"name": "Centralstationen Kungsbacka, Kungsbacka", "lon": "12.07", "lat": "57.49", "id": "9021013080110000", "idx": "2"}
                ],
                "CoordLocation": {"name": "Centralstationen", "lon": "11.97", "lat": "57.70", "type": "ADR", "idx": "3"}
            }
        }"#;

        let response: LocationResponse = serde_json::from_str(json).unwrap();
        let stops = response.location_list.stop_locations.unwrap().into_vec();
        assert_eq!(stops.len(), 2);
        assert_eq!(stops[0].id, "9021014001950000");
        assert_eq!(stops[1].name, "Centralstationen Kungsbacka, Kungsbacka");
    }

    #[test]
    fn deserialize_single_stop_location() {
        let json = r#"{
            "LocationList": {
                "StopLocation": {"name": "Mölndals bro, Mölndal", "id": "9021014004830000"}
            }
        }"#;

        let response: LocationResponse = serde_json::from_str(json).unwrap();
        let stops = response.location_list.stop_locations.unwrap().into_vec();
        assert_eq!(stops.len(), 1);
        assert_eq!(stops[0].name, "Mölndals bro, Mölndal");
    }
}
