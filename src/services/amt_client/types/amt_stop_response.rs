use serde::{Deserialize, Serialize};

/// One upcoming departure as reported by the stop endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Arrival {
    pub line: String,
    pub dest: String,
    pub time: String,
    pub eta: String,
}

/// Body of `GET /api/v1/stop/{code}`.
///
/// Unknown stops come back as `{"name":"","stops":null}`, hence the `Option`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StopResponse {
    pub name: String,
    pub stops: Option<Vec<Arrival>>,
}

impl StopResponse {
    pub fn into_arrivals(self) -> (String, Vec<Arrival>) {
        (self.name, self.stops.unwrap_or_default())
    }
}
