use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LineDirection {
    pub direction: String,
    pub times: Option<Vec<String>>,
}

/// Body of `GET /api/v1/line/{line}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LineResponse {
    pub lines: Option<Vec<LineDirection>>,
}
