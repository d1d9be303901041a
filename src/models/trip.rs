use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Trip {
    /// Assigned by the store on creation, `None` before persistence.
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
}

impl Trip {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    pub fn with_id(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, utoipa::ToSchema)]
pub struct TripResponse {
    pub id: String,
    pub name: String,
}

impl From<Trip> for TripResponse {
    fn from(trip: Trip) -> Self {
        Self {
            id: trip.id.unwrap_or_default(),
            name: trip.name,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TripListResponse {
    pub success: bool,
    pub trips: Vec<TripResponse>,
    pub total: usize,
}

impl From<Vec<Trip>> for TripListResponse {
    fn from(trips: Vec<Trip>) -> Self {
        let trips: Vec<TripResponse> = trips.into_iter().map(TripResponse::from).collect();
        Self {
            success: true,
            total: trips.len(),
            trips,
        }
    }
}
