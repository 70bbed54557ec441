use crate::{
    Activity, Category, CategoryPayload, Guide, LoginRequest, LoginResponse, NewActivity,
    RegistrationRequest, Reservation, Trek, TrekPayload,
};
use serde::{Deserialize, Serialize, de::DeserializeOwned, de::IgnoredAny};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
///
/// Path parameters are carried as `#[serde(skip)]` fields so that only the
/// payload ends up in the JSON body.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request (after the envelope is unwrapped).
    type Response: DeserializeOwned;
    /// The HTTP method.
    const METHOD: HttpMethod;
    /// Whether the serialized request is sent as the JSON body.
    const SENDS_BODY: bool = false;
    /// Used for the default failure message: "Failed to {ACTION}".
    const ACTION: &'static str;

    /// The URL path relative to the API base URL.
    fn path(&self) -> String;
}

// =========================================================
// Auth
// =========================================================

impl ApiRequest for LoginRequest {
    type Response = LoginResponse;
    const METHOD: HttpMethod = HttpMethod::Post;
    const SENDS_BODY: bool = true;
    const ACTION: &'static str = "login";

    fn path(&self) -> String {
        "/auth/login".into()
    }
}

/// Register a guide account (the server validates it later)
#[derive(Debug, Serialize)]
pub struct RegisterGuideRequest(pub RegistrationRequest);

impl ApiRequest for RegisterGuideRequest {
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Post;
    const SENDS_BODY: bool = true;
    const ACTION: &'static str = "register";

    fn path(&self) -> String {
        "/auth/register/guide".into()
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterTouristRequest(pub RegistrationRequest);

impl ApiRequest for RegisterTouristRequest {
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Post;
    const SENDS_BODY: bool = true;
    const ACTION: &'static str = "register";

    fn path(&self) -> String {
        "/auth/register/tourist".into()
    }
}

/// Toggle a guide's validation status (admin only)
#[derive(Debug, Serialize)]
pub struct ValidateGuideRequest {
    #[serde(skip)]
    pub guide_id: i64,
}

impl ApiRequest for ValidateGuideRequest {
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Patch;
    const ACTION: &'static str = "toggle guide validation status";

    fn path(&self) -> String {
        format!("/auth/validate-guide/{}", self.guide_id)
    }
}

// =========================================================
// Guides
// =========================================================

#[derive(Debug, Serialize)]
pub struct ListGuidesRequest;

impl ApiRequest for ListGuidesRequest {
    type Response = Vec<Guide>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const ACTION: &'static str = "fetch guides";

    fn path(&self) -> String {
        "/users/guides".into()
    }
}

/// Guides sorted by their most recent reservation
#[derive(Debug, Serialize)]
pub struct ListGuidesByReservationDateRequest;

impl ApiRequest for ListGuidesByReservationDateRequest {
    type Response = Vec<Guide>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const ACTION: &'static str = "fetch guides";

    fn path(&self) -> String {
        "/users/guides/ordered-by-reservation-date".into()
    }
}

#[derive(Debug, Serialize)]
pub struct GetGuideRequest {
    #[serde(skip)]
    pub guide_id: i64,
}

impl ApiRequest for GetGuideRequest {
    type Response = Guide;
    const METHOD: HttpMethod = HttpMethod::Get;
    const ACTION: &'static str = "fetch guide details";

    fn path(&self) -> String {
        format!("/users/guides/{}", self.guide_id)
    }
}

// =========================================================
// Treks
// =========================================================

#[derive(Debug, Serialize)]
pub struct ListTreksRequest;

impl ApiRequest for ListTreksRequest {
    type Response = Vec<Trek>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const ACTION: &'static str = "fetch treks";

    fn path(&self) -> String {
        "/treks".into()
    }
}

#[derive(Debug, Serialize)]
pub struct GetTrekRequest {
    #[serde(skip)]
    pub trek_id: i64,
}

impl ApiRequest for GetTrekRequest {
    type Response = Trek;
    const METHOD: HttpMethod = HttpMethod::Get;
    const ACTION: &'static str = "fetch trek";

    fn path(&self) -> String {
        format!("/treks/{}", self.trek_id)
    }
}

#[derive(Debug, Serialize)]
pub struct CreateTrekRequest(pub TrekPayload);

impl ApiRequest for CreateTrekRequest {
    type Response = Trek;
    const METHOD: HttpMethod = HttpMethod::Post;
    const SENDS_BODY: bool = true;
    const ACTION: &'static str = "create trek";

    fn path(&self) -> String {
        "/treks".into()
    }
}

#[derive(Debug, Serialize)]
pub struct UpdateTrekRequest {
    #[serde(skip)]
    pub trek_id: i64,
    #[serde(flatten)]
    pub payload: TrekPayload,
}

impl ApiRequest for UpdateTrekRequest {
    type Response = Trek;
    const METHOD: HttpMethod = HttpMethod::Put;
    const SENDS_BODY: bool = true;
    const ACTION: &'static str = "update trek";

    fn path(&self) -> String {
        format!("/treks/{}", self.trek_id)
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteTrekRequest {
    #[serde(skip)]
    pub trek_id: i64,
}

impl ApiRequest for DeleteTrekRequest {
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Delete;
    const ACTION: &'static str = "delete trek";

    fn path(&self) -> String {
        format!("/treks/{}", self.trek_id)
    }
}

// =========================================================
// Activities (nested under a trek)
// =========================================================

#[derive(Debug, Serialize)]
pub struct ListActivitiesRequest {
    #[serde(skip)]
    pub trek_id: i64,
}

impl ApiRequest for ListActivitiesRequest {
    type Response = Vec<Activity>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const ACTION: &'static str = "fetch activities";

    fn path(&self) -> String {
        format!("/treks/{}/activities", self.trek_id)
    }
}

#[derive(Debug, Serialize)]
pub struct AddActivityRequest {
    #[serde(skip)]
    pub trek_id: i64,
    #[serde(flatten)]
    pub activity: NewActivity,
}

impl ApiRequest for AddActivityRequest {
    type Response = Activity;
    const METHOD: HttpMethod = HttpMethod::Post;
    const SENDS_BODY: bool = true;
    const ACTION: &'static str = "add activity";

    fn path(&self) -> String {
        format!("/treks/{}/activities", self.trek_id)
    }
}

#[derive(Debug, Serialize)]
pub struct RemoveActivityRequest {
    #[serde(skip)]
    pub trek_id: i64,
    #[serde(skip)]
    pub activity_id: i64,
}

impl ApiRequest for RemoveActivityRequest {
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Delete;
    const ACTION: &'static str = "remove activity";

    fn path(&self) -> String {
        format!("/treks/{}/activities/{}", self.trek_id, self.activity_id)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateActivityOrderRequest {
    #[serde(skip)]
    pub trek_id: i64,
    #[serde(skip)]
    pub activity_id: i64,
    pub activity_order: u32,
}

impl ApiRequest for UpdateActivityOrderRequest {
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Patch;
    const SENDS_BODY: bool = true;
    const ACTION: &'static str = "update activity order";

    fn path(&self) -> String {
        format!(
            "/treks/{}/activities/{}/order",
            self.trek_id, self.activity_id
        )
    }
}

// =========================================================
// Categories
// =========================================================

#[derive(Debug, Serialize)]
pub struct ListCategoriesRequest;

impl ApiRequest for ListCategoriesRequest {
    type Response = Vec<Category>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const ACTION: &'static str = "fetch categories";

    fn path(&self) -> String {
        "/categories".into()
    }
}

#[derive(Debug, Serialize)]
pub struct CreateCategoryRequest(pub CategoryPayload);

impl ApiRequest for CreateCategoryRequest {
    type Response = Category;
    const METHOD: HttpMethod = HttpMethod::Post;
    const SENDS_BODY: bool = true;
    const ACTION: &'static str = "create category";

    fn path(&self) -> String {
        "/categories".into()
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteCategoryRequest {
    #[serde(skip)]
    pub category_id: i64,
}

impl ApiRequest for DeleteCategoryRequest {
    type Response = IgnoredAny;
    const METHOD: HttpMethod = HttpMethod::Delete;
    const ACTION: &'static str = "delete category";

    fn path(&self) -> String {
        format!("/categories/{}", self.category_id)
    }
}

// =========================================================
// Reservations
// =========================================================

#[derive(Debug, Serialize)]
pub struct ListReservationsRequest;

impl ApiRequest for ListReservationsRequest {
    type Response = Vec<Reservation>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const ACTION: &'static str = "fetch reservations";

    fn path(&self) -> String {
        "/reservations".into()
    }
}

#[derive(Debug, Serialize)]
pub struct ListGuideReservationsRequest {
    #[serde(skip)]
    pub guide_id: i64,
}

impl ApiRequest for ListGuideReservationsRequest {
    type Response = Vec<Reservation>;
    const METHOD: HttpMethod = HttpMethod::Get;
    const ACTION: &'static str = "fetch reservations";

    fn path(&self) -> String {
        format!("/reservations/guide/{}", self.guide_id)
    }
}
