use serde::Serialize;
use utoipa::ToSchema;

/// Body of every 2xx booking and property response, as written by
/// `ApiResponse::success` / `ApiResponse::created`.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Body of every 4xx/5xx response. `data` is omitted.
#[derive(Serialize, ToSchema)]
#[schema(example = json!({
    "success": false,
    "error": {
        "code": "BOOKING_CONFLICT",
        "message": "Property already booked in this period"
    }
}))]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable machine code: `VALIDATION_ERROR`, `INVALID_STATUS`,
    /// `BOOKING_CONFLICT`, `BOOKING_NOT_SALE`, `BOOKING_NOT_FOUND`,
    /// `PROPERTY_NOT_FOUND`, `NO_PROPERTIES`, `NO_BOOKINGS`, `FORBIDDEN`,
    /// `ADMIN_REQUIRED`, `INTERNAL_ERROR`, or one of the token codes
    #[schema(example = "PROPERTY_NOT_FOUND")]
    pub code: String,

    #[schema(example = "Property not found")]
    pub message: String,
}
