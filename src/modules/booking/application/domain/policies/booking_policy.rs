use chrono::NaiveDate;

use crate::modules::booking::application::domain::entities::{BookingType, RentalPeriod};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BookingValidationError {
    #[error("Rent bookings require both startDate and endDate")]
    MissingRentalDates,

    #[error("startDate must not be after endDate")]
    InvertedRentalPeriod,

    #[error("Sale bookings must not carry startDate or endDate")]
    DatesNotAllowedForSale,

    #[error("bookedPrice must be a non-negative number")]
    InvalidPrice,
}

/// Shape rules for a booking request. Runs before any store access.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookingPolicy;

impl BookingPolicy {
    /// Returns the rental period for rent bookings and `None` for sales.
    pub fn validate(
        booking_type: BookingType,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        booked_price: f64,
    ) -> Result<Option<RentalPeriod>, BookingValidationError> {
        if !booked_price.is_finite() || booked_price < 0.0 {
            return Err(BookingValidationError::InvalidPrice);
        }

        match booking_type {
            BookingType::Rent => {
                let (start_date, end_date) = match (start_date, end_date) {
                    (Some(s), Some(e)) => (s, e),
                    _ => return Err(BookingValidationError::MissingRentalDates),
                };

                if start_date > end_date {
                    return Err(BookingValidationError::InvertedRentalPeriod);
                }

                Ok(Some(RentalPeriod {
                    start_date,
                    end_date,
                }))
            }
            BookingType::Sale => {
                if start_date.is_some() || end_date.is_some() {
                    return Err(BookingValidationError::DatesNotAllowedForSale);
                }
                Ok(None)
            }
        }
    }
}
