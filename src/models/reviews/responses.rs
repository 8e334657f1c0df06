use super::entities::Review;
use crate::models::PaginatedResponse;

pub type ReviewListResponse = PaginatedResponse<Review>;
