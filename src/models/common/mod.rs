pub mod pagination;
pub mod price;
pub mod response;
pub mod validation;

pub use pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use price::Price;
pub use response::{ApiResponse, ListResponse};
pub use validation::{FieldError, FieldErrors, Validate};
