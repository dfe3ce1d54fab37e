pub mod api;
pub mod error;
pub mod home;


pub use api::ApiService;
pub use error::ApiError;
pub use home::HomeData;

pub type ApiResult<T> = std::result::Result<T, ApiError>;
