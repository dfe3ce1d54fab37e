pub mod app;
pub mod config;
pub mod http;
pub mod model;
pub mod service;
pub mod session;

pub use app::build_service;

pub use service::{ApiError, ApiResult, ApiService, HomeData};
pub use session::{Session, SessionError, SessionProvider, SessionStore};
