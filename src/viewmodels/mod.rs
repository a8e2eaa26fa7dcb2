pub mod error_banner;
pub mod login_viewmodel;
pub mod search_viewmodel;

pub use error_banner::{DismissToken, ErrorBanner};
pub use login_viewmodel::LoginViewModel;
pub use search_viewmodel::{SearchDisplay, SearchTicket, SearchViewModel};
