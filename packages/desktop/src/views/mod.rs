mod home;
pub use home::Home;

mod user_detail;
pub use user_detail::UserDetail;
