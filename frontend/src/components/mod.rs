pub mod nav_bar;
pub mod replace_redirect;

pub use nav_bar::NavBar;
pub use replace_redirect::ReplaceRedirect;
