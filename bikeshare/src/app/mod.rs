mod bikeshare_app;
pub mod console;
pub mod pager;
pub mod selector;
pub mod session;

pub use bikeshare_app::BikeshareApp;
