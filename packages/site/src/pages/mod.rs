mod home;
pub use home::Home;

mod products;
pub use products::Products;

mod services;
pub use services::Services;

mod blog;
pub use blog::Blog;

mod contact;
pub use contact::Contact;

mod promo;
pub use promo::Promo;
