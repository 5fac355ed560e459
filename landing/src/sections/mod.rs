// Landing page sections, in rendering order.

mod featured;
mod footer;
mod heritage;
mod hero;
mod nav;
mod products;

pub use featured::FeaturedSection;
pub use footer::Footer;
pub use heritage::HeritageSection;
pub use hero::Hero;
pub use nav::Nav;
pub use products::ProductGrid;
