mod dish;
mod footer;
mod gallery;
mod hero;
mod icons;
mod menu;
mod navbar;
mod philosophy;

pub use dish::SignatureDish;
pub use footer::Footer;
pub use gallery::Gallery;
pub use hero::Hero;
pub use icons::{ArrowUpRight, SocialIcon};
pub use menu::Menu;
pub use navbar::Navbar;
pub use philosophy::Philosophy;
