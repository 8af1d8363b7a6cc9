mod contact;
mod fields;
mod footer;
mod franchise;
mod gallery;
mod hero;
mod image;
mod nav;
mod sections;
mod stats;

pub use contact::ContactSection;
pub use footer::Footer;
pub use franchise::{FranchiseDialog, FranchiseSection};
pub use gallery::Gallery;
pub use hero::Hero;
pub use image::FallbackImage;
pub use nav::{go_to, SiteNav};
pub use sections::{About, HighlightStrip, MenuSection, Testimonials};
pub use stats::StatsSection;
