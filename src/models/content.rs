/// A dish on the signature menu
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MenuItem {
    pub name: &'static str,
    pub description: &'static str,
    /// Display string, rendered as-is
    pub price: &'static str,
    pub image: &'static str,
}

/// A customer or franchise-owner quote
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub avatar: &'static str,
}

/// Icon glyphs used across the page, rendered as CSS classes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    MapPin,
    Award,
    Clock,
    Users,
    Star,
    TrendingUp,
    Phone,
    Mail,
}

impl Icon {
    pub fn class(&self) -> &'static str {
        match self {
            Icon::MapPin => "icon icon-map-pin",
            Icon::Award => "icon icon-award",
            Icon::Clock => "icon icon-clock",
            Icon::Users => "icon icon-users",
            Icon::Star => "icon icon-star",
            Icon::TrendingUp => "icon icon-trending-up",
            Icon::Phone => "icon icon-phone",
            Icon::Mail => "icon icon-mail",
        }
    }
}

/// "Why choose us" card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub caption: &'static str,
}

/// One entry of the highlight strip under the menu
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Highlight {
    pub icon: Icon,
    pub label: &'static str,
}

/// A card in the franchise opportunity section
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FranchiseOffer {
    pub title: &'static str,
    pub headline: &'static str,
    pub points: [&'static str; 4],
}

/// A `<select>` option: submitted value and visible label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactDetails {
    pub phone_display: &'static str,
    pub phone_href: &'static str,
    pub email: &'static str,
    pub address_lines: [&'static str; 2],
}

pub const BRAND_NAME: &str = "BAPOO'S FAST FOOD";
pub const BRAND_SHORT: &str = "BAPOO'S";
pub const LOGO: &str = "/bapoos-logo.jpg";
pub const HERO_IMAGE: &str = "/delicious-burger-with-glow-effect.jpg";
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

pub const PAGE_TITLE: &str = "BAPOO's FAST FOOD — Franchise & Menu";
pub const PAGE_DESCRIPTION: &str = "Fast. Fresh. Flavour-packed — Join our franchise family. Gujarat's favorite fast food destination.";

pub const GALLERY_IMAGES: [&str; 4] = [
    "/modern-fast-food-interior.png",
    "/delicious-burger-fries.png",
    "/happy-customers-dining.jpg",
    "/kitchen-food-preparation.jpg",
];

pub const MENU_ITEMS: [MenuItem; 6] = [
    MenuItem {
        name: "Bapoo's Special Burger",
        description: "Juicy patty with secret sauce, fresh veggies",
        price: "₹149",
        image: "/special-burger-with-toppings.jpg",
    },
    MenuItem {
        name: "Crispy Chicken Wrap",
        description: "Tender chicken, crispy coating, tangy mayo",
        price: "₹129",
        image: "/chicken-wrap-with-sauce.jpg",
    },
    MenuItem {
        name: "Paneer Tikka Pizza",
        description: "Fusion delight with Indian spices",
        price: "₹199",
        image: "/paneer-tikka-pizza.jpg",
    },
    MenuItem {
        name: "Loaded Fries",
        description: "Crispy fries with cheese and toppings",
        price: "₹99",
        image: "/loaded-cheese-fries.jpg",
    },
    MenuItem {
        name: "Masala Sandwich",
        description: "Grilled sandwich with spicy filling",
        price: "₹79",
        image: "/grilled-masala-sandwich.jpg",
    },
    MenuItem {
        name: "Chocolate Shake",
        description: "Thick, creamy, and indulgent",
        price: "₹89",
        image: "/chocolate-milkshake.png",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Rajesh Patel",
        role: "Franchise Owner, Surat",
        quote: "Best decision I made! The support from BAPOO's team is exceptional. My outlet is thriving!",
        avatar: "/indian-businessman-portrait.png",
    },
    Testimonial {
        name: "Priya Sharma",
        role: "Regular Customer",
        quote: "The taste is consistently amazing! BAPOO's has become our family's favorite fast food spot.",
        avatar: "/indian-woman-smiling.png",
    },
    Testimonial {
        name: "Amit Desai",
        role: "Franchise Owner, Vadodara",
        quote: "From setup to operations, everything was smooth. Great ROI and brand recognition!",
        avatar: "/indian-entrepreneur-portrait.jpg",
    },
];

pub const FEATURES: [Feature; 4] = [
    Feature { icon: Icon::MapPin, title: "15+ Outlets", caption: "Across Gujarat" },
    Feature { icon: Icon::Award, title: "Quality Ingredients", caption: "Fresh & Premium" },
    Feature { icon: Icon::Clock, title: "Fast Service", caption: "Quick & Efficient" },
    Feature { icon: Icon::Users, title: "Brand Support", caption: "Complete Assistance" },
];

pub const HIGHLIGHTS: [Highlight; 6] = [
    Highlight { icon: Icon::Award, label: "Award Winning" },
    Highlight { icon: Icon::Users, label: "Expert Team" },
    Highlight { icon: Icon::Clock, label: "Quick Service" },
    Highlight { icon: Icon::Star, label: "Top Rated" },
    Highlight { icon: Icon::TrendingUp, label: "Growing Fast" },
    Highlight { icon: Icon::MapPin, label: "Multiple Locations" },
];

pub const FRANCHISE_OFFERS: [FranchiseOffer; 3] = [
    FranchiseOffer {
        title: "Investment",
        headline: "Customised Investment Options",
        points: [
            "Setup & Equipment",
            "Initial Inventory",
            "Training & Support",
            "Marketing Materials",
        ],
    },
    FranchiseOffer {
        title: "Support",
        headline: "360° Assistance",
        points: [
            "Site Selection Help",
            "Staff Training",
            "Marketing Support",
            "Operations Guidance",
        ],
    },
    FranchiseOffer {
        title: "ROI & Timeline",
        headline: "18-24 Months",
        points: [
            "Break-even Period",
            "Proven Business Model",
            "Strong Brand Recognition",
            "Ongoing Revenue",
        ],
    },
];

pub const INVESTMENT_RANGES: [Choice; 4] = [
    Choice { value: "10-20", label: "₹10-20 Lakhs" },
    Choice { value: "20-30", label: "₹20-30 Lakhs" },
    Choice { value: "30-50", label: "₹30-50 Lakhs" },
    Choice { value: "50+", label: "₹50+ Lakhs" },
];

pub const INQUIRY_TYPES: [Choice; 2] = [
    Choice { value: "general", label: "General" },
    Choice { value: "franchise", label: "Franchise" },
];

pub const CONTACT: ContactDetails = ContactDetails {
    phone_display: "+91 98765 43210",
    phone_href: "tel:+919876543210",
    email: "info@bapoosfastfood.com",
    address_lines: ["123 CG Road, Navrangpura", "Ahmedabad, Gujarat 380009"],
};

pub const LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Refund Policy"];

/// Source to render for `path`: the placeholder once the real asset has
/// failed to load.
pub fn displayed_image(path: &'static str, failed: bool) -> &'static str {
    if failed || path.is_empty() {
        PLACEHOLDER_IMAGE
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broken_image_uses_placeholder() {
        assert_eq!(displayed_image(LOGO, false), LOGO);
        assert_eq!(displayed_image(LOGO, true), PLACEHOLDER_IMAGE);
        assert_eq!(displayed_image(GALLERY_IMAGES[2], true), PLACEHOLDER_IMAGE);
        assert_eq!(displayed_image("", false), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn every_asset_is_rooted() {
        let assets = MENU_ITEMS
            .iter()
            .map(|m| m.image)
            .chain(TESTIMONIALS.iter().map(|t| t.avatar))
            .chain(GALLERY_IMAGES)
            .chain([LOGO, HERO_IMAGE]);
        for asset in assets {
            assert!(asset.starts_with('/'), "{asset} is not an absolute asset path");
        }
    }
}
