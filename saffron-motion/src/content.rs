//! Literal page content.
//!
//! All copy and image sources are fixed at compile time. Nothing here is
//! validated: an empty title renders as an empty heading and a dead URL
//! renders as the browser's broken-image box.

pub const BRAND_NAME: &str = "The Saffron Tree";
pub const HERO_TAGLINE: &str = "Kolkata • Michelin Standard";
pub const HERO_SUBTITLE: &str = "A Contemporary Indian Fine Dining Experience";
pub const HERO_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1514362545857-3bc16c4c7d1b?auto=format&fit=crop&q=80";
pub const HERO_IMAGE_ALT: &str = "Luxury dining ambiance";

pub const PHILOSOPHY_KICKER: &str = "Our Heritage";
/// Headline of the philosophy section, one entry per rendered line.
pub const PHILOSOPHY_HEADLINE: [&str; 2] = [
    "An alchemy of ancient Indian spices",
    "and modern culinary precision.",
];

pub const DISH_CALL_TO_ACTION: &str = "Explore Ingredients";

// Every frame points at the same photograph. Distinct shots were probably
// intended but the source material only ever had this one.
pub const GALLERY_IMAGE_URL: &str = "https://media.istockphoto.com/id/843610508/photo/interior-of-cozy-restaurant-loft-style.jpg?s=612x612&w=0&k=20&c=s_PVQJNzcilxKYpm3O-AxBMx4_om5G0TKuxUmiMl85Y=";
pub const GALLERY_IMAGE_ALT: &str = "Atmosphere";
pub const GALLERY_FRAME_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DishRecord {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
}

pub const SIGNATURE_DISHES: [DishRecord; 3] = [
    DishRecord {
        title: "Saffron Lobster",
        description: "Kashmiri saffron infused butter, grilled bay lobster, gold leaf.",
        image_url: "https://images.unsplash.com/photo-1559339352-11d035aa65de?auto=format&fit=crop&q=80",
    },
    DishRecord {
        title: "Truffle Galouti",
        description: "Melt-in-mouth lamb kebabs with black truffle infusion.",
        image_url: "https://images.getrecipekit.com/20241018092616-blog-20templates-20-62.png?aspect_ratio=16:9&quality=90&",
    },
    DishRecord {
        title: "The Golden Veil",
        description: "A dessert of cardamom milk skin, pistachio, and honey.",
        image_url: "https://images.unsplash.com/photo-1563805042-7684c019e1cb?auto=format&fit=crop&q=80",
    },
];

/// In-page sections reachable from the navbar.
///
/// The same value produces both the link target and the section `id`, so the
/// two cannot drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Menu,
    Gallery,
}

pub const NAV_SECTIONS: [Section; 3] = [Section::About, Section::Menu, Section::Gallery];

impl Section {
    pub fn id(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Menu => "menu",
            Section::Gallery => "gallery",
        }
    }

    pub fn anchor(&self) -> &'static str {
        match self {
            Section::About => "#about",
            Section::Menu => "#menu",
            Section::Gallery => "#gallery",
        }
    }

    pub fn nav_label(&self) -> &'static str {
        match self {
            Section::About => "Philosophy",
            Section::Menu => "Experience",
            Section::Gallery => "Gallery",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactBlock {
    pub address_lines: [&'static str; 2],
    pub phone: &'static str,
    pub email: &'static str,
    pub copyright: &'static str,
    pub motto: &'static str,
}

pub const CONTACT: ContactBlock = ContactBlock {
    address_lines: [
        "88 Luxury Lane, Park Street Area",
        "Kolkata, West Bengal 700016",
    ],
    phone: "+91 33 2456 7890",
    email: "bookings@saffrontree.com",
    copyright: "© 2024 The Saffron Tree Kolkata",
    motto: "Curated Excellence",
};

/// Decorative social icons. None of them links anywhere yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialLink {
    Instagram,
    Facebook,
}

pub const SOCIAL_LINKS: [SocialLink; 2] = [SocialLink::Instagram, SocialLink::Facebook];

impl SocialLink {
    pub fn label(&self) -> &'static str {
        match self {
            SocialLink::Instagram => "Instagram",
            SocialLink::Facebook => "Facebook",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_anchor_is_hash_plus_id() {
        for section in NAV_SECTIONS {
            assert_eq!(section.anchor(), format!("#{}", section.id()));
        }
    }

    #[test]
    fn test_section_ids_are_unique() {
        let ids: HashSet<&str> = NAV_SECTIONS.iter().map(Section::id).collect();
        assert_eq!(ids.len(), NAV_SECTIONS.len());
    }

    #[test]
    fn test_signature_dish_titles() {
        let titles: Vec<&str> = SIGNATURE_DISHES.iter().map(|d| d.title).collect();
        assert_eq!(
            titles,
            vec!["Saffron Lobster", "Truffle Galouti", "The Golden Veil"]
        );
    }
}
