//! Site content
//!
//! Plain read-only records consumed by the sections. The built-in
//! [`SiteContent::lavie`] carries the Lavie du Vivants copy; a TOML file with
//! the same shape can replace it.

use crate::error::Result;
use crate::icons::Icon;
use crate::theme::ThemeTokens;
use serde::{Deserialize, Serialize};
use vivant_widgets::nav::NavEntry;

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub region: String,
    pub currency: String,
}

/// One card in the product grid
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Product {
    pub name: String,
    pub description: String,
    /// Display price, free text ("₦3,500", "By Quote")
    pub price: String,
    /// Image URL or emoji
    pub image: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
    pub icon: Icon,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub text: String,
}

/// Phone number, handle or address shown beside the contact form
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ContactChannel {
    pub label: String,
    pub value: String,
    pub icon: Icon,
}

/// Headline figure in the about section
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
    pub icon: Icon,
}

/// Everything the page displays
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct SiteContent {
    pub brand: Brand,
    /// Document title
    pub title: String,
    /// Meta description
    pub summary: String,
    #[serde(default)]
    pub theme: ThemeTokens,
    pub nav: Vec<NavEntry>,
    pub marquee: Vec<String>,
    pub products: Vec<Product>,
    pub features: Vec<Feature>,
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub channels: Vec<ContactChannel>,
    #[serde(default)]
    pub footer: String,
}

impl SiteContent {
    /// Parse a TOML content file
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Built-in content for Lavie du Vivants
    pub fn lavie() -> Self {
        Self {
            brand: Brand {
                name: "Lavie du Vivants".into(),
                tagline: "It's All About The TASTE".into(),
                description: "A premier food and spice brand based in Kaduna, Nigeria, \
                              dedicated to elevating everyday cooking through artisanal mastery."
                    .into(),
                region: "Nigeria".into(),
                currency: "₦".into(),
            },
            title: "Lavie du Vivants | It's All About The TASTE 🍸".into(),
            summary: "Premium spice blends, granola, and event catering in Nigeria. \
                      Elevate your meals with the Lavie difference."
                .into(),
            theme: ThemeTokens::lavie(),
            nav: vec![
                NavEntry::new("Home", "home"),
                NavEntry::new("About", "about"),
                NavEntry::new("Products", "products"),
                NavEntry::new("Features", "features"),
                NavEntry::new("Contact", "contact"),
            ],
            marquee: vec![
                "Artisanal Spices".into(),
                "Gourmet Granola".into(),
                "Event Styling".into(),
                "Kaduna Finest".into(),
            ],
            products: vec![
                product(
                    "Premium Spice Blends",
                    "Varies",
                    "Artisanal, carefully curated seasoning mixes to instantly elevate any meal.",
                    "photo-1532336411638-b199ee97f394",
                ),
                product(
                    "Gourmet Granola",
                    "₦3,500",
                    "Guilt-free, crunchy granola perfect for breakfast or as a healthy snack.",
                    "photo-1517093157656-b9424f441b12",
                ),
                product(
                    "Artisanal Mocktails",
                    "Varies",
                    "Refreshing, non-alcoholic beverages expertly crafted for events and daily enjoyment.",
                    "photo-1513558116341-75f146137284",
                ),
                product(
                    "Fresh Salad Bowls",
                    "₦4,200",
                    "Pre-made, nutrient-dense salad bowls for quick, healthy lunches.",
                    "photo-1512621776951-a57141f2eefd",
                ),
                product(
                    "Rice & Complements",
                    "Varies",
                    "Complete meal solutions featuring perfectly cooked rice and gourmet side dishes.",
                    "photo-1512058560366-cd2427ff0630",
                ),
                product(
                    "Event Catering",
                    "By Quote",
                    "Full-service food styling and catering for corporate and private events.",
                    "photo-1555244162-803834f70033",
                ),
            ],
            features: vec![
                Feature {
                    title: "Time-Saving Blends".into(),
                    description: "Our signature spice formulations cut down prep time without \
                                  sacrificing authentic, deep flavor profiles."
                        .into(),
                    icon: Icon::Clock,
                },
                Feature {
                    title: "Event Food Styling".into(),
                    description: "Professional culinary presentation services to make your \
                                  gatherings unforgettable and elegant."
                        .into(),
                    icon: Icon::ChefHat,
                },
                Feature {
                    title: "Healthy & Fresh".into(),
                    description: "Commitment to fresh ingredients in all salads and granola, \
                                  supporting a nutritious lifestyle."
                        .into(),
                    icon: Icon::HeartHandshake,
                },
            ],
            testimonials: vec![
                Testimonial {
                    name: "Aisha M.".into(),
                    role: "Home Cook, Abuja".into(),
                    text: "The cooking spices are a revelation; my Jollof has never tasted this \
                           authentic with so little effort! Truly premium."
                        .into(),
                },
                Testimonial {
                    name: "Chidi O.".into(),
                    role: "Event Planner, Lagos".into(),
                    text: "The mocktails were the highlight of our corporate launch. Elegant \
                           presentation and perfectly balanced flavors."
                        .into(),
                },
                Testimonial {
                    name: "Dr. Bello".into(),
                    role: "Young Professional, Kaduna".into(),
                    text: "The salad bowls are my lunchtime savior. Fresh, perfectly portioned, \
                           and delicious."
                        .into(),
                },
            ],
            stats: vec![
                Stat {
                    value: "10+".into(),
                    label: "Signature Blends".into(),
                    icon: Icon::Award,
                },
                Stat {
                    value: "Kaduna".into(),
                    label: "Proudly Based".into(),
                    icon: Icon::MapPin,
                },
            ],
            channels: vec![
                ContactChannel {
                    label: "Call / WhatsApp".into(),
                    value: "+234 800 000 0000".into(),
                    icon: Icon::Phone,
                },
                ContactChannel {
                    label: "Instagram".into(),
                    value: "@_lavie_du".into(),
                    icon: Icon::Instagram,
                },
                ContactChannel {
                    label: "Kitchen Base".into(),
                    value: "Kaduna, Nigeria".into(),
                    icon: Icon::MapPin,
                },
            ],
            footer: "Specializing in high-quality, artisanal spice blends, granola, fresh \
                     mocktails, and gourmet salad bowls. Making everyday cooking effortless."
                .into(),
        }
    }
}

impl Default for SiteContent {
    fn default() -> Self {
        Self::lavie()
    }
}

fn product(name: &str, price: &str, description: &str, photo: &str) -> Product {
    Product {
        name: name.into(),
        description: description.into(),
        price: price.into(),
        image: format!("https://images.unsplash.com/{photo}?auto=format&fit=crop&w=800&q=80"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PageError;

    const MINIMAL: &str = r#"
title = "Test Kitchen"
summary = "Testing"
marquee = ["A", "B", "C"]

[brand]
name = "Test Kitchen"
tagline = "Taste"
description = "A kitchen"
region = "Nowhere"
currency = "$"

[[nav]]
label = "Home"
anchor = "home"

[[nav]]
label = "Menu"
anchor = "products"

[[products]]
name = "Soup"
description = "Hot"
price = "$4"
image = "🍲"

[[features]]
title = "Fast"
description = "Quick"
icon = "zap"

[[testimonials]]
name = "Ada"
role = "Chef"
text = "Good"
"#;

    #[test]
    fn test_lavie_content() {
        let content = SiteContent::lavie();
        assert_eq!(content.products.len(), 6);
        assert_eq!(content.testimonials.len(), 3);
        assert_eq!(content.products[1].price, "₦3,500");
        assert_eq!(content.brand.currency, "₦");
        assert_eq!(content.nav[0], NavEntry::new("Home", "home"));
    }

    #[test]
    fn test_from_toml_with_defaults() {
        let content = SiteContent::from_toml_str(MINIMAL).unwrap();
        assert_eq!(content.nav[1].anchor, "products");
        assert_eq!(content.features[0].icon, Icon::Zap);
        assert_eq!(content.products[0].image, "🍲");
        assert_eq!(content.theme, ThemeTokens::lavie());
        assert!(content.channels.is_empty());
    }

    #[test]
    fn test_unknown_icon_is_a_content_error() {
        let text = MINIMAL.replace("icon = \"zap\"", "icon = \"cooking-pot\"");
        assert!(matches!(
            SiteContent::from_toml_str(&text),
            Err(PageError::Content(_))
        ));
    }
}
