//! Icon set
//!
//! A closed set of Lucide icons used by the site. Content refers to icons by
//! kebab-case name (`"chef-hat"`), and the renderer resolves them
//! exhaustively, so an unknown name fails when content is loaded rather than
//! rendering an empty box.

use serde::{Deserialize, Serialize};

const SHOPPING_BAG: &str = r#"<path d="M16 10a4 4 0 0 1-8 0"/><path d="M3.103 6.034h17.794"/><path d="M3.4 5.467a2 2 0 0 0-.4 1.2V20a2 2 0 0 0 2 2h14a2 2 0 0 0 2-2V6.667a2 2 0 0 0-.4-1.2l-2-2.667A2 2 0 0 0 17 2H7a2 2 0 0 0-1.6.8z"/>"#;
const MENU: &str = r#"<path d="M4 5h16"/><path d="M4 12h16"/><path d="M4 19h16"/>"#;
const X: &str = r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#;
const ARROW_RIGHT: &str = r#"<path d="M5 12h14"/><path d="m12 5 7 7-7 7"/>"#;
const STAR: &str = r#"<path d="M11.525 2.295a.53.53 0 0 1 .95 0l2.31 4.679a2.123 2.123 0 0 0 1.595 1.16l5.166.756a.53.53 0 0 1 .294.904l-3.736 3.638a2.123 2.123 0 0 0-.611 1.878l.882 5.14a.53.53 0 0 1-.771.56l-4.618-2.428a2.122 2.122 0 0 0-1.973 0L6.396 21.01a.53.53 0 0 1-.77-.56l.881-5.139a2.122 2.122 0 0 0-.611-1.879L2.16 9.795a.53.53 0 0 1 .294-.906l5.165-.755a2.122 2.122 0 0 0 1.597-1.16z"/>"#;
const QUOTE: &str = r#"<path d="M16 3a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2 1 1 0 0 1 1 1v1a2 2 0 0 1-2 2 1 1 0 0 0-1 1v2a1 1 0 0 0 1 1 6 6 0 0 0 6-6V5a2 2 0 0 0-2-2z"/><path d="M5 3a2 2 0 0 0-2 2v6a2 2 0 0 0 2 2 1 1 0 0 1 1 1v1a2 2 0 0 1-2 2 1 1 0 0 0-1 1v2a1 1 0 0 0 1 1 6 6 0 0 0 6-6V5a2 2 0 0 0-2-2z"/>"#;
const MAP_PIN: &str = r#"<path d="M20 10c0 4.993-5.539 10.193-7.399 11.799a1 1 0 0 1-1.202 0C9.539 20.193 4 14.993 4 10a8 8 0 0 1 16 0"/><circle cx="12" cy="10" r="3"/>"#;
const PHONE: &str = r#"<path d="M13.832 16.568a1 1 0 0 0 1.213-.303l.355-.465A2 2 0 0 1 17 15h3a2 2 0 0 1 2 2v3a2 2 0 0 1-2 2A18 18 0 0 1 2 4a2 2 0 0 1 2-2h3a2 2 0 0 1 2 2v3a2 2 0 0 1-.8 1.6l-.468.351a1 1 0 0 0-.292 1.233 14 14 0 0 0 6.392 6.384"/>"#;
const MAIL: &str = r#"<path d="m22 7-8.991 5.727a2 2 0 0 1-2.009 0L2 7"/><rect x="2" y="4" width="20" height="16" rx="2"/>"#;
const INSTAGRAM: &str = r#"<rect x="2" y="2" width="20" height="20" rx="5" ry="5"/><path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"/><line x1="17.5" y1="6.5" x2="17.51" y2="6.5"/>"#;
const SPARKLES: &str = r#"<path d="M11.017 2.814a1 1 0 0 1 1.966 0l1.051 5.558a2 2 0 0 0 1.594 1.594l5.558 1.051a1 1 0 0 1 0 1.966l-5.558 1.051a2 2 0 0 0-1.594 1.594l-1.051 5.558a1 1 0 0 1-1.966 0l-1.051-5.558a2 2 0 0 0-1.594-1.594l-5.558-1.051a1 1 0 0 1 0-1.966l5.558-1.051a2 2 0 0 0 1.594-1.594z"/><path d="M20 2v4"/><path d="M22 4h-4"/><circle cx="4" cy="20" r="2"/>"#;
const CLOCK: &str = r#"<path d="M12 6v6l4 2"/><circle cx="12" cy="12" r="10"/>"#;
const HEART_HANDSHAKE: &str = r#"<path d="M19.414 14.414C21 12.828 22 11.5 22 9.5a5.5 5.5 0 0 0-9.591-3.676.6.6 0 0 1-.818.001A5.5 5.5 0 0 0 2 9.5c0 2.3 1.5 4 3 5.5l5.535 5.362a2 2 0 0 0 2.879.052 2.12 2.12 0 0 0-.004-3 2.124 2.124 0 1 0 3-3 2.124 2.124 0 0 0 3.004 0 2 2 0 0 0 0-2.828l-1.881-1.882a2.41 2.41 0 0 0-3.409 0l-1.71 1.71a2 2 0 0 1-2.828 0 2 2 0 0 1 0-2.828l2.823-2.762"/>"#;
const AWARD: &str = r#"<path d="m15.477 12.89 1.515 8.526a.5.5 0 0 1-.81.47l-3.58-2.687a1 1 0 0 0-1.197 0l-3.586 2.686a.5.5 0 0 1-.81-.469l1.514-8.526"/><circle cx="12" cy="8" r="6"/>"#;
const ZAP: &str = r#"<path d="M4 14a1 1 0 0 1-.78-1.63l9.9-10.2a.5.5 0 0 1 .86.46l-1.92 6.02A1 1 0 0 0 13 10h7a1 1 0 0 1 .78 1.63l-9.9 10.2a.5.5 0 0 1-.86-.46l1.92-6.02A1 1 0 0 0 11 14z"/>"#;
const CHEF_HAT: &str = r#"<path d="M17 21a1 1 0 0 0 1-1v-5.35c0-.457.316-.844.727-1.041a4 4 0 0 0-2.134-7.589 5 5 0 0 0-9.186 0 4 4 0 0 0-2.134 7.588c.411.198.727.585.727 1.041V20a1 1 0 0 0 1 1Z"/><path d="M6 17h12"/>"#;

/// Every icon the site can render
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    ShoppingBag,
    Menu,
    X,
    ArrowRight,
    Star,
    Quote,
    MapPin,
    Phone,
    Mail,
    Instagram,
    Sparkles,
    Clock,
    HeartHandshake,
    Award,
    Zap,
    ChefHat,
}

impl Icon {
    pub const ALL: [Icon; 16] = [
        Icon::ShoppingBag,
        Icon::Menu,
        Icon::X,
        Icon::ArrowRight,
        Icon::Star,
        Icon::Quote,
        Icon::MapPin,
        Icon::Phone,
        Icon::Mail,
        Icon::Instagram,
        Icon::Sparkles,
        Icon::Clock,
        Icon::HeartHandshake,
        Icon::Award,
        Icon::Zap,
        Icon::ChefHat,
    ];

    /// Inner SVG elements on a 24x24 grid
    pub fn svg_body(self) -> &'static str {
        match self {
            Icon::ShoppingBag => SHOPPING_BAG,
            Icon::Menu => MENU,
            Icon::X => X,
            Icon::ArrowRight => ARROW_RIGHT,
            Icon::Star => STAR,
            Icon::Quote => QUOTE,
            Icon::MapPin => MAP_PIN,
            Icon::Phone => PHONE,
            Icon::Mail => MAIL,
            Icon::Instagram => INSTAGRAM,
            Icon::Sparkles => SPARKLES,
            Icon::Clock => CLOCK,
            Icon::HeartHandshake => HEART_HANDSHAKE,
            Icon::Award => AWARD,
            Icon::Zap => ZAP,
            Icon::ChefHat => CHEF_HAT,
        }
    }

    /// Kebab-case name, as used in content files
    pub fn name(self) -> &'static str {
        match self {
            Icon::ShoppingBag => "shopping-bag",
            Icon::Menu => "menu",
            Icon::X => "x",
            Icon::ArrowRight => "arrow-right",
            Icon::Star => "star",
            Icon::Quote => "quote",
            Icon::MapPin => "map-pin",
            Icon::Phone => "phone",
            Icon::Mail => "mail",
            Icon::Instagram => "instagram",
            Icon::Sparkles => "sparkles",
            Icon::Clock => "clock",
            Icon::HeartHandshake => "heart-handshake",
            Icon::Award => "award",
            Icon::Zap => "zap",
            Icon::ChefHat => "chef-hat",
        }
    }

    /// Complete `<svg>` element at `size` px, stroked with `currentColor`
    pub fn to_svg(self, size: u32) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{size}\" height=\"{size}\" \
             viewBox=\"0 0 24 24\" fill=\"none\" stroke=\"currentColor\" stroke-width=\"2\" \
             stroke-linecap=\"round\" stroke-linejoin=\"round\" aria-hidden=\"true\" \
             class=\"icon icon-{}\">{}</svg>",
            self.name(),
            self.svg_body()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_markup() {
        for icon in Icon::ALL {
            let body = icon.svg_body();
            assert!(body.starts_with('<'), "{icon:?}");
            assert!(body.ends_with("/>"), "{icon:?}");
        }
    }

    #[test]
    fn test_to_svg() {
        let svg = Icon::X.to_svg(32);
        assert!(svg.starts_with("<svg "));
        assert!(svg.contains("width=\"32\" height=\"32\""));
        assert!(svg.contains("class=\"icon icon-x\""));
        assert!(svg.contains(r#"<path d="M18 6 6 18"/>"#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_names_match_serde() {
        #[derive(Deserialize)]
        struct Holder {
            icon: Icon,
        }
        for icon in Icon::ALL {
            let holder: Holder = toml::from_str(&format!("icon = \"{}\"", icon.name())).unwrap();
            assert_eq!(holder.icon, icon);
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        #[derive(Debug, Deserialize)]
        #[allow(dead_code)]
        struct Holder {
            icon: Icon,
        }
        assert!(toml::from_str::<Holder>("icon = \"cooking-pot\"").is_err());
    }
}
