//! HTML rendering
//!
//! Produces one self-contained document for the page's current state. Reveal
//! phases, the navigation variant, the menu and the form phase all surface as
//! class names, so a stylesheet (or a test) can read the state straight from
//! the markup. Every piece of content text goes through `html_escape`.

use crate::icons::Icon;
use crate::page::Page;
use crate::section::{RevealTarget, SectionId};
use html_escape::{encode_double_quoted_attribute as attr, encode_text as text};
use std::fmt::Write;
use vivant_motion::reveal::{RevealController, RevealPreset};
use vivant_widgets::contact::{Interest, SubmissionPhase};

const BASE_CSS: &str = "*{box-sizing:border-box;margin:0}\
body{background:var(--color-primary);color:var(--color-text);font-family:var(--font-body)}\
body.scroll-locked{overflow:hidden}\
h1,h2,h3{font-family:var(--font-heading)}\
.nav{position:fixed;top:0;width:100%;z-index:50;transition:all 500ms}\
.nav--transparent{background:transparent}\
.nav--solid{background:var(--color-primary);box-shadow:0 10px 30px var(--color-shadow)}\
.nav__cta{display:inline-flex;align-items:center;gap:.5rem}\
.mobile-menu__backdrop{position:fixed;inset:0;background:var(--color-overlay)}\
.marquee-strip{overflow:hidden;background:var(--color-secondary);color:var(--color-primary)}\
.marquee{display:flex;gap:3rem;white-space:nowrap;width:max-content}";

/// Render the whole document
pub fn render_document(page: &Page) -> String {
    let content = page.content();
    let mut html = String::with_capacity(32 * 1024);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", text(&content.title));
    let _ = writeln!(
        html,
        "<meta name=\"description\" content=\"{}\">",
        attr(&content.summary)
    );
    let _ = writeln!(
        html,
        "<style>{}{}{}</style>",
        content.theme.css_variables(),
        BASE_CSS,
        page.marquee().keyframes_css("marquee")
    );
    html.push_str("</head>\n");

    let body_class = if page.scroll_lock().is_locked() {
        "scroll-locked"
    } else {
        "scroll-free"
    };
    let _ = writeln!(html, "<body class=\"{body_class}\">");

    render_nav(&mut html, page);
    html.push_str("<main>\n");
    for id in SectionId::ALL {
        match id {
            SectionId::Home => {
                render_hero(&mut html, page);
                render_marquee(&mut html, page);
            }
            SectionId::About => render_about(&mut html, page),
            SectionId::Products => render_products(&mut html, page),
            SectionId::Features => render_features(&mut html, page),
            SectionId::Testimonials => render_testimonials(&mut html, page),
            SectionId::Contact => render_contact(&mut html, page),
        }
    }
    html.push_str("</main>\n");
    render_footer(&mut html, page);
    html.push_str("</body>\n</html>\n");
    html
}

// =============================================================================
// Sections
// =============================================================================

fn open_section(html: &mut String, page: &Page, id: SectionId) {
    let Some(reveal) = page.reveal(id) else {
        let _ = writeln!(html, "<section id=\"{id}\" class=\"section section--{id}\">");
        return;
    };

    let _ = write!(
        html,
        "<section id=\"{id}\" class=\"section section--{id} {}\" data-phase=\"{}\"",
        reveal.css_class(),
        phase_name(reveal)
    );
    let animated = reveal.config().preset != RevealPreset::None;
    if animated && id.reveal_target() == RevealTarget::Section {
        let _ = write!(html, " style=\"{}\"", attr(&reveal.inline_style()));
    }
    html.push_str(">\n");
}

fn phase_name(reveal: &RevealController) -> &'static str {
    if reveal.is_revealed() {
        "revealed"
    } else {
        "pending"
    }
}

/// `style` attribute for card `index` of `total` in a staggered section
fn item_style(page: &Page, id: SectionId, index: usize, total: usize) -> String {
    page.reveal(id)
        .map(|reveal| format!(" style=\"{}\"", attr(&reveal.item_style(index, total).css())))
        .unwrap_or_default()
}

fn item_class(page: &Page, id: SectionId) -> &'static str {
    page.reveal(id).map_or("", RevealController::css_class)
}

fn render_nav(html: &mut String, page: &Page) {
    let nav = page.nav();
    let brand = &page.content().brand;
    let open = nav.is_menu_open();

    let _ = writeln!(
        html,
        "<nav class=\"{}{}\">",
        nav.style().css_class(),
        if open { " nav--menu-open" } else { "" }
    );
    let _ = writeln!(
        html,
        "<a class=\"nav__brand\" href=\"#home\">{}</a>",
        text(&brand.name.to_uppercase())
    );
    html.push_str("<div class=\"nav__links\">");
    for entry in nav.entries() {
        let _ = write!(
            html,
            "<a href=\"{}\">{}</a>",
            attr(&entry.href()),
            text(&entry.label)
        );
    }
    html.push_str("</div>\n");
    let _ = writeln!(
        html,
        "<a class=\"nav__cta\" href=\"#contact\">{}Holla At Us</a>",
        Icon::ShoppingBag.to_svg(18)
    );
    let _ = writeln!(
        html,
        "<button class=\"nav__toggle\" aria-label=\"Open menu\" aria-expanded=\"{open}\">{}</button>",
        Icon::Menu.to_svg(28)
    );

    if open {
        html.push_str("<div class=\"mobile-menu\" role=\"dialog\" aria-modal=\"true\">\n");
        html.push_str("<div class=\"mobile-menu__backdrop\"></div>\n");
        html.push_str("<div class=\"mobile-menu__panel\">\n");
        let _ = writeln!(
            html,
            "<button class=\"mobile-menu__close\" aria-label=\"Close menu\">{}</button>",
            Icon::X.to_svg(32)
        );
        for entry in nav.entries() {
            let _ = writeln!(
                html,
                "<a class=\"mobile-menu__link\" href=\"{}\">{}</a>",
                attr(&entry.href()),
                text(&entry.label)
            );
        }
        let _ = writeln!(
            html,
            "<p class=\"mobile-menu__tagline\">{}</p>",
            text(&brand.tagline)
        );
        html.push_str("</div>\n</div>\n");
    }
    html.push_str("</nav>\n");
}

fn render_hero(html: &mut String, page: &Page) {
    let brand = &page.content().brand;
    let typewriter = page.typewriter();

    open_section(html, page, SectionId::Home);
    html.push_str(
        "<h1>The Essence of <span class=\"accent\">Flavor.</span> Simplified.</h1>\n",
    );
    let _ = writeln!(
        html,
        "<p class=\"tagline{}\" aria-label=\"{}\">{}</p>",
        if typewriter.is_done() { " tagline--done" } else { "" },
        attr(typewriter.text()),
        text(typewriter.visible())
    );
    let _ = writeln!(html, "<p class=\"lead\">{}</p>", text(&brand.description));
    let _ = writeln!(
        html,
        "<a class=\"button\" href=\"#products\">Explore Our Blends {}</a>",
        Icon::ArrowRight.to_svg(18)
    );
    html.push_str("<a class=\"button button--ghost\" href=\"#about\">The Story</a>\n");
    let _ = writeln!(html, "<span class=\"hero__accent\">{}</span>", Icon::Sparkles.to_svg(48));
    html.push_str("</section>\n");
}

fn render_marquee(html: &mut String, page: &Page) {
    let track = page.marquee();
    html.push_str("<div class=\"marquee-strip\" aria-hidden=\"true\">\n<div class=\"marquee\">");
    for item in track.sequence() {
        let _ = write!(html, "<span class=\"marquee__item\">{}</span>", text(&item));
        match track.separator() {
            Some(separator) => {
                let _ = write!(html, "<span class=\"marquee__sep\">{}</span>", text(separator));
            }
            None => html.push_str(&Icon::Zap.to_svg(24)),
        }
    }
    html.push_str("</div>\n</div>\n");
}

fn render_about(html: &mut String, page: &Page) {
    let content = page.content();

    open_section(html, page, SectionId::About);
    html.push_str("<span class=\"eyebrow\">Since Inception</span>\n");
    let _ = writeln!(
        html,
        "<h2>A Home of Taste in {}</h2>",
        text(&content.brand.region)
    );
    let _ = writeln!(html, "<p>{}</p>", text(&content.brand.description));
    html.push_str("<div class=\"stats\">\n");
    for stat in &content.stats {
        let _ = writeln!(
            html,
            "<div class=\"stat\">{}<strong>{}</strong><span>{}</span></div>",
            stat.icon.to_svg(24),
            text(&stat.value),
            text(&stat.label)
        );
    }
    html.push_str("</div>\n</section>\n");
}

fn render_products(html: &mut String, page: &Page) {
    let products = &page.content().products;
    let id = SectionId::Products;

    open_section(html, page, id);
    html.push_str("<span class=\"eyebrow\">The Collection</span>\n");
    html.push_str("<h2>Our Culinary Offerings</h2>\n<div class=\"grid\">\n");
    for (index, product) in products.iter().enumerate() {
        let _ = writeln!(
            html,
            "<article class=\"card {}\"{}>",
            item_class(page, id),
            item_style(page, id, index, products.len())
        );
        if product.image.starts_with("http") {
            let _ = writeln!(
                html,
                "<img src=\"{}\" alt=\"{}\" loading=\"lazy\">",
                attr(&product.image),
                attr(&product.name)
            );
        } else {
            let _ = writeln!(html, "<span class=\"card__emoji\">{}</span>", text(&product.image));
        }
        let _ = writeln!(html, "<span class=\"price\">{}</span>", text(&product.price));
        let _ = writeln!(html, "<h3>{}</h3>", text(&product.name));
        let _ = writeln!(html, "<p>{}</p>", text(&product.description));
        let _ = writeln!(
            html,
            "<a href=\"#contact\">Order Now {}</a>",
            Icon::ArrowRight.to_svg(16)
        );
        html.push_str("</article>\n");
    }
    html.push_str("</div>\n</section>\n");
}

fn render_features(html: &mut String, page: &Page) {
    open_section(html, page, SectionId::Features);
    html.push_str("<span class=\"eyebrow\">Our Specialty</span>\n");
    html.push_str("<h2>Beyond the Spice Jar</h2>\n<div class=\"grid\">\n");
    for feature in &page.content().features {
        let _ = writeln!(
            html,
            "<div class=\"feature\">{}<h3>{}</h3><p>{}</p></div>",
            feature.icon.to_svg(32),
            text(&feature.title),
            text(&feature.description)
        );
    }
    html.push_str("</div>\n</section>\n");
}

fn render_testimonials(html: &mut String, page: &Page) {
    let testimonials = &page.content().testimonials;
    let id = SectionId::Testimonials;
    let stars = Icon::Star.to_svg(16).repeat(5);

    open_section(html, page, id);
    html.push_str("<h2>What Our Patrons Say</h2>\n<div class=\"grid\">\n");
    for (index, testimonial) in testimonials.iter().enumerate() {
        let _ = writeln!(
            html,
            "<figure class=\"testimonial {}\"{}>",
            item_class(page, id),
            item_style(page, id, index, testimonials.len())
        );
        let _ = writeln!(
            html,
            "{}<div class=\"stars\">{stars}</div>",
            Icon::Quote.to_svg(40)
        );
        let _ = writeln!(html, "<blockquote>\"{}\"</blockquote>", text(&testimonial.text));
        let _ = writeln!(
            html,
            "<figcaption><strong>{}</strong><span>{}</span></figcaption>",
            text(&testimonial.name),
            text(&testimonial.role)
        );
        html.push_str("</figure>\n");
    }
    html.push_str("</div>\n</section>\n");
}

fn render_contact(html: &mut String, page: &Page) {
    let form = page.form();
    let phase = form.phase();

    open_section(html, page, SectionId::Contact);
    html.push_str("<h2>Let's Collaborate</h2>\n");
    html.push_str(
        "<p>Ready to elevate your meal prep or book catering for your next big event? \
         Holla at us and let's create something delicious.</p>\n",
    );
    html.push_str("<ul class=\"channels\">\n");
    for channel in &page.content().channels {
        let _ = writeln!(
            html,
            "<li>{}<span>{}</span><strong>{}</strong></li>",
            channel.icon.to_svg(24),
            text(&channel.label),
            text(&channel.value)
        );
    }
    html.push_str("</ul>\n");

    let _ = writeln!(html, "<div class=\"{}\">", phase.css_class());
    if phase == SubmissionPhase::Success {
        let message = form.last_ack().map(|ack| ack.message).unwrap_or_default();
        let _ = writeln!(html, "<div class=\"success\">{}", Icon::Sparkles.to_svg(40));
        html.push_str("<h3>Message Sent!</h3>\n");
        let _ = writeln!(html, "<p>{}</p>", text(&message));
        html.push_str("<button type=\"button\" class=\"send-another\">Send Another</button>\n</div>\n");
    } else {
        render_form(html, page, phase);
    }
    html.push_str("</div>\n</section>\n");
}

fn render_form(html: &mut String, page: &Page, phase: SubmissionPhase) {
    let form = page.form();
    let fields = form.fields();
    let submitting = phase == SubmissionPhase::Submitting;
    let locked = if phase.accepts_input() { "" } else { " disabled" };

    html.push_str("<form method=\"post\" novalidate>\n");
    let _ = writeln!(
        html,
        "<label>Name<input type=\"text\" name=\"name\" required{locked} value=\"{}\"></label>",
        attr(&fields.name)
    );
    let _ = writeln!(
        html,
        "<label>Email<input type=\"email\" name=\"email\" required{locked} value=\"{}\"></label>",
        attr(&fields.email)
    );
    let _ = writeln!(
        html,
        "<label>Region<input type=\"text\" name=\"region\" placeholder=\"e.g. Kaduna\"{locked} value=\"{}\"></label>",
        attr(&fields.region)
    );
    let _ = write!(html, "<label>Interested In<select name=\"interest\"{locked}>");
    for interest in Interest::ALL {
        let _ = write!(
            html,
            "<option{}>{}</option>",
            if interest == fields.interest { " selected" } else { "" },
            interest.label()
        );
    }
    html.push_str("</select></label>\n");
    let _ = writeln!(
        html,
        "<label>Your Message<textarea name=\"message\" rows=\"4\" required{locked}>{}</textarea></label>",
        text(&fields.message)
    );
    if let Some(error) = form.last_error() {
        let _ = writeln!(
            html,
            "<p class=\"form-error\" role=\"alert\">{}</p>",
            text(&error.to_string())
        );
    }
    let _ = writeln!(
        html,
        "<button type=\"submit\"{}>{}</button>",
        if submitting { " disabled" } else { "" },
        if submitting { "Sending..." } else { "Send Request" }
    );
    html.push_str("</form>\n");
}

fn render_footer(html: &mut String, page: &Page) {
    let content = page.content();

    html.push_str("<footer>\n");
    let _ = writeln!(html, "<h2>{}</h2>", text(&content.brand.name.to_uppercase()));
    let _ = writeln!(html, "<p>{}</p>", text(&content.footer));
    let _ = writeln!(
        html,
        "<div class=\"social\">{}{}</div>",
        Icon::Instagram.to_svg(18),
        Icon::Mail.to_svg(18)
    );
    html.push_str("<ul class=\"quick-links\">");
    for entry in page.nav().entries() {
        let _ = write!(
            html,
            "<li><a href=\"{}\">{}</a></li>",
            attr(&entry.href()),
            text(&entry.label)
        );
    }
    html.push_str("</ul>\n");
    let _ = writeln!(
        html,
        "<p class=\"copyright\">&copy; 2024 {}. All Rights Reserved.</p>",
        text(&content.brand.name)
    );
    html.push_str("</footer>\n");
}

#[cfg(test)]
mod tests {
    use crate::content::SiteContent;
    use crate::page::Page;
    use vivant_core::config::EngineConfig;
    use vivant_widgets::contact::Field;
    use vivant_widgets::submit::{Ack, SubmitError};

    fn page_with(content: SiteContent) -> Page {
        Page::new(content, EngineConfig::default()).unwrap()
    }

    fn section_tag<'a>(html: &'a str, id: &str) -> &'a str {
        let start = html
            .find(&format!("<section id=\"{id}\""))
            .unwrap_or_else(|| panic!("no section {id}"));
        let end = start + html[start..].find('>').unwrap();
        &html[start..=end]
    }

    #[test]
    fn test_document_shell() {
        let html = page_with(SiteContent::lavie()).render_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Lavie du Vivants | It's All About The TASTE 🍸</title>"));
        assert!(html.contains("--color-accent:#e84393"));
        assert!(html.contains("@keyframes marquee"));
        assert!(html.contains("<body class=\"scroll-free\">"));
        assert!(html.contains("--color-overlay:rgba(26,26,46,0.95)"));
        assert!(html.contains(".mobile-menu__backdrop{position:fixed;inset:0;background:var(--color-overlay)}"));
        assert!(html.contains("color:var(--color-text)"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_reveal_phases_in_markup() {
        let mut page = page_with(SiteContent::lavie());
        let html = page.render_html();
        assert!(section_tag(&html, "home").contains("reveal--revealed"));
        let about = section_tag(&html, "about");
        assert!(about.contains("reveal--pending"));
        assert!(about.contains("opacity:0;transform:translateY(80px)"));

        let about_y = page.section_bounds(crate::section::SectionId::About).unwrap().y;
        page.on_scroll(about_y);
        let html = page.render_html();
        let about = section_tag(&html, "about");
        assert!(about.contains("reveal--revealed"));
        assert!(about.contains("data-phase=\"revealed\""));
        assert!(about.contains("opacity:1;"));
    }

    #[test]
    fn test_product_cards_are_staggered() {
        let mut page = page_with(SiteContent::lavie());
        let y = page.section_bounds(crate::section::SectionId::Products).unwrap().y;
        page.on_scroll(y);
        let html = page.render_html();

        // The section itself carries no transition; the cards do
        assert!(!section_tag(&html, "products").contains("style="));
        assert!(html.contains("transition-delay:150ms;"));
        assert!(html.contains("transition-delay:750ms;"));
    }

    #[test]
    fn test_content_is_escaped() {
        let mut content = SiteContent::lavie();
        content.testimonials[1].name = "<script>alert(1)</script>".into();
        content.testimonials[0].text = "Tom & Jerry".into();
        let html = page_with(content).render_html();

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("Tom &amp; Jerry"));
    }

    #[test]
    fn test_nav_and_menu_state() {
        let mut page = page_with(SiteContent::lavie());
        let html = page.render_html();
        assert!(html.contains("<nav class=\"nav nav--transparent\">"));
        let cta = &html[html.find("<a class=\"nav__cta\"").unwrap()..];
        assert!(cta[..cta.find("</a>").unwrap()].contains("icon-shopping-bag"));

        page.on_scroll(300.0);
        page.nav_mut().toggle_menu();
        let html = page.render_html();
        assert!(html.contains("<nav class=\"nav nav--solid nav--menu-open\">"));
        assert!(html.contains("class=\"mobile-menu\""));
        assert!(html.contains("<body class=\"scroll-locked\">"));

        page.nav_mut().backdrop_click();
        let html = page.render_html();
        assert!(!html.contains("class=\"mobile-menu\""));
        assert!(html.contains("<body class=\"scroll-free\">"));
    }

    #[test]
    fn test_form_states() {
        let page = page_with(SiteContent::lavie());
        let form = page.form();
        form.set_field(Field::Name, "Aisha \"A\"");

        let ticket = form.begin_submit().unwrap();
        let html = page.render_html();
        assert!(html.contains("contact-form--submitting"));
        assert!(html.contains("disabled>Sending...</button>"));
        assert!(html.contains("value=\"Aisha &quot;A&quot;\""));
        assert!(html.contains("name=\"name\" required disabled value="));
        assert!(html.contains("<select name=\"interest\" disabled>"));
        assert!(html.contains("required disabled></textarea>"));

        form.settle(
            &ticket,
            Err(SubmitError::Validation {
                missing: vec![Field::Email, Field::Message],
            }),
        );
        let html = page.render_html();
        assert!(html.contains("contact-form--error"));
        assert!(!html.contains(" disabled"));
        assert!(html.contains("please fill in: email, message"));

        form.set_field(Field::Email, "a@b.com");
        form.set_field(Field::Message, "hi");
        let ticket = form.begin_submit().unwrap();
        form.settle(&ticket, Ok(Ack::default()));
        let html = page.render_html();
        assert!(html.contains("contact-form--success"));
        assert!(html.contains("Message Sent!"));
        assert!(!html.contains("<form"));
    }

    #[test]
    fn test_marquee_items_doubled() {
        let mut content = SiteContent::lavie();
        content.marquee = vec!["A".into(), "B".into()];
        let html = page_with(content).render_html();
        assert_eq!(html.matches("<span class=\"marquee__item\">").count(), 4);
    }
}
