//! Static single-page renderer
//!
//! Maps each enabled section, in display order, to its component through an
//! id → component table. Ids without a component render nothing.

use std::collections::HashMap;
use std::fmt::Write;
use tracing::{debug, info};

use crate::config::SiteConfig;
use crate::constants::{page, sections::RESERVATIONS_ID};
use crate::layout::SectionState;
use crate::registry::Registry;

use super::content::{self, MenuCategory};
use super::html::escape;
use super::nav::{footer_links, nav_links, NavLink};

/// Everything a section component may read
pub struct RenderContext<'a> {
    pub config: &'a SiteConfig,
    pub registry: &'a Registry,
}

/// Renders one section's `<section>` element
pub type Component = fn(&RenderContext<'_>) -> String;

pub struct PageRenderer<'a> {
    ctx: RenderContext<'a>,
    components: HashMap<&'static str, Component>,
}

impl<'a> PageRenderer<'a> {
    /// Renderer with the built-in Forge Burger components
    pub fn new(config: &'a SiteConfig, registry: &'a Registry) -> Self {
        let mut components: HashMap<&'static str, Component> = HashMap::new();
        components.insert("hero", hero);
        components.insert("menu", menu);
        components.insert("about", about);
        components.insert("events", events);
        components.insert("testimonials", testimonials);
        components.insert("reservations", reservations);
        components.insert("contact", contact);

        Self {
            ctx: RenderContext { config, registry },
            components,
        }
    }

    /// Register or replace the component for a section id
    #[cfg(test)]
    pub fn with_component(mut self, id: &'static str, component: Component) -> Self {
        self.components.insert(id, component);
        self
    }

    /// Section markup only, in the order given
    pub fn render_sections(&self, enabled: &[SectionState]) -> String {
        let mut out = String::new();
        for section in enabled {
            match self.components.get(section.id.as_str()) {
                Some(component) => out.push_str(&component(&self.ctx)),
                None => debug!(id = %section.id, "No component for section, skipping"),
            }
        }
        out
    }

    /// Complete HTML document: header nav, sections, footer
    pub fn render_page(&self, enabled: &[SectionState]) -> String {
        let config = self.ctx.config;
        let name = escape(&config.name);
        let mut out = String::new();

        let _ = writeln!(out, "<!DOCTYPE html>");
        let _ = writeln!(out, "<html lang=\"{}\">", page::LANG);
        let _ = writeln!(out, "<head>");
        let _ = writeln!(out, "<meta charset=\"utf-8\">");
        let _ = writeln!(out, "<title>{name}</title>");
        let _ = writeln!(out, "<meta name=\"description\" content=\"{}\">", escape(&config.description));
        let _ = writeln!(out, "<link rel=\"canonical\" href=\"{}\">", escape(&config.url));
        let _ = writeln!(out, "</head>");
        let _ = writeln!(out, "<body>");

        let _ = writeln!(out, "<header><nav><a class=\"brand\" href=\"#\">{name}</a>");
        write_links(&mut out, &nav_links(self.ctx.registry, enabled));
        let _ = writeln!(out, "</nav></header>");

        let _ = writeln!(out, "<main>");
        out.push_str(&self.render_sections(enabled));
        let _ = writeln!(out, "</main>");

        let _ = writeln!(out, "<footer>");
        write_links(&mut out, &footer_links(self.ctx.registry, enabled));
        let _ = writeln!(out, "<p>&copy; {name}</p>");
        let _ = writeln!(out, "</footer>");
        let _ = writeln!(out, "</body>");
        let _ = writeln!(out, "</html>");

        info!(sections = enabled.len(), bytes = out.len(), "Rendered page");
        out
    }
}

fn write_links(out: &mut String, links: &[NavLink]) {
    let _ = writeln!(out, "<ul>");
    for link in links {
        let _ = writeln!(
            out,
            "<li><a href=\"{}\">{}</a></li>",
            escape(&link.href),
            escape(&link.label)
        );
    }
    let _ = writeln!(out, "</ul>");
}

fn open_section(out: &mut String, id: &str, title: &str) {
    let _ = writeln!(out, "<section id=\"{}\">", escape(id));
    let _ = writeln!(out, "<h2>{}</h2>", escape(title));
}

fn hero(ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "<section id=\"hero\">");
    let _ = writeln!(out, "<h1>{}</h1>", escape(&ctx.config.name));
    let _ = writeln!(out, "<p>{}</p>", escape(&ctx.config.description));
    let _ = writeln!(
        out,
        "<a class=\"cta\" href=\"{}{}\">Book a table</a>",
        page::ANCHOR_PREFIX,
        RESERVATIONS_ID
    );
    let _ = writeln!(out, "</section>");
    out
}

fn menu(_ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();
    open_section(&mut out, "menu", "Menu");
    for category in MenuCategory::ALL {
        let _ = writeln!(out, "<h3>{}</h3>", category.title());
        let _ = writeln!(out, "<ul class=\"menu-items\">");
        for item in content::menu_by_category(category) {
            let _ = write!(
                out,
                "<li data-id=\"{}\"><span class=\"name\">{}</span> <span class=\"price\">€{:.2}</span>",
                item.id,
                escape(item.name),
                item.price
            );
            for tag in item.tags {
                let _ = write!(out, " <span class=\"tag\">{}</span>", escape(tag));
            }
            if !item.allergens.is_empty() {
                let list: Vec<String> = item.allergens.iter().map(|a| a.to_string()).collect();
                let _ = write!(out, " <small class=\"allergens\">{}</small>", list.join(", "));
            }
            let _ = writeln!(out, "</li>");
        }
        let _ = writeln!(out, "</ul>");
    }
    let _ = writeln!(out, "</section>");
    out
}

fn about(ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();
    open_section(&mut out, "about", "About");
    let _ = writeln!(
        out,
        "<p>{} grinds its beef in house every morning and bakes its own brioche buns. \
         Everything leaves the grill the moment it is ordered.</p>",
        escape(&ctx.config.name)
    );
    let _ = writeln!(out, "</section>");
    out
}

fn events(_ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();
    open_section(&mut out, "events", "Events");
    for event in content::events_featured_first() {
        let class = if event.featured { "event featured" } else { "event" };
        let _ = writeln!(
            out,
            "<article class=\"{class}\" data-id=\"{}\"><h3>{}</h3><p>{}</p></article>",
            event.id,
            escape(event.title),
            escape(event.summary)
        );
    }
    let _ = writeln!(out, "</section>");
    out
}

fn testimonials(_ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();
    open_section(&mut out, "testimonials", "Reviews");
    for review in content::TESTIMONIALS {
        let _ = writeln!(
            out,
            "<blockquote data-id=\"{}\"><p>{}</p><cite>{}</cite></blockquote>",
            review.id,
            escape(review.quote),
            escape(review.author)
        );
    }
    let _ = writeln!(out, "</section>");
    out
}

fn reservations(_ctx: &RenderContext<'_>) -> String {
    let mut out = String::new();
    open_section(&mut out, "reservations", "Reservations");
    let _ = writeln!(out, "<form class=\"reservation\" method=\"post\">");
    let _ = writeln!(out, "<input type=\"date\" name=\"date\" required>");

    let _ = writeln!(out, "<select name=\"time\" required>");
    for slot in content::TIME_SLOTS {
        let _ = writeln!(out, "<option value=\"{slot}\">{slot}</option>");
    }
    let _ = writeln!(out, "</select>");

    let _ = writeln!(out, "<select name=\"guests\" required>");
    for guests in content::guest_options() {
        let _ = writeln!(out, "<option value=\"{guests}\">{guests}</option>");
    }
    let _ = writeln!(out, "</select>");

    let _ = writeln!(out, "<input type=\"text\" name=\"name\" required>");
    let _ = writeln!(out, "<input type=\"email\" name=\"email\" required>");
    let _ = writeln!(out, "<input type=\"tel\" name=\"phone\" required>");
    let _ = writeln!(out, "<textarea name=\"specialRequests\"></textarea>");
    let _ = writeln!(out, "<button type=\"submit\">Reserve</button>");
    let _ = writeln!(out, "</form>");
    let _ = writeln!(out, "</section>");
    out
}

fn contact(ctx: &RenderContext<'_>) -> String {
    let contact = &ctx.config.contact;
    let address = &contact.address;
    let mut out = String::new();
    open_section(&mut out, "contact", "Contact");

    let _ = writeln!(
        out,
        "<address>{}<br>{} {}<br>{}</address>",
        escape(&address.street),
        escape(&address.postal_code),
        escape(&address.city),
        escape(&address.country)
    );
    let _ = writeln!(
        out,
        "<p><a href=\"tel:{0}\">{0}</a> · <a href=\"mailto:{1}\">{1}</a></p>",
        escape(&contact.phone),
        escape(&contact.email)
    );

    let _ = writeln!(out, "<table class=\"hours\">");
    for (day, hours) in ctx.config.hours.days() {
        match hours {
            Some(h) => {
                let _ = writeln!(
                    out,
                    "<tr><th>{day}</th><td>{} – {}</td></tr>",
                    escape(&h.open),
                    escape(&h.close)
                );
            }
            None => {
                let _ = writeln!(out, "<tr><th>{day}</th><td>Closed</td></tr>");
            }
        }
    }
    let _ = writeln!(out, "</table>");

    let _ = writeln!(out, "<ul class=\"social\">");
    for (network, url) in ctx.config.social.links() {
        let _ = writeln!(out, "<li><a href=\"{}\">{network}</a></li>", escape(url));
    }
    let _ = writeln!(out, "</ul>");
    let _ = writeln!(out, "</section>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(haystack: &str, needle: &str) -> usize {
        haystack.find(needle).unwrap_or_else(|| panic!("{needle} not rendered"))
    }

    #[test]
    fn test_sections_render_in_given_order() {
        let config = SiteConfig::default();
        let registry = Registry::default();
        let renderer = PageRenderer::new(&config, &registry);

        let enabled = vec![
            SectionState::new("contact", true, 0),
            SectionState::new("hero", true, 1),
            SectionState::new("menu", true, 2),
        ];
        let html = renderer.render_sections(&enabled);

        let contact = position(&html, "<section id=\"contact\">");
        let hero = position(&html, "<section id=\"hero\">");
        let menu = position(&html, "<section id=\"menu\">");
        assert!(contact < hero && hero < menu);
        assert!(!html.contains("id=\"events\""));
    }

    #[test]
    fn test_unknown_ids_render_nothing() {
        let config = SiteConfig::default();
        let registry = Registry::default();
        let renderer = PageRenderer::new(&config, &registry);

        let html = renderer.render_sections(&[SectionState::new("gallery", true, 0)]);
        assert!(html.is_empty());
    }

    #[test]
    fn test_custom_component() {
        fn gallery(_ctx: &RenderContext<'_>) -> String {
            "<section id=\"gallery\"></section>".to_string()
        }

        let config = SiteConfig::default();
        let registry = Registry::default();
        let renderer = PageRenderer::new(&config, &registry).with_component("gallery", gallery);

        let html = renderer.render_sections(&[SectionState::new("gallery", true, 0)]);
        assert_eq!(html, "<section id=\"gallery\"></section>");
    }

    #[test]
    fn test_page_has_nav_without_hero() {
        let config = SiteConfig::default();
        let registry = Registry::default();
        let renderer = PageRenderer::new(&config, &registry);

        let enabled = vec![
            SectionState::new("hero", true, 0),
            SectionState::new("about", true, 1),
        ];
        let html = renderer.render_page(&enabled);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<li><a href=\"#about\">About</a></li>"));
        assert!(!html.contains("href=\"#hero\""));
        // Hero CTA still points at reservations even when that section is off
        assert!(html.contains("href=\"#reservations\""));
    }

    #[test]
    fn test_contact_shows_closed_days_and_escapes() {
        let mut config = SiteConfig::default();
        config.contact.address.street = "Rua <Forja> & Co".to_string();
        let registry = Registry::default();
        let renderer = PageRenderer::new(&config, &registry);

        let html = renderer.render_sections(&[SectionState::new("contact", true, 0)]);
        assert!(html.contains("<tr><th>Monday</th><td>Closed</td></tr>"));
        assert!(html.contains("<tr><th>Tuesday</th><td>12:00 – 23:00</td></tr>"));
        assert!(html.contains("Rua &lt;Forja&gt; &amp; Co"));
    }

    #[test]
    fn test_menu_prices_and_allergens() {
        let config = SiteConfig::default();
        let registry = Registry::default();
        let renderer = PageRenderer::new(&config, &registry);

        let html = renderer.render_sections(&[SectionState::new("menu", true, 0)]);
        assert!(html.contains("€14.90"));
        assert!(html.contains("Cookies &amp; Cream Shake"));
        assert!(html.contains("gluten, dairy, pork"));
    }
}
