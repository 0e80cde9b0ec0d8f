//! Forge Burger content catalogue
//!
//! Static data the section components render: menu, events, reviews,
//! reservation slots, and English labels for section display keys.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCategory {
    Burgers,
    Drinks,
    Sides,
    Milkshakes,
}

impl MenuCategory {
    pub const ALL: [MenuCategory; 4] = [
        MenuCategory::Burgers,
        MenuCategory::Drinks,
        MenuCategory::Sides,
        MenuCategory::Milkshakes,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            MenuCategory::Burgers => "Burgers",
            MenuCategory::Drinks => "Drinks",
            MenuCategory::Sides => "Sides",
            MenuCategory::Milkshakes => "Milkshakes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Allergen {
    Pork,
    Egg,
    Gluten,
    Dairy,
    Vegetarian,
    Vegan,
    Spicy,
    Alcohol,
    Nuts,
}

impl fmt::Display for Allergen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Allergen::Pork => "pork",
            Allergen::Egg => "egg",
            Allergen::Gluten => "gluten",
            Allergen::Dairy => "dairy",
            Allergen::Vegetarian => "vegetarian",
            Allergen::Vegan => "vegan",
            Allergen::Spicy => "spicy",
            Allergen::Alcohol => "alcohol",
            Allergen::Nuts => "nuts",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MenuItem {
    pub id: &'static str,
    pub name: &'static str,
    /// Euros
    pub price: f32,
    pub category: MenuCategory,
    pub tags: &'static [&'static str],
    pub allergens: &'static [Allergen],
}

#[derive(Debug, Clone, Copy)]
pub struct EventItem {
    pub id: &'static str,
    pub title: &'static str,
    pub summary: &'static str,
    pub featured: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct Testimonial {
    pub id: &'static str,
    pub author: &'static str,
    pub quote: &'static str,
}

use Allergen::*;
use MenuCategory::*;

pub const MENU_ITEMS: &[MenuItem] = &[
    MenuItem { id: "classic", name: "The Classic", price: 14.9, category: Burgers, tags: &["popular"], allergens: &[Gluten, Dairy] },
    MenuItem { id: "smoky", name: "Smoky Forge", price: 17.9, category: Burgers, tags: &["signature"], allergens: &[Gluten, Dairy, Pork] },
    MenuItem { id: "truffle", name: "Truffle Anvil", price: 21.9, category: Burgers, tags: &["premium"], allergens: &[Gluten, Dairy] },
    MenuItem { id: "inferno", name: "Inferno", price: 16.9, category: Burgers, tags: &["spicy"], allergens: &[Gluten, Dairy, Spicy] },
    MenuItem { id: "veggie", name: "Green Smith", price: 15.9, category: Burgers, tags: &["vegetarian"], allergens: &[Gluten, Dairy, Vegetarian, Nuts] },
    MenuItem { id: "bacon", name: "Double Bacon", price: 18.9, category: Burgers, tags: &["bestseller"], allergens: &[Gluten, Dairy, Pork, Egg] },
    MenuItem { id: "cola", name: "Cola", price: 3.5, category: Drinks, tags: &[], allergens: &[] },
    MenuItem { id: "lemonade", name: "House Lemonade", price: 4.5, category: Drinks, tags: &["popular"], allergens: &[Vegan] },
    MenuItem { id: "craftBeer", name: "Craft Beer", price: 5.9, category: Drinks, tags: &["premium"], allergens: &[Gluten, Alcohol] },
    MenuItem { id: "sparklingWater", name: "Sparkling Water", price: 2.9, category: Drinks, tags: &[], allergens: &[Vegan] },
    MenuItem { id: "fries", name: "Hand-cut Fries", price: 4.9, category: Sides, tags: &["popular"], allergens: &[Vegan] },
    MenuItem { id: "onionRings", name: "Onion Rings", price: 5.9, category: Sides, tags: &[], allergens: &[Gluten, Egg] },
    MenuItem { id: "coleslaw", name: "Coleslaw", price: 3.9, category: Sides, tags: &[], allergens: &[Egg, Vegetarian] },
    MenuItem { id: "nachos", name: "Forge Nachos", price: 7.9, category: Sides, tags: &["signature"], allergens: &[Dairy, Vegetarian] },
    MenuItem { id: "chocolateShake", name: "Chocolate Shake", price: 6.5, category: Milkshakes, tags: &["popular"], allergens: &[Dairy] },
    MenuItem { id: "strawberryShake", name: "Strawberry Shake", price: 6.5, category: Milkshakes, tags: &[], allergens: &[Dairy] },
    MenuItem { id: "vanillaShake", name: "Vanilla Shake", price: 6.5, category: Milkshakes, tags: &[], allergens: &[Dairy] },
    MenuItem { id: "oreoShake", name: "Cookies & Cream Shake", price: 7.5, category: Milkshakes, tags: &["premium"], allergens: &[Dairy, Gluten] },
];

pub const EVENT_ITEMS: &[EventItem] = &[
    EventItem { id: "liveMusic", title: "Live Music Fridays", summary: "Local bands on stage every Friday night.", featured: true },
    EventItem { id: "burgerChallenge", title: "Burger Challenge", summary: "Finish the triple stack in 15 minutes and it's on us.", featured: false },
    EventItem { id: "craftBeer", title: "Craft Beer Tasting", summary: "Monthly tasting with Porto's independent brewers.", featured: false },
    EventItem { id: "brunch", title: "Weekend Brunch", summary: "Brunch burgers and bottomless coffee on weekends.", featured: false },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial { id: "review1", author: "Miguel S.", quote: "Best burger in Porto, no contest." },
    Testimonial { id: "review2", author: "Ana R.", quote: "The truffle burger is worth every cent." },
    Testimonial { id: "review3", author: "James T.", quote: "Great music, great beer, great staff." },
    Testimonial { id: "review4", author: "Sofia L.", quote: "Finally a veggie burger that isn't an afterthought." },
];

/// Lunch and dinner seatings offered by the reservation form
pub const TIME_SLOTS: &[&str] = &[
    "12:00", "12:30", "13:00", "13:30", "14:00", "14:30",
    "19:00", "19:30", "20:00", "20:30", "21:00", "21:30", "22:00",
];

pub const MAX_GUESTS: u8 = 10;

pub fn guest_options() -> impl Iterator<Item = u8> {
    1..=MAX_GUESTS
}

/// Menu items of one category, catalogue order preserved
pub fn menu_by_category(category: MenuCategory) -> impl Iterator<Item = &'static MenuItem> {
    MENU_ITEMS.iter().filter(move |item| item.category == category)
}

/// Events with the featured ones first
pub fn events_featured_first() -> Vec<&'static EventItem> {
    let mut events: Vec<&EventItem> = EVENT_ITEMS.iter().collect();
    events.sort_by_key(|e| !e.featured);
    events
}

/// English label for a section display key; unknown keys are shown as-is
pub fn section_label(display_key: &str) -> &str {
    match display_key {
        "hero" => "Home",
        "menu" => "Menu",
        "about" => "About",
        "events" => "Events",
        "testimonials" => "Reviews",
        "reservations" => "Reservations",
        "contact" => "Contact",
        other => other,
    }
}
