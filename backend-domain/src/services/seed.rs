// Built-in baseline events shown before any user interaction

use crate::entities::Event;
use crate::value_objects::{EventCategory, EventImage};

struct SeedEvent {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    date: &'static str,
    time: &'static str,
    location: &'static str,
    city: &'static str,
    country: &'static str,
    price: &'static str,
    supply: u32,
    minted: u32,
    organizer: &'static str,
    organizer_address: &'static str,
    image: &'static str,
    category: EventCategory,
}

const SEED_EVENTS: [SeedEvent; 6] = [
    SeedEvent {
        id: "1",
        name: "Neon Nights Festival",
        description: "Three stages of electronic music under the harbor cranes.",
        date: "Dec 12, 2025",
        time: "8:00 PM",
        location: "Warehouse District",
        city: "Berlin",
        country: "Germany",
        price: "0.05",
        supply: 500,
        minted: 124,
        organizer: "Pulse Collective",
        organizer_address: "0x8ba1f109551bD432803012645Ac136ddd64DBA72",
        image: "from-purple-600 to-pink-500",
        category: EventCategory::Music,
    },
    SeedEvent {
        id: "2",
        name: "Chain Summit 2025",
        description: "Two days of talks on wallets, custody and on-chain identity.",
        date: "Nov 03, 2025",
        time: "9:30 AM",
        location: "Convention Center Hall B",
        city: "Lisbon",
        country: "Portugal",
        price: "0.12",
        supply: 1200,
        minted: 860,
        organizer: "Ledger Labs",
        organizer_address: "0x52908400098527886E0F7030069857D2E4169EE7",
        image: "from-blue-600 to-cyan-400",
        category: EventCategory::Technology,
    },
    SeedEvent {
        id: "3",
        name: "City Derby Finals",
        description: "The season decider, family stand included.",
        date: "Oct 25, 2025",
        time: "6:45 PM",
        location: "Riverside Stadium",
        city: "Manchester",
        country: "United Kingdom",
        price: "0.03",
        supply: 2000,
        minted: 1999,
        organizer: "North Sports Group",
        organizer_address: "0xde709f2102306220921060314715629080e2fb77",
        image: "from-green-500 to-emerald-700",
        category: EventCategory::Sports,
    },
    SeedEvent {
        id: "4",
        name: "Pixels & Paint",
        description: "Generative art night with live plotting stations.",
        date: "Jan 18, 2026",
        time: "7:00 PM",
        location: "Gallery 21",
        city: "New York",
        country: "United States",
        price: "0.02",
        supply: 150,
        minted: 37,
        organizer: "Studio Kanso",
        organizer_address: "0x27b1fdb04752bbc536007a920d24acb045561c26",
        image: "from-amber-400 to-rose-500",
        category: EventCategory::Arts,
    },
    SeedEvent {
        id: "5",
        name: "Street Food Weekend",
        description: "Forty stalls, one ticket, unlimited tasting tokens.",
        date: "Sep 06, 2025",
        time: "12:00 PM",
        location: "Old Market Square",
        city: "Bangkok",
        country: "Thailand",
        price: "0.01",
        supply: 800,
        minted: 412,
        organizer: "Night Bazaar Co",
        organizer_address: "0x1db3439a222c519ab44bb1144fc28167b4fa6ee6",
        image: "from-orange-500 to-yellow-400",
        category: EventCategory::Food,
    },
    SeedEvent {
        id: "6",
        name: "Arena Clash Invitational",
        description: "Sixteen teams, one trophy, live on the main screen.",
        date: "Feb 14, 2026",
        time: "3:00 PM",
        location: "Esports Arena",
        city: "Seoul",
        country: "South Korea",
        price: "0.04",
        supply: 600,
        minted: 0,
        organizer: "Clash League",
        organizer_address: "0x0000000000000000000000000000000000000001",
        image: "from-red-600 to-indigo-700",
        category: EventCategory::Gaming,
    },
];

pub fn seed_events() -> Vec<Event> {
    SEED_EVENTS
        .iter()
        .map(|seed| Event {
            id: seed.id.to_string(),
            name: seed.name.to_string(),
            description: seed.description.to_string(),
            date: seed.date.to_string(),
            time: seed.time.to_string(),
            location: seed.location.to_string(),
            city: seed.city.to_string(),
            country: seed.country.to_string(),
            price: seed.price.to_string(),
            supply: seed.supply,
            minted: seed.minted,
            organizer: seed.organizer.to_string(),
            organizer_address: seed.organizer_address.to_string(),
            image: EventImage::from(seed.image),
            category: seed.category,
        })
        .collect()
}
