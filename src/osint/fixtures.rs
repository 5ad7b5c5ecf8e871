// src/osint/fixtures.rs
//
// Hand-authored records the simulators choose from. Order matters: selection
// is by index, so reordering a table changes every report built from it.

pub struct BreachFixture {
    pub name: &'static str,
    pub domain: &'static str,
    pub date: &'static str,
    pub data_classes: &'static [&'static str],
    pub description: &'static str,
}

pub const BREACHES: &[BreachFixture] = &[
    BreachFixture {
        name: "LinkedIn (2012 Scraping)",
        domain: "linkedin.com",
        date: "2012-06-05",
        data_classes: &["Email Addresses", "Passwords (SHA-1)"],
        description: "Professional networking site suffered a massive data scrape affecting 160M accounts.",
    },
    BreachFixture {
        name: "Adobe Systems",
        domain: "adobe.com",
        date: "2013-10-04",
        data_classes: &["Email", "Password Hints", "Usernames"],
        description: "153 million accounts breached including source code and customer data.",
    },
    BreachFixture {
        name: "Collection #1 (Combo List)",
        domain: "n/a",
        date: "2019-01-07",
        data_classes: &["Email", "Plaintext Passwords"],
        description: "A massive aggregation of 773 million unique email addresses and passwords.",
    },
    BreachFixture {
        name: "Canva Design",
        domain: "canva.com",
        date: "2019-05-24",
        data_classes: &["Email", "Names", "Cities", "Auth Tokens"],
        description: "Graphic design tool suffered a breach affecting 137 million users.",
    },
    BreachFixture {
        name: "Verifications.io",
        domain: "verifications.io",
        date: "2019-02-25",
        data_classes: &["Email", "Phone Numbers", "IP Addresses", "Genders"],
        description: "Email validation service left a MongoDB instance unprotected.",
    },
];

pub const REGISTRARS: &[&str] = &[
    "GoDaddy.com, LLC",
    "NameCheap, Inc.",
    "MarkMonitor Inc.",
    "Google LLC",
    "CloudFlare, Inc.",
];

pub const DOMAIN_STATUSES: &[&str] = &[
    "clientTransferProhibited",
    "clientUpdateProhibited",
    "clientDeleteProhibited",
];

pub const MAIL_EXCHANGERS: &[(u16, &str)] = &[
    (10, "aspmx.l.google.com"),
    (20, "alt1.aspmx.l.google.com"),
];

pub const DNS_NAME_SERVERS: &[&str] = &["ns1.digitalocean.com", "ns2.digitalocean.com"];

pub const SPF_RECORD: &str = "\"v=spf1 include:_spf.google.com ~all\"";

pub const CNAME_TARGET: &str = "ext-cust.squarespace.com";

/// Serial, refresh, retry, expire and minimum TTL of the simulated SOA.
pub const SOA_TIMERS: &str = "1709934221 10800 3600 604800 3600";

pub struct PersonFixture {
    pub first: &'static str,
    pub last: &'static str,
    pub role: &'static str,
}

/// Role mailboxes every organisation is assumed to run.
pub const ROLE_MAILBOXES: &[PersonFixture] = &[
    PersonFixture { first: "admin", last: "", role: "Infrastructure" },
    PersonFixture { first: "support", last: "", role: "Customer Service" },
    PersonFixture { first: "contact", last: "", role: "General" },
];

pub const EMPLOYEES: &[PersonFixture] = &[
    PersonFixture { first: "John", last: "Smith", role: "Sales Director" },
    PersonFixture { first: "Sarah", last: "Connor", role: "Security Lead" },
    PersonFixture { first: "Michael", last: "Chen", role: "Developer" },
    PersonFixture { first: "Emily", last: "Davis", role: "HR Manager" },
    PersonFixture { first: "David", last: "Miller", role: "Finance" },
];

pub struct PlatformFixture {
    pub name: &'static str,
    pub category: &'static str,
    pub base: &'static str,
}

pub const PLATFORMS: &[PlatformFixture] = &[
    PlatformFixture { name: "Twitter", category: "Social", base: "twitter.com/" },
    PlatformFixture { name: "Instagram", category: "Social", base: "instagram.com/" },
    PlatformFixture { name: "GitHub", category: "Code", base: "github.com/" },
    PlatformFixture { name: "Reddit", category: "Forum", base: "reddit.com/user/" },
    PlatformFixture { name: "LinkedIn", category: "Professional", base: "linkedin.com/in/" },
    PlatformFixture { name: "Spotify", category: "Music", base: "open.spotify.com/user/" },
    PlatformFixture { name: "Discord", category: "Chat", base: "discordapp.com/users/" },
    PlatformFixture { name: "Medium", category: "Blog", base: "medium.com/@" },
    PlatformFixture { name: "Steam", category: "Gaming", base: "steamcommunity.com/id/" },
    PlatformFixture { name: "Twitch", category: "Streaming", base: "twitch.tv/" },
];

pub const BIOS: &[&str] = &[
    "Tech enthusiast. Developer. Coffee lover. ☕",
    "Digital artist & designer. 🎨",
    "Just here for the memes.",
    "Cybersecurity student @ MU. 🔒",
    "Building the future of the web.",
    "Open source contributor.",
    "Photographer based in Mumbai. 📸",
];

pub const IMAGE_TYPES: &[&str] = &["jpg", "jpeg", "png", "heic"];

pub const DOCUMENT_TYPES: &[&str] = &["pdf", "docx", "pptx"];

pub const IMAGE_METADATA: &[(&str, &str)] = &[
    ("Dimensions", "4032 x 3024"),
    ("Color Space", "sRGB"),
    ("Camera Model", "iPhone 14 Pro"),
    ("Aperture", "f/1.78"),
    ("Exposure", "1/120 sec"),
    ("Software", "iOS 16.4.1"),
    ("Date Created", "2023-10-15 14:22:01"),
];

pub const GPS_METADATA: &[(&str, &str)] = &[
    ("GPS Latitude", "34.0522 N"),
    ("GPS Longitude", "118.2437 W"),
];

pub const DOCUMENT_METADATA: &[(&str, &str)] = &[
    ("Author", "Corporate User"),
    ("Company", "Tech Corp Ltd."),
    ("Creator", "Microsoft Word 365"),
    ("Creation Date", "2023-09-01 09:00:00"),
    ("Last Modified", "2024-01-20 16:45:00"),
    ("Revision Number", "12"),
    ("Language", "en-US"),
];
