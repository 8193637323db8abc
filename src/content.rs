//! Static copy for every section of the page

use product_carousel::Product;

pub const BRAND: &str = "GenXis Innovations";
pub const TAGLINE: &str = "Building the future of secure, private, and intelligent digital ecosystems.";
pub const EMAIL: &str = "genxisinnovation@outlook.com";
pub const LOCATION: &str = "Kerala, India";
pub const GITHUB: &str = "https://github.com/lalupj07";

pub const HERO_LINES: [&str; 3] = ["Pure.", "Digital.", "Future."];
pub const HERO_SUBTITLE: &str = "We build ecosystems that define the next generation of connectivity. \
     Simple, powerful, and seamless.";
pub const HERO_CTA: &str = "Explore Ecosystem";

/// Page sections, in scroll order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Products,
    Features,
    Vision,
    Stack,
    Services,
    Insights,
    About,
    Contact,
}

impl Section {
    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Products => "Work",
            Section::Features => "Why Us",
            Section::Vision => "Vision",
            Section::Stack => "Stack",
            Section::Services => "Services",
            Section::Insights => "Insights",
            Section::About => "About",
            Section::Contact => "Contact",
        }
    }
}

pub const NAV: [Section; 9] = [
    Section::Home,
    Section::Products,
    Section::Features,
    Section::Vision,
    Section::Stack,
    Section::Services,
    Section::Insights,
    Section::About,
    Section::Contact,
];

pub fn products() -> Vec<Product> {
    vec![
        Product::new("FamBudget", "2025")
            .with_description(
                "A powerful, privacy-focused desktop application designed to help families \
                 manage their finances effectively.",
            )
            .with_long_description(
                "FamBudget keeps family finance management private and simple. All financial \
                 data stays on your device, with multi-currency support, detailed analytics \
                 and a seamless offline-first experience.",
            )
            .with_features([
                "Complete Privacy (Local Storage)",
                "Multi-Currency Support",
                "Interactive Analytics Dashboard",
                "Offline First Architecture",
                "Cross-Platform (Windows/Mac/Linux)",
                "Export to CSV/PDF",
            ])
            .with_tags(["Finance", "Privacy", "Electron"])
            .with_image("images/fambudget_logo.png")
            .with_screenshots([
                "images/fambudget_dashboard.jpg",
                "images/fambudget_accounts.jpg",
                "images/fambudget_income.jpg",
                "images/fambudget_goals.jpg",
                "images/fambudget_reports.jpg",
            ]),
        Product::new("GenXLink", "2025")
            .with_description(
                "A cross-platform, lightweight remote desktop application optimized for small \
                 binary size, low latency, privacy, and licensing support.",
            )
            .with_long_description(
                "GenXLink is engineered for performance and security. Written in Rust, it has a \
                 tiny footprint while delivering high-frame-rate screen sharing, low-latency \
                 control and robust NAT traversal.",
            )
            .with_features([
                "Screen Sharing (60fps)",
                "Secure P2P Encryption (End-to-End)",
                "Advanced NAT Traversal",
                "Multi-Platform (Win/Mac/Linux)",
                "File Transfer",
                "Unattended Access",
            ])
            .with_tags(["Remote Desktop", "Rust", "Security"])
            .with_image("images/genxlink_logo.png"),
        Product::new("NeuralCore", "2026")
            .with_description(
                "Next-generation local AI processing unit designed for edge devices. \
                 Bringing intelligence to the source.",
            )
            .with_long_description(
                "NeuralCore brings large language models directly to edge devices. Inference \
                 tuned for low-power hardware enables real-time AI without a cloud connection.",
            )
            .with_features([
                "On-Device AI Inference",
                "Ultra-Low Latency",
                "Privacy Centric (No Cloud)",
                "Energy Efficient",
                "Customizable Models",
            ])
            .with_tags(["AI", "Hardware", "Future"]),
    ]
}

/// (title, description)
pub const FEATURES: [(&str, &str); 5] = [
    (
        "Future-Ready Technology",
        "Built with the latest frameworks and AI-driven insights to ensure you stay ahead.",
    ),
    (
        "Privacy & Security Focused",
        "Your data is sacred. We implement top-tier encryption and privacy-first architectures.",
    ),
    (
        "User-Centric Design",
        "Interfaces that are intuitive, beautiful, and designed for human interaction.",
    ),
    (
        "High Performance",
        "Lightweight, fast, and optimized for smooth experiences across all devices.",
    ),
    (
        "Thoughtfully Engineered",
        "Every feature is crafted with purpose, eliminating clutter and maximizing value.",
    ),
];

pub const VISION: &str =
    "\u{201c}Our vision is to create a connected digital ecosystem that empowers everyday life.\u{201d}";

pub const STACK_HEADLINE: &str = "The Engine Room";
pub const STACK_BLURB: &str =
    "We build on bare metal using languages and frameworks designed for speed, safety, and scale.";

pub struct Tech {
    pub name: &'static str,
    pub description: &'static str,
    /// Accent color, sRGB
    pub color: [u8; 3],
}

pub const TECH_STACK: [Tech; 6] = [
    Tech {
        name: "Rust",
        description: "Core Logic & Security",
        color: [0xDE, 0xA5, 0x84],
    },
    Tech {
        name: "React",
        description: "UI & Interactions",
        color: [0x61, 0xDA, 0xFB],
    },
    Tech {
        name: "Electron",
        description: "Cross-Platform Desktop",
        color: [0x47, 0x84, 0x8F],
    },
    Tech {
        name: "TypeScript",
        description: "Type Safety",
        color: [0x31, 0x78, 0xC6],
    },
    Tech {
        name: "Node.js",
        description: "Backend Services",
        color: [0x33, 0x99, 0x33],
    },
    Tech {
        name: "WebAssembly",
        description: "High Performance",
        color: [0x65, 0x4F, 0xF0],
    },
];

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
}

pub const SERVICES: [Service; 3] = [
    Service {
        title: "Custom Engineering",
        description: "From low-level system drivers to high-scale web platforms, we build \
                      software that is robust, maintainable, and tailored to your needs.",
        tags: &["Rust", "C++", "System Design"],
    },
    Service {
        title: "Privacy Audits & Architecture",
        description: "We analyze your existing systems and redesign them with a local-first \
                      approach, ensuring compliance and user trust.",
        tags: &["Security", "Encryption", "Compliance"],
    },
    Service {
        title: "Performance Optimization",
        description: "Sluggish desktop app? We make web-based desktop apps run like native code.",
        tags: &["Electron", "WebAssembly", "Profiling"],
    },
];

pub struct Insight {
    pub title: &'static str,
    pub excerpt: &'static str,
    pub date: &'static str,
    pub category: &'static str,
}

pub const INSIGHTS: [Insight; 3] = [
    Insight {
        title: "Why We Chose Rust for GenXLink",
        excerpt: "Memory safety without garbage collection, and a 60% smaller memory footprint.",
        date: "Jan 10, 2026",
        category: "Engineering",
    },
    Insight {
        title: "The Future is Local-First",
        excerpt: "Cloud apps are convenient, but they own your data. The architecture of true \
                  data ownership.",
        date: "Dec 22, 2025",
        category: "Philosophy",
    },
    Insight {
        title: "Optimizing Electron for Low-End Devices",
        excerpt: "Techniques we used to make FamBudget fly on 4GB RAM laptops.",
        date: "Nov 15, 2025",
        category: "Performance",
    },
];

pub const FOUNDER: &str = "Lalu James";
pub const FOUNDER_ROLE: &str = "Founder & Lead Developer";
pub const CORE_TECHNOLOGIES: [&str; 6] =
    ["Rust", "Flutter", "Dart", "React", "TypeScript", "Electron"];

/// (title, body)
pub const VALUES: [(&str, &str); 3] = [
    (
        "Privacy First",
        "Our products are built with a local-first architecture so your data stays yours.",
    ),
    (
        "Performance Engineered",
        "Modern, low-level languages like Rust and optimized frameworks for fast experiences.",
    ),
    (
        "Innovation Driven",
        "From specialized hardware to everyday tools, we push what is possible on the edge.",
    ),
];

pub const CONTACT_HEADLINE: &str = "Let's Build the Impossible.";
pub const CONTACT_BLURB: &str = "Whether you need deep-tech solutions, secure applications, or \
     just want to discuss local-first software, we're all ears.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_products() {
        let products = products();
        let titles: Vec<&str> = products.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["FamBudget", "GenXLink", "NeuralCore"]);
        assert_eq!(products[0].screenshots.len(), 5);
        assert!(products[2].image.is_none());
    }

    #[test]
    fn test_nav_covers_every_section_once() {
        for (i, a) in NAV.iter().enumerate() {
            assert!(NAV[i + 1..].iter().all(|b| b != a));
        }
        for section in [Section::Features, Section::Vision, Section::Stack] {
            assert!(NAV.contains(&section));
        }
    }

    #[test]
    fn test_feature_vision_and_stack_copy() {
        assert_eq!(FEATURES.len(), 5);
        assert!(FEATURES.iter().all(|(title, body)| !title.is_empty() && !body.is_empty()));
        assert!(VISION.contains("connected digital ecosystem"));

        let names: Vec<&str> = TECH_STACK.iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            ["Rust", "React", "Electron", "TypeScript", "Node.js", "WebAssembly"]
        );
        assert!(TECH_STACK.iter().all(|t| !t.description.is_empty()));
    }
}
