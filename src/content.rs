use crate::Route;

#[derive(Clone, Copy, PartialEq)]
pub enum NavTarget {
    Anchor(&'static str),
    Page(Route),
}

pub struct NavItem {
    pub name: &'static str,
    pub target: NavTarget,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { name: "About Us", target: NavTarget::Anchor("#about") },
    NavItem { name: "Services", target: NavTarget::Anchor("#services") },
    NavItem { name: "Partners", target: NavTarget::Anchor("#partners") },
    NavItem { name: "Contact Us", target: NavTarget::Page(Route::Contact) },
];

pub const HERO_HEADLINE: &str = "Harnessing the power of technology.";
pub const HERO_TAGLINE: &str =
    "The strategic partner who will help you ask the tough questions – and find the right answers.";

pub const ABOUT_IMAGE: &str = "https://images.unsplash.com/photo-1551836022-d5d88e9218df?auto=format&fit=crop&q=80&w=800&h=900";
pub const ABOUT_IMAGE_ALT: &str =
    "African female IT professional smiling at camera with laptop in modern office";
pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "We are your strategic partner in navigating the complexities of technology to unlock your business's full potential. We ask the tough questions and deliver the right answers by leveraging deep expertise across strategy and transformation, applications and technology, engineering, and operations.",
    "Our focus is on driving measurable value in customer experience, intelligent industry, and enterprise management. We guide you in embracing transformative technologies like cloud, data, artificial intelligence, and cybersecurity—while also optimizing your environmental impact.",
];

pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Enterprise Resource Planning Systems",
        description: "Specialized implementation of financial management systems for large-scale enterprise control.",
        image_url: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?auto=format&fit=crop&q=80&w=800&h=600",
    },
    Service {
        title: "Data Integration & Analytics",
        description: "Transforming complex data silos into real-time decision-making dashboards and insights.",
        image_url: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?auto=format&fit=crop&q=80&w=800&h=600",
    },
    Service {
        title: "Modernization",
        description: "Updating legacy on-premises applications, infrastructure, and processes to leverage cloud-native technologies like microservices, serverless computing, and managed services.",
        image_url: "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?auto=format&fit=crop&q=80&w=800&h=600",
    },
    Service {
        title: "Workflow Automation",
        description: "Intelligent automation that eliminates manual tasks and accelerates business efficiency using message queues, Application Programming Interfaces (APIs), and orchestration platforms.",
        image_url: "https://images.unsplash.com/photo-1518432031352-d6fc5c10da5a?auto=format&fit=crop&q=80&w=800&h=600",
    },
];

pub struct Stat {
    pub percentage: u32,
    pub label: &'static str,
    pub color: &'static str,
    pub delay_ms: u32,
}

pub const STATS: &[Stat] = &[
    Stat {
        percentage: 50,
        label: "Of organizations will adopt industry-specific cloud platforms by 2029 to accelerate business initiatives",
        color: "#007BFF",
        delay_ms: 0,
    },
    Stat {
        percentage: 40,
        label: "Of leading companies will use hybrid computing architectures in mission-critical workflows by 2028",
        color: "#8B5CF6",
        delay_ms: 100,
    },
    Stat {
        percentage: 50,
        label: "Of cloud compute resources will support AI workloads by 2029",
        color: "#14B8A6",
        delay_ms: 200,
    },
    Stat {
        percentage: 27,
        label: "Reduction in cost per user when migrating from on-premises to AWS",
        color: "#F59E0B",
        delay_ms: 300,
    },
];

#[derive(Clone, PartialEq)]
pub struct Partner {
    pub name: &'static str,
    pub logo: &'static str,
}

pub const PARTNERS: &[Partner] = &[
    Partner { name: "AWS", logo: "https://upload.wikimedia.org/wikipedia/commons/9/93/Amazon_Web_Services_Logo.svg" },
    Partner { name: "Azure", logo: "https://upload.wikimedia.org/wikipedia/commons/a/a8/Microsoft_Azure_Logo.svg" },
    Partner { name: "Google Cloud", logo: "https://upload.wikimedia.org/wikipedia/commons/5/51/Google_Cloud_logo.svg" },
    Partner { name: "Microsoft", logo: "https://upload.wikimedia.org/wikipedia/commons/4/44/Microsoft_logo.svg" },
    Partner { name: "IBM", logo: "https://upload.wikimedia.org/wikipedia/commons/5/51/IBM_logo.svg" },
    Partner { name: "Oracle", logo: "https://upload.wikimedia.org/wikipedia/commons/5/50/Oracle_logo.svg" },
    Partner { name: "Salesforce", logo: "https://upload.wikimedia.org/wikipedia/commons/f/f9/Salesforce.com_logo.svg" },
    Partner { name: "SAP", logo: "https://upload.wikimedia.org/wikipedia/commons/5/59/SAP_2011_logo.svg" },
];

#[derive(Clone, PartialEq)]
pub struct VideoLeader {
    pub name: &'static str,
    pub company: &'static str,
    pub title: &'static str,
    /// Empty means use the configured default thumbnail.
    pub thumbnail: &'static str,
    pub video_url: &'static str,
}

pub const VIDEO_LEADERS: &[VideoLeader] = &[
    VideoLeader {
        name: "Sam Altman",
        company: "OpenAI",
        title: "Interview on AI & Policy",
        thumbnail: "",
        video_url: "https://www.youtube.com/results?search_query=sam+altman+interview",
    },
    VideoLeader {
        name: "Sundar Pichai",
        company: "Google",
        title: "Conversation on AI & Products",
        thumbnail: "",
        video_url: "https://www.youtube.com/results?search_query=sundar+pichai+interview",
    },
    VideoLeader {
        name: "Jensen Huang",
        company: "NVIDIA",
        title: "GTC / Tech Leadership Interview",
        thumbnail: "",
        video_url: "https://www.youtube.com/results?search_query=jensen+huang+interview",
    },
    VideoLeader {
        name: "Satya Nadella",
        company: "Microsoft",
        title: "On Cloud & AI (Interview)",
        thumbnail: "",
        video_url: "https://www.youtube.com/results?search_query=satya+nadella+interview",
    },
    VideoLeader {
        name: "Tim Cook",
        company: "Apple",
        title: "Interview on Product & Privacy",
        thumbnail: "",
        video_url: "https://www.youtube.com/results?search_query=tim+cook+interview",
    },
    VideoLeader {
        name: "Demis Hassabis",
        company: "DeepMind",
        title: "AI Research & Society (Interview)",
        thumbnail: "",
        video_url: "https://www.youtube.com/results?search_query=demis+hassabis+interview",
    },
];
