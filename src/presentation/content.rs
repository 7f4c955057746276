//! Static page copy. Everything the sections render that never changes
//! lives here as plain tables, so the components stay markup-only.

/// Card in the services grid.
pub struct ServiceCard {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 3],
    pub color: &'static str,
    pub delay_ms: u32,
}

pub static SERVICES: [ServiceCard; 6] = [
    ServiceCard {
        icon: "📊",
        title: "Portfolio Management",
        description: "AI-powered portfolio optimization with diversified investment strategies.",
        features: ["Risk Assessment", "Asset Allocation", "Auto-Rebalancing"],
        color: "from-blue-500 to-blue-600",
        delay_ms: 0,
    },
    ServiceCard {
        icon: "📈",
        title: "Market Analysis",
        description: "Advanced analytics and real-time insights to inform your decisions.",
        features: ["Real-time Data", "Technical Analysis", "Market Reports"],
        color: "from-emerald-500 to-emerald-600",
        delay_ms: 200,
    },
    ServiceCard {
        icon: "🛡️",
        title: "Risk Management",
        description: "Sophisticated risk management tools to protect your investments.",
        features: ["Hedging Strategies", "Stop-loss Orders", "Insurance Products"],
        color: "from-purple-500 to-purple-600",
        delay_ms: 400,
    },
    ServiceCard {
        icon: "📋",
        title: "Financial Planning",
        description: "Comprehensive planning for retirement and major life goals.",
        features: ["Retirement Planning", "Tax Optimization", "Estate Planning"],
        color: "from-amber-500 to-amber-600",
        delay_ms: 600,
    },
    ServiceCard {
        icon: "🎯",
        title: "Goal-Based Investing",
        description: "Customized strategies aligned with your specific objectives.",
        features: ["Goal Tracking", "Timeline Planning", "Progress Monitoring"],
        color: "from-red-500 to-red-600",
        delay_ms: 800,
    },
    ServiceCard {
        icon: "💰",
        title: "Wealth Management",
        description: "Holistic wealth management for high-net-worth individuals.",
        features: ["Private Banking", "Investment Advisory", "Concierge Services"],
        color: "from-indigo-500 to-indigo-600",
        delay_ms: 1000,
    },
];

/// Row of the asset allocation chart on the overview pane.
pub struct AllocationRow {
    pub name: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub color: &'static str,
    pub percentage: u32,
}

pub static ALLOCATIONS: [AllocationRow; 4] = [
    AllocationRow {
        name: "Growth Portfolio",
        value: "$124,580",
        change: "+12.4%",
        color: "bg-blue-500",
        percentage: 35,
    },
    AllocationRow {
        name: "Dividend Focus",
        value: "$89,240",
        change: "+8.7%",
        color: "bg-emerald-500",
        percentage: 25,
    },
    AllocationRow {
        name: "Tech Stocks",
        value: "$156,790",
        change: "+15.2%",
        color: "bg-purple-500",
        percentage: 30,
    },
    AllocationRow {
        name: "Bonds & Fixed",
        value: "$67,430",
        change: "+4.1%",
        color: "bg-amber-500",
        percentage: 10,
    },
];

/// Headline stat card on the overview pane.
pub struct StatCard {
    pub title: &'static str,
    pub value: &'static str,
    pub change: &'static str,
    pub color: &'static str,
    pub icon: &'static str,
}

pub static OVERVIEW_STATS: [StatCard; 4] = [
    StatCard {
        title: "Total Portfolio Value",
        value: "$437,040",
        change: "+$12,340 (2.9%)",
        color: "from-blue-500 to-blue-600",
        icon: "💵",
    },
    StatCard {
        title: "Today's Gain/Loss",
        value: "+$1,205",
        change: "+0.28%",
        color: "from-emerald-500 to-emerald-600",
        icon: "📈",
    },
    StatCard {
        title: "Total Return",
        value: "+14.7%",
        change: "Since inception",
        color: "from-purple-500 to-purple-600",
        icon: "📊",
    },
    StatCard {
        title: "Dividends (YTD)",
        value: "$8,420",
        change: "+15.2% vs last year",
        color: "from-amber-500 to-amber-600",
        icon: "🏆",
    },
];

/// Kind of entry in the recent activity list.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Buy,
    Sell,
    Dividend,
}

impl ActivityKind {
    /// Color of the circled initial in front of the row.
    pub fn badge_class(self) -> &'static str {
        match self {
            Self::Buy => "bg-emerald-500",
            Self::Sell => "bg-red-500",
            Self::Dividend => "bg-blue-500",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Buy => "Buy",
            Self::Sell => "Sell",
            Self::Dividend => "Dividend",
        }
    }

    /// First letter of the action, shown inside the badge.
    pub fn initial(self) -> &'static str {
        match self {
            Self::Buy => "B",
            Self::Sell => "S",
            Self::Dividend => "D",
        }
    }
}

/// Row of the recent activity list on the overview pane.
pub struct ActivityRow {
    pub kind: ActivityKind,
    pub symbol: &'static str,
    pub detail: &'static str,
    pub time: &'static str,
}

pub static RECENT_ACTIVITY: [ActivityRow; 4] = [
    ActivityRow {
        kind: ActivityKind::Buy,
        symbol: "AAPL",
        detail: "50 shares at $175.23",
        time: "2 hours ago",
    },
    ActivityRow {
        kind: ActivityKind::Sell,
        symbol: "GOOGL",
        detail: "25 shares at $2,845.67",
        time: "1 day ago",
    },
    ActivityRow {
        kind: ActivityKind::Dividend,
        symbol: "MSFT",
        detail: "$127.50",
        time: "2 days ago",
    },
    ActivityRow {
        kind: ActivityKind::Buy,
        symbol: "TSLA",
        detail: "10 shares at $238.45",
        time: "3 days ago",
    },
];

/// Customer quote card.
pub struct Testimonial {
    pub name: &'static str,
    pub role: &'static str,
    pub quote: &'static str,
    pub rating: u32,
    pub avatar: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Sarah Chen",
        role: "Portfolio Manager",
        quote: "The platform has transformed how we manage our clients' investments. The insights are invaluable.",
        rating: 5,
        avatar: "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?auto=compress&cs=tinysrgb&w=150",
    },
    Testimonial {
        name: "Michael Torres",
        role: "Financial Advisor",
        quote: "Outstanding analytics and user experience. Our clients love the transparency and real-time updates.",
        rating: 5,
        avatar: "https://images.pexels.com/photos/1222271/pexels-photo-1222271.jpeg?auto=compress&cs=tinysrgb&w=150",
    },
    Testimonial {
        name: "Jennifer Walsh",
        role: "Investment Analyst",
        quote: "Comprehensive tools that help us make better investment decisions. Highly recommended.",
        rating: 5,
        avatar: "https://images.pexels.com/photos/1239291/pexels-photo-1239291.jpeg?auto=compress&cs=tinysrgb&w=150",
    },
];

/// Top navigation links; hrefs are the lowercased labels.
pub static NAV_LINKS: [&str; 4] = ["Services", "Portfolio", "Markets", "About"];

/// Trust line under the hero call-to-action buttons.
pub struct HeroBadge {
    pub icon: &'static str,
    pub label: &'static str,
}

pub static HERO_TRUST: [HeroBadge; 3] = [
    HeroBadge {
        icon: "🛡️",
        label: "SEC Registered",
    },
    HeroBadge {
        icon: "🏆",
        label: "Award Winning",
    },
    HeroBadge {
        icon: "🔒",
        label: "Bank-Level Security",
    },
];

/// Assurance item in the closing call-to-action band.
pub struct TrustBadge {
    pub icon: &'static str,
    pub title: &'static str,
    pub detail: &'static str,
}

pub static CTA_BADGES: [TrustBadge; 3] = [
    TrustBadge {
        icon: "🛡️",
        title: "SEC Registered",
        detail: "Fully regulated and compliant",
    },
    TrustBadge {
        icon: "🏆",
        title: "50,000+ Clients",
        detail: "Trusted by investors worldwide",
    },
    TrustBadge {
        icon: "🔒",
        title: "Bank-Level Security",
        detail: "256-bit encryption protection",
    },
];

/// Link column in the footer.
pub struct FooterColumn {
    pub title: &'static str,
    pub links: [&'static str; 4],
}

pub static FOOTER_COLUMNS: [FooterColumn; 2] = [
    FooterColumn {
        title: "Services",
        links: [
            "Portfolio Management",
            "Financial Planning",
            "Wealth Management",
            "Risk Assessment",
        ],
    },
    FooterColumn {
        title: "Company",
        links: ["About Us", "Our Team", "Careers", "News"],
    },
];

/// Contact line in the footer.
pub struct ContactLine {
    pub icon: &'static str,
    pub text: &'static str,
}

pub static FOOTER_CONTACT: [ContactLine; 4] = [
    ContactLine {
        icon: "📞",
        text: "1-800-FINANCE",
    },
    ContactLine {
        icon: "✉️",
        text: "contact@financeflow.com",
    },
    ContactLine {
        icon: "📍",
        text: "123 Financial District",
    },
    ContactLine {
        icon: "📍",
        text: "New York, NY 10004",
    },
];

pub static LEGAL_LINKS: [&str; 3] = ["Privacy Policy", "Terms of Service", "Cookie Policy"];
