use super::*;

const KHALIFA_FUND: Contact = Contact {
    phone: "+971 2 617 1000",
    email: "info@khalifafund.ae",
    website: "https://www.khalifafund.ae",
};

const ADCCI: Contact = Contact {
    phone: "+971 2 617 7777",
    email: "members@adcci.gov.ae",
    website: "https://www.adcci.gov.ae",
};

const ADGM_ACADEMY: Contact = Contact {
    phone: "+971 2 333 8400",
    email: "academy@adgm.com",
    website: "https://www.adgmacademy.com",
};

impl Tab {
    /// Static dataset backing this tab.
    pub fn listings(&self) -> &'static [Listing] {
        match self {
            Self::Financial => FINANCIAL,
            Self::NonFinancial => NON_FINANCIAL,
            Self::Courses => COURSES,
            Self::Investment => INVESTMENT,
            Self::Communities => COMMUNITIES,
        }
    }
    pub fn find(&self, id: &str) -> Option<&'static Listing> {
        self.listings().iter().find(|l| l.id == id)
    }
}

static FINANCIAL: &[Listing] = &[
    Listing {
        id: "fin-business-loan",
        name: "Business Loan",
        provider: "Khalifa Fund",
        tab: Tab::Financial,
        category: "Loans",
        industry: "All Industries",
        description: "Term financing for established Emirati-owned SMEs expanding operations, equipment, or premises.",
        rating: 4.7,
        cost: "Up to AED 3,000,000 at subsidised rates",
        pricing: Pricing::Subsidised,
        processing: "4-6 weeks",
        features: &["Grace period up to 12 months", "Repayment over 7 years"],
        requirements: &["Valid trade licence", "Two years of audited financials", "Business plan"],
        benefits: &["Below-market profit rate", "Dedicated relationship manager"],
        contact: KHALIFA_FUND,
        new: false,
    },
    Listing {
        id: "fin-startup-loan",
        name: "Start-up Loan",
        provider: "Khalifa Fund",
        tab: Tab::Financial,
        category: "Loans",
        industry: "All Industries",
        description: "Seed financing for first-time founders launching a project in Abu Dhabi.",
        rating: 4.5,
        cost: "Up to AED 500,000, interest free",
        pricing: Pricing::Free,
        processing: "3-4 weeks",
        features: &["No collateral for eligible founders", "Mentoring during the first year"],
        requirements: &["UAE national", "Completed entrepreneurship programme", "Feasibility study"],
        benefits: &["Zero profit rate", "Access to incubation space"],
        contact: KHALIFA_FUND,
        new: true,
    },
    Listing {
        id: "fin-working-capital",
        name: "Working Capital Facility",
        provider: "Khalifa Fund",
        tab: Tab::Financial,
        category: "Credit Lines",
        industry: "Trading",
        description: "Revolving credit to bridge receivables and inventory cycles.",
        rating: 4.2,
        cost: "Up to AED 1,000,000",
        pricing: Pricing::Subsidised,
        processing: "2-3 weeks",
        features: &["Revolving limit reviewed annually"],
        requirements: &["Operating for 12 months", "Bank statements for 6 months"],
        benefits: &["Draw only what you need"],
        contact: KHALIFA_FUND,
        new: true,
    },
    Listing {
        id: "fin-agri-loan",
        name: "Agriculture Development Loan",
        provider: "Khalifa Fund",
        tab: Tab::Financial,
        category: "Loans",
        industry: "Agriculture",
        description: "Financing for farm modernisation, greenhouses, and agri-tech equipment.",
        rating: 4.4,
        cost: "Up to AED 2,000,000",
        pricing: Pricing::Subsidised,
        processing: "6-8 weeks",
        features: &["Seasonal repayment schedule"],
        requirements: &["Farm ownership or lease", "Technical feasibility report"],
        benefits: &["Technical support from partner agencies"],
        contact: KHALIFA_FUND,
        new: false,
    },
    Listing {
        id: "fin-trade-guarantee",
        name: "Trade Finance Guarantee",
        provider: "Abu Dhabi Chamber",
        tab: Tab::Financial,
        category: "Guarantees",
        industry: "Trading",
        description: "Bank guarantees and letters of credit backing for exporting SMEs.",
        rating: 3.9,
        cost: "1.5% of guaranteed amount",
        pricing: Pricing::Paid,
        processing: "1-2 weeks",
        features: &["Covers up to 80% of exposure"],
        requirements: &["Export contract", "Chamber membership"],
        benefits: &["Access to new markets"],
        contact: ADCCI,
        new: false,
    },
];

static NON_FINANCIAL: &[Listing] = &[
    Listing {
        id: "nf-business-advisory",
        name: "Business Advisory",
        provider: "Khalifa Fund",
        tab: Tab::NonFinancial,
        category: "Advisory",
        industry: "All Industries",
        description: "One-to-one sessions with business advisors on strategy, operations, and growth.",
        rating: 4.6,
        cost: "Free for members",
        pricing: Pricing::Free,
        processing: "Within 5 working days",
        features: &["Quarterly review", "Action plan"],
        requirements: &["Registered portal account"],
        benefits: &["Tailored guidance"],
        contact: KHALIFA_FUND,
        new: false,
    },
    Listing {
        id: "nf-licensing-support",
        name: "Licensing Support",
        provider: "Abu Dhabi Chamber",
        tab: Tab::NonFinancial,
        category: "Registration",
        industry: "All Industries",
        description: "Assisted trade-licence applications, renewals, and activity amendments.",
        rating: 4.1,
        cost: "AED 500 per application",
        pricing: Pricing::Paid,
        processing: "3 working days",
        features: &["Document checklist", "Status tracking"],
        requirements: &["Emirates ID", "Tenancy contract"],
        benefits: &["Fewer rejected applications"],
        contact: ADCCI,
        new: false,
    },
    Listing {
        id: "nf-market-access",
        name: "Market Access Programme",
        provider: "Khalifa Fund",
        tab: Tab::NonFinancial,
        category: "Market Access",
        industry: "Retail",
        description: "Placement of SME products in partner retail chains and government procurement.",
        rating: 4.3,
        cost: "Subsidised listing fees",
        pricing: Pricing::Subsidised,
        processing: "4 weeks",
        features: &["Retail shelf placement", "Procurement readiness review"],
        requirements: &["Product quality certification"],
        benefits: &["New sales channels"],
        contact: KHALIFA_FUND,
        new: true,
    },
    Listing {
        id: "nf-digital-presence",
        name: "Digital Presence Package",
        provider: "Khalifa Fund",
        tab: Tab::NonFinancial,
        category: "Advisory",
        industry: "Technology",
        description: "Website, e-commerce storefront, and social media setup for small businesses.",
        rating: 4.0,
        cost: "AED 2,500",
        pricing: Pricing::Subsidised,
        processing: "2 weeks",
        features: &["Template storefront", "Payment gateway onboarding"],
        requirements: &["Active trade licence"],
        benefits: &["Online sales from day one"],
        contact: KHALIFA_FUND,
        new: true,
    },
];

static COURSES: &[Listing] = &[
    Listing {
        id: "crs-entrepreneurship-101",
        name: "Entrepreneurship Fundamentals",
        provider: "Khalifa Fund Academy",
        tab: Tab::Courses,
        category: "Entrepreneurship",
        industry: "All Industries",
        description: "Six-week programme covering idea validation, business models, and pitching.",
        rating: 4.8,
        cost: "Free",
        pricing: Pricing::Free,
        processing: "Cohorts start monthly",
        features: &["Weekly workshops", "Pitch day"],
        requirements: &["UAE national aged 18+"],
        benefits: &["Eligibility for start-up loan"],
        contact: KHALIFA_FUND,
        new: false,
    },
    Listing {
        id: "crs-financial-literacy",
        name: "Financial Management for SMEs",
        provider: "ADGM Academy",
        tab: Tab::Courses,
        category: "Finance",
        industry: "All Industries",
        description: "Budgeting, cash-flow forecasting, and reading financial statements.",
        rating: 4.4,
        cost: "AED 1,200",
        pricing: Pricing::Paid,
        processing: "Self-paced",
        features: &["Online modules", "Certificate"],
        requirements: &[],
        benefits: &["Better loan applications"],
        contact: ADGM_ACADEMY,
        new: true,
    },
    Listing {
        id: "crs-export-readiness",
        name: "Export Readiness",
        provider: "Abu Dhabi Chamber",
        tab: Tab::Courses,
        category: "Trade",
        industry: "Trading",
        description: "Customs, logistics, and compliance for first-time exporters.",
        rating: 4.1,
        cost: "AED 600",
        pricing: Pricing::Subsidised,
        processing: "Two-day workshop",
        features: &["Case studies", "Customs broker Q&A"],
        requirements: &["Chamber membership"],
        benefits: &["Export checklist"],
        contact: ADCCI,
        new: false,
    },
    Listing {
        id: "crs-digital-marketing",
        name: "Digital Marketing Essentials",
        provider: "Khalifa Fund Academy",
        tab: Tab::Courses,
        category: "Marketing",
        industry: "Retail",
        description: "Social media, search advertising, and analytics for small brands.",
        rating: 4.6,
        cost: "Free",
        pricing: Pricing::Free,
        processing: "Four evening sessions",
        features: &["Hands-on campaigns"],
        requirements: &[],
        benefits: &["Campaign templates"],
        contact: KHALIFA_FUND,
        new: true,
    },
];

static INVESTMENT: &[Listing] = &[
    Listing {
        id: "inv-equity-coinvest",
        name: "Equity Co-Investment",
        provider: "Khalifa Fund",
        tab: Tab::Investment,
        category: "Equity",
        industry: "Technology",
        description: "Minority equity alongside accredited investors for high-growth ventures.",
        rating: 4.5,
        cost: "Equity stake negotiated per deal",
        pricing: Pricing::Paid,
        processing: "8-12 weeks",
        features: &["Board observer seat", "Follow-on rights"],
        requirements: &["Lead investor term sheet", "Audited accounts"],
        benefits: &["Institutional backing"],
        contact: KHALIFA_FUND,
        new: true,
    },
    Listing {
        id: "inv-angel-network",
        name: "Angel Investor Matching",
        provider: "Abu Dhabi Chamber",
        tab: Tab::Investment,
        category: "Networks",
        industry: "All Industries",
        description: "Curated introductions to the regional angel investor network.",
        rating: 4.0,
        cost: "Free",
        pricing: Pricing::Free,
        processing: "Quarterly pitch events",
        features: &["Pitch deck review"],
        requirements: &["Minimum viable product"],
        benefits: &["Warm introductions"],
        contact: ADCCI,
        new: false,
    },
    Listing {
        id: "inv-industrial-fund",
        name: "Industrial Growth Fund",
        provider: "Khalifa Fund",
        tab: Tab::Investment,
        category: "Equity",
        industry: "Manufacturing",
        description: "Growth capital for manufacturers localising production in Abu Dhabi.",
        rating: 4.3,
        cost: "Hybrid debt-equity",
        pricing: Pricing::Subsidised,
        processing: "10 weeks",
        features: &["Capex and working capital"],
        requirements: &["Industrial licence", "In-country value certificate"],
        benefits: &["Offtake support"],
        contact: KHALIFA_FUND,
        new: false,
    },
];

static COMMUNITIES: &[Listing] = &[
    Listing {
        id: "com-women-entrepreneurs",
        name: "Women Entrepreneurs Circle",
        provider: "Khalifa Fund",
        tab: Tab::Communities,
        category: "Networks",
        industry: "All Industries",
        description: "Monthly meetups, mentoring, and peer support for women-led businesses.",
        rating: 4.9,
        cost: "Free",
        pricing: Pricing::Free,
        processing: "Open membership",
        features: &["Mentor matching", "Monthly meetups"],
        requirements: &[],
        benefits: &["Peer network"],
        contact: KHALIFA_FUND,
        new: false,
    },
    Listing {
        id: "com-agritech-forum",
        name: "Agri-Tech Forum",
        provider: "Khalifa Fund",
        tab: Tab::Communities,
        category: "Sector Groups",
        industry: "Agriculture",
        description: "Practitioner community for vertical farming, hydroponics, and food security ventures.",
        rating: 4.2,
        cost: "Free",
        pricing: Pricing::Free,
        processing: "Open membership",
        features: &["Site visits", "Supplier directory"],
        requirements: &[],
        benefits: &["Shared procurement"],
        contact: KHALIFA_FUND,
        new: true,
    },
    Listing {
        id: "com-founders-club",
        name: "Founders Club",
        provider: "Abu Dhabi Chamber",
        tab: Tab::Communities,
        category: "Networks",
        industry: "All Industries",
        description: "Invitation-only roundtables for founders scaling beyond 50 employees.",
        rating: 4.4,
        cost: "AED 3,000 annual membership",
        pricing: Pricing::Paid,
        processing: "Application reviewed monthly",
        features: &["Roundtables", "Executive coaching"],
        requirements: &["50+ employees"],
        benefits: &["Senior peer network"],
        contact: ADCCI,
        new: false,
    },
];
