//! Guarded dashboard sections over static firm data.
use actix_web::HttpResponse;
use actix_web::Responder;
use kf_auth::Member;
use kf_auth::UserInfo;
use serde::Serialize;

/// Every section carries the signed-in user alongside its data.
#[derive(Serialize)]
struct Section<'a, T: Serialize> {
    user: &'a UserInfo,
    data: T,
}

fn section<T: Serialize>(member: &Member, data: T) -> HttpResponse {
    HttpResponse::Ok().json(Section {
        user: member.user(),
        data,
    })
}

#[derive(Debug, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub value: &'static str,
    pub change: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Activity {
    pub title: &'static str,
    pub date: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Overview {
    pub stats: &'static [Stat],
    pub activity: &'static [Activity],
}

#[derive(Debug, Serialize)]
pub struct Document {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: &'static str,
    pub status: &'static str,
    pub uploaded: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Firm {
    pub name: &'static str,
    pub licence: &'static str,
    pub sector: &'static str,
    pub emirate: &'static str,
    pub employees: u32,
    pub founded: u16,
}

#[derive(Debug, Serialize)]
pub struct Insight {
    pub title: &'static str,
    pub value: &'static str,
    pub trend: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Teammate {
    pub name: &'static str,
    pub email: &'static str,
    pub role: &'static str,
    pub active: bool,
}

static OVERVIEW: Overview = Overview {
    stats: &[
        Stat { label: "Active applications", value: "3", change: "+1" },
        Stat { label: "Approved funding", value: "AED 750,000", change: "+AED 250,000" },
        Stat { label: "Documents pending", value: "2", change: "-1" },
        Stat { label: "Profile completeness", value: "85%", change: "+10%" },
    ],
    activity: &[
        Activity { title: "Business Loan application submitted", date: "2024-05-12", status: "in-review" },
        Activity { title: "Trade licence uploaded", date: "2024-05-10", status: "verified" },
        Activity { title: "Advisory session booked", date: "2024-05-06", status: "scheduled" },
    ],
};

static DOCUMENTS: &[Document] = &[
    Document { id: "doc-001", name: "Trade Licence.pdf", kind: "licence", status: "verified", uploaded: "2024-05-10" },
    Document { id: "doc-002", name: "Audited Financials 2023.pdf", kind: "financials", status: "pending", uploaded: "2024-05-08" },
    Document { id: "doc-003", name: "Business Plan.docx", kind: "plan", status: "pending", uploaded: "2024-05-02" },
    Document { id: "doc-004", name: "Emirates ID.pdf", kind: "identity", status: "verified", uploaded: "2024-04-28" },
];

static FIRM: Firm = Firm {
    name: "Al Mansoori Trading LLC",
    licence: "CN-1234567",
    sector: "Trading",
    emirate: "Abu Dhabi",
    employees: 24,
    founded: 2018,
};

static INSIGHTS: &[Insight] = &[
    Insight { title: "Revenue growth (YoY)", value: "18%", trend: "up" },
    Insight { title: "Cash runway", value: "14 months", trend: "flat" },
    Insight { title: "Sector benchmark", value: "Top 30%", trend: "up" },
];

static TEAM: &[Teammate] = &[
    Teammate { name: "Ahmed Al Mansoori", email: "ahmed@almansoori.ae", role: "owner", active: true },
    Teammate { name: "Sarah Johnson", email: "sarah@almansoori.ae", role: "finance", active: true },
    Teammate { name: "Omar Haddad", email: "omar@almansoori.ae", role: "viewer", active: false },
];

pub async fn overview(member: Member) -> impl Responder {
    section(&member, &OVERVIEW)
}

pub async fn documents(member: Member) -> impl Responder {
    section(&member, DOCUMENTS)
}

pub async fn profile(member: Member) -> impl Responder {
    section(&member, &FIRM)
}

pub async fn insights(member: Member) -> impl Responder {
    section(&member, INSIGHTS)
}

pub async fn users(member: Member) -> impl Responder {
    section(&member, TEAM)
}
