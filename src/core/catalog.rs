//! Static institutional content
//!
//! Every list here is built fresh on each call and never mutated afterwards.
//! Selector lists (departments, news and service categories) start with the `"all"` entry.

use crate::core::filter::ALL_CATEGORIES;
use crate::core::models::{
    Contact, ContactKind, Course, Department, MenuAction, MenuItem, NewsArticle, NewsCategory,
    QuickAction, Route, Service, ServiceCategory,
};

/// Institution display name
pub const INSTITUTION_NAME: &str = "Kisii Polytechnic";

/// Security desk number offered from the emergency contacts notice
pub const SECURITY_PHONE_URL: &str = "tel:+254700111222";

/// Text of the "About Institution" notice
pub const ABOUT_TEXT: &str = "Kisii Polytechnic is a leading technical institution in Kenya, committed to providing quality technical and vocational education. Established with the mission to develop skilled professionals for industry and entrepreneurship.\n\nOur Vision: To be a center of excellence in technical education and training.\n\nOur Mission: To provide quality technical education and training that meets industry standards and promotes innovation.";

/// Text of the "Emergency Contacts" notice
pub const EMERGENCY_TEXT: &str = "Security: +254 700 111 222\nMedical: +254 700 333 444\nFire Emergency: 999\nPolice: 911\n\nCampus Security is available 24/7";

/// Department selector entries
#[must_use]
pub fn departments() -> Vec<Department> {
    vec![
        Department::new(ALL_CATEGORIES, "All"),
        Department::new("engineering", "Engineering"),
        Department::new("ict", "ICT"),
        Department::new("business", "Business"),
        Department::new("hospitality", "Hospitality"),
    ]
}

/// Courses shown on the academics screen
#[must_use]
pub fn courses() -> Vec<Course> {
    vec![
        Course::new("1", "Diploma in Computer Science", "ict")
            .with_award("3 Years", "Diploma")
            .with_description(
                "Comprehensive program covering programming, databases, and software development.",
            ),
        Course::new("2", "Certificate in Electrical Engineering", "engineering")
            .with_award("2 Years", "Certificate")
            .with_description(
                "Practical training in electrical systems, wiring, and power distribution.",
            ),
        Course::new("3", "Diploma in Business Management", "business")
            .with_award("3 Years", "Diploma")
            .with_description(
                "Business fundamentals, management principles, and entrepreneurship skills.",
            ),
        Course::new("4", "Certificate in Food & Beverage", "hospitality")
            .with_award("1 Year", "Certificate")
            .with_description("Professional training in food service and beverage management."),
        Course::new("5", "Diploma in Mechanical Engineering", "engineering")
            .with_award("3 Years", "Diploma")
            .with_description(
                "Mechanical systems, manufacturing processes, and industrial maintenance.",
            ),
        Course::new("6", "Certificate in Web Development", "ict")
            .with_award("1 Year", "Certificate")
            .with_description(
                "Modern web technologies, responsive design, and full-stack development.",
            ),
    ]
}

/// News category selector entries
#[must_use]
pub fn news_categories() -> Vec<NewsCategory> {
    vec![
        NewsCategory::new(ALL_CATEGORIES, "All"),
        NewsCategory::new("academic", "Academic"),
        NewsCategory::new("events", "Events"),
        NewsCategory::new("admissions", "Admissions"),
        NewsCategory::new("sports", "Sports"),
    ]
}

/// Display name for a news category id, `"News"` when unknown
#[must_use]
pub fn news_category_name(id: &str) -> String {
    news_categories()
        .into_iter()
        .find(|category| category.id == id)
        .map_or_else(|| "News".to_string(), |category| category.name)
}

#[allow(clippy::too_many_arguments)]
fn article(
    id: &str,
    title: &str,
    summary: &str,
    content: &str,
    date: &str,
    category: &str,
    author: &str,
    read_time: &str,
) -> NewsArticle {
    NewsArticle {
        id: id.to_string(),
        title: title.to_string(),
        summary: summary.to_string(),
        content: content.to_string(),
        date: date.to_string(),
        category: category.to_string(),
        author: author.to_string(),
        read_time: read_time.to_string(),
    }
}

/// News articles, newest first
#[must_use]
pub fn news() -> Vec<NewsArticle> {
    vec![
        article(
            "1",
            "New Academic Year 2024 Registration Now Open",
            "Applications for the new academic year are now open. Early registration recommended.",
            "The institution is pleased to announce that registration for the 2024 academic year is now open...",
            "2024-01-15",
            "admissions",
            "Admissions Office",
            "3 min read",
        ),
        article(
            "2",
            "Annual Technical Skills Competition 2024",
            "Students showcase their technical prowess in the annual competition.",
            "The annual technical skills competition brings together students from all departments...",
            "2024-01-12",
            "events",
            "Events Committee",
            "5 min read",
        ),
        article(
            "3",
            "New Engineering Workshop Facility Opens",
            "State-of-the-art workshop facility enhances practical learning experience.",
            "The new engineering workshop facility is equipped with modern machinery and tools...",
            "2024-01-10",
            "academic",
            "Engineering Department",
            "4 min read",
        ),
        article(
            "4",
            "Inter-College Football Championship",
            "Our team advances to the finals of the regional championship.",
            "The Kisii Polytechnic football team has made it to the finals...",
            "2024-01-08",
            "sports",
            "Sports Department",
            "2 min read",
        ),
        article(
            "5",
            "Digital Library System Launch",
            "New digital library system provides 24/7 access to academic resources.",
            "Students can now access thousands of books and journals online...",
            "2024-01-05",
            "academic",
            "Library Services",
            "3 min read",
        ),
    ]
}

/// Headlines featured on the home screen
#[must_use]
pub fn latest_news(limit: usize) -> Vec<NewsArticle> {
    news().into_iter().take(limit).collect()
}

/// Notices pinned under the news list
#[must_use]
pub fn announcements() -> Vec<&'static str> {
    vec![
        "Please note the updated academic calendar for the current semester. Check your student portal for detailed information.",
        "Reminder: Fee payment deadline is approaching. Ensure all payments are completed to avoid late fees.",
    ]
}

fn service(
    id: &str,
    title: &str,
    description: &str,
    category: &str,
    requires_auth: bool,
    notice: (&str, &str),
) -> Service {
    Service {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        requires_auth,
        notice_title: notice.0.to_string(),
        notice_message: notice.1.to_string(),
    }
}

/// Service category selector entries
#[must_use]
pub fn service_categories() -> Vec<ServiceCategory> {
    vec![
        ServiceCategory::new(ALL_CATEGORIES, "All"),
        ServiceCategory::new("academic", "Academic"),
        ServiceCategory::new("finance", "Finance"),
        ServiceCategory::new("library", "Library"),
        ServiceCategory::new("identity", "Identity"),
    ]
}

/// Student-portal services
#[must_use]
pub fn services() -> Vec<Service> {
    vec![
        service(
            "1",
            "Check Results",
            "View your academic results and transcripts",
            "academic",
            true,
            ("Results", "Your results will be displayed here"),
        ),
        service(
            "2",
            "Fee Payment",
            "Pay school fees and view payment history",
            "finance",
            true,
            ("Fee Payment", "Payment gateway will open here"),
        ),
        service(
            "3",
            "Course Registration",
            "Register for courses and view timetable",
            "academic",
            true,
            ("Course Registration", "Course registration form will open here"),
        ),
        service(
            "4",
            "Library Services",
            "Access digital library and book reservations",
            "library",
            false,
            ("Library", "Library services will open here"),
        ),
        service(
            "5",
            "Student ID Card",
            "Digital student ID and verification",
            "identity",
            true,
            ("Student ID", "Digital student ID will be displayed here"),
        ),
        service(
            "6",
            "Academic Calendar",
            "View important dates and events",
            "academic",
            false,
            ("Calendar", "Academic calendar will be displayed here"),
        ),
    ]
}

/// Home-screen shortcuts
#[must_use]
pub fn quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction::new("1", "Student Portal", Route::Student),
        QuickAction::new("2", "Academics", Route::Academics),
        QuickAction::new("3", "Fee Payment", Route::Student),
        QuickAction::new("4", "Results", Route::Student),
        QuickAction::new("5", "Library", Route::Academics),
        QuickAction::new("6", "Contact", Route::More),
    ]
}

/// Contact channels on the "More" screen
#[must_use]
pub fn contacts() -> Vec<Contact> {
    vec![
        Contact::new(ContactKind::Phone, "+254 700 123 456", "tel:+254700123456"),
        Contact::new(
            ContactKind::Email,
            "info@kisiipoly.ac.ke",
            "mailto:info@kisiipoly.ac.ke",
        ),
        Contact::new(
            ContactKind::Website,
            "www.kisiipoly.ac.ke",
            "https://www.kisiipoly.ac.ke",
        ),
        Contact::new(
            ContactKind::Location,
            "Kisii, Kenya",
            "https://maps.google.com/?q=Kisii+Polytechnic",
        ),
    ]
}

/// Entries of the "More" menu
#[must_use]
pub fn menu_items() -> Vec<MenuItem> {
    let notice = |text: &str| MenuAction::Notice(text.to_string());
    vec![
        MenuItem::new("1", "About Institution", MenuAction::About),
        MenuItem::new(
            "2",
            "Campus Map",
            notice("Interactive campus map will be displayed here"),
        ),
        MenuItem::new(
            "3",
            "E-Learning Portal",
            MenuAction::OpenUrl("https://elearning.kisiipoly.ac.ke".to_string()),
        ),
        MenuItem::new(
            "4",
            "Library Catalog",
            notice("Library catalog will be displayed here"),
        ),
        MenuItem::new(
            "5",
            "Career Services",
            notice("Career guidance and job placement services"),
        ),
        MenuItem::new("6", "Alumni Network", notice("Connect with our alumni network")),
        MenuItem::new("7", "Emergency Contacts", MenuAction::EmergencyContacts),
        MenuItem::new("8", "Feedback", notice("Send your feedback and suggestions")),
    ]
}
