//! Demo seed data for the dashboard list views, used by the demo binary
//! and the integration tests.

use crate::entity::{
    Campaign, CampaignStatus, Contract, ContractStatus, Creator, Payment, PaymentStatus, User,
    UserRole, UserStatus,
};
use crate::store::RecordStore;

const SAMPLE_PDF: &str =
    "https://www.w3.org/WAI/ER/tests/xhtml/testfiles/resources/pdf/dummy.pdf";

/// Campaign table of the brand dashboard.
pub fn campaigns() -> RecordStore<Campaign> {
    RecordStore::seed(vec![
        Campaign::seeded(
            "1",
            "Summer Fashion Collection",
            CampaignStatus::Active,
            "2024-06-01",
            "2024-08-31",
            50_000.0,
            32_000.0,
            12,
            4.2,
        )
        .expect("valid fixture"),
        Campaign::seeded(
            "2",
            "Tech Product Launch",
            CampaignStatus::Completed,
            "2024-03-15",
            "2024-05-15",
            75_000.0,
            73_500.0,
            8,
            3.8,
        )
        .expect("valid fixture"),
        Campaign::seeded(
            "3",
            "Holiday Special",
            CampaignStatus::Draft,
            "2024-12-01",
            "2024-12-31",
            100_000.0,
            0.0,
            0,
            0.0,
        )
        .expect("valid fixture"),
        Campaign::seeded(
            "4",
            "Fitness App Promotion",
            CampaignStatus::Paused,
            "2024-04-01",
            "2024-06-30",
            40_000.0,
            15_000.0,
            5,
            2.9,
        )
        .expect("valid fixture"),
    ])
    .expect("unique fixture ids")
}

/// Contract table shared by the brand and creator views.
pub fn contracts() -> RecordStore<Contract> {
    RecordStore::seed(vec![
        Contract::seeded(
            "1",
            "Sarah Johnson",
            "Summer Fashion Collection 2024",
            ContractStatus::Pending,
            "2024-01-15",
        )
        .expect("valid fixture")
        .with_pdf_url(SAMPLE_PDF),
        Contract::seeded(
            "2",
            "Mike Chen",
            "Tech Product Launch",
            ContractStatus::Signed,
            "2024-01-10",
        )
        .expect("valid fixture")
        .with_pdf_url(SAMPLE_PDF),
        Contract::seeded(
            "3",
            "Emma Rodriguez",
            "Fitness App Promotion",
            ContractStatus::Pending,
            "2024-01-08",
        )
        .expect("valid fixture")
        .with_pdf_url(SAMPLE_PDF),
        Contract::seeded(
            "4",
            "Alex Thompson",
            "Travel Gear Campaign",
            ContractStatus::Rejected,
            "2024-01-05",
        )
        .expect("valid fixture")
        .with_pdf_url(SAMPLE_PDF),
    ])
    .expect("unique fixture ids")
}

/// Payment table covering both payout and invoice rows.
pub fn payments() -> RecordStore<Payment> {
    RecordStore::seed(vec![
        Payment::seeded(
            "1",
            "Summer Fashion Collection 2024",
            Some("Sarah Johnson"),
            None,
            5_000.0,
            PaymentStatus::Paid,
            "2024-02-15",
            "2024-01-15",
        )
        .expect("valid fixture"),
        Payment::seeded(
            "2",
            "Tech Product Launch",
            None,
            Some("TechCorp Inc."),
            12_000.0,
            PaymentStatus::Pending,
            "2024-02-20",
            "2024-01-20",
        )
        .expect("valid fixture")
        .with_link("https://rzp.io/i/sample-link"),
        Payment::seeded(
            "3",
            "Fitness App Promotion",
            Some("Mike Chen"),
            None,
            3_500.0,
            PaymentStatus::Processing,
            "2024-02-10",
            "2024-01-10",
        )
        .expect("valid fixture"),
        Payment::seeded(
            "4",
            "Travel Gear Campaign",
            Some("Emma Rodriguez"),
            None,
            7_500.0,
            PaymentStatus::Failed,
            "2024-02-05",
            "2024-01-05",
        )
        .expect("valid fixture"),
    ])
    .expect("unique fixture ids")
}

/// Platform accounts listed in the admin panel.
pub fn users() -> RecordStore<User> {
    RecordStore::seed(vec![
        User::seeded(
            "1",
            "Sarah Johnson",
            "sarah@example.com",
            UserRole::Creator,
            UserStatus::Active,
            "2024-01-15",
            "2024-01-30",
        )
        .expect("valid fixture"),
        User::seeded(
            "2",
            "TechCorp Marketing",
            "marketing@techcorp.com",
            UserRole::Brand,
            UserStatus::Active,
            "2024-01-10",
            "2024-01-29",
        )
        .expect("valid fixture"),
        User::seeded(
            "3",
            "Alex Chen",
            "alex@example.com",
            UserRole::Creator,
            UserStatus::Suspended,
            "2024-01-20",
            "2024-01-25",
        )
        .expect("valid fixture"),
        User::seeded(
            "4",
            "Digital Agency Pro",
            "info@digitalagency.com",
            UserRole::Agency,
            UserStatus::Active,
            "2024-01-05",
            "2024-01-30",
        )
        .expect("valid fixture"),
    ])
    .expect("unique fixture ids")
}

/// Creator profiles on the discovery grid.
pub fn creators() -> RecordStore<Creator> {
    RecordStore::seed(vec![
        Creator {
            id: "1".into(),
            name: "Alex Chen".into(),
            username: "@alexcreates".into(),
            bio: "Tech reviewer & lifestyle content creator. Passionate about emerging \
                  technologies and sustainable living."
                .into(),
            followers: 125_000,
            engagement: 4.2,
            platform: "YouTube".into(),
            category: "Technology".into(),
            language: "English".into(),
            average_views: 85_000,
            posts: 156,
            verified: true,
        },
        Creator {
            id: "2".into(),
            name: "Maria Rodriguez".into(),
            username: "@mariafashion".into(),
            bio: "Fashion influencer sharing style tips and sustainable fashion choices.".into(),
            followers: 89_000,
            engagement: 5.1,
            platform: "Instagram".into(),
            category: "Fashion".into(),
            language: "Spanish".into(),
            average_views: 45_000,
            posts: 234,
            verified: true,
        },
        Creator {
            id: "3".into(),
            name: "James Wilson".into(),
            username: "@jamesfitness".into(),
            bio: "Fitness coach helping people achieve their health goals through \
                  sustainable workouts."
                .into(),
            followers: 67_000,
            engagement: 3.8,
            platform: "TikTok".into(),
            category: "Fitness".into(),
            language: "English".into(),
            average_views: 125_000,
            posts: 89,
            verified: false,
        },
    ])
    .expect("unique fixture ids")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_sizes() {
        assert_eq!(campaigns().len(), 4);
        assert_eq!(contracts().len(), 4);
        assert_eq!(payments().len(), 4);
        assert_eq!(users().len(), 4);
        assert_eq!(creators().len(), 3);
    }

    #[test]
    fn test_campaign_budget_total() {
        let summary = campaigns().summarize(&["budget", "spent"]);
        assert_eq!(summary.sum("budget"), 265_000.0);
        assert_eq!(summary.sum("spent"), 120_500.0);
    }
}
