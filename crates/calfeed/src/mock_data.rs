use anyhow::Result;
use chrono::{DateTime, Duration, DurationRound, Utc};

use calfeed_core::calendar::{Company, Event};

use crate::state::AppState;

/// Company seeded by `--seed-demo`.
pub const DEMO_COMPANY_ID: &str = "acme";

/// Generates mock events for demonstration purposes.
/// Events are spread across the week starting at `week_start`.
pub fn generate_mock_events(company_id: &str, week_start: DateTime<Utc>) -> Vec<Event> {
    let at = |day: i64, hour: i64| week_start + Duration::days(day) + Duration::hours(hour);

    vec![
        Event::new(company_id, "Weekly All-Hands", at(0, 9), at(0, 10))
            .with_description("Updates from every team.\nQuestions welcome.")
            .with_location("Main Hall"),
        Event::new(company_id, "Product Demo; Q3 Roadmap", at(1, 14), at(1, 15))
            .with_description("Slides: C:\\shared\\demo.pdf, notes to follow")
            .with_location("Room 4, Building B"),
        Event::new(company_id, "Customer Workshop", at(2, 13), at(2, 17))
            .with_description("Hands-on session for partners")
            .with_location("Training Center"),
        Event::new(company_id, "Board Meeting", at(3, 10), at(3, 12))
            .with_description("Confidential agenda")
            .with_location("Executive Suite")
            .private(),
        Event::new(company_id, "Salary Reviews", at(4, 9), at(4, 17)).private(),
        Event::new(company_id, "Open House", at(4, 16), at(4, 19))
            .with_location("Lobby"),
    ]
}

/// Seeds the demo company and its events through the application repositories.
pub async fn seed_demo_data(state: &AppState) -> Result<()> {
    let company = Company::new(DEMO_COMPANY_ID, "Acme, Inc.");
    state.company_repo.create_company(&company).await?;

    let week_start = Utc::now().duration_trunc(Duration::days(1))?;
    let events = generate_mock_events(&company.id, week_start);
    for event in &events {
        state.event_repo.create_event(event).await?;
    }

    tracing::info!(
        company_id = %company.id,
        events = events.len(),
        "Seeded demo data"
    );
    Ok(())
}
