//! Shared test data.

use crate::models::{Company, UserRecord};

/// `n` users with ids `1..=n`, alternating gender starting with "male".
pub(crate) fn sample_users(n: u32) -> Vec<UserRecord> {
    (1..=n)
        .map(|id| UserRecord {
            id,
            first_name: format!("First{id}"),
            last_name: format!("Last{id}"),
            email: format!("user{id}@example.com"),
            age: 20 + id % 40,
            height: 150.0 + f64::from(id % 50),
            weight: 50.0 + f64::from(id % 40),
            gender: if id % 2 == 1 { "male" } else { "female" }.to_string(),
            blood_group: ["A+", "O-", "B+"][(id % 3) as usize].to_string(),
            company: Company {
                name: format!("Company {id}"),
                ..Default::default()
            },
            ..Default::default()
        })
        .collect()
}
