//! # Chart categories and derived series
//!
//! The chart panel plots one user field at a time. [`ChartCategory`] is the
//! fixed list of fields it can pick from, split by kind so a numeric category
//! can only ever read a numeric field:
//!
//! | Category | Field | Kind |
//! |----------|-------|------|
//! | Age | `age` | numeric |
//! | Height | `height` | numeric |
//! | Weight | `weight` | numeric |
//! | Blood Group | `bloodGroup` | categorical |
//! | Eye Color | `eyeColor` | categorical |
//! | Gender | `gender` | categorical |
//! | University | `university` | categorical |
//!
//! [`derive_series`] turns a collection into [`ChartPoint`]s: numeric fields are
//! plotted per user, categorical fields are counted per distinct value in
//! first-seen order.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::models::UserRecord;

/// Colors cycled through by charts that color each point.
pub const PALETTE: [&str; 7] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884d8", "#82ca9d", "#ffc658",
];

pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryKind {
    Numeric,
    Categorical,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NumericField {
    Age,
    Height,
    Weight,
}

impl NumericField {
    pub fn read(self, user: &UserRecord) -> f64 {
        match self {
            NumericField::Age => f64::from(user.age),
            NumericField::Height => user.height,
            NumericField::Weight => user.weight,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoricalField {
    BloodGroup,
    EyeColor,
    Gender,
    University,
}

impl CategoricalField {
    pub fn read(self, user: &UserRecord) -> &str {
        match self {
            CategoricalField::BloodGroup => &user.blood_group,
            CategoricalField::EyeColor => &user.eye_color,
            CategoricalField::Gender => &user.gender,
            CategoricalField::University => &user.university,
        }
    }
}

/// A selectable chart field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartCategory {
    Numeric(NumericField),
    Categorical(CategoricalField),
}

impl Default for ChartCategory {
    fn default() -> Self {
        ChartCategory::Numeric(NumericField::Age)
    }
}

impl ChartCategory {
    /// Every category, in the order the selector lists them.
    pub const ALL: [ChartCategory; 7] = [
        ChartCategory::Numeric(NumericField::Age),
        ChartCategory::Numeric(NumericField::Height),
        ChartCategory::Numeric(NumericField::Weight),
        ChartCategory::Categorical(CategoricalField::BloodGroup),
        ChartCategory::Categorical(CategoricalField::EyeColor),
        ChartCategory::Categorical(CategoricalField::Gender),
        ChartCategory::Categorical(CategoricalField::University),
    ];

    pub fn kind(&self) -> CategoryKind {
        match self {
            ChartCategory::Numeric(_) => CategoryKind::Numeric,
            ChartCategory::Categorical(_) => CategoryKind::Categorical,
        }
    }

    /// JSON field name, also used as the `<option>` value.
    pub fn field(&self) -> &'static str {
        match self {
            ChartCategory::Numeric(NumericField::Age) => "age",
            ChartCategory::Numeric(NumericField::Height) => "height",
            ChartCategory::Numeric(NumericField::Weight) => "weight",
            ChartCategory::Categorical(CategoricalField::BloodGroup) => "bloodGroup",
            ChartCategory::Categorical(CategoricalField::EyeColor) => "eyeColor",
            ChartCategory::Categorical(CategoricalField::Gender) => "gender",
            ChartCategory::Categorical(CategoricalField::University) => "university",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartCategory::Numeric(NumericField::Age) => "Age",
            ChartCategory::Numeric(NumericField::Height) => "Height",
            ChartCategory::Numeric(NumericField::Weight) => "Weight",
            ChartCategory::Categorical(CategoricalField::BloodGroup) => "Blood Group",
            ChartCategory::Categorical(CategoricalField::EyeColor) => "Eye Color",
            ChartCategory::Categorical(CategoricalField::Gender) => "Gender",
            ChartCategory::Categorical(CategoricalField::University) => "University",
        }
    }

    pub fn from_field(field: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.field() == field)
    }
}

/// One plotted point.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Shape `users` into the series for `category`.
pub fn derive_series(users: &[UserRecord], category: ChartCategory) -> Vec<ChartPoint> {
    match category {
        ChartCategory::Numeric(field) => users
            .iter()
            .map(|user| ChartPoint::new(user.full_name(), field.read(user)))
            .collect(),
        ChartCategory::Categorical(field) => count_by(users, field),
    }
}

fn count_by(users: &[UserRecord], field: CategoricalField) -> Vec<ChartPoint> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut points: Vec<ChartPoint> = Vec::new();
    for user in users {
        let value = field.read(user);
        match slots.get(value) {
            Some(&slot) => points[slot].value += 1.0,
            None => {
                slots.insert(value, points.len());
                points.push(ChartPoint::new(value, 1.0));
            }
        }
    }
    points
}

/// Largest value in a series, at least 1 so it can divide.
pub fn series_max(points: &[ChartPoint]) -> f64 {
    points.iter().map(|p| p.value).fold(1.0, f64::max)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Radial,
    Radar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Radial,
        ChartKind::Radar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Radial => "radial",
            ChartKind::Radar => "radar",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar Chart",
            ChartKind::Line => "Line Chart",
            ChartKind::Radial => "Radial Chart",
            ChartKind::Radar => "Radar Chart",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown chart kind {0:?}")]
pub struct UnknownChartKind(pub String);

impl FromStr for ChartKind {
    type Err = UnknownChartKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownChartKind(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::sample_users;

    fn with_gender(id: u32, gender: &str) -> UserRecord {
        UserRecord {
            id,
            gender: gender.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_numeric_series_one_point_per_user() {
        let users = sample_users(25);
        let series = derive_series(&users, ChartCategory::Numeric(NumericField::Age));
        assert_eq!(series.len(), users.len());
        assert_eq!(series[0].name, "First1 Last1");
        assert_eq!(series[0].value, f64::from(users[0].age));

        let heights = derive_series(&users, ChartCategory::Numeric(NumericField::Height));
        assert_eq!(heights[4].value, users[4].height);
    }

    #[test]
    fn test_categorical_counts_sum_to_collection() {
        let users = sample_users(208);
        for category in ChartCategory::ALL {
            if category.kind() != CategoryKind::Categorical {
                continue;
            }
            let series = derive_series(&users, category);
            let total: f64 = series.iter().map(|p| p.value).sum();
            assert_eq!(total, 208.0, "{}", category.label());
        }

        let groups = derive_series(
            &users,
            ChartCategory::Categorical(CategoricalField::BloodGroup),
        );
        assert_eq!(groups.len(), 3);
    }

    #[test]
    fn test_gender_histogram_first_seen_order() {
        let mut users: Vec<UserRecord> = Vec::new();
        users.push(with_gender(1, "male"));
        for id in 2..=109 {
            users.push(with_gender(id, "female"));
        }
        for id in 110..=208 {
            users.push(with_gender(id, "male"));
        }

        let series = derive_series(&users, ChartCategory::Categorical(CategoricalField::Gender));
        assert_eq!(
            series,
            vec![ChartPoint::new("male", 100.0), ChartPoint::new("female", 108.0)]
        );
    }

    #[test]
    fn test_empty_values_form_their_own_bucket() {
        let users = vec![with_gender(1, ""), with_gender(2, "female"), with_gender(3, "")];
        let series = derive_series(&users, ChartCategory::Categorical(CategoricalField::Gender));
        assert_eq!(series, vec![ChartPoint::new("", 2.0), ChartPoint::new("female", 1.0)]);
    }

    #[test]
    fn test_empty_collection() {
        for category in ChartCategory::ALL {
            assert!(derive_series(&[], category).is_empty());
        }
    }

    #[test]
    fn test_category_catalogue() {
        assert_eq!(ChartCategory::default().field(), "age");
        assert_eq!(
            ChartCategory::from_field("eyeColor"),
            Some(ChartCategory::Categorical(CategoricalField::EyeColor))
        );
        assert_eq!(ChartCategory::from_field("ssn"), None);

        let numeric = ChartCategory::ALL
            .iter()
            .filter(|c| c.kind() == CategoryKind::Numeric)
            .count();
        assert_eq!(numeric, 3);
    }

    #[test]
    fn test_chart_kind_parsing() {
        assert_eq!("bar".parse::<ChartKind>(), Ok(ChartKind::Bar));
        assert_eq!("radar".parse::<ChartKind>(), Ok(ChartKind::Radar));
        assert_eq!(
            "pie".parse::<ChartKind>(),
            Err(UnknownChartKind("pie".to_string()))
        );
        assert!("Bar".parse::<ChartKind>().is_err());
        assert_eq!(ChartKind::Radial.to_string(), "radial");
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_color(0), "#0088FE");
        assert_eq!(palette_color(6), "#ffc658");
        assert_eq!(palette_color(7), "#0088FE");
    }

    #[test]
    fn test_series_max_floor() {
        assert_eq!(series_max(&[]), 1.0);
        assert_eq!(series_max(&[ChartPoint::new("a", 0.5)]), 1.0);
        assert_eq!(
            series_max(&[ChartPoint::new("a", 3.0), ChartPoint::new("b", 9.0)]),
            9.0
        );
    }
}
