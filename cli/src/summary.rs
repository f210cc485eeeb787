use chrono::NaiveDate;
use liftlog_core::service::frequency::{
    date_range, format_frequency, muscle_frequency_per_week, trained_muscles, FrequencyBand,
};
use liftlog_core::{ExerciseSummary, SummaryDocument};
use tabled::settings::object::Rows;
use tabled::settings::{Color, Modify, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct WeekRow {
    #[tabled(rename = "Week of")]
    week: String,
    #[tabled(rename = "Max (kg)")]
    max: String,
    #[tabled(rename = "Sets")]
    sets: u32,
    #[tabled(rename = "Max reps")]
    max_reps: u32,
    #[tabled(rename = "Load")]
    load: String,
}

#[derive(Tabled)]
struct FrequencyRow {
    #[tabled(rename = "Muscle")]
    muscle: String,
    #[tabled(rename = "Sessions / week")]
    frequency: String,
    #[tabled(rename = "Status")]
    band: String,
}

fn styled(mut table: Table) -> Table {
    table
        .with(Style::modern())
        .with(Modify::new(Rows::first()).with(Color::FG_CYAN));
    table
}

pub fn muscle_label(exercise: &ExerciseSummary) -> String {
    if exercise.secondary.is_empty() {
        exercise.muscle.clone()
    } else {
        format!("{}; {}", exercise.muscle, exercise.secondary.join(", "))
    }
}

pub fn show_summary(document: &SummaryDocument, exercise_filter: Option<&str>) {
    let selected: Vec<_> = document
        .exercises
        .iter()
        .filter(|(name, _)| {
            exercise_filter.map_or(true, |f| name.to_lowercase().contains(&f.to_lowercase()))
        })
        .collect();

    if selected.is_empty() {
        println!("No matching exercises found.");
        return;
    }

    for (name, exercise) in selected {
        println!(
            "\n\x1b[1;36m{}\x1b[0m ({}) {} weeks, {} sets",
            name,
            muscle_label(exercise),
            exercise.weeks.len(),
            exercise.total_sets()
        );

        let rows: Vec<WeekRow> = exercise
            .weeks
            .iter()
            .map(|(week, w)| WeekRow {
                week: week.clone(),
                max: format!("{:.1}", w.max),
                sets: w.sets,
                max_reps: w.max_reps,
                load: format!("{:.1}", w.load),
            })
            .collect();

        println!("{}", styled(Table::new(rows)));
    }
}

pub fn show_frequency(document: &SummaryDocument, since: NaiveDate) {
    let Some((oldest, newest)) = date_range(document) else {
        println!("No weeks recorded.");
        return;
    };
    println!("Weeks {} to {} (counting from {})", oldest, newest, since);

    let rows: Vec<FrequencyRow> = trained_muscles(document)
        .into_iter()
        .map(|muscle| {
            let value = muscle_frequency_per_week(document, &muscle, since);
            FrequencyRow {
                frequency: format_frequency(value, 1),
                band: FrequencyBand::from_value(value).label().to_string(),
                muscle,
            }
        })
        .collect();

    println!("{}", styled(Table::new(rows)));
}
