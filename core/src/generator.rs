//! Synthetic workout logs for the three archetypes.
//!
//! Generation is driven entirely by the caller's RNG, so a seeded
//! `StdRng` reproduces the same log row for row.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::archetype::Archetype;
use crate::model::set_record::RawRow;
use crate::time::format_log_timestamp;

/// (exercise, base reps, base weight in kg)
type Lift = (&'static str, u32, f64);

struct Program {
    weeks: u32,
    /// (exercise, reps, weight, note on every set of the first session)
    exercises: &'static [(&'static str, u32, f64, &'static str)],
}

const HOPPER_PROGRAMS: &[Program] = &[
    // StrongLifts 5x5
    Program {
        weeks: 4,
        exercises: &[
            ("Barbell Back Squat", 5, 60.0, "5x5 program"),
            ("Barbell Bench Press", 5, 45.0, ""),
            ("Bent Over Barbell Row", 5, 40.0, ""),
        ],
    },
    // Push/pull/legs
    Program {
        weeks: 5,
        exercises: &[
            ("Barbell Bench Press", 10, 50.0, "Switched to PPL"),
            ("Dumbbell Incline Bench Press", 12, 20.0, ""),
            ("Cable Chest Fly", 12, 30.0, ""),
            ("Dumbbell Lateral Raise", 15, 8.0, ""),
        ],
    },
    // Upper/lower
    Program {
        weeks: 6,
        exercises: &[
            ("Barbell Bench Press", 10, 52.5, "Back to basics?"),
            ("Bent Over Barbell Row", 10, 45.0, ""),
            ("Dumbbell Shoulder Press", 12, 18.0, ""),
            ("Dip", 12, 0.0, ""),
        ],
    },
    // Full body
    Program {
        weeks: 4,
        exercises: &[
            ("Barbell Back Squat", 8, 70.0, "Trying full body 3x"),
            ("Barbell Bench Press", 8, 55.0, ""),
            ("Barbell Deadlift", 5, 90.0, ""),
            ("Pull Up", 8, 0.0, ""),
        ],
    },
];

const DOUBT_UPPER: &[Lift] = &[
    ("Barbell Bench Press", 10, 50.0),
    ("Incline Dumbbell Bench Press", 12, 18.0),
    ("Cable Chest Fly", 15, 25.0),
    ("Dumbbell Shoulder Press", 12, 16.0),
    ("Dumbbell Lateral Raise", 15, 8.0),
    ("Cable Triceps Pushdown", 15, 25.0),
];

const DOUBT_LOWER: &[Lift] = &[
    ("Barbell Back Squat", 10, 70.0),
    ("Leg Press", 15, 120.0),
    ("Romanian Deadlift", 12, 40.0),
    ("Leg Curl", 15, 35.0),
    ("Leg Extension", 15, 40.0),
    ("Standing Calf Raise", 15, 70.0),
];

const DOUBT_BACK: &[Lift] = &[
    ("Barbell Deadlift", 8, 80.0),
    ("Bent Over Barbell Row", 12, 40.0),
    ("Lat Pulldown", 15, 40.0),
    ("Seated Cable Row", 15, 35.0),
    ("Barbell Curl", 12, 15.0),
    ("Hammer Curl", 12, 12.0),
];

const HOPPER_NOTES: &[&str] = &["", "", "", "Should I do more sets?", "Is this enough?"];

const DOUBT_NOTES: &[&str] = &[
    "Should I do one more set?",
    "Is 5 sets enough?",
    "Better safe than sorry",
    "Did I do enough volume?",
    "Extra set to be sure",
    "",
];

const EFFICIENT_UPPER: &[Lift] = &[
    ("Barbell Bench Press", 10, 50.0),
    ("Bent Over Barbell Row", 10, 40.0),
    ("Dumbbell Shoulder Press", 12, 16.0),
    ("Dip", 12, 0.0),
];

const EFFICIENT_LOWER: &[Lift] = &[
    ("Barbell Back Squat", 8, 65.0),
    ("Romanian Deadlift", 10, 45.0),
    ("Leg Press", 12, 130.0),
    ("Standing Calf Raise", 15, 70.0),
];

const EFFICIENT_BACK: &[Lift] = &[
    ("Barbell Deadlift", 8, 85.0),
    ("Pull Up", 8, 0.0),
    ("Leg Curl", 12, 40.0),
    ("Barbell Curl", 10, 18.0),
];

const GENERATED_YEAR: i32 = 2025;

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedSet {
    pub at: NaiveDateTime,
    pub exercise: &'static str,
    pub reps: u32,
    pub weight_kg: f64,
    pub is_warmup: bool,
    pub note: &'static str,
}

impl GeneratedSet {
    fn warmup(
        at: NaiveDateTime,
        exercise: &'static str,
        reps: u32,
        weight_kg: f64,
        note: &'static str,
    ) -> Self {
        Self { at, exercise, reps, weight_kg, is_warmup: true, note }
    }

    fn working(
        at: NaiveDateTime,
        exercise: &'static str,
        reps: u32,
        weight_kg: f64,
        note: &'static str,
    ) -> Self {
        Self { at, exercise, reps, weight_kg, is_warmup: false, note }
    }

    /// Dumbbell movements log the weight of one hand.
    pub fn multiplier(&self) -> f64 {
        if self.exercise.contains("Dumbbell") {
            2.0
        } else {
            1.0
        }
    }

    pub fn to_row(&self) -> RawRow {
        RawRow {
            date: format_log_timestamp(self.at),
            exercise: self.exercise.to_string(),
            reps: self.reps.to_string(),
            weight: format_decimal(self.weight_kg),
            duration: format_decimal(0.0),
            distance: format_decimal(0.0),
            incline: format_decimal(0.0),
            resistance: format_decimal(0.0),
            is_warmup: self.is_warmup.to_string(),
            note: self.note.to_string(),
            multiplier: format_decimal(self.multiplier()),
        }
    }
}

fn format_decimal(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

fn start_at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .unwrap_or_default()
}

fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, choices: &[T], fallback: T) -> T {
    choices.choose(rng).copied().unwrap_or(fallback)
}

pub fn generate_sets<R: Rng + ?Sized>(archetype: Archetype, rng: &mut R) -> Vec<GeneratedSet> {
    match archetype {
        Archetype::Overwhelmed => program_hopper(rng),
        Archetype::SelfDoubt => volume_addict(rng),
        Archetype::TimeConstrained => efficient_trainer(rng),
    }
}

pub fn generate<R: Rng + ?Sized>(archetype: Archetype, rng: &mut R) -> Vec<RawRow> {
    generate_sets(archetype, rng).iter().map(GeneratedSet::to_row).collect()
}

/// Irregular 1-3 sessions a week, switching programs every few weeks and
/// occasionally skipping a week.
fn program_hopper<R: Rng + ?Sized>(rng: &mut R) -> Vec<GeneratedSet> {
    let mut sets = Vec::new();
    let mut current = start_at(GENERATED_YEAR, 1, 1, 18, 30);
    let mut program_idx = 0;

    while current.year() == GENERATED_YEAR {
        let program = &HOPPER_PROGRAMS[program_idx % HOPPER_PROGRAMS.len()];

        for _ in 0..program.weeks {
            let sessions = pick(rng, &[2, 2, 3, 3, 3, 1], 2);
            for _ in 0..sessions {
                if current.year() > GENERATED_YEAR {
                    break;
                }
                for &(exercise, reps, weight, note) in program.exercises {
                    sets.push(GeneratedSet::warmup(current, exercise, 8, weight * 0.6, note));
                    let working_sets = pick(rng, &[2, 3], 2);
                    for s in 0..working_sets {
                        let rep_delta = pick(rng, &[-1, 0, 1], 0);
                        let note = pick(rng, HOPPER_NOTES, "");
                        sets.push(GeneratedSet::working(
                            current,
                            exercise,
                            reps.saturating_add_signed(rep_delta),
                            weight + f64::from(s) * 2.5,
                            note,
                        ));
                    }
                }
                current += Duration::days(pick(rng, &[2, 3, 3, 4], 3));
            }
            if rng.gen::<f64>() < 0.15 {
                current += Duration::days(7);
            }
        }
        program_idx += 1;
    }

    sets
}

/// Four sessions per rotation, every other day, with two warmups and five or
/// six working sets for everything.
fn volume_addict<R: Rng + ?Sized>(rng: &mut R) -> Vec<GeneratedSet> {
    let rotation = [DOUBT_UPPER, DOUBT_LOWER, DOUBT_BACK, DOUBT_LOWER];
    let mut sets = Vec::new();
    let mut current = start_at(GENERATED_YEAR, 1, 2, 6, 0);
    let mut session = 0;

    while current.year() == GENERATED_YEAR {
        for &(exercise, base_reps, base_weight) in rotation[session % rotation.len()] {
            sets.push(GeneratedSet::warmup(current, exercise, 12, base_weight * 0.5, ""));
            sets.push(GeneratedSet::warmup(current, exercise, 10, base_weight * 0.7, ""));

            let working_sets = pick(rng, &[5, 5, 6, 6], 5);
            for s in 0..working_sets {
                let note = if s >= 3 { pick(rng, DOUBT_NOTES, "") } else { "" };
                sets.push(GeneratedSet::working(
                    current,
                    exercise,
                    base_reps.saturating_sub(s),
                    base_weight + f64::from(s) * 2.5,
                    note,
                ));
            }
        }
        session += 1;
        current += Duration::days(2);
    }

    sets
}

/// Three short sessions a week with one warmup, two working sets and a small
/// weekly weight increase.
fn efficient_trainer<R: Rng + ?Sized>(_rng: &mut R) -> Vec<GeneratedSet> {
    let mut sets = Vec::new();
    let mut current = start_at(GENERATED_YEAR, 1, 6, 6, 30);
    let mut week_num: u32 = 0;

    while current.year() == GENERATED_YEAR {
        let order = if week_num % 2 == 0 {
            [EFFICIENT_UPPER, EFFICIENT_LOWER, EFFICIENT_BACK]
        } else {
            [EFFICIENT_LOWER, EFFICIENT_BACK, EFFICIENT_UPPER]
        };

        for lifts in order {
            if current.year() > GENERATED_YEAR {
                break;
            }
            for &(exercise, base_reps, base_weight) in lifts {
                sets.push(GeneratedSet::warmup(current, exercise, 10, base_weight * 0.6, ""));
                let weight = base_weight + f64::from(week_num) * 1.25;
                for _ in 0..2 {
                    sets.push(GeneratedSet::working(current, exercise, base_reps, weight, ""));
                }
            }
            current += Duration::days(2);
        }
        week_num += 1;
    }

    sets
}
